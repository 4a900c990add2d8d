use charamake::{EquipSlot, Gender, GearRestriction, GearSubstitute, Race, SubRace};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs, io::Read, path::Path};

#[derive(Debug, Deserialize)]
struct RestrictedItem {
    slot: EquipSlot,
    set: u16,
    variant: u8,
    race: Race,
    gender: Gender,
    replacement_set: u16,
    replacement_variant: u8,
}

/// Gear that a race and gender cannot wear, with the model shown instead.
#[derive(Debug, Default)]
pub struct RestrictedGearTable {
    items: HashMap<(EquipSlot, u16, u8, Race, Gender), GearSubstitute>,
}

impl RestrictedGearTable {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        Self::from_json_reader(fs::File::open(path)?)
    }

    pub fn from_json_reader(reader: impl Read) -> anyhow::Result<Self> {
        let items: Vec<RestrictedItem> = serde_json::from_reader(reader)?;
        let items = items
            .into_iter()
            .map(|i| {
                let key = (i.slot, i.set, i.variant, i.race, i.gender.to_base());
                let sub = GearSubstitute {
                    set: i.replacement_set,
                    variant: i.replacement_variant,
                };
                (key, sub)
            })
            .collect();
        Ok(Self { items })
    }
}

impl GearRestriction for RestrictedGearTable {
    fn resolve(
        &self,
        set: u16,
        variant: u8,
        slot: EquipSlot,
        race: Race,
        gender: Gender,
    ) -> Option<GearSubstitute> {
        self.items
            .get(&(slot, set, variant, race, gender.to_base()))
            .copied()
    }
}

#[derive(Debug, Deserialize)]
pub struct BatchRecord {
    pub customize: Box<str>,
    #[serde(default)]
    pub equip: Option<Box<str>>,
    pub clan: SubRace,
    pub gender: Gender,
}

#[derive(Debug, Serialize)]
pub struct BatchResult {
    pub customize: String,
    pub equip: Option<String>,
    pub clan_name: &'static str,
}
