use crate::{
    customize::{CharacterArmor, CustomizeAccess, EquipAccess},
    enums::{CustomizeIndex, EquipSlot, Gender, Race, SubRace},
    error::CharaMakeError,
    registry::CatalogProvider,
};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GearSubstitute {
    pub set: u16,
    pub variant: u8,
}

/// Decides whether an equipped model can be worn by a race and gender.
pub trait GearRestriction {
    /// `None` if the item is allowed, otherwise a legal replacement.
    fn resolve(
        &self,
        set: u16,
        variant: u8,
        slot: EquipSlot,
        race: Race,
        gender: Gender,
    ) -> Option<GearSubstitute>;
}

/// Allows every item.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unrestricted;

impl GearRestriction for Unrestricted {
    fn resolve(&self, _: u16, _: u8, _: EquipSlot, _: Race, _: Gender) -> Option<GearSubstitute> {
        None
    }
}

/// Categories assigned directly or left alone when clan or gender change.
fn is_structural(id: CustomizeIndex) -> bool {
    matches!(
        id,
        CustomizeIndex::Race
            | CustomizeIndex::Clan
            | CustomizeIndex::BodyType
            | CustomizeIndex::Gender
            | CustomizeIndex::FacialFeaturesTattoos
            | CustomizeIndex::HighlightsOnFlag
            | CustomizeIndex::Face
    )
}

/// Re-validates appearance records against the catalog of their clan and gender.
pub struct FixUp<'a, P: ?Sized, G: ?Sized> {
    provider: &'a P,
    gear: &'a G,
}

impl<'a, P, G> FixUp<'a, P, G>
where
    P: CatalogProvider + ?Sized,
    G: GearRestriction + ?Sized,
{
    pub fn new(provider: &'a P, gear: &'a G) -> Self {
        Self { provider, gear }
    }

    /// Moves a record to `clan` and `gender` and repairs every customization
    /// and equipment slot that is not legal there.
    ///
    /// Races with a single gender override the requested one. Returns the
    /// clan and gender actually applied. On error the record is untouched.
    pub fn apply<C, E>(
        &self,
        customize: &mut C,
        equip: Option<&mut E>,
        clan: SubRace,
        gender: Gender,
    ) -> Result<(SubRace, Gender), CharaMakeError>
    where
        C: CustomizeAccess,
        E: EquipAccess,
    {
        let race = clan.race();
        let gender = race.single_gender().unwrap_or_else(|| gender.to_base());
        let catalog = self.provider.catalog(clan, gender)?;

        let mut repairs = Vec::new();
        for id in CustomizeIndex::ALL.into_iter().filter(|id| !is_structural(*id)) {
            let current = customize.get(id);
            let repaired = if catalog.count(id)? == 0 {
                0
            } else if catalog.lookup(id, current)?.is_some() {
                continue;
            } else {
                catalog.option_at(id, 0)?.value()
            };

            if repaired != current {
                debug!(customization = %id, from = current, to = repaired, "repairing customization");
                repairs.push((id, repaired));
            }
        }

        customize.set_clan(clan);
        customize.set_gender(gender);
        for (id, value) in repairs {
            customize.set(id, value);
        }

        if let Some(equip) = equip {
            for slot in EquipSlot::EQDP {
                let item = equip.armor(slot);
                if let Some(sub) = self.gear.resolve(item.set, item.variant, slot, race, gender) {
                    debug!(%slot, set = item.set, variant = item.variant, new_set = sub.set, new_variant = sub.variant, "replacing restricted gear");
                    equip.set_armor(slot, CharacterArmor::new(sub.set, sub.variant, item.stain));
                }
            }
        }

        Ok((clan, gender))
    }

    /// Returns `false` without touching anything if the clan is unchanged.
    pub fn change_clan<C, E>(
        &self,
        customize: &mut C,
        equip: Option<&mut E>,
        clan: SubRace,
    ) -> Result<bool, CharaMakeError>
    where
        C: CustomizeAccess,
        E: EquipAccess,
    {
        if customize.clan() == clan {
            return Ok(false);
        }
        let gender = customize.gender();
        self.apply(customize, equip, clan, gender)?;
        Ok(true)
    }

    /// Returns `false` if the gender is unchanged or the race cannot take it.
    pub fn change_gender<C, E>(
        &self,
        customize: &mut C,
        equip: Option<&mut E>,
        gender: Gender,
    ) -> Result<bool, CharaMakeError>
    where
        C: CustomizeAccess,
        E: EquipAccess,
    {
        let gender = gender.to_base();
        if customize.gender() == gender || !customize.race().supports(gender) {
            return Ok(false);
        }
        let clan = customize.clan();
        self.apply(customize, equip, clan, gender)?;
        Ok(true)
    }
}
