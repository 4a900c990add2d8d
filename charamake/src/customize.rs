use crate::{
    enums::{CustomizeIndex, EquipSlot, Gender, Race, SubRace},
    error::CharaMakeError,
};
use binrw::{binrw, BinRead, BinWrite};
use std::{
    fmt,
    io::Cursor,
    ops::{Index, IndexMut},
    str::FromStr,
};

pub(crate) fn decode_hex<const N: usize>(text: &str) -> Result<[u8; N], CharaMakeError> {
    let text = text.trim();
    let mut bytes = [0u8; N];
    hex::decode_to_slice(text, &mut bytes).map_err(|e| match e {
        hex::FromHexError::InvalidHexCharacter { index, .. } => CharaMakeError::HexDigit(index),
        hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
            CharaMakeError::HexLength {
                expected: N * 2,
                actual: text.len(),
            }
        }
    })?;
    Ok(bytes)
}

/// Read/write access to the raw customization bytes of an appearance record.
pub trait CustomizeAccess {
    fn get(&self, index: CustomizeIndex) -> u8;
    fn set(&mut self, index: CustomizeIndex, value: u8);

    fn race(&self) -> Race {
        Race::from_byte(self.get(CustomizeIndex::Race)).unwrap_or_default()
    }

    fn clan(&self) -> SubRace {
        SubRace::from_byte(self.get(CustomizeIndex::Clan)).unwrap_or_default()
    }

    fn gender(&self) -> Gender {
        Gender::from_customize_byte(self.get(CustomizeIndex::Gender))
    }

    fn set_clan(&mut self, clan: SubRace) {
        self.set(CustomizeIndex::Race, clan.race() as u8);
        self.set(CustomizeIndex::Clan, clan as u8);
    }

    fn set_gender(&mut self, gender: Gender) {
        self.set(CustomizeIndex::Gender, gender.customize_byte());
    }
}

/// Read/write access to the model slots of an appearance record.
pub trait EquipAccess {
    fn armor(&self, slot: EquipSlot) -> CharacterArmor;
    fn set_armor(&mut self, slot: EquipSlot, armor: CharacterArmor);
}

/// The 26 customization bytes of a character, one per [`CustomizeIndex`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Customize([u8; CustomizeIndex::TOTAL]);

impl Customize {
    pub fn from_bytes(bytes: [u8; CustomizeIndex::TOTAL]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; CustomizeIndex::TOTAL] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl Default for Customize {
    fn default() -> Self {
        let mut customize = Self([0; CustomizeIndex::TOTAL]);
        customize.set_clan(SubRace::Midlander);
        customize.set_gender(Gender::Male);
        customize[CustomizeIndex::BodyType] = 1;
        customize[CustomizeIndex::Height] = 50;
        customize[CustomizeIndex::Face] = 1;
        customize[CustomizeIndex::Hairstyle] = 1;
        customize
    }
}

impl Index<CustomizeIndex> for Customize {
    type Output = u8;

    fn index(&self, index: CustomizeIndex) -> &u8 {
        &self.0[index.ordinal()]
    }
}

impl IndexMut<CustomizeIndex> for Customize {
    fn index_mut(&mut self, index: CustomizeIndex) -> &mut u8 {
        &mut self.0[index.ordinal()]
    }
}

impl CustomizeAccess for Customize {
    fn get(&self, index: CustomizeIndex) -> u8 {
        self[index]
    }

    fn set(&mut self, index: CustomizeIndex, value: u8) {
        self[index] = value;
    }
}

impl FromStr for Customize {
    type Err = CharaMakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_hex(s).map(Self)
    }
}

impl fmt::Debug for Customize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("Customize({})", self.to_hex()))
    }
}

#[binrw]
#[brw(little)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharacterArmor {
    pub set: u16,
    pub variant: u8,
    pub stain: u8,
}

impl CharacterArmor {
    pub fn new(set: u16, variant: u8, stain: u8) -> Self {
        Self {
            set,
            variant,
            stain,
        }
    }
}

/// Model slots in [`EquipSlot::EQDP`] order, 4 bytes each.
#[binrw]
#[brw(little)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Equipment {
    slots: [CharacterArmor; 10],
}

impl Equipment {
    pub const SIZE: usize = 40;

    pub fn from_bytes(bytes: &[u8; Self::SIZE]) -> Result<Self, CharaMakeError> {
        Self::read(&mut Cursor::new(bytes)).map_err(CharaMakeError::RecordRead)
    }

    pub fn to_bytes(&self) -> Result<[u8; Self::SIZE], CharaMakeError> {
        let mut bytes = [0u8; Self::SIZE];
        self.write(&mut Cursor::new(&mut bytes[..]))
            .map_err(CharaMakeError::RecordWrite)?;
        Ok(bytes)
    }

    pub fn to_hex(&self) -> Result<String, CharaMakeError> {
        self.to_bytes().map(hex::encode)
    }
}

impl Index<EquipSlot> for Equipment {
    type Output = CharacterArmor;

    fn index(&self, slot: EquipSlot) -> &CharacterArmor {
        &self.slots[slot as usize]
    }
}

impl IndexMut<EquipSlot> for Equipment {
    fn index_mut(&mut self, slot: EquipSlot) -> &mut CharacterArmor {
        &mut self.slots[slot as usize]
    }
}

impl EquipAccess for Equipment {
    fn armor(&self, slot: EquipSlot) -> CharacterArmor {
        self[slot]
    }

    fn set_armor(&mut self, slot: EquipSlot, armor: CharacterArmor) {
        self[slot] = armor;
    }
}

impl FromStr for Equipment {
    type Err = CharaMakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(&decode_hex(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_midlander_male() {
        let customize = Customize::default();
        assert_eq!(customize.race(), Race::Hyur);
        assert_eq!(customize.clan(), SubRace::Midlander);
        assert_eq!(customize.gender(), Gender::Male);
        assert_eq!(customize[CustomizeIndex::Height], 50);
    }

    #[test]
    fn customize_hex() {
        let mut customize = Customize::default();
        customize.set_clan(SubRace::Veena);
        customize.set_gender(Gender::FemaleNpc);
        customize[CustomizeIndex::FacePaintColor] = 0xab;

        let hex = customize.to_hex();
        assert_eq!(hex.len(), 52);
        assert!(hex.starts_with("0801"));
        assert!(hex.ends_with("ab"));
        assert_eq!(hex.parse::<Customize>().unwrap(), customize);
    }

    #[test]
    fn customize_hex_errors() {
        assert!(matches!(
            "0102".parse::<Customize>(),
            Err(CharaMakeError::HexLength { expected: 52, actual: 4 })
        ));
        let bad = format!("{}zz", "0".repeat(50));
        assert!(matches!(bad.parse::<Customize>(), Err(CharaMakeError::HexDigit(50))));
        let bad = format!("{}g", "0".repeat(51));
        assert!(matches!(bad.parse::<Customize>(), Err(CharaMakeError::HexDigit(51))));
        assert!(matches!(
            "0".repeat(53).parse::<Customize>(),
            Err(CharaMakeError::HexLength { expected: 52, actual: 53 })
        ));
    }

    #[test]
    fn customize_hex_accepts_uppercase_and_padding() {
        let text = format!("  {}AB\n", "0".repeat(50));
        let customize: Customize = text.parse().unwrap();
        assert_eq!(customize[CustomizeIndex::FacePaintColor], 0xab);
        assert_eq!(customize.to_hex(), format!("{}ab", "0".repeat(50)));
    }

    #[test]
    fn equipment_layout() {
        let mut equip = Equipment::default();
        equip[EquipSlot::Body] = CharacterArmor::new(0x1234, 5, 6);
        equip.set_armor(EquipSlot::LFinger, CharacterArmor::new(1, 2, 3));

        let bytes = equip.to_bytes().unwrap();
        assert_eq!(&bytes[4..8], &[0x34, 0x12, 5, 6]);
        assert_eq!(&bytes[36..40], &[1, 0, 2, 3]);

        let parsed: Equipment = equip.to_hex().unwrap().parse().unwrap();
        assert_eq!(parsed, equip);
        assert_eq!(parsed.armor(EquipSlot::Body).set, 0x1234);
    }
}
