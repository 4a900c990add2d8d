use crate::error::CharaMakeError;
use binrw::binrw;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

fn parse_by_name<T: Copy>(
    kind: &'static str,
    all: &[T],
    name_of: impl Fn(T) -> &'static str,
    s: &str,
) -> Result<T, CharaMakeError> {
    all.iter()
        .copied()
        .find(|v| name_of(*v).eq_ignore_ascii_case(s.trim()))
        .ok_or_else(|| CharaMakeError::UnknownName {
            kind,
            name: s.into(),
        })
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Race {
    #[default]
    Unknown = 0,
    Hyur,
    Elezen,
    Lalafell,
    Miqote,
    Roegadyn,
    AuRa,
    Hrothgar,
    Viera,
}

impl Race {
    pub const ALL: [Race; 9] = [
        Self::Unknown,
        Self::Hyur,
        Self::Elezen,
        Self::Lalafell,
        Self::Miqote,
        Self::Roegadyn,
        Self::AuRa,
        Self::Hrothgar,
        Self::Viera,
    ];

    pub fn from_byte(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Hyur => "Hyur",
            Self::Elezen => "Elezen",
            Self::Lalafell => "Lalafell",
            Self::Miqote => "Miqote",
            Self::Roegadyn => "Roegadyn",
            Self::AuRa => "AuRa",
            Self::Hrothgar => "Hrothgar",
            Self::Viera => "Viera",
        }
    }

    /// The only gender a race can be customized as, if it is restricted to one.
    pub fn single_gender(self) -> Option<Gender> {
        match self {
            Self::Hrothgar => Some(Gender::Male),
            _ => None,
        }
    }

    pub fn supports(self, gender: Gender) -> bool {
        self.single_gender()
            .map_or(true, |only| only == gender.to_base())
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Race {
    type Err = CharaMakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_by_name("race", &Self::ALL, Self::name, s)
    }
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum SubRace {
    #[default]
    Unknown = 0,
    Midlander,
    Highlander,
    Wildwood,
    Duskwight,
    Plainsfolk,
    Dunesfolk,
    SeekerOfTheSun,
    KeeperOfTheMoon,
    Seawolf,
    Hellsguard,
    Raen,
    Xaela,
    Helion,
    Lost,
    Rava,
    Veena,
}

impl SubRace {
    pub const ALL: [SubRace; 17] = [
        Self::Unknown,
        Self::Midlander,
        Self::Highlander,
        Self::Wildwood,
        Self::Duskwight,
        Self::Plainsfolk,
        Self::Dunesfolk,
        Self::SeekerOfTheSun,
        Self::KeeperOfTheMoon,
        Self::Seawolf,
        Self::Hellsguard,
        Self::Raen,
        Self::Xaela,
        Self::Helion,
        Self::Lost,
        Self::Rava,
        Self::Veena,
    ];

    /// Every playable clan, without `Unknown`.
    pub fn playable() -> impl Iterator<Item = SubRace> {
        Self::ALL.into_iter().skip(1)
    }

    pub fn from_byte(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    pub fn race(self) -> Race {
        match self {
            Self::Unknown => Race::Unknown,
            Self::Midlander | Self::Highlander => Race::Hyur,
            Self::Wildwood | Self::Duskwight => Race::Elezen,
            Self::Plainsfolk | Self::Dunesfolk => Race::Lalafell,
            Self::SeekerOfTheSun | Self::KeeperOfTheMoon => Race::Miqote,
            Self::Seawolf | Self::Hellsguard => Race::Roegadyn,
            Self::Raen | Self::Xaela => Race::AuRa,
            Self::Helion | Self::Lost => Race::Hrothgar,
            Self::Rava | Self::Veena => Race::Viera,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Midlander => "Midlander",
            Self::Highlander => "Highlander",
            Self::Wildwood => "Wildwood",
            Self::Duskwight => "Duskwight",
            Self::Plainsfolk => "Plainsfolk",
            Self::Dunesfolk => "Dunesfolk",
            Self::SeekerOfTheSun => "SeekerOfTheSun",
            Self::KeeperOfTheMoon => "KeeperOfTheMoon",
            Self::Seawolf => "Seawolf",
            Self::Hellsguard => "Hellsguard",
            Self::Raen => "Raen",
            Self::Xaela => "Xaela",
            Self::Helion => "Helion",
            Self::Lost => "Lost",
            Self::Rava => "Rava",
            Self::Veena => "Veena",
        }
    }
}

impl fmt::Display for SubRace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SubRace {
    type Err = CharaMakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_by_name("clan", &Self::ALL, Self::name, s)
    }
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Gender {
    #[default]
    Unknown = 0,
    Male,
    Female,
    MaleNpc,
    FemaleNpc,
}

impl Gender {
    pub const ALL: [Gender; 5] = [
        Self::Unknown,
        Self::Male,
        Self::Female,
        Self::MaleNpc,
        Self::FemaleNpc,
    ];

    pub fn to_base(self) -> Self {
        match self {
            Self::MaleNpc => Self::Male,
            Self::FemaleNpc => Self::Female,
            other => other,
        }
    }

    /// Decodes the gender byte of an appearance record (0 = male, 1 = female).
    pub fn from_customize_byte(value: u8) -> Self {
        match value {
            0 => Self::Male,
            1 => Self::Female,
            _ => Self::Unknown,
        }
    }

    pub fn customize_byte(self) -> u8 {
        match self.to_base() {
            Self::Female => 1,
            _ => 0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Male => "Male",
            Self::Female => "Female",
            Self::MaleNpc => "MaleNpc",
            Self::FemaleNpc => "FemaleNpc",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Gender {
    type Err = CharaMakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_by_name("gender", &Self::ALL, Self::name, s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum EquipSlot {
    Head = 0,
    Body,
    Hands,
    Legs,
    Feet,
    Ears,
    Neck,
    Wrists,
    RFinger,
    LFinger,
}

impl EquipSlot {
    /// Slots with race and gender dependent models, in appearance record order.
    pub const EQDP: [EquipSlot; 10] = [
        Self::Head,
        Self::Body,
        Self::Hands,
        Self::Legs,
        Self::Feet,
        Self::Ears,
        Self::Neck,
        Self::Wrists,
        Self::RFinger,
        Self::LFinger,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Head => "Head",
            Self::Body => "Body",
            Self::Hands => "Hands",
            Self::Legs => "Legs",
            Self::Feet => "Feet",
            Self::Ears => "Ears",
            Self::Neck => "Neck",
            Self::Wrists => "Wrists",
            Self::RFinger => "RFinger",
            Self::LFinger => "LFinger",
        }
    }
}

impl fmt::Display for EquipSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EquipSlot {
    type Err = CharaMakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_by_name("equip slot", &Self::EQDP, Self::name, s)
    }
}

/// How the character creation menu presents a customization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuKind {
    ListSelector,
    IconSelector,
    ColorPicker,
    /// Palette split into a dark half followed by a light half.
    DoubleColorPicker,
    MultiIconSelector,
    Percentage,
}

impl fmt::Display for MenuKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Customization categories, numbered by their byte offset in the appearance record.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[binrw]
#[brw(repr = u8)]
#[repr(u8)]
pub enum CustomizeIndex {
    Race = 0,
    Gender = 1,
    BodyType = 2,
    Height = 3,
    Clan = 4,
    Face = 5,
    Hairstyle = 6,
    HighlightsOnFlag = 7,
    SkinColor = 8,
    EyeColorR = 9,
    HairColor = 10,
    HighlightColor = 11,
    FacialFeaturesTattoos = 12, // bitmask over the 7 face features + tattoo
    TattooColor = 13,
    Eyebrows = 14,
    EyeColorL = 15,
    EyeShape = 16,
    Nose = 17,
    Jaw = 18,
    Mouth = 19,
    LipColor = 20,
    MuscleToneOrTailEarLength = 21,
    TailEarShape = 22,
    BustSize = 23,
    FacePaint = 24,
    FacePaintColor = 25,
}

impl CustomizeIndex {
    pub const TOTAL: usize = 26;

    pub const ALL: [CustomizeIndex; Self::TOTAL] = [
        Self::Race,
        Self::Gender,
        Self::BodyType,
        Self::Height,
        Self::Clan,
        Self::Face,
        Self::Hairstyle,
        Self::HighlightsOnFlag,
        Self::SkinColor,
        Self::EyeColorR,
        Self::HairColor,
        Self::HighlightColor,
        Self::FacialFeaturesTattoos,
        Self::TattooColor,
        Self::Eyebrows,
        Self::EyeColorL,
        Self::EyeShape,
        Self::Nose,
        Self::Jaw,
        Self::Mouth,
        Self::LipColor,
        Self::MuscleToneOrTailEarLength,
        Self::TailEarShape,
        Self::BustSize,
        Self::FacePaint,
        Self::FacePaintColor,
    ];

    pub fn from_byte(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn menu_kind(self) -> MenuKind {
        match self {
            Self::Race
            | Self::Gender
            | Self::BodyType
            | Self::Clan
            | Self::HighlightsOnFlag
            | Self::Eyebrows
            | Self::EyeShape
            | Self::Nose
            | Self::Jaw
            | Self::Mouth => MenuKind::ListSelector,
            Self::Face | Self::Hairstyle | Self::TailEarShape | Self::FacePaint => {
                MenuKind::IconSelector
            }
            Self::SkinColor
            | Self::EyeColorR
            | Self::HairColor
            | Self::HighlightColor
            | Self::TattooColor
            | Self::EyeColorL => MenuKind::ColorPicker,
            Self::LipColor | Self::FacePaintColor => MenuKind::DoubleColorPicker,
            Self::FacialFeaturesTattoos => MenuKind::MultiIconSelector,
            Self::Height | Self::MuscleToneOrTailEarLength | Self::BustSize => {
                MenuKind::Percentage
            }
        }
    }

    /// Fallback label when catalog data does not carry a localized one.
    pub fn label(self) -> &'static str {
        match self {
            Self::Race => "Race",
            Self::Gender => "Gender",
            Self::BodyType => "Body Type",
            Self::Height => "Height",
            Self::Clan => "Clan",
            Self::Face => "Face",
            Self::Hairstyle => "Hairstyle",
            Self::HighlightsOnFlag => "Highlights",
            Self::SkinColor => "Skin Color",
            Self::EyeColorR => "Eye Color (Right)",
            Self::HairColor => "Hair Color",
            Self::HighlightColor => "Highlight Color",
            Self::FacialFeaturesTattoos => "Facial Features",
            Self::TattooColor => "Tattoo Color",
            Self::Eyebrows => "Eyebrows",
            Self::EyeColorL => "Eye Color (Left)",
            Self::EyeShape => "Eye Shape",
            Self::Nose => "Nose",
            Self::Jaw => "Jaw",
            Self::Mouth => "Mouth",
            Self::LipColor => "Lip Color",
            Self::MuscleToneOrTailEarLength => "Muscle Tone",
            Self::TailEarShape => "Tail Shape",
            Self::BustSize => "Bust Size",
            Self::FacePaint => "Face Paint",
            Self::FacePaintColor => "Face Paint Color",
        }
    }
}

impl fmt::Display for CustomizeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
