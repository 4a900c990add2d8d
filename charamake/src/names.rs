use crate::{
    customize::CustomizeAccess,
    enums::{Gender, SubRace},
    error::CharaMakeError,
};
use std::fmt;

/// Keys into the localized name table. Some languages name clans per gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CustomName {
    MidlanderM,
    HighlanderM,
    WildwoodM,
    DuskwightM,
    PlainsfolkM,
    DunesfolkM,
    SeekerOfTheSunM,
    KeeperOfTheMoonM,
    SeawolfM,
    HellsguardM,
    RaenM,
    XaelaM,
    HelionM,
    LostM,
    RavaM,
    VeenaM,
    MidlanderF,
    HighlanderF,
    WildwoodF,
    DuskwightF,
    PlainsfolkF,
    DunesfolkF,
    SeekerOfTheSunF,
    KeeperOfTheMoonF,
    SeawolfF,
    HellsguardF,
    RaenF,
    XaelaF,
    // present in the name sheet, never produced by `clan_name`
    HelionF,
    LostF,
    RavaF,
    VeenaF,
}

impl CustomName {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MidlanderM => "MidlanderM",
            Self::HighlanderM => "HighlanderM",
            Self::WildwoodM => "WildwoodM",
            Self::DuskwightM => "DuskwightM",
            Self::PlainsfolkM => "PlainsfolkM",
            Self::DunesfolkM => "DunesfolkM",
            Self::SeekerOfTheSunM => "SeekerOfTheSunM",
            Self::KeeperOfTheMoonM => "KeeperOfTheMoonM",
            Self::SeawolfM => "SeawolfM",
            Self::HellsguardM => "HellsguardM",
            Self::RaenM => "RaenM",
            Self::XaelaM => "XaelaM",
            Self::HelionM => "HelionM",
            Self::LostM => "LostM",
            Self::RavaM => "RavaM",
            Self::VeenaM => "VeenaM",
            Self::MidlanderF => "MidlanderF",
            Self::HighlanderF => "HighlanderF",
            Self::WildwoodF => "WildwoodF",
            Self::DuskwightF => "DuskwightF",
            Self::PlainsfolkF => "PlainsfolkF",
            Self::DunesfolkF => "DunesfolkF",
            Self::SeekerOfTheSunF => "SeekerOfTheSunF",
            Self::KeeperOfTheMoonF => "KeeperOfTheMoonF",
            Self::SeawolfF => "SeawolfF",
            Self::HellsguardF => "HellsguardF",
            Self::RaenF => "RaenF",
            Self::XaelaF => "XaelaF",
            Self::HelionF => "HelionF",
            Self::LostF => "LostF",
            Self::RavaF => "RavaF",
            Self::VeenaF => "VeenaF",
        }
    }
}

impl fmt::Display for CustomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Localized strings for [`CustomName`] keys, loaded from game data elsewhere.
pub trait NameTable {
    fn name(&self, key: CustomName) -> &str;
}

/// Name key of a clan as seen on a character of the given gender.
pub fn clan_name(clan: SubRace, gender: Gender) -> Result<CustomName, CharaMakeError> {
    use CustomName as N;
    use SubRace as S;

    Ok(match (gender.to_base(), clan) {
        (Gender::Male, S::Midlander) => N::MidlanderM,
        (Gender::Male, S::Highlander) => N::HighlanderM,
        (Gender::Male, S::Wildwood) => N::WildwoodM,
        (Gender::Male, S::Duskwight) => N::DuskwightM,
        (Gender::Male, S::Plainsfolk) => N::PlainsfolkM,
        (Gender::Male, S::Dunesfolk) => N::DunesfolkM,
        (Gender::Male, S::SeekerOfTheSun) => N::SeekerOfTheSunM,
        (Gender::Male, S::KeeperOfTheMoon) => N::KeeperOfTheMoonM,
        (Gender::Male, S::Seawolf) => N::SeawolfM,
        (Gender::Male, S::Hellsguard) => N::HellsguardM,
        (Gender::Male, S::Raen) => N::RaenM,
        (Gender::Male, S::Xaela) => N::XaelaM,
        (Gender::Male, S::Helion) => N::HelionM,
        (Gender::Male, S::Lost) => N::LostM,
        (Gender::Male, S::Rava) => N::RavaM,
        (Gender::Male, S::Veena) => N::VeenaM,
        (Gender::Female, S::Midlander) => N::MidlanderF,
        (Gender::Female, S::Highlander) => N::HighlanderF,
        (Gender::Female, S::Wildwood) => N::WildwoodF,
        (Gender::Female, S::Duskwight) => N::DuskwightF,
        (Gender::Female, S::Plainsfolk) => N::PlainsfolkF,
        (Gender::Female, S::Dunesfolk) => N::DunesfolkF,
        (Gender::Female, S::SeekerOfTheSun) => N::SeekerOfTheSunF,
        (Gender::Female, S::KeeperOfTheMoon) => N::KeeperOfTheMoonF,
        (Gender::Female, S::Seawolf) => N::SeawolfF,
        (Gender::Female, S::Hellsguard) => N::HellsguardF,
        (Gender::Female, S::Raen) => N::RaenF,
        (Gender::Female, S::Xaela) => N::XaelaF,
        // no female Hrothgar names in the name sheet
        (Gender::Female, S::Helion) => N::HelionM,
        (Gender::Female, S::Lost) => N::LostM,
        (Gender::Female, S::Rava) => N::RavaF,
        (Gender::Female, S::Veena) => N::VeenaF,
        (gender, clan) => return Err(CharaMakeError::InvalidClanName { clan, gender }),
    })
}

pub fn customize_clan_name(customize: &impl CustomizeAccess) -> Result<CustomName, CharaMakeError> {
    clan_name(customize.clan(), customize.gender())
}

/// Localized clan name through an external name table.
pub fn clan_display_name<'a>(
    table: &'a impl NameTable,
    clan: SubRace,
    gender: Gender,
) -> Result<&'a str, CharaMakeError> {
    clan_name(clan, gender).map(|key| table.name(key))
}
