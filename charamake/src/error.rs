use crate::enums::{CustomizeIndex, Gender, SubRace};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CharaMakeError {
    #[error("Customization {0} has no option table")]
    UnsupportedCategory(CustomizeIndex),
    #[error("Option #{index} of {id} is out of range ({count} options)")]
    IndexOutOfRange {
        id: CustomizeIndex,
        index: usize,
        count: usize,
    },
    #[error("Face #{0} has no facial feature list")]
    FaceOutOfRange(usize),

    #[error("No customization catalog for {clan} {gender}")]
    CatalogNotFound { clan: SubRace, gender: Gender },
    #[error("Customization catalog registry is already initialized")]
    RegistryInitialized,
    #[error("Customization catalog registry is not initialized")]
    RegistryUninitialized,
    #[error("Failed to parse customization catalog data")]
    CatalogData(#[source] serde_json::Error),

    #[error("No clan name for {clan} {gender}")]
    InvalidClanName { clan: SubRace, gender: Gender },
    #[error("Unknown {kind} \"{name}\"")]
    UnknownName { kind: &'static str, name: Box<str> },

    #[error("Hex string must have {expected} digits, got {actual}")]
    HexLength { expected: usize, actual: usize },
    #[error("Hex string contains an invalid digit at position {0}")]
    HexDigit(usize),
    #[error("Failed to read customization record")]
    RecordRead(#[source] binrw::Error),
    #[error("Failed to write customization record")]
    RecordWrite(#[source] binrw::Error),
}
