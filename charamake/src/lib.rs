pub mod catalog;
pub mod customize;
pub mod enums;
pub mod error;
pub mod fixup;
pub mod names;
pub mod registry;
pub mod value;

pub use catalog::{CatalogData, CustomizationCatalog};
pub use customize::{CharacterArmor, Customize, CustomizeAccess, EquipAccess, Equipment};
pub use enums::{CustomizeIndex, EquipSlot, Gender, MenuKind, Race, SubRace};
pub use error::CharaMakeError;
pub use fixup::{FixUp, GearRestriction, GearSubstitute, Unrestricted};
pub use registry::{CatalogProvider, CatalogRegistry};
pub use value::CustomizeValue;
