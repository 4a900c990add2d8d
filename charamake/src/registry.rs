use crate::{
    catalog::{CatalogData, CustomizationCatalog},
    enums::{Gender, SubRace},
    error::CharaMakeError,
};
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::io::Read;
use tracing::{info, warn};

/// Supplies the catalog of a clan and gender.
pub trait CatalogProvider {
    fn catalog(&self, clan: SubRace, gender: Gender) -> Result<&CustomizationCatalog, CharaMakeError>;
}

const CLAN_COUNT: usize = 16;

fn slot(clan: SubRace, gender: Gender) -> Option<usize> {
    let clan = (clan as usize).checked_sub(1)?;
    let gender = match gender.to_base() {
        Gender::Male => 0,
        Gender::Female => 1,
        _ => return None,
    };
    Some(clan * 2 + gender)
}

#[derive(Deserialize)]
struct RegistryFile {
    catalogs: Vec<CatalogData>,
}

/// Catalogs of every clan and gender, indexed by (clan, gender).
#[derive(Debug)]
pub struct CatalogRegistry {
    catalogs: Vec<Option<CustomizationCatalog>>,
}

impl CatalogRegistry {
    pub fn new(catalogs: impl IntoIterator<Item = CustomizationCatalog>) -> Self {
        let mut slots: Vec<Option<CustomizationCatalog>> =
            std::iter::repeat_with(|| None).take(CLAN_COUNT * 2).collect();

        for catalog in catalogs {
            let (clan, gender) = (catalog.clan(), catalog.gender());
            match slot(clan, gender) {
                Some(i) => {
                    if slots[i].replace(catalog).is_some() {
                        warn!(%clan, %gender, "customization catalog registered twice, keeping the last one");
                    }
                }
                None => warn!(%clan, %gender, "ignoring customization catalog of a non-playable clan or gender"),
            }
        }

        Self { catalogs: slots }
    }

    pub fn from_data(data: impl IntoIterator<Item = CatalogData>) -> Self {
        Self::new(data.into_iter().map(CustomizationCatalog::new))
    }

    /// Reads `{"catalogs": [CatalogData, ...]}`.
    pub fn from_json_reader(reader: impl Read) -> Result<Self, CharaMakeError> {
        let file: RegistryFile =
            serde_json::from_reader(reader).map_err(CharaMakeError::CatalogData)?;
        Ok(Self::from_data(file.catalogs))
    }

    pub fn len(&self) -> usize {
        self.catalogs.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &CustomizationCatalog> {
        self.catalogs.iter().flatten()
    }
}

impl CatalogProvider for CatalogRegistry {
    fn catalog(&self, clan: SubRace, gender: Gender) -> Result<&CustomizationCatalog, CharaMakeError> {
        slot(clan, gender)
            .and_then(|i| self.catalogs[i].as_ref())
            .ok_or(CharaMakeError::CatalogNotFound {
                clan,
                gender: gender.to_base(),
            })
    }
}

static REGISTRY: OnceCell<CatalogRegistry> = OnceCell::new();

/// Publishes the process-wide registry. Can only succeed once.
pub fn install(registry: CatalogRegistry) -> Result<&'static CatalogRegistry, CharaMakeError> {
    let count = registry.len();
    REGISTRY
        .set(registry)
        .map_err(|_| CharaMakeError::RegistryInitialized)?;
    info!(count, "customization catalog registry initialized");
    global()
}

pub fn global() -> Result<&'static CatalogRegistry, CharaMakeError> {
    REGISTRY.get().ok_or(CharaMakeError::RegistryUninitialized)
}
