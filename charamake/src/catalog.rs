use crate::{
    customize::CustomizeAccess,
    enums::{CustomizeIndex, Gender, MenuKind, Race, SubRace},
    error::CharaMakeError,
    value::CustomizeValue,
};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, fmt::Write};
use tracing::warn;

/// Number of options of every percentage slider (0 to 100 inclusive).
pub const PERCENTAGE_COUNT: usize = 101;
/// A raw customization value is one byte.
pub const MAX_OPTIONS: usize = u8::MAX as usize + 1;
/// Facial features are 7 per-face toggles plus the tattoo.
pub const FACIAL_FEATURE_COUNT: usize = 8;

/// Fixed-width bit set over [`CustomizeIndex`] ordinals.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AvailableSet(u32);

impl AvailableSet {
    pub const EMPTY: Self = Self(0);

    pub const DEFAULT: Self = Self::EMPTY
        .with(CustomizeIndex::Height)
        .with(CustomizeIndex::Hairstyle)
        .with(CustomizeIndex::SkinColor)
        .with(CustomizeIndex::EyeColorR)
        .with(CustomizeIndex::EyeColorL)
        .with(CustomizeIndex::HairColor)
        .with(CustomizeIndex::HighlightColor)
        .with(CustomizeIndex::FacialFeaturesTattoos)
        .with(CustomizeIndex::TattooColor)
        .with(CustomizeIndex::LipColor);

    pub const fn with(self, id: CustomizeIndex) -> Self {
        Self(self.0 | 1u32 << id as u32)
    }

    fn insert(&mut self, id: CustomizeIndex) {
        *self = self.with(id);
    }

    pub fn contains(&self, id: CustomizeIndex) -> bool {
        self.0 & (1u32 << id as u32) != 0
    }

    pub fn iter(&self) -> impl Iterator<Item = CustomizeIndex> + '_ {
        CustomizeIndex::ALL.into_iter().filter(move |id| self.contains(*id))
    }
}

impl fmt::Debug for AvailableSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Raw option tables of one clan and gender, as extracted from game data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogData {
    pub clan: SubRace,
    pub gender: Gender,
    /// Categories offered on top of the ones implied by the tables below.
    pub available: Vec<CustomizeIndex>,
    pub option_names: BTreeMap<CustomizeIndex, String>,
    pub menu_kinds: BTreeMap<CustomizeIndex, MenuKind>,

    pub num_eyebrows: usize,
    pub num_eye_shapes: usize,
    pub num_nose_shapes: usize,
    pub num_jaw_shapes: usize,
    pub num_mouth_shapes: usize,

    pub faces: Vec<CustomizeValue>,
    pub hair_styles: Vec<CustomizeValue>,
    pub tail_ear_shapes: Vec<CustomizeValue>,
    /// One list per face, each with [`FACIAL_FEATURE_COUNT`] entries.
    pub features_tattoos: Vec<Vec<CustomizeValue>>,
    pub face_paints: Vec<CustomizeValue>,

    pub skin_colors: Vec<CustomizeValue>,
    pub hair_colors: Vec<CustomizeValue>,
    pub highlight_colors: Vec<CustomizeValue>,
    pub eye_colors: Vec<CustomizeValue>,
    pub tattoo_colors: Vec<CustomizeValue>,
    pub face_paint_colors_dark: Vec<CustomizeValue>,
    pub face_paint_colors_light: Vec<CustomizeValue>,
    pub lip_colors_dark: Vec<CustomizeValue>,
    pub lip_colors_light: Vec<CustomizeValue>,
}

/// Where the options of a category come from.
enum Options<'a> {
    Synthetic,
    List(&'a [CustomizeValue]),
    Split {
        dark: &'a [CustomizeValue],
        light: &'a [CustomizeValue],
    },
}

/// The legal customization options of one clan and gender.
///
/// Built once from [`CatalogData`] and read-only afterwards.
#[derive(Debug)]
pub struct CustomizationCatalog {
    clan: SubRace,
    gender: Gender,
    available: AvailableSet,
    option_names: Vec<Box<str>>,
    menu_kinds: [MenuKind; CustomizeIndex::TOTAL],
    order: Vec<(MenuKind, Box<[CustomizeIndex]>)>,
    data: CatalogData,
}

impl CustomizationCatalog {
    pub fn new(mut data: CatalogData) -> Self {
        let clan = data.clan;
        for (id, count) in [
            (CustomizeIndex::Eyebrows, &mut data.num_eyebrows),
            (CustomizeIndex::EyeShape, &mut data.num_eye_shapes),
            (CustomizeIndex::Nose, &mut data.num_nose_shapes),
            (CustomizeIndex::Jaw, &mut data.num_jaw_shapes),
            (CustomizeIndex::Mouth, &mut data.num_mouth_shapes),
        ] {
            if *count > MAX_OPTIONS {
                warn!(%clan, customization = %id, count = *count, "shape count does not fit in a byte, clamping");
                *count = MAX_OPTIONS;
            }
        }
        let gender = data.gender.to_base();
        let available = Self::populate(&data, clan.race(), gender);

        let option_names = CustomizeIndex::ALL
            .iter()
            .map(|id| match data.option_names.get(id) {
                Some(name) => name.as_str().into(),
                None => id.label().into(),
            })
            .collect();
        let menu_kinds = CustomizeIndex::ALL.map(|id| {
            data.menu_kinds
                .get(&id)
                .copied()
                .unwrap_or_else(|| id.menu_kind())
        });
        let order = compute_order(available, &menu_kinds);

        Self {
            clan,
            gender,
            available,
            option_names,
            menu_kinds,
            order,
            data,
        }
    }

    fn populate(data: &CatalogData, race: Race, gender: Gender) -> AvailableSet {
        if !race.supports(gender) {
            return AvailableSet::EMPTY;
        }

        let mut available = AvailableSet::DEFAULT;
        for id in &data.available {
            available.insert(*id);
        }

        let implied = [
            (CustomizeIndex::Face, !data.faces.is_empty()),
            (CustomizeIndex::TailEarShape, !data.tail_ear_shapes.is_empty()),
            (CustomizeIndex::FacePaint, !data.face_paints.is_empty()),
            (
                CustomizeIndex::FacePaintColor,
                !data.face_paint_colors_dark.is_empty() || !data.face_paint_colors_light.is_empty(),
            ),
            (CustomizeIndex::HighlightsOnFlag, !data.highlight_colors.is_empty()),
            (CustomizeIndex::Eyebrows, data.num_eyebrows > 0),
            (CustomizeIndex::EyeShape, data.num_eye_shapes > 0),
            (CustomizeIndex::Nose, data.num_nose_shapes > 0),
            (CustomizeIndex::Jaw, data.num_jaw_shapes > 0),
            (CustomizeIndex::Mouth, data.num_mouth_shapes > 0),
        ];
        for (id, present) in implied {
            if present {
                available.insert(id);
            }
        }
        available
    }

    pub fn clan(&self) -> SubRace {
        self.clan
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn race(&self) -> Race {
        self.clan.race()
    }

    pub fn available(&self) -> AvailableSet {
        self.available
    }

    pub fn is_available(&self, id: CustomizeIndex) -> bool {
        self.available.contains(id)
    }

    pub fn num_eyebrows(&self) -> usize {
        self.data.num_eyebrows
    }

    pub fn num_eye_shapes(&self) -> usize {
        self.data.num_eye_shapes
    }

    pub fn num_nose_shapes(&self) -> usize {
        self.data.num_nose_shapes
    }

    pub fn num_jaw_shapes(&self) -> usize {
        self.data.num_jaw_shapes
    }

    pub fn num_mouth_shapes(&self) -> usize {
        self.data.num_mouth_shapes
    }

    /// Presentation kind from game data, which may differ from [`CustomizeIndex::menu_kind`].
    pub fn kind(&self, id: CustomizeIndex) -> MenuKind {
        self.menu_kinds[id.ordinal()]
    }

    pub fn option_name(&self, id: CustomizeIndex) -> &str {
        &self.option_names[id.ordinal()]
    }

    /// Available categories grouped by menu kind, in display order.
    pub fn order(&self) -> &[(MenuKind, Box<[CustomizeIndex]>)] {
        &self.order
    }

    pub fn order_of(&self, kind: MenuKind) -> &[CustomizeIndex] {
        self.order
            .iter()
            .find(|(k, _)| *k == kind)
            .map_or(&[][..], |(_, ids)| &ids[..])
    }

    fn options(&self, id: CustomizeIndex) -> Result<Options<'_>, CharaMakeError> {
        let d = &self.data;
        Ok(match id {
            CustomizeIndex::Height
            | CustomizeIndex::MuscleToneOrTailEarLength
            | CustomizeIndex::BustSize
            | CustomizeIndex::HighlightsOnFlag
            | CustomizeIndex::Eyebrows
            | CustomizeIndex::EyeShape
            | CustomizeIndex::Nose
            | CustomizeIndex::Jaw
            | CustomizeIndex::Mouth => Options::Synthetic,

            CustomizeIndex::Face => Options::List(&d.faces),
            CustomizeIndex::Hairstyle => Options::List(&d.hair_styles),
            CustomizeIndex::TailEarShape => Options::List(&d.tail_ear_shapes),
            CustomizeIndex::FacePaint => Options::List(&d.face_paints),
            CustomizeIndex::FacialFeaturesTattoos => {
                Options::List(d.features_tattoos.first().map_or(&[][..], Vec::as_slice))
            }

            CustomizeIndex::SkinColor => Options::List(&d.skin_colors),
            CustomizeIndex::EyeColorL | CustomizeIndex::EyeColorR => Options::List(&d.eye_colors),
            CustomizeIndex::HairColor => Options::List(&d.hair_colors),
            CustomizeIndex::HighlightColor => Options::List(&d.highlight_colors),
            CustomizeIndex::TattooColor => Options::List(&d.tattoo_colors),
            CustomizeIndex::LipColor => Options::Split {
                dark: &d.lip_colors_dark,
                light: &d.lip_colors_light,
            },
            CustomizeIndex::FacePaintColor => Options::Split {
                dark: &d.face_paint_colors_dark,
                light: &d.face_paint_colors_light,
            },

            CustomizeIndex::Race
            | CustomizeIndex::Gender
            | CustomizeIndex::BodyType
            | CustomizeIndex::Clan => return Err(CharaMakeError::UnsupportedCategory(id)),
        })
    }

    /// Number of legal options of a category, 0 if it is not offered at all.
    pub fn count(&self, id: CustomizeIndex) -> Result<usize, CharaMakeError> {
        if !self.is_available(id) {
            return Ok(0);
        }

        let d = &self.data;
        Ok(match id {
            CustomizeIndex::Height
            | CustomizeIndex::MuscleToneOrTailEarLength
            | CustomizeIndex::BustSize => PERCENTAGE_COUNT,
            CustomizeIndex::HighlightsOnFlag => 2,
            CustomizeIndex::FacialFeaturesTattoos => FACIAL_FEATURE_COUNT,
            CustomizeIndex::Eyebrows => d.num_eyebrows,
            CustomizeIndex::EyeShape => d.num_eye_shapes,
            CustomizeIndex::Nose => d.num_nose_shapes,
            CustomizeIndex::Jaw => d.num_jaw_shapes,
            CustomizeIndex::Mouth => d.num_mouth_shapes,
            _ => match self.options(id)? {
                Options::Synthetic => return Err(CharaMakeError::UnsupportedCategory(id)),
                Options::List(list) => list.len(),
                Options::Split { dark, light } => dark.len() + light.len(),
            },
        })
    }

    /// The option at a logical index; fails when `index >= count(id)`.
    pub fn option_at(&self, id: CustomizeIndex, index: usize) -> Result<CustomizeValue, CharaMakeError> {
        let count = self.count(id)?;
        let out_of_range = |count| CharaMakeError::IndexOutOfRange { id, index, count };
        if index >= count {
            return Err(out_of_range(count));
        }

        let value = match self.options(id)? {
            Options::Synthetic => CustomizeValue::synthetic(id, index),
            Options::List(list) => list.get(index).copied(),
            Options::Split { dark, light } => match index.checked_sub(dark.len()) {
                None => dark.get(index).copied(),
                Some(light_index) => light.get(light_index).copied(),
            },
        };
        value.ok_or_else(|| out_of_range(count))
    }

    /// Finds the logical index of a raw byte stored in an appearance record.
    ///
    /// `Ok(None)` means the byte is not a legal option of this catalog.
    pub fn lookup(
        &self,
        id: CustomizeIndex,
        value: u8,
    ) -> Result<Option<(usize, CustomizeValue)>, CharaMakeError> {
        let count = self.count(id)?;
        if count == 0 {
            return Ok(None);
        }

        Ok(match self.options(id)? {
            Options::Synthetic => {
                let index = usize::from(value);
                if index < count {
                    CustomizeValue::synthetic(id, index).map(|v| (index, v))
                } else {
                    None
                }
            }
            Options::List(list) => find_value(list.iter(), value),
            Options::Split { dark, light } => find_value(dark.iter().chain(light), value),
        })
    }

    /// Feature list of one face; faces are numbered from 1.
    pub fn facial_feature(&self, face: usize, index: usize) -> Result<CustomizeValue, CharaMakeError> {
        let features = face
            .checked_sub(1)
            .and_then(|i| self.data.features_tattoos.get(i))
            .ok_or(CharaMakeError::FaceOutOfRange(face))?;
        features
            .get(index)
            .copied()
            .ok_or(CharaMakeError::IndexOutOfRange {
                id: CustomizeIndex::FacialFeaturesTattoos,
                index,
                count: features.len(),
            })
    }

    /// One fixed-width `label value` cell per available category.
    pub fn to_human_readable(&self, customize: &impl CustomizeAccess) -> String {
        let mut s = String::new();
        for id in self.available.iter() {
            let _ = write!(s, "{:<20}{}", self.option_name(id), customize.get(id));
        }
        s
    }
}

fn find_value<'a>(
    options: impl Iterator<Item = &'a CustomizeValue>,
    value: u8,
) -> Option<(usize, CustomizeValue)> {
    options
        .enumerate()
        .find(|(_, c)| c.value() == value)
        .map(|(i, c)| (i, *c))
}

fn compute_order(
    available: AvailableSet,
    kinds: &[MenuKind; CustomizeIndex::TOTAL],
) -> Vec<(MenuKind, Box<[CustomizeIndex]>)> {
    let mut ids = CustomizeIndex::ALL;
    ids[CustomizeIndex::TattooColor.ordinal()] = CustomizeIndex::EyeColorL;
    ids[CustomizeIndex::EyeColorL.ordinal()] = CustomizeIndex::EyeColorR;
    ids[CustomizeIndex::EyeColorR.ordinal()] = CustomizeIndex::TattooColor;

    let mut groups: Vec<(MenuKind, Vec<CustomizeIndex>)> = Vec::new();
    for id in ids.into_iter().skip(2).filter(|id| available.contains(*id)) {
        let kind = kinds[id.ordinal()];
        match groups.iter_mut().find(|(k, _)| *k == kind) {
            Some((_, group)) => group.push(id),
            None => groups.push((kind, vec![id])),
        }
    }

    groups
        .into_iter()
        .map(|(kind, ids)| (kind, ids.into_boxed_slice()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customize::Customize;
    use CustomizeIndex as Id;

    fn values(id: CustomizeIndex, raw: impl IntoIterator<Item = u8>) -> Vec<CustomizeValue> {
        raw.into_iter()
            .map(|v| CustomizeValue::new(id, v, 0xff00_0000 | v as u32, 100 + v as u16))
            .collect()
    }

    fn sample(clan: SubRace, gender: Gender) -> CatalogData {
        CatalogData {
            clan,
            gender,
            num_eyebrows: 7,
            num_eye_shapes: 6,
            num_nose_shapes: 6,
            num_jaw_shapes: 4,
            num_mouth_shapes: 3,
            faces: values(Id::Face, 1..=4),
            hair_styles: values(Id::Hairstyle, [1, 2, 3, 5, 8, 13]),
            features_tattoos: (0..4)
                .map(|_| values(Id::FacialFeaturesTattoos, (0..8).map(|b| 1u8 << b)))
                .collect(),
            skin_colors: values(Id::SkinColor, 0..192),
            hair_colors: values(Id::HairColor, 0..192),
            highlight_colors: values(Id::HighlightColor, 0..192),
            eye_colors: values(Id::EyeColorL, 0..192),
            tattoo_colors: values(Id::TattooColor, 0..192),
            lip_colors_dark: values(Id::LipColor, 0..96),
            lip_colors_light: values(Id::LipColor, 128..160),
            ..Default::default()
        }
    }

    #[test]
    fn default_availability() {
        let catalog = CustomizationCatalog::new(sample(SubRace::Midlander, Gender::Female));
        for id in [Id::Height, Id::Hairstyle, Id::LipColor, Id::Face, Id::Mouth] {
            assert!(catalog.is_available(id), "{id:?} should be available");
        }
        for id in [Id::Race, Id::BodyType, Id::TailEarShape, Id::FacePaint, Id::BustSize] {
            assert!(!catalog.is_available(id), "{id:?} should not be available");
            assert_eq!(catalog.count(id).unwrap(), 0);
        }
    }

    #[test]
    fn unsupported_gender_has_nothing() {
        let catalog = CustomizationCatalog::new(sample(SubRace::Helion, Gender::Female));
        assert_eq!(catalog.available(), AvailableSet::EMPTY);
        for id in CustomizeIndex::ALL {
            assert_eq!(catalog.count(id).unwrap(), 0);
            assert_eq!(catalog.lookup(id, 0).unwrap(), None);
        }
        assert!(catalog.order().is_empty());
    }

    #[test]
    fn counts() {
        let mut data = sample(SubRace::Raen, Gender::Male);
        data.available = vec![Id::BustSize, Id::MuscleToneOrTailEarLength];
        data.tail_ear_shapes = values(Id::TailEarShape, 1..=4);
        let catalog = CustomizationCatalog::new(data);

        assert_eq!(catalog.count(Id::Height).unwrap(), 101);
        assert_eq!(catalog.count(Id::BustSize).unwrap(), 101);
        assert_eq!(catalog.count(Id::FacialFeaturesTattoos).unwrap(), 8);
        assert_eq!(catalog.count(Id::HighlightsOnFlag).unwrap(), 2);
        assert_eq!(catalog.count(Id::Eyebrows).unwrap(), 7);
        assert_eq!(catalog.count(Id::Jaw).unwrap(), 4);
        assert_eq!(catalog.count(Id::Hairstyle).unwrap(), 6);
        assert_eq!(catalog.count(Id::TailEarShape).unwrap(), 4);
        assert_eq!(catalog.count(Id::EyeColorL).unwrap(), 192);
        assert_eq!(catalog.count(Id::EyeColorR).unwrap(), 192);
        assert_eq!(catalog.count(Id::LipColor).unwrap(), 128);
    }

    #[test]
    fn structural_categories_have_no_table() {
        let mut data = sample(SubRace::Midlander, Gender::Male);
        data.available = vec![Id::BodyType, Id::Clan];
        let catalog = CustomizationCatalog::new(data);
        assert!(matches!(
            catalog.count(Id::BodyType),
            Err(CharaMakeError::UnsupportedCategory(Id::BodyType))
        ));
        assert!(catalog.option_at(Id::Clan, 0).is_err());
        assert!(catalog.lookup(Id::BodyType, 1).is_err());
    }

    #[test]
    fn split_palette_boundary() {
        let catalog = CustomizationCatalog::new(sample(SubRace::Midlander, Gender::Female));
        assert_eq!(catalog.count(Id::LipColor).unwrap(), 128);

        let last_dark = catalog.option_at(Id::LipColor, 95).unwrap();
        assert_eq!(last_dark.value(), 95);
        let first_light = catalog.option_at(Id::LipColor, 96).unwrap();
        assert_eq!(first_light.value(), 128);
        let last_light = catalog.option_at(Id::LipColor, 127).unwrap();
        assert_eq!(last_light.value(), 159);

        assert!(matches!(
            catalog.option_at(Id::LipColor, 128),
            Err(CharaMakeError::IndexOutOfRange { index: 128, count: 128, .. })
        ));
        assert_eq!(catalog.lookup(Id::LipColor, 128).unwrap().map(|(i, _)| i), Some(96));
        assert_eq!(catalog.lookup(Id::LipColor, 96).unwrap(), None);
    }

    #[test]
    fn percentage_identity() {
        let catalog = CustomizationCatalog::new(sample(SubRace::Lost, Gender::Male));
        for k in 0..101 {
            let value = catalog.option_at(Id::Height, k).unwrap();
            assert_eq!(value.value() as usize, k);
            assert_eq!(value.customize_id() as usize, k);
        }
        assert!(catalog.option_at(Id::Height, 101).is_err());
        assert_eq!(catalog.lookup(Id::Height, 101).unwrap(), None);
        assert_eq!(catalog.lookup(Id::Height, 100).unwrap().map(|(i, _)| i), Some(100));
    }

    #[test]
    fn oversized_shape_counts_are_clamped() {
        let mut data = sample(SubRace::Midlander, Gender::Male);
        data.num_eyebrows = 300;
        let catalog = CustomizationCatalog::new(data);

        assert_eq!(catalog.count(Id::Eyebrows).unwrap(), MAX_OPTIONS);
        assert_eq!(catalog.num_eyebrows(), MAX_OPTIONS);
        for index in [0, 4, 255] {
            let value = catalog.option_at(Id::Eyebrows, index).unwrap();
            assert_eq!(usize::from(value.value()), index);
            assert_eq!(catalog.lookup(Id::Eyebrows, value.value()).unwrap().map(|(i, _)| i), Some(index));
        }
        assert!(matches!(
            catalog.option_at(Id::Eyebrows, 260),
            Err(CharaMakeError::IndexOutOfRange { index: 260, count: MAX_OPTIONS, .. })
        ));
    }

    #[test]
    fn round_trip_every_option() {
        let mut data = sample(SubRace::Xaela, Gender::Female);
        data.available = vec![Id::BustSize, Id::MuscleToneOrTailEarLength];
        data.tail_ear_shapes = values(Id::TailEarShape, 1..=4);
        data.face_paints = values(Id::FacePaint, [0, 1, 2, 3, 0x81, 0x82]);
        data.face_paint_colors_dark = values(Id::FacePaintColor, 0..96);
        data.face_paint_colors_light = values(Id::FacePaintColor, 128..224);
        let catalog = CustomizationCatalog::new(data);

        for id in CustomizeIndex::ALL {
            for i in 0..catalog.count(id).unwrap() {
                let option = catalog.option_at(id, i).unwrap();
                assert_eq!(
                    catalog.lookup(id, option.value()).unwrap(),
                    Some((i, option)),
                    "{id:?} #{i}"
                );
            }
        }
    }

    #[test]
    fn lookup_misses() {
        let catalog = CustomizationCatalog::new(sample(SubRace::Midlander, Gender::Male));
        assert_eq!(catalog.lookup(Id::Hairstyle, 4).unwrap(), None);
        assert_eq!(catalog.lookup(Id::Eyebrows, 7).unwrap(), None);
        assert_eq!(catalog.lookup(Id::Hairstyle, 13).unwrap().map(|(i, _)| i), Some(5));
        // unavailable categories never resolve, even when a table exists
        assert_eq!(catalog.lookup(Id::TailEarShape, 0).unwrap(), None);
    }

    #[test]
    fn facial_features_per_face() {
        let catalog = CustomizationCatalog::new(sample(SubRace::Midlander, Gender::Male));
        assert_eq!(catalog.facial_feature(1, 0).unwrap().value(), 1);
        assert_eq!(catalog.facial_feature(4, 7).unwrap().value(), 128);
        assert!(matches!(catalog.facial_feature(0, 0), Err(CharaMakeError::FaceOutOfRange(0))));
        assert!(catalog.facial_feature(5, 0).is_err());
        assert!(catalog.facial_feature(1, 8).is_err());
    }

    #[test]
    fn order_rotates_eye_and_tattoo_colors() {
        let mut data = sample(SubRace::Midlander, Gender::Male);
        data.faces.clear();
        data.highlight_colors.clear();
        data.num_eyebrows = 0;
        data.num_eye_shapes = 0;
        data.num_nose_shapes = 0;
        data.num_jaw_shapes = 0;
        data.num_mouth_shapes = 0;
        let catalog = CustomizationCatalog::new(data);

        let order: Vec<(MenuKind, Vec<CustomizeIndex>)> = catalog
            .order()
            .iter()
            .map(|(kind, ids)| (*kind, ids.to_vec()))
            .collect();
        assert_eq!(
            order,
            vec![
                (MenuKind::Percentage, vec![Id::Height]),
                (MenuKind::IconSelector, vec![Id::Hairstyle]),
                (
                    MenuKind::ColorPicker,
                    vec![
                        Id::SkinColor,
                        Id::TattooColor,
                        Id::HairColor,
                        Id::HighlightColor,
                        Id::EyeColorL,
                        Id::EyeColorR,
                    ]
                ),
                (MenuKind::MultiIconSelector, vec![Id::FacialFeaturesTattoos]),
                (MenuKind::DoubleColorPicker, vec![Id::LipColor]),
            ]
        );
        assert_eq!(catalog.order_of(MenuKind::Percentage), &[Id::Height]);
        assert!(catalog.order_of(MenuKind::ListSelector).is_empty());
    }

    #[test]
    fn kind_overrides_regroup_order() {
        let mut data = sample(SubRace::Midlander, Gender::Male);
        data.menu_kinds.insert(Id::LipColor, MenuKind::ColorPicker);
        data.option_names.insert(Id::LipColor, "Lipstick".into());
        let catalog = CustomizationCatalog::new(data);

        assert_eq!(catalog.kind(Id::LipColor), MenuKind::ColorPicker);
        assert_eq!(catalog.option_name(Id::LipColor), "Lipstick");
        assert_eq!(catalog.option_name(Id::Nose), "Nose");
        assert_eq!(catalog.order_of(MenuKind::ColorPicker).last(), Some(&Id::LipColor));
        assert!(catalog.order_of(MenuKind::DoubleColorPicker).is_empty());
    }

    #[test]
    fn human_readable_lists_available() {
        let catalog = CustomizationCatalog::new(sample(SubRace::Midlander, Gender::Male));
        let text = catalog.to_human_readable(&Customize::default());
        assert!(text.starts_with(&format!("{:<20}50", "Height")));
        assert!(!text.contains("Race"));
    }
}
