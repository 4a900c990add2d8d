use crate::{enums::CustomizeIndex, error::CharaMakeError};
use binrw::{binrw, BinRead, BinWrite};
use serde::{Deserialize, Serialize};
use std::{fmt, io::Cursor};

/// One customization option packed into 8 bytes: category, raw byte value,
/// an optional customize (model/palette) id and an optional icon id or color.
///
/// Icon id and color share storage; the catalog knows which one a category uses.
#[binrw]
#[brw(little)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CustomizeValue {
    index: CustomizeIndex,
    value: u8,
    #[serde(default)]
    customize_id: u16,
    #[serde(default)]
    data: u32,
}

impl CustomizeValue {
    pub const SIZE: usize = 8;

    pub fn new(index: CustomizeIndex, value: u8, data: u32, customize_id: u16) -> Self {
        Self {
            index,
            value,
            customize_id,
            data,
        }
    }

    /// Value of a category that has no option table: the raw byte is the index.
    ///
    /// `None` if the index does not fit in a byte.
    pub(crate) fn synthetic(index: CustomizeIndex, logical: usize) -> Option<Self> {
        let value = u8::try_from(logical).ok()?;
        Some(Self::new(index, value, 0, u16::from(value)))
    }

    pub fn index(&self) -> CustomizeIndex {
        self.index
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn customize_id(&self) -> u16 {
        self.customize_id
    }

    pub fn icon_id(&self) -> u32 {
        self.data
    }

    pub fn color(&self) -> u32 {
        self.data
    }

    pub fn from_bytes(bytes: &[u8; Self::SIZE]) -> Result<Self, CharaMakeError> {
        Self::read(&mut Cursor::new(bytes)).map_err(CharaMakeError::RecordRead)
    }

    pub fn to_bytes(&self) -> Result<[u8; Self::SIZE], CharaMakeError> {
        let mut bytes = [0u8; Self::SIZE];
        self.write(&mut Cursor::new(&mut bytes[..]))
            .map_err(CharaMakeError::RecordWrite)?;
        Ok(bytes)
    }
}

impl fmt::Debug for CustomizeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!(
            "CustomizeValue({:?}, {}, #{}, {:08x})",
            self.index, self.value, self.customize_id, self.data
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_layout() {
        let value = CustomizeValue::new(CustomizeIndex::Hairstyle, 0x83, 0x0001_e240, 0x0102);
        assert_eq!(
            value.to_bytes().unwrap(),
            [0x06, 0x83, 0x02, 0x01, 0x40, 0xe2, 0x01, 0x00]
        );
        assert_eq!(value.icon_id(), value.color());
    }

    #[test]
    fn decode_rejects_unknown_category() {
        let bytes = [0x1a, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
        assert!(CustomizeValue::from_bytes(&bytes).is_err());

        let bytes = [0x08, 0x05, 0x00, 0x00, 0xff, 0x80, 0x40, 0xff];
        let value = CustomizeValue::from_bytes(&bytes).unwrap();
        assert_eq!(value.index(), CustomizeIndex::SkinColor);
        assert_eq!(value.value(), 5);
        assert_eq!(value.color(), 0xff40_80ff);
    }

    #[test]
    fn orders_by_raw_value_within_category() {
        let a = CustomizeValue::new(CustomizeIndex::HairColor, 3, 0xffff_ffff, 0);
        let b = CustomizeValue::new(CustomizeIndex::HairColor, 4, 0, 0);
        assert!(a < b);
    }

    #[test]
    fn synthetic_values_mirror_index() {
        let value = CustomizeValue::synthetic(CustomizeIndex::Height, 42).unwrap();
        assert_eq!(value.value(), 42);
        assert_eq!(value.customize_id(), 42);
        assert_eq!(value.icon_id(), 0);

        assert_eq!(CustomizeValue::synthetic(CustomizeIndex::Eyebrows, 255).unwrap().value(), 255);
        assert_eq!(CustomizeValue::synthetic(CustomizeIndex::Eyebrows, 256), None);
    }
}
