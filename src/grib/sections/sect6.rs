use crate::grib::{GribError, Result};

/// Section 6: Bit-Map Section. Indicator 255 means no bitmap applies,
/// 0 means one follows inline (Code Table 6.0). Pre-defined bitmaps
/// (1-254) cannot be resolved here, so they only warn.
pub struct BitMap {
    pub bitmap_indicator: u8,
    pub bitmap: Option<Box<[u8]>>,
}

impl BitMap {
    pub(crate) fn from_slice(buf: &[u8]) -> Result<Self> {
        if buf.len() < 6 {
            return Err(GribError::Truncated(format!(
                "Section 6 needs 6 bytes, got {}",
                buf.len()
            )));
        }

        let bitmap_indicator = buf[5];
        if bitmap_indicator != 255 {
            warn!("Bitmap indicator {} may not be processed correctly", bitmap_indicator);
        }

        let bitmap = (buf.len() > 6).then(|| buf[6..].to_vec().into_boxed_slice());

        Ok(BitMap {
            bitmap_indicator,
            bitmap,
        })
    }

    /// The mask applies only when declared inline.
    pub(crate) fn active(&self) -> Option<&[u8]> {
        if self.bitmap_indicator == 0 {
            self.bitmap.as_deref()
        } else {
            None
        }
    }
}
