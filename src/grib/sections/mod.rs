use crate::grib::utils::as_unsigned;
use crate::grib::{GribError, Result, SECT0_IS_MAGIC, SECT0_IS_SIZE};

pub mod sect1;
pub mod sect3;
pub mod sect4;
pub mod sect5;
pub mod sect6;
pub mod sect7;

/// Section 0: Indicator Section. Unlike sections 1-7 it carries no
/// length/number header; it is identified by the "GRIB" magic and is
/// always exactly 16 octets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    /// Discipline - GRIB Master Table Number (see Code Table 0.0)
    pub discipline: u8,
    /// GRIB Edition Number (2 for GRIB2)
    pub edition: u8,
    /// Total length of GRIB message in octets (including Section 0)
    pub total_length: u64,
}

impl Indicator {
    pub(crate) fn from_slice(buf: &[u8]) -> Result<Self> {
        if buf.len() < SECT0_IS_SIZE {
            return Err(GribError::Truncated(format!(
                "Indicator section needs {} bytes, got {}",
                SECT0_IS_SIZE,
                buf.len()
            )));
        }

        if &buf[0..SECT0_IS_MAGIC.len()] != SECT0_IS_MAGIC {
            return Err(GribError::NotGrib());
        }

        let edition = buf[7];
        if edition != 2 {
            warn!("GRIB edition {} (expected 2), decoding anyway", edition);
        }

        Ok(Indicator {
            discipline: buf[6],
            edition,
            total_length: as_unsigned(&buf[9..16]),
        })
    }
}
