use crate::grib::{GribError, Result};
use crate::read_as;

/// Section 1: Identification Section, octets 6-21. The reference date
/// parts stay raw here; the ISO timestamp is synthesized when the
/// output header is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identification {
    /// Identification of originating/generating centre (see Common Code Table C-1)
    pub centre_id: u16,
    /// Identification of originating/generating sub-centre (allocated by centre)
    pub subcentre_id: u16,
    /// GRIB Master Tables Version Number (see Code Table 1.0)
    pub master_table_version: u8,
    /// GRIB Local Tables Version Number (see Code Table 1.1)
    pub local_table_version: u8,
    /// Significance of Reference Time (see Code Table 1.2)
    pub ref_time_significance: u8,
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// Production status of processed data (see Code Table 1.3)
    pub prod_status: u8,
    /// Type of processed data (see Code Table 1.4)
    pub data_type: u8,
}

impl Identification {
    pub(crate) fn from_slice(buf: &[u8]) -> Result<Self> {
        if buf.len() < 21 {
            return Err(GribError::Truncated(format!(
                "Section 1 needs 21 bytes, got {}",
                buf.len()
            )));
        }

        Ok(Identification {
            centre_id: read_as!(u16, buf, 5),
            subcentre_id: read_as!(u16, buf, 7),
            master_table_version: buf[9],
            local_table_version: buf[10],
            ref_time_significance: buf[11],
            year: read_as!(u16, buf, 12),
            month: buf[14],
            day: buf[15],
            hour: buf[16],
            minute: buf[17],
            second: buf[18],
            prod_status: buf[19],
            data_type: buf[20],
        })
    }
}
