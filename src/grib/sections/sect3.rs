use crate::grib::utils::GribInt;
use crate::grib::{GribError, Result};
use crate::read_as;

/// Angles on the wire are integers in units of 10^-6 degree.
const ANGLE_SCALE: f64 = 10e5;

/// Section 3: Grid Definition Section.
#[derive(Debug, Clone, PartialEq)]
pub struct GridDefinition {
    /// Source of grid definition (see Code Table 3.0)
    pub source: u8,
    /// Number of data points
    pub num_points: usize,
    pub optional_num_list_size: usize,
    pub optional_num_list_interpretation: u8,
    /// Grid Definition Template Number (see Code Table 3.1)
    pub template_number: u16,
    pub grid: Grid0,
}

impl GridDefinition {
    pub(crate) fn from_slice(buf: &[u8]) -> Result<Self> {
        if buf.len() < 14 {
            return Err(GribError::Truncated(format!(
                "Section 3 needs 14 bytes, got {}",
                buf.len()
            )));
        }

        let template_number = read_as!(u16, buf, 12);
        let grid = Grid0::from_template(template_number, buf)?;

        Ok(GridDefinition {
            source: buf[5],
            num_points: read_as!(u32, buf, 6) as usize,
            optional_num_list_size: buf[10] as usize,
            optional_num_list_interpretation: buf[11],
            template_number,
            grid,
        })
    }
}

/// Grid Definition Template 3.0: Latitude/longitude (or equidistant
/// cylindrical, or Plate Carree). Latitudes are regulation 92.1.5
/// sign-magnitude, longitudes plain unsigned.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid0 {
    pub shape: u8,
    pub scale_factor_radius1: u8,
    pub scale_factor_radius2: u32,
    pub nx: u32,
    pub ny: u32,
    pub basic_angle: f64,
    pub la1: f64,
    pub lo1: f64,
    /// Resolution and component flags (see Flag Table 3.3)
    pub resolution: u8,
    /// "true" when wind components are earth-relative, else "relative"
    pub winds: &'static str,
    pub la2: f64,
    pub lo2: f64,
    pub dx: f64,
    pub dy: f64,
    /// Scanning mode (see Flag Table 3.4)
    pub scan_mode: u8,
}

impl Grid0 {
    fn from_template(template_number: u16, buf: &[u8]) -> Result<Self> {
        match template_number {
            0 => {
                if buf.len() < 72 {
                    return Err(GribError::Truncated(format!(
                        "Grid template 0 needs 72 bytes, got {}",
                        buf.len()
                    )));
                }

                Ok(Grid0 {
                    shape: buf[14],
                    scale_factor_radius1: buf[15],
                    scale_factor_radius2: read_as!(u32, buf, 16),
                    nx: read_as!(u32, buf, 30),
                    ny: read_as!(u32, buf, 34),
                    basic_angle: read_as!(u32, buf, 38) as f64 / ANGLE_SCALE,
                    la1: read_as!(u32, buf, 46).as_grib_int() as f64 / ANGLE_SCALE,
                    lo1: read_as!(u32, buf, 50) as f64 / ANGLE_SCALE,
                    resolution: buf[54],
                    winds: if buf[54] & 0x20 != 0 { "true" } else { "relative" },
                    la2: read_as!(u32, buf, 55).as_grib_int() as f64 / ANGLE_SCALE,
                    lo2: read_as!(u32, buf, 59) as f64 / ANGLE_SCALE,
                    dx: read_as!(u32, buf, 63) as f64 / ANGLE_SCALE,
                    dy: read_as!(u32, buf, 67) as f64 / ANGLE_SCALE,
                    scan_mode: buf[71],
                })
            }
            n => Err(GribError::UnknownTemplate(3, n)),
        }
    }
}
