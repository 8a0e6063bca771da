use crate::grib::utils::{Buffer, GribInt};
use crate::grib::{GribError, Result};
use crate::read_as;

/// Section 5: Data Representation Section.
pub struct DataRepresentationDefinition {
    /// Number of data points where one or more values are specified in
    /// Section 7 when a bit map is present, total number otherwise
    pub num_points: usize,
    /// Data Representation Template Number (see Code Table 5.0)
    pub template_number: u16,
    pub packing: SimplePacking,
}

impl DataRepresentationDefinition {
    pub(crate) fn from_slice(buf: &[u8]) -> Result<Self> {
        if buf.len() < 21 {
            return Err(GribError::Truncated(format!(
                "Section 5 needs 21 bytes, got {}",
                buf.len()
            )));
        }

        let template_number = read_as!(u16, buf, 9);

        Ok(DataRepresentationDefinition {
            num_points: read_as!(u32, buf, 5) as usize,
            template_number,
            packing: SimplePacking::from_template(template_number, &buf[11..])?,
        })
    }
}

/// Data Representation Template 5.0: grid point data, simple packing.
#[derive(Debug, Clone, Copy)]
pub struct SimplePacking {
    pub reference_value: f32,
    pub binary_scale_factor: i16,
    pub decimal_scale_factor: i16,
    pub num_bits: usize,
    /// Type of original field values (see Code Table 5.1): 0 float, 1 int
    pub values_type: u8,
}

impl SimplePacking {
    fn from_template(template_number: u16, bytes: &[u8]) -> Result<Self> {
        let mut buf = Buffer::new(bytes);

        match template_number {
            0 => Ok(SimplePacking {
                reference_value: buf.read(),
                binary_scale_factor: buf.read::<u16>().as_grib_int(),
                decimal_scale_factor: buf.read::<u16>().as_grib_int(),
                num_bits: buf.read::<u8>() as usize,
                values_type: buf.read(),
            }),
            n => Err(GribError::UnknownTemplate(5, n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template0_section(reference_value: f32, binary_raw: u16, decimal_raw: u16, num_bits: u8) -> Vec<u8> {
        let mut buf = vec![0u8; 21];
        buf[0..4].copy_from_slice(&21u32.to_be_bytes());
        buf[4] = 5;
        buf[5..9].copy_from_slice(&65160u32.to_be_bytes());
        buf[9..11].copy_from_slice(&0u16.to_be_bytes());
        buf[11..15].copy_from_slice(&reference_value.to_be_bytes());
        buf[15..17].copy_from_slice(&binary_raw.to_be_bytes());
        buf[17..19].copy_from_slice(&decimal_raw.to_be_bytes());
        buf[19] = num_bits;
        buf[20] = 0;
        buf
    }

    #[test]
    fn template0_extracts_scales() {
        let drd = DataRepresentationDefinition::from_slice(&template0_section(201.5, 0x8002, 0x0001, 11)).unwrap();
        assert_eq!(drd.num_points, 65160);
        assert_eq!(drd.template_number, 0);
        assert_eq!(drd.packing.reference_value, 201.5);
        assert_eq!(drd.packing.binary_scale_factor, -2);
        assert_eq!(drd.packing.decimal_scale_factor, 1);
        assert_eq!(drd.packing.num_bits, 11);
    }

    #[test]
    fn unknown_template_is_fatal() {
        let mut buf = template0_section(0.0, 0, 0, 8);
        buf[9..11].copy_from_slice(&40u16.to_be_bytes());
        assert!(matches!(
            DataRepresentationDefinition::from_slice(&buf),
            Err(GribError::UnknownTemplate(5, 40))
        ));
    }
}
