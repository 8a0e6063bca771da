use crate::grib::products::{self, ProductInfo};
use crate::grib::{GribError, Result};
use crate::read_as;

/// Section 4: Product Definition Section. The catalog entry is resolved
/// here because the key needs the discipline from section 0.
pub struct ProductDefinition {
    /// Number of coordinate values after Template
    pub num_coordinates: u16,
    /// Product Definition Template Number (see Code Table 4.0)
    pub template_number: u16,
    pub product: Product0,
    pub info: Option<&'static ProductInfo>,
}

impl ProductDefinition {
    pub(crate) fn from_slice(buf: &[u8], discipline: u8) -> Result<Self> {
        if buf.len() < 9 {
            return Err(GribError::Truncated(format!(
                "Section 4 needs 9 bytes, got {}",
                buf.len()
            )));
        }

        let template_number = read_as!(u16, buf, 7);
        let product = Product0::from_template(template_number, buf)?;
        let info = products::lookup(discipline, product.parameter_category, product.parameter_number);

        Ok(ProductDefinition {
            num_coordinates: read_as!(u16, buf, 5),
            template_number,
            product,
            info,
        })
    }
}

/// Product Definition Template 4.0 (analysis or forecast at a horizontal
/// level). Template 4.2 (ensemble derived) shares this layout for the
/// fields we extract.
pub struct Product0 {
    /// Parameter category (see Code Table 4.1)
    pub parameter_category: u8,
    /// Parameter number (see Code Table 4.2)
    pub parameter_number: u8,
    pub type_of_generating_process: u8,
    pub gen_process_type: u8,
    pub forecast_generating_process: u8,
    pub hours_after_ref_time: u16,
    pub forecast_time: u32,
    pub first_surface: Surface,
    pub second_surface: Surface,
}

pub struct Surface {
    pub surface_type: u8,
    pub scale_factor: u8,
    pub scaled_value: u32,
}

impl Product0 {
    fn from_template(template_number: u16, buf: &[u8]) -> Result<Self> {
        match template_number {
            0 | 2 => {
                if buf.len() < 34 {
                    return Err(GribError::Truncated(format!(
                        "Product template {} needs 34 bytes, got {}",
                        template_number,
                        buf.len()
                    )));
                }

                Ok(Product0 {
                    parameter_category: buf[9],
                    parameter_number: buf[10],
                    type_of_generating_process: buf[11],
                    gen_process_type: buf[12],
                    forecast_generating_process: buf[13],
                    hours_after_ref_time: read_as!(u16, buf, 14),
                    forecast_time: read_as!(u32, buf, 18),
                    first_surface: Surface {
                        surface_type: buf[22],
                        scale_factor: buf[23],
                        scaled_value: read_as!(u32, buf, 24),
                    },
                    second_surface: Surface {
                        surface_type: buf[28],
                        scale_factor: buf[29],
                        scaled_value: read_as!(u32, buf, 30),
                    },
                })
            }
            n => Err(GribError::UnknownTemplate(4, n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template0_section(category: u8, number: u8) -> Vec<u8> {
        let mut buf = vec![0u8; 34];
        buf[0..4].copy_from_slice(&34u32.to_be_bytes());
        buf[4] = 4;
        buf[7..9].copy_from_slice(&0u16.to_be_bytes());
        buf[9] = category;
        buf[10] = number;
        buf[12] = 2;
        buf[18..22].copy_from_slice(&6u32.to_be_bytes());
        buf[22] = 103;
        buf[24..28].copy_from_slice(&10u32.to_be_bytes());
        buf[28] = 255;
        buf
    }

    #[test]
    fn template0_extracts_and_resolves_catalog() {
        let pd = ProductDefinition::from_slice(&template0_section(2, 2), 0).unwrap();
        assert_eq!(pd.template_number, 0);
        assert_eq!(pd.product.parameter_category, 2);
        assert_eq!(pd.product.gen_process_type, 2);
        assert_eq!(pd.product.forecast_time, 6);
        assert_eq!(pd.product.first_surface.surface_type, 103);
        assert_eq!(pd.product.first_surface.scaled_value, 10);
        assert_eq!(pd.product.second_surface.surface_type, 255);
        assert_eq!(pd.info.unwrap().abbrev, "UGRD");
    }

    #[test]
    fn catalog_miss_is_not_fatal() {
        let pd = ProductDefinition::from_slice(&template0_section(9, 9), 9).unwrap();
        assert!(pd.info.is_none());
    }

    #[test]
    fn template2_shares_the_layout() {
        let mut buf = template0_section(2, 3);
        buf[7..9].copy_from_slice(&2u16.to_be_bytes());
        let pd = ProductDefinition::from_slice(&buf, 0).unwrap();
        assert_eq!(pd.template_number, 2);
        assert_eq!(pd.info.unwrap().abbrev, "VGRD");
    }

    #[test]
    fn unknown_template_is_fatal() {
        let mut buf = template0_section(2, 2);
        buf[7..9].copy_from_slice(&8u16.to_be_bytes());
        assert!(matches!(
            ProductDefinition::from_slice(&buf, 0),
            Err(GribError::UnknownTemplate(4, 8))
        ));
    }
}
