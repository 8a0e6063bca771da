use crate::grib::sections::sect5::{DataRepresentationDefinition, SimplePacking};
use crate::grib::utils::BitwiseIterator;
use crate::grib::{GribError, Result};

/// Grid point data, simple packing: codeword `raw` maps to
/// `(R + raw * 2^E) / 10^D`, rounded to 4 decimal digits to match the
/// output of cambecc's grib2json tool.
///
/// A bitmap 0-bit yields a masked point without consuming a codeword;
/// only present points draw from the bitstream.
pub(crate) struct SimplePackingDecoder {}

impl SimplePackingDecoder {
    pub(crate) fn decode(
        &self,
        data_repr_def: &DataRepresentationDefinition,
        num_points: usize,
        bitmap: Option<&[u8]>,
        slice: &[u8],
    ) -> Result<Vec<Option<f64>>> {
        let SimplePacking {
            reference_value,
            binary_scale_factor,
            decimal_scale_factor,
            num_bits,
            ..
        } = data_repr_def.packing;

        let binary_scale = 2_f64.powi(i32::from(binary_scale_factor));
        let decimal_scale = 10_f64.powi(i32::from(decimal_scale_factor));

        let mut codewords = BitwiseIterator::<u32>::new(slice, num_bits);
        let mut values = Vec::with_capacity(num_points);

        for point in 0..num_points {
            if let Some(bits) = bitmap {
                if !bit_is_set(bits, point) {
                    values.push(None);
                    continue;
                }
            }

            // num_bits == 0 packs a constant field: every present point
            // decodes as codeword 0.
            let raw = if num_bits == 0 {
                0
            } else {
                codewords.next().ok_or_else(|| {
                    GribError::DecodeError(format!(
                        "Data section exhausted at point {}/{}",
                        point, num_points
                    ))
                })?
            };

            let value = (reference_value as f64 + f64::from(raw) * binary_scale) / decimal_scale;
            values.push(Some(round4(value)));
        }

        Ok(values)
    }
}

fn bit_is_set(bits: &[u8], i: usize) -> bool {
    bits.get(i / 8).map_or(false, |b| b >> (7 - i % 8) & 1 == 1)
}

fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}
