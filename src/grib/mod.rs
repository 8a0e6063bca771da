pub(crate) mod products;
pub mod sections;
mod utils;

use crate::grib::sections::sect1::Identification;
use crate::grib::sections::sect3::GridDefinition;
use crate::grib::sections::sect4::ProductDefinition;
use crate::grib::sections::sect5::DataRepresentationDefinition;
use crate::grib::sections::sect6::BitMap;
use crate::grib::sections::sect7::SimplePackingDecoder;
use crate::grib::sections::Indicator;
use crate::grib::utils::as_unsigned;

pub(crate) const SECT0_IS_MAGIC: &[u8] = b"GRIB";
pub(crate) const SECT0_IS_SIZE: usize = 16;
const SECT_HEADER_SIZE: usize = 5;
const SECT8_ES_MAGIC: &[u8] = b"7777";

/// Total message length: a 7-byte big-endian field at this offset of
/// the indicator section.
const TOTAL_LENGTH_OFFSET: usize = 9;
const TOTAL_LENGTH_SIZE: usize = 7;

#[macro_export]
macro_rules! read_as {
    ($ty:ty, $buf:ident, $start:expr) => {{
        let end = $start + std::mem::size_of::<$ty>();
        <$ty>::from_be_bytes($buf[$start..end].try_into().unwrap())
    }};
}

pub type Result<T, E = GribError> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum GribError {
    #[error("NotGRIB")]
    NotGrib(),

    #[error("Truncated({0})")]
    Truncated(String),

    #[error("UnknownTemplate(section {0}, template {1})")]
    UnknownTemplate(u8, u16),

    #[error("DecodeError({0})")]
    DecodeError(String),
}

/// One GRIB2 message with a named slot per optional section. The format
/// guarantees each section number appears at most once per message but
/// does not guarantee order, and section 2 (plus any section an
/// originating centre omits) may simply be absent.
pub(crate) struct Message {
    pub(crate) indicator: Indicator,
    pub(crate) identification: Option<Identification>,
    pub(crate) grid_definition: Option<GridDefinition>,
    pub(crate) product_definition: Option<ProductDefinition>,
    pub(crate) data_representation: Option<DataRepresentationDefinition>,
    pub(crate) bitmap: Option<BitMap>,
    pub(crate) data: Option<Box<[u8]>>,
}

impl Message {
    fn new(indicator: Indicator) -> Self {
        Self {
            indicator,
            identification: None,
            grid_definition: None,
            product_definition: None,
            data_representation: None,
            bitmap: None,
            data: None,
        }
    }

    /// Unpacks the section 7 payload against the accumulated point
    /// count, packing parameters and bitmap. No data section means an
    /// empty value array, not an error.
    pub(crate) fn decode_values(&self) -> Result<Vec<Option<f64>>> {
        let data = match &self.data {
            Some(data) => data,
            None => return Ok(Vec::new()),
        };

        let data_representation = self
            .data_representation
            .as_ref()
            .ok_or_else(|| GribError::DecodeError(String::from("Missing Section 5")))?;
        let grid_definition = self
            .grid_definition
            .as_ref()
            .ok_or_else(|| GribError::DecodeError(String::from("Missing Section 3")))?;
        let bitmap = self.bitmap.as_ref().and_then(BitMap::active);

        SimplePackingDecoder {}.decode(data_representation, grid_definition.num_points, bitmap, data)
    }
}

/// Splits the buffer into messages and decodes each one's sections.
pub(crate) fn from_slice(buf: &[u8]) -> Result<Vec<Message>> {
    split_messages(buf)?.into_iter().map(split_sections).collect()
}

/// Each message declares its own total length inside its indicator
/// section; slice accordingly until the buffer is exhausted. A declared
/// length overrunning the remaining buffer is rejected rather than
/// silently sliced short.
fn split_messages(buf: &[u8]) -> Result<Vec<&[u8]>> {
    let mut messages = Vec::new();
    let mut ptr = 0;

    while ptr < buf.len() {
        if buf.len() - ptr < SECT0_IS_SIZE {
            return Err(GribError::Truncated(format!(
                "{} trailing bytes cannot hold an indicator section",
                buf.len() - ptr
            )));
        }

        let start = ptr + TOTAL_LENGTH_OFFSET;
        let total_length = as_unsigned(&buf[start..start + TOTAL_LENGTH_SIZE]) as usize;
        if total_length < SECT0_IS_SIZE || ptr + total_length > buf.len() {
            return Err(GribError::Truncated(format!(
                "Message at byte {} declares {} bytes, {} left",
                ptr,
                total_length,
                buf.len() - ptr
            )));
        }

        debug!("Message at byte {} : {} bytes", ptr, total_length);

        messages.push(&buf[ptr..ptr + total_length]);
        ptr += total_length;
    }

    Ok(messages)
}

/// Section 0 is the unconditional first 16 bytes; the "7777" end marker
/// terminates the scan. Everything in between self-declares a 4-byte
/// length and a 1-byte section number.
fn split_sections(msg: &[u8]) -> Result<Message> {
    let mut message = Message::new(Indicator::from_slice(msg)?);

    let mut ptr = SECT0_IS_SIZE;
    while ptr < msg.len() {
        if msg[ptr..].starts_with(SECT8_ES_MAGIC) {
            break;
        }
        if msg.len() - ptr < SECT_HEADER_SIZE {
            return Err(GribError::Truncated(format!(
                "{} bytes at offset {} hold neither a section header nor an end marker",
                msg.len() - ptr,
                ptr
            )));
        }

        let size = read_as!(u32, msg, ptr) as usize;
        let number = msg[ptr + 4];
        if size < SECT_HEADER_SIZE || ptr + size > msg.len() {
            return Err(GribError::Truncated(format!(
                "Section {} declares {} bytes, {} left",
                number,
                size,
                msg.len() - ptr
            )));
        }

        let section = &msg[ptr..ptr + size];
        debug!("Read section {} : {} bytes", number, size);

        match number {
            1 => message.identification = Some(Identification::from_slice(section)?),
            2 => {} // Local Use Section, opaque
            3 => message.grid_definition = Some(GridDefinition::from_slice(section)?),
            4 => {
                message.product_definition =
                    Some(ProductDefinition::from_slice(section, message.indicator.discipline)?)
            }
            5 => message.data_representation = Some(DataRepresentationDefinition::from_slice(section)?),
            6 => message.bitmap = Some(BitMap::from_slice(section)?),
            7 => message.data = Some(section[SECT_HEADER_SIZE..].to_vec().into_boxed_slice()),
            n => warn!("Unknown section {}, skipping {} bytes", n, size),
        }

        ptr += size;
    }

    Ok(message)
}
