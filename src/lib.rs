//! A basic GRIB2 reader: splits a buffer into messages and sections,
//! decodes the template-0 section layouts, unpacks simple-packed grid
//! point data and serializes one `{header, data}` record per message.

#[macro_use]
extern crate log;

mod error;
mod fetch;
mod grib;
mod output;

pub use error::{Error, Result};
pub use fetch::Source;
pub use grib::GribError;
pub use output::{Header, HeaderValue, Message};

/// Decodes every message in an in-memory GRIB2 buffer.
pub fn decode(buf: &[u8]) -> Result<Vec<Message>, GribError> {
    grib::from_slice(buf)?.iter().map(output::render).collect()
}

/// Retrieves the raw bytes (or takes them as given) and renders the
/// decoded messages as indented JSON, one record per message.
pub async fn grib2json(source: Source) -> Result<String> {
    let bytes = fetch::retrieve(source).await?;
    let messages = decode(&bytes)?;

    Ok(serde_json::to_string_pretty(&messages)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grib::testdata::SynthMessage;

    #[tokio::test]
    async fn end_to_end_json_round_trip() {
        let buf = SynthMessage::default().build();
        let json = grib2json(Source::Bytes(buf)).await.unwrap();

        let records: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(records[0]["header"]["parameterName"], "UGRD");
        assert_eq!(records[0]["data"], serde_json::json!([5.0, 200.0]));
    }

    #[test]
    fn fatal_template_leaves_no_partial_output() {
        let buf = SynthMessage {
            grid_template: 99,
            ..Default::default()
        }
        .build();
        assert!(decode(&buf).is_err());
    }
}
