use http::StatusCode;

use crate::error::{Error, Result};

/// Where the raw GRIB2 bytes come from: a URL fetched once (no retry,
/// no backoff), or an already materialized buffer.
pub enum Source {
    Url(String),
    Bytes(Vec<u8>),
}

/// Smaller than this and the buffer cannot hold even the fixed fields
/// of an indicator section.
const MIN_GRIB_SIZE: usize = 10;

pub(crate) async fn retrieve(source: Source) -> Result<Vec<u8>> {
    let bytes = match source {
        Source::Bytes(bytes) => bytes,
        Source::Url(url) => download(url).await?,
    };

    if bytes.len() < MIN_GRIB_SIZE {
        return Err(Error::InputTooShort(bytes.len()));
    }

    Ok(bytes)
}

async fn download(url: String) -> Result<Vec<u8>> {
    let client = reqwest::Client::new();
    let req = client.get(&url).build()?;

    debug!("Downloading {}", req.url());

    let response = client.execute(req).await?;
    match response.status() {
        StatusCode::OK => Ok(response.bytes().await?.to_vec()),
        status => Err(Error::DownloadError { status, url }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn materialized_bytes_bypass_retrieval() {
        let bytes = vec![0u8; 32];
        assert_eq!(retrieve(Source::Bytes(bytes.clone())).await.unwrap(), bytes);
    }

    #[tokio::test]
    async fn undersized_input_is_fatal() {
        let result = retrieve(Source::Bytes(vec![0u8; 9])).await;
        assert!(matches!(result, Err(Error::InputTooShort(9))));
    }
}
