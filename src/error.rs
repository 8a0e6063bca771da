use crate::grib::GribError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("GribError: {0}")]
    GribError(#[from] GribError),

    #[error("IoError: {0}")]
    IoError(#[from] std::io::Error),

    #[error("ReqwestError: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("JsonError: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("DownloadError: status={status}, url={url}")]
    DownloadError { status: http::StatusCode, url: String },

    #[error("InputTooShort({0})")]
    InputTooShort(usize),
}
