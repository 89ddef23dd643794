use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure taxonomy for the course page pipeline.
///
/// The first three variants are all dataset-loading failures and halt
/// rendering. `Configuration` covers a page URL or config file that
/// cannot drive the page at all. `LookupMiss` is the only recoverable
/// case: the deep link gives up but the page stays usable.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read course data: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse course data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to fetch course data: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("invalid page configuration: {0}")]
    Configuration(String),

    #[error("no course matching code {code:?} on the SEM{term} tab")]
    LookupMiss { term: u32, code: String },
}

impl Error {
    /// True for any failure to retrieve or decode the dataset.
    pub fn is_data_load(&self) -> bool {
        matches!(self, Error::Io(_) | Error::Parse(_) | Error::Fetch(_))
    }
}
