//! Error taxonomy for the scrape pipeline.
//!
//! Every variant is fatal: nothing in the pipeline catches or retries, so
//! each error propagates to `main` and aborts the run.

use thiserror::Error;

/// Errors raised while fetching or extracting listings.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The listings request returned a non-success HTTP status.
    #[error("request to {url} failed with status {status}")]
    Fetch { url: String, status: u16 },

    /// The page is not in the encoding this scraper is written against.
    #[error("page encoding is {declared:?}, expected {expected:?}")]
    EncodingMismatch {
        declared: String,
        expected: &'static str,
    },

    /// A row pair did not have the structure the extraction rules expect.
    #[error("malformed listing row: {0}")]
    Structure(String),

    /// A captured price substring did not parse as a number.
    #[error("unparsable price text: {0:?}")]
    PriceFormat(String),
}

impl ScrapeError {
    pub(crate) fn structure(msg: impl Into<String>) -> Self {
        ScrapeError::Structure(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ScrapeError::Fetch {
            url: "http://example.com/listings".to_string(),
            status: 503,
        };
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("http://example.com/listings"));

        let err = ScrapeError::EncodingMismatch {
            declared: "iso-8859-1".to_string(),
            expected: "utf-8",
        };
        assert!(err.to_string().contains("iso-8859-1"));
        assert!(err.to_string().contains("utf-8"));

        let err = ScrapeError::structure("no detail row");
        assert!(err.to_string().contains("no detail row"));

        let err = ScrapeError::PriceFormat("1,2,x".to_string());
        assert!(err.to_string().contains("1,2,x"));
    }
}
