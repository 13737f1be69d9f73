use http::StatusCode;
use reqwest::Url;

use crate::{api::transport::TransportError, core::time_period::TimePeriod};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Not authenticated or the token has expired: authenticate again.
    #[error(transparent)]
    Authentication(#[from] AuthenticationError),

    #[error("you must resolve the system before you can use this API")]
    System,

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl Error {
    #[must_use]
    pub const fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication(_))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("you must authenticate before you can use this API")]
    Missing,

    #[error("authentication has expired")]
    Expired,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("the Geo Together API call failed with status {0}")]
    Status(StatusCode),

    #[error("cannot get historic usage for `{0}`, use the periodic usage instead")]
    NoDateRange(TimePeriod),

    #[error("the requested period is out of the supported calendar range")]
    OutOfRange,

    #[error("connectivity error")]
    Connectivity(#[source] TransportError),

    #[error("failed to deserialize the response")]
    Payload(#[from] serde_json::Error),

    #[error("`{0}` is missing from the response")]
    MissingField(&'static str),

    #[error("`{0}` cannot be used as the base URL")]
    BaseUrl(Url),

    #[error("failed to build the query string")]
    Query(#[from] serde_qs::Error),
}
