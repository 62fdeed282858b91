#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod context;
mod error;
mod extract;

pub use context::{PROVIDER_API_KEY_HEADER, RequestContext};
pub use error::{HttpError, error_response};
pub use extract::{ExtractPayload, PayloadRejection};
