use std::fmt::Display;

use crate::error::{validation_error, Error};

pub mod recommend;
pub mod search;
pub mod share;

/// Extractor rejections (bad JSON, unknown category, malformed id) are client
/// input errors and render like any other validation failure.
pub(crate) fn rejected(rejection: impl Display) -> Error {
    tracing::debug!("request rejected: {}", rejection);
    validation_error("malformed request", rejection)
}
