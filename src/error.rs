use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::env;
use std::fmt::{self, Debug, Display};

pub const INVALID_INPUT: i32 = 101;
pub const NOT_FOUND: i32 = 104;
pub const RATE_LIMITED: i32 = 429;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl Error {
    pub fn is_rate_limited(&self) -> bool {
        self.code == RATE_LIMITED
    }

    pub fn is_invalid_input(&self) -> bool {
        self.code == INVALID_INPUT
    }

    pub fn is_internal(&self) -> bool {
        (1..=99).contains(&self.code)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for Error {}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        database_error(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        reqwest_error(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        decode_error(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match self.code {
            1..=99 => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
            NOT_FOUND => (StatusCode::NOT_FOUND, self.message.as_str()),
            RATE_LIMITED => (StatusCode::TOO_MANY_REQUESTS, self.message.as_str()),
            _ => (StatusCode::BAD_REQUEST, self.message.as_str()),
        };

        let body = Json(json!({
            "code": self.code,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub fn invalid_input_error() -> Error {
    Error {
        code: INVALID_INPUT,
        message: "invalid input".into(),
    }
}

/// Input rejected by participant validation. `detail` names the offending
/// participant or field.
pub fn validation_error(rule: &str, detail: impl Display) -> Error {
    Error {
        code: INVALID_INPUT,
        message: format!("{}: {}", rule, detail),
    }
}

pub fn not_found_error(what: &str) -> Error {
    Error {
        code: NOT_FOUND,
        message: format!("{} not found", what),
    }
}

pub fn expired_error(what: &str) -> Error {
    Error {
        code: NOT_FOUND,
        message: format!("{} expired", what),
    }
}

pub fn rate_limited_error() -> Error {
    Error {
        code: RATE_LIMITED,
        message: "provider rate limited".into(),
    }
}

pub fn env_var_error(_: env::VarError) -> Error {
    Error {
        code: 1,
        message: "environment variable error".into(),
    }
}

pub fn database_error<T: Debug>(err: T) -> Error {
    tracing::error!("database error: {:?}", err);

    Error {
        code: 2,
        message: "database error".into(),
    }
}

pub fn reqwest_error(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        tracing::warn!("provider request timed out");
    }

    Error {
        code: 3,
        message: "reqwest error".into(),
    }
}

pub fn upstream_error() -> Error {
    Error {
        code: 4,
        message: "upstream error".into(),
    }
}

pub fn decode_error<T: Debug>(err: T) -> Error {
    tracing::error!("decode error: {:?}", err);

    Error {
        code: 6,
        message: "decode error".into(),
    }
}
