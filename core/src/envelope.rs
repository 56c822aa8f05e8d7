//! Response envelope constructors for the mock backend.
//!
//! # Design
//! Every mock endpoint answers with the same `{ code, data, error, msg }`
//! envelope the admin panel's request client expects. Success and error are
//! told apart by `code` (0 / -1), never by throwing. The `error` detail of an
//! error envelope is caller-supplied and is not auto-filled from `msg`; the
//! 403/401 helpers are the one place both carry the same string.

use serde::{Deserialize, Serialize};

/// `code` value of every success envelope.
pub const CODE_OK: i32 = 0;
/// `code` value of every error envelope.
pub const CODE_ERROR: i32 = -1;

/// Default message of [`forbidden`].
pub const FORBIDDEN_MSG: &str = "Forbidden Exception";
/// Message and error detail of [`unauthorized`].
pub const UNAUTHORIZED_MSG: &str = "Unauthorized Exception";

/// Uniform wrapper around mock API response data.
///
/// Serializes as `{ "code": ..., "data": ...|null, "error": ...|null, "msg": ... }`.
/// `code == 0` iff the value came from a success constructor, `code == -1`
/// iff it came from [`ResponseEnvelope::err`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope<T> {
    pub code: i32,
    pub data: Option<T>,
    pub error: Option<String>,
    pub msg: String,
}

impl<T> ResponseEnvelope<T> {
    /// Success envelope: `code = 0`, `error = None`, `msg = "ok"`.
    pub fn ok(data: T) -> Self {
        Self::ok_with_msg(data, "ok")
    }

    /// Success envelope with a caller-chosen message.
    pub fn ok_with_msg(data: T, msg: impl Into<String>) -> Self {
        Self {
            code: CODE_OK,
            data: Some(data),
            error: None,
            msg: msg.into(),
        }
    }

    /// Error envelope: `code = -1`, `data = None`.
    pub fn err(msg: impl Into<String>, error: Option<String>) -> Self {
        Self {
            code: CODE_ERROR,
            data: None,
            error,
            msg: msg.into(),
        }
    }
}

/// 403 plus an error envelope whose `msg` and `error` both carry `msg`.
///
/// `None` falls back to [`FORBIDDEN_MSG`].
pub fn forbidden(msg: Option<&str>) -> (u16, ResponseEnvelope<()>) {
    let msg = msg.unwrap_or(FORBIDDEN_MSG);
    (403, ResponseEnvelope::err(msg, Some(msg.to_string())))
}

/// 401 plus the fixed unauthorized error envelope.
pub fn unauthorized() -> (u16, ResponseEnvelope<()>) {
    (
        401,
        ResponseEnvelope::err(UNAUTHORIZED_MSG, Some(UNAUTHORIZED_MSG.to_string())),
    )
}
