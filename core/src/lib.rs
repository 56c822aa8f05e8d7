//! Response-shaping core for the admin-panel mock backend.
//!
//! # Overview
//! Builds the `{ code, data, error, msg }` envelopes and page slices the mock
//! HTTP layer returns to the frontend, without touching the network (the
//! server crate owns all I/O). Keeping this crate deterministic makes the
//! envelope contract testable without spinning up a server.
//!
//! # Design
//! - Success and error are both data, never `Err`: the component has no
//!   failure path of its own.
//! - The envelope is generic over its payload; each endpoint picks the `data`
//!   type at the call site instead of funnelling everything through JSON.
//! - `forbidden`/`unauthorized` return the HTTP status next to the envelope
//!   rather than mutating a shared response object, so the status decision
//!   stays visible at the call site.

pub mod envelope;
pub mod page;

pub use envelope::{
    forbidden, unauthorized, ResponseEnvelope, CODE_ERROR, CODE_OK, FORBIDDEN_MSG, UNAUTHORIZED_MSG,
};
pub use page::{page_ok, page_ok_with_msg, paginate, PageData, PageParam};
