//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, pagination, and the
//! caller's address.

mod auth;
mod client_ip;
mod pagination;
mod path;
mod profile_form;
mod validated;

pub use auth::AuthUser;
pub use client_ip::ClientIp;
pub use pagination::{PageParams, PageQuery};
pub use path::IdPath;
pub use profile_form::ProfileMultipart;
pub use validated::ValidatedJson;
