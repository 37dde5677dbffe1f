//! Session storage module.
//!
//! Every issued access token carries a session id; the session record in
//! Redis decides whether that token is still accepted.

mod access_session;

pub use access_session::{SessionData, SessionStore};
