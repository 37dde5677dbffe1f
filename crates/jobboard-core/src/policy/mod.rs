//! Access policy - who may do what to which record
//!
//! Every ownership and role decision goes through [`authorize`]. Listing
//! endpoints do not deny; they narrow their query with [`ApplicationScope`].

mod authorize;
mod scope;

pub use authorize::{authorize, Action, Actor, Decision, DenyReason, Target};
pub use scope::ApplicationScope;
