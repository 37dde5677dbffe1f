//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod admin;
pub mod applications;
pub mod auth;
pub mod companies;
pub mod dashboard;
pub mod health;
pub mod jobs;
pub mod profile;
pub mod stats;
