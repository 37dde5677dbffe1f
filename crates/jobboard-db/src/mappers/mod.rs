//! Mappers - convert database models into domain entities
//!
//! Enum columns are stored as text and parsed here, so a row with an
//! unknown value surfaces as a `DomainError` instead of a panic.

mod activity_log;
mod application;
mod company;
mod job;
mod user;
