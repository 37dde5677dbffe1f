//! Domain events - facts recorded after state changes

mod admin_event;

pub use admin_event::AdminEvent;
