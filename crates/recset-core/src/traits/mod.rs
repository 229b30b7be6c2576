//! Core traits for record-set reconciliation
//!
//! - [`ZoneClient`]: read and mutate record sets through a zone API

pub mod zone_client;

pub use zone_client::ZoneClient;
