// # recset-core
//
// Core library for idempotent DNS A-record-set reconciliation.
//
// ## Architecture Overview
//
// This library reconciles the desired set of IPv4 addresses behind a named
// service against a zone API's authoritative record state:
//
// - **RecordSetLocator**: identifies which zone/record a call acts on
// - **map_ips_to_records**: pure translation of a desired IP set into wire records
// - **retry_with_backoff**: backoff retrier that retries throttling failures only
// - **RecordSetAccessor**: read → decide → execute-with-retry over a ZoneClient
// - **ZoneClient**: capability trait implemented by provider crates and test fakes
//
// ## Design Principles
//
// 1. **Injection over globals**: the provider capability is constructor-injected
// 2. **Orchestration owns retry**: clients stay single-shot, the accessor retries
// 3. **Stateless reconciliation**: zone state is read fresh on every call
// 4. **Full replacement**: upserts replace the record set wholesale, no diffing

pub mod accessor;
pub mod config;
pub mod error;
pub mod record;
pub mod retry;
pub mod traits;

// Re-export core types for convenience
pub use accessor::RecordSetAccessor;
pub use config::{AccessorConfig, ProviderConfig, RecsetConfig};
pub use error::{Error, Result};
pub use record::{
    ChangeAction, ChangeBatch, RecordSet, RecordSetLocator, ResourceRecord, map_ips_to_records,
};
pub use retry::{exponential_backoff, retry_with_backoff};
pub use traits::ZoneClient;
