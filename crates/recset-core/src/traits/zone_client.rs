// # Zone Client Trait
//
// Defines the interface for reading and mutating record sets through a DNS
// zone API.
//
// ## Implementations
//
// - HTTP JSON zone API: `recset-provider-http` crate
// - In-memory fakes: contract tests and embedding demos
//
// ## Usage
//
// ```rust,ignore
// use std::collections::BTreeSet;
// use std::sync::Arc;
// use recset_core::{RecordSetAccessor, RecordSetLocator};
//
// #[tokio::main]
// async fn main() -> anyhow::Result<()> {
//     let client: Arc<dyn recset_core::ZoneClient> = /* ZoneClient implementation */;
//     let accessor = RecordSetAccessor::new(client);
//
//     let locator = RecordSetLocator::new("Z123", "service.example.com");
//     let desired: BTreeSet<String> = ["10.0.0.1".to_string()].into_iter().collect();
//     accessor.update(&locator, &desired).await?;
//
//     Ok(())
// }
// ```

use async_trait::async_trait;

use crate::error::Result;
use crate::record::{ChangeBatch, RecordSet};

/// Capability for reading and mutating record sets in a provider zone
///
/// Implementations must be thread-safe and usable across async tasks. The
/// accessor injects one shared instance and reuses it for every call; the
/// client must hold no reconciliation state of its own.
///
/// ## Single-shot contract
///
/// Implementations execute one API call per method call. No internal retry,
/// backoff, caching, or scheduling — the accessor owns the retry policy, and
/// a client that retried on its own would multiply the attempt budget and
/// hide throttling from it.
///
/// ## Failure classification
///
/// Failures must be classifiable through
/// [`Error::is_throttling`](crate::Error::is_throttling): report rate
/// limiting as [`Error::Throttled`](crate::Error::Throttled) and every other
/// rejection through the remaining variants, preserving the provider's
/// original error content.
#[async_trait]
pub trait ZoneClient: Send + Sync {
    /// List the record sets matching `record_name` in `zone_id`
    ///
    /// The accessor queries for a single exact-name A record and considers
    /// only the first entry returned; implementations should filter
    /// server-side where the API allows it. An absent record is an empty
    /// list, not an error.
    async fn list_record_sets(&self, zone_id: &str, record_name: &str) -> Result<Vec<RecordSet>>;

    /// Apply one change batch (a single UPSERT or DELETE) to `zone_id`
    async fn change_record_sets(&self, zone_id: &str, change_batch: &ChangeBatch) -> Result<()>;
}
