//! Record-set accessor
//!
//! The accessor reconciles a desired IPv4 set against the zone's current
//! record set:
//!
//! 1. Read the current record set for the locator (issued once, never retried)
//! 2. Decide: upsert, delete, or no-op
//! 3. Execute the single mutating call through the backoff retrier
//! 4. Report: success, or the provider's failure unchanged
//!
//! ```text
//! caller ──► RecordSetAccessor::update ──► retry_with_backoff ──► ZoneClient
//!                      │
//!                      └── map_ips_to_records (pure)
//! ```
//!
//! The accessor holds no record state of its own; zone state is read fresh
//! from the provider on every call. Concurrent updates to the same locator
//! are not coordinated here — last write wins at the provider, and callers
//! needing stronger guarantees must serialize externally.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::error::Result;
use crate::record::{ChangeAction, ChangeBatch, RecordSet, RecordSetLocator};
use crate::retry::{DEFAULT_ATTEMPTS, exponential_backoff, retry_with_backoff};
use crate::traits::ZoneClient;

/// Reconciles the desired IPv4 set of one A record against zone state
pub struct RecordSetAccessor {
    client: Arc<dyn ZoneClient>,
    max_attempts: u32,
    backoff: fn(u32) -> Duration,
}

impl RecordSetAccessor {
    /// Create an accessor with the default attempt budget and exponential
    /// backoff schedule
    pub fn new(client: Arc<dyn ZoneClient>) -> Self {
        Self {
            client,
            max_attempts: DEFAULT_ATTEMPTS,
            backoff: exponential_backoff,
        }
    }

    /// Override the attempt budget for mutating calls
    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Override the backoff schedule for mutating calls
    pub fn with_backoff(mut self, backoff: fn(u32) -> Duration) -> Self {
        self.backoff = backoff;
        self
    }

    /// Reconcile the record at `locator` to resolve to exactly `desired_ips`
    ///
    /// An empty set removes the record (no-op when it does not exist); a
    /// non-empty set replaces the record set wholesale with an UPSERT — no
    /// diffing against the current content, since the upsert is idempotent
    /// at the provider. At most one mutating call is issued per invocation,
    /// and only mutating calls go through the retry policy.
    pub async fn update(
        &self,
        locator: &RecordSetLocator,
        desired_ips: &BTreeSet<String>,
    ) -> Result<()> {
        let existing = self.get_record_set(locator).await?;

        if desired_ips.is_empty() {
            match existing {
                // the delete must echo the record set exactly as read
                Some(record_set) => self.apply(locator, ChangeAction::Delete, record_set).await,
                None => {
                    debug!(
                        zone_id = %locator.zone_id,
                        record_name = %locator.record_name,
                        "no record to delete"
                    );
                    Ok(())
                }
            }
        } else {
            let record_set = RecordSet::for_ips(locator.record_name.as_str(), desired_ips);
            self.apply(locator, ChangeAction::Upsert, record_set).await
        }
    }

    /// Remove the record at `locator` if it exists
    pub async fn delete(&self, locator: &RecordSetLocator) -> Result<()> {
        self.update(locator, &BTreeSet::new()).await
    }

    /// Read the current record set for the locator
    ///
    /// Only the first listed candidate is considered, and only when its name
    /// matches the locator. Zone APIs return fully-qualified names with a
    /// trailing dot; tolerate it.
    async fn get_record_set(&self, locator: &RecordSetLocator) -> Result<Option<RecordSet>> {
        let record_sets = self
            .client
            .list_record_sets(&locator.zone_id, &locator.record_name)
            .await?;

        Ok(record_sets
            .into_iter()
            .next()
            .filter(|record_set| name_matches(&record_set.name, &locator.record_name)))
    }

    async fn apply(
        &self,
        locator: &RecordSetLocator,
        action: ChangeAction,
        record_set: RecordSet,
    ) -> Result<()> {
        info!(
            zone_id = %locator.zone_id,
            record_name = %locator.record_name,
            ?action,
            records = record_set.resource_records.len(),
            "applying record set change"
        );

        let change_batch = ChangeBatch::single(action, record_set);
        retry_with_backoff(
            || self.client.change_record_sets(&locator.zone_id, &change_batch),
            self.max_attempts,
            self.backoff,
        )
        .await
    }
}

fn name_matches(listed: &str, wanted: &str) -> bool {
    listed == wanted || listed.strip_suffix('.') == Some(wanted)
}
