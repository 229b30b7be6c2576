//! Contract test: retry policy placement and classification
//!
//! Verifies that the retry policy is owned by the accessor and applies only
//! to mutating calls:
//! - throttled changes spend the full attempt budget, then propagate
//! - every other failure propagates after a single attempt
//! - the initial read is issued once and never retried
//!
//! If these fail, retry logic has moved to the wrong layer or started
//! retrying the wrong class of failure.

mod common;

use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use common::InMemoryZoneClient;
use recset_core::RecordSetAccessor;
use recset_core::error::{Error, Result};
use recset_core::record::{ChangeBatch, RecordSet, RecordSetLocator};
use recset_core::traits::ZoneClient;

const NO_BACKOFF: fn(u32) -> Duration = |_| Duration::ZERO;

/// A client whose reads succeed (empty zone) and whose mutating calls
/// always fail with a scripted error
struct FailingChangeClient {
    list_calls: AtomicUsize,
    change_calls: AtomicUsize,
    error: fn() -> Error,
}

impl FailingChangeClient {
    fn new(error: fn() -> Error) -> Self {
        Self {
            list_calls: AtomicUsize::new(0),
            change_calls: AtomicUsize::new(0),
            error,
        }
    }
}

#[async_trait]
impl ZoneClient for FailingChangeClient {
    async fn list_record_sets(&self, _zone_id: &str, _record_name: &str) -> Result<Vec<RecordSet>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }

    async fn change_record_sets(&self, _zone_id: &str, _change_batch: &ChangeBatch) -> Result<()> {
        self.change_calls.fetch_add(1, Ordering::SeqCst);
        Err((self.error)())
    }
}

/// A client whose reads fail before any change can be issued
struct FailingListClient {
    list_calls: AtomicUsize,
    change_calls: AtomicUsize,
    error: fn() -> Error,
}

impl FailingListClient {
    fn new(error: fn() -> Error) -> Self {
        Self {
            list_calls: AtomicUsize::new(0),
            change_calls: AtomicUsize::new(0),
            error,
        }
    }
}

#[async_trait]
impl ZoneClient for FailingListClient {
    async fn list_record_sets(&self, _zone_id: &str, _record_name: &str) -> Result<Vec<RecordSet>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Err((self.error)())
    }

    async fn change_record_sets(&self, _zone_id: &str, _change_batch: &ChangeBatch) -> Result<()> {
        self.change_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn desired() -> BTreeSet<String> {
    ["1.1.1.1".to_string()].into_iter().collect()
}

fn locator() -> RecordSetLocator {
    RecordSetLocator::new("zone-1", "service.example.com")
}

#[tokio::test]
async fn throttled_changes_spend_the_attempt_budget() {
    let client = Arc::new(FailingChangeClient::new(|| Error::throttled("rate exceeded")));
    let accessor = RecordSetAccessor::new(client.clone())
        .with_attempts(3)
        .with_backoff(NO_BACKOFF);

    let result = accessor.update(&locator(), &desired()).await;

    assert!(matches!(result, Err(Error::Throttled(_))));
    assert_eq!(
        client.change_calls.load(Ordering::SeqCst),
        3,
        "a throttled change must be attempted exactly as many times as the budget allows"
    );
    assert_eq!(client.list_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn provider_rejections_are_not_retried() {
    let client = Arc::new(FailingChangeClient::new(|| {
        Error::invalid_request("malformed change batch")
    }));
    let accessor = RecordSetAccessor::new(client.clone())
        .with_attempts(5)
        .with_backoff(NO_BACKOFF);

    let result = accessor.update(&locator(), &desired()).await;

    assert!(matches!(result, Err(Error::InvalidRequest(_))));
    assert_eq!(
        client.change_calls.load(Ordering::SeqCst),
        1,
        "non-throttling rejections must propagate after a single attempt"
    );
}

#[tokio::test]
async fn unclassified_failures_are_not_retried() {
    let client = Arc::new(FailingChangeClient::new(|| {
        Error::http("connection reset by peer")
    }));
    let accessor = RecordSetAccessor::new(client.clone())
        .with_attempts(5)
        .with_backoff(NO_BACKOFF);

    let result = accessor.update(&locator(), &desired()).await;

    assert!(matches!(result, Err(Error::Http(_))));
    assert_eq!(client.change_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn read_failures_propagate_without_retry_or_mutation() {
    // even a throttled read is not retried: the backoff policy covers
    // mutating calls only
    let client = Arc::new(FailingListClient::new(|| Error::throttled("rate exceeded")));
    let accessor = RecordSetAccessor::new(client.clone())
        .with_attempts(5)
        .with_backoff(NO_BACKOFF);

    let result = accessor.update(&locator(), &desired()).await;

    assert!(matches!(result, Err(Error::Throttled(_))));
    assert_eq!(client.list_calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        client.change_calls.load(Ordering::SeqCst),
        0,
        "a failed read must not produce a mutating call"
    );
}

#[tokio::test]
async fn successful_changes_do_not_burn_extra_attempts() {
    let client = Arc::new(InMemoryZoneClient::new());
    let accessor = RecordSetAccessor::new(client.clone())
        .with_attempts(5)
        .with_backoff(NO_BACKOFF);

    accessor.update(&locator(), &desired()).await.unwrap();

    assert_eq!(client.observed_changes().len(), 1);
}
