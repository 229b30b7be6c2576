//! Test doubles and common utilities for reconciliation contract tests
//!
//! This module provides an in-memory zone that applies change batches the
//! way a real provider would, while recording every call for assertions.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use recset_core::error::Result;
use recset_core::record::{ChangeAction, ChangeBatch, RecordSet};
use recset_core::traits::ZoneClient;

/// One observed mutating call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservedChange {
    pub zone_id: String,
    pub change_batch: ChangeBatch,
}

/// An in-memory ZoneClient that tracks calls
pub struct InMemoryZoneClient {
    /// Zone state: (zone id, record name) -> record set
    records: Arc<Mutex<HashMap<(String, String), RecordSet>>>,
    /// Every change_record_sets call, in order
    changes: Arc<Mutex<Vec<ObservedChange>>>,
    /// Call counter for list_record_sets()
    list_call_count: Arc<AtomicUsize>,
}

impl InMemoryZoneClient {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(HashMap::new())),
            changes: Arc::new(Mutex::new(Vec::new())),
            list_call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Seed the zone with a record set (keyed by the set's own name)
    pub fn with_record(self, zone_id: &str, record_set: RecordSet) -> Self {
        self.records.lock().unwrap().insert(
            (zone_id.to_string(), record_set.name.clone()),
            record_set,
        );
        self
    }

    /// Get the number of times list_record_sets() was called
    pub fn list_call_count(&self) -> usize {
        self.list_call_count.load(Ordering::SeqCst)
    }

    /// Get the observed mutating calls, in order
    pub fn observed_changes(&self) -> Vec<ObservedChange> {
        self.changes.lock().unwrap().clone()
    }

    /// Get the record set currently stored for a name, if any
    pub fn record_set(&self, zone_id: &str, record_name: &str) -> Option<RecordSet> {
        self.records
            .lock()
            .unwrap()
            .get(&(zone_id.to_string(), record_name.to_string()))
            .cloned()
    }

    /// Whether the zone holds no record sets at all
    pub fn is_empty(&self) -> bool {
        self.records.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl ZoneClient for InMemoryZoneClient {
    async fn list_record_sets(&self, zone_id: &str, record_name: &str) -> Result<Vec<RecordSet>> {
        self.list_call_count.fetch_add(1, Ordering::SeqCst);

        // match the queried name exactly, tolerating a stored trailing dot
        // the way real zone APIs normalize names
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .filter(|(key, _)| {
                key.0 == zone_id
                    && (key.1 == record_name || key.1.strip_suffix('.') == Some(record_name))
            })
            .map(|(_, record_set)| record_set.clone())
            .collect())
    }

    async fn change_record_sets(&self, zone_id: &str, change_batch: &ChangeBatch) -> Result<()> {
        self.changes.lock().unwrap().push(ObservedChange {
            zone_id: zone_id.to_string(),
            change_batch: change_batch.clone(),
        });

        let mut records = self.records.lock().unwrap();
        for change in &change_batch.changes {
            let key = (zone_id.to_string(), change.resource_record_set.name.clone());
            match change.action {
                ChangeAction::Upsert => {
                    records.insert(key, change.resource_record_set.clone());
                }
                ChangeAction::Delete => {
                    records.remove(&key);
                }
            }
        }
        Ok(())
    }
}
