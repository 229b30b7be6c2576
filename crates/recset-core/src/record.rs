//! Record-set value types and the IP-to-record mapper
//!
//! Wire shapes follow the zone API's change-batch format: a record set is
//! replaced or removed wholesale through a batch carrying a single
//! UPSERT/DELETE change. Field names serialize in the API's PascalCase form.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// TTL applied to every record set this crate writes
pub const RECORD_TTL: u64 = 60;

/// Maximum number of resource records in a single record set
pub const MAX_RECORD_SET_SIZE: usize = 400;

/// Comment attached to every change batch
pub const CHANGE_COMMENT: &str = "Automatic";

/// Identifies a target record: which zone, which name
///
/// Pure value; equality and hashing are by value. Created by the caller per
/// reconciliation request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordSetLocator {
    /// Opaque provider identifier of the zone
    pub zone_id: String,
    /// Fully-qualified domain name of the record
    pub record_name: String,
}

impl RecordSetLocator {
    /// Create a locator for a record in a zone
    pub fn new(zone_id: impl Into<String>, record_name: impl Into<String>) -> Self {
        Self {
            zone_id: zone_id.into(),
            record_name: record_name.into(),
        }
    }
}

/// Record type carried by reconciled record sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordType {
    /// A record (IPv4)
    A,
}

/// Wire representation of one IP value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceRecord {
    pub value: String,
}

/// Wire representation of a full record set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecordSet {
    pub name: String,
    #[serde(rename = "Type")]
    pub record_type: RecordType,
    #[serde(rename = "TTL")]
    pub ttl: u64,
    pub resource_records: Vec<ResourceRecord>,
}

impl RecordSet {
    /// Build the A record set that makes `record_name` resolve to `ips`
    pub fn for_ips(record_name: impl Into<String>, ips: &BTreeSet<String>) -> Self {
        Self {
            name: record_name.into(),
            record_type: RecordType::A,
            ttl: RECORD_TTL,
            resource_records: map_ips_to_records(ips),
        }
    }
}

/// Action applied to a record set within a change batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeAction {
    /// Idempotent create-or-replace
    Upsert,
    /// Remove the record set (must echo it exactly as currently stored)
    Delete,
}

/// One change within a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Change {
    pub action: ChangeAction,
    pub resource_record_set: RecordSet,
}

/// A batch of record-set changes submitted in one provider call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChangeBatch {
    pub comment: String,
    pub changes: Vec<Change>,
}

impl ChangeBatch {
    /// Build a batch carrying exactly one change
    ///
    /// The accessor never submits more than one change per call.
    pub fn single(action: ChangeAction, record_set: RecordSet) -> Self {
        Self {
            comment: CHANGE_COMMENT.to_string(),
            changes: vec![Change {
                action,
                resource_record_set: record_set,
            }],
        }
    }
}

/// Map a desired IP set to its wire records.
///
/// Output order is ascending by string value (the set's iteration order).
/// Sets larger than [`MAX_RECORD_SET_SIZE`] truncate to the first 400
/// entries in that order; zone APIs reject larger record sets outright.
///
/// Pure and total: never fails, no side effects.
pub fn map_ips_to_records(ips: &BTreeSet<String>) -> Vec<ResourceRecord> {
    ips.iter()
        .take(MAX_RECORD_SET_SIZE)
        .map(|ip| ResourceRecord { value: ip.clone() })
        .collect()
}
