//! Minimal embedding example for recset-core
//!
//! This example demonstrates driving the accessor as a library with a custom
//! ZoneClient. The in-memory client stands in for a real zone API; swap in
//! `recset_provider_http::HttpZoneClient` for live reconciliation.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use recset_core::error::Result;
use recset_core::record::{ChangeAction, ChangeBatch, RecordSet, RecordSetLocator};
use recset_core::traits::ZoneClient;
use recset_core::{AccessorConfig, ProviderConfig, RecordSetAccessor, RecsetConfig};
use recset_provider_http::HttpZoneClient;

/// In-memory zone state for the demo
struct EmbeddedZoneClient {
    records: Mutex<HashMap<String, RecordSet>>,
}

impl EmbeddedZoneClient {
    fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl ZoneClient for EmbeddedZoneClient {
    async fn list_record_sets(&self, _zone_id: &str, record_name: &str) -> Result<Vec<RecordSet>> {
        let records = self.records.lock().unwrap();
        Ok(records.get(record_name).cloned().into_iter().collect())
    }

    async fn change_record_sets(&self, _zone_id: &str, change_batch: &ChangeBatch) -> Result<()> {
        let mut records = self.records.lock().unwrap();
        for change in &change_batch.changes {
            let name = change.resource_record_set.name.clone();
            match change.action {
                ChangeAction::Upsert => {
                    println!(
                        "[Embedded] UPSERT {} -> {} record(s)",
                        name,
                        change.resource_record_set.resource_records.len()
                    );
                    records.insert(name, change.resource_record_set.clone());
                }
                ChangeAction::Delete => {
                    println!("[Embedded] DELETE {name}");
                    records.remove(&name);
                }
            }
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    println!("=== Embedded recset-core Example ===\n");

    let client = Arc::new(EmbeddedZoneClient::new());
    let accessor = RecordSetAccessor::new(client.clone());
    let locator = RecordSetLocator::new("demo-zone", "service.example.com");

    // 1. Reconcile towards two backing IPs
    let desired: BTreeSet<String> = ["10.0.0.2".to_string(), "10.0.0.1".to_string()]
        .into_iter()
        .collect();
    accessor.update(&locator, &desired).await?;

    // 2. Reconcile again with the same set: the upsert is idempotent
    accessor.update(&locator, &desired).await?;

    // 3. Scale down to one IP: full replacement, no diffing
    let desired: BTreeSet<String> = ["10.0.0.1".to_string()].into_iter().collect();
    accessor.update(&locator, &desired).await?;

    // 4. The service went away: an empty set removes the record
    accessor.update(&locator, &BTreeSet::new()).await?;

    // 5. Reconciling an absent record with an empty set is a no-op
    accessor.update(&locator, &BTreeSet::new()).await?;

    // A real deployment builds the client from configuration instead
    let config = RecsetConfig {
        provider: ProviderConfig {
            endpoint: "https://dns.example.net/api/v1".to_string(),
            api_token: "demo-token".to_string(),
            timeout_secs: 30,
        },
        accessor: AccessorConfig::default(),
    };
    config.validate()?;
    let http_client = HttpZoneClient::from_config(&config.provider)?;
    println!("\n[Embedded] configured live client: {http_client:?}");

    println!("\n=== Embedding Successful ===");
    println!("Key Points:");
    println!("- The zone client is injected, never a global");
    println!("- At most one mutating call per reconciliation");
    println!("- Deletes echo the record set exactly as read");

    Ok(())
}
