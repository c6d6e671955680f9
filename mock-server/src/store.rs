//! In-memory record store shared by all handlers.
//!
//! Records are kept as raw JSON so the server echoes whatever fields a
//! client sends, the way the real backend round-trips its DTOs. Each
//! collection numbers its records from 1.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;

pub type Db = Arc<RwLock<Store>>;

#[derive(Debug, Default)]
pub struct Store {
    collections: HashMap<&'static str, Collection>,
    sequences: HashMap<&'static str, i64>,
}

#[derive(Debug, Default)]
pub struct Collection {
    records: BTreeMap<i64, Value>,
}

impl Store {
    /// Next identifier of the sequence named `key`, starting at 1.
    pub fn next_id(&mut self, key: &'static str) -> i64 {
        let seq = self.sequences.entry(key).or_insert(0);
        *seq += 1;
        *seq
    }

    /// Insert or replace a record. A record without an `id` gets one past
    /// the highest id seen so far.
    pub fn save(&mut self, resource: &'static str, mut record: Value) -> Value {
        let id = match id_of(&record) {
            Some(id) => {
                let seq = self.sequences.entry(resource).or_insert(0);
                *seq = (*seq).max(id);
                id
            }
            None => {
                let id = self.next_id(resource);
                record["id"] = Value::from(id);
                id
            }
        };
        self.collections
            .entry(resource)
            .or_default()
            .records
            .insert(id, record.clone());
        record
    }

    pub fn get(&self, resource: &str, id: i64) -> Option<&Value> {
        self.collections.get(resource)?.records.get(&id)
    }

    pub fn get_mut(&mut self, resource: &str, id: i64) -> Option<&mut Value> {
        self.collections.get_mut(resource)?.records.get_mut(&id)
    }

    pub fn remove(&mut self, resource: &str, id: i64) -> Option<Value> {
        self.collections.get_mut(resource)?.records.remove(&id)
    }

    /// Records in id order.
    pub fn all(&self, resource: &str) -> impl Iterator<Item = &Value> {
        self.collections
            .get(resource)
            .into_iter()
            .flat_map(|c| c.records.values())
    }

    pub fn find_by(&self, resource: &str, field: &str, value: &str) -> Option<&Value> {
        self.all(resource)
            .find(|record| record.get(field).and_then(Value::as_str) == Some(value))
    }
}

pub fn id_of(record: &Value) -> Option<i64> {
    record.get("id").and_then(Value::as_i64)
}

/// Id of the article a line or movement points at.
pub fn article_id_of(record: &Value) -> Option<i64> {
    record.get("article").and_then(id_of)
}
