//! Snapshot do estado do store.
//!
//! Permite exportar e reconstruir um store a partir de JSON em memória.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::StoreResult;

use super::category::CategoryStore;

/// Versão atual do formato de snapshot.
pub const SNAPSHOT_VERSION: &str = "1.0";

/// Estado exportado de um [`CategoryStore`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// Versão do formato.
    pub version: String,
    /// Momento em que o snapshot foi tirado.
    pub taken_at: DateTime<Utc>,
    /// Capacidade por bin.
    pub capacity: usize,
    /// Valores por categoria, do mais antigo ao mais recente.
    pub bins: BTreeMap<String, Vec<i64>>,
}

impl StoreSnapshot {
    /// Serializa o snapshot como JSON.
    pub fn to_json(&self) -> StoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Lê um snapshot de JSON.
    pub fn from_json(json: &str) -> StoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl CategoryStore {
    /// Copia o estado atual para um snapshot.
    pub fn snapshot(&self) -> StoreSnapshot {
        let bins = self
            .bins
            .iter()
            .map(|(key, bin)| (key.clone(), bin.to_vec()))
            .collect();

        StoreSnapshot {
            version: SNAPSHOT_VERSION.to_string(),
            taken_at: Utc::now(),
            capacity: self.capacity,
            bins,
        }
    }

    /// Reconstrói um store a partir de um snapshot.
    ///
    /// Passa pelas mesmas validações de [`CategoryStore::new`].
    pub fn from_snapshot(snapshot: StoreSnapshot) -> StoreResult<Self> {
        if snapshot.version != SNAPSHOT_VERSION {
            tracing::warn!(
                version = %snapshot.version,
                expected = SNAPSHOT_VERSION,
                "Loading snapshot with unexpected version"
            );
        }
        Self::new(snapshot.capacity, snapshot.bins.into_iter().collect())
    }
}
