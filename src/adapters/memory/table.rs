//! Tenant-keyed row storage shared by the in-memory repositories.

use std::collections::HashMap;
use std::hash::Hash;

use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, TenantId};

/// Rows keyed by `(tenant, id)`, so lookups from another tenant miss.
pub(crate) struct Table<K, V> {
    resource: &'static str,
    rows: RwLock<HashMap<(TenantId, K), V>>,
}

impl<K, V> Table<K, V>
where
    K: Copy + Eq + Hash + std::fmt::Display,
    V: Clone,
{
    pub fn new(resource: &'static str) -> Self {
        Self {
            resource,
            rows: RwLock::new(HashMap::new()),
        }
    }

    pub async fn insert(&self, tenant_id: TenantId, id: K, row: V) {
        self.rows.write().await.insert((tenant_id, id), row);
    }

    /// Replaces an existing row; a missing row is a not-found error.
    pub async fn replace(&self, tenant_id: TenantId, id: K, row: V) -> Result<(), DomainError> {
        match self.rows.write().await.get_mut(&(tenant_id, id)) {
            Some(existing) => {
                *existing = row;
                Ok(())
            }
            None => Err(DomainError::not_found(self.resource, id)),
        }
    }

    pub async fn get(&self, tenant_id: TenantId, id: K) -> Option<V> {
        self.rows.read().await.get(&(tenant_id, id)).cloned()
    }

    pub async fn contains(&self, tenant_id: TenantId, id: K) -> bool {
        self.rows.read().await.contains_key(&(tenant_id, id))
    }

    pub async fn remove(&self, tenant_id: TenantId, id: K) -> Result<V, DomainError> {
        self.rows
            .write()
            .await
            .remove(&(tenant_id, id))
            .ok_or_else(|| DomainError::not_found(self.resource, id))
    }

    /// Rows of `tenant_id` accepted by `keep`, in no particular order.
    pub async fn select(&self, tenant_id: TenantId, keep: impl Fn(&V) -> bool) -> Vec<V> {
        self.rows
            .read()
            .await
            .iter()
            .filter(|((tenant, _), row)| *tenant == tenant_id && keep(row))
            .map(|(_, row)| row.clone())
            .collect()
    }

    /// Drops every row of `tenant_id` matched by `drop_row`.
    pub async fn purge(&self, tenant_id: TenantId, drop_row: impl Fn(&V) -> bool) {
        self.rows
            .write()
            .await
            .retain(|(tenant, _), row| *tenant != tenant_id || !drop_row(row));
    }
}
