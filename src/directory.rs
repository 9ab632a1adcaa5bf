//! The user-directory collaborator.
//!
//! Classkeep does not persist users. Whatever stores them implements
//! [`UserDirectory`] and hands back `{ role, permissions }` records; the
//! permission administration screen writes updated grant lists back through it.

use anyhow::{Context, anyhow};
use classkeep_models::UserPermissionRecord;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::info;

pub trait UserDirectory: Send + Sync {
    /// The stored record for a user, or `None` if the user does not exist.
    fn permission_record(&self, user_id: &str) -> anyhow::Result<Option<UserPermissionRecord>>;

    /// Replaces a user's grant list.
    fn store_permissions(&self, user_id: &str, permissions: Vec<String>) -> anyhow::Result<()>;
}

/// A directory held in memory, for tests and the CLI.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    records: RwLock<HashMap<String, UserPermissionRecord>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON object mapping user ids to `{ role, permissions }` records.
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let records: HashMap<String, UserPermissionRecord> =
            serde_json::from_str(raw).context("Failed to parse user directory JSON")?;
        Ok(Self {
            records: RwLock::new(records),
        })
    }

    pub fn insert(
        &self,
        user_id: impl Into<String>,
        record: UserPermissionRecord,
    ) -> anyhow::Result<()> {
        self.records
            .write()
            .map_err(|_| anyhow!("user directory lock poisoned"))?
            .insert(user_id.into(), record);
        Ok(())
    }
}

impl UserDirectory for InMemoryDirectory {
    fn permission_record(&self, user_id: &str) -> anyhow::Result<Option<UserPermissionRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| anyhow!("user directory lock poisoned"))?;
        Ok(records.get(user_id).cloned())
    }

    fn store_permissions(&self, user_id: &str, permissions: Vec<String>) -> anyhow::Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| anyhow!("user directory lock poisoned"))?;
        let record = records
            .get_mut(user_id)
            .with_context(|| format!("User '{}' not found", user_id))?;
        info!(user_id, count = permissions.len(), "Storing permission grants");
        record.permissions = permissions;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_read() {
        let directory = InMemoryDirectory::new();
        directory
            .insert("u1", UserPermissionRecord::new("teacher", vec![]))
            .unwrap();

        let record = directory.permission_record("u1").unwrap().unwrap();
        assert_eq!(record.role, "teacher");
        assert!(directory.permission_record("u2").unwrap().is_none());
    }

    #[test]
    fn test_store_permissions() {
        let directory = InMemoryDirectory::new();
        directory
            .insert("u1", UserPermissionRecord::new("volunteer", vec![]))
            .unwrap();
        directory
            .store_permissions("u1", vec!["events.view".to_string()])
            .unwrap();

        let record = directory.permission_record("u1").unwrap().unwrap();
        assert_eq!(record.permissions, vec!["events.view".to_string()]);
    }

    #[test]
    fn test_store_for_missing_user_fails() {
        let directory = InMemoryDirectory::new();
        assert!(directory.store_permissions("ghost", vec![]).is_err());
    }

    #[test]
    fn test_from_json() {
        let directory = InMemoryDirectory::from_json(
            r#"{"u1": {"role": "manager", "permissions": null}, "u2": {"role": "admin"}}"#,
        )
        .unwrap();
        let record = directory.permission_record("u1").unwrap().unwrap();
        assert!(record.permissions.is_empty());
        assert!(directory.permission_record("u2").unwrap().is_some());
        assert!(InMemoryDirectory::from_json("[]").is_err());
    }
}
