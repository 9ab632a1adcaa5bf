//! Per-user access view.
//!
//! A [`SessionAccess`] is built once when a user is loaded. It resolves the
//! effective grant list a single time and then answers the render-time
//! questions the UI asks for every control and navigation entry.

use crate::directory::UserDirectory;
use classkeep_authz::AccessControl;
use classkeep_models::{PermissionGroup, Role, UserPermissionRecord};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct SessionAccess {
    access: AccessControl,
    role_tag: String,
    role: Option<Role>,
    permissions: Vec<String>,
}

impl SessionAccess {
    pub fn new(access: AccessControl, record: UserPermissionRecord) -> Self {
        let role = record.role();
        if role.is_none() {
            warn!(role = %record.role, "Unrecognized role tag, applying explicit grants only");
        }
        let permissions = access.effective_permissions(record.permissions, role);
        Self {
            access,
            role_tag: record.role,
            role,
            permissions,
        }
    }

    /// Loads a user from the directory. `Ok(None)` when the user does not exist.
    pub fn load(
        access: &AccessControl,
        directory: &dyn UserDirectory,
        user_id: &str,
    ) -> anyhow::Result<Option<Self>> {
        let Some(record) = directory.permission_record(user_id)? else {
            warn!(user_id, "User not found in directory");
            return Ok(None);
        };
        let session = Self::new(access.clone(), record);
        info!(
            user_id,
            role = %session.role_tag,
            permissions = session.permissions.len(),
            "Session access resolved"
        );
        Ok(Some(session))
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn role_tag(&self) -> &str {
        &self.role_tag
    }

    /// The effective grant list.
    pub fn permissions(&self) -> &[String] {
        &self.permissions
    }

    pub fn can(&self, permission: &str) -> bool {
        self.access.is_allowed(&self.permissions, permission, self.role)
    }

    pub fn can_see(&self, group_id: &str) -> bool {
        self.access
            .is_group_allowed(&self.permissions, group_id, self.role)
    }

    /// Groups to show as navigation entries, in registry order.
    pub fn visible_groups(&self) -> Vec<&PermissionGroup> {
        self.access
            .groups()
            .list_groups()
            .iter()
            .filter(|group| self.can_see(group.id.as_str()))
            .collect()
    }
}
