//! Checkbox-tree model for the permission administration screen.
//!
//! The tree is built from the group registry and one user's grant list. The
//! screen toggles nodes and writes [`PermissionTree::selection`] back through
//! the user directory.

use classkeep_authz::AccessControl;
use classkeep_models::{GroupId, PermissionId};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckState {
    Checked,
    Partial,
    Unchecked,
}

#[derive(Debug, Clone, Serialize)]
pub struct PermissionNode {
    pub id: PermissionId,
    pub name: String,
    pub description: String,
    pub checked: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupNode {
    pub id: GroupId,
    pub name: String,
    pub description: String,
    pub state: CheckState,
    pub permissions: Vec<PermissionNode>,
}

impl GroupNode {
    fn refresh_state(&mut self) {
        let checked = self.permissions.iter().filter(|p| p.checked).count();
        self.state = if checked == 0 {
            CheckState::Unchecked
        } else if checked == self.permissions.len() {
            CheckState::Checked
        } else {
            CheckState::Partial
        };
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PermissionTree {
    pub groups: Vec<GroupNode>,
}

impl PermissionTree {
    /// Builds the tree with every granted catalog permission checked.
    pub fn for_grants<S: AsRef<str>>(access: &AccessControl, granted: &[S]) -> Self {
        let is_granted = |id: &str| granted.iter().any(|g| g.as_ref() == id);

        let groups = access
            .groups()
            .list_groups()
            .iter()
            .map(|group| {
                let permissions = group
                    .permissions
                    .iter()
                    .map(|member| {
                        let (name, description) = access
                            .catalog()
                            .find(member.as_str())
                            .map(|p| (p.name.clone(), p.description.clone()))
                            .unwrap_or_else(|| (member.to_string(), String::new()));
                        PermissionNode {
                            id: member.clone(),
                            name,
                            description,
                            checked: is_granted(member.as_str()),
                        }
                    })
                    .collect();

                let mut node = GroupNode {
                    id: group.id.clone(),
                    name: group.name.clone(),
                    description: group.description.clone(),
                    state: CheckState::Unchecked,
                    permissions,
                };
                node.refresh_state();
                node
            })
            .collect();

        Self { groups }
    }

    /// Toggles one permission. Returns `false` if it is not in the tree.
    pub fn set(&mut self, permission_id: &str, checked: bool) -> bool {
        for group in &mut self.groups {
            if let Some(node) = group
                .permissions
                .iter_mut()
                .find(|p| p.id.as_str() == permission_id)
            {
                node.checked = checked;
                group.refresh_state();
                return true;
            }
        }
        false
    }

    /// Toggles every permission in a group. Returns `false` for an unknown group.
    pub fn set_group(&mut self, group_id: &str, checked: bool) -> bool {
        let Some(group) = self.groups.iter_mut().find(|g| g.id.as_str() == group_id) else {
            return false;
        };
        for node in &mut group.permissions {
            node.checked = checked;
        }
        group.refresh_state();
        true
    }

    /// The checked permission ids in tree order.
    ///
    /// Ids in the original grant list that are not in the catalog are dropped.
    pub fn selection(&self) -> Vec<String> {
        self.groups
            .iter()
            .flat_map(|group| group.permissions.iter())
            .filter(|node| node.checked)
            .map(|node| node.id.to_string())
            .collect()
    }
}
