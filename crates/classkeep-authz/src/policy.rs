//! Role policies.
//!
//! Each role maps to a [`RolePolicy`] and the resolution engine runs a single
//! algorithm parameterized by it:
//!
//! | Role | bypass_all | allow_unrestricted | restricted_groups |
//! |------|------------|--------------------|-------------------|
//! | admin | yes | - | - |
//! | manager | no | yes | finances, assets |
//! | teacher, volunteer, unknown | no | no | - |
//!
//! The table is fixed at build time; it is not loaded from catalog files.

use classkeep_core::permissions::groups;
use classkeep_models::{GroupId, Role};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RolePolicy {
    /// Allow everything without looking at the grant list.
    pub bypass_all: bool,
    /// Allow anything outside `restricted_groups` without looking at the grant list.
    pub allow_unrestricted: bool,
    /// Groups where an explicit grant is still required.
    pub restricted_groups: BTreeSet<GroupId>,
}

impl RolePolicy {
    /// Plain membership: allowed only when explicitly granted.
    pub fn membership() -> Self {
        Self::default()
    }

    pub fn bypass() -> Self {
        Self {
            bypass_all: true,
            ..Self::default()
        }
    }

    /// Allowed by default, except in the given groups.
    pub fn allow_except(restricted: impl IntoIterator<Item = GroupId>) -> Self {
        Self {
            bypass_all: false,
            allow_unrestricted: true,
            restricted_groups: restricted.into_iter().collect(),
        }
    }

    pub fn is_restricted(&self, group_id: &str) -> bool {
        self.restricted_groups.contains(group_id)
    }
}

#[derive(Debug, Clone)]
pub struct PolicyTable {
    policies: BTreeMap<Role, RolePolicy>,
    fallback: RolePolicy,
}

impl Default for PolicyTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl PolicyTable {
    /// Builds a table; roles without an entry get plain membership.
    pub fn new(policies: BTreeMap<Role, RolePolicy>) -> Self {
        Self {
            policies,
            fallback: RolePolicy::membership(),
        }
    }

    /// The production policy set.
    pub fn standard() -> Self {
        let mut policies = BTreeMap::new();
        policies.insert(Role::Admin, RolePolicy::bypass());
        policies.insert(
            Role::Manager,
            RolePolicy::allow_except([
                GroupId::new_unchecked(groups::FINANCES),
                GroupId::new_unchecked(groups::ASSETS),
            ]),
        );
        policies.insert(Role::Teacher, RolePolicy::membership());
        policies.insert(Role::Volunteer, RolePolicy::membership());
        Self::new(policies)
    }

    /// Policy for a role. Unknown roles (`None`) always get plain membership.
    pub fn policy_for(&self, role: Option<Role>) -> &RolePolicy {
        role.and_then(|role| self.policies.get(&role))
            .unwrap_or(&self.fallback)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Role, &RolePolicy)> {
        self.policies.iter().map(|(role, policy)| (*role, policy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_admin_bypasses() {
        let table = PolicyTable::standard();
        assert!(table.policy_for(Some(Role::Admin)).bypass_all);
    }

    #[test]
    fn test_standard_manager_restrictions() {
        let table = PolicyTable::standard();
        let manager = table.policy_for(Some(Role::Manager));
        assert!(!manager.bypass_all);
        assert!(manager.allow_unrestricted);
        assert!(manager.is_restricted("finances"));
        assert!(manager.is_restricted("assets"));
        assert!(!manager.is_restricted("students"));
        assert_eq!(manager.restricted_groups.len(), 2);
    }

    #[test]
    fn test_unknown_role_gets_membership() {
        let table = PolicyTable::standard();
        assert_eq!(table.policy_for(None), &RolePolicy::membership());
    }

    #[test]
    fn test_missing_entry_gets_membership() {
        let table = PolicyTable::new(BTreeMap::new());
        assert_eq!(table.policy_for(Some(Role::Admin)), &RolePolicy::membership());
    }

    #[test]
    fn test_restricted_group_ids_are_valid() {
        let table = PolicyTable::standard();
        for (_, policy) in table.iter() {
            for group in &policy.restricted_groups {
                assert!(GroupId::is_valid(group.as_str()));
            }
        }
    }
}
