//! The resolution engine.
//!
//! One algorithm, parameterized by the caller's [`RolePolicy`]:
//!
//! 1. `bypass_all` allows everything, including ids the catalog has never seen.
//! 2. `allow_unrestricted` allows anything outside the policy's restricted groups.
//! 3. Otherwise the target must be explicitly granted. For a group, any one
//!    granted member is enough; an unknown group is denied.
//!
//! Unknown roles get the plain-membership policy, so every unrecognized input
//! ends in step 3 and fails closed.

use crate::access::AccessControl;
use crate::catalog::PermissionCatalog;
use crate::groups::GroupRegistry;
use crate::policy::RolePolicy;
use classkeep_models::Role;
use std::fmt;
use tracing::debug;

/// Outcome of a resolution, with the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The role bypasses all checks.
    Bypass,
    /// The role is allowed by default and the target is not restricted.
    DefaultAllow,
    /// The grant list contains the permission, or a member of the group.
    Granted,
    /// The grant list does not contain the permission or any group member.
    NotGranted,
    /// The group does not exist.
    UnknownGroup,
}

impl Decision {
    pub fn is_allowed(self) -> bool {
        matches!(self, Decision::Bypass | Decision::DefaultAllow | Decision::Granted)
    }

    pub fn reason(self) -> &'static str {
        match self {
            Decision::Bypass => "role bypasses permission checks",
            Decision::DefaultAllow => "role is allowed outside its restricted groups",
            Decision::Granted => "explicitly granted",
            Decision::NotGranted => "not granted",
            Decision::UnknownGroup => "unknown group",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.is_allowed() { "allow" } else { "deny" };
        write!(f, "{} ({})", verdict, self.reason())
    }
}

fn holds<S: AsRef<str>>(granted: &[S], permission: &str) -> bool {
    granted.iter().any(|g| g.as_ref() == permission)
}

/// A permission is restricted when its owning group is restricted, or when a
/// restricted group lists it. Either source is enough, so an inconsistent
/// catalog loaded without validation still denies.
fn restricts_permission(
    policy: &RolePolicy,
    catalog: &PermissionCatalog,
    groups: &GroupRegistry,
    permission: &str,
) -> bool {
    let owned_by_restricted = catalog
        .find(permission)
        .is_some_and(|p| policy.is_restricted(p.group.as_str()));

    owned_by_restricted
        || policy.restricted_groups.iter().any(|group| {
            groups
                .member_permissions(group.as_str())
                .iter()
                .any(|member| member == permission)
        })
}

pub(crate) fn resolve_permission<S: AsRef<str>>(
    policy: &RolePolicy,
    catalog: &PermissionCatalog,
    groups: &GroupRegistry,
    granted: &[S],
    required: &str,
) -> Decision {
    if policy.bypass_all {
        return Decision::Bypass;
    }
    if policy.allow_unrestricted && !restricts_permission(policy, catalog, groups, required) {
        return Decision::DefaultAllow;
    }
    if holds(granted, required) {
        Decision::Granted
    } else {
        Decision::NotGranted
    }
}

pub(crate) fn resolve_group<S: AsRef<str>>(
    policy: &RolePolicy,
    groups: &GroupRegistry,
    granted: &[S],
    group_id: &str,
) -> Decision {
    if policy.bypass_all {
        return Decision::Bypass;
    }
    if policy.allow_unrestricted && !policy.is_restricted(group_id) {
        return Decision::DefaultAllow;
    }
    let Some(group) = groups.find(group_id) else {
        return Decision::UnknownGroup;
    };
    if group
        .permissions
        .iter()
        .any(|member| holds(granted, member.as_str()))
    {
        Decision::Granted
    } else {
        Decision::NotGranted
    }
}

fn role_label(role: Option<Role>) -> &'static str {
    role.map(|r| r.as_str()).unwrap_or("unknown")
}

impl AccessControl {
    /// Resolves a single permission, returning the rule that decided it.
    ///
    /// `role` is `None` for an unrecognized role tag.
    pub fn explain<S: AsRef<str>>(
        &self,
        granted: &[S],
        required_permission: &str,
        role: impl Into<Option<Role>>,
    ) -> Decision {
        let role = role.into();
        let decision = resolve_permission(
            self.policies().policy_for(role),
            self.catalog(),
            self.groups(),
            granted,
            required_permission,
        );
        debug!(
            role = role_label(role),
            permission = required_permission,
            allowed = decision.is_allowed(),
            reason = decision.reason(),
            "Permission decision"
        );
        classkeep_observability::track_access_decision(
            "permission",
            role_label(role),
            decision.is_allowed(),
        );
        decision
    }

    /// Resolves a whole group, returning the rule that decided it.
    pub fn explain_group<S: AsRef<str>>(
        &self,
        granted: &[S],
        required_group: &str,
        role: impl Into<Option<Role>>,
    ) -> Decision {
        let role = role.into();
        let decision = resolve_group(
            self.policies().policy_for(role),
            self.groups(),
            granted,
            required_group,
        );
        debug!(
            role = role_label(role),
            group = required_group,
            allowed = decision.is_allowed(),
            reason = decision.reason(),
            "Group decision"
        );
        classkeep_observability::track_access_decision(
            "group",
            role_label(role),
            decision.is_allowed(),
        );
        decision
    }

    /// Whether `role` holding `granted` may perform `required_permission`.
    pub fn is_allowed<S: AsRef<str>>(
        &self,
        granted: &[S],
        required_permission: &str,
        role: impl Into<Option<Role>>,
    ) -> bool {
        self.explain(granted, required_permission, role).is_allowed()
    }

    /// Whether `role` holding `granted` may see the functional area `required_group`.
    pub fn is_group_allowed<S: AsRef<str>>(
        &self,
        granted: &[S],
        required_group: &str,
        role: impl Into<Option<Role>>,
    ) -> bool {
        self.explain_group(granted, required_group, role)
            .is_allowed()
    }

    /// [`Self::is_allowed`] for a raw stored role tag.
    pub fn is_allowed_for_tag<S: AsRef<str>>(
        &self,
        granted: &[S],
        required_permission: &str,
        role_tag: &str,
    ) -> bool {
        self.is_allowed(granted, required_permission, Role::parse(role_tag))
    }

    /// [`Self::is_group_allowed`] for a raw stored role tag.
    pub fn is_group_allowed_for_tag<S: AsRef<str>>(
        &self,
        granted: &[S],
        required_group: &str,
        role_tag: &str,
    ) -> bool {
        self.is_group_allowed(granted, required_group, Role::parse(role_tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use classkeep_core::permissions::{self as p, groups as g};

    const NONE: &[&str] = &[];

    fn access() -> AccessControl {
        AccessControl::builtin().unwrap()
    }

    #[test]
    fn test_admin_bypasses_everything() {
        let access = access();
        assert_eq!(access.explain(NONE, p::FINANCES_DELETE, Role::Admin), Decision::Bypass);
        assert!(access.is_allowed(NONE, "not.a.real.permission", Role::Admin));
        assert!(access.is_group_allowed(NONE, "no-such-group", Role::Admin));
    }

    #[test]
    fn test_manager_restricted_permissions_need_grant() {
        let access = access();
        assert!(!access.is_allowed(NONE, p::FINANCES_VIEW, Role::Manager));
        assert!(!access.is_allowed(NONE, p::ASSETS_EDIT, Role::Manager));
        assert!(access.is_allowed(&[p::FINANCES_VIEW], p::FINANCES_VIEW, Role::Manager));
        assert!(!access.is_allowed(&[p::FINANCES_VIEW], p::FINANCES_EDIT, Role::Manager));
    }

    #[test]
    fn test_manager_default_allow() {
        let access = access();
        assert_eq!(
            access.explain(NONE, p::STUDENTS_VIEW, Role::Manager),
            Decision::DefaultAllow
        );
        assert!(access.is_allowed(NONE, p::USERS_DELETE, Role::Manager));
        assert!(access.is_allowed(NONE, "not.a.real.permission", Role::Manager));
    }

    #[test]
    fn test_manager_groups() {
        let access = access();
        assert!(access.is_group_allowed(NONE, g::STUDENTS, Role::Manager));
        assert!(access.is_group_allowed(NONE, "no-such-group", Role::Manager));
        assert!(!access.is_group_allowed(NONE, g::FINANCES, Role::Manager));
        assert!(access.is_group_allowed(&[p::ASSETS_VIEW], g::ASSETS, Role::Manager));
        assert!(!access.is_group_allowed(&[p::ASSETS_VIEW], g::FINANCES, Role::Manager));
    }

    #[test]
    fn test_plain_membership_roles() {
        let access = access();
        for role in [Role::Teacher, Role::Volunteer] {
            assert!(access.is_allowed(&[p::EVENTS_VIEW], p::EVENTS_VIEW, role));
            assert!(!access.is_allowed(&[p::EVENTS_VIEW], p::EVENTS_EDIT, role));
            assert!(!access.is_allowed(NONE, p::STUDENTS_VIEW, role));
        }
    }

    #[test]
    fn test_unknown_permission_denied() {
        let access = access();
        assert!(!access.is_allowed(NONE, "not.a.real.permission", Role::Teacher));
        assert!(!access.is_allowed(&["students.view"], "", Role::Volunteer));
    }

    #[test]
    fn test_unknown_role_fails_closed() {
        let access = access();
        assert!(!access.is_allowed_for_tag(NONE, p::STUDENTS_VIEW, "Admin"));
        assert!(!access.is_allowed_for_tag(NONE, p::STUDENTS_VIEW, "superuser"));
        assert!(access.is_allowed_for_tag(&[p::STUDENTS_VIEW], p::STUDENTS_VIEW, "superuser"));
        assert!(!access.is_group_allowed_for_tag(NONE, g::STUDENTS, ""));
    }

    #[test]
    fn test_group_any_member_suffices() {
        let access = access();
        assert_eq!(
            access.explain_group(&[p::GRADES_VIEW], g::GRADES, Role::Teacher),
            Decision::Granted
        );
        assert!(!access.is_group_allowed(&[p::GRADES_VIEW], g::EVENTS, Role::Teacher));
    }

    #[test]
    fn test_unknown_group_denied() {
        let access = access();
        assert_eq!(
            access.explain_group(&[p::GRADES_VIEW], "no-such-group", Role::Volunteer),
            Decision::UnknownGroup
        );
    }

    #[test]
    fn test_granted_list_accepts_owned_strings() {
        let access = access();
        let granted = vec![p::GRADES_EDIT.to_string()];
        assert!(access.is_allowed(&granted, p::GRADES_EDIT, Role::Teacher));
    }

    #[test]
    fn test_duplicates_tolerated() {
        let access = access();
        let granted = [p::GRADES_EDIT, p::GRADES_EDIT];
        assert!(access.is_allowed(&granted, p::GRADES_EDIT, Role::Teacher));
    }

    #[test]
    fn test_decision_display() {
        assert_eq!(Decision::Granted.to_string(), "allow (explicitly granted)");
        assert!(Decision::UnknownGroup.to_string().starts_with("deny"));
        assert!(!Decision::NotGranted.is_allowed());
    }
}
