use anyhow::Context;
use classkeep::{InMemoryDirectory, PermissionTree, SessionAccess};
use classkeep_authz::{AccessControl, loader};
use classkeep_models::{Permission, Role};
use dialoguer::Select;
use serde_json::json;
use std::path::Path;
use tracing::debug;

pub enum Target {
    Permission(String),
    Group(String),
}

/// Uses the given role tag, or prompts for one of the recognized roles.
pub fn resolve_role_tag(role: Option<String>) -> anyhow::Result<String> {
    if let Some(role) = role {
        return Ok(role);
    }

    let names: Vec<&str> = Role::ALL.iter().map(|r| r.display_name()).collect();
    let selection = Select::new()
        .with_prompt("Role")
        .items(&names)
        .default(0)
        .interact()
        .context("Failed to read role")?;
    Ok(Role::ALL[selection].as_str().to_string())
}

fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn permissions(access: &AccessControl, group: Option<&str>, json: bool) -> anyhow::Result<i32> {
    let listed: Vec<&Permission> = match group {
        Some(group) => {
            if access.groups().find(group).is_none() {
                eprintln!("\n❌ Unknown group '{}'", group);
                return Ok(1);
            }
            access
                .groups()
                .member_permissions(group)
                .iter()
                .filter_map(|id| access.catalog().find(id.as_str()))
                .collect()
        }
        None => access.catalog().list_all().iter().collect(),
    };

    if json {
        print_json(&listed)?;
    } else {
        for permission in listed {
            println!(
                "{:<28} {:<16} {}",
                permission.id, permission.group, permission.name
            );
        }
    }
    Ok(0)
}

pub fn groups(access: &AccessControl, json: bool) -> anyhow::Result<i32> {
    if json {
        print_json(&access.groups().list_groups())?;
        return Ok(0);
    }

    for group in access.groups().list_groups() {
        println!("{} - {}", group.id, group.name);
        for member in &group.permissions {
            println!("    {}", member);
        }
    }
    Ok(0)
}

pub fn defaults(access: &AccessControl, role: &str, json: bool) -> anyhow::Result<i32> {
    let role: Role = role.parse()?;
    let ids = access.defaults_for(role);

    if json {
        print_json(&ids)?;
    } else if ids.is_empty() {
        println!("{} has no default permissions", role.display_name());
    } else {
        println!("Default permissions for {}:", role.display_name());
        for id in ids {
            println!("    {}", id);
        }
    }
    Ok(0)
}

pub fn check(
    access: &AccessControl,
    role_tag: &str,
    grants: Vec<String>,
    target: Target,
    raw: bool,
    json: bool,
) -> anyhow::Result<i32> {
    let role = Role::parse(role_tag);
    let granted = if raw {
        grants
    } else {
        access.effective_permissions(grants, role)
    };
    debug!(role = role_tag, grants = granted.len(), raw, "Evaluating access");

    let (kind, name, decision) = match &target {
        Target::Permission(permission) => (
            "permission",
            permission.as_str(),
            access.explain(&granted, permission, role),
        ),
        Target::Group(group) => ("group", group.as_str(), access.explain_group(&granted, group, role)),
    };

    if json {
        print_json(&json!({
            "role": role_tag,
            "recognized_role": role.is_some(),
            kind: name,
            "allowed": decision.is_allowed(),
            "reason": decision.reason(),
        }))?;
    } else {
        let mark = if decision.is_allowed() { "✅" } else { "❌" };
        println!("{} {} {} '{}': {}", mark, role_tag, kind, name, decision);
    }

    Ok(if decision.is_allowed() { 0 } else { 1 })
}

pub fn effective(
    access: &AccessControl,
    role_tag: &str,
    grants: Vec<String>,
    json: bool,
) -> anyhow::Result<i32> {
    let effective = access.effective_permissions(grants, Role::parse(role_tag));

    if json {
        print_json(&effective)?;
    } else if effective.is_empty() {
        println!("No permissions in force for {}", role_tag);
    } else {
        for id in &effective {
            println!("{}", id);
        }
    }
    Ok(0)
}

pub fn user(
    access: &AccessControl,
    user_id: &str,
    directory: &Path,
    json: bool,
) -> anyhow::Result<i32> {
    let raw = std::fs::read_to_string(directory)
        .with_context(|| format!("Failed to read {}", directory.display()))?;
    let directory = InMemoryDirectory::from_json(&raw)?;

    let Some(session) = SessionAccess::load(access, &directory, user_id)? else {
        eprintln!("\n❌ User '{}' not found", user_id);
        return Ok(1);
    };

    let tree = PermissionTree::for_grants(access, session.permissions());
    let visible: Vec<&str> = session
        .visible_groups()
        .iter()
        .map(|group| group.id.as_str())
        .collect();

    if json {
        print_json(&json!({
            "user_id": user_id,
            "role": session.role_tag(),
            "effective_permissions": session.permissions(),
            "visible_groups": visible,
            "tree": tree,
        }))?;
        return Ok(0);
    }

    println!("User:  {}", user_id);
    println!("Role:  {}", session.role_tag());
    println!("Visible groups: {}", visible.join(", "));
    println!();
    for group in &tree.groups {
        println!("[{:?}] {}", group.state, group.name);
        for node in &group.permissions {
            let mark = if node.checked { "x" } else { " " };
            println!("    [{}] {}", mark, node.id);
        }
    }
    Ok(0)
}

pub fn validate(path: &Path) -> anyhow::Result<i32> {
    let result = loader::load_file(path).and_then(|definition| loader::build(definition, true));
    match result {
        Ok(access) => {
            println!(
                "\n✅ Catalog is valid: {} permissions in {} groups",
                access.catalog().len(),
                access.groups().len()
            );
            Ok(0)
        }
        Err(e) => {
            eprintln!("\n❌ Invalid catalog {}: {}", path.display(), e);
            Ok(1)
        }
    }
}
