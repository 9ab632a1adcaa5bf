#![allow(dead_code)]

use classkeep::AccessControl;
use classkeep_models::{CatalogDefinition, GroupDefinition, PermissionDefinition};
use std::collections::BTreeMap;
use std::path::PathBuf;

pub fn builtin_access() -> AccessControl {
    AccessControl::builtin().expect("built-in catalog must validate")
}

fn group(id: &str, name: &str, members: &[&str]) -> GroupDefinition {
    GroupDefinition {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        permissions: members.iter().map(|m| m.to_string()).collect(),
    }
}

fn permission(id: &str, group: &str) -> PermissionDefinition {
    PermissionDefinition {
        id: id.to_string(),
        name: id.to_string(),
        description: String::new(),
        group: group.to_string(),
    }
}

/// A minimal catalog with one open area and the two restricted ones.
pub fn small_definition() -> CatalogDefinition {
    let mut role_defaults = BTreeMap::new();
    role_defaults.insert(
        "teacher".to_string(),
        vec!["library.view".to_string(), "library.lend".to_string()],
    );
    role_defaults.insert("volunteer".to_string(), vec!["library.view".to_string()]);

    CatalogDefinition {
        groups: vec![
            group("library", "Library", &["library.view", "library.lend"]),
            group("finances", "Finances", &["finances.view"]),
            group("assets", "Assets", &["assets.view", "assets.edit"]),
        ],
        permissions: vec![
            permission("library.view", "library"),
            permission("library.lend", "library"),
            permission("finances.view", "finances"),
            permission("assets.view", "assets"),
            permission("assets.edit", "assets"),
        ],
        role_defaults,
    }
}

/// Writes `contents` to a fresh file under the system temp directory.
pub fn write_temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "classkeep-{}-{}-{}.json",
        name,
        std::process::id(),
        rand::random::<u32>()
    ));
    std::fs::write(&path, contents).expect("failed to write temp file");
    path
}
