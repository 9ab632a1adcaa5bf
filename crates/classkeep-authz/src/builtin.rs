//! The catalog shipped with the application.

use classkeep_core::permissions::{self as p, groups as g};
use classkeep_models::roles::tags;
use classkeep_models::{CatalogDefinition, GroupDefinition, PermissionDefinition};
use std::collections::BTreeMap;

struct BuiltinGroup {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    /// (id, name, description)
    permissions: &'static [(&'static str, &'static str, &'static str)],
}

const GROUPS: &[BuiltinGroup] = &[
    BuiltinGroup {
        id: g::STUDENTS,
        name: "Manage Students",
        description: "Student records and enrolment",
        permissions: &[
            (p::STUDENTS_VIEW, "View students", "See student lists and profiles"),
            (p::STUDENTS_CREATE, "Add students", "Enrol new students"),
            (p::STUDENTS_EDIT, "Edit students", "Change student records"),
            (p::STUDENTS_DELETE, "Delete students", "Remove student records"),
        ],
    },
    BuiltinGroup {
        id: g::CLASSES,
        name: "Manage Classes",
        description: "Classrooms and class rosters",
        permissions: &[
            (p::CLASSES_VIEW, "View classes", "See classrooms and rosters"),
            (p::CLASSES_CREATE, "Add classes", "Create classrooms"),
            (p::CLASSES_EDIT, "Edit classes", "Change classrooms and rosters"),
            (p::CLASSES_DELETE, "Delete classes", "Remove classrooms"),
        ],
    },
    BuiltinGroup {
        id: g::GRADES,
        name: "Manage Grades",
        description: "Grade sheets and grade columns",
        permissions: &[
            (p::GRADES_VIEW, "View grades", "See grade sheets"),
            (p::GRADES_CREATE, "Add grade columns", "Add assessments to a grade sheet"),
            (p::GRADES_EDIT, "Edit grades", "Change grade columns and scores"),
            (p::GRADES_DELETE, "Delete grade columns", "Remove assessments"),
        ],
    },
    BuiltinGroup {
        id: g::EVENTS,
        name: "Manage Events",
        description: "School calendar and events",
        permissions: &[
            (p::EVENTS_VIEW, "View events", "See the event calendar"),
            (p::EVENTS_CREATE, "Add events", "Schedule events"),
            (p::EVENTS_EDIT, "Edit events", "Change scheduled events"),
            (p::EVENTS_DELETE, "Delete events", "Cancel events"),
        ],
    },
    BuiltinGroup {
        id: g::FINANCES,
        name: "Manage Finances",
        description: "Income, expenses and the ledger",
        permissions: &[
            (p::FINANCES_VIEW, "View finances", "See the ledger"),
            (p::FINANCES_CREATE, "Add transactions", "Record income and expenses"),
            (p::FINANCES_EDIT, "Edit transactions", "Change recorded transactions"),
            (p::FINANCES_DELETE, "Delete transactions", "Remove recorded transactions"),
        ],
    },
    BuiltinGroup {
        id: g::ASSETS,
        name: "Manage Assets",
        description: "School-owned assets",
        permissions: &[
            (p::ASSETS_VIEW, "View assets", "See the asset register"),
            (p::ASSETS_CREATE, "Add assets", "Register new assets"),
            (p::ASSETS_EDIT, "Edit assets", "Change asset records"),
            (p::ASSETS_DELETE, "Delete assets", "Retire assets"),
        ],
    },
    BuiltinGroup {
        id: g::CLASS_INVENTORY,
        name: "Manage Class Inventory",
        description: "Supplies kept in each classroom",
        permissions: &[
            (p::CLASS_INVENTORY_VIEW, "View class inventory", "See classroom supplies"),
            (p::CLASS_INVENTORY_CREATE, "Add inventory items", "Add classroom supplies"),
            (p::CLASS_INVENTORY_EDIT, "Edit inventory items", "Change classroom supplies"),
            (p::CLASS_INVENTORY_DELETE, "Delete inventory items", "Remove classroom supplies"),
        ],
    },
    BuiltinGroup {
        id: g::PAGES,
        name: "Manage Pages",
        description: "Content pages shown to families",
        permissions: &[
            (p::PAGES_VIEW, "View pages", "See content pages"),
            (p::PAGES_EDIT, "Edit pages", "Change content pages"),
        ],
    },
    BuiltinGroup {
        id: g::USERS,
        name: "Manage Users",
        description: "Staff accounts and their permissions",
        permissions: &[
            (p::USERS_VIEW, "View users", "See staff accounts"),
            (p::USERS_CREATE, "Add users", "Create staff accounts"),
            (p::USERS_EDIT, "Edit users", "Change accounts and permission grants"),
            (p::USERS_DELETE, "Delete users", "Remove staff accounts"),
        ],
    },
    BuiltinGroup {
        id: g::REPORTS,
        name: "Reports",
        description: "Summaries and exports",
        permissions: &[
            (p::REPORTS_VIEW, "View reports", "See summary reports"),
            (p::REPORTS_EXPORT, "Export reports", "Download reports as files"),
        ],
    },
];

const TEACHER_DEFAULTS: &[&str] = &[
    p::STUDENTS_VIEW,
    p::CLASSES_VIEW,
    p::GRADES_VIEW,
    p::GRADES_CREATE,
    p::GRADES_EDIT,
    p::EVENTS_VIEW,
    p::CLASS_INVENTORY_VIEW,
    p::CLASS_INVENTORY_CREATE,
    p::CLASS_INVENTORY_EDIT,
    p::PAGES_VIEW,
];

const VOLUNTEER_DEFAULTS: &[&str] = &[p::STUDENTS_VIEW, p::EVENTS_VIEW, p::CLASS_INVENTORY_VIEW];

/// Groups left out of the manager seed list.
const MANAGER_SEED_EXCLUDED: &[&str] = &[g::FINANCES, g::ASSETS];

/// The built-in catalog as a definition, ready for [`crate::loader::build`].
pub fn definition() -> CatalogDefinition {
    let groups = GROUPS
        .iter()
        .map(|group| GroupDefinition {
            id: group.id.to_string(),
            name: group.name.to_string(),
            description: group.description.to_string(),
            permissions: group
                .permissions
                .iter()
                .map(|(id, _, _)| id.to_string())
                .collect(),
        })
        .collect();

    let permissions = GROUPS
        .iter()
        .flat_map(|group| {
            group
                .permissions
                .iter()
                .map(move |(id, name, description)| PermissionDefinition {
                    id: id.to_string(),
                    name: name.to_string(),
                    description: description.to_string(),
                    group: group.id.to_string(),
                })
        })
        .collect();

    let manager_seed = GROUPS
        .iter()
        .filter(|group| !MANAGER_SEED_EXCLUDED.contains(&group.id))
        .flat_map(|group| group.permissions.iter().map(|(id, _, _)| id.to_string()))
        .collect();

    let mut role_defaults = BTreeMap::new();
    role_defaults.insert(tags::TEACHER.to_string(), to_strings(TEACHER_DEFAULTS));
    role_defaults.insert(tags::VOLUNTEER.to_string(), to_strings(VOLUNTEER_DEFAULTS));
    role_defaults.insert(tags::MANAGER.to_string(), manager_seed);

    CatalogDefinition {
        groups,
        permissions,
        role_defaults,
    }
}

fn to_strings(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
}
