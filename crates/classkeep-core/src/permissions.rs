//! Permission constants for the Classkeep catalog.
//!
//! This module provides centralized permission and group identifiers for use
//! across the codebase. Using these constants instead of string literals means a
//! typo fails to compile instead of silently resolving to "unknown, deny".
//!
//! # Example
//!
//! ```ignore
//! use classkeep_core::permissions;
//!
//! if access.is_allowed(&granted, permissions::GRADES_EDIT, role) {
//!     // Render the grade column editor
//! }
//! ```

/// Group identifiers for every functional area in the built-in catalog.
pub mod groups {
    pub const STUDENTS: &str = "students";
    pub const CLASSES: &str = "classes";
    pub const GRADES: &str = "grades";
    pub const EVENTS: &str = "events";
    pub const FINANCES: &str = "finances";
    pub const ASSETS: &str = "assets";
    pub const CLASS_INVENTORY: &str = "class-inventory";
    pub const PAGES: &str = "pages";
    pub const USERS: &str = "users";
    pub const REPORTS: &str = "reports";
}

// =============================================================================
// Students permissions
// =============================================================================

/// Permission to view student records
pub const STUDENTS_VIEW: &str = "students.view";
/// Permission to enrol students
pub const STUDENTS_CREATE: &str = "students.create";
/// Permission to edit student records
pub const STUDENTS_EDIT: &str = "students.edit";
/// Permission to delete students
pub const STUDENTS_DELETE: &str = "students.delete";

// =============================================================================
// Classes permissions
// =============================================================================

/// Permission to view classrooms
pub const CLASSES_VIEW: &str = "classes.view";
/// Permission to create classrooms
pub const CLASSES_CREATE: &str = "classes.create";
/// Permission to edit classrooms
pub const CLASSES_EDIT: &str = "classes.edit";
/// Permission to delete classrooms
pub const CLASSES_DELETE: &str = "classes.delete";

// =============================================================================
// Grades permissions
// =============================================================================

/// Permission to view grade sheets
pub const GRADES_VIEW: &str = "grades.view";
/// Permission to add grade columns
pub const GRADES_CREATE: &str = "grades.create";
/// Permission to edit grade columns and scores
pub const GRADES_EDIT: &str = "grades.edit";
/// Permission to delete grade columns
pub const GRADES_DELETE: &str = "grades.delete";

// =============================================================================
// Events permissions
// =============================================================================

/// Permission to view the event calendar
pub const EVENTS_VIEW: &str = "events.view";
/// Permission to schedule events
pub const EVENTS_CREATE: &str = "events.create";
/// Permission to edit events
pub const EVENTS_EDIT: &str = "events.edit";
/// Permission to cancel events
pub const EVENTS_DELETE: &str = "events.delete";

// =============================================================================
// Finances permissions (restricted for managers)
// =============================================================================

/// Permission to view the ledger
pub const FINANCES_VIEW: &str = "finances.view";
/// Permission to record transactions
pub const FINANCES_CREATE: &str = "finances.create";
/// Permission to edit transactions
pub const FINANCES_EDIT: &str = "finances.edit";
/// Permission to delete transactions
pub const FINANCES_DELETE: &str = "finances.delete";

// =============================================================================
// Assets permissions (restricted for managers)
// =============================================================================

/// Permission to view the asset register
pub const ASSETS_VIEW: &str = "assets.view";
/// Permission to register assets
pub const ASSETS_CREATE: &str = "assets.create";
/// Permission to edit assets
pub const ASSETS_EDIT: &str = "assets.edit";
/// Permission to retire assets
pub const ASSETS_DELETE: &str = "assets.delete";

// =============================================================================
// Class inventory permissions
// =============================================================================

/// Permission to view classroom inventory
pub const CLASS_INVENTORY_VIEW: &str = "class-inventory.view";
/// Permission to add inventory items
pub const CLASS_INVENTORY_CREATE: &str = "class-inventory.create";
/// Permission to edit inventory items
pub const CLASS_INVENTORY_EDIT: &str = "class-inventory.edit";
/// Permission to delete inventory items
pub const CLASS_INVENTORY_DELETE: &str = "class-inventory.delete";

// =============================================================================
// Pages permissions
// =============================================================================

/// Permission to view content pages
pub const PAGES_VIEW: &str = "pages.view";
/// Permission to edit content pages
pub const PAGES_EDIT: &str = "pages.edit";

// =============================================================================
// Users permissions
// =============================================================================

/// Permission to view user accounts
pub const USERS_VIEW: &str = "users.view";
/// Permission to create user accounts
pub const USERS_CREATE: &str = "users.create";
/// Permission to edit user accounts and their grants
pub const USERS_EDIT: &str = "users.edit";
/// Permission to delete user accounts
pub const USERS_DELETE: &str = "users.delete";

// =============================================================================
// Reports permissions
// =============================================================================

/// Permission to view reports
pub const REPORTS_VIEW: &str = "reports.view";
/// Permission to export reports
pub const REPORTS_EXPORT: &str = "reports.export";

/// Every permission constant defined above, in catalog order.
pub const ALL: &[&str] = &[
    STUDENTS_VIEW,
    STUDENTS_CREATE,
    STUDENTS_EDIT,
    STUDENTS_DELETE,
    CLASSES_VIEW,
    CLASSES_CREATE,
    CLASSES_EDIT,
    CLASSES_DELETE,
    GRADES_VIEW,
    GRADES_CREATE,
    GRADES_EDIT,
    GRADES_DELETE,
    EVENTS_VIEW,
    EVENTS_CREATE,
    EVENTS_EDIT,
    EVENTS_DELETE,
    FINANCES_VIEW,
    FINANCES_CREATE,
    FINANCES_EDIT,
    FINANCES_DELETE,
    ASSETS_VIEW,
    ASSETS_CREATE,
    ASSETS_EDIT,
    ASSETS_DELETE,
    CLASS_INVENTORY_VIEW,
    CLASS_INVENTORY_CREATE,
    CLASS_INVENTORY_EDIT,
    CLASS_INVENTORY_DELETE,
    PAGES_VIEW,
    PAGES_EDIT,
    USERS_VIEW,
    USERS_CREATE,
    USERS_EDIT,
    USERS_DELETE,
    REPORTS_VIEW,
    REPORTS_EXPORT,
];
