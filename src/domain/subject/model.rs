//! Subject and department domain models.

use chrono::{DateTime, Utc};

/// A department a subject may belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    pub id: i32,
    pub name: String,
}

/// A taught subject (course).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    pub id: i32,
    pub name: String,
    /// Short course code, e.g. "MATH101".
    pub code: String,
    /// Optional reference to the owning department.
    pub department_id: Option<i32>,
    /// Registration time; listings are ordered by this, newest first.
    pub created_at: DateTime<Utc>,
}

/// A subject together with its resolved department, if any.
///
/// The department is resolved through a left join: a subject with no
/// department reference, or a dangling one, still appears with `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectWithDepartment {
    pub subject: Subject,
    pub department: Option<Department>,
}
