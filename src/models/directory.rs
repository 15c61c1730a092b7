//! User and organizational-group directory models.

use serde::{Deserialize, Serialize};

/// An employee from the user directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier of the employee.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// The organizational group the employee belongs to, if any.
    pub group_id: Option<i64>,
    /// Whether the employee has administrator rights (may delete holiday
    /// records owned by other users).
    #[serde(default)]
    pub is_admin: bool,
}

/// An organizational group from the group directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgGroup {
    /// Unique identifier of the group.
    pub id: i64,
    /// Display name of the group.
    pub name: String,
}

/// A slim employee reference embedded in aggregate views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRef {
    /// Unique identifier of the employee.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
}

impl From<&Employee> for EmployeeRef {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name.clone(),
            email: employee.email.clone(),
        }
    }
}
