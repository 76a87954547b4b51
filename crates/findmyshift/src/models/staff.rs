use std::fmt;

use serde::{Deserialize, Serialize};

/// A member of the team as returned by `/staff/list`.
///
/// The API speaks camelCase; exports use snake_case keys. Both spellings
/// are accepted when reading.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StaffRecord {
    #[serde(rename(deserialize = "staffId"), alias = "staff_id")]
    pub staff_id: String,

    #[serde(rename(deserialize = "displayName"), alias = "display_name")]
    pub display_name: String,
}

impl StaffRecord {
    pub fn new(staff_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            staff_id: staff_id.into(),
            display_name: display_name.into(),
        }
    }
}

/// A staff member without shifts. Two employees are the same employee when
/// their ids match, whatever their display names.
#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub staff_id: String,
    pub display_name: String,
}

impl Employee {
    pub fn new(staff_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            staff_id: staff_id.into(),
            display_name: display_name.into(),
        }
    }
}

macro_rules! keyed_by_staff_id {
    ($($struct:ident),+ ) => {
        $(
            impl $struct {
                pub fn staff_id(&self) -> &str {
                    &self.staff_id
                }
            }

            impl PartialEq for $struct {
                fn eq(&self, other: &Self) -> bool {
                    self.staff_id() == other.staff_id()
                }
            }

            impl Eq for $struct {}

            impl std::hash::Hash for $struct {
                fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                    std::hash::Hash::hash(self.staff_id(), state)
                }
            }
        )*
    };
}

keyed_by_staff_id!(Employee);

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name, self.staff_id)
    }
}

impl From<StaffRecord> for Employee {
    fn from(
        StaffRecord {
            staff_id,
            display_name,
        }: StaffRecord,
    ) -> Self {
        Self {
            staff_id,
            display_name,
        }
    }
}

impl From<Employee> for StaffRecord {
    fn from(
        Employee {
            staff_id,
            display_name,
        }: Employee,
    ) -> Self {
        Self {
            staff_id,
            display_name,
        }
    }
}
