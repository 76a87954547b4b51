use std::collections::HashSet;

use crate::models::{Employee, ShiftReport, StaffRecord};

/// Staff members with no entry in the shift report.
///
/// Duplicated ids collapse into a single employee. The order of the result is
/// unspecified.
pub fn filter_employees(employees: Vec<StaffRecord>, shifts: &ShiftReport) -> Vec<Employee> {
    employees
        .into_iter()
        .filter(|employee| !shifts.contains(&employee.staff_id))
        .map(Employee::from)
        .collect::<HashSet<_>>()
        .into_iter()
        .collect()
}
