use std::collections::{HashMap, HashSet};

use findmyshift::StaffRecord;

/// Drops blacklisted staff and renames aliased ones. Input order is kept and
/// nothing is deduplicated.
pub fn filter_employees(
    employees: Vec<StaffRecord>,
    blacklist: &HashSet<String>,
    aliases: &HashMap<String, String>,
) -> Vec<StaffRecord> {
    employees
        .into_iter()
        .filter(|employee| !blacklist.contains(&employee.staff_id))
        .map(|mut employee| {
            if let Some(alias) = aliases.get(&employee.staff_id) {
                employee.display_name = alias.clone();
            }

            employee
        })
        .collect()
}
