pub mod shifts;
pub mod staff;

pub use shifts::{ShiftReport, ShiftsQuery, DATE_FORMAT, DEFAULT_DAYS};
pub use staff::{Employee, StaffRecord};
