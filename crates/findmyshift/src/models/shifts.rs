use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};

use crate::errors::ApiError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DEFAULT_DAYS: u32 = 7;

/// `/reports/shifts` payload. Keyed by staff id; only key presence matters.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ShiftReport(HashMap<String, serde_json::Value>);

impl ShiftReport {
    pub fn contains(&self, staff_id: &str) -> bool {
        self.0.contains_key(staff_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ShiftReport {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|id| (id.into(), serde_json::Value::Null))
                .collect(),
        )
    }
}

/// Window for the shift report.
///
/// Explicit dates win. A missing `from` is today, a missing `to` is
/// `from + days`. A window ending past chrono's calendar is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Setters)]
#[setters(strip_option)]
pub struct ShiftsQuery {
    pub days: u32,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl Default for ShiftsQuery {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            from: None,
            to: None,
        }
    }
}

impl ShiftsQuery {
    pub fn with_days(days: u32) -> Self {
        Self::default().days(days)
    }

    pub fn resolve(&self, today: NaiveDate) -> Result<(NaiveDate, NaiveDate), ApiError> {
        let from = self.from.unwrap_or(today);
        let to = match self.to {
            Some(to) => to,
            None => from
                .checked_add_signed(Duration::days(i64::from(self.days)))
                .ok_or(ApiError::WindowOutOfRange {
                    from,
                    days: self.days,
                })?,
        };

        Ok((from, to))
    }
}
