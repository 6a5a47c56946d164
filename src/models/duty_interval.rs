use super::duty_status::DutyStatus;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One segment of a driver's day as delivered by the trip API.
///
/// Timestamps are naive ISO-8601 (no offset), exactly as the API emits
/// them. chrono's serde impl for NaiveDateTime accepts the
/// `YYYY-MM-DDTHH:MM:SS[.fff]` shape including fractional seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DutyInterval {
    pub status: DutyStatus,
    pub start_time: NaiveDateTime, // ⇔ daily_logs[][].start_time (ISO-8601)
    pub end_time: NaiveDateTime,   // ⇔ daily_logs[][].end_time (ISO-8601)
    #[serde(default)]
    pub description: Option<String>,
}

impl DutyInterval {
    pub fn new(
        status: DutyStatus,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        description: Option<String>,
    ) -> Self {
        Self {
            status,
            start_time,
            end_time,
            description,
        }
    }

    /// Calendar day the interval belongs to for reporting purposes.
    pub fn reporting_day(&self) -> NaiveDate {
        self.start_time.date()
    }
}

impl std::fmt::Display for DutyInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} → {}",
            self.status.code(),
            self.start_time.format("%Y-%m-%d %H:%M:%S"),
            self.end_time.format("%Y-%m-%d %H:%M:%S")
        )
    }
}
