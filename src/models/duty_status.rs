use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Duty status of a driver for one interval of the day.
///
/// The four regulatory statuses map to the wire codes OFF, SB, DR and ON.
/// Labels outside that set are kept as `Other` so they stay observable
/// instead of being silently dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DutyStatus {
    OffDuty,      // OFF
    SleeperBerth, // SB
    Driving,      // DR
    OnDuty,       // ON (on duty, not driving)
    Other(String),
}

/// The four fixed rows of an ELD log sheet, top to bottom.
pub const ROW_ORDER: [&str; 4] = ["OFF", "SB", "DR", "ON"];

impl DutyStatus {
    pub fn code(&self) -> &str {
        match self {
            DutyStatus::OffDuty => "OFF",
            DutyStatus::SleeperBerth => "SB",
            DutyStatus::Driving => "DR",
            DutyStatus::OnDuty => "ON",
            DutyStatus::Other(label) => label,
        }
    }

    /// Convert wire string → enum. Unrecognized labels become `Other`.
    pub fn from_code(s: &str) -> Self {
        match s {
            "OFF" => DutyStatus::OffDuty,
            "SB" => DutyStatus::SleeperBerth,
            "DR" => DutyStatus::Driving,
            "ON" => DutyStatus::OnDuty,
            other => DutyStatus::Other(other.to_string()),
        }
    }

    /// Row index on the 4-row log sheet (OFF=0, SB=1, DR=2, ON=3).
    /// `Other` labels have no row.
    pub fn row_index(&self) -> Option<usize> {
        match self {
            DutyStatus::OffDuty => Some(0),
            DutyStatus::SleeperBerth => Some(1),
            DutyStatus::Driving => Some(2),
            DutyStatus::OnDuty => Some(3),
            DutyStatus::Other(_) => None,
        }
    }

}

impl Serialize for DutyStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for DutyStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(DutyStatus::from_code(&s))
    }
}
