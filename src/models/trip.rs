use super::duty_interval::DutyInterval;
use serde::{Deserialize, Deserializer, Serialize};

/// The four form fields posted to the trip API.
#[derive(Debug, Clone, Serialize)]
pub struct TripRequest {
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub current_cycle_used_hrs: f64,
}

/// GeoJSON LineString geometry of the planned route.
/// Coordinates are `[lon, lat]` pairs, GeoJSON axis order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteGeometry {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    pub coordinates: Vec<[f64; 2]>,
}

impl RouteGeometry {
    pub fn point_count(&self) -> usize {
        self.coordinates.len()
    }

    /// First coordinate as (lat, lon), the pickup end of the route.
    pub fn start_point(&self) -> Option<(f64, f64)> {
        self.coordinates.first().map(|c| (c[1], c[0]))
    }

    /// Last coordinate as (lat, lon), the dropoff end of the route.
    pub fn end_point(&self) -> Option<(f64, f64)> {
        self.coordinates.last().map(|c| (c[1], c[0]))
    }

    /// Bounding box as ((south, west), (north, east)).
    pub fn bounding_box(&self) -> Option<((f64, f64), (f64, f64))> {
        if self.coordinates.is_empty() {
            return None;
        }
        let mut south = f64::INFINITY;
        let mut west = f64::INFINITY;
        let mut north = f64::NEG_INFINITY;
        let mut east = f64::NEG_INFINITY;
        for c in &self.coordinates {
            let (lon, lat) = (c[0], c[1]);
            south = south.min(lat);
            north = north.max(lat);
            west = west.min(lon);
            east = east.max(lon);
        }
        Some(((south, west), (north, east)))
    }
}

/// A planned stop scheduled by the server-side HOS calculator.
/// The API emits either `duration_hours` or `duration_minutes` depending on
/// the stop type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stop {
    #[serde(rename = "type")]
    pub kind: String,
    pub time: String,
    #[serde(default, deserialize_with = "de_opt_flexible_f64")]
    pub duration_hours: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_flexible_f64")]
    pub duration_minutes: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Stop {
    /// Duration normalized to hours, whichever field the API sent.
    pub fn duration_hrs(&self) -> f64 {
        self.duration_hours
            .or(self.duration_minutes.map(|m| m / 60.0))
            .unwrap_or(0.0)
    }
}

/// A trip record as returned by the API.
/// Route and log fields are absent until the server finishes planning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    pub id: i64,
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    #[serde(deserialize_with = "de_flexible_f64")]
    pub current_cycle_used_hrs: f64,
    #[serde(default, deserialize_with = "de_opt_flexible_f64")]
    pub route_distance_miles: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_flexible_f64")]
    pub route_duration_hours: Option<f64>,
    #[serde(default)]
    pub route_geojson: Option<RouteGeometry>,
    #[serde(default)]
    pub daily_logs: Option<Vec<Vec<DutyInterval>>>,
    #[serde(default)]
    pub stops: Option<Vec<Stop>>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Trip {
    pub fn days(&self) -> &[Vec<DutyInterval>] {
        self.daily_logs.as_deref().unwrap_or(&[])
    }

    pub fn stop_list(&self) -> &[Stop] {
        self.stops.as_deref().unwrap_or(&[])
    }
}

/// The API serializes decimal fields as JSON strings ("70.00"), so accept
/// both strings and numbers.
fn de_flexible_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrStr {
        Num(f64),
        Str(String),
    }

    match NumOrStr::deserialize(deserializer)? {
        NumOrStr::Num(n) => Ok(n),
        NumOrStr::Str(s) => s.parse::<f64>().map_err(serde::de::Error::custom),
    }
}

fn de_opt_flexible_f64<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<f64>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum MaybeNumOrStr {
        Num(f64),
        Str(String),
        None,
    }

    match MaybeNumOrStr::deserialize(deserializer)? {
        MaybeNumOrStr::Num(n) => Ok(Some(n)),
        MaybeNumOrStr::Str(s) => s.parse::<f64>().map(Some).map_err(serde::de::Error::custom),
        MaybeNumOrStr::None => Ok(None),
    }
}
