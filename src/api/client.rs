//! Synchronous client for the remote trip-planning API.
//!
//! The API owns all the heavy lifting (geocoding, routing, HOS log
//! generation); this client only moves trip records back and forth.

use crate::errors::{AppError, AppResult};
use crate::models::{Trip, TripRequest};
use std::time::Duration;

pub struct TripClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl TripClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> AppResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn trips_url(&self) -> String {
        format!("{}/api/trips/", self.base_url)
    }

    fn trip_url(&self, id: i64) -> String {
        format!("{}/api/trips/{}/", self.base_url, id)
    }

    /// POST a new trip. The server computes the route and daily logs
    /// before responding, so this call can take a while.
    pub fn create_trip(&self, request: &TripRequest) -> AppResult<Trip> {
        let resp = self.http.post(self.trips_url()).json(request).send()?;
        decode(resp)
    }

    /// GET all trips, newest first (server ordering).
    pub fn list_trips(&self) -> AppResult<Vec<Trip>> {
        let resp = self.http.get(self.trips_url()).send()?;
        decode(resp)
    }

    /// GET one trip with its full route, logs and stops.
    pub fn get_trip(&self, id: i64) -> AppResult<Trip> {
        let resp = self.http.get(self.trip_url(id)).send()?;
        decode(resp)
    }
}

/// Turn a non-2xx response into AppError::Api with the body attached;
/// decode the JSON payload otherwise.
fn decode<T: serde::de::DeserializeOwned>(resp: reqwest::blocking::Response) -> AppResult<T> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().unwrap_or_default();
        return Err(AppError::Api {
            status: status.as_u16(),
            body,
        });
    }
    Ok(resp.json::<T>()?)
}
