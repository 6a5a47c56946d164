pub mod duty_interval;
pub mod duty_status;
pub mod trip;

pub use duty_interval::DutyInterval;
pub use duty_status::DutyStatus;
pub use trip::{RouteGeometry, Stop, Trip, TripRequest};
