pub mod client;

pub use client::TripClient;
