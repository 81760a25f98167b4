//! The itinerary domain model.
//!
//! [`Itinerary`] is the single entity representation: the same serde-derived
//! structs serve as the in-memory model and the wire format for `data`
//! events. Day and location ordering is positional and significant: the
//! scripted sequence reveals entries in exactly this order.

use serde::{Deserialize, Serialize};

/// A single point of interest on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Display name.
    pub name: String,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
    /// One-line description shown alongside the map marker.
    pub description: String,
}

/// One day of the trip: an ordered list of locations plus a summary line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    /// 1-based day index. Strictly increasing across an itinerary.
    pub day: u32,
    /// Locations in visit order.
    pub locations: Vec<Location>,
    /// Summary of the day's theme.
    pub summary: String,
}

/// A complete trip plan, baked into the process at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    /// Display name for the whole trip.
    pub trip_name: String,
    /// Days in trip order.
    pub days: Vec<DayPlan>,
}

impl Itinerary {
    /// Total number of locations across all days.
    pub fn location_count(&self) -> usize {
        self.days.iter().map(|d| d.locations.len()).sum()
    }
}
