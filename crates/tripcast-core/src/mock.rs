//! The baked-in mock itinerary.
//!
//! In a real deployment this is where a planning pipeline would produce an
//! [`Itinerary`] from the prompt. The simulated agent instead replays this
//! fixed two-day Tokyo trip on every invocation.

use crate::event::CameraTarget;
use crate::itinerary::{DayPlan, Itinerary, Location};

/// The two-day Tokyo trip every plan request replays.
pub fn tokyo_highlights() -> Itinerary {
    Itinerary {
        trip_name: "Tokyo Highlights".to_string(),
        days: vec![
            DayPlan {
                day: 1,
                summary: "Arrival and Asakusa old town".to_string(),
                locations: vec![
                    Location {
                        name: "Narita Airport".to_string(),
                        lat: 35.7719,
                        lng: 140.3929,
                        description: "Touchdown in Japan".to_string(),
                    },
                    Location {
                        name: "Senso-ji Temple".to_string(),
                        lat: 35.7147,
                        lng: 139.7967,
                        description: "Tokyo's oldest temple, Kaminarimon gate".to_string(),
                    },
                    Location {
                        name: "Tokyo Skytree".to_string(),
                        lat: 35.7100,
                        lng: 139.8107,
                        description: "Night view over the whole city".to_string(),
                    },
                ],
            },
            DayPlan {
                day: 2,
                summary: "Fashion districts and city parks".to_string(),
                locations: vec![
                    Location {
                        name: "Shibuya Crossing".to_string(),
                        lat: 35.6594,
                        lng: 139.7005,
                        description: "The world's busiest intersection".to_string(),
                    },
                    Location {
                        name: "Meiji Shrine".to_string(),
                        lat: 35.6763,
                        lng: 139.6993,
                        description: "A forest oasis in the city center".to_string(),
                    },
                    Location {
                        name: "Shinjuku Gyoen".to_string(),
                        lat: 35.6851,
                        lng: 139.7100,
                        description: "Famous cherry-blossom garden".to_string(),
                    },
                ],
            },
        ],
    }
}

/// Camera target the `fly_to` control event points at before any day is
/// revealed: central Tokyo at city-wide zoom.
pub fn tokyo_overview() -> CameraTarget {
    CameraTarget {
        lat: 35.6895,
        lng: 139.6917,
        zoom: 10,
    }
}
