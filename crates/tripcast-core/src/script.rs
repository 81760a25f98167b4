//! The scripted event sequence.
//!
//! [`build_script`] expands an [`Itinerary`] into the full ordered list of
//! steps the stream emitter replays: which event to emit, and how long to
//! pause before emitting it. Keeping the expansion pure (no I/O, no clocks)
//! makes every ordering property testable without async plumbing; the server
//! crate applies the pauses with real sleeps.

use crate::event::{CameraTarget, StreamEvent};
use crate::itinerary::Itinerary;

/// Pause after each of the two opening status events.
const THINKING_PAUSE_MS: u64 = 1_000;
/// Pause while the camera flies to the trip overview.
const CAMERA_SETTLE_PAUSE_MS: u64 = 1_500;
/// Pause before each revealed location.
const LOCATION_REVEAL_PAUSE_MS: u64 = 800;

/// One step of the scripted sequence: pause, then emit.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptStep {
    /// Milliseconds to pause before emitting `event` (0 = emit immediately).
    pub pause_ms: u64,
    /// The event to emit.
    pub event: StreamEvent,
}

impl ScriptStep {
    fn immediate(event: StreamEvent) -> Self {
        ScriptStep { pause_ms: 0, event }
    }

    fn after(pause_ms: u64, event: StreamEvent) -> Self {
        ScriptStep { pause_ms, event }
    }
}

/// Expands the itinerary into the fixed scripted sequence:
///
/// 1. Two opening `status` events (analysis, search).
/// 2. One `control` event flying the camera to `overview`.
/// 3. Per day: a `status` header, then one `data` event per location.
/// 4. A closing `status` event.
///
/// Day sections follow the itinerary order exactly and each `data` event
/// reveals a single location.
pub fn build_script(itinerary: &Itinerary, overview: CameraTarget) -> Vec<ScriptStep> {
    let mut steps = Vec::with_capacity(4 + itinerary.days.len() + itinerary.location_count());

    steps.push(ScriptStep::immediate(StreamEvent::Status {
        content: "Analyzing your travel request...".to_string(),
    }));
    steps.push(ScriptStep::after(
        THINKING_PAUSE_MS,
        StreamEvent::Status {
            content: format!("Searching top attractions for {}...", itinerary.trip_name),
        },
    ));
    steps.push(ScriptStep::after(
        THINKING_PAUSE_MS,
        StreamEvent::Control {
            action: "fly_to".to_string(),
            data: overview,
        },
    ));

    // The camera-settle pause lands on whatever event follows the fly_to.
    let mut next_pause = CAMERA_SETTLE_PAUSE_MS;
    for day in &itinerary.days {
        steps.push(ScriptStep::after(
            std::mem::take(&mut next_pause),
            StreamEvent::Status {
                content: format!("Planning day {}: {}", day.day, day.summary),
            },
        ));
        for location in &day.locations {
            steps.push(ScriptStep::after(
                LOCATION_REVEAL_PAUSE_MS,
                StreamEvent::Data {
                    day: day.day,
                    location: location.clone(),
                    summary: day.summary.clone(),
                },
            ));
        }
    }

    steps.push(ScriptStep::after(
        std::mem::take(&mut next_pause),
        StreamEvent::Status {
            content: "Itinerary planning complete!".to_string(),
        },
    ));

    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itinerary::{DayPlan, Location};
    use crate::mock;

    fn mock_script() -> Vec<ScriptStep> {
        build_script(&mock::tokyo_highlights(), mock::tokyo_overview())
    }

    #[test]
    fn opens_with_two_status_events_then_fly_to() {
        let steps = mock_script();
        assert!(matches!(steps[0].event, StreamEvent::Status { .. }));
        assert!(matches!(steps[1].event, StreamEvent::Status { .. }));
        match &steps[2].event {
            StreamEvent::Control { action, data } => {
                assert_eq!(action, "fly_to");
                assert_eq!(*data, mock::tokyo_overview());
            }
            other => panic!("expected control event, got {other:?}"),
        }
    }

    #[test]
    fn emits_one_data_event_per_location() {
        let trip = mock::tokyo_highlights();
        let steps = mock_script();
        let data_count = steps
            .iter()
            .filter(|s| matches!(s.event, StreamEvent::Data { .. }))
            .count();
        assert_eq!(data_count, trip.location_count());
    }

    #[test]
    fn data_events_sit_between_their_day_status_and_the_next() {
        let steps = mock_script();
        // Walk the day sections: every data event must carry the day index
        // announced by the most recent "Planning day" status.
        let mut current_day: Option<u32> = None;
        for step in &steps[3..] {
            match &step.event {
                StreamEvent::Status { content } if content.starts_with("Planning day") => {
                    let day: u32 = content
                        .strip_prefix("Planning day ")
                        .and_then(|rest| rest.split(':').next())
                        .and_then(|n| n.parse().ok())
                        .expect("day status carries an index");
                    if let Some(previous) = current_day {
                        assert!(day > previous, "day sections must be strictly increasing");
                    }
                    current_day = Some(day);
                }
                StreamEvent::Data { day, .. } => {
                    assert_eq!(Some(*day), current_day);
                }
                _ => {}
            }
        }
    }

    #[test]
    fn closes_with_completion_status() {
        let steps = mock_script();
        match &steps.last().unwrap().event {
            StreamEvent::Status { content } => assert!(content.contains("complete")),
            other => panic!("expected closing status, got {other:?}"),
        }
    }

    #[test]
    fn revealed_locations_reconstruct_the_itinerary() {
        let trip = mock::tokyo_highlights();
        let steps = mock_script();
        let revealed: Vec<Location> = steps
            .iter()
            .filter_map(|s| match &s.event {
                StreamEvent::Data { location, .. } => Some(location.clone()),
                _ => None,
            })
            .collect();
        let expected: Vec<Location> = trip
            .days
            .iter()
            .flat_map(|d| d.locations.iter().cloned())
            .collect();
        assert_eq!(revealed, expected);
    }

    #[test]
    fn pauses_follow_the_fixed_pacing_profile() {
        let steps = mock_script();
        // status(0), status(1000), fly_to(1000), day 1(1500), 3x data(800),
        // day 2(0), 3x data(800), done(0)
        let pauses: Vec<u64> = steps.iter().map(|s| s.pause_ms).collect();
        assert_eq!(
            pauses,
            vec![0, 1_000, 1_000, 1_500, 800, 800, 800, 0, 800, 800, 800, 0]
        );
        assert_eq!(pauses.iter().sum::<u64>(), 8_300);
    }

    #[test]
    fn empty_itinerary_still_brackets_with_status_events() {
        let trip = Itinerary {
            trip_name: "Nowhere".to_string(),
            days: Vec::new(),
        };
        let steps = build_script(&trip, mock::tokyo_overview());
        assert_eq!(steps.len(), 4);
        assert!(matches!(steps[2].event, StreamEvent::Control { .. }));
        assert!(matches!(steps[3].event, StreamEvent::Status { .. }));
        // the camera-settle pause still applies to the event after fly_to
        assert_eq!(steps[3].pause_ms, 1_500);
    }

    #[test]
    fn day_summary_is_repeated_on_each_data_event() {
        let trip = Itinerary {
            trip_name: "Short hop".to_string(),
            days: vec![DayPlan {
                day: 1,
                summary: "One stop".to_string(),
                locations: vec![Location {
                    name: "Somewhere".to_string(),
                    lat: 0.0,
                    lng: 0.0,
                    description: "A stop".to_string(),
                }],
            }],
        };
        let steps = build_script(&trip, mock::tokyo_overview());
        match &steps[4].event {
            StreamEvent::Data { day, summary, .. } => {
                assert_eq!(*day, 1);
                assert_eq!(summary, "One stop");
            }
            other => panic!("expected data event, got {other:?}"),
        }
    }
}
