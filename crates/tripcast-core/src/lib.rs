pub mod event;
pub mod itinerary;
pub mod mock;
pub mod script;

// Re-export commonly used types
pub use event::{CameraTarget, StreamEvent};
pub use itinerary::{DayPlan, Itinerary, Location};
pub use script::{build_script, ScriptStep};
