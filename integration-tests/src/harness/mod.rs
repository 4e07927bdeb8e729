pub mod fixtures;
pub mod tracing;

pub use fixtures::{analyze_fixture, fixture_path, read_fixture};
pub use tracing::{CapturedEvent, capture_events};
