//! Wall-clock timing and console line formatting.

use serde::{Serialize, Serializer};
use std::fmt;
use std::time::{Duration, Instant};

/// A labeled wall-clock measurement for one benchmark step.
///
/// Renders as the console line `<label> time = <N>[ms]`.
#[derive(Debug, Clone, Serialize)]
pub struct StepTiming {
    /// Step label, e.g. `"serde_json parse"`.
    pub label: String,
    /// Elapsed wall-clock time, sampled on the monotonic clock.
    #[serde(rename = "elapsed_ms", serialize_with = "as_millis")]
    pub elapsed: Duration,
}

impl StepTiming {
    /// Elapsed time in whole milliseconds.
    pub fn millis(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

impl fmt::Display for StepTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} time = {}[ms]", self.label, self.millis())
    }
}

fn as_millis<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(elapsed.as_millis() as u64)
}

/// Runs `f` and returns its result together with the measured timing.
pub fn time<T>(label: impl Into<String>, f: impl FnOnce() -> T) -> (T, StepTiming) {
    let start = Instant::now();
    let value = f();
    let elapsed = start.elapsed();

    (
        value,
        StepTiming {
            label: label.into(),
            elapsed,
        },
    )
}

/// The banner line printed before each driver's timing lines.
pub fn divider(name: &str) -> String {
    format!("-------------------  {name}  -------------------")
}
