use chrono::Duration;

/// Renders an elapsed duration as `Time: M:SS`.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let seconds = elapsed.num_seconds().max(0);
    let minutes = seconds / 60;
    let remainder = seconds % 60;
    format!("Time: {minutes}:{remainder:02}")
}
