use std::time::Duration;

/// Default tick interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Seconds between reminder polling passes
pub const REMINDER_POLL_SECS: u64 = 60;

/// Get tick duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

/// Get the gap between reminder polls
pub fn reminder_poll_interval() -> Duration {
    Duration::from_secs(REMINDER_POLL_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_duration() {
        let duration = tick_duration();
        assert_eq!(duration, Duration::from_millis(250));
    }

    #[test]
    fn test_reminder_poll_interval() {
        assert_eq!(reminder_poll_interval(), Duration::from_secs(60));
    }
}
