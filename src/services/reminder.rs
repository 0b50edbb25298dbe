//! Startup reminder countdown.
//!
//! Produces the countdown lines the frontend used to print at load time;
//! the server logs them once at startup.

/// Seconds the startup countdown counts down from.
pub const COUNTDOWN_START: u32 = 5;

/// Build the reminder countdown lines, counting down from `from` seconds.
pub fn countdown_lines(from: u32) -> Vec<String> {
    let mut lines = Vec::with_capacity(from as usize + 2);
    lines.push("Starting a simple reminder countdown...".to_string());
    for i in (1..=from).rev() {
        lines.push(format!("Reminder in {} seconds...", i));
    }
    lines.push("🔔 Time for your medication!".to_string());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_line_count() {
        let lines = countdown_lines(5);
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_countdown_counts_down() {
        let lines = countdown_lines(3);
        assert_eq!(lines[1], "Reminder in 3 seconds...");
        assert_eq!(lines[2], "Reminder in 2 seconds...");
        assert_eq!(lines[3], "Reminder in 1 seconds...");
    }

    #[test]
    fn test_countdown_first_and_last_lines() {
        let lines = countdown_lines(COUNTDOWN_START);
        assert_eq!(lines.first().unwrap(), "Starting a simple reminder countdown...");
        assert_eq!(lines.last().unwrap(), "🔔 Time for your medication!");
    }

    #[test]
    fn test_countdown_from_zero() {
        let lines = countdown_lines(0);
        assert_eq!(lines.len(), 2);
    }
}
