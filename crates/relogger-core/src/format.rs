//! Record rendering

use chrono::{DateTime, Local};

use crate::level::{LogLevel, RESET};
use crate::location::Location;

/// Zero-padded 24-hour `HH:MM:SS`
pub fn timestamp(now: &DateTime<Local>) -> String {
    now.format("%H:%M:%S").to_string()
}

/// Plain record line, as written to the log file (no trailing newline)
pub fn format_record(timestamp: &str, level: LogLevel, location: &Location, message: &str) -> String {
    format!("[{}] {} {} - {}", timestamp, level, location, message)
}

/// Wrap a record line in the level's ANSI color and the reset code
pub fn colorize(level: LogLevel, line: &str) -> String {
    format!("{}{}{}", level.color(), line, RESET)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_zero_padded() {
        let now = Local.with_ymd_and_hms(2025, 10, 9, 7, 5, 3).unwrap();
        assert_eq!(timestamp(&now), "07:05:03");

        let evening = Local.with_ymd_and_hms(2025, 10, 9, 23, 59, 59).unwrap();
        assert_eq!(timestamp(&evening), "23:59:59");
    }

    #[test]
    fn test_format_record() {
        let loc = Location::new("x.c", 42, "save");
        let line = format_record("12:00:01", LogLevel::Error, &loc, "disk full");
        assert_eq!(line, "[12:00:01] ERROR x.c:42 (save) - disk full");
    }

    #[test]
    fn test_colorize() {
        let colored = colorize(LogLevel::Error, "[12:00:01] ERROR x.c:42 (save) - disk full");
        assert_eq!(
            colored,
            "\x1b[31m[12:00:01] ERROR x.c:42 (save) - disk full\x1b[0m"
        );
    }
}
