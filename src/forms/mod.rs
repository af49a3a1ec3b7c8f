//! Form definitions backing the HTTP routes.

use chrono::NaiveTime;
use validator::ValidationError;

pub mod admin;
pub mod planner;
pub mod reviews;
pub mod trips;

/// Accepts zero-padded `HH:MM` wall-clock times, the format the time
/// inputs submit and the schedule sorts by.
pub fn validate_time_hhmm(value: &str) -> Result<(), ValidationError> {
    if value.len() == 5 && NaiveTime::parse_from_str(value, "%H:%M").is_ok() {
        Ok(())
    } else {
        Err(ValidationError::new("time"))
    }
}

/// Splits a textarea into trimmed, non-empty lines.
pub(crate) fn lines_to_list(value: &str) -> Vec<String> {
    value
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_validation_requires_padded_hhmm() {
        assert!(validate_time_hhmm("09:00").is_ok());
        assert!(validate_time_hhmm("23:59").is_ok());
        assert!(validate_time_hhmm("9:00").is_err());
        assert!(validate_time_hhmm("25:00").is_err());
        assert!(validate_time_hhmm("0900").is_err());
    }

    #[test]
    fn textarea_lines_are_trimmed() {
        let list = lines_to_list("  sunblock \n\n tiket kapal\n");
        assert_eq!(list, vec!["sunblock".to_string(), "tiket kapal".to_string()]);
    }
}
