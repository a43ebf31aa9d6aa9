//! Human-readable workout labels.

use crate::WorkoutKind;
use chrono::{DateTime, Datelike, Local, TimeZone, Utc};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Render `"<Kind> on <Month> <day>"` for a workout created at `created_at`
///
/// The day is not zero-padded and is read in `created_at`'s own timezone.
pub fn describe<Tz: TimeZone>(kind: WorkoutKind, created_at: &DateTime<Tz>) -> String {
    format!(
        "{} on {} {}",
        kind.label(),
        MONTHS[created_at.month0() as usize],
        created_at.day()
    )
}

/// Label a workout by the calendar date on this machine
pub fn describe_local(kind: WorkoutKind, created_at: &DateTime<Utc>) -> String {
    describe(kind, &created_at.with_timezone(&Local))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_january_fifth() {
        let at = Utc.with_ymd_and_hms(2024, 1, 5, 12, 0, 0).unwrap();
        assert_eq!(describe(WorkoutKind::Running, &at), "Running on January 5");
    }

    #[test]
    fn test_every_month_name() {
        for (month0, name) in MONTHS.iter().enumerate() {
            let at = Utc
                .with_ymd_and_hms(2023, month0 as u32 + 1, 28, 0, 0, 0)
                .unwrap();
            assert_eq!(
                describe(WorkoutKind::Cycling, &at),
                format!("Cycling on {} 28", name)
            );
        }
    }

    #[test]
    fn test_day_is_not_padded() {
        let at = Utc.with_ymd_and_hms(2024, 10, 1, 23, 59, 59).unwrap();
        assert_eq!(describe(WorkoutKind::Cycling, &at), "Cycling on October 1");
    }

    #[test]
    fn test_date_follows_offset() {
        // 02:00 UTC on January 6 is still the evening of January 5 in New York
        let at = Utc.with_ymd_and_hms(2024, 1, 6, 2, 0, 0).unwrap();
        let new_york = FixedOffset::west_opt(5 * 3600).unwrap();
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();

        assert_eq!(
            describe(WorkoutKind::Running, &at.with_timezone(&new_york)),
            "Running on January 5"
        );
        assert_eq!(
            describe(WorkoutKind::Running, &at.with_timezone(&tokyo)),
            "Running on January 6"
        );
        assert_eq!(describe(WorkoutKind::Running, &at), "Running on January 6");
    }

    #[test]
    fn test_local_label_matches_local_date() {
        let at = Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap();
        let local = at.with_timezone(&Local);
        assert_eq!(
            describe_local(WorkoutKind::Cycling, &at),
            format!("Cycling on July {}", local.day())
        );
    }
}
