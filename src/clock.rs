use chrono::{DateTime, NaiveDate, Utc, Weekday};

/// Source of "now" for week-boundary computation. Injected into the tracker
/// so summaries are deterministic under test.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a single instant. Test helper, also handy for replaying
/// snapshots.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Monday of the ISO week containing `today`.
pub fn week_start(today: NaiveDate) -> NaiveDate {
    today.week(Weekday::Mon).first_day()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_starts_on_monday() {
        // 2024-03-04 is a Monday.
        assert_eq!(week_start(date(2024, 3, 4)), date(2024, 3, 4));
        assert_eq!(week_start(date(2024, 3, 6)), date(2024, 3, 4));
        // Sunday belongs to the week that started the previous Monday.
        assert_eq!(week_start(date(2024, 3, 10)), date(2024, 3, 4));
        assert_eq!(week_start(date(2024, 3, 11)), date(2024, 3, 11));
    }

    #[test]
    fn week_start_crosses_month_boundaries() {
        // 2024-04-01 is a Monday; the preceding Sunday is in March.
        assert_eq!(week_start(date(2024, 3, 31)), date(2024, 3, 25));
        assert_eq!(week_start(date(2024, 4, 1)), date(2024, 4, 1));
    }
}
