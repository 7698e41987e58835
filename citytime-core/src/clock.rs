//! Simulated local clock for the selected city, plus the daylight-saving
//! heuristic.
//!
//! The clock never accumulates state: every tick re-derives the displayed
//! instant from the real UTC time and the city's effective offset, so a
//! missed or delayed tick can never introduce drift.

use chrono::{DateTime, Datelike, Duration, Local, NaiveDateTime, Offset, SubsecRound, TimeZone, Utc};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Clock for the currently selected city.
///
/// `current_time` is derived, recomputed on every tick; it is the UTC
/// instant shifted by the effective offset and truncated to whole seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockState {
    pub current_time: NaiveDateTime,
    pub utc_offset_hours: f64,
    pub is_daylight_saving: bool,
}

impl ClockState {
    pub fn new(utc_offset_hours: f64, is_daylight_saving: bool, now: DateTime<Utc>) -> Self {
        let mut clock = Self {
            current_time: now.naive_utc(),
            utc_offset_hours,
            is_daylight_saving,
        };
        clock.tick(now);
        clock
    }

    /// Base offset plus one hour when daylight saving is flagged active.
    /// Fractional base offsets (−3.5) stay exact.
    pub fn effective_offset_hours(&self) -> f64 {
        if self.is_daylight_saving {
            self.utc_offset_hours + 1.0
        } else {
            self.utc_offset_hours
        }
    }

    /// Switch to a new base offset and refresh immediately rather than
    /// waiting for the next scheduled tick.
    pub fn set_offset(&mut self, utc_offset_hours: f64, now: DateTime<Utc>) {
        self.utc_offset_hours = utc_offset_hours;
        self.tick(now);
    }

    /// Re-derive the displayed instant from `now`.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        let shift = Duration::milliseconds((self.effective_offset_hours() * MILLIS_PER_HOUR) as i64);
        self.current_time = (now + shift).naive_utc().trunc_subsecs(0);
    }

    /// Zero-padded 24-hour `HH:MM:SS`.
    pub fn format_time(&self) -> String {
        self.current_time.format("%H:%M:%S").to_string()
    }

    /// Full date, e.g. `Wednesday, August 27, 2026`.
    pub fn format_date(&self) -> String {
        self.current_time.format("%A, %B %-d, %Y").to_string()
    }
}

/// Decide whether daylight saving is active, judged from the host
/// environment's own time zone rather than the selected city's calendar.
///
/// Offsets use the JavaScript convention: minutes behind UTC, so more
/// negative means further ahead of UTC. The host observes its offset on
/// January 1 and July 1; DST counts as active when the current offset is
/// strictly below the larger of the two. Cities whose real DST status
/// differs from the host's will be misjudged; that behavior is part of the
/// widget's contract and is kept as-is. Evaluated once per process at
/// startup, never re-evaluated on city change.
pub fn detect_dst(now: DateTime<Local>) -> bool {
    let year = now.year();
    let january = host_offset_minutes(year, 1, 1);
    let july = host_offset_minutes(year, 7, 1);
    let current = -now.offset().fix().local_minus_utc() / 60;
    dst_from_offsets(january, july, current)
}

/// Pure half of the heuristic, split out so it can be exercised without
/// touching the host time zone database.
pub fn dst_from_offsets(january_minutes: i32, july_minutes: i32, current_minutes: i32) -> bool {
    current_minutes < january_minutes.max(july_minutes)
}

/// Host offset in JS-convention minutes at local midnight of the given day.
fn host_offset_minutes(year: i32, month: u32, day: u32) -> i32 {
    // Midnight on Jan 1 / Jul 1 is never inside a DST gap, so `earliest`
    // only falls back when the tz database has no answer at all.
    Local
        .with_ymd_and_hms(year, month, day, 0, 0, 0)
        .earliest()
        .map(|dt| -dt.offset().fix().local_minus_utc() / 60)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, h, m, s).unwrap()
    }

    #[test]
    fn tick_applies_effective_offset() {
        // Toronto in summer: −5 base, +1 DST, so UTC−4.
        let mut clock = ClockState::new(-5.0, true, instant(12, 0, 0));
        assert_eq!(clock.format_time(), "08:00:00");

        clock.is_daylight_saving = false;
        clock.tick(instant(12, 0, 0));
        assert_eq!(clock.format_time(), "07:00:00");
    }

    #[test]
    fn fractional_offset_keeps_half_hour() {
        // St. John's, standard time: UTC−3:30.
        let clock = ClockState::new(-3.5, false, instant(12, 0, 0));
        assert_eq!(clock.format_time(), "08:30:00");
    }

    #[test]
    fn set_offset_refreshes_immediately() {
        let mut clock = ClockState::new(-5.0, false, instant(12, 0, 0));
        clock.set_offset(-8.0, instant(12, 0, 0));
        assert_eq!(clock.format_time(), "04:00:00");
    }

    #[test]
    fn time_is_zero_padded() {
        let clock = ClockState::new(-5.0, false, instant(14, 3, 7));
        assert_eq!(clock.format_time(), "09:03:07");
    }

    #[test]
    fn date_is_fully_spelled_out() {
        let clock = ClockState::new(0.0, false, instant(12, 0, 0));
        assert_eq!(clock.format_date(), "Monday, January 15, 2024");
    }

    #[test]
    fn offset_change_crossing_midnight_changes_date() {
        let clock = ClockState::new(-5.0, false, Utc.with_ymd_and_hms(2024, 1, 15, 2, 0, 0).unwrap());
        assert_eq!(clock.format_time(), "21:00:00");
        assert_eq!(clock.format_date(), "Sunday, January 14, 2024");
    }

    #[test]
    fn dst_heuristic_matches_js_convention() {
        // Eastern zone: January offset 300, July offset 240.
        assert!(dst_from_offsets(300, 240, 240));
        assert!(!dst_from_offsets(300, 240, 300));
        // Southern hemisphere: DST active in January.
        assert!(dst_from_offsets(-660, -600, -660));
        // Zone without DST observes the same offset year round.
        assert!(!dst_from_offsets(300, 300, 300));
    }
}
