//! Picks the wallpaper for an instant given today's solar times.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::model::{SolarTimes, WallpaperKind};

/// Half-width of the sunrise, noon and sunset windows. Boundaries are inclusive.
pub const EVENT_WINDOW_MINUTES: i64 = 15;

fn event_window() -> Duration {
    Duration::minutes(EVENT_WINDOW_MINUTES)
}

fn within(a: DateTime<Utc>, b: DateTime<Utc>, window: Duration) -> bool {
    let delta = if a >= b { a - b } else { b - a };
    delta <= window
}

/// Classify `now` against `times`.
///
/// Checks run in a fixed order and the first match wins: night, sunrise,
/// noon, sunset, then morning or evening by which side of solar noon `now`
/// falls on. On days shorter than two windows the sunrise check shadows noon.
pub fn choose_wallpaper(now: DateTime<Utc>, times: &SolarTimes) -> WallpaperKind {
    let sunrise = times.sunrise();
    let sunset = times.sunset();
    let window = event_window();

    if now < sunrise || now > sunset {
        debug!(%now, "outside daytime, it's night");
        return WallpaperKind::Night;
    }

    if within(now, sunrise, window) {
        debug!(%now, %sunrise, "within {EVENT_WINDOW_MINUTES} minutes of sunrise");
        return WallpaperKind::Sunrise;
    }

    let solar_noon = times.solar_noon();
    if within(now, solar_noon, window) {
        debug!(%now, %solar_noon, "within {EVENT_WINDOW_MINUTES} minutes of solar noon");
        return WallpaperKind::Noon;
    }

    if within(now, sunset, window) {
        debug!(%now, %sunset, "within {EVENT_WINDOW_MINUTES} minutes of sunset");
        return WallpaperKind::Sunset;
    }

    if now < solar_noon {
        debug!(%now, "morning period");
        WallpaperKind::Morning
    } else {
        debug!(%now, "evening period");
        WallpaperKind::Evening
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 20, h, m, s).unwrap()
    }

    fn six_to_six() -> SolarTimes {
        SolarTimes::new(at(6, 0, 0), at(18, 0, 0)).unwrap()
    }

    #[test]
    fn twelve_hour_day_examples() {
        let times = six_to_six();
        let cases = [
            (at(5, 59, 0), WallpaperKind::Night),
            (at(6, 5, 0), WallpaperKind::Sunrise),
            (at(9, 0, 0), WallpaperKind::Morning),
            (at(12, 10, 0), WallpaperKind::Noon),
            (at(15, 0, 0), WallpaperKind::Evening),
            (at(17, 50, 0), WallpaperKind::Sunset),
            (at(18, 0, 1), WallpaperKind::Night),
        ];

        for (now, expected) in cases {
            assert_eq!(choose_wallpaper(now, &times), expected, "at {now}");
        }
    }

    #[test]
    fn night_outside_daylight() {
        let times = six_to_six();
        assert_eq!(choose_wallpaper(at(0, 0, 0), &times), WallpaperKind::Night);
        assert_eq!(choose_wallpaper(at(23, 59, 59), &times), WallpaperKind::Night);
        // A window extending past sunrise/sunset does not apply outside the day.
        assert_eq!(choose_wallpaper(at(5, 50, 0), &times), WallpaperKind::Night);
        assert_eq!(choose_wallpaper(at(18, 10, 0), &times), WallpaperKind::Night);
    }

    #[test]
    fn boundaries_are_inclusive() {
        let times = six_to_six();
        assert_eq!(choose_wallpaper(at(6, 0, 0), &times), WallpaperKind::Sunrise);
        assert_eq!(choose_wallpaper(at(6, 15, 0), &times), WallpaperKind::Sunrise);
        assert_eq!(choose_wallpaper(at(11, 45, 0), &times), WallpaperKind::Noon);
        assert_eq!(choose_wallpaper(at(12, 15, 0), &times), WallpaperKind::Noon);
        assert_eq!(choose_wallpaper(at(17, 45, 0), &times), WallpaperKind::Sunset);
        assert_eq!(choose_wallpaper(at(18, 0, 0), &times), WallpaperKind::Sunset);
    }

    #[test]
    fn just_past_windows_falls_back_to_morning_or_evening() {
        let times = six_to_six();
        let tick = Duration::nanoseconds(1);

        assert_eq!(choose_wallpaper(at(6, 15, 0) + tick, &times), WallpaperKind::Morning);
        assert_eq!(choose_wallpaper(at(11, 45, 0) - tick, &times), WallpaperKind::Morning);
        assert_eq!(choose_wallpaper(at(12, 15, 0) + tick, &times), WallpaperKind::Evening);
        assert_eq!(choose_wallpaper(at(17, 45, 0) - tick, &times), WallpaperKind::Evening);
    }

    #[test]
    fn sunrise_window_wins_on_short_days() {
        // 20 minute day: noon at 12:10, sunrise and noon windows overlap.
        let times = SolarTimes::new(at(12, 0, 0), at(12, 20, 0)).unwrap();
        assert_eq!(choose_wallpaper(at(12, 10, 0), &times), WallpaperKind::Sunrise);
        assert_eq!(choose_wallpaper(at(12, 15, 0), &times), WallpaperKind::Sunrise);
        // Past the sunrise window but still within noon's.
        assert_eq!(choose_wallpaper(at(12, 16, 0), &times), WallpaperKind::Noon);
        assert_eq!(choose_wallpaper(at(12, 20, 0), &times), WallpaperKind::Noon);
    }

    #[test]
    fn noon_window_wins_over_sunset() {
        // 40 minute day: noon at 12:20; 12:30 is within both noon and sunset windows.
        let times = SolarTimes::new(at(12, 0, 0), at(12, 40, 0)).unwrap();
        assert_eq!(choose_wallpaper(at(12, 30, 0), &times), WallpaperKind::Noon);
        assert_eq!(choose_wallpaper(at(12, 36, 0), &times), WallpaperKind::Sunset);
    }

    #[test]
    fn every_instant_of_a_day_is_classified_in_order() {
        let times = six_to_six();
        let mut now = at(0, 0, 0);
        let mut seen = Vec::new();

        while now <= at(23, 59, 0) {
            let kind = choose_wallpaper(now, &times);
            if seen.last() != Some(&kind) {
                seen.push(kind);
            }
            now += Duration::minutes(1);
        }

        assert_eq!(
            seen,
            vec![
                WallpaperKind::Night,
                WallpaperKind::Sunrise,
                WallpaperKind::Morning,
                WallpaperKind::Noon,
                WallpaperKind::Evening,
                WallpaperKind::Sunset,
                WallpaperKind::Night,
            ]
        );
    }
}
