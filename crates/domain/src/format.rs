//! Display formatting for workout data. Pure string helpers used by
//! the presentation layer.

use chrono::{DateTime, Utc};

use crate::Weight;

/// Elapsed time between two timestamps, in coarse human units.
#[must_use]
pub fn duration(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    let minutes = (end - start).num_minutes();

    if minutes < 1 {
        "< 1 min".to_string()
    } else if minutes < 60 {
        format!("{minutes} min")
    } else {
        let hours = minutes / 60;
        let minutes = minutes % 60;
        if minutes > 0 {
            format!("{hours}h {minutes}m")
        } else {
            format!("{hours}h")
        }
    }
}

/// Weight without unnecessary decimal places ("135", "12.5").
#[must_use]
pub fn weight(weight: Weight) -> String {
    let value = f32::from(weight);

    #[allow(clippy::cast_possible_truncation)]
    if value.fract() == 0.0 {
        return format!("{}", value as i64);
    }

    format!("{value:.2}")
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Volume in whole pounds with thousands separators ("1,350").
#[must_use]
pub fn volume(volume: f32) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let rounded = volume.round() as i64;
    let digits = rounded.abs().to_string();
    let mut grouped = String::new();

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// One set for display, optionally prefixed with its position
/// ("Set 1: 135 lbs × 5 reps").
#[must_use]
pub fn set_display(index: Option<usize>, set_weight: Weight, reps: u32) -> String {
    let prefix = index.map(|i| format!("Set {}: ", i + 1)).unwrap_or_default();
    format!("{prefix}{} lbs × {reps} reps", weight(set_weight))
}

/// Clock time of a timestamp ("17:30").
#[must_use]
pub fn time(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%H:%M").to_string()
}

/// Summary line for a finished exercise
/// ("3 sets • 1,350 lbs total volume").
#[must_use]
pub fn exercise_summary(set_count: usize, total_volume: f32) -> String {
    let sets_text = if set_count == 1 { "set" } else { "sets" };
    format!(
        "{set_count} {sets_text} • {} lbs total volume",
        volume(total_volume)
    )
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 17, 30, 0).unwrap()
    }

    #[rstest]
    #[case(Duration::seconds(30), "< 1 min")]
    #[case(Duration::minutes(1), "1 min")]
    #[case(Duration::minutes(59), "59 min")]
    #[case(Duration::minutes(60), "1h")]
    #[case(Duration::minutes(95), "1h 35m")]
    #[case(Duration::minutes(120), "2h")]
    fn test_duration(#[case] elapsed: Duration, #[case] expected: &str) {
        assert_eq!(duration(timestamp(), timestamp() + elapsed), expected);
    }

    #[rstest]
    #[case(135.0, "135")]
    #[case(12.5, "12.5")]
    #[case(22.25, "22.25")]
    #[case(1000.0, "1000")]
    fn test_weight(#[case] value: f32, #[case] expected: &str) {
        assert_eq!(weight(Weight::new(value).unwrap()), expected);
    }

    #[rstest]
    #[case(0.0, "0")]
    #[case(675.0, "675")]
    #[case(1350.0, "1,350")]
    #[case(1_234_567.0, "1,234,567")]
    fn test_volume(#[case] value: f32, #[case] expected: &str) {
        assert_eq!(volume(value), expected);
    }

    #[rstest]
    #[case(Some(0), "Set 1: 135 lbs × 5 reps")]
    #[case(Some(2), "Set 3: 135 lbs × 5 reps")]
    #[case(None, "135 lbs × 5 reps")]
    fn test_set_display(#[case] index: Option<usize>, #[case] expected: &str) {
        assert_eq!(
            set_display(index, Weight::new(135.0).unwrap(), 5),
            expected
        );
    }

    #[test]
    fn test_time() {
        assert_eq!(time(timestamp()), "17:30");
    }

    #[rstest]
    #[case(1, 675.0, "1 set • 675 lbs total volume")]
    #[case(2, 1400.0, "2 sets • 1,400 lbs total volume")]
    fn test_exercise_summary(
        #[case] set_count: usize,
        #[case] total_volume: f32,
        #[case] expected: &str,
    ) {
        assert_eq!(exercise_summary(set_count, total_volume), expected);
    }
}
