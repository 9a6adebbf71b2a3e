//! Serde helpers for optional cookie lifetimes.
//!
//! Whole days are written as `"<n>days"` (`"1day"` for one) so the default
//! reads `"180days"` rather than humantime's month-based rendering. Anything
//! humantime can parse is accepted on input.

use humantime_serde::re::humantime;
use serde::{Deserialize, Deserializer, Serializer};
use std::time::Duration;

const SECS_PER_DAY: u64 = 24 * 60 * 60;

pub(crate) fn format(duration: Duration) -> String {
    let secs = duration.as_secs();
    if duration.subsec_nanos() == 0 && secs > 0 && secs % SECS_PER_DAY == 0 {
        match secs / SECS_PER_DAY {
            1 => "1day".to_string(),
            days => format!("{days}days"),
        }
    } else {
        humantime::format_duration(duration).to_string()
    }
}

pub(crate) fn serialize<S: Serializer>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(duration) => serializer.serialize_some(&format(*duration)),
        None => serializer.serialize_none(),
    }
}

pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Duration>, D::Error> {
    Option::<String>::deserialize(deserializer)?
        .map(|text| humantime::parse_duration(text.trim()).map_err(serde::de::Error::custom))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_days_use_day_units() {
        assert_eq!(format(Duration::from_secs(180 * SECS_PER_DAY)), "180days");
        assert_eq!(format(Duration::from_secs(SECS_PER_DAY)), "1day");
    }

    #[test]
    fn other_durations_use_humantime() {
        assert_eq!(format(Duration::from_secs(90)), "1m 30s");
        assert_eq!(format(Duration::ZERO), "0s");
    }

    #[test]
    fn formatted_values_parse_back() {
        for secs in [0, 90, 3_600, SECS_PER_DAY, 180 * SECS_PER_DAY, 400 * SECS_PER_DAY] {
            let duration = Duration::from_secs(secs);
            assert_eq!(humantime::parse_duration(&format(duration)).ok(), Some(duration));
        }
    }
}
