use chrono::{Local, NaiveDateTime};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Object key for a snapshot taken at `at`, to the second.
pub fn snapshot_key(line_id: &str, at: NaiveDateTime) -> String {
    format!(
        "tfl_arrivals_{}_{}.json",
        line_id,
        at.format(TIMESTAMP_FORMAT)
    )
}


#[cfg(test)]
mod tests {
    use super::testing::FixedClock;
    use super::*;

    #[test]
    fn test_snapshot_key_fixed_clock() {
        let clock = FixedClock::at("2024-01-01T12:00:00");
        assert_eq!(
            snapshot_key("district", clock.now()),
            "tfl_arrivals_district_2024-01-01T12:00:00.json"
        );
    }

    #[test]
    fn test_snapshot_key_drops_subseconds() {
        let at = NaiveDateTime::parse_from_str("2024-03-09T07:05:03.987", "%Y-%m-%dT%H:%M:%S%.f")
            .unwrap();
        assert_eq!(
            snapshot_key("victoria", at),
            "tfl_arrivals_victoria_2024-03-09T07:05:03.json"
        );
    }

    #[test]
    fn test_snapshot_key_shape_from_system_clock() {
        let key = snapshot_key("district", SystemClock.now());
        let stamp = key
            .strip_prefix("tfl_arrivals_district_")
            .and_then(|rest| rest.strip_suffix(".json"))
            .unwrap();

        assert_eq!(stamp.len(), "YYYY-MM-DDTHH:MM:SS".len());
        assert!(NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).is_ok());
    }
}
