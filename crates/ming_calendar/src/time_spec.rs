//! Decomposed calendar reading of one instant in one zone.

use chrono::{DateTime, Datelike, Offset, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

/// One read-only calendar decomposition: date, clock, zone name and UTC
/// offset in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeSpec {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub zone: String,
    pub offset: i32,
}

impl TimeSpec {
    /// Decompose a zoned datetime under an explicit zone label.
    pub fn from_datetime<Tz: TimeZone>(t: &DateTime<Tz>, zone: &str) -> Self {
        Self {
            year: t.year(),
            month: t.month(),
            day: t.day(),
            hour: t.hour(),
            minute: t.minute(),
            second: t.second(),
            zone: zone.to_string(),
            offset: t.offset().fix().local_minus_utc(),
        }
    }
}

impl std::fmt::Display for TimeSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02} {}",
            self.year, self.month, self.day, self.hour, self.minute, self.second, self.zone
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn decomposes_fixed_offset() {
        let utc = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        let cst = utc.with_timezone(&FixedOffset::east_opt(8 * 3600).unwrap());
        let spec = TimeSpec::from_datetime(&cst, "CST");
        assert_eq!(spec.year, 2000);
        assert_eq!(spec.month, 1);
        assert_eq!(spec.day, 1);
        assert_eq!(spec.hour, 8);
        assert_eq!(spec.offset, 8 * 3600);
        assert_eq!(spec.zone, "CST");
        assert_eq!(spec.to_string(), "2000-01-01 08:00:00 CST");
    }
}
