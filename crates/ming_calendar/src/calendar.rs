//! The combined calendar report for one instant at one location.

use chrono::{DateTime, Datelike, FixedOffset, Local, Utc};
use serde::{Deserialize, Serialize};

use ming_base::Location;
use ming_texts::Language;

use crate::lunar::LunarReport;
use crate::pillars::GanzhiReport;
use crate::real_sun::real_sun_fix;
use crate::solar::SolarReport;
use crate::solar_terms::SolarTermProvider;
use crate::time_spec::TimeSpec;
use crate::{CHINA_OFFSET_SECONDS, SECONDS_PER_LONGITUDE_DEGREE};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Calendar {
    pub location: Location,
    pub general_time: TimeSpec,
    pub utc_time: TimeSpec,
    pub china_time: TimeSpec,
    pub local_time: TimeSpec,
    pub real_time: TimeSpec,
    pub solar: SolarReport,
    pub lunar: LunarReport,
    pub ganzhi: GanzhiReport,
}

impl Calendar {
    /// Builds the five clock readings and the solar, lunar, and ganzhi
    /// reports for a Unix timestamp at `location`.
    pub fn new(timestamp: i64, location: Location, provider: &dyn SolarTermProvider) -> Self {
        let instant = DateTime::<Utc>::from_timestamp(timestamp, 0).unwrap_or_default();
        let china_zone = FixedOffset::east_opt(CHINA_OFFSET_SECONDS).unwrap();
        let china = instant.with_timezone(&china_zone);

        // Mean local time straight from longitude.
        let local_offset = (location.longitude * SECONDS_PER_LONGITUDE_DEGREE) as i32;
        let local_zone =
            FixedOffset::east_opt(local_offset.clamp(-86_399, 86_399)).unwrap();
        let local = instant.with_timezone(&local_zone);

        // Real-sun time adds the equation-of-time correction for the day.
        let fix = real_sun_fix(china.year(), china.ordinal());
        let real_zone =
            FixedOffset::east_opt((local_offset + fix).clamp(-86_399, 86_399)).unwrap();
        let real = instant.with_timezone(&real_zone);

        let real_spec = TimeSpec::from_datetime(&real, "RealSunTime");
        let ganzhi = GanzhiReport::compute(instant, &real_spec, provider);

        Calendar {
            location,
            general_time: TimeSpec::from_datetime(&instant.with_timezone(&Local), "Local"),
            utc_time: TimeSpec::from_datetime(&instant, "UTC"),
            china_time: TimeSpec::from_datetime(&china, "CST"),
            local_time: TimeSpec::from_datetime(&local, "LocalTime"),
            real_time: real_spec,
            solar: SolarReport::from_china_time(&china),
            lunar: LunarReport::from_china_time(&china),
            ganzhi,
        }
    }

    /// Fills the human-readable alias fields in place.
    pub fn localize(&mut self, language: Language) {
        self.lunar.localize(language);
        self.ganzhi.localize(language);
    }

    /// Two-hour branch index of the real-sun reading, 0 = Zi.
    pub fn hour_branch(&self) -> i64 {
        (i64::from(self.real_time.hour) + 1) / 2 % 12
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solar_terms::ApproxSolarTerms;

    const SHANGHAI: Location = Location {
        latitude: 31.2304,
        longitude: 121.4737,
    };

    #[test]
    fn five_readings_share_the_instant() {
        // 2000-01-01T00:00:00Z.
        let c = Calendar::new(946_684_800, SHANGHAI, &ApproxSolarTerms);
        assert_eq!(c.utc_time.year, 2000);
        assert_eq!(c.utc_time.hour, 0);
        assert_eq!(c.china_time.hour, 8);
        assert_eq!(c.china_time.zone, "CST");
        assert_eq!(c.real_time.zone, "RealSunTime");
    }

    #[test]
    fn shanghai_millennium_report() {
        let mut c = Calendar::new(946_684_800, SHANGHAI, &ApproxSolarTerms);
        c.localize(Language::Simplified);
        assert_eq!(c.solar.year, 2000);
        assert_eq!((c.solar.month, c.solar.day), (1, 1));
        assert_eq!(c.lunar.year, 1999);
        assert_eq!(c.ganzhi.year_order, 1999);
        assert_eq!((c.ganzhi.year.stem, c.ganzhi.year.branch), (5, 7));
        assert_eq!(c.ganzhi.year_alias.chars().count(), 2);
    }

    #[test]
    fn local_time_follows_longitude() {
        let greenwich = Location {
            latitude: 51.48,
            longitude: 0.0,
        };
        let c = Calendar::new(946_684_800, greenwich, &ApproxSolarTerms);
        assert_eq!(c.local_time.hour, 0);
        assert_eq!(c.local_time.offset, 0);
    }
}
