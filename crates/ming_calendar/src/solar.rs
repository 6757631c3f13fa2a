//! Gregorian calendar facts for the China-time reading of an instant.

use chrono::{DateTime, Datelike, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::real_sun::is_leap_year;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolarReport {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Day of week, Sunday = 0.
    pub week_day: u32,
    pub day_of_year: u32,
    pub days_in_month: u32,
    pub leap_year: bool,
}

const MONTH_DAYS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

impl SolarReport {
    pub fn from_china_time(t: &DateTime<FixedOffset>) -> Self {
        let year = t.year();
        let month = t.month();
        let mut days_in_month = MONTH_DAYS[month as usize - 1];
        if month == 2 && is_leap_year(year) {
            days_in_month = 29;
        }
        SolarReport {
            year,
            month,
            day: t.day(),
            week_day: t.weekday().num_days_from_sunday(),
            day_of_year: t.ordinal(),
            days_in_month,
            leap_year: is_leap_year(year),
        }
    }
}
