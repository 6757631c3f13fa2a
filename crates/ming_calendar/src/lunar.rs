//! Lunar (agricultural) calendar conversion, valid 1900-2100.
//!
//! Each table entry packs one lunar year: bit 16 selects a 30-day leap
//! month, bits 15..4 give 30/29 days for months 1..12, and the low nibble
//! names the leap month (0 = none).

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use ming_texts::{alias, Alias, Language};

const FIRST_YEAR: i32 = 1900;
const LAST_YEAR: i32 = 2100;

#[rustfmt::skip]
const LUNAR_INFO: [u32; 201] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2,
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977,
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970,
    0x06566, 0x0d4a0, 0x0ea50, 0x06e95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950,
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557,
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0,
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0,
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6,
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570,
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0,
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5,
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930,
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530,
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45,
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0,
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0,
    0x0a2e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4,
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0,
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160,
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252,
    0x0d520,
];

fn info(year: i32) -> u32 {
    LUNAR_INFO[(year - FIRST_YEAR) as usize]
}

/// Leap month of a lunar year, 0 when there is none.
pub fn leap_month(year: i32) -> u32 {
    info(year) & 0xf
}

/// Days in the leap month of a lunar year, 0 when there is none.
pub fn leap_days(year: i32) -> u32 {
    if leap_month(year) == 0 {
        0
    } else if info(year) & 0x10000 != 0 {
        30
    } else {
        29
    }
}

/// Days in ordinary month `month` (1..=12) of a lunar year.
pub fn month_days(year: i32, month: u32) -> u32 {
    if info(year) & (0x10000 >> month) != 0 {
        30
    } else {
        29
    }
}

fn year_days(year: i32) -> u32 {
    (1..=12).map(|m| month_days(year, m)).sum::<u32>() + leap_days(year)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunarReport {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub leap_month: bool,
    /// Zodiac animal index, 0 = Rat.
    pub animal_sign: i64,
    pub month_alias: String,
    pub day_alias: String,
    pub animal_alias: String,
}

impl LunarReport {
    /// Converts the China-time reading of an instant. Dates outside the
    /// table range come back as the empty report.
    pub fn from_china_time(t: &DateTime<FixedOffset>) -> Self {
        let anchor = NaiveDate::from_ymd_opt(FIRST_YEAR, 1, 31).unwrap();
        let mut offset = t.date_naive().signed_duration_since(anchor).num_days();
        if offset < 0 {
            return LunarReport::default();
        }

        let mut year = FIRST_YEAR;
        loop {
            if year > LAST_YEAR {
                return LunarReport::default();
            }
            let days = i64::from(year_days(year));
            if offset < days {
                break;
            }
            offset -= days;
            year += 1;
        }

        let leap = leap_month(year);
        let mut month = 1;
        let mut in_leap = false;
        for m in 1..=12 {
            let days = i64::from(month_days(year, m));
            if offset < days {
                month = m;
                break;
            }
            offset -= days;
            if m == leap {
                let extra = i64::from(leap_days(year));
                if offset < extra {
                    month = m;
                    in_leap = true;
                    break;
                }
                offset -= extra;
            }
            month = m + 1;
        }

        LunarReport {
            year,
            month,
            day: offset as u32 + 1,
            leap_month: in_leap,
            animal_sign: i64::from(year - 4).rem_euclid(12),
            month_alias: String::new(),
            day_alias: String::new(),
            animal_alias: String::new(),
        }
    }

    pub fn localize(&mut self, language: Language) {
        if self.year == 0 {
            return;
        }
        self.month_alias = alias(Alias::LunarMonth, i64::from(self.month), language).to_owned();
        self.day_alias = alias(Alias::LunarDay, i64::from(self.day) - 1, language).to_owned();
        self.animal_alias = alias(Alias::Animal, self.animal_sign, language).to_owned();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn china(y: i32, m: u32, d: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(8 * 3600)
            .unwrap()
            .with_ymd_and_hms(y, m, d, 12, 0, 0)
            .unwrap()
    }

    #[test]
    fn epoch_day_is_first_of_first() {
        let report = LunarReport::from_china_time(&china(1900, 1, 31));
        assert_eq!((report.year, report.month, report.day), (1900, 1, 1));
        assert!(!report.leap_month);
    }

    #[test]
    fn rabbit_year_end() {
        // 2000-01-01 falls in lunar 1999, eleventh month.
        let report = LunarReport::from_china_time(&china(2000, 1, 1));
        assert_eq!(report.year, 1999);
        assert_eq!(report.month, 11);
        assert_eq!(report.animal_sign, 3);
    }

    #[test]
    fn leap_month_2020() {
        // 2020 has a leap fourth month; 2020-05-23 is its first day.
        assert_eq!(leap_month(2020), 4);
        let report = LunarReport::from_china_time(&china(2020, 5, 23));
        assert_eq!((report.year, report.month, report.day), (2020, 4, 1));
        assert!(report.leap_month);
    }

    #[test]
    fn out_of_range_is_empty() {
        assert_eq!(
            LunarReport::from_china_time(&china(1899, 6, 1)),
            LunarReport::default()
        );
    }

    #[test]
    fn localize_fills_aliases() {
        let mut report = LunarReport::from_china_time(&china(2000, 1, 1));
        report.localize(Language::Simplified);
        assert!(!report.month_alias.is_empty());
        assert!(!report.day_alias.is_empty());
        assert!(!report.animal_alias.is_empty());
    }
}
