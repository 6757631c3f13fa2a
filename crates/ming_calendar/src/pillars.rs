//! Four-pillar (year/month/day/hour) ganzhi derivation.
//!
//! Pillars read the real-sun local wall clock for their date arithmetic,
//! while term boundaries compare the underlying instant. The ganzhi year
//! rolls over at start-of-spring, not at New Year.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ming_base::GanzhiPair;
use ming_texts::{alias, Alias, Language};

use crate::solar_terms::{ganzhi_year_terms, SolarTermProvider};
use crate::time_spec::TimeSpec;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanzhiReport {
    pub year_order: i32,
    pub year: GanzhiPair,
    pub year_alias: String,
    pub month: GanzhiPair,
    pub month_alias: String,
    pub day: GanzhiPair,
    pub day_alias: String,
    pub hour: GanzhiPair,
    pub hour_alias: String,
}

/// Stem-plus-branch alias of a pair, "_" when the pair is invalid.
pub fn pair_alias(pair: GanzhiPair, language: Language) -> String {
    if !pair.is_valid() {
        return "_".to_owned();
    }
    let mut s = String::new();
    s.push_str(alias(Alias::Stem, pair.stem, language));
    s.push_str(alias(Alias::Branch, pair.branch, language));
    s
}

impl GanzhiReport {
    pub fn compute(
        instant: DateTime<Utc>,
        real: &TimeSpec,
        provider: &dyn SolarTermProvider,
    ) -> Self {
        let mut report = GanzhiReport::default();

        // Year pillar: the ganzhi year begins at start-of-spring.
        let mut year = real.year;
        let terms = provider.solar_terms(year);
        if instant < terms[2] {
            year -= 1;
        }
        report.year_order = year;
        report.year = GanzhiPair::new(
            i64::from(year - 4).rem_euclid(10),
            i64::from(year - 4).rem_euclid(12),
        );

        // Month pillar: count term pairs passed since start-of-spring.
        let terms = ganzhi_year_terms(provider, year);
        let mut idx: i64 = 23;
        for (i, term) in terms.iter().enumerate() {
            if instant < *term {
                idx = i as i64 - 1;
                break;
            }
        }
        let month = idx / 2 + 1;
        report.month = GanzhiPair::new(
            (month + report.year.stem * 2 + 1).rem_euclid(10),
            (month + 1).rem_euclid(12),
        );

        // Day pillar: the congruence formula treats January and February
        // as months 13 and 14 of the prior year, and rolls the day at 23h.
        let mut y = i64::from(real.year);
        let mut m = i64::from(real.month);
        if m < 3 {
            m += 12;
            y -= 1;
        }
        let century = y.div_euclid(100);
        let year_part = y.rem_euclid(100);
        let mut d = i64::from(real.day);
        if real.hour >= 23 {
            d += 1;
        }
        let i = if m % 2 == 0 { 6 } else { 0 };
        let shared = century / 4 + 5 * year_part + year_part / 4 + 3 * (m + 1) / 5 + d;
        report.day = GanzhiPair::new(
            (4 * century + shared - 4).rem_euclid(10),
            (8 * century + shared + 6 + i).rem_euclid(12),
        );

        // Hour pillar: two-hour branches anchored on the day stem.
        let hour_branch = (i64::from(real.hour) + 1) / 2 % 12;
        report.hour = GanzhiPair::new(
            (hour_branch + report.day.stem * 2).rem_euclid(10),
            hour_branch,
        );

        report
    }

    pub fn localize(&mut self, language: Language) {
        self.year_alias = pair_alias(self.year, language);
        self.month_alias = pair_alias(self.month, language);
        self.day_alias = pair_alias(self.day, language);
        self.hour_alias = pair_alias(self.hour, language);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solar_terms::ApproxSolarTerms;
    use crate::CHINA_OFFSET_SECONDS;
    use chrono::{FixedOffset, TimeZone};

    fn at(y: i32, mo: u32, d: u32, h: u32) -> (DateTime<Utc>, TimeSpec) {
        let china = FixedOffset::east_opt(CHINA_OFFSET_SECONDS).unwrap();
        let t = china.with_ymd_and_hms(y, mo, d, h, 0, 0).unwrap();
        (t.with_timezone(&Utc), TimeSpec::from_datetime(&t, "CST"))
    }

    #[test]
    fn year_rolls_back_before_spring() {
        let (instant, spec) = at(2000, 1, 1, 0);
        let report = GanzhiReport::compute(instant, &spec, &ApproxSolarTerms);
        assert_eq!(report.year_order, 1999);
        assert_eq!(report.year, GanzhiPair::new(5, 7));
    }

    #[test]
    fn year_advances_at_spring() {
        let (instant, spec) = at(2000, 2, 10, 12);
        let report = GanzhiReport::compute(instant, &spec, &ApproxSolarTerms);
        assert_eq!(report.year_order, 2000);
        assert_eq!(report.year, GanzhiPair::new(6, 8));
    }

    #[test]
    fn day_advances_consecutively() {
        let (i1, s1) = at(2020, 6, 1, 12);
        let (i2, s2) = at(2020, 6, 2, 12);
        let r1 = GanzhiReport::compute(i1, &s1, &ApproxSolarTerms);
        let r2 = GanzhiReport::compute(i2, &s2, &ApproxSolarTerms);
        assert_eq!((r1.day.value() + 1) % 60, r2.day.value());
    }

    #[test]
    fn late_hour_rolls_the_day() {
        let (i1, s1) = at(2020, 6, 1, 23);
        let (i2, s2) = at(2020, 6, 2, 1);
        let r1 = GanzhiReport::compute(i1, &s1, &ApproxSolarTerms);
        let r2 = GanzhiReport::compute(i2, &s2, &ApproxSolarTerms);
        assert_eq!(r1.day, r2.day);
        assert_eq!(r1.hour.branch, 0);
    }

    #[test]
    fn hour_branches_by_window() {
        let (i, s) = at(2020, 6, 1, 0);
        assert_eq!(GanzhiReport::compute(i, &s, &ApproxSolarTerms).hour.branch, 0);
        let (i, s) = at(2020, 6, 1, 13);
        assert_eq!(GanzhiReport::compute(i, &s, &ApproxSolarTerms).hour.branch, 7);
    }

    #[test]
    fn localize_marks_invalid_pairs() {
        let mut report = GanzhiReport::default();
        report.year = GanzhiPair::new(-1, -1);
        report.localize(Language::Simplified);
        assert_eq!(report.year_alias, "_");
    }

    #[test]
    fn month_pillar_agrees_with_year_stem() {
        // First ganzhi month after spring 2000: month = 1,
        // stem = (1 + 6*2 + 1) % 10 = 4, branch = 2.
        let (instant, spec) = at(2000, 2, 10, 12);
        let report = GanzhiReport::compute(instant, &spec, &ApproxSolarTerms);
        assert_eq!(report.month, GanzhiPair::new(4, 2));
    }
}
