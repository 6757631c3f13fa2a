//! Five-rules stroke grids over the traditional rendition.
//!
//! The five grid values (heaven, earth, person, total, outer) come from
//! stroke sums with single-character padding. Each value maps to a stem
//! five element, a rule of 81, and (except the person grid) a ten-god
//! against the person grid.

use serde::Serialize;

use ming_base::{fix_mod, ten_god_index};
use ming_texts::{Alias, Language, Message, MessageStore, alias};

use crate::name::Name;
use crate::rules::{Rule81, ThreeElement, rule81, rule81_index, three_element};
use crate::ten_gods::{TenGod, ten_god};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FiveRules {
    pub tian_ge: i64,
    pub tian_ge_five_element: String,
    pub tian_ge_five_element_description: String,
    pub tian_ge_god: TenGod,
    pub tian_ge_rule: Rule81,
    pub tian_ge_rank: String,

    pub di_ge: i64,
    pub di_ge_five_element: String,
    pub di_ge_five_element_description: String,
    pub di_ge_god: TenGod,
    pub di_ge_rule: Rule81,
    pub di_ge_rank: String,

    pub ren_ge: i64,
    pub ren_ge_five_element: String,
    pub ren_ge_five_element_description: String,
    pub ren_ge_rule: Rule81,
    pub ren_ge_rank: String,

    pub zong_ge: i64,
    pub zong_ge_five_element: String,
    pub zong_ge_five_element_description: String,
    pub zong_ge_god: TenGod,
    pub zong_ge_rule: Rule81,
    pub zong_ge_rank: String,

    pub wai_ge: i64,
    pub wai_ge_five_element: String,
    pub wai_ge_five_element_description: String,
    pub wai_ge_god: TenGod,
    pub wai_ge_rule: Rule81,
    pub wai_ge_rank: String,

    pub three_element: ThreeElement,
    pub three_element_rank: String,
}

impl FiveRules {
    pub fn compute(name: &Name, messages: &MessageStore, language: Language) -> Self {
        let mut fr = FiveRules::default();
        let family = &name.traditional.family_name;
        let given = &name.traditional.given_name;

        if family.length >= 2 {
            fr.tian_ge = family.strokes[0] + family.strokes[1];
            fr.ren_ge = if given.length >= 1 {
                family.strokes[1] + given.strokes[0]
            } else {
                family.strokes[1]
            };
        } else if family.length == 1 {
            fr.tian_ge = family.strokes[0] + 1;
            fr.ren_ge = if given.length >= 1 {
                family.strokes[0] + given.strokes[0]
            } else {
                family.strokes[0]
            };
        }

        if given.length >= 2 {
            fr.di_ge = given.strokes[0] + given.strokes[1];
        } else if given.length == 1 {
            fr.di_ge = given.strokes[0] + 1;
        }

        if family.length >= 2 {
            if given.length >= 2 {
                fr.wai_ge = family.strokes[0] + given.strokes[1];
            } else if given.length == 1 {
                fr.wai_ge = family.strokes[0] + 1;
            }
        } else if family.length == 1 {
            if given.length >= 2 {
                fr.wai_ge = 1 + given.strokes[1];
            } else if given.length == 1 {
                fr.wai_ge = 2;
            }
        }

        fr.zong_ge = family.strokes.iter().sum::<i64>() + given.strokes.iter().sum::<i64>();

        // Grid value -> stem index in 0..10.
        let tf = fix_mod(fr.tian_ge, 10) - 1;
        let df = fix_mod(fr.di_ge, 10) - 1;
        let rf = fix_mod(fr.ren_ge, 10) - 1;
        let zf = fix_mod(fr.zong_ge, 10) - 1;
        let wf = fix_mod(fr.wai_ge, 10) - 1;

        let element_texts = |stem: i64| {
            (
                alias(Alias::StemFiveElement, stem, language).to_owned(),
                messages.get(Message::StemDescription, stem, language).to_owned(),
            )
        };
        (fr.tian_ge_five_element, fr.tian_ge_five_element_description) = element_texts(tf);
        (fr.di_ge_five_element, fr.di_ge_five_element_description) = element_texts(df);
        (fr.ren_ge_five_element, fr.ren_ge_five_element_description) = element_texts(rf);
        (fr.zong_ge_five_element, fr.zong_ge_five_element_description) = element_texts(zf);
        (fr.wai_ge_five_element, fr.wai_ge_five_element_description) = element_texts(wf);

        // Ten gods relate each grid stem to the person grid; the person
        // grid itself carries none.
        fr.tian_ge_god = ten_god(ten_god_index(rf, tf), messages, language);
        fr.di_ge_god = ten_god(ten_god_index(rf, df), messages, language);
        fr.zong_ge_god = ten_god(ten_god_index(rf, zf), messages, language);
        fr.wai_ge_god = ten_god(ten_god_index(rf, wf), messages, language);

        fr.tian_ge_rule = rule81(rule81_index(fr.tian_ge), messages, language);
        fr.di_ge_rule = rule81(rule81_index(fr.di_ge), messages, language);
        fr.ren_ge_rule = rule81(rule81_index(fr.ren_ge), messages, language);
        fr.zong_ge_rule = rule81(rule81_index(fr.zong_ge), messages, language);
        fr.wai_ge_rule = rule81(rule81_index(fr.wai_ge), messages, language);

        fr.tian_ge_rank = alias(Alias::Rank, fr.tian_ge_rule.rank, language).to_owned();
        fr.di_ge_rank = alias(Alias::Rank, fr.di_ge_rule.rank, language).to_owned();
        fr.ren_ge_rank = alias(Alias::Rank, fr.ren_ge_rule.rank, language).to_owned();
        fr.zong_ge_rank = alias(Alias::Rank, fr.zong_ge_rule.rank, language).to_owned();
        fr.wai_ge_rank = alias(Alias::Rank, fr.wai_ge_rule.rank, language).to_owned();

        // Three-element combination of the heaven/person/earth grids,
        // base-5 encoded.
        let cai = |v: i64| ((v - 1).rem_euclid(10)) / 2;
        let index = cai(fr.tian_ge) * 25 + cai(fr.ren_ge) * 5 + cai(fr.di_ge);
        fr.three_element = three_element(index, messages, language);
        fr.three_element_rank = alias(Alias::Rank, fr.three_element.rank, language).to_owned();

        fr
    }

    /// Weighted composite of the five grid grades plus the three-element
    /// grade, capped at 100.
    pub fn composite_score(&self) -> i64 {
        const SCORES: [f64; 6] = [0.0, 0.0, 25.0, 50.0, 75.0, 100.0];
        let score = |rank: i64| {
            usize::try_from(rank)
                .ok()
                .and_then(|r| SCORES.get(r).copied())
                .unwrap_or(0.0)
        };
        let total = (score(self.ren_ge_rule.rank) * 0.21).ceil()
            + (score(self.zong_ge_rule.rank) * 0.2).ceil()
            + (score(self.tian_ge_rule.rank) * 0.13).ceil()
            + (score(self.di_ge_rule.rank) * 0.13).ceil()
            + (score(self.wai_ge_rule.rank) * 0.13).ceil()
            + (score(self.three_element.rank) * 0.20).ceil();
        (total as i64).min(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name::NameSpec;

    fn name_with_strokes(family: &[i64], given: &[i64]) -> Name {
        let mut name = Name::default();
        name.traditional.family_name = NameSpec {
            strokes: family.to_vec(),
            length: family.len(),
            ..NameSpec::default()
        };
        name.traditional.given_name = NameSpec {
            strokes: given.to_vec(),
            length: given.len(),
            ..NameSpec::default()
        };
        name
    }

    #[test]
    fn double_family_double_given_grid() {
        let store = MessageStore::empty();
        let name = name_with_strokes(&[7, 9], &[11, 13]);
        let fr = FiveRules::compute(&name, &store, Language::Simplified);
        assert_eq!(fr.tian_ge, 16);
        assert_eq!(fr.ren_ge, 20);
        assert_eq!(fr.di_ge, 24);
        assert_eq!(fr.wai_ge, 20);
        assert_eq!(fr.zong_ge, 40);
    }

    #[test]
    fn single_family_single_given_grid() {
        let store = MessageStore::empty();
        let name = name_with_strokes(&[7], &[8]);
        let fr = FiveRules::compute(&name, &store, Language::Simplified);
        assert_eq!(fr.tian_ge, 8);
        assert_eq!(fr.ren_ge, 15);
        assert_eq!(fr.di_ge, 9);
        assert_eq!(fr.wai_ge, 2);
        assert_eq!(fr.zong_ge, 15);
    }

    #[test]
    fn composite_stays_in_range() {
        let store = MessageStore::empty();
        for (family, given) in [
            (vec![7i64, 9], vec![11i64, 13]),
            (vec![3], vec![4]),
            (vec![30], vec![40, 41]),
            (vec![2, 2], vec![]),
        ] {
            let name = name_with_strokes(&family, &given);
            let fr = FiveRules::compute(&name, &store, Language::Simplified);
            let score = fr.composite_score();
            assert!((0..=100).contains(&score), "score {score} out of range");
        }
    }

    #[test]
    fn grid_values_above_81_fold_back() {
        let store = MessageStore::empty();
        let name = name_with_strokes(&[48, 48], &[48, 48]);
        let fr = FiveRules::compute(&name, &store, Language::Simplified);
        assert_eq!(fr.zong_ge, 192);
        // 192 folds to 112, still past the table; the rank degrades to 0.
        assert_eq!(fr.zong_ge_rule.rank, 0);
    }
}
