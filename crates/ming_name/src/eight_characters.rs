//! Eight-characters strength analysis of the four pillars.
//!
//! The day stem is the subject. Ling scores its season (relation to the
//! month branch), Shi its support from the other six characters, Di its
//! rooting in the day branch. Two of the three carried means the subject
//! stretches and likes the element it generates; otherwise it likes the
//! element that generates it.

use serde::Serialize;

use ming_base::{
    Element, ElementRelation, GanzhiPair, branch, branch_element, compare_elements, stem_element,
};
use ming_calendar::GanzhiReport;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EightCharacters {
    pub year: GanzhiPair,
    pub month: GanzhiPair,
    pub day: GanzhiPair,
    pub hour: GanzhiPair,
    pub ling: i64,
    pub shi: i64,
    pub shi_yi: i64,
    pub di: bool,
    /// Element index of the day stem, -1 when invalid.
    pub self_element: i64,
    /// Element index the subject favors.
    pub like: i64,
    pub stretch: bool,
    pub stretch_yi: bool,
}

fn relation(a: Option<Element>, b: Option<Element>) -> Option<ElementRelation> {
    Some(compare_elements(a?, b?))
}

// Day branches rooting each day-stem element.
fn rooted(day_element: Element, day_branch: i64) -> bool {
    let roots: &[i64] = match day_element {
        Element::Wood => &[branch::HAI, branch::YIN, branch::MAO, branch::WEI, branch::CHEN],
        Element::Fire => &[branch::YIN, branch::SI, branch::WU, branch::WEI, branch::XU],
        Element::Earth => &[
            branch::CHEN,
            branch::XU,
            branch::CHOU,
            branch::WEI,
            branch::SI,
            branch::WU,
        ],
        Element::Metal => &[branch::SI, branch::SHEN, branch::YOU, branch::XU, branch::CHOU],
        Element::Water => &[branch::SHEN, branch::HAI, branch::ZI, branch::CHOU, branch::CHEN],
    };
    roots.contains(&day_branch)
}

impl EightCharacters {
    pub fn compute(ganzhi: &GanzhiReport) -> Self {
        let mut ec = EightCharacters {
            year: ganzhi.year,
            month: ganzhi.month,
            day: ganzhi.day,
            hour: ganzhi.hour,
            ..EightCharacters::default()
        };
        let day_element = stem_element(ec.day.stem);

        // Ling: season fit of the day stem against the month branch.
        ec.ling = match relation(day_element, branch_element(ec.month.branch)) {
            Some(ElementRelation::Equal) => 50,
            Some(ElementRelation::Birth) => 40,
            Some(ElementRelation::Birthed) => 30,
            Some(ElementRelation::Kill) => 20,
            Some(ElementRelation::Killed) => 10,
            None => 0,
        };

        // Shi: each supporting character scores +-10; the month branch is
        // held out of ShiYi and folded in for Shi.
        let supports = [
            stem_element(ec.year.stem),
            branch_element(ec.year.branch),
            stem_element(ec.month.stem),
            branch_element(ec.day.branch),
            stem_element(ec.hour.stem),
            branch_element(ec.hour.branch),
        ];
        for support in supports {
            match relation(support, day_element) {
                Some(ElementRelation::Equal) | Some(ElementRelation::Birth) => ec.shi_yi += 10,
                _ => ec.shi_yi -= 10,
            }
        }
        match relation(branch_element(ec.month.branch), day_element) {
            Some(ElementRelation::Equal) | Some(ElementRelation::Birth) => {
                ec.shi = ec.shi_yi + 10;
            }
            _ => ec.shi = ec.shi_yi - 10,
        }

        // Di: rooting of the day stem in the day branch.
        ec.di = day_element.is_some_and(|e| rooted(e, ec.day.branch));

        let mut carried = 0;
        if ec.ling >= 50 {
            carried += 1;
        }
        if ec.shi >= 10 {
            carried += 1;
        }
        if ec.di {
            carried += 1;
        }
        ec.stretch = carried >= 2;
        ec.stretch_yi = ec.ling + ec.shi_yi >= 50;

        ec.self_element = day_element.map(Element::index).unwrap_or(-1);
        let like = if ec.stretch {
            ec.self_element + 2
        } else {
            ec.self_element - 1
        };
        ec.like = like.rem_euclid(5);

        ec
    }
}
