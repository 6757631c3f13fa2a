//! Heavenly-stem / earthly-branch pairs and the sexagenary cycle.
//!
//! Stems (gan) run Jia..Gui as indices 0..10, branches (zhi) run Zi..Hai as
//! indices 0..12. A pair is valid only when stem and branch share parity;
//! valid pairs enumerate the 60-cycle. An invalid pair degrades to ordinal
//! -1 and displays as "_" rather than erroring.

use serde::{Deserialize, Serialize};

use crate::five_elements::{Element, ElementRelation, compare_elements};

pub const STEM_COUNT: i64 = 10;
pub const BRANCH_COUNT: i64 = 12;

/// Stem indices.
pub mod stem {
    pub const JIA: i64 = 0;
    pub const YI: i64 = 1;
    pub const BING: i64 = 2;
    pub const DING: i64 = 3;
    pub const WU: i64 = 4;
    pub const JI: i64 = 5;
    pub const GENG: i64 = 6;
    pub const XIN: i64 = 7;
    pub const REN: i64 = 8;
    pub const GUI: i64 = 9;
}

/// Branch indices.
pub mod branch {
    pub const ZI: i64 = 0;
    pub const CHOU: i64 = 1;
    pub const YIN: i64 = 2;
    pub const MAO: i64 = 3;
    pub const CHEN: i64 = 4;
    pub const SI: i64 = 5;
    pub const WU: i64 = 6;
    pub const WEI: i64 = 7;
    pub const SHEN: i64 = 8;
    pub const YOU: i64 = 9;
    pub const XU: i64 = 10;
    pub const HAI: i64 = 11;
}

/// Five element of a stem: pairs of consecutive stems share an element.
pub fn stem_element(stem: i64) -> Option<Element> {
    if (0..STEM_COUNT).contains(&stem) {
        Some(Element::from_index(stem / 2))
    } else {
        None
    }
}

/// Five element of a branch, per the fixed table.
pub fn branch_element(branch: i64) -> Option<Element> {
    match branch {
        branch::YIN | branch::MAO => Some(Element::Wood),
        branch::SI | branch::WU => Some(Element::Fire),
        branch::CHEN | branch::XU | branch::CHOU | branch::WEI => Some(Element::Earth),
        branch::SHEN | branch::YOU => Some(Element::Metal),
        branch::HAI | branch::ZI => Some(Element::Water),
        _ => None,
    }
}

/// Yang for even stem indices, yin for odd.
pub fn stem_yin_yang(stem: i64) -> i64 {
    stem.rem_euclid(2)
}

/// Yang for even branch indices, yin for odd.
pub fn branch_yin_yang(branch: i64) -> i64 {
    branch.rem_euclid(2)
}

/// One stem/branch pair assigned to a calendar unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GanzhiPair {
    pub stem: i64,
    pub branch: i64,
}

impl GanzhiPair {
    pub fn new(stem: i64, branch: i64) -> Self {
        Self { stem, branch }
    }

    /// Decode a 60-cycle ordinal back into its pair.
    pub fn from_value(v: i64) -> Self {
        Self {
            stem: v.rem_euclid(STEM_COUNT),
            branch: v.rem_euclid(BRANCH_COUNT),
        }
    }

    /// Both indices in range and of matching parity. Stems and branches
    /// interleave through the 60-cycle, never arbitrarily paired.
    pub fn is_valid(&self) -> bool {
        (0..STEM_COUNT).contains(&self.stem)
            && (0..BRANCH_COUNT).contains(&self.branch)
            && self.stem % 2 == self.branch % 2
    }

    /// Ordinal in [0,60): the unique v with v = branch (mod 12) and
    /// v = stem (mod 10). Invalid pairs degrade to -1.
    pub fn value(&self) -> i64 {
        if !self.is_valid() {
            return -1;
        }
        let mut v = self.branch;
        while v < 60 {
            if v % STEM_COUNT == self.stem {
                return v;
            }
            v += BRANCH_COUNT;
        }
        -1
    }
}

/// Ten-god index between two stems, in [0,10).
///
/// The base offset comes from the relation of the self stem's element against
/// the other stem's element; differing polarity shifts the index by one.
/// Out-of-range stems degrade to 0.
pub fn ten_god_index(self_stem: i64, other_stem: i64) -> i64 {
    let (Some(self_elem), Some(other_elem)) = (stem_element(self_stem), stem_element(other_stem))
    else {
        return 0;
    };
    let diff = if stem_yin_yang(self_stem) != stem_yin_yang(other_stem) {
        1
    } else {
        0
    };
    let base = match compare_elements(self_elem, other_elem) {
        ElementRelation::Equal => 0,
        ElementRelation::Kill => 4,
        ElementRelation::Killed => 6,
        ElementRelation::Birth => 2,
        ElementRelation::Birthed => 8,
    };
    base + diff
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn valid_pairs_enumerate_the_sixty_cycle() {
        let mut seen = HashSet::new();
        for s in 0..STEM_COUNT {
            for b in 0..BRANCH_COUNT {
                let pair = GanzhiPair::new(s, b);
                let v = pair.value();
                if s % 2 == b % 2 {
                    assert!((0..60).contains(&v), "pair ({s},{b}) gave {v}");
                    assert!(seen.insert(v), "ordinal {v} duplicated");
                    assert_eq!(GanzhiPair::from_value(v), pair);
                } else {
                    assert_eq!(v, -1, "parity mismatch ({s},{b}) must degrade");
                }
            }
        }
        assert_eq!(seen.len(), 60);
    }

    #[test]
    fn out_of_range_pairs_are_invalid() {
        assert_eq!(GanzhiPair::new(10, 0).value(), -1);
        assert_eq!(GanzhiPair::new(0, 12).value(), -1);
        assert_eq!(GanzhiPair::new(-1, -1).value(), -1);
    }

    #[test]
    fn known_cycle_ordinals() {
        // JiaZi opens the cycle, GuiHai closes it.
        assert_eq!(GanzhiPair::new(stem::JIA, branch::ZI).value(), 0);
        assert_eq!(GanzhiPair::new(stem::YI, branch::CHOU).value(), 1);
        assert_eq!(GanzhiPair::new(stem::GUI, branch::HAI).value(), 59);
        // JiaXu starts the second decade.
        assert_eq!(GanzhiPair::new(stem::JIA, branch::XU).value(), 10);
    }

    #[test]
    fn stem_and_branch_elements() {
        assert_eq!(stem_element(stem::JIA), Some(Element::Wood));
        assert_eq!(stem_element(stem::DING), Some(Element::Fire));
        assert_eq!(stem_element(stem::GUI), Some(Element::Water));
        assert_eq!(stem_element(10), None);
        assert_eq!(branch_element(branch::YIN), Some(Element::Wood));
        assert_eq!(branch_element(branch::CHOU), Some(Element::Earth));
        assert_eq!(branch_element(branch::YOU), Some(Element::Metal));
        assert_eq!(branch_element(branch::ZI), Some(Element::Water));
        assert_eq!(branch_element(12), None);
    }

    #[test]
    fn ten_god_index_table() {
        // Same stem: BiJian (0).
        assert_eq!(ten_god_index(stem::JIA, stem::JIA), 0);
        // Same element, differing polarity: JieCai (1).
        assert_eq!(ten_god_index(stem::JIA, stem::YI), 1);
        // Jia (wood) against Geng (metal): metal dominates wood, the self
        // element is killed by the other -> officer gods, base 6.
        assert_eq!(ten_god_index(stem::JIA, stem::GENG), 6);
        assert_eq!(ten_god_index(stem::JIA, stem::XIN), 7);
        // Jia against Wu (earth): wood dominates earth -> wealth gods, base 4.
        assert_eq!(ten_god_index(stem::JIA, stem::WU), 4);
        assert_eq!(ten_god_index(stem::JIA, stem::JI), 5);
        // Jia against Bing (fire): wood generates fire -> base 2.
        assert_eq!(ten_god_index(stem::JIA, stem::BING), 2);
        assert_eq!(ten_god_index(stem::JIA, stem::DING), 3);
        // Jia against Ren (water): water generates wood -> base 8.
        assert_eq!(ten_god_index(stem::JIA, stem::REN), 8);
        assert_eq!(ten_god_index(stem::JIA, stem::GUI), 9);
    }

    #[test]
    fn ten_god_index_always_in_range() {
        for s in 0..STEM_COUNT {
            for o in 0..STEM_COUNT {
                let i = ten_god_index(s, o);
                assert!((0..10).contains(&i));
            }
        }
    }
}
