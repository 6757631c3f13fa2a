//! Cyclic algebra shared by the calendar and naming layers.
//!
//! This crate provides:
//! - The five-element ring (Wood, Fire, Earth, Metal, Water) and its
//!   generative/dominance relation
//! - Heavenly-stem / earthly-branch (ganzhi) pairs, the 60-cycle ordinal,
//!   and the ten-god relation between two stems
//! - Geographic location and small modular helpers
//! - KangXi radical metadata
//!
//! Everything here is pure data and arithmetic with no I/O.

pub mod five_elements;
pub mod ganzhi;
pub mod radicals;

pub use five_elements::{Element, ElementRelation, FiveElementsCount, compare_elements};
pub use ganzhi::{
    BRANCH_COUNT, GanzhiPair, STEM_COUNT, branch, branch_element, branch_yin_yang, stem,
    stem_element, stem_yin_yang, ten_god_index,
};
pub use radicals::{KangxiRadical, radical};

use serde::{Deserialize, Serialize};

/// Geographic location in degrees. East longitude and north latitude are
/// positive.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Modulus where a zero remainder maps to the modulus itself (1-based cyclic
/// counting, used by the stroke grids).
pub fn fix_mod(i: i64, m: i64) -> i64 {
    let r = i % m;
    if r == 0 { m } else { r }
}
