//! The five-element ring and its generative/dominance relation.
//!
//! The elements form a directed cycle Wood -> Fire -> Earth -> Metal ->
//! Water -> Wood in which each element generates its successor and dominates
//! the element two steps ahead. Every scoring rule downstream consumes the
//! relation computed here, so the index mapping is fixed.

use serde::{Deserialize, Serialize};

/// One of the five elements, in generative cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Wood = 0,
    Fire = 1,
    Earth = 2,
    Metal = 3,
    Water = 4,
}

impl Element {
    /// All five elements in cycle order.
    pub const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    /// Element from its cycle index, wrapping modulo 5.
    pub fn from_index(index: i64) -> Element {
        Self::ALL[index.rem_euclid(5) as usize]
    }

    pub fn index(self) -> i64 {
        self as i64
    }

    pub fn name(self) -> &'static str {
        match self {
            Element::Wood => "wood",
            Element::Fire => "fire",
            Element::Earth => "earth",
            Element::Metal => "metal",
            Element::Water => "water",
        }
    }
}

/// Relation of one element against another on the ring.
///
/// For `compare_elements(a, b)` with `d = (a - b) mod 5`:
/// d=0 Equal, d=1 Birthed (b generates a), d=2 Killed (b dominates a),
/// d=3 Kill (a dominates b), d=4 Birth (a generates b).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementRelation {
    Equal,
    Birthed,
    Killed,
    Kill,
    Birth,
}

/// Relation of `a` against `b`. The mapping is asymmetric; see
/// [`ElementRelation`].
pub fn compare_elements(a: Element, b: Element) -> ElementRelation {
    match (a.index() - b.index()).rem_euclid(5) {
        0 => ElementRelation::Equal,
        1 => ElementRelation::Birthed,
        2 => ElementRelation::Killed,
        3 => ElementRelation::Kill,
        _ => ElementRelation::Birth,
    }
}

/// Non-negative tally of elements, used for stem/branch statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FiveElementsCount {
    pub wood: u32,
    pub fire: u32,
    pub earth: u32,
    pub metal: u32,
    pub water: u32,
}

impl FiveElementsCount {
    /// Increment the tally for one element.
    pub fn add(&mut self, element: Element) {
        match element {
            Element::Wood => self.wood += 1,
            Element::Fire => self.fire += 1,
            Element::Earth => self.earth += 1,
            Element::Metal => self.metal += 1,
            Element::Water => self.water += 1,
        }
    }

    /// Element-wise sum of two tallies.
    pub fn sum(&self, other: &FiveElementsCount) -> FiveElementsCount {
        FiveElementsCount {
            wood: self.wood + other.wood,
            fire: self.fire + other.fire,
            earth: self.earth + other.earth,
            metal: self.metal + other.metal,
            water: self.water + other.water,
        }
    }
}
