use serde::{Deserialize, Serialize};

/// One of the two players, by registration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    One,
    Two,
}
impl Side {
    pub const BOTH: [Side; 2] = [Side::One, Side::Two];

    pub fn other(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Side::One => 0,
            Side::Two => 1,
        }
    }
}

/// Which kind of play the next point belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Game,
    Tiebreak,
    Finished,
}

/// Per-player counters, indexed by `Side::idx()`.
pub type Tally = [u32; 2];

/// Spoken names for 0..=3 points in a regular game.
pub const POINT_TERMS: [&str; 4] = ["love", "15", "30", "40"];

// Helpers
pub fn point_term(points: u32) -> String {
    match POINT_TERMS.get(points as usize) {
        Some(term) => (*term).to_string(),
        None => points.to_string(),
    }
}

/// Side holding the larger count, None when level.
pub fn leader(tally: Tally) -> Option<Side> {
    match tally[0].cmp(&tally[1]) {
        std::cmp::Ordering::Greater => Some(Side::One),
        std::cmp::Ordering::Less => Some(Side::Two),
        std::cmp::Ordering::Equal => None,
    }
}

/// Leader, if they have reached `target` with at least `margin` to spare.
pub fn decided(tally: Tally, target: u32, margin: u32) -> Option<Side> {
    let side = leader(tally)?;
    let lead = tally[0].abs_diff(tally[1]);
    (tally[side.idx()] >= target && lead >= margin).then_some(side)
}

pub fn format_tally(tally: Tally) -> String {
    format!("{}-{}", tally[0], tally[1])
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
