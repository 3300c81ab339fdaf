//! Price-context classification and the entry scoring matrix.

use serde::{Deserialize, Serialize};

/// How price moved into the entry over the lookback window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BeforeContext {
    PumpedTo,
    RoseTo,
    Flat,
    FellTo,
    DumpedTo,
}

/// How price moved after the entry over the lookforward window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AfterContext {
    Moon,
    Pump,
    Flat,
    Dip,
    Dump,
}

const BIG_MOVE_PCT: f64 = 25.0;
const SMALL_MOVE_PCT: f64 = 10.0;

/// Classify the run-up into an entry from the lookback extremes.
///
/// A side only wins when it is strictly larger than the other; equal moves
/// in both directions read as flat. Zero extremes would divide to NaN, so
/// degenerate windows read as flat as well.
pub fn classify_before(entry_price: f64, before_min: f64, before_max: f64) -> BeforeContext {
    if before_min == 0.0 || before_max == 0.0 {
        return BeforeContext::Flat;
    }

    let rise_to_entry = (entry_price - before_min) / before_min * 100.0;
    let fall_to_entry = (before_max - entry_price) / before_max * 100.0;

    if rise_to_entry > BIG_MOVE_PCT && rise_to_entry > fall_to_entry {
        BeforeContext::PumpedTo
    } else if rise_to_entry > SMALL_MOVE_PCT && rise_to_entry > fall_to_entry {
        BeforeContext::RoseTo
    } else if fall_to_entry > BIG_MOVE_PCT && fall_to_entry > rise_to_entry {
        BeforeContext::DumpedTo
    } else if fall_to_entry > SMALL_MOVE_PCT && fall_to_entry > rise_to_entry {
        BeforeContext::FellTo
    } else {
        BeforeContext::Flat
    }
}

/// Classify what price did after the entry from the lookforward extremes.
pub fn classify_after(entry_price: f64, after_min: f64, after_max: f64) -> AfterContext {
    if entry_price == 0.0 {
        return AfterContext::Flat;
    }

    let pct_up = (after_max - entry_price) / entry_price * 100.0;
    let pct_down = (entry_price - after_min) / entry_price * 100.0;

    if pct_up > BIG_MOVE_PCT && pct_up > pct_down {
        AfterContext::Moon
    } else if pct_up > SMALL_MOVE_PCT && pct_up > pct_down {
        AfterContext::Pump
    } else if pct_down > BIG_MOVE_PCT && pct_down > pct_up {
        AfterContext::Dump
    } else if pct_down > SMALL_MOVE_PCT && pct_down > pct_up {
        AfterContext::Dip
    } else {
        AfterContext::Flat
    }
}

/// Entry quality lookup: rows are the before-context, columns the
/// after-context, both in declaration order. Encodes "buying weakness that
/// recovers is skillful; buying strength that reverses is not". The table is
/// the single source of truth for entry scores.
const SCORE_MATRIX: [[i8; 5]; 5] = [
    // moon  pump  flat  dip  dump
    [0, -1, -1, -2, -2], // pumped_to
    [1, 0, -1, -2, -2],  // rose_to
    [2, 1, 0, -1, -2],   // flat
    [2, 1, 0, -1, -2],   // fell_to
    [2, 1, 0, -1, -2],   // dumped_to
];

/// Look up the entry score for a (before, after) context pair.
pub fn score_pair(before: BeforeContext, after: AfterContext) -> i8 {
    SCORE_MATRIX[before as usize][after as usize]
}
