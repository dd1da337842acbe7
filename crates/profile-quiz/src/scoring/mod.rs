//! Answer accumulation and the three score resolvers.

mod accumulator;
mod keys;
pub mod mbti;
pub mod tci;
pub mod values;

pub use accumulator::accumulate;
pub use keys::{RawScores, ScoreKey, ScoreMap, UnknownScoreKey};
pub use mbti::{
    nearest_standard_type, resolve_mbti, AxisDominant, AxisOutcome, MbtiAxis, MbtiLetter,
    MbtiResult, MbtiTypeError, RESTORED_AXIS_PERCENTAGE, TIE_CHAR,
};
pub use tci::{resolve_tci, resolve_tci_with, TciDimension, TciEntry, TciLevel, TciResult};
pub use values::{
    resolve_values, resolve_values_with, PoleScores, ValueDimension, ValueEntry, ValuePole,
    ValueResult,
};
