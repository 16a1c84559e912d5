//! Code comparison command
//!
//! Scores one code against another, the same way the tree builder does.

use crate::core::{CodeError, CodeSpace, Score};

/// Result of scoring two codes
pub struct ScoreResult {
    pub first: String,
    pub second: String,
    pub score: Score,
}

/// Parse two codes and score them
///
/// # Errors
/// Returns `CodeError` if either code is not valid for the space.
pub fn score_codes(space: &CodeSpace, first: &str, second: &str) -> Result<ScoreResult, CodeError> {
    let a = space.parse(first)?;
    let b = space.parse(second)?;

    Ok(ScoreResult {
        first: space.render(a),
        second: space.render(b),
        score: Score::calculate(space, a, b),
    })
}
