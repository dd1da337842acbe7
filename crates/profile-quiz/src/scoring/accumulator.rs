use super::keys::RawScores;
use crate::questions::Answer;

/// Fold a full answer list into raw scores.
///
/// Pure summation: every key starts at zero and answer order has no effect. De-duplicating
/// answers per question is the session's job, not this function's.
pub fn accumulate(answers: &[Answer]) -> RawScores {
    answers.iter().fold(RawScores::zeroed(), |mut scores, answer| {
        for (key, points) in &answer.score_map {
            scores.add(*key, *points);
        }
        scores
    })
}
