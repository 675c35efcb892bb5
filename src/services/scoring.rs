// src/services/scoring.rs

use std::collections::HashMap;

use crate::{error::ServiceError, models::quiz::Question};

/// Outcome of scoring one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreCard {
    pub score: u64,
    pub total_questions: usize,
}

/// Resolves an answer key to a question index. Accepts `"3"` and the
/// form-field style `"q3"`.
fn question_index(key: &str, question_count: usize) -> Option<usize> {
    let digits = key.strip_prefix('q').unwrap_or(key);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<usize>().ok().filter(|&i| i < question_count)
}

/// Counts the answers that match their question's correct answer.
///
/// Keys that are not a non-negative integer, or that point past the last
/// question, contribute nothing. If answers were given but not a single key
/// resolves, the submission is rejected rather than scored as zero.
pub fn score(
    questions: &[Question],
    answers: &HashMap<String, String>,
) -> Result<ScoreCard, ServiceError> {
    let mut resolved = 0usize;
    // Several keys ("0", "00", "q0") can name the same question; it counts once.
    let mut matched = vec![false; questions.len()];

    for (key, chosen) in answers {
        let Some(index) = question_index(key, questions.len()) else {
            tracing::debug!(key = %key, "ignoring unresolvable answer key");
            continue;
        };
        resolved += 1;
        // Strict string matching
        if questions[index].answer == *chosen {
            matched[index] = true;
        }
    }

    if !answers.is_empty() && resolved == 0 {
        let mut keys: Vec<&str> = answers.keys().map(String::as_str).collect();
        keys.sort_unstable();
        return Err(ServiceError::InvalidSubmission(format!(
            "no answer key refers to a question of this quiz: {:?}",
            keys
        )));
    }

    Ok(ScoreCard {
        score: matched.iter().filter(|&&hit| hit).count() as u64,
        total_questions: questions.len(),
    })
}
