// src/models/quiz.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Number of options every authored question carries.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// A named, ordered list of questions.
/// Stored as `<quizzes_prefix>/<quiz_name>.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    #[serde(default)]
    pub quiz_name: String,

    #[serde(default)]
    pub questions: Vec<Question>,
}

/// A single multiple-choice question.
///
/// `answer` is expected to be one of `options` but this is not checked;
/// a question with a foreign answer just never scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Question {
    #[validate(length(min = 1, max = 1000))]
    pub question: String,

    #[validate(custom(function = validate_options))]
    pub options: Vec<String>,

    #[validate(length(min = 1, max = 500))]
    pub answer: String,
}

/// DTO for sending a question to a candidate (excludes the answer).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicQuestion {
    /// Position in the quiz; candidates submit answers keyed by it.
    pub index: usize,
    pub question: String,
    pub options: Vec<String>,
}

impl Quiz {
    pub fn new(quiz_name: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            quiz_name: quiz_name.into(),
            questions,
        }
    }

    pub fn public_questions(&self) -> Vec<PublicQuestion> {
        self.questions
            .iter()
            .enumerate()
            .map(|(index, q)| PublicQuestion {
                index,
                question: q.question.clone(),
                options: q.options.clone(),
            })
            .collect()
    }
}

/// DTO for saving a quiz (usually the contents of a finished draft).
#[derive(Debug, Deserialize, Validate)]
pub struct SaveQuizRequest {
    #[validate(custom(function = validate_quiz_name))]
    pub quiz_name: String,
    #[validate(length(min = 1, message = "A quiz needs at least one question."))]
    pub questions: Vec<Question>,
}

fn validate_options(options: &[String]) -> Result<(), validator::ValidationError> {
    if options.len() != OPTIONS_PER_QUESTION {
        return Err(validator::ValidationError::new("options_must_have_four_entries"));
    }
    for opt in options {
        if opt.is_empty() {
            return Err(validator::ValidationError::new("option_cannot_be_empty"));
        }
        if opt.len() > 500 {
            return Err(validator::ValidationError::new("option_too_long"));
        }
    }
    Ok(())
}

/// Quiz names become blob keys, so path separators and dot segments are out.
pub fn validate_quiz_name(name: &str) -> Result<(), validator::ValidationError> {
    if name.is_empty() || name.len() > 100 {
        return Err(validator::ValidationError::new("quiz_name_length"));
    }
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(validator::ValidationError::new("quiz_name_invalid_characters"));
    }
    Ok(())
}
