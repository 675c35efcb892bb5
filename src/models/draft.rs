// src/models/draft.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::quiz::{Question, Quiz, validate_quiz_name};

/// A quiz under construction. The authoring client holds the draft and sends
/// it back with every step; the server keeps no copy between requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct QuizDraft {
    #[validate(custom(function = validate_quiz_name))]
    pub quiz_name: String,

    #[serde(default)]
    pub questions: Vec<Question>,
}

impl QuizDraft {
    pub fn new(quiz_name: impl Into<String>) -> Self {
        Self {
            quiz_name: quiz_name.into(),
            questions: Vec::new(),
        }
    }

    pub fn with_question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }

    pub fn into_quiz(self) -> Quiz {
        Quiz::new(self.quiz_name, self.questions)
    }
}

/// DTO for opening a new draft.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDraftRequest {
    #[validate(custom(function = validate_quiz_name))]
    pub quiz_name: String,
}

/// DTO for appending one question to a draft.
#[derive(Debug, Deserialize, Validate)]
pub struct AddQuestionRequest {
    #[validate(nested)]
    pub draft: QuizDraft,
    #[validate(nested)]
    pub question: Question,
}
