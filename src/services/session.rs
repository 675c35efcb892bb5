// src/services/session.rs

use crate::{
    error::ServiceError,
    models::{quiz::Quiz, result::{ResultRecord, Submission}},
    services::{ledger::ResultLedger, quiz_store::QuizStore, scoring},
};

/// What a candidate gets back after submitting.
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    pub record: ResultRecord,
    pub total_questions: usize,
}

/// Candidate-facing flow: load a quiz, score the answers, record the result.
#[derive(Clone)]
pub struct QuizSession {
    quizzes: QuizStore,
    ledger: ResultLedger,
}

impl QuizSession {
    pub fn new(quizzes: QuizStore, ledger: ResultLedger) -> Self {
        Self { quizzes, ledger }
    }

    pub async fn start(&self, quiz_name: &str) -> Result<Quiz, ServiceError> {
        self.quizzes.load(quiz_name).await
    }

    pub async fn submit(&self, submission: Submission) -> Result<SessionOutcome, ServiceError> {
        let quiz = self.quizzes.load(&submission.quiz_name).await?;
        let card = scoring::score(&quiz.questions, &submission.answers)?;

        let record = ResultRecord::new(
            submission.name,
            submission.email,
            submission.quiz_name,
            card.score,
        );
        self.ledger.append(record.clone()).await?;

        Ok(SessionOutcome {
            record,
            total_questions: card.total_questions,
        })
    }
}
