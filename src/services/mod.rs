// src/services/mod.rs

//! The quiz/result pipeline: quiz documents in, scored results and
//! shortlists out. Handlers stay thin and delegate here.

pub mod csv_table;
pub mod ledger;
pub mod quiz_store;
pub mod scoring;
pub mod session;
pub mod shortlist;

pub use ledger::ResultLedger;
pub use quiz_store::QuizStore;
pub use session::QuizSession;
pub use shortlist::ShortlistDeriver;
