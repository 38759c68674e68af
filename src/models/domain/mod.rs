pub mod quiz;
pub mod quiz_attempt;
pub mod quiz_question;
pub mod session_state;
pub use quiz::{Difficulty, QuestionSet, QuizParameters};
pub use quiz_attempt::{OutcomeStatus, QuestionOutcome, QuizAttempt, ScoringResult};
pub use quiz_question::Question;
pub use session_state::{ActiveQuiz, SessionState};
