pub mod problem_analysis;
pub mod question_form;
pub mod snippet;
pub use problem_analysis::{Misconceptions, ProblemAnalysis};
pub use question_form::{AnswerOption, QuestionForm, QuestionType};
pub use snippet::Snippet;
