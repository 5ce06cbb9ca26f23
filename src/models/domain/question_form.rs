use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::{Misconceptions, ProblemAnalysis};

pub const DEFAULT_OPTION_LETTERS: [&str; 4] = ["A", "B", "C", "D"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    MultipleChoice,
    Equation,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnswerOption {
    pub letter: String,
    pub text: String,
}

/// One question's authoring state: metadata, answer options, and the
/// AI-drafted or hand-edited analysis fields. Values are immutable; every
/// edit goes through a `with_*` transition that returns the updated copy, so
/// a caller can keep its prior value when a later step fails.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionForm {
    pub id: String,
    pub question_number: u32,
    pub question_type: QuestionType,
    pub prompt: String,
    pub options: Vec<AnswerOption>,
    pub correct_answer: Option<String>,
    pub explanation: String,
    pub misconceptions: Misconceptions,
    pub teks_standard: String,
    pub feedback: String,
}

impl QuestionForm {
    pub fn new_draft(question_number: u32, question_type: QuestionType) -> Self {
        let options = match question_type {
            QuestionType::MultipleChoice => DEFAULT_OPTION_LETTERS
                .iter()
                .map(|letter| AnswerOption {
                    letter: (*letter).to_string(),
                    text: String::new(),
                })
                .collect(),
            QuestionType::Equation => Vec::new(),
        };

        Self {
            id: Uuid::new_v4().to_string(),
            question_number,
            question_type,
            prompt: String::new(),
            options,
            correct_answer: None,
            explanation: String::new(),
            misconceptions: Misconceptions::default(),
            teks_standard: String::new(),
            feedback: String::new(),
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_options(mut self, options: Vec<AnswerOption>) -> Self {
        self.options = options;
        self
    }

    pub fn with_option_text(mut self, letter: &str, text: impl Into<String>) -> Self {
        if let Some(option) = self
            .options
            .iter_mut()
            .find(|option| option.letter.eq_ignore_ascii_case(letter))
        {
            option.text = text.into();
        }
        self
    }

    pub fn with_correct_answer(mut self, correct_answer: Option<String>) -> Self {
        self.correct_answer = correct_answer
            .map(|answer| answer.trim().to_string())
            .filter(|answer| !answer.is_empty());
        self
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = explanation.into();
        self
    }

    pub fn with_misconception(mut self, index: usize, text: impl Into<String>) -> Self {
        self.misconceptions = self.misconceptions.with_slot(index, text);
        self
    }

    pub fn with_teks_standard(mut self, teks_standard: impl Into<String>) -> Self {
        self.teks_standard = teks_standard.into();
        self
    }

    pub fn with_feedback(mut self, feedback: impl Into<String>) -> Self {
        self.feedback = feedback.into();
        self
    }

    /// Merges a fresh analysis into the form. The correct answer is kept
    /// when the analysis could not determine one.
    pub fn apply_analysis(mut self, analysis: &ProblemAnalysis) -> Self {
        if analysis.correct_answer.is_some() {
            self.correct_answer = analysis.correct_answer.clone();
        }
        self.explanation = analysis.explanation.clone();
        self.misconceptions = analysis.misconceptions.clone();
        self
    }

    /// The feedback snippet's content: the author's own text when present,
    /// otherwise a default that names the TEKS standard verbatim.
    pub fn feedback_text(&self) -> String {
        if !self.feedback.trim().is_empty() {
            return self.feedback.clone();
        }
        if self.teks_standard.trim().is_empty() {
            "Great work! You answered this one correctly.".to_string()
        } else {
            format!("Great work! This problem covers {}.", self.teks_standard)
        }
    }
}
