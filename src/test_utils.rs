use crate::models::domain::{ProblemAnalysis, QuestionForm, QuestionType};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// Creates a fully analyzed multiple-choice analysis
    pub fn test_analysis() -> ProblemAnalysis {
        ProblemAnalysis::new(
            Some("B".to_string()),
            "Subtract 4 from both sides, then divide both sides by 2.",
            vec![
                "Added 4 to both sides instead of subtracting.".to_string(),
                "Divided by 2 before moving the constant.".to_string(),
                "Dropped the negative sign while isolating x.".to_string(),
            ],
        )
    }

    /// Creates a filled-in multiple-choice question form
    pub fn test_question_form() -> QuestionForm {
        QuestionForm::new_draft(1, QuestionType::MultipleChoice)
            .with_prompt("Solve 2x + 4 = 10")
            .with_option_text("A", "x = 7")
            .with_option_text("B", "x = 3")
            .with_option_text("C", "x = -3")
            .with_option_text("D", "x = 5")
            .with_teks_standard("A.5(A)")
            .apply_analysis(&test_analysis())
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_test_analysis() {
        let analysis = test_analysis();
        assert_eq!(analysis.correct_answer.as_deref(), Some("B"));
        assert!(analysis.misconceptions.iter().all(|m| !m.is_empty()));
    }

    #[test]
    fn test_fixtures_test_question_form() {
        let form = test_question_form();
        assert_eq!(form.options.len(), 4);
        assert_eq!(form.correct_answer.as_deref(), Some("B"));
        assert_eq!(form.options[1].text, "x = 3");
    }
}
