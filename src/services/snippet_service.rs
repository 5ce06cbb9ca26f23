use crate::models::domain::{Misconceptions, QuestionForm, QuestionType, Snippet};

/// Renders the fixed snippet set for one question: feedback, answer button,
/// explanation, and the three misconception slots, each a two-line
/// computational-layer script keyed by `q<N>_<slot>`.
pub fn render_snippets(form: &QuestionForm) -> Vec<Snippet> {
    let number = form.question_number;
    let component = answer_component(form);
    let submitted = format!("{}.submitted", component);
    let correct_index = form
        .correct_answer
        .as_deref()
        .and_then(option_index);

    let mut snippets = Vec::with_capacity(3 + Misconceptions::SLOT_COUNT);

    snippets.push(snippet(
        format!("q{}_feedback", number),
        &submitted,
        &form.feedback_text(),
    ));

    let answer_button_expr = match (form.question_type, correct_index) {
        (QuestionType::MultipleChoice, Some(correct)) => format!(
            "{} and not({}.isSelected({}))",
            submitted, component, correct
        ),
        _ => submitted.clone(),
    };
    snippets.push(snippet(
        format!("q{}_answer_button", number),
        &answer_button_expr,
        &answer_button_label(form),
    ));

    snippets.push(snippet(
        format!("q{}_explanation", number),
        &submitted,
        &form.explanation,
    ));

    let distractors = distractor_indices(form.options.len(), correct_index);
    for slot in 0..Misconceptions::SLOT_COUNT {
        let expr = match (form.question_type, distractors.get(slot)) {
            (QuestionType::MultipleChoice, Some(distractor)) => format!(
                "{} and {}.isSelected({})",
                submitted, component, distractor
            ),
            _ => submitted.clone(),
        };
        snippets.push(snippet(
            format!("q{}_misconception{}", number, slot + 1),
            &expr,
            form.misconceptions.get(slot).unwrap_or_default(),
        ));
    }

    snippets
}

/// Escapes interpolated text for a double-quoted script string literal.
pub fn escape_content(text: &str) -> String {
    text.replace('"', "\\\"")
}

fn snippet(key: String, visibility_expr: &str, content: &str) -> Snippet {
    let script = format!(
        "hidden: when {} false otherwise true\ncontent: \"{}\"",
        visibility_expr,
        escape_content(content)
    );
    Snippet::new(key, script)
}

fn answer_component(form: &QuestionForm) -> String {
    match form.question_type {
        QuestionType::MultipleChoice => format!("q{}_choice", form.question_number),
        QuestionType::Equation => format!("q{}_input", form.question_number),
    }
}

fn answer_button_label(form: &QuestionForm) -> String {
    match form.correct_answer.as_deref() {
        Some(answer) => format!("Show Answer: {}", answer),
        None => "Show Answer".to_string(),
    }
}

/// 1-based option index for a choice letter, A through J.
fn option_index(letter: &str) -> Option<usize> {
    let mut chars = letter.trim().chars();
    let first = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    let upper = first.to_ascii_uppercase();
    ('A'..='J')
        .contains(&upper)
        .then(|| (upper as usize) - ('A' as usize) + 1)
}

/// The option indices feeding the three misconception slots: every option
/// except the correct one, in position order. An unknown correct answer is
/// treated as the first option.
fn distractor_indices(option_count: usize, correct_index: Option<usize>) -> Vec<usize> {
    let correct = correct_index.unwrap_or(1);
    (1..=option_count)
        .filter(|index| *index != correct)
        .take(Misconceptions::SLOT_COUNT)
        .collect()
}
