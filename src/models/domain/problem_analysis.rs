use serde::{Deserialize, Serialize};

/// The misconception texts for the three fixed distractor slots. The snippet
/// renderer emits exactly three misconception snippets, so the arity lives in
/// the type rather than in a convention on a growable list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Misconceptions([String; 3]);

impl Misconceptions {
    pub const SLOT_COUNT: usize = 3;

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_array(&self) -> &[String; 3] {
        &self.0
    }

    /// Returns a copy with the given slot replaced. Out-of-range indices are
    /// ignored; there are only ever three slots.
    pub fn with_slot(mut self, index: usize, text: impl Into<String>) -> Self {
        if let Some(slot) = self.0.get_mut(index) {
            *slot = text.into();
        }
        self
    }
}

impl FromIterator<String> for Misconceptions {
    /// Pads with empty strings when fewer than three items are supplied and
    /// drops anything past the third.
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut slots: [String; 3] = std::array::from_fn(|_| String::new());
        for (slot, item) in slots.iter_mut().zip(iter) {
            *slot = item;
        }
        Self(slots)
    }
}

impl From<Vec<String>> for Misconceptions {
    fn from(items: Vec<String>) -> Self {
        items.into_iter().collect()
    }
}

/// Canonical result of analyzing one problem: the correct answer (a single
/// letter for multiple-choice, free-form text for equation questions), a prose
/// solution walkthrough, and one misconception per distractor slot.
///
/// Serializes with the same camelCase field names the model is instructed to
/// emit, so a serialized record parses back through the structured tier of the
/// normalizer unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemAnalysis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub misconceptions: Misconceptions,
}

impl ProblemAnalysis {
    pub fn new(
        correct_answer: Option<String>,
        explanation: impl Into<String>,
        misconceptions: impl IntoIterator<Item = String>,
    ) -> Self {
        let correct_answer = correct_answer
            .map(|answer| answer.trim().to_string())
            .filter(|answer| !answer.is_empty());

        Self {
            correct_answer,
            explanation: explanation.into(),
            misconceptions: misconceptions.into_iter().collect(),
        }
    }
}
