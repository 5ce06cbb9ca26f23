use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::models::domain::{Misconceptions, ProblemAnalysis};

static CORRECT_ANSWER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)correct\s+answer(?:\s+is)?\s*[:\-*_]*\s*\(?([A-Za-z])\b")
        .expect("correct answer pattern is a valid regex")
});
static HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s{0,3}#{1,6}\s+(.*)$").expect("heading pattern is a valid regex")
});
static NUMBERED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s{0,3}\d{1,2}[.)]\s+(.*)$").expect("numbered item pattern is a valid regex")
});
static BULLET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s{0,3}[*•-]\s+(.*)$").expect("bullet item pattern is a valid regex")
});
static EXPLANATION_HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)explanation|solution|solving|steps")
        .expect("explanation heading pattern is a valid regex")
});
static NON_EXPLANATION_HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)answer|correct|misconception|mistake|error")
        .expect("non-explanation heading pattern is a valid regex")
});
static MISCONCEPTION_HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)misconception|mistake|error|confusion")
        .expect("misconception heading pattern is a valid regex")
});
static MISCONCEPTION_RUN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:misconception|mistake|error|students\s+might)[^\n]*(?:\n[^\n]+)*")
        .expect("misconception run pattern is a valid regex")
});

/// Shortest explanation body accepted by the headingless fallback. Shorter
/// sections are usually a bare answer line, not a walkthrough.
const EXPLANATION_FALLBACK_MIN_LEN: usize = 100;
/// Shortest paragraph accepted as a misconception when a misconceptions
/// section carries prose instead of a list.
const MISCONCEPTION_PARAGRAPH_MIN_LEN: usize = 50;

/// Outcome of the structured-first parse. The free-text heuristics only ever
/// see the `Freeform` variant.
enum ParsedReply<'a> {
    Structured(StructuredReply),
    Freeform(&'a str),
}

/// The reply shape the prompts ask for. Every key is optional because the
/// model is not guaranteed to honor the instructions.
#[derive(Debug, Deserialize)]
struct StructuredReply {
    #[serde(default, rename = "correctAnswer", alias = "correct_answer")]
    correct_answer: Option<String>,
    #[serde(default)]
    explanation: Option<String>,
    #[serde(default)]
    misconceptions: Option<Vec<String>>,
}

struct Section {
    heading: String,
    body: String,
}

/// Coerces whatever the model returned into a `ProblemAnalysis`. Never
/// fails: a structured JSON reply is used directly, anything else goes
/// through section-mining heuristics that produce a best-effort record.
pub fn normalize(raw: &str) -> ProblemAnalysis {
    match parse_structured(raw) {
        ParsedReply::Structured(reply) => ProblemAnalysis::new(
            reply.correct_answer,
            reply.explanation.unwrap_or_default(),
            reply.misconceptions.unwrap_or_default(),
        ),
        ParsedReply::Freeform(text) => {
            let sections = split_sections(text);
            ProblemAnalysis::new(
                extract_correct_letter(text),
                extract_explanation(&sections),
                extract_misconceptions(&sections, text),
            )
        }
    }
}

fn parse_structured(raw: &str) -> ParsedReply<'_> {
    match serde_json::from_str::<StructuredReply>(strip_code_fence(raw)) {
        Ok(reply) => ParsedReply::Structured(reply),
        Err(_) => ParsedReply::Freeform(raw),
    }
}

/// Unwraps a reply that is nothing but one fenced code block. JSON-mode
/// output still arrives fenced from some models.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(newline) = rest.find('\n') else {
        return trimmed;
    };
    let inner = &rest[newline + 1..];
    match inner.rfind("```") {
        Some(end) => inner[..end].trim(),
        None => trimmed,
    }
}

/// Splits the reply into heading-led sections. Markdown headings win when
/// the reply has any; otherwise numbered label lines ("1. Explanation: ...")
/// act as section markers, so numbered items under a real heading stay
/// inside that heading's section. Text before the first marker becomes a
/// headingless leading section.
fn split_sections(text: &str) -> Vec<Section> {
    let use_headings = text.lines().any(|line| HEADING_RE.is_match(line));
    let marker: &Regex = if use_headings { &HEADING_RE } else { &NUMBERED_RE };

    let mut sections = vec![Section {
        heading: String::new(),
        body: String::new(),
    }];

    for line in text.lines() {
        match marker.captures(line) {
            Some(caps) => sections.push(Section {
                heading: caps[1].trim().to_string(),
                body: String::new(),
            }),
            None => {
                if let Some(section) = sections.last_mut() {
                    section.body.push_str(line);
                    section.body.push('\n');
                }
            }
        }
    }

    sections
}

fn extract_correct_letter(text: &str) -> Option<String> {
    CORRECT_ANSWER_RE
        .captures(text)
        .map(|caps| caps[1].to_ascii_uppercase())
}

fn extract_explanation(sections: &[Section]) -> String {
    for section in sections {
        if !section.heading.is_empty() && EXPLANATION_HEADING_RE.is_match(&section.heading) {
            return join_heading_remainder(&section.heading, &section.body);
        }
    }

    // No explanation-like heading: take the first substantial section that
    // is not the answer or misconceptions block.
    for section in sections {
        let body = section.body.trim();
        if body.len() > EXPLANATION_FALLBACK_MIN_LEN
            && !NON_EXPLANATION_HEADING_RE.is_match(&section.heading)
        {
            return body.to_string();
        }
    }

    String::new()
}

/// A numbered label line often carries content after its colon
/// ("2. Explanation: Subtract 4 first..."); keep that remainder ahead of the
/// section body.
fn join_heading_remainder(heading: &str, body: &str) -> String {
    let remainder = heading
        .splitn(2, ':')
        .nth(1)
        .map(str::trim)
        .unwrap_or_default();
    let body = body.trim();

    if remainder.is_empty() {
        body.to_string()
    } else if body.is_empty() {
        remainder.to_string()
    } else {
        format!("{}\n{}", remainder, body)
    }
}

fn extract_misconceptions(sections: &[Section], text: &str) -> Vec<String> {
    let section = sections
        .iter()
        .find(|section| MISCONCEPTION_HEADING_RE.is_match(&section.heading));

    if let Some(section) = section {
        let items = split_list_items(&section.body);
        if !items.is_empty() {
            return items;
        }

        let paragraphs = split_long_paragraphs(&section.body);
        if !paragraphs.is_empty() {
            return paragraphs;
        }
    }

    scan_misconception_runs(text)
}

/// Splits a misconceptions section body on list-item markers. Everything
/// before the first marker is the heading segment and is dropped;
/// continuation lines are folded into the item they follow.
fn split_list_items(body: &str) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();

    for line in body.lines() {
        let item_start = NUMBERED_RE
            .captures(line)
            .or_else(|| BULLET_RE.captures(line))
            .map(|caps| caps[1].trim().to_string());

        match item_start {
            Some(text) => items.push(text),
            None => {
                if let Some(current) = items.last_mut() {
                    let continuation = line.trim();
                    if !continuation.is_empty() {
                        current.push(' ');
                        current.push_str(continuation);
                    }
                }
            }
        }
    }

    items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

fn split_long_paragraphs(body: &str) -> Vec<String> {
    body.split("\n\n")
        .map(str::trim)
        .filter(|paragraph| paragraph.len() > MISCONCEPTION_PARAGRAPH_MIN_LEN)
        .map(str::to_string)
        .collect()
}

/// Last-resort scan of the whole reply for runs of lines that open with
/// misconception vocabulary. Keeps the three longest runs, reported in
/// order of appearance.
fn scan_misconception_runs(text: &str) -> Vec<String> {
    let mut runs: Vec<(usize, String)> = MISCONCEPTION_RUN_RE
        .find_iter(text)
        .map(|found| (found.start(), found.as_str().trim().to_string()))
        .collect();

    runs.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
    runs.truncate(Misconceptions::SLOT_COUNT);
    runs.sort_by_key(|(start, _)| *start);

    runs.into_iter().map(|(_, run)| run).collect()
}
