//! Action-item extraction with assignee and due-date inference.

use anyhow::Result;
use regex::Regex;
use tracing::debug;

use crate::transcript::dates::normalize_date;
use crate::transcript::lines::LineClassifier;
use crate::transcript::{clean_fragment, ActionItem};

/// Detects commitments line by line using an ordered pattern table.
///
/// Patterns run in priority order (specific first-person phrasings before
/// directives and suggestions); the first match wins and no further patterns
/// are tried on that line.
pub struct ActionItemExtractor {
    patterns: Vec<Regex>,
    first_person_re: Regex,
    due_re: Regex,
}

impl ActionItemExtractor {
    pub fn new() -> Result<Self> {
        let patterns = vec![
            Regex::new(r"(?i)\bI(?:'|’)?ll\s+([^.\n]+)")?,
            Regex::new(r"(?i)\bI(?:'|’)?m\s+going\s+to\s+([^.\n]+)")?,
            Regex::new(r"(?i)\bI\s+will\s+([^.\n]+)")?,
            Regex::new(r"(?i)\bYou\s+should\s+([^.\n]+)")?,
            Regex::new(r"(?i)\bWe\s+should\s+([^.\n]+)")?,
            Regex::new(r"(?i)\bLet(?:'|’)?s\s+([^.\n]+)")?,
            Regex::new(r"(?i)\bAction\s*:\s*([^.\n]+)")?,
        ];

        let first_person_re = Regex::new(r"(?i)\bI\b|I(?:'|’)?ll|I\s+will|I(?:'|’)?m\s+going")?;

        // Preposition-led date clause, optionally prefixed by a weekday name
        // ("by Friday, March 14, 2025"); the capture is the date token alone.
        let due_re = Regex::new(
            r"(?i)\b(?:by|before|due|on)\s+(?:(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday),?\s+)?([A-Za-z]+\s+\d{1,2}(?:,\s*\d{4})?|\d{1,2}/\d{1,2}/\d{2,4}|\d{4}-\d{2}-\d{2})\b",
        )?;

        Ok(Self {
            patterns,
            first_person_re,
            due_re,
        })
    }

    /// Scan the lines, carrying the most recent speaker label as context for
    /// pronoun-based assignee inference.
    pub fn extract(&self, classifier: &LineClassifier, lines: &[&str]) -> Vec<ActionItem> {
        let mut items = Vec::new();
        let mut current_speaker: Option<String> = None;

        for line in lines {
            let parsed = classifier.classify(line);
            if let Some(name) = parsed.speaker {
                current_speaker = Some(name);
            }
            let content = parsed.content;

            for pattern in &self.patterns {
                if let Some(caps) = pattern.captures(content) {
                    if let Some(raw_task) = caps.get(1) {
                        // Drop the due-date clause from the task text so
                        // "send the report by Friday, March 14, 2025"
                        // yields the task "send the report".
                        let task = clean_fragment(&self.due_re.replace(raw_task.as_str(), ""));
                        if task.is_empty() {
                            debug!("Discarding empty action capture on line {:?}", line);
                        } else {
                            items.push(ActionItem {
                                task,
                                assignee: self.infer_assignee(content, current_speaker.as_deref()),
                                due_date: self.find_due_date(content),
                            });
                        }
                    }
                    break;
                }
            }
        }

        items
    }

    /// First-person markers resolve to the current speaker context. "You
    /// should" directives never resolve an assignee: plain-text transcripts
    /// carry no reliable addressee signal, a known limitation.
    fn infer_assignee(&self, content: &str, current_speaker: Option<&str>) -> Option<String> {
        if self.first_person_re.is_match(content) {
            return current_speaker.map(str::to_string);
        }
        None
    }

    /// Search the whole line content for a due-date clause, independent of
    /// which action pattern matched.
    fn find_due_date(&self, content: &str) -> Option<String> {
        self.due_re
            .captures(content)
            .and_then(|caps| caps.get(1))
            .map(|token| normalize_date(token.as_str()))
    }
}
