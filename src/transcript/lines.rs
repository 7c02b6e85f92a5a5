//! Per-line speaker detection.

use anyhow::Result;
use regex::Regex;

/// A line split into an optional speaker label and its spoken content.
#[derive(Debug, PartialEq, Eq)]
pub struct SpeakerLine<'a> {
    pub speaker: Option<String>,
    pub content: &'a str,
}

/// Detects a leading "Speaker: content" prefix on a line.
pub struct LineClassifier {
    speaker_re: Regex,
}

impl LineClassifier {
    pub fn new() -> Result<Self> {
        // Capitalized name of 1-50 further name characters, then a colon
        let speaker_re = Regex::new(r"^\s*([A-Z][\w .'-]{1,50})\s*:\s*(.+)$")?;

        Ok(Self { speaker_re })
    }

    /// Split the line into speaker and content. Lines without a recognizable
    /// speaker prefix keep the whole line as content.
    pub fn classify<'a>(&self, line: &'a str) -> SpeakerLine<'a> {
        if let Some(caps) = self.speaker_re.captures(line) {
            let speaker = caps.get(1).map(|m| m.as_str().trim().to_string());
            let content = caps.get(2).map(|m| m.as_str().trim()).unwrap_or(line);
            return SpeakerLine { speaker, content };
        }

        SpeakerLine {
            speaker: None,
            content: line,
        }
    }
}
