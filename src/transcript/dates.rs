//! Date recognition and normalization.

use anyhow::Result;
use chrono::NaiveDate;
use regex::Regex;
use tracing::debug;

/// Source formats tried in order when normalizing a raw date token.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y", "%B %d, %Y", "%b %d, %Y"];

/// Normalize a raw date substring to canonical `YYYY-MM-DD` form.
///
/// Best-effort: if no known format parses, the trimmed original is returned
/// unchanged rather than failing the caller.
pub fn normalize_date(raw: &str) -> String {
    let trimmed = raw.trim();
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return date.format("%Y-%m-%d").to_string();
        }
    }
    trimmed.to_string()
}

/// Finds the first date-shaped token in the full transcript text.
pub struct MeetingDateExtractor {
    patterns: Vec<Regex>,
}

impl MeetingDateExtractor {
    pub fn new() -> Result<Self> {
        // Priority order: ISO, then slash, then spelled-out month
        let patterns = vec![
            Regex::new(r"\b(\d{4}-\d{2}-\d{2})\b")?,
            Regex::new(r"\b(\d{1,2}/\d{1,2}/\d{2,4})\b")?,
            Regex::new(r"\b(\w+\s+\d{1,2},\s+\d{4})\b")?,
        ];

        Ok(Self { patterns })
    }

    /// Scan the whole text and return the first match of the first pattern
    /// that matches anywhere, normalized. Only one date per document.
    pub fn extract(&self, text: &str) -> Option<String> {
        for pattern in &self.patterns {
            if let Some(caps) = pattern.captures(text) {
                if let Some(token) = caps.get(1) {
                    let normalized = normalize_date(token.as_str());
                    debug!("Meeting date token {:?} -> {:?}", token.as_str(), normalized);
                    return Some(normalized);
                }
            }
        }
        None
    }
}
