//! Decision extraction.

use anyhow::Result;
use regex::Regex;

use crate::transcript::clean_fragment;
use crate::transcript::lines::LineClassifier;

/// Detects explicit decisions and agreements, one per line at most,
/// first matching pattern wins.
pub struct DecisionExtractor {
    patterns: Vec<Regex>,
}

impl DecisionExtractor {
    pub fn new() -> Result<Self> {
        let patterns = vec![
            Regex::new(r"(?i)\bWe\s+decided\s+(?:to\s+)?([^.\n]+)")?,
            Regex::new(r"(?i)\bDecision\s*:\s*([^.\n]+)")?,
            Regex::new(r"(?i)\bAgreed\s+to\s+([^.\n]+)")?,
            Regex::new(r"(?i)\bWe\s+agree\s+to\s+([^.\n]+)")?,
        ];

        Ok(Self { patterns })
    }

    pub fn extract(&self, classifier: &LineClassifier, lines: &[&str]) -> Vec<String> {
        let mut decisions = Vec::new();

        for line in lines {
            let content = classifier.classify(line).content;

            for pattern in &self.patterns {
                if let Some(caps) = pattern.captures(content) {
                    if let Some(capture) = caps.get(1) {
                        let decision = clean_fragment(capture.as_str());
                        if !decision.is_empty() {
                            decisions.push(decision);
                        }
                    }
                    break;
                }
            }
        }

        decisions
    }
}
