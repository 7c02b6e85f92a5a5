//! Rule-based extraction of structured insights from meeting transcripts.
//!
//! Everything here is a deterministic, single-pass scan over plain text:
//! ordered pattern tables, first match wins, no external calls. Missing
//! structure (no date, no speakers, no commitments) is a valid result,
//! never an error.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod actions;
pub mod dates;
pub mod decisions;
pub mod lines;
pub mod participants;
pub mod summary;

pub use actions::ActionItemExtractor;
pub use dates::MeetingDateExtractor;
pub use decisions::DecisionExtractor;
pub use lines::{LineClassifier, SpeakerLine};
pub use participants::ParticipantCollector;

/// A commitment extracted from the transcript, with optional owner and due date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    pub task: String,
    pub assignee: Option<String>,
    pub due_date: Option<String>,
}

/// Aggregate output of one transcript analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptInsights {
    pub meeting_date: Option<String>,
    pub participants: Vec<String>,
    pub action_items: Vec<ActionItem>,
    pub key_decisions: Vec<String>,
    pub summary: String,
}

/// Analyzer holding the compiled pattern tables for all extraction passes.
pub struct TranscriptAnalyzer {
    dates: MeetingDateExtractor,
    classifier: LineClassifier,
    participants: ParticipantCollector,
    actions: ActionItemExtractor,
    decisions: DecisionExtractor,
}

impl TranscriptAnalyzer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dates: MeetingDateExtractor::new()?,
            classifier: LineClassifier::new()?,
            participants: ParticipantCollector::new()?,
            actions: ActionItemExtractor::new()?,
            decisions: DecisionExtractor::new()?,
        })
    }

    /// Run all extraction passes over the transcript text.
    pub fn analyze(&self, text: &str) -> TranscriptInsights {
        let lines: Vec<&str> = text.lines().collect();

        let meeting_date = self.dates.extract(text);
        let participants = self.participants.collect(&self.classifier, &lines);
        let action_items = self.actions.extract(&self.classifier, &lines);
        let key_decisions = self.decisions.extract(&self.classifier, &lines);

        debug!(
            "Extracted {} participant(s), {} action item(s), {} decision(s)",
            participants.len(),
            action_items.len(),
            key_decisions.len()
        );

        let summary = summary::build_summary(&action_items, &key_decisions);

        TranscriptInsights {
            meeting_date,
            participants,
            action_items,
            key_decisions,
            summary,
        }
    }
}

/// Collapse runs of whitespace, trim, and strip trailing list punctuation.
///
/// Used for both task and decision captures. An input of only whitespace or
/// punctuation cleans to an empty string, which callers discard.
pub(crate) fn clean_fragment(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.trim_end_matches([';', ',', '.', ' ']).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_fragment_collapses_whitespace() {
        assert_eq!(clean_fragment("  send   the\treport  "), "send the report");
    }

    #[test]
    fn test_clean_fragment_strips_trailing_punctuation() {
        assert_eq!(clean_fragment("ship it;,."), "ship it");
    }

    #[test]
    fn test_clean_fragment_punctuation_only_is_empty() {
        assert_eq!(clean_fragment(" .;, "), "");
    }

    #[test]
    fn test_analyze_roster_and_decision() {
        let analyzer = TranscriptAnalyzer::new().unwrap();
        let text = "Participants: Alice, Bob and Carol\nWe decided to ship the update next week.";

        let insights = analyzer.analyze(text);

        assert_eq!(insights.participants, vec!["Alice", "Bob", "Carol"]);
        assert_eq!(insights.key_decisions, vec!["ship the update next week"]);
        assert!(insights.action_items.is_empty());
    }

    #[test]
    fn test_analyze_plain_prose_has_empty_structure() {
        let analyzer = TranscriptAnalyzer::new().unwrap();
        let text = "The group talked about the market at length.\nNothing was scheduled.";

        let insights = analyzer.analyze(text);

        assert_eq!(insights.meeting_date, None);
        assert!(insights.participants.is_empty());
        assert!(insights.action_items.is_empty());
        assert!(insights.key_decisions.is_empty());
        assert_eq!(insights.summary, summary::NO_STRUCTURE_SUMMARY);
    }

    #[test]
    fn test_analyze_speaker_commitment_with_due_date() {
        let analyzer = TranscriptAnalyzer::new().unwrap();
        let text = "Jane: I'll send the report by Friday, March 14, 2025.";

        let insights = analyzer.analyze(text);

        assert_eq!(
            insights.action_items,
            vec![ActionItem {
                task: "send the report".to_string(),
                assignee: Some("Jane".to_string()),
                due_date: Some("2025-03-14".to_string()),
            }]
        );
        assert_eq!(insights.participants, vec!["Jane"]);
        assert_eq!(insights.meeting_date, Some("2025-03-14".to_string()));
    }

    #[test]
    fn test_insights_serialize_with_nulls() {
        let analyzer = TranscriptAnalyzer::new().unwrap();
        let insights = analyzer.analyze("Just chatting.");

        let json = serde_json::to_value(&insights).unwrap();
        assert!(json["meeting_date"].is_null());
        assert!(json["participants"].as_array().unwrap().is_empty());
    }
}
