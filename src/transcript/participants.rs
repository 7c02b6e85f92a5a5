//! Participant collection from speaker labels and roster lines.

use std::collections::BTreeSet;

use anyhow::Result;
use regex::Regex;

use crate::transcript::lines::LineClassifier;

/// Aggregates participant names from two independent signals: dialogue
/// attribution ("Name: ...") and explicit "Participants:" roster lines.
pub struct ParticipantCollector {
    roster_re: Regex,
    name_split_re: Regex,
}

impl ParticipantCollector {
    pub fn new() -> Result<Self> {
        let roster_re = Regex::new(r"(?i)\bParticipants?\s*:\s*(.+)")?;
        let name_split_re = Regex::new(r",|;|\band\b")?;

        Ok(Self {
            roster_re,
            name_split_re,
        })
    }

    /// Union of roster names and speaker labels, deduplicated and sorted.
    ///
    /// A "Participants:" line also fits the generic speaker shape, so the
    /// roster pattern is tested first and such lines never contribute a
    /// literal "Participants" speaker.
    pub fn collect(&self, classifier: &LineClassifier, lines: &[&str]) -> Vec<String> {
        let mut names = BTreeSet::new();

        for line in lines {
            if let Some(caps) = self.roster_re.captures(line) {
                if let Some(roster) = caps.get(1) {
                    for fragment in self.name_split_re.split(roster.as_str()) {
                        let name = fragment.trim();
                        if !name.is_empty() {
                            names.insert(name.to_string());
                        }
                    }
                }
                continue;
            }

            if let Some(speaker) = classifier.classify(line).speaker {
                names.insert(speaker);
            }
        }

        names.into_iter().collect()
    }
}
