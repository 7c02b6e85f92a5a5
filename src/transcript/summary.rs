//! Summary composition from the extracted decision and action lists.

use crate::transcript::ActionItem;

/// Fixed summary for transcripts with no detected structure.
pub const NO_STRUCTURE_SUMMARY: &str = "No explicit action items or decisions were detected in the transcript. The meeting appears to be informational or exploratory. Review the transcript for any implied follow-ups.";

const FOLLOW_UP_NOTE: &str = " Additional follow-ups may be noted in the transcript.";

/// Compose a short synopsis from the extraction outputs. Pure function of
/// the two lists; the transcript text is never re-scanned.
///
/// When only one of the two fragments is present the follow-up note is
/// appended; a summary combining both signals is considered complete.
pub fn build_summary(action_items: &[ActionItem], decisions: &[String]) -> String {
    if action_items.is_empty() && decisions.is_empty() {
        return NO_STRUCTURE_SUMMARY.to_string();
    }

    let mut parts = Vec::new();

    if let Some(first) = decisions.first() {
        parts.push(format!(
            "Key decisions were made on {} topic(s), including: {}",
            decisions.len(),
            first
        ));
    }

    if let Some(first) = action_items.first() {
        let assignee = first.assignee.as_deref().unwrap_or("the team");
        parts.push(format!(
            "Action items were assigned, starting with {} to {}",
            assignee, first.task
        ));
    }

    let mut summary = parts.join(". ");
    if !summary.ends_with('.') {
        summary.push('.');
    }
    if parts.len() == 1 {
        summary.push_str(FOLLOW_UP_NOTE);
    }

    summary
}
