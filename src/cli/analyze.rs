//! CLI handler for transcript analysis.
//!
//! Reads the transcript file, runs extraction, and prints the structured
//! result. The file read is the only fatal error on this path.

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::args::{AnalyzeCliArgs, OutputFormat};
use crate::cli::{load_config_or_default, resolve_format};
use crate::transcript::{TranscriptAnalyzer, TranscriptInsights};

/// Handle the analyze CLI command.
pub fn handle_analyze_command(args: AnalyzeCliArgs) -> Result<()> {
    let config = load_config_or_default();
    let format = resolve_format(args.format, &config, OutputFormat::Json);

    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read transcript file {}", args.file.display()))?;
    debug!("Read {} chars from {}", text.len(), args.file.display());

    let analyzer = TranscriptAnalyzer::new()?;
    let insights = analyzer.analyze(&text);

    let output_text = format_output(&insights, format)?;

    if let Some(output_path) = &args.output {
        std::fs::write(output_path, &output_text).context("Failed to write output file")?;
        eprintln!("Analysis saved to: {}", output_path.display());
    } else {
        println!("{}", output_text);
    }

    Ok(())
}

/// Render the insights in the requested format.
fn format_output(insights: &TranscriptInsights, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(insights).context("Failed to serialize analysis result")
        }
        OutputFormat::Text => Ok(format_text_report(insights)),
    }
}

fn format_text_report(insights: &TranscriptInsights) -> String {
    let mut report = String::new();

    report.push_str(&format!(
        "Meeting date: {}\n",
        insights.meeting_date.as_deref().unwrap_or("not detected")
    ));

    report.push_str(&format!(
        "Participants: {}\n",
        if insights.participants.is_empty() {
            "none detected".to_string()
        } else {
            insights.participants.join(", ")
        }
    ));

    report.push_str("\nAction items:\n");
    if insights.action_items.is_empty() {
        report.push_str("  (none)\n");
    }
    for item in &insights.action_items {
        let assignee = item.assignee.as_deref().unwrap_or("unassigned");
        match &item.due_date {
            Some(due) => {
                report.push_str(&format!("  - [{}] {} (due {})\n", assignee, item.task, due))
            }
            None => report.push_str(&format!("  - [{}] {}\n", assignee, item.task)),
        }
    }

    report.push_str("\nKey decisions:\n");
    if insights.key_decisions.is_empty() {
        report.push_str("  (none)\n");
    }
    for decision in &insights.key_decisions {
        report.push_str(&format!("  - {}\n", decision));
    }

    report.push_str(&format!("\nSummary: {}\n", insights.summary));
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::ActionItem;

    fn sample_insights() -> TranscriptInsights {
        TranscriptInsights {
            meeting_date: Some("2025-03-14".to_string()),
            participants: vec!["Jane".to_string()],
            action_items: vec![ActionItem {
                task: "send the report".to_string(),
                assignee: Some("Jane".to_string()),
                due_date: Some("2025-03-14".to_string()),
            }],
            key_decisions: vec!["ship the update".to_string()],
            summary: "A summary.".to_string(),
        }
    }

    #[test]
    fn test_format_output_json_shape() {
        let output = format_output(&sample_insights(), OutputFormat::Json).unwrap();

        assert!(output.contains("\"meeting_date\": \"2025-03-14\""));
        assert!(output.contains("\"task\": \"send the report\""));
        // 2-space pretty-print indentation
        assert!(output.contains("\n  \"participants\""));
    }

    #[test]
    fn test_format_output_text_report() {
        let output = format_output(&sample_insights(), OutputFormat::Text).unwrap();

        assert!(output.contains("Meeting date: 2025-03-14"));
        assert!(output.contains("- [Jane] send the report (due 2025-03-14)"));
        assert!(output.contains("- ship the update"));
        assert!(output.contains("Summary: A summary."));
    }

    #[test]
    fn test_format_output_text_report_empty_sections() {
        let insights = TranscriptInsights {
            meeting_date: None,
            participants: vec![],
            action_items: vec![],
            key_decisions: vec![],
            summary: "Nothing.".to_string(),
        };

        let output = format_output(&insights, OutputFormat::Text).unwrap();

        assert!(output.contains("Meeting date: not detected"));
        assert!(output.contains("Participants: none detected"));
        assert!(output.contains("(none)"));
    }
}
