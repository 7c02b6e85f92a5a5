//! CLI handler for the sponsorship revenue estimator.

use anyhow::{Context, Result};

use crate::cli::args::{OutputFormat, SponsorCliArgs};
use crate::cli::{load_config_or_default, resolve_format};
use crate::numfmt::{currency, group_digits};
use crate::sponsor::{self, ChannelMetrics, RevenueEstimate};

/// Handle the sponsor CLI command. Works from channel-level metrics; video
/// history is a library-level input (no per-video CLI entry).
pub fn handle_sponsor_command(args: SponsorCliArgs) -> Result<()> {
    let config = load_config_or_default();
    let format = resolve_format(args.format, &config, OutputFormat::Text);

    let metrics = ChannelMetrics {
        subscribers: args.subscribers,
        total_views: args.total_views,
        video_count: args.video_count,
        average_views: args.average_views,
        monthly_views: args.monthly_views,
    };

    let estimate = sponsor::estimate_sponsor_revenue(&metrics, None);

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&estimate)
                .context("Failed to serialize revenue estimate")?;
            println!("{}", json);
        }
        OutputFormat::Text => print!("{}", format_text_report(&estimate)),
    }

    Ok(())
}

fn format_text_report(estimate: &RevenueEstimate) -> String {
    let mut out = String::new();

    out.push_str(&"=".repeat(50));
    out.push_str("\nSPONSORSHIP REVENUE ESTIMATE\n");
    out.push_str(&"=".repeat(50));
    out.push('\n');

    out.push_str(&format!(
        "Brand deal rate: {}/integration\n",
        currency(estimate.brand_deal_rate)
    ));
    out.push_str(&format!(
        "Est. annual uploads: {} ({})\n",
        estimate.annual_uploads,
        sponsor::upload_frequency_label(estimate.annual_uploads)
    ));
    out.push_str(&format!(
        "V30 average: {} views\n",
        group_digits(estimate.v30_average)
    ));
    out.push_str(&format!(
        "Yearly potential: {}\n",
        currency(estimate.yearly_potential)
    ));
    out.push_str(&format!("Confidence: {}\n", estimate.confidence));

    out.push_str("\nNotes:\n");
    for note in &estimate.notes {
        out.push_str(&format!("  - {}\n", note));
    }

    out
}
