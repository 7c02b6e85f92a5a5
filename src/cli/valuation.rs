//! CLI handler for the channel valuation calculator.

use anyhow::{Context, Result};

use crate::cli::args::{OutputFormat, ValuationCliArgs};
use crate::cli::{load_config_or_default, resolve_format};
use crate::numfmt::currency;
use crate::valuation::{self, ValuationInputs, ValuationReport};

/// Handle the valuation CLI command.
pub fn handle_valuation_command(args: ValuationCliArgs) -> Result<()> {
    let config = load_config_or_default();
    let format = resolve_format(args.format, &config, OutputFormat::Text);

    let report = valuation::estimate(&ValuationInputs {
        monthly_revenue: args.monthly_revenue,
        monthly_views: args.monthly_views,
        subscribers: args.subscribers,
        age_years: args.age_years,
        niche: args.niche,
    })?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .context("Failed to serialize valuation report")?;
            println!("{}", json);
        }
        OutputFormat::Text => print!("{}", format_text_report(&report)),
    }

    Ok(())
}

fn format_text_report(report: &ValuationReport) -> String {
    let mut out = String::new();

    out.push_str("Estimated valuation range (USD):\n");
    out.push_str(&format!("  Low:  {}\n", currency(report.low.round() as u64)));
    out.push_str(&format!("  Mid:  {}\n", currency(report.mid.round() as u64)));
    out.push_str(&format!("  High: {}\n", currency(report.high.round() as u64)));

    out.push_str("\nRevenue multiple used (monthly revenue):\n");
    out.push_str(&format!(
        "  Low/Mid/High: {:.1}x / {:.1}x / {:.1}x\n",
        report.low_multiple,
        (report.low_multiple + report.high_multiple) / 2.0,
        report.high_multiple
    ));

    out.push_str("\nKey factors affecting valuation:\n");
    for factor in &report.factors {
        out.push_str(&format!("  - {}\n", factor));
    }

    out
}
