//! Channel valuation range estimation for acquisitions.
//!
//! Closed-form arithmetic over a monthly-revenue multiple: a niche-dependent
//! base range adjusted by engagement and growth proxies, clamped to sane
//! bounds.

use anyhow::{bail, Result};
use clap::ValueEnum;
use serde::Serialize;

const MULTIPLE_FLOOR: f64 = 12.0;
const MULTIPLE_CEILING: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Niche {
    Entertainment,
    Education,
    Finance,
    Tech,
    Lifestyle,
}

#[derive(Debug, Clone, Copy)]
pub struct ValuationInputs {
    pub monthly_revenue: f64,
    pub monthly_views: f64,
    pub subscribers: f64,
    pub age_years: f64,
    pub niche: Niche,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValuationReport {
    pub low: f64,
    pub mid: f64,
    pub high: f64,
    pub low_multiple: f64,
    pub high_multiple: f64,
    pub factors: Vec<String>,
}

/// Estimate a valuation range. Rejects negative inputs; every other input
/// combination produces a report (degenerate signals show up as penalty
/// factors, not errors).
pub fn estimate(inputs: &ValuationInputs) -> Result<ValuationReport> {
    if inputs.monthly_revenue < 0.0
        || inputs.monthly_views < 0.0
        || inputs.subscribers < 0.0
        || inputs.age_years < 0.0
    {
        bail!("All numeric inputs must be non-negative");
    }

    let (base_low, base_high, base_note) = base_multiple_range(inputs.niche);

    let mut factors = vec![base_note.to_string()];
    let mut adjustment_total = 0.0;

    let (adjustment, note) = engagement_adjustment(inputs.monthly_views, inputs.subscribers);
    adjustment_total += adjustment;
    factors.push(note);

    let (adjustment, note) = growth_proxy_adjustment(inputs.subscribers, inputs.age_years);
    adjustment_total += adjustment;
    factors.push(note);

    let mut low_multiple = (base_low + adjustment_total).clamp(MULTIPLE_FLOOR, MULTIPLE_CEILING);
    let mut high_multiple = (base_high + adjustment_total).clamp(MULTIPLE_FLOOR, MULTIPLE_CEILING);
    if low_multiple > high_multiple {
        std::mem::swap(&mut low_multiple, &mut high_multiple);
    }

    let low = inputs.monthly_revenue * low_multiple;
    let high = inputs.monthly_revenue * high_multiple;

    Ok(ValuationReport {
        low,
        mid: (low + high) / 2.0,
        high,
        low_multiple,
        high_multiple,
        factors,
    })
}

/// Base monthly-revenue multiple range per niche.
fn base_multiple_range(niche: Niche) -> (f64, f64, &'static str) {
    match niche {
        Niche::Finance | Niche::Education => (30.0, 48.0, "Premium niche"),
        _ => (24.0, 36.0, "Standard niche"),
    }
}

fn engagement_adjustment(monthly_views: f64, subscribers: f64) -> (f64, String) {
    if subscribers <= 0.0 {
        return (-2.0, "Very low engagement (no subscribers)".to_string());
    }
    let views_per_sub = monthly_views / subscribers;
    if views_per_sub >= 1.5 {
        return (2.0, format!("High engagement ({:.2} views/sub)", views_per_sub));
    }
    if views_per_sub < 0.5 {
        return (-2.0, format!("Low engagement ({:.2} views/sub)", views_per_sub));
    }
    (0.0, format!("Moderate engagement ({:.2} views/sub)", views_per_sub))
}

fn growth_proxy_adjustment(subscribers: f64, age_years: f64) -> (f64, String) {
    if age_years <= 0.0 {
        return (-2.0, "Unreliable age input".to_string());
    }
    let subs_per_year = subscribers / age_years;
    let grouped = crate::numfmt::group_digits(subs_per_year.round() as u64);
    if subs_per_year >= 100_000.0 {
        return (2.0, format!("Strong growth proxy ({} subs/year)", grouped));
    }
    if subs_per_year <= 20_000.0 {
        return (-2.0, format!("Slow growth proxy ({} subs/year)", grouped));
    }
    (0.0, format!("Steady growth proxy ({} subs/year)", grouped))
}
