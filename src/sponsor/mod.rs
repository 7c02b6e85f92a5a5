//! Sponsorship revenue estimation from channel metrics.
//!
//! Estimates the per-integration brand deal rate from average views, the
//! 30-day view average (V30) and upload cadence from recent video history,
//! and combines them into a yearly revenue potential with a confidence
//! grade.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::numfmt::group_digits;

/// Share of uploads assumed to carry a brand integration.
pub const DEFAULT_INTEGRATION_RATE: f64 = 0.9;

/// Power-law coefficients fitted to sponsorship market data in the
/// business/education niche: rate = A * views^B.
const RATE_COEFFICIENT: f64 = 0.0685;
const RATE_EXPONENT: f64 = 0.961;

/// At most this many recent videos feed the V30 and cadence estimates.
const RECENT_VIDEO_WINDOW: usize = 25;

/// Cap on upload intervals so a long gap cannot skew the cadence.
const MAX_INTERVAL_DAYS: i64 = 30;

/// A single video's metrics.
#[derive(Debug, Clone)]
pub struct VideoData {
    pub published_at: DateTime<Utc>,
    pub view_count: u64,
    pub is_short: bool,
    pub duration_seconds: u32,
}

/// Channel-level metrics for revenue calculation.
#[derive(Debug, Clone)]
pub struct ChannelMetrics {
    pub subscribers: u64,
    pub total_views: u64,
    pub video_count: u64,
    pub average_views: u64,
    pub monthly_views: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::High => write!(f, "high"),
            Confidence::Medium => write!(f, "medium"),
            Confidence::Low => write!(f, "low"),
        }
    }
}

/// Revenue estimation results.
#[derive(Debug, Clone, Serialize)]
pub struct RevenueEstimate {
    /// Per-integration rate in USD
    pub brand_deal_rate: u64,
    pub annual_uploads: u64,
    pub yearly_potential: u64,
    /// 30-day view average across recent videos
    pub v30_average: u64,
    pub confidence: Confidence,
    pub notes: Vec<String>,
}

/// Estimated brand deal rate per integration from average views per video.
pub fn brand_deal_rate(average_views: u64) -> u64 {
    if average_views == 0 {
        return 0;
    }
    (RATE_COEFFICIENT * (average_views as f64).powf(RATE_EXPONENT)).round() as u64
}

/// 30-day view average across recent non-short videos.
///
/// Videos younger than 30 days extrapolate linearly; older videos assume 60%
/// of lifetime views landed in the first 30 days.
pub fn v30(videos: &[VideoData]) -> u64 {
    let now = Utc::now();
    let mut total = 0.0;
    let mut count = 0u64;

    for video in videos.iter().filter(|v| !v.is_short).take(RECENT_VIDEO_WINDOW) {
        let days_since_publish = (now - video.published_at).num_days();
        if days_since_publish < 1 {
            continue;
        }

        let estimated = if days_since_publish < 30 {
            video.view_count as f64 / days_since_publish as f64 * 30.0
        } else {
            video.view_count as f64 * 0.6
        };

        if estimated >= 0.0 && estimated.is_finite() {
            total += estimated;
            count += 1;
        }
    }

    if count == 0 {
        return 0;
    }
    (total / count as f64).round() as u64
}

/// Estimated uploads per year from the intervals between recent uploads,
/// weighted with exponential decay to favor the current cadence.
pub fn annual_upload_volume(videos: &[VideoData]) -> u64 {
    let now = Utc::now();

    let mut recent: Vec<&VideoData> = videos
        .iter()
        .filter(|v| !v.is_short && v.published_at <= now)
        .collect();
    recent.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    recent.truncate(RECENT_VIDEO_WINDOW);

    if recent.len() < 2 {
        return 0;
    }

    let intervals: Vec<i64> = recent
        .windows(2)
        .map(|pair| {
            let days = (pair[0].published_at - pair[1].published_at).num_days();
            days.min(MAX_INTERVAL_DAYS)
        })
        .collect();

    let lambda_decay = 2.0;
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;
    for (i, interval) in intervals.iter().enumerate() {
        let weight = (-(i as f64) / lambda_decay).exp();
        weighted_sum += *interval as f64 * weight;
        total_weight += weight;
    }

    if total_weight == 0.0 {
        return 0;
    }

    let weighted_avg_interval = weighted_sum / total_weight;
    if weighted_avg_interval <= 0.0 {
        return 365; // daily uploads
    }

    (365.0 / weighted_avg_interval).round() as u64
}

/// Potential yearly brand revenue.
pub fn yearly_potential(brand_deal_rate: u64, annual_uploads: u64, integration_rate: f64) -> u64 {
    (brand_deal_rate as f64 * annual_uploads as f64 * integration_rate).round() as u64
}

/// Full sponsorship revenue estimation, with or without video history.
pub fn estimate_sponsor_revenue(
    metrics: &ChannelMetrics,
    videos: Option<&[VideoData]>,
) -> RevenueEstimate {
    let mut notes = Vec::new();
    let mut confidence = Confidence::High;

    let brand_rate = brand_deal_rate(metrics.average_views);
    notes.push(format!(
        "Brand rate based on {} avg views/video",
        group_digits(metrics.average_views)
    ));

    let (v30_average, annual_uploads) = match videos {
        Some(history) if history.len() >= 2 => {
            notes.push(format!(
                "Upload frequency from {} recent videos",
                history.len()
            ));
            (v30(history), annual_upload_volume(history))
        }
        _ => {
            // No usable history: fall back to channel-level estimates
            let uploads = if metrics.video_count > 0 {
                notes.push("Upload frequency estimated (no video history)".to_string());
                confidence = Confidence::Medium;
                (metrics.video_count / 3).clamp(12, 200)
            } else {
                notes.push("Using default weekly upload assumption".to_string());
                confidence = Confidence::Low;
                52
            };
            (metrics.average_views, uploads)
        }
    };

    let yearly = yearly_potential(brand_rate, annual_uploads, DEFAULT_INTEGRATION_RATE);
    debug!(
        "Sponsor estimate: rate {} x {} uploads/year -> {}",
        brand_rate, annual_uploads, yearly
    );

    if metrics.subscribers < 100_000 {
        confidence = Confidence::Low;
        notes.push("Below 100K subs - rates may vary significantly".to_string());
    } else if metrics.subscribers < 500_000 {
        if confidence == Confidence::High {
            confidence = Confidence::Medium;
        }
        notes.push("Mid-tier channel - good market data available".to_string());
    } else {
        notes.push("Large channel - premium rates likely".to_string());
    }

    RevenueEstimate {
        brand_deal_rate: brand_rate,
        annual_uploads,
        yearly_potential: yearly,
        v30_average,
        confidence,
        notes,
    }
}

/// Human-readable upload cadence label.
pub fn upload_frequency_label(annual_uploads: u64) -> &'static str {
    if annual_uploads >= 300 {
        "Daily"
    } else if annual_uploads >= 100 {
        "2-3x per week"
    } else if annual_uploads >= 45 {
        "Weekly"
    } else if annual_uploads >= 24 {
        "Biweekly"
    } else if annual_uploads >= 12 {
        "Monthly"
    } else {
        "Less than monthly"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    // Anchor all videos in a test to one base instant so the intervals
    // between them are exact whole days.
    fn video_at(base: DateTime<Utc>, days_ago: i64, views: u64) -> VideoData {
        VideoData {
            published_at: base - Duration::days(days_ago),
            view_count: views,
            is_short: false,
            duration_seconds: 600,
        }
    }

    fn short_at(base: DateTime<Utc>, days_ago: i64, views: u64) -> VideoData {
        VideoData {
            is_short: true,
            ..video_at(base, days_ago, views)
        }
    }

    fn metrics(subscribers: u64, video_count: u64, average_views: u64) -> ChannelMetrics {
        ChannelMetrics {
            subscribers,
            total_views: 100_000_000,
            video_count,
            average_views,
            monthly_views: None,
        }
    }

    #[test]
    fn test_brand_deal_rate_zero_views() {
        assert_eq!(brand_deal_rate(0), 0);
    }

    #[test]
    fn test_brand_deal_rate_grows_with_views() {
        let small = brand_deal_rate(50_000);
        let large = brand_deal_rate(150_000);
        assert!(small > 0);
        assert!(large > small);
    }

    #[test]
    fn test_brand_deal_rate_sublinear() {
        // Exponent below 1: doubling views less than doubles the rate
        assert!(brand_deal_rate(200_000) < 2 * brand_deal_rate(100_000));
    }

    #[test]
    fn test_v30_extrapolates_young_videos() {
        // 10 days old, 1000 views -> 3000 estimated 30-day views
        assert_eq!(v30(&[video_at(Utc::now(), 10, 1_000)]), 3_000);
    }

    #[test]
    fn test_v30_discounts_old_videos() {
        // 60 days old, 10000 views -> 60% = 6000
        assert_eq!(v30(&[video_at(Utc::now(), 60, 10_000)]), 6_000);
    }

    #[test]
    fn test_v30_averages_and_skips_shorts() {
        let base = Utc::now();
        let videos = vec![
            video_at(base, 10, 1_000),
            video_at(base, 60, 10_000),
            short_at(base, 5, 1_000_000),
        ];
        assert_eq!(v30(&videos), 4_500);
    }

    #[test]
    fn test_v30_empty_and_same_day_videos() {
        assert_eq!(v30(&[]), 0);
        assert_eq!(v30(&[video_at(Utc::now(), 0, 5_000)]), 0);
    }

    #[test]
    fn test_annual_upload_volume_weekly_cadence() {
        let base = Utc::now();
        let videos: Vec<VideoData> = (0..10).map(|i| video_at(base, i * 7 + 1, 1_000)).collect();
        assert_eq!(annual_upload_volume(&videos), 52);
    }

    #[test]
    fn test_annual_upload_volume_caps_long_gaps() {
        // 90-day gaps are capped at 30 days -> ~12/year instead of ~4
        let base = Utc::now();
        let videos = vec![
            video_at(base, 1, 1_000),
            video_at(base, 91, 1_000),
            video_at(base, 181, 1_000),
        ];
        assert_eq!(annual_upload_volume(&videos), 12);
    }

    #[test]
    fn test_annual_upload_volume_needs_two_videos() {
        assert_eq!(annual_upload_volume(&[video_at(Utc::now(), 5, 1_000)]), 0);
        assert_eq!(annual_upload_volume(&[]), 0);
    }

    #[test]
    fn test_yearly_potential() {
        assert_eq!(yearly_potential(1_000, 100, 0.9), 90_000);
    }

    #[test]
    fn test_estimate_without_history_uses_fallbacks() {
        let estimate = estimate_sponsor_revenue(&metrics(500_000, 200, 150_000), None);

        assert_eq!(estimate.annual_uploads, 66); // 200 / 3, within [12, 200]
        assert_eq!(estimate.v30_average, 150_000);
        assert_eq!(estimate.confidence, Confidence::Medium);
        assert!(estimate
            .notes
            .iter()
            .any(|n| n == "Upload frequency estimated (no video history)"));
        assert!(estimate
            .notes
            .iter()
            .any(|n| n == "Large channel - premium rates likely"));
    }

    #[test]
    fn test_estimate_no_videos_at_all_defaults_weekly() {
        let estimate = estimate_sponsor_revenue(&metrics(600_000, 0, 10_000), None);

        assert_eq!(estimate.annual_uploads, 52);
        assert_eq!(estimate.confidence, Confidence::Low);
    }

    #[test]
    fn test_estimate_small_channel_is_low_confidence() {
        let estimate = estimate_sponsor_revenue(&metrics(50_000, 100, 5_000), None);

        assert_eq!(estimate.confidence, Confidence::Low);
        assert!(estimate
            .notes
            .iter()
            .any(|n| n == "Below 100K subs - rates may vary significantly"));
    }

    #[test]
    fn test_estimate_mid_tier_downgrades_high_to_medium() {
        let base = Utc::now();
        let videos: Vec<VideoData> = (0..5).map(|i| video_at(base, i * 7 + 1, 50_000)).collect();
        let estimate = estimate_sponsor_revenue(&metrics(250_000, 100, 50_000), Some(&videos));

        assert_eq!(estimate.confidence, Confidence::Medium);
    }

    #[test]
    fn test_upload_frequency_labels() {
        assert_eq!(upload_frequency_label(365), "Daily");
        assert_eq!(upload_frequency_label(150), "2-3x per week");
        assert_eq!(upload_frequency_label(52), "Weekly");
        assert_eq!(upload_frequency_label(26), "Biweekly");
        assert_eq!(upload_frequency_label(12), "Monthly");
        assert_eq!(upload_frequency_label(5), "Less than monthly");
    }
}
