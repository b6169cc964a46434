//! Analytics aggregation over the precomputed snapshot.

use serde::Serialize;

use crate::store::models::AnalyticsSummary;

/// `count` as a percentage of `total`; zero when `total` is zero.
pub fn percentage_of(count: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    f64::from(count) / f64::from(total) * 100.0
}

/// One bar of a horizontal breakdown chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownRow {
    pub label: String,
    pub count: u32,
    pub percentage: f64,
}

/// One column of the trend chart, height normalised to the tallest column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendBar {
    pub month: String,
    pub count: u32,
    /// 0-100, relative to the busiest month.
    pub height: f64,
}

/// Everything the analytics page shows, derived from one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsReport {
    pub total_tickets: u32,
    pub open_tickets: u32,
    pub in_progress_tickets: u32,
    pub resolved_tickets: u32,
    pub avg_resolution_time: String,
    pub satisfaction_rate: u8,
    pub resolution_rate: u32,
    pub by_category: Vec<BreakdownRow>,
    pub by_priority: Vec<BreakdownRow>,
    pub trend: Vec<TrendBar>,
}

impl AnalyticsReport {
    pub fn from_summary(summary: &AnalyticsSummary) -> Self {
        let total = summary.total_tickets;

        Self {
            total_tickets: total,
            open_tickets: summary.open_tickets,
            in_progress_tickets: summary.in_progress_tickets,
            resolved_tickets: summary.resolved_tickets,
            avg_resolution_time: summary.avg_resolution_time.clone(),
            satisfaction_rate: summary.satisfaction_rate,
            resolution_rate: resolution_rate(summary),
            by_category: summary
                .tickets_by_category
                .iter()
                .map(|c| breakdown_row(&c.category, c.count, total))
                .collect(),
            by_priority: summary
                .tickets_by_priority
                .iter()
                .map(|p| breakdown_row(&p.priority, p.count, total))
                .collect(),
            trend: trend_bars(summary),
        }
    }
}

/// Resolved share of all tickets, rounded to a whole percent.
pub fn resolution_rate(summary: &AnalyticsSummary) -> u32 {
    percentage_of(summary.resolved_tickets, summary.total_tickets).round() as u32
}

/// Trend columns scaled so the busiest month is 100.
pub fn trend_bars(summary: &AnalyticsSummary) -> Vec<TrendBar> {
    let max = summary
        .ticket_trend
        .iter()
        .map(|t| t.count)
        .max()
        .unwrap_or(0);

    summary
        .ticket_trend
        .iter()
        .map(|t| TrendBar {
            month: t.month.clone(),
            count: t.count,
            height: percentage_of(t.count, max),
        })
        .collect()
}

fn breakdown_row(label: &str, count: u32, total: u32) -> BreakdownRow {
    BreakdownRow {
        label: label.to_string(),
        count,
        percentage: percentage_of(count, total),
    }
}
