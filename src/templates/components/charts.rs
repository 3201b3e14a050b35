use crate::views::historical::DailyRevenue;
use crate::views::{Bar, BAR_COLOR};
use maud::{html, Markup};

pub fn format_revenue(value: f64) -> String {
    let whole = value.round() as i64;
    let digits = whole.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if whole < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

pub fn format_score(value: f64) -> String {
    format!("{value:.1}")
}

/// Horizontal bars scaled against the largest value.
pub fn bar_chart(bars: &[Bar], format_value: fn(f64) -> String) -> Markup {
    let max = bars.iter().map(|b| b.value).fold(0.0_f64, f64::max);

    html! {
        div class="bar-chart" {
            @for bar in bars {
                @let width = if max > 0.0 { (bar.value / max * 100.0).max(0.0) } else { 0.0 };
                div class="bar-row" data-highlighted=[bar.highlighted.then_some("true")] {
                    span class="bar-label" title=(bar.label) { (bar.label) }
                    div class="bar-track" {
                        div class="bar" style=(format!("width: {width:.1}%; background: {};", bar.color())) {}
                    }
                    span class="bar-value" { (format_value(bar.value)) }
                    @if bar.highlighted {
                        span class="bar-annotation" { "Selected Movie" }
                    }
                }
            }
        }
    }
}

pub fn daily_revenue_chart(days: &[DailyRevenue]) -> Markup {
    let max = days.iter().map(|d| d.revenue).fold(0.0_f64, f64::max);

    html! {
        div class="bar-chart" {
            @for day in days {
                @let width = if max > 0.0 { (day.revenue / max * 100.0).max(0.0) } else { 0.0 };
                div class="bar-row" {
                    span class="bar-label" { (day.date.format("%Y-%m-%d").to_string()) }
                    div class="bar-track" {
                        div class="bar" style=(format!("width: {width:.1}%; background: {BAR_COLOR};")) {}
                    }
                    span class="bar-value" { (format_revenue(day.revenue)) }
                }
            }
        }
    }
}

/// Single-value gauge on a `0..=max` axis.
pub fn gauge(caption: &str, value: f64, max: f64, color: &str) -> Markup {
    let width = (value / max * 100.0).clamp(0.0, 100.0);

    html! {
        div class="gauge" {
            p { (caption) ": " strong { (format_score(value)) } " / " (max) }
            div class="gauge-track" {
                div class="gauge-bar" style=(format!("width: {width:.1}%; background: {color};")) {}
            }
        }
    }
}
