// Pure sizing and formatting helpers, kept free of web-sys so host tests can
// include this file directly.

use std::time::Duration;

/// Canvas backing store size for a CSS box at the given device pixel ratio.
#[inline]
pub fn backing_size(css_w: f64, css_h: f64, dpr: f64) -> (u32, u32) {
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    let w = (css_w.max(0.0) * dpr) as u32;
    let h = (css_h.max(0.0) * dpr) as u32;
    (w.max(1), h.max(1))
}

/// Particle count from an optional `data-count` attribute, capped at `max`.
#[inline]
pub fn parse_count(attr: Option<&str>, default: usize, max: usize) -> usize {
    attr.and_then(|s| s.trim().parse::<usize>().ok())
        .map(|n| n.min(max))
        .unwrap_or(default)
}

/// Parallax speed from a `data-parallax` attribute; empty means default.
#[inline]
pub fn parse_speed(attr: Option<&str>, default: f32) -> f32 {
    attr.and_then(|s| s.trim().parse::<f32>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}

pub fn retry_message(wait: Duration) -> String {
    let minutes = ((wait.as_secs() + 59) / 60).max(1);
    let unit = if minutes == 1 { "minute" } else { "minutes" };
    format!("Too many attempts. Please try again in {} {}.", minutes, unit)
}

/// `?debug` anywhere in the query string turns on debug logging.
#[inline]
pub fn wants_debug_logging(search: &str) -> bool {
    search
        .trim_start_matches('?')
        .split('&')
        .any(|kv| kv == "debug" || kv.starts_with("debug="))
}
