//! Utility functions

// ============================================================================
// Time Labels
// ============================================================================

/// Parse a duration label such as `"03:45"` or `"01:02:30"` into seconds
///
/// Any other shape, or a part that is not a number, yields 0.
pub fn parse_time_label(label: &str) -> f64 {
    let parts: Option<Vec<f64>> = label
        .trim()
        .split(':')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite() && *n >= 0.0)
        })
        .collect();

    match parts.as_deref() {
        Some([minutes, seconds]) => minutes * 60.0 + seconds,
        Some([hours, minutes, seconds]) => hours * 3600.0 + minutes * 60.0 + seconds,
        _ => 0.0,
    }
}

/// Format seconds as `mm:ss`, or `hh:mm:ss` once past the hour
pub fn format_seconds(total_seconds: f64) -> String {
    if !total_seconds.is_finite() || total_seconds < 0.0 {
        return "00:00".to_string();
    }

    let total = total_seconds.floor() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

/// Current/total label shown in the player bar
pub fn time_display(current: f64, total: f64) -> String {
    format!("{} / {}", format_seconds(current), format_seconds(total))
}
