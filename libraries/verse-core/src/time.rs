//! Time display helpers

/// Format a position or duration in seconds as `mm:ss`.
///
/// Fractional seconds are floored; negative or non-finite input renders as
/// `00:00`. Minutes are not wrapped at the hour, so long tracks read
/// `61:05` rather than `1:01:05`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "00:00".to_string();
    }

    let total = seconds.floor() as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}
