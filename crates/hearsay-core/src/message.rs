//! Display-fragment builders.
//!
//! Fragments are plain format strings, self-contained with inline
//! styles. Numbers render the way the host page renders them: integral
//! values print without a decimal point and missing values print as
//! `NaN`.

use crate::classify::Estimation;
use crate::counter::TaskCounter;
use crate::types::SenderView;

/// Label stored to `guessing_task_text` and shown in the part header.
pub fn task_label(counter: TaskCounter) -> String {
    format!("Guessing Task {}", counter)
}

/// Header fragment appended to the task region.
pub fn header_html(counter: TaskCounter) -> String {
    format!(
        "<div><strong><u>Part 2: {}</u></strong></div>",
        task_label(counter)
    )
}

/// The estimate fragment that replaces the content region.
///
/// The incentives sentence names the classification and, for a nonzero
/// bias, its magnitude.
pub fn estimate_html(sender: &SenderView, estimation: Estimation) -> String {
    let qualifier = if sender.bias != 0.0 {
        format!(" by {}%", format_number(sender.bias.abs()))
    } else {
        String::new()
    };
    format!(
        "<p>Here's another participant's estimate for this question:</p>\
         <div style=\"border: 2px solid #000; padding: 10px; margin: 10px 0;\">\
         <p style=\"font-weight: bold;\">There is a {pct}% likelihood that the balls were drawn from Bag A.</p>\
         </div>\
         <p>Their incentives for this information: <strong>They were paid extra if this estimate was {estimation}{qualifier}</strong>.</p>",
        pct = format_percent(sender.incent_belief),
    )
}

/// Render a value without a decimal point when it is integral, as `NaN`
/// when it is missing.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if value == value.trunc() && value.abs() < 1e15 {
        format!("{}", value.trunc() as i64)
    } else {
        format!("{}", value)
    }
}

/// Belief-to-percent rendering.
///
/// Snaps to nine decimal places so beliefs entered as clean percentages
/// do not pick up float noise: `0.83` must render as `83`, not
/// `83.00000000000001`.
pub fn format_percent(value: f64) -> String {
    let pct = value * 100.0;
    if !pct.is_finite() {
        return format_number(pct);
    }
    format_number((pct * 1e9).round() / 1e9)
}
