//! CLI output formatting.

use std::fmt::Write as _;
use std::time::Duration;

use strassen_core::{Element, Matrix};

/// Largest matrix printed in full; bigger ones are previewed.
pub const PREVIEW_LIMIT: usize = 8;

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// `rows x columns` label.
#[must_use]
pub fn format_shape(m: &Matrix) -> String {
    format!("{}x{}", m.rows(), m.columns())
}

/// Wrapping sum of all elements, a cheap fingerprint for large products.
#[must_use]
pub fn checksum(m: &Matrix) -> Element {
    m.as_slice()
        .iter()
        .fold(0, |acc: Element, &x| acc.wrapping_add(x))
}

/// Render a matrix, eliding rows and columns beyond `limit` unless `verbose`.
#[must_use]
pub fn format_matrix(m: &Matrix, limit: usize, verbose: bool) -> String {
    if verbose || (m.rows() <= limit && m.columns() <= limit) {
        return m.to_string();
    }

    let shown_rows = m.rows().min(limit);
    let shown_cols = m.columns().min(limit);
    let mut out = String::new();
    for row in m.to_rows().iter().take(shown_rows) {
        let cells: Vec<String> = row.iter().take(shown_cols).map(ToString::to_string).collect();
        out.push_str(&cells.join(" "));
        if m.columns() > shown_cols {
            out.push_str(" ...");
        }
        out.push('\n');
    }
    if m.rows() > shown_rows {
        out.push_str("...\n");
    }
    let _ = write!(out, "({} matrix)", format_shape(m));
    out
}
