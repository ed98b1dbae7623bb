//! Terminal output formatting for AUC estimates.

use colored::Colorize;

use crate::result::AucEstimate;

/// Format an estimate as a single plain line.
///
/// # Example output
///
/// ```text
/// AUC = 0.923 (95% CI 0.881-0.957, 2000 resamples)
/// ```
pub fn format_estimate(estimate: &AucEstimate) -> String {
    format!(
        "AUC = {:.3} ({:.0}% CI {:.3}-{:.3}, {} resamples)",
        estimate.auc,
        estimate.confidence * 100.0,
        estimate.ci.lower,
        estimate.ci.upper,
        estimate.resamples_used,
    )
}

/// Format an estimate as a colored, box-drawn summary block.
///
/// Discarded resamples are called out on their own line so a shortfall
/// against the requested count is never invisible.
///
/// # Example output
///
/// ```text
/// ┌─ ROC AUC ──────────────────────────────
/// │ AUC       = 0.923
/// │ 95% CI    = 0.881 – 0.957
/// │ Resamples = 1994 / 2000 (6 discarded)
/// └────────────────────────────────────────
/// ```
pub fn format_estimate_block(title: &str, estimate: &AucEstimate) -> String {
    let mut out = String::new();
    out.push_str(&format!("┌─ {} {}\n", title.bold(), "─".repeat(30)));
    out.push_str(&format!(
        "│ AUC       = {}\n",
        format!("{:.3}", estimate.auc).bold()
    ));
    out.push_str(&format!(
        "│ {:.0}% CI    = {:.3} – {:.3}\n",
        estimate.confidence * 100.0,
        estimate.ci.lower,
        estimate.ci.upper,
    ));
    let discarded = estimate.resamples_requested - estimate.resamples_used;
    if discarded > 0 {
        out.push_str(&format!(
            "│ Resamples = {} / {} ({})\n",
            estimate.resamples_used,
            estimate.resamples_requested,
            format!("{} discarded", discarded).yellow(),
        ));
    } else {
        out.push_str(&format!(
            "│ Resamples = {}\n",
            estimate.resamples_used
        ));
    }
    out.push_str(&format!("└{}\n", "─".repeat(40)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::ConfidenceInterval;

    fn make_estimate(used: usize) -> AucEstimate {
        AucEstimate {
            auc: 0.923,
            ci: ConfidenceInterval {
                lower: 0.881,
                point: 0.923,
                upper: 0.957,
            },
            confidence: 0.95,
            resamples_requested: 2000,
            resamples_used: used,
        }
    }

    #[test]
    fn one_liner_mentions_interval() {
        let line = format_estimate(&make_estimate(2000));
        assert!(line.contains("0.923"));
        assert!(line.contains("95% CI"));
        assert!(line.contains("2000 resamples"));
    }

    #[test]
    fn block_reports_discards() {
        let block = format_estimate_block("ROC AUC", &make_estimate(1994));
        assert!(block.contains("1994 / 2000"));
        assert!(block.contains("discarded"));
    }

    #[test]
    fn block_omits_discards_when_full() {
        let block = format_estimate_block("ROC AUC", &make_estimate(2000));
        assert!(!block.contains("discarded"));
    }
}
