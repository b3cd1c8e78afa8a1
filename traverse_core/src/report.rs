//! # Text Report
//!
//! Plain-text rendering of a sweep result for terminals and output
//! panes. Pure formatting - the engine computes, a front end decides
//! where the text goes.

use crate::analysis::{BeamConfig, SweepResult};

/// Render a sweep result as a labeled text block.
///
/// For the infeasible-spacing sentinel the block carries an explicit
/// note instead of eight NaN lines.
pub fn render_text(config: &BeamConfig, result: &SweepResult) -> String {
    let mut out = String::new();
    out.push_str("--- Beam Analysis Results ---\n");
    out.push_str(&format!(
        "Span L = {:.1} m, W1 = {:.1} kN, W2 = {:.1} kN, d = {:.1} m\n",
        config.span_m, config.w1_kn, config.w2_kn, config.spacing_m
    ));

    if result.is_undefined() {
        out.push_str("Configuration is unanalyzable: load spacing exceeds span (d > L).\n");
        return out;
    }

    out.push_str(&format!(
        "Max Reaction at A (kN): {:.3}\n",
        result.max_reaction_a_kn
    ));
    out.push_str(&format!(
        "Max Reaction at B (kN): {:.3}\n",
        result.max_reaction_b_kn
    ));
    out.push_str(&format!("BM at A (kNm): {:.3}\n", result.moment_at_a_knm));
    out.push_str(&format!(
        "SF at Midspan (kN): {:.3}\n",
        result.midspan_shear_kn
    ));
    out.push_str(&format!("Max SF (kN): {:.3}\n", result.max_shear_kn));
    out.push_str(&format!(
        "Location of Max SF (m): {:.3}\n",
        result.max_shear_position_m
    ));
    out.push_str(&format!("Max BM (kNm): {:.3}\n", result.max_moment_knm));
    out.push_str(&format!(
        "Location of Max BM (m): {:.3}\n",
        result.max_moment_position_m
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;

    #[test]
    fn test_report_lists_all_result_fields() {
        let config = BeamConfig::new(10.0, 5.0, 3.0, 2.0);
        let result = analyze(&config).unwrap();
        let text = render_text(&config, &result);

        assert!(text.contains("--- Beam Analysis Results ---"));
        assert!(text.contains("Max Reaction at A (kN): 7.400"));
        assert!(text.contains("Max Reaction at B (kN): 7.000"));
        assert!(text.contains("BM at A (kNm): 4.800"));
        assert!(text.contains("SF at Midspan (kN):"));
        assert!(text.contains("Max SF (kN):"));
        assert!(text.contains("Location of Max SF (m):"));
        assert!(text.contains("Max BM (kNm):"));
        assert!(text.contains("Location of Max BM (m):"));
    }

    #[test]
    fn test_report_flags_infeasible_spacing() {
        let config = BeamConfig::new(6.0, 10.0, 10.0, 7.0);
        let result = analyze(&config).unwrap();
        let text = render_text(&config, &result);

        assert!(text.contains("load spacing exceeds span"));
        assert!(!text.contains("NaN"));
    }
}
