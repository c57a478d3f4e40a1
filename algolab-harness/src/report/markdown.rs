//! Markdown rendering of suite reports, suitable for CI artifacts.

use super::SuiteReport;
use crate::complexity_fit::FitBasis;

/// Render `report` as a human-readable markdown document: a timing table
/// per case, a declared-vs-fitted complexity table, and any regressions.
pub fn render_markdown(report: &SuiteReport) -> String {
    let mut md = String::new();

    md.push_str(&format!("# Suite: {}\n\n", report.suite));
    md.push_str(&format!(
        "*Seed {} | sizes {:?} | {} warmup, {} samples | {}*\n\n",
        report.seed,
        report.sizes,
        report.warmup,
        report.samples,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
    ));

    md.push_str("## Timings\n\n");
    md.push_str("| Algorithm | Case | Size | Median | Mean | P95 | Comparisons | Moves | Flags |\n");
    md.push_str("|---|---|---:|---:|---:|---:|---:|---:|---|\n");
    for r in &report.records {
        let mut flags = String::new();
        if !r.verified {
            flags.push_str("FAILED ");
        }
        if r.truncated {
            flags.push_str("truncated");
        }
        md.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} | {} | {} | {} |\n",
            r.algorithm,
            r.case,
            r.size,
            fmt_ns(r.stats.median_ns),
            fmt_ns(r.stats.mean_ns),
            fmt_ns(r.stats.p95_ns),
            r.stats.comparisons,
            r.stats.moves,
            flags.trim_end(),
        ));
    }
    md.push('\n');

    let comparison_fits: Vec<_> = report
        .fits
        .iter()
        .filter(|f| f.basis == FitBasis::Comparisons)
        .collect();
    if !comparison_fits.is_empty() {
        md.push_str("## Complexity (comparison counts)\n\n");
        md.push_str("| Algorithm | Case | Declared | Fitted | Score | Match |\n");
        md.push_str("|---|---|---|---|---:|---|\n");
        for f in comparison_fits {
            let declared = f
                .declared
                .map(|c| c.notation().to_string())
                .unwrap_or_else(|| "-".to_string());
            let mark = match f.matches_declared {
                Some(true) => "yes",
                Some(false) => "NO",
                None => "-",
            };
            md.push_str(&format!(
                "| {} | {} | {} | {} | {:.4} | {} |\n",
                f.algorithm,
                f.case,
                declared,
                f.class.notation(),
                f.score,
                mark,
            ));
        }
        md.push('\n');
    }

    if report.regressions.is_empty() {
        md.push_str("No regressions against baseline.\n");
    } else {
        md.push_str("## Regressions\n\n");
        md.push_str("| Algorithm | Case | Size | Baseline | Current | Ratio |\n");
        md.push_str("|---|---|---:|---:|---:|---:|\n");
        for r in &report.regressions {
            md.push_str(&format!(
                "| {} | {} | {} | {} | {} | {:.2}x |\n",
                r.algorithm,
                r.case,
                r.size,
                fmt_ns(r.baseline_median_ns),
                fmt_ns(r.current_median_ns),
                r.ratio,
            ));
        }
    }

    md
}

/// Human-scale duration formatting from nanoseconds.
fn fmt_ns(ns: f64) -> String {
    if !ns.is_finite() || ns < 0.0 {
        return "-".to_string();
    }
    if ns < 1_000.0 {
        format!("{:.0}ns", ns)
    } else if ns < 1_000_000.0 {
        format!("{:.1}us", ns / 1_000.0)
    } else if ns < 1_000_000_000.0 {
        format!("{:.1}ms", ns / 1_000_000.0)
    } else {
        format!("{:.2}s", ns / 1_000_000_000.0)
    }
}
