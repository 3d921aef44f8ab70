use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use std::time::Duration;

use super::DistributionResult;

/// Candidates listed per seed in console and markdown output.
const TOP_DEVIATIONS: usize = 5;

fn worst_candidates(result: &DistributionResult) -> Vec<&super::CandidateStat> {
    let mut stats: Vec<_> = result.stats.iter().collect();
    stats.sort_by(|a, b| b.deviation.total_cmp(&a.deviation));
    stats.truncate(TOP_DEVIATIONS);
    stats
}

pub fn generate_console_report(
    out: &mut dyn Write,
    results: &[DistributionResult],
    total_duration: Duration,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Distribution Results Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "===============================".cyan())?;

    let passed = results.iter().filter(|r| r.passed).count();
    writeln!(out, "Seeds run: {}", results.len())?;
    writeln!(out, "Passed: {}", passed.to_string().green())?;
    writeln!(out, "Failed: {}", (results.len() - passed).to_string().red())?;
    writeln!(out, "Total time: {total_duration:?}")?;
    writeln!(out)?;

    for result in results {
        let status = if result.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };
        writeln!(
            out,
            "{} seed {} ({}, {} candidates)",
            status,
            result.seed.to_string().bold(),
            result.mode.label(),
            result.candidate_count
        )?;
        writeln!(
            out,
            "   Max deviation: {:.5} (tolerance {:.5})",
            result.max_deviation, result.tolerance
        )?;
        if result.no_match > 0 {
            writeln!(out, "   No match: {}/{}", result.no_match, result.iterations)?;
        }
        for stat in worst_candidates(result) {
            writeln!(
                out,
                "   {} {:40} expected {:.5} observed {:.5}",
                stat.code, stat.title, stat.expected, stat.observed
            )?;
        }
        for violation in &result.violations {
            writeln!(out, "     • filter violation: {}", violation.red())?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn generate_json_report(out: &mut dyn Write, results: &[DistributionResult]) -> Result<()> {
    let json_output = serde_json::to_string_pretty(results)?;
    writeln!(out, "{json_output}")?;
    Ok(())
}

pub fn generate_markdown_report(out: &mut dyn Write, results: &[DistributionResult]) -> Result<()> {
    writeln!(out, "# Episode Picker Distribution Results\n")?;

    let passed = results.iter().filter(|r| r.passed).count();
    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Seeds run**: {}", results.len())?;
    writeln!(out, "- **Passed**: {passed}")?;
    writeln!(out, "- **Failed**: {}\n", results.len() - passed)?;

    writeln!(out, "## Detailed Results\n")?;
    for result in results {
        let status = if result.passed { "✅" } else { "❌" };
        writeln!(out, "### {} Seed {}\n", status, result.seed)?;
        writeln!(out, "- **Mode**: {}", result.mode.label())?;
        writeln!(out, "- **Iterations**: {}", result.iterations)?;
        writeln!(out, "- **Candidates**: {}", result.candidate_count)?;
        writeln!(
            out,
            "- **Max deviation**: {:.5} (tolerance {:.5})",
            result.max_deviation, result.tolerance
        )?;
        if !result.violations.is_empty() {
            writeln!(out, "- **Filter violations**:")?;
            for violation in &result.violations {
                writeln!(out, "  - {violation}")?;
            }
        }
        if !result.stats.is_empty() {
            writeln!(out, "\n| Episode | Title | Expected | Observed |")?;
            writeln!(out, "|---|---|---|---|")?;
            for stat in worst_candidates(result) {
                writeln!(
                    out,
                    "| {} | {} | {:.5} | {:.5} |",
                    stat.code, stat.title, stat.expected, stat.observed
                )?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
