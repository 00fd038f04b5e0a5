//! Report rendering for text and JSON output.

use colored::*;
use namescreen::prelude::*;
use std::path::Path;

const RULE: &str = "======================================================================";

/// Render the machine-readable JSON document (the engine's wire schema).
pub fn format_json(result: &MatchResult) -> String {
    result.to_json().unwrap_or_else(|_| "{}".to_string())
}

/// Render the human-readable report.
pub fn format_text(report: &ScreeningReport, verbose: bool) -> String {
    let result = &report.result;
    let mut lines: Vec<String> = Vec::new();

    lines.push(RULE.to_string());
    lines.push("ADVERSE MEDIA NAME MATCHING RESULT".bold().to_string());
    lines.push(RULE.to_string());

    lines.push(format!("Target Name: {}", result.target_name));
    lines.push(format!(
        "Analysis Date: {}",
        result.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    lines.push(String::new());

    let status = if result.match_found {
        "MATCH FOUND".red().bold().to_string()
    } else {
        "NO MATCH".green().bold().to_string()
    };
    lines.push(format!("Result: {status}"));
    lines.push(format!(
        "Confidence: {}",
        colorize_tier(result.confidence_tier)
    ));
    lines.push(format!("Method: {}", humanize(result.method.as_str())));
    lines.push(format!("Match Score: {:.1}/100", result.score));
    lines.push(String::new());

    if let (Some(article_name), Some(variant)) =
        (&result.matched_article_name, &result.matched_variant)
    {
        lines.push("Match Details:".to_string());
        lines.push(format!("  - Matched Name in Article: '{article_name}'"));
        lines.push(format!("  - Matched Name Variant: '{variant}'"));
        lines.push(String::new());
    }

    lines.push("Explanation:".to_string());
    lines.push(format!("  {}", result.explanation));
    lines.push(String::new());

    if verbose {
        lines.push("Detailed Analysis:".to_string());
        lines.push("------------------------------".to_string());

        lines.push(format!(
            "Name Variants Generated ({}):",
            report.variants.len()
        ));
        for variant in report.variants.iter() {
            lines.push(format!("  - {} [{}]", variant.text, variant.kind.as_str()));
        }
        lines.push(String::new());

        lines.push(format!(
            "Names Found in Article ({}):",
            report.candidates.len()
        ));
        if report.candidates.is_empty() {
            lines.push("  - No names detected".to_string());
        } else {
            for candidate in &report.candidates {
                lines.push(format!(
                    "  - {} [{}]",
                    candidate.text,
                    candidate.method.as_str()
                ));
            }
        }
        lines.push(String::new());
    }

    lines.push("Risk Assessment:".to_string());
    lines.push(format!("  {}", risk_line(result)));
    lines.push(String::new());

    lines.push("Recommendation:".to_string());
    lines.push(format!("  {}", result.recommendation));

    lines.join("\n")
}

fn colorize_tier(tier: ConfidenceTier) -> String {
    match tier {
        ConfidenceTier::High => tier.as_str().green().to_string(),
        ConfidenceTier::Medium => tier.as_str().yellow().to_string(),
        ConfidenceTier::Low => tier.as_str().red().to_string(),
    }
}

fn risk_line(result: &MatchResult) -> String {
    if result.match_found {
        match result.confidence_tier {
            ConfidenceTier::High => "HIGH RISK - Strong indication this article refers to the target individual"
                .red()
                .to_string(),
            _ => "MEDIUM RISK - Possible match, recommend manual review"
                .yellow()
                .to_string(),
        }
    } else {
        match result.confidence_tier {
            ConfidenceTier::High => "LOW RISK - Article likely does not refer to target individual"
                .green()
                .to_string(),
            _ => "MEDIUM RISK - Uncertain, consider manual review"
                .yellow()
                .to_string(),
        }
    }
}

/// "fuzzy_high_confidence" -> "Fuzzy High Confidence"
fn humanize(tag: &str) -> String {
    tag.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Save the rendered report, appending the format-appropriate extension
/// when missing. Write failures warn instead of failing the run.
pub fn save_report(content: &str, path: &Path, output_format: &str) {
    let extension = if output_format == "json" { "json" } else { "txt" };

    let mut path = path.to_path_buf();
    if path.extension().and_then(|e| e.to_str()) != Some(extension) {
        let name = format!(
            "{}.{extension}",
            path.file_name().and_then(|n| n.to_str()).unwrap_or("report")
        );
        path.set_file_name(name);
    }

    match std::fs::write(&path, content) {
        Ok(()) => println!("Report saved to: {}", path.display()),
        Err(e) => eprintln!("Warning: could not save report to {}: {e}", path.display()),
    }
}
