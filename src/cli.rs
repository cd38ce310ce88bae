//! Command handler functions for the linegrade CLI.
//!
//! Each `cmd_*` function returns its output as a `String`, making them easy
//! to test without capturing stdout.

use std::fmt::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::grade::grade;
use crate::report::{MarkdownFormatter, ReportFormatter, TextFormatter};
use crate::template::{self, Category, Submission};

/// Output style for grading reports.
#[derive(Clone, ValueEnum)]
pub enum Style {
    Text,
    Markdown,
    Json,
}

/// Grade the contents of one file against another and format the result.
pub fn cmd_grade(expected_path: &Path, actual_path: &Path, style: &Style) -> Result<String> {
    let expected = std::fs::read_to_string(expected_path)
        .with_context(|| format!("Failed to read {}", expected_path.display()))?;
    let actual = std::fs::read_to_string(actual_path)
        .with_context(|| format!("Failed to read {}", actual_path.display()))?;

    let result = grade(&expected, &actual);
    format_result_with_style(&result, style)
}

/// Grade a submission file against a template from a templates JSON file.
///
/// With `submission_record`, the output is the JSON record a submission
/// store's `create` operation would accept instead of the report.
pub fn cmd_check(
    templates_path: &Path,
    template_id: &str,
    submission_path: &Path,
    style: &Style,
    submission_record: bool,
) -> Result<String> {
    let templates = template::load_templates(templates_path)
        .with_context(|| format!("Failed to load templates from {}", templates_path.display()))?;
    let template = template::find_template(&templates, template_id)?;

    let user_code = std::fs::read_to_string(submission_path)
        .with_context(|| format!("Failed to read {}", submission_path.display()))?;

    let result = grade(&template.answer, &user_code);

    if submission_record {
        let submission = Submission::from_result(template, &user_code, &result);
        let mut out = serde_json::to_string_pretty(&submission)?;
        out.push('\n');
        return Ok(out);
    }

    let mut out = String::new();
    writeln!(
        out,
        "Template: {} [{}] ({})",
        template.title, template.id, template.category
    )
    .unwrap();
    out.push('\n');
    out.push_str(&format_result_with_style(&result, style)?);
    Ok(out)
}

/// List the templates in a templates JSON file, optionally filtered by category.
pub fn cmd_templates(templates_path: &Path, category: Option<&str>) -> Result<String> {
    let mut templates = template::load_templates(templates_path)
        .with_context(|| format!("Failed to load templates from {}", templates_path.display()))?;

    if let Some(cat) = category {
        let cat = cat.parse::<Category>()?;
        templates.retain(|t| t.category == cat);
    }

    if templates.is_empty() {
        return Ok("No templates found.\n".to_string());
    }

    let mut out = String::new();
    writeln!(out, "{:<12} {:<12} TITLE", "ID", "CATEGORY").unwrap();
    writeln!(out, "{}", "-".repeat(60)).unwrap();
    for t in &templates {
        writeln!(out, "{:<12} {:<12} {}", t.id, t.category, t.title).unwrap();
    }
    Ok(out)
}

fn format_result_with_style(
    result: &crate::model::GradingResult,
    style: &Style,
) -> Result<String> {
    Ok(match style {
        Style::Text => result.format(&TextFormatter),
        Style::Markdown => result.format(&MarkdownFormatter),
        Style::Json => {
            let mut out = serde_json::to_string_pretty(result)?;
            out.push('\n');
            out
        }
    })
}
