//! Store-facing record types: the templates users practice against and the
//! submission snapshot an external store would persist after grading.
//!
//! The engine itself only ever consumes a template's `answer` text; everything
//! else here is typed plumbing for callers. Templates are read from a JSON
//! array on disk — there is no storage layer in this crate.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LinegradeError, Result};
use crate::model::GradingResult;

/// Practice categories a template can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Algorithm,
    English,
    Cs,
    Interview,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Algorithm => "algorithm",
            Category::English => "english",
            Category::Cs => "cs",
            Category::Interview => "interview",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = LinegradeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "algorithm" => Ok(Category::Algorithm),
            "english" => Ok(Category::English),
            "cs" => Ok(Category::Cs),
            "interview" => Ok(Category::Interview),
            _ => Err(LinegradeError::Parse(format!(
                "Unknown category: '{}'. Supported: algorithm, english, cs, interview",
                s
            ))),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a template is a free-form paragraph or a concrete problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateType {
    Paragraph,
    Problem,
}

/// A stored reference answer plus its metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub category: Category,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// The reference answer text; the `expected` input to the engine.
    pub answer: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub template_type: Option<TemplateType>,
}

/// The record shape a submission store's `create` operation accepts.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub template_id: String,
    pub template_title: String,
    pub category: Category,
    pub user_code: String,
    pub score: f64,
    pub total_lines: u32,
    pub correct_lines: u32,
}

impl Submission {
    /// Build the store record from a graded attempt.
    #[must_use]
    pub fn from_result(template: &Template, user_code: &str, result: &GradingResult) -> Self {
        Self {
            template_id: template.id.clone(),
            template_title: template.title.clone(),
            category: template.category,
            user_code: user_code.to_string(),
            score: result.accuracy,
            total_lines: result.total_lines,
            correct_lines: result.correct_lines,
        }
    }
}

/// Load a JSON array of templates from a file.
pub fn load_templates(path: &Path) -> Result<Vec<Template>> {
    let content = std::fs::read_to_string(path)?;
    let templates = serde_json::from_str(&content)?;
    Ok(templates)
}

/// Find a template by id.
pub fn find_template<'a>(templates: &'a [Template], id: &str) -> Result<&'a Template> {
    templates
        .iter()
        .find(|t| t.id == id)
        .ok_or_else(|| LinegradeError::TemplateNotFound(id.to_string()))
}
