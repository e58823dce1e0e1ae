use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use thiserror::Error;

/// Delivery status of a project. This is the one authoritative declaration;
/// every consumer (filtering, badges) matches it exhaustively.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Production,
    #[serde(rename = "UAT")]
    Uat,
    #[serde(rename = "POC")]
    Poc,
}

impl ProjectStatus {
    /// Declared filter-option order. Independent of any dataset, so a status
    /// with zero matching projects still shows up as a selectable option.
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Production,
        ProjectStatus::Uat,
        ProjectStatus::Poc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Production => "Production",
            ProjectStatus::Uat => "UAT",
            ProjectStatus::Poc => "POC",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("Unknown project status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for ProjectStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "production" => Ok(ProjectStatus::Production),
            "uat" => Ok(ProjectStatus::Uat),
            "poc" => Ok(ProjectStatus::Poc),
            _ => Err(UnknownStatus(value.trim().to_string())),
        }
    }
}

/// One project case study. Records are immutable once loaded; the catalog
/// never creates or destroys them at runtime.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub year: i32,
    pub status: ProjectStatus,
    pub role: String,
    pub tech_stack: Vec<String>,
    pub category: String,
    pub problem: Vec<String>,
    pub solution: Vec<String>,
    pub impact: Vec<String>,
    #[serde(skip)]
    pub file_path: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ProjectParseError {
    #[error("Missing front matter delimiter")]
    MissingFrontMatter,
    #[error("Missing closing --- for front matter")]
    MissingFrontMatterEnd,
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Invalid year: {0}")]
    InvalidYear(String),
    #[error(transparent)]
    Status(#[from] UnknownStatus),
    #[error("Invalid project file: {0}")]
    Invalid(String),
}

pub fn split_front_matter(text: &str) -> Result<(String, String), ProjectParseError> {
    if !text.starts_with("---") {
        return Err(ProjectParseError::MissingFrontMatter);
    }
    let lines: Vec<&str> = text.lines().collect();
    if lines.is_empty() || lines[0].trim() != "---" {
        return Err(ProjectParseError::MissingFrontMatter);
    }
    let mut end_idx = None;
    for (idx, line) in lines.iter().enumerate().skip(1) {
        if line.trim() == "---" {
            end_idx = Some(idx);
            break;
        }
    }
    let end_idx = end_idx.ok_or(ProjectParseError::MissingFrontMatterEnd)?;
    let front = lines[1..end_idx].join("\n");
    let body = lines[end_idx + 1..].join("\n");
    Ok((front, body))
}

pub fn parse_project_file(path: &Path) -> Result<Project, ProjectParseError> {
    let text =
        fs::read_to_string(path).map_err(|err| ProjectParseError::Invalid(err.to_string()))?;
    parse_project_str(&text, Some(path))
}

pub fn parse_project_str(text: &str, path: Option<&Path>) -> Result<Project, ProjectParseError> {
    let (front, body) = split_front_matter(text)?;
    let data = parse_front_matter(&front)?;

    let id = data
        .get("id")
        .and_then(value_to_string)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .or_else(|| path.map(id_from_filename))
        .ok_or(ProjectParseError::MissingField("id"))?;

    let year_raw = data
        .get("year")
        .and_then(value_to_string)
        .ok_or(ProjectParseError::MissingField("year"))?;
    let year = year_raw
        .trim()
        .parse::<i32>()
        .map_err(|_| ProjectParseError::InvalidYear(year_raw.trim().to_string()))?;

    let status_raw = data
        .get("status")
        .and_then(value_to_string)
        .ok_or(ProjectParseError::MissingField("status"))?;
    let status = status_raw.parse::<ProjectStatus>()?;

    let sections = parse_sections(&body);

    Ok(Project {
        id,
        title: string_field(&data, "title"),
        year,
        status,
        role: string_field(&data, "role"),
        tech_stack: list_field(data.get("tech_stack")),
        category: string_field(&data, "category"),
        problem: sections.problem,
        solution: sections.solution,
        impact: sections.impact,
        file_path: path.map(|p| p.to_path_buf()),
    })
}

/// Load every `.md` project file under `dir`, sorted by file name for a
/// stable catalog order. Files that fail to parse are skipped.
pub fn load_projects(dir: &Path) -> Vec<Project> {
    let mut entries: Vec<PathBuf> = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().map(|ext| ext == "md").unwrap_or(false))
            .collect(),
        Err(_) => Vec::new(),
    };
    entries.sort();

    let mut projects = Vec::new();
    for path in entries {
        match parse_project_file(&path) {
            Ok(project) => projects.push(project),
            Err(_) => continue,
        }
    }
    projects
}

pub fn is_slug(id: &str) -> bool {
    let re = Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("regex");
    re.is_match(id)
}

fn parse_front_matter(front: &str) -> Result<HashMap<String, Value>, ProjectParseError> {
    let value: Value = serde_yaml::from_str(front)
        .map_err(|err| ProjectParseError::Invalid(err.to_string()))?;
    let Value::Mapping(map) = value else {
        return Err(ProjectParseError::Invalid(
            "front matter is not a mapping".to_string(),
        ));
    };
    let mut data = HashMap::new();
    for (key, value) in map {
        if let Some(key_str) = value_to_string(&key) {
            data.insert(key_str, value);
        }
    }
    Ok(data)
}

#[derive(Default)]
struct Sections {
    problem: Vec<String>,
    solution: Vec<String>,
    impact: Vec<String>,
}

#[derive(Copy, Clone)]
enum SectionKind {
    Other,
    Problem,
    Solution,
    Impact,
}

/// Pull the `## Problem` / `## Solution` / `## Impact` bullet lists out of
/// the markdown body. Headings match case-insensitively; bullets may use
/// `-` or `*`. Bullets under any other heading are ignored.
fn parse_sections(body: &str) -> Sections {
    let mut sections = Sections::default();
    let mut current = SectionKind::Other;
    for line in body.lines() {
        let trimmed = line.trim();
        if let Some(heading) = trimmed.strip_prefix("##") {
            current = match heading.trim().to_lowercase().as_str() {
                "problem" => SectionKind::Problem,
                "solution" => SectionKind::Solution,
                "impact" => SectionKind::Impact,
                _ => SectionKind::Other,
            };
            continue;
        }
        let Some(item) = trimmed
            .strip_prefix("- ")
            .or_else(|| trimmed.strip_prefix("* "))
        else {
            continue;
        };
        let item = item.trim();
        if item.is_empty() {
            continue;
        }
        match current {
            SectionKind::Problem => sections.problem.push(item.to_string()),
            SectionKind::Solution => sections.solution.push(item.to_string()),
            SectionKind::Impact => sections.impact.push(item.to_string()),
            SectionKind::Other => {}
        }
    }
    sections
}

fn string_field(data: &HashMap<String, Value>, key: &str) -> String {
    data.get(key)
        .and_then(value_to_string)
        .unwrap_or_default()
        .trim()
        .to_string()
}

fn list_field(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Sequence(seq)) => seq
            .iter()
            .filter_map(value_to_string)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        Some(Value::String(s)) => parse_list_string(s),
        _ => Vec::new(),
    }
}

fn parse_list_string(value: &str) -> Vec<String> {
    let raw = value.trim();
    if raw.is_empty() || raw == "[]" {
        return Vec::new();
    }
    let inner = if raw.starts_with('[') && raw.ends_with(']') {
        raw[1..raw.len() - 1].trim()
    } else {
        raw
    };
    if inner.is_empty() {
        return Vec::new();
    }
    inner
        .split(',')
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

fn id_from_filename(path: &Path) -> String {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
    // Seeded files carry a numeric ordering prefix ("01-"); strip it.
    let re = Regex::new(r"^\d+[-. ]+").expect("regex");
    re.replace(stem, "").trim().to_lowercase()
}

fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(val) => Some(val.clone()),
        Value::Number(num) => Some(num.to_string()),
        Value::Bool(val) => Some(val.to_string()),
        _ => None,
    }
}
