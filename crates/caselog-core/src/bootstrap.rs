use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::catalog::ProjectCatalog;
use crate::project::Project;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Failed to write catalog files: {0}")]
    Io(#[from] std::io::Error),
}

/// Seed `dir` with the builtin dataset as editable markdown files, one per
/// project, prefixed `01-`..`05-` so the file-name sort keeps the original
/// catalog order. Existing files are left untouched.
pub fn seed_catalog(dir: &Path) -> Result<Vec<PathBuf>, BootstrapError> {
    fs::create_dir_all(dir)?;
    let catalog = ProjectCatalog::builtin();
    let mut written = Vec::new();
    for (idx, project) in catalog.all().iter().enumerate() {
        let path = dir.join(format!("{:02}-{}.md", idx + 1, project.id));
        if path.exists() {
            continue;
        }
        fs::write(&path, project_markdown(project))?;
        written.push(path);
    }
    Ok(written)
}

fn project_markdown(project: &Project) -> String {
    let mut lines = vec![
        "---".to_string(),
        format!("id: {}", project.id),
        format!("title: {}", project.title),
        format!("year: {}", project.year),
        format!("status: {}", project.status),
        format!("role: {}", project.role),
        format!("tech_stack: [{}]", project.tech_stack.join(", ")),
        format!("category: {}", project.category),
        "---".to_string(),
        String::new(),
    ];
    push_section(&mut lines, "Problem", &project.problem);
    push_section(&mut lines, "Solution", &project.solution);
    push_section(&mut lines, "Impact", &project.impact);
    lines.join("\n")
}

fn push_section(lines: &mut Vec<String>, heading: &str, items: &[String]) {
    lines.push(format!("## {heading}"));
    for item in items {
        lines.push(format!("- {item}"));
    }
    lines.push(String::new());
}
