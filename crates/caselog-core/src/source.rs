use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::{find_config_root, load_config, CaselogConfig};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("No project catalog found under {0}")]
    NotFound(PathBuf),
}

/// Which on-disk layout the catalog was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogLayout {
    /// `portfolio/projects/` under the repo root.
    Portfolio,
    /// `.caselog/projects/` under the repo root.
    HiddenCaselog,
    /// A bare `projects/` directory at the repo root.
    RootProjects,
    /// A directory named by the config `root_dir` override.
    Custom,
}

#[derive(Debug, Clone)]
pub struct CatalogResolution {
    pub projects_dir: PathBuf,
    pub layout: CatalogLayout,
    pub repo_root: PathBuf,
    pub config: Option<CaselogConfig>,
}

pub fn resolve_projects_dir(root: &Path) -> Result<PathBuf, SourceError> {
    Ok(resolve_catalog(root)?.projects_dir)
}

/// Resolve the catalog directory for `root`: an explicit path wins, then a
/// config `root_dir` override, then the default layouts in order.
pub fn resolve_catalog(root: &Path) -> Result<CatalogResolution, SourceError> {
    let repo_root = derive_repo_root(root);
    let config_root = find_config_root(root).unwrap_or_else(|| repo_root.clone());
    let config = load_config(&config_root);

    if let Some(resolution) = resolve_explicit_root(root, &config_root, config.as_ref()) {
        return Ok(resolution);
    }
    if let Some(resolution) = resolve_from_config(&config_root, config.as_ref()) {
        return Ok(resolution);
    }
    if let Some(resolution) = resolve_default_dirs(&config_root, config.as_ref()) {
        return Ok(resolution);
    }
    Err(SourceError::NotFound(root.to_path_buf()))
}

/// Walk upward from `start` until a catalog directory turns up.
pub fn locate_projects_dir(start: &Path) -> Result<PathBuf, SourceError> {
    let start = start.canonicalize().unwrap_or_else(|_| start.to_path_buf());
    if let Some(config_root) = find_config_root(&start) {
        if let Ok(resolution) = resolve_catalog(&config_root) {
            return Ok(resolution.projects_dir);
        }
    }
    for candidate in start.ancestors() {
        if is_named(candidate, "projects") && candidate.is_dir() {
            return Ok(candidate.to_path_buf());
        }
        if candidate.join("portfolio").join("projects").is_dir() {
            return Ok(candidate.join("portfolio").join("projects"));
        }
        if candidate.join(".caselog").join("projects").is_dir() {
            return Ok(candidate.join(".caselog").join("projects"));
        }
        if candidate.join("projects").is_dir() {
            return Ok(candidate.join("projects"));
        }
    }
    Err(SourceError::NotFound(start))
}

fn resolve_explicit_root(
    root: &Path,
    repo_root: &Path,
    config: Option<&CaselogConfig>,
) -> Option<CatalogResolution> {
    if is_named(root, "projects") && root.is_dir() {
        let layout = match root.parent() {
            Some(parent) if is_named(parent, "portfolio") => CatalogLayout::Portfolio,
            Some(parent) if is_named(parent, ".caselog") => CatalogLayout::HiddenCaselog,
            _ => CatalogLayout::RootProjects,
        };
        return Some(resolution_for(root, layout, repo_root, config));
    }
    if is_named(root, "portfolio") && root.join("projects").is_dir() {
        return Some(resolution_for(
            &root.join("projects"),
            CatalogLayout::Portfolio,
            repo_root,
            config,
        ));
    }
    if is_named(root, ".caselog") && root.join("projects").is_dir() {
        return Some(resolution_for(
            &root.join("projects"),
            CatalogLayout::HiddenCaselog,
            repo_root,
            config,
        ));
    }
    None
}

fn resolve_from_config(
    repo_root: &Path,
    config: Option<&CaselogConfig>,
) -> Option<CatalogResolution> {
    let root_dir = config
        .and_then(|cfg| cfg.root_dir.as_deref())
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())?;
    let candidate = repo_root.join(root_dir);
    if is_named(&candidate, "projects") && candidate.is_dir() {
        return Some(resolution_for(
            &candidate,
            CatalogLayout::Custom,
            repo_root,
            config,
        ));
    }
    if candidate.join("projects").is_dir() {
        return Some(resolution_for(
            &candidate.join("projects"),
            CatalogLayout::Custom,
            repo_root,
            config,
        ));
    }
    None
}

fn resolve_default_dirs(
    repo_root: &Path,
    config: Option<&CaselogConfig>,
) -> Option<CatalogResolution> {
    let portfolio = repo_root.join("portfolio").join("projects");
    if portfolio.is_dir() {
        return Some(resolution_for(
            &portfolio,
            CatalogLayout::Portfolio,
            repo_root,
            config,
        ));
    }
    let hidden = repo_root.join(".caselog").join("projects");
    if hidden.is_dir() {
        return Some(resolution_for(
            &hidden,
            CatalogLayout::HiddenCaselog,
            repo_root,
            config,
        ));
    }
    let projects = repo_root.join("projects");
    if projects.is_dir() {
        return Some(resolution_for(
            &projects,
            CatalogLayout::RootProjects,
            repo_root,
            config,
        ));
    }
    None
}

fn derive_repo_root(root: &Path) -> PathBuf {
    if is_named(root, "projects") {
        let parent = root.parent().unwrap_or(root);
        if is_named(parent, "portfolio") || is_named(parent, ".caselog") {
            return parent.parent().unwrap_or(parent).to_path_buf();
        }
        return parent.to_path_buf();
    }
    if is_named(root, "portfolio") || is_named(root, ".caselog") {
        return root.parent().unwrap_or(root).to_path_buf();
    }
    root.to_path_buf()
}

fn resolution_for(
    dir: &Path,
    layout: CatalogLayout,
    repo_root: &Path,
    config: Option<&CaselogConfig>,
) -> CatalogResolution {
    CatalogResolution {
        projects_dir: dir.to_path_buf(),
        layout,
        repo_root: repo_root.to_path_buf(),
        config: config.cloned(),
    }
}

fn is_named(path: &Path, name: &str) -> bool {
    path.file_name()
        .map(|segment| segment.to_string_lossy().eq_ignore_ascii_case(name))
        .unwrap_or(false)
}
