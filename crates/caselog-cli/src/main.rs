use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::{CommandFactory, Parser, Subcommand};

use caselog_core::bootstrap::seed_catalog;
use caselog_core::catalog::ProjectCatalog;
use caselog_core::config::resolve_default_expanded;
use caselog_core::filter::{FilterSelection, FilterView};
use caselog_core::project::ProjectStatus;
use caselog_core::render;
use caselog_core::source::{locate_projects_dir, resolve_catalog};

#[derive(Parser)]
#[command(name = "caselog", version, about = "Filterable catalog of project case studies")]
struct Cli {
    /// Repository root to search for a project catalog
    #[arg(long, global = true)]
    root: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List projects, filtered by any combination of year, status, and category
    List {
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        status: Option<ProjectStatus>,
        #[arg(long)]
        category: Option<String>,
        /// Include the Problem / Solution / Impact sections on every card
        #[arg(long)]
        expanded: bool,
        /// Emit the visible projects as JSON instead of cards
        #[arg(long)]
        json: bool,
    },
    /// Show one project card in full
    Show { id: String },
    /// Print the filter facets derived from the catalog
    Facets {
        #[arg(long)]
        json: bool,
    },
    /// Check the catalog for data-quality findings
    Doctor,
    /// Seed a catalog directory with the builtin sample projects
    Init {
        /// Target directory (defaults to <root>/portfolio/projects)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Print version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let root = cli.root.clone().unwrap_or_else(|| PathBuf::from("."));

    match cli.command {
        Some(Command::List {
            year,
            status,
            category,
            expanded,
            json,
        }) => {
            let catalog = load_catalog(cli.root.as_deref());
            let mut selection = FilterSelection::default();
            selection.select_year(year);
            selection.select_status(status);
            selection.select_category(category);
            let view = FilterView::with_selection(&catalog, selection);
            if json {
                let doc = render::list_document(&view);
                println!("{}", serde_json::to_string_pretty(&doc)?);
            } else {
                let expanded = expanded || resolve_default_expanded(&root);
                print!("{}", render::render_list(&view, expanded));
            }
        }
        Some(Command::Show { id }) => {
            let catalog = load_catalog(cli.root.as_deref());
            let Some(project) = catalog.get(&id) else {
                bail!("project not found: {id}");
            };
            println!("{}", render::render_card(project, true));
        }
        Some(Command::Facets { json }) => {
            let catalog = load_catalog(cli.root.as_deref());
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&render::facets_document(&catalog))?
                );
            } else {
                print!("{}", render::render_facets(&catalog));
            }
        }
        Some(Command::Doctor) => {
            let catalog = load_catalog(cli.root.as_deref());
            let findings = catalog.validate();
            if findings.is_empty() {
                println!("ok: {} projects, no findings", catalog.len());
            } else {
                for finding in &findings {
                    println!("finding: {finding}");
                }
                bail!("{} catalog finding(s)", findings.len());
            }
        }
        Some(Command::Init { dir }) => {
            let target = dir.unwrap_or_else(|| root.join("portfolio").join("projects"));
            let written = seed_catalog(&target)?;
            for path in &written {
                println!("wrote {}", path.display());
            }
            println!(
                "{} project file(s) seeded under {}",
                written.len(),
                target.display()
            );
        }
        Some(Command::Version) => {
            println!("caselog {}", caselog_core::version());
        }
        None => {
            Cli::command().print_help()?;
            println!();
        }
    }
    Ok(())
}

/// Resolve a catalog for the invocation. An explicit `--root` is taken as
/// is; without one the search walks upward from the working directory. The
/// builtin dataset is the fallback so the tool works out of the box.
fn load_catalog(explicit_root: Option<&Path>) -> ProjectCatalog {
    if let Some(root) = explicit_root {
        return match resolve_catalog(root) {
            Ok(resolution) => ProjectCatalog::from_dir(&resolution.projects_dir),
            Err(_) => ProjectCatalog::builtin(),
        };
    }
    if let Ok(projects_dir) = locate_projects_dir(Path::new(".")) {
        return ProjectCatalog::from_dir(&projects_dir);
    }
    ProjectCatalog::builtin()
}
