use chrono::Utc;
use serde::Serialize;

use crate::catalog::ProjectCatalog;
use crate::filter::{FilterSelection, FilterView};
use crate::project::{Project, ProjectStatus};

/// Badge label for a status. Exhaustive over the enum, so adding a status
/// without a badge is a compile error rather than a missing style entry.
pub fn status_badge(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Production => "[Production]",
        ProjectStatus::Uat => "[UAT]",
        ProjectStatus::Poc => "[POC]",
    }
}

/// Render one project card. Collapsed shows the header block only; expanded
/// adds the Problem / Solution / Impact sections.
pub fn render_card(project: &Project, expanded: bool) -> String {
    let mut lines = vec![
        project.title.clone(),
        format!(
            "  {}  {}  {}",
            project.year,
            status_badge(project.status),
            project.role
        ),
    ];
    if !project.tech_stack.is_empty() {
        lines.push(format!("  tech: {}", project.tech_stack.join(", ")));
    }
    if expanded {
        push_section(&mut lines, "Problem", &project.problem);
        push_section(&mut lines, "Solution", &project.solution);
        push_section(&mut lines, "Impact", &project.impact);
    }
    lines.join("\n")
}

/// Render the filtered list: status line when a filter is active, the cards
/// (or the no-match affordance), and the footer summary.
pub fn render_list(view: &FilterView<'_>, expanded: bool) -> String {
    let visible = view.visible_projects();
    let mut lines: Vec<String> = Vec::new();

    if view.has_active_filters() {
        lines.push(format!(
            "Showing {} of {} projects",
            visible.len(),
            view.total_count()
        ));
        lines.push(String::new());
    }

    if visible.is_empty() {
        lines.push("No projects match the current filters.".to_string());
        lines.push("Drop a filter flag, or run `caselog list` with none, to see everything.".to_string());
    } else {
        for project in &visible {
            lines.push(render_card(project, expanded));
            lines.push(String::new());
        }
    }

    lines.push(footer(view.catalog()));
    lines.join("\n") + "\n"
}

pub fn render_facets(catalog: &ProjectCatalog) -> String {
    let years: Vec<String> = catalog.years().iter().map(|y| y.to_string()).collect();
    let statuses: Vec<String> = catalog
        .statuses()
        .iter()
        .map(|s| s.to_string())
        .collect();
    let lines = vec![
        format!("Year: {}", years.join(", ")),
        format!("Status: {}", statuses.join(", ")),
        format!("Category: {}", catalog.categories().join(", ")),
        format!("Tech: {}", catalog.tech_stacks().join(", ")),
    ];
    lines.join("\n") + "\n"
}

fn footer(catalog: &ProjectCatalog) -> String {
    match catalog.years().first() {
        Some(last_updated) => format!(
            "{} projects documented • Last updated {}",
            catalog.len(),
            last_updated
        ),
        None => "0 projects documented".to_string(),
    }
}

fn push_section(lines: &mut Vec<String>, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    lines.push(String::new());
    lines.push(format!("  {heading}"));
    for item in items {
        lines.push(format!("    - {item}"));
    }
}

/// JSON handoff for `list --json`: the visible subset plus the counts and
/// the selection that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct ListDocument {
    pub generated_at: String,
    pub selection: FilterSelection,
    pub visible_count: usize,
    pub total_count: usize,
    pub projects: Vec<Project>,
}

pub fn list_document(view: &FilterView<'_>) -> ListDocument {
    let projects: Vec<Project> = view.visible_projects().into_iter().cloned().collect();
    ListDocument {
        generated_at: now_rfc3339(),
        selection: view.selection().clone(),
        visible_count: projects.len(),
        total_count: view.total_count(),
        projects,
    }
}

pub fn facets_document(catalog: &ProjectCatalog) -> serde_json::Value {
    serde_json::json!({
        "years": catalog.years(),
        "statuses": catalog.statuses(),
        "categories": catalog.categories(),
        "tech_stacks": catalog.tech_stacks(),
    })
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapsed_card_omits_sections() {
        let catalog = ProjectCatalog::builtin();
        let project = catalog.get("observability-platform").expect("project");
        let card = render_card(project, false);
        assert!(card.contains("Unified Observability Platform"));
        assert!(card.contains("[Production]"));
        assert!(card.contains("tech: Grafana"));
        assert!(!card.contains("Problem"));
    }

    #[test]
    fn expanded_card_renders_all_three_sections() {
        let catalog = ProjectCatalog::builtin();
        let project = catalog.get("api-gateway-poc").expect("project");
        let card = render_card(project, true);
        assert!(card.contains("  Problem"));
        assert!(card.contains("  Solution"));
        assert!(card.contains("  Impact"));
        assert!(card.contains("- POC demonstrated 40% reduction in inter-service latency"));
    }

    #[test]
    fn list_shows_status_line_only_when_filtered() {
        let catalog = ProjectCatalog::builtin();
        let mut view = FilterView::new(&catalog);
        let unfiltered = render_list(&view, false);
        assert!(!unfiltered.contains("Showing"));
        assert!(unfiltered.contains("5 projects documented • Last updated 2024"));

        view.select_status(Some(ProjectStatus::Production));
        let filtered = render_list(&view, false);
        assert!(filtered.contains("Showing 3 of 5 projects"));
    }

    #[test]
    fn empty_result_renders_the_no_match_affordance() {
        let catalog = ProjectCatalog::builtin();
        let mut view = FilterView::new(&catalog);
        view.select_year(Some(1999));
        let out = render_list(&view, false);
        assert!(out.contains("Showing 0 of 5 projects"));
        assert!(out.contains("No projects match the current filters."));
    }

    #[test]
    fn facets_render_in_their_contract_orders() {
        let catalog = ProjectCatalog::builtin();
        let out = render_facets(&catalog);
        assert!(out.contains("Year: 2024, 2023"));
        assert!(out.contains("Status: Production, UAT, POC"));
        assert!(out.contains("Category: Infrastructure, Security, DevOps, Architecture"));
    }

    #[test]
    fn list_document_carries_counts_and_selection() {
        let catalog = ProjectCatalog::builtin();
        let mut view = FilterView::new(&catalog);
        view.select_category(Some("Security".to_string()));
        let doc = list_document(&view);
        assert_eq!(doc.visible_count, 1);
        assert_eq!(doc.total_count, 5);
        assert_eq!(doc.projects[0].id, "sso-implementation");
        assert_eq!(doc.selection.category.as_deref(), Some("Security"));
        assert!(!doc.generated_at.is_empty());
    }

    #[test]
    fn facets_document_serializes_statuses_in_declared_order() {
        let catalog = ProjectCatalog::builtin();
        let doc = facets_document(&catalog);
        let statuses: Vec<&str> = doc["statuses"]
            .as_array()
            .expect("array")
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert_eq!(statuses, vec!["Production", "UAT", "POC"]);
    }
}
