use serde::{Deserialize, Serialize};

use crate::catalog::ProjectCatalog;
use crate::project::{Project, ProjectStatus};

/// The current filter selection: three independent optional dimensions.
///
/// Setters only ever overwrite. Toggle-on-reselect (clicking the already
/// active pill clears it) belongs to the caller: compare the candidate with
/// the current value and pass `None` when they match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub year: Option<i32>,
    pub status: Option<ProjectStatus>,
    pub category: Option<String>,
}

impl FilterSelection {
    pub fn select_year(&mut self, year: Option<i32>) {
        self.year = year;
    }

    pub fn select_status(&mut self, status: Option<ProjectStatus>) {
        self.status = status;
    }

    pub fn select_category(&mut self, category: Option<String>) {
        self.category = category;
    }

    /// Reset all three dimensions in a single assignment, so no reader can
    /// observe a partially cleared triple.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn has_active_filters(&self) -> bool {
        self.year.is_some() || self.status.is_some() || self.category.is_some()
    }

    /// Conjunction across the three dimensions: every active dimension must
    /// match, an absent one always does. Values outside the catalog's domain
    /// are accepted and simply match nothing.
    pub fn matches(&self, project: &Project) -> bool {
        if let Some(year) = self.year {
            if project.year != year {
                return false;
            }
        }
        if let Some(status) = self.status {
            if project.status != status {
                return false;
            }
        }
        if let Some(category) = self.category.as_deref() {
            if project.category != category {
                return false;
            }
        }
        true
    }
}

/// A filter selection applied to a catalog: the read side of the page.
#[derive(Debug, Clone)]
pub struct FilterView<'a> {
    catalog: &'a ProjectCatalog,
    selection: FilterSelection,
}

impl<'a> FilterView<'a> {
    pub fn new(catalog: &'a ProjectCatalog) -> Self {
        Self::with_selection(catalog, FilterSelection::default())
    }

    pub fn with_selection(catalog: &'a ProjectCatalog, selection: FilterSelection) -> Self {
        Self { catalog, selection }
    }

    pub fn catalog(&self) -> &'a ProjectCatalog {
        self.catalog
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn select_year(&mut self, year: Option<i32>) {
        self.selection.select_year(year);
    }

    pub fn select_status(&mut self, status: Option<ProjectStatus>) {
        self.selection.select_status(status);
    }

    pub fn select_category(&mut self, category: Option<String>) {
        self.selection.select_category(category);
    }

    pub fn clear(&mut self) {
        self.selection.clear();
    }

    pub fn has_active_filters(&self) -> bool {
        self.selection.has_active_filters()
    }

    /// The visible subset, in the catalog's original order. A stable filter:
    /// surviving projects are never re-sorted.
    pub fn visible_projects(&self) -> Vec<&'a Project> {
        self.catalog
            .all()
            .iter()
            .filter(|project| self.selection.matches(project))
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.visible_projects().len()
    }

    pub fn total_count(&self) -> usize {
        self.catalog.len()
    }
}
