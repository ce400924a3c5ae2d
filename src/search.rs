use serde::{Deserialize, Serialize};

use crate::catalog::models::{Priority, Project};

pub const CATEGORY_ALL: &str = "all";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    pub query: String,
    pub category: String,
    pub status: Vec<String>,
    pub priority: Vec<Priority>,
    pub tags: Vec<String>,
    pub has_deadline: Option<bool>,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: CATEGORY_ALL.to_string(),
            status: Vec::new(),
            priority: Vec::new(),
            tags: Vec::new(),
            has_deadline: None,
        }
    }
}

impl SearchFilters {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
            || self.category != CATEGORY_ALL
            || !self.status.is_empty()
            || !self.priority.is_empty()
            || !self.tags.is_empty()
            || self.has_deadline.is_some()
    }

    pub fn toggle_status(&mut self, status: &str) {
        toggle(&mut self.status, status.to_string());
    }

    pub fn toggle_priority(&mut self, priority: Priority) {
        toggle(&mut self.priority, priority);
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        toggle(&mut self.tags, tag.to_string());
    }
}

// All six predicates are ANDed; an unset dimension is vacuously true.
pub fn filter_projects<'a>(filters: &SearchFilters, projects: &'a [Project]) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|project| matches(filters, project))
        .collect()
}

pub fn available_categories(projects: &[Project]) -> Vec<String> {
    unique(projects.iter().map(|project| project.category.clone()))
}

pub fn available_tags(projects: &[Project]) -> Vec<String> {
    unique(projects.iter().flat_map(|project| project.tags.iter().cloned()))
}

fn matches(filters: &SearchFilters, project: &Project) -> bool {
    let query = filters.query.to_lowercase();
    let matches_query = query.is_empty()
        || project.title.to_lowercase().contains(&query)
        || project.description.to_lowercase().contains(&query)
        || project.tags.iter().any(|tag| tag.to_lowercase().contains(&query));

    let matches_category = filters.category == CATEGORY_ALL || project.category == filters.category;

    let matches_status = filters.status.is_empty() || filters.status.contains(&project.status);

    let matches_priority =
        filters.priority.is_empty() || filters.priority.contains(&project.priority);

    let matches_tags =
        filters.tags.is_empty() || filters.tags.iter().any(|tag| project.tags.contains(tag));

    let matches_deadline = match filters.has_deadline {
        None => true,
        Some(expected) => project.deadline.is_some() == expected,
    };

    matches_query
        && matches_category
        && matches_status
        && matches_priority
        && matches_tags
        && matches_deadline
}

fn toggle<T: PartialEq>(selected: &mut Vec<T>, value: T) {
    if let Some(position) = selected.iter().position(|existing| *existing == value) {
        selected.remove(position);
    } else {
        selected.push(value);
    }
}

fn unique(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}
