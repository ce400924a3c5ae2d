use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::editors::{Capacity, ReducePolicy};
use crate::error::{AppError, AppResult};

pub const PROJECT_CAPACITY_CHOICES: RangeInclusive<usize> = 1..=3;
pub const MIN_TITLE_CHARS: usize = 5;
pub const MIN_ABSTRACT_CHARS: usize = 50;

const SELECT_COUNT_GUIDANCE: &str = "Please select the number of projects first.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionProject {
    pub id: Uuid,
    pub title: String,
    pub abstract_text: String,
    pub originality_report: Option<String>,
    pub improved_abstract: Option<String>,
    pub uploaded_file_name: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ProjectForm {
    pub title: String,
    pub abstract_text: String,
    pub originality_report: Option<String>,
    pub improved_abstract: Option<String>,
    pub uploaded_file_name: Option<String>,
}

impl ProjectForm {
    pub fn validate(&self) -> AppResult<()> {
        if self.title.chars().count() < MIN_TITLE_CHARS {
            return Err(AppError::Validation(format!(
                "Project title must be at least {MIN_TITLE_CHARS} characters."
            )));
        }
        if self.abstract_text.chars().count() < MIN_ABSTRACT_CHARS {
            return Err(AppError::Validation(format!(
                "Project abstract must be at least {MIN_ABSTRACT_CHARS} characters."
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub enum ProjectEvent {
    CapacitySet { limit: usize },
    CapacityReduced { limit: usize, removed: Vec<SubmissionProject> },
    OverCapacity { limit: usize, count: usize },
    ProjectAdded(SubmissionProject),
    ProjectRemoved(SubmissionProject),
    ProjectUpdated(SubmissionProject),
}

#[derive(Debug)]
pub struct ProjectEditor {
    capacity: Capacity,
    projects: Vec<SubmissionProject>,
    add_form_open: bool,
    reduce_policy: ReducePolicy,
}

impl Default for ProjectEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectEditor {
    // Unlike the group editor, lowering the ceiling keeps existing entries.
    pub fn new() -> Self {
        Self::with_reduce_policy(ReducePolicy::Retain)
    }

    pub fn with_reduce_policy(reduce_policy: ReducePolicy) -> Self {
        Self {
            capacity: Capacity::new(PROJECT_CAPACITY_CHOICES),
            projects: Vec::new(),
            add_form_open: false,
            reduce_policy,
        }
    }

    pub fn projects(&self) -> &[SubmissionProject] {
        &self.projects
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity.limit()
    }

    pub fn is_full(&self) -> bool {
        self.capacity.is_full(self.projects.len())
    }

    pub fn add_form_open(&self) -> bool {
        self.add_form_open
    }

    pub fn all_have_files(&self) -> bool {
        self.projects
            .iter()
            .all(|project| project.uploaded_file_name.is_some())
    }

    pub fn toggle_add_form(&mut self) -> AppResult<bool> {
        if !self.add_form_open {
            let limit = self
                .capacity
                .require("Please choose the number of projects first.")?;
            if self.projects.len() >= limit {
                return Err(AppError::CapacityReached { limit });
            }
        }

        self.add_form_open = !self.add_form_open;
        Ok(self.add_form_open)
    }

    pub fn set_capacity(&mut self, limit: usize) -> AppResult<ProjectEvent> {
        let limit = self.capacity.set(limit)?;

        let count = self.projects.len();
        let event = if count > limit {
            match self.reduce_policy {
                ReducePolicy::Truncate => {
                    let removed = self.projects.split_off(limit);
                    ProjectEvent::CapacityReduced { limit, removed }
                }
                ReducePolicy::Retain => {
                    tracing::debug!(limit, count, "project count exceeds the new limit");
                    ProjectEvent::OverCapacity { limit, count }
                }
            }
        } else {
            ProjectEvent::CapacitySet { limit }
        };

        if self.projects.len() >= limit {
            self.add_form_open = false;
        }

        Ok(event)
    }

    pub fn add(&mut self, form: ProjectForm) -> AppResult<ProjectEvent> {
        let limit = match self.capacity.require(SELECT_COUNT_GUIDANCE) {
            Ok(limit) => limit,
            Err(error) => {
                self.add_form_open = false;
                return Err(error);
            }
        };

        if self.projects.len() >= limit {
            self.add_form_open = false;
            return Err(AppError::CapacityReached { limit });
        }

        form.validate()?;

        let project = SubmissionProject {
            id: Uuid::new_v4(),
            title: form.title,
            abstract_text: form.abstract_text,
            originality_report: form.originality_report,
            improved_abstract: form.improved_abstract,
            uploaded_file_name: form.uploaded_file_name,
        };
        self.projects.push(project.clone());

        if self.projects.len() >= limit {
            self.add_form_open = false;
        }

        tracing::debug!(project = %project.id, "submission project added");
        Ok(ProjectEvent::ProjectAdded(project))
    }

    pub fn remove(&mut self, id: Uuid) -> Option<ProjectEvent> {
        let position = self.projects.iter().position(|project| project.id == id)?;
        let project = self.projects.remove(position);
        tracing::debug!(project = %project.id, "submission project removed");
        Some(ProjectEvent::ProjectRemoved(project))
    }

    // AI-derived fields and the uploaded file survive unless the patch replaces them.
    pub fn update(&mut self, id: Uuid, form: ProjectForm) -> AppResult<ProjectEvent> {
        form.validate()?;

        let project = self
            .projects
            .iter_mut()
            .find(|project| project.id == id)
            .ok_or_else(|| AppError::NotFound(format!("project '{id}'")))?;

        project.title = form.title;
        project.abstract_text = form.abstract_text;
        if form.originality_report.is_some() {
            project.originality_report = form.originality_report;
        }
        if form.improved_abstract.is_some() {
            project.improved_abstract = form.improved_abstract;
        }
        if form.uploaded_file_name.is_some() {
            project.uploaded_file_name = form.uploaded_file_name;
        }

        Ok(ProjectEvent::ProjectUpdated(project.clone()))
    }
}
