use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::models::Priority;
use crate::catalog::templates::{template_by_id, ProjectTemplate};
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    BasicInfo,
    Classification,
    Sections,
    Review,
}

impl WizardStep {
    pub const TOTAL: u8 = 4;

    pub fn number(self) -> u8 {
        match self {
            Self::BasicInfo => 1,
            Self::Classification => 2,
            Self::Sections => 3,
            Self::Review => 4,
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            Self::BasicInfo => Some(Self::Classification),
            Self::Classification => Some(Self::Sections),
            Self::Sections => Some(Self::Review),
            Self::Review => None,
        }
    }

    fn previous(self) -> Option<Self> {
        match self {
            Self::BasicInfo => None,
            Self::Classification => Some(Self::BasicInfo),
            Self::Sections => Some(Self::Classification),
            Self::Review => Some(Self::Sections),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftSection {
    pub id: String,
    pub title: String,
    pub description: String,
    pub required: bool,
}

#[derive(Debug, Clone, Default)]
pub struct SectionPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub required: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    pub deadline: Option<DateTime<Utc>>,
    pub priority: Priority,
    pub is_public: bool,
    pub template_id: Option<String>,
    pub sections: Vec<DraftSection>,
}

impl Default for ProjectDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: String::new(),
            tags: Vec::new(),
            deadline: None,
            priority: Priority::Medium,
            is_public: false,
            template_id: None,
            sections: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProjectWizard {
    step: WizardStep,
    draft: ProjectDraft,
    from_template: bool,
}

impl Default for ProjectWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::BasicInfo,
            draft: ProjectDraft::default(),
            from_template: false,
        }
    }

    // Entry point for the `?template=` reference; unknown ids fall back to a blank wizard.
    pub fn start(template_id: Option<&str>) -> Self {
        match template_id.and_then(template_by_id) {
            Some(template) => Self::from_template(&template),
            None => Self::new(),
        }
    }

    // Sections are cloned off the template so later edits never touch the catalog.
    pub fn from_template(template: &ProjectTemplate) -> Self {
        let draft = ProjectDraft {
            title: template
                .sample
                .as_ref()
                .map(|sample| sample.title.clone())
                .unwrap_or_default(),
            description: template
                .sample
                .as_ref()
                .map(|sample| sample.abstract_text.clone())
                .unwrap_or_default(),
            category: template.category.clone(),
            tags: template.tags.clone(),
            template_id: Some(template.id.clone()),
            sections: template
                .sections
                .iter()
                .map(|section| DraftSection {
                    id: section.id.clone(),
                    title: section.title.clone(),
                    description: section.description.clone(),
                    required: section.required,
                })
                .collect(),
            ..ProjectDraft::default()
        };

        Self {
            step: WizardStep::BasicInfo,
            draft,
            from_template: true,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &ProjectDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ProjectDraft {
        &mut self.draft
    }

    pub fn can_advance(&self) -> bool {
        self.guard_failure().is_none()
    }

    pub fn advance(&mut self) -> AppResult<WizardStep> {
        if let Some(reason) = self.guard_failure() {
            return Err(AppError::Validation(reason.to_string()));
        }

        match self.step.next() {
            Some(next) => {
                self.step = next;
                Ok(self.step)
            }
            None => Err(AppError::Validation(
                "already at the review step".to_string(),
            )),
        }
    }

    pub fn back(&mut self) -> AppResult<WizardStep> {
        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                Ok(self.step)
            }
            None => Err(AppError::Validation("already at the first step".to_string())),
        }
    }

    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.draft.tags.iter().any(|existing| existing == tag) {
            return false;
        }

        self.draft.tags.push(tag.to_string());
        true
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.draft.tags.len();
        self.draft.tags.retain(|existing| existing != tag);
        self.draft.tags.len() != before
    }

    pub fn add_section(&mut self) -> DraftSection {
        let section = DraftSection {
            id: format!("custom-{}", Uuid::new_v4()),
            title: String::new(),
            description: String::new(),
            required: false,
        };
        self.draft.sections.push(section.clone());
        section
    }

    pub fn update_section(&mut self, section_id: &str, patch: SectionPatch) -> AppResult<()> {
        let section = self
            .draft
            .sections
            .iter_mut()
            .find(|section| section.id == section_id)
            .ok_or_else(|| AppError::NotFound(format!("section '{section_id}'")))?;

        if let Some(title) = patch.title {
            section.title = title;
        }
        if let Some(description) = patch.description {
            section.description = description;
        }
        if let Some(required) = patch.required {
            section.required = required;
        }

        Ok(())
    }

    pub fn remove_section(&mut self, section_id: &str) -> AppResult<DraftSection> {
        if self.from_template {
            return Err(AppError::Validation(
                "template sections cannot be removed".to_string(),
            ));
        }

        let position = self
            .draft
            .sections
            .iter()
            .position(|section| section.id == section_id)
            .ok_or_else(|| AppError::NotFound(format!("section '{section_id}'")))?;

        Ok(self.draft.sections.remove(position))
    }

    // Terminal action: snapshots the draft for an external persistence collaborator.
    pub fn create(&self) -> AppResult<ProjectDraft> {
        if self.step != WizardStep::Review {
            return Err(AppError::Validation(
                "the review step has not been reached".to_string(),
            ));
        }

        tracing::info!(title = %self.draft.title, "project draft created");
        Ok(self.draft.clone())
    }

    fn guard_failure(&self) -> Option<&'static str> {
        match self.step {
            WizardStep::BasicInfo => {
                if self.draft.title.trim().is_empty() || self.draft.description.trim().is_empty() {
                    Some("title and description are required")
                } else {
                    None
                }
            }
            WizardStep::Classification => {
                if self.draft.category.trim().is_empty() {
                    Some("a category must be selected")
                } else {
                    None
                }
            }
            WizardStep::Sections => {
                let sections = &self.draft.sections;
                if sections.is_empty()
                    || sections.iter().any(|section| section.title.trim().is_empty())
                {
                    Some("every section needs a title")
                } else {
                    None
                }
            }
            WizardStep::Review => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::templates::template_by_id;

    #[test]
    fn first_step_blocks_until_title_and_description_are_set() {
        let mut wizard = ProjectWizard::new();
        assert!(!wizard.can_advance());
        assert!(matches!(wizard.advance(), Err(AppError::Validation(_))));

        wizard.draft_mut().title = "Sensor Net".to_string();
        assert!(!wizard.can_advance());

        wizard.draft_mut().description = "x".to_string();
        assert!(wizard.can_advance());
        assert_eq!(
            wizard.advance().expect("advance should succeed"),
            WizardStep::Classification
        );
    }

    #[test]
    fn whitespace_only_fields_do_not_satisfy_guards() {
        let mut wizard = ProjectWizard::new();
        wizard.draft_mut().title = "   ".to_string();
        wizard.draft_mut().description = "\t".to_string();

        assert!(!wizard.can_advance());
    }

    #[test]
    fn backward_moves_are_always_allowed_except_from_the_first_step() {
        let mut wizard = ProjectWizard::new();
        assert!(matches!(wizard.back(), Err(AppError::Validation(_))));

        wizard.draft_mut().title = "Title".to_string();
        wizard.draft_mut().description = "Description".to_string();
        wizard.advance().expect("step 1 guard should pass");

        // Going back never requires the guard to hold.
        wizard.draft_mut().title.clear();
        assert_eq!(
            wizard.back().expect("back should succeed"),
            WizardStep::BasicInfo
        );
    }

    #[test]
    fn section_step_requires_titled_sections() {
        let mut wizard = ProjectWizard::new();
        wizard.draft_mut().title = "Title".to_string();
        wizard.draft_mut().description = "Description".to_string();
        wizard.advance().expect("step 1 guard should pass");
        wizard.draft_mut().category = "Research".to_string();
        wizard.advance().expect("step 2 guard should pass");

        assert!(!wizard.can_advance(), "no sections yet");

        let section_id = wizard.add_section().id;
        assert!(!wizard.can_advance(), "section title is still empty");

        wizard
            .update_section(
                &section_id,
                SectionPatch {
                    title: Some("Literature Review".to_string()),
                    ..SectionPatch::default()
                },
            )
            .expect("section should update");
        assert!(wizard.can_advance());
    }

    #[test]
    fn tags_are_trimmed_and_deduplicated() {
        let mut wizard = ProjectWizard::new();

        assert!(wizard.add_tag("  Rust  "));
        assert!(!wizard.add_tag("Rust"));
        assert!(!wizard.add_tag("   "));
        assert_eq!(wizard.draft().tags, vec!["Rust"]);

        assert!(wizard.remove_tag("Rust"));
        assert!(!wizard.remove_tag("Rust"));
    }

    #[test]
    fn start_resolves_template_references() {
        let seeded = ProjectWizard::start(Some("web-app"));
        assert_eq!(seeded.draft().title, "E-Learning Platform");

        let unknown = ProjectWizard::start(Some("no-such-template"));
        assert!(unknown.draft().title.is_empty());
        assert!(unknown.draft().sections.is_empty());

        let blank = ProjectWizard::start(None);
        assert!(blank.draft().template_id.is_none());
    }

    #[test]
    fn create_is_refused_before_the_review_step() {
        let wizard = ProjectWizard::new();
        assert!(matches!(wizard.create(), Err(AppError::Validation(_))));
    }

    #[test]
    fn template_sections_cannot_be_removed_but_custom_ones_can() {
        let template = template_by_id("web-app").expect("template should exist");
        let mut seeded = ProjectWizard::from_template(&template);
        assert!(matches!(
            seeded.remove_section("design"),
            Err(AppError::Validation(_))
        ));

        let mut blank = ProjectWizard::new();
        let id = blank.add_section().id;
        blank.remove_section(&id).expect("custom section should be removable");
        assert!(blank.draft().sections.is_empty());
    }

    #[test]
    fn template_walkthrough_reaches_review_with_edited_title() {
        let template = template_by_id("web-app").expect("template should exist");
        let mut wizard = ProjectWizard::from_template(&template);

        assert_eq!(wizard.draft().title, "E-Learning Platform");
        assert_eq!(wizard.draft().category, "Software Development");
        assert_eq!(wizard.draft().template_id.as_deref(), Some("web-app"));
        assert_eq!(wizard.draft().sections.len(), 5);

        wizard.draft_mut().title = "Campus E-Learning Platform".to_string();

        assert_eq!(wizard.advance().expect("step 1"), WizardStep::Classification);
        assert_eq!(wizard.advance().expect("step 2"), WizardStep::Sections);
        assert_eq!(wizard.advance().expect("step 3"), WizardStep::Review);

        // Draft sections are clones: editing one leaves the catalog untouched.
        wizard
            .update_section(
                "design",
                SectionPatch {
                    description: Some("High-level architecture only".to_string()),
                    ..SectionPatch::default()
                },
            )
            .expect("cloned section should be editable");
        let catalog_template = template_by_id("web-app").expect("template should exist");
        assert_eq!(
            catalog_template.sections[1].description,
            "Architecture, database design, and UI/UX mockups"
        );

        let snapshot = wizard.create().expect("create should succeed at review");
        assert_eq!(snapshot.title, "Campus E-Learning Platform");
        assert_eq!(snapshot.sections.len(), 5);
        assert_eq!(snapshot.sections[1].description, "High-level architecture only");
    }
}
