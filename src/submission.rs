use std::time::Duration;

use tokio::time::sleep;

use crate::editors::members::GroupEditor;
use crate::editors::projects::ProjectEditor;
use crate::error::{AppError, AppResult};
use crate::notify::{self, Notification};

// Submission is simulated: a short delay, then success. Nothing is written anywhere.
pub const SIMULATED_SUBMIT_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy)]
pub struct SubmissionChecklist {
    pub has_members: bool,
    pub has_projects: bool,
    pub all_projects_have_files: bool,
    pub confirmed: bool,
}

impl SubmissionChecklist {
    pub fn gather(group: &GroupEditor, projects: &ProjectEditor, confirmed: bool) -> Self {
        Self {
            has_members: !group.members().is_empty(),
            has_projects: !projects.projects().is_empty(),
            all_projects_have_files: projects.all_have_files(),
            confirmed,
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if !self.has_members || !self.has_projects {
            return Err(AppError::Validation(
                "Please add at least one group member and one project before submitting."
                    .to_string(),
            ));
        }
        if !self.all_projects_have_files {
            return Err(AppError::Validation(
                "Please ensure all projects have an uploaded document before submitting."
                    .to_string(),
            ));
        }
        if !self.confirmed {
            return Err(AppError::Validation(
                "Please confirm that the information you entered is correct before submitting."
                    .to_string(),
            ));
        }

        Ok(())
    }

    pub fn guidance(&self) -> Option<&'static str> {
        if !self.has_members {
            Some("Add at least one group member to enable submission.")
        } else if !self.has_projects {
            Some("Add at least one project to enable submission.")
        } else if !self.all_projects_have_files {
            Some("Ensure all projects have an uploaded document to enable submission.")
        } else if !self.confirmed {
            Some("Confirm the information is correct to enable submission.")
        } else {
            None
        }
    }
}

#[derive(Debug, Default)]
pub struct SubmissionSection {
    confirmed: bool,
    submitting: bool,
}

impl SubmissionSection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn confirmed(&self) -> bool {
        self.confirmed
    }

    pub fn set_confirmed(&mut self, confirmed: bool) {
        self.confirmed = confirmed;
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub async fn submit(
        &mut self,
        group: &GroupEditor,
        projects: &ProjectEditor,
    ) -> AppResult<Notification> {
        let checklist = SubmissionChecklist::gather(group, projects, self.confirmed);
        checklist.validate()?;

        self.submitting = true;
        sleep(SIMULATED_SUBMIT_DELAY).await;
        self.submitting = false;

        // Confirmation resets after every successful submission.
        self.confirmed = false;
        tracing::info!("submission simulated, no durable write performed");
        Ok(notify::submission_success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editors::members::MemberForm;
    use crate::editors::projects::ProjectForm;

    fn group_with_member() -> GroupEditor {
        let mut group = GroupEditor::new();
        group.set_capacity(2).expect("capacity should be accepted");
        group
            .add(MemberForm {
                first_name: "Asha".to_string(),
                last_name: "Iyer".to_string(),
                roll_no: "A1".to_string(),
                email: "asha@college.edu".to_string(),
                contact: "9876543210".to_string(),
            })
            .expect("member should be added");
        group
    }

    fn editor_with_project(file: Option<&str>) -> ProjectEditor {
        let mut editor = ProjectEditor::new();
        editor.set_capacity(1).expect("capacity should be accepted");
        editor
            .add(ProjectForm {
                title: "Attendance System".to_string(),
                abstract_text:
                    "An automated attendance system that uses face recognition to record presence."
                        .to_string(),
                uploaded_file_name: file.map(ToString::to_string),
                ..ProjectForm::default()
            })
            .expect("project should be added");
        editor
    }

    #[test]
    fn validation_rejects_in_precedence_order() {
        let empty_group = GroupEditor::new();
        let empty_projects = ProjectEditor::new();

        let missing_everything =
            SubmissionChecklist::gather(&empty_group, &empty_projects, true);
        match missing_everything.validate() {
            Err(AppError::Validation(message)) => {
                assert!(message.contains("at least one group member and one project"))
            }
            other => panic!("expected Validation, got {other:?}"),
        }

        let missing_file =
            SubmissionChecklist::gather(&group_with_member(), &editor_with_project(None), true);
        match missing_file.validate() {
            Err(AppError::Validation(message)) => {
                assert!(message.contains("uploaded document"))
            }
            other => panic!("expected Validation, got {other:?}"),
        }

        let unconfirmed = SubmissionChecklist::gather(
            &group_with_member(),
            &editor_with_project(Some("abstract.pdf")),
            false,
        );
        match unconfirmed.validate() {
            Err(AppError::Validation(message)) => assert!(message.contains("confirm")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn guidance_follows_the_same_precedence() {
        let empty_group = GroupEditor::new();
        let empty_projects = ProjectEditor::new();

        let checklist = SubmissionChecklist::gather(&empty_group, &empty_projects, false);
        assert_eq!(
            checklist.guidance(),
            Some("Add at least one group member to enable submission.")
        );

        let ready = SubmissionChecklist::gather(
            &group_with_member(),
            &editor_with_project(Some("abstract.pdf")),
            true,
        );
        assert_eq!(ready.guidance(), None);
    }

    #[tokio::test]
    async fn successful_submission_resets_confirmation() {
        let group = group_with_member();
        let projects = editor_with_project(Some("abstract.pdf"));
        let mut section = SubmissionSection::new();
        section.set_confirmed(true);

        let notification = section
            .submit(&group, &projects)
            .await
            .expect("submission should succeed");

        assert_eq!(notification.title, "Submission Successful!");
        assert!(!section.confirmed());
        assert!(!section.is_submitting());
    }

    #[tokio::test]
    async fn unconfirmed_submission_is_refused_before_the_delay() {
        let group = group_with_member();
        let projects = editor_with_project(Some("abstract.pdf"));
        let mut section = SubmissionSection::new();

        let error = section
            .submit(&group, &projects)
            .await
            .expect_err("submission should be refused");
        assert!(matches!(error, AppError::Validation(_)));
    }
}
