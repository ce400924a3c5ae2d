use crate::editors::members::GroupEvent;
use crate::editors::projects::ProjectEvent;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Destructive,
}

// User-facing toast payload. This layer only consumes typed results;
// it never participates in the mutations themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn info(title: &str, description: String) -> Self {
        Self {
            title: title.to_string(),
            description,
            severity: Severity::Info,
        }
    }

    pub fn destructive(title: &str, description: String) -> Self {
        Self {
            title: title.to_string(),
            description,
            severity: Severity::Destructive,
        }
    }
}

pub fn group_event(event: &GroupEvent) -> Option<Notification> {
    match event {
        GroupEvent::CapacitySet { .. } => None,
        GroupEvent::CapacityReduced { limit, .. } => Some(Notification::info(
            "Group Size Reduced",
            format!("Member count adjusted to new limit ({limit})."),
        )),
        GroupEvent::MemberAdded(member) => Some(Notification::info(
            "Member Added",
            format!(
                "{} {} has been added to the group.",
                member.first_name, member.last_name
            ),
        )),
        GroupEvent::MemberRemoved(member) => Some(Notification::destructive(
            "Member Removed",
            format!(
                "{} {} has been removed from the group.",
                member.first_name, member.last_name
            ),
        )),
        GroupEvent::MemberUpdated(member) => Some(Notification::info(
            "Member Updated",
            format!(
                "{} {}'s details have been updated.",
                member.first_name, member.last_name
            ),
        )),
    }
}

pub fn group_error(error: &AppError) -> Notification {
    match error {
        AppError::CapacityUnset(guidance) => {
            Notification::destructive("Cannot Add Member", guidance.clone())
        }
        AppError::CapacityReached { limit } => Notification::destructive(
            "Cannot Add Member",
            format!("The group already has the maximum of {limit} members."),
        ),
        AppError::Conflict(reason) => Notification::destructive("Duplicate Member", reason.clone()),
        AppError::Validation(reason) => {
            Notification::destructive("Invalid Member Details", reason.clone())
        }
        AppError::NotFound(what) => {
            Notification::destructive("Update Failed", format!("No such {what}."))
        }
        other => Notification::destructive("Something Went Wrong", other.to_string()),
    }
}

pub fn project_event(event: &ProjectEvent) -> Option<Notification> {
    match event {
        ProjectEvent::CapacitySet { .. } => None,
        ProjectEvent::CapacityReduced { limit, .. } => Some(Notification::info(
            "Project Limit Reduced",
            format!("Project count adjusted to new limit ({limit})."),
        )),
        ProjectEvent::OverCapacity { limit, count } => Some(Notification::info(
            "Project Limit Reduced",
            format!(
                "Current project count ({count}) exceeds the new limit ({limit}). Please remove projects if necessary."
            ),
        )),
        ProjectEvent::ProjectAdded(project) => Some(Notification::info(
            "Project Added",
            format!("\"{}\" has been added.", project.title),
        )),
        ProjectEvent::ProjectRemoved(project) => Some(Notification::destructive(
            "Project Removed",
            format!("\"{}\" has been removed.", project.title),
        )),
        ProjectEvent::ProjectUpdated(project) => Some(Notification::info(
            "Project Updated",
            format!("\"{}\" has been updated.", project.title),
        )),
    }
}

pub fn project_error(error: &AppError) -> Notification {
    match error {
        AppError::CapacityUnset(guidance) => {
            Notification::destructive("Cannot Add Project", guidance.clone())
        }
        AppError::CapacityReached { limit } => Notification::destructive(
            "Cannot Add Project",
            format!("You have reached the maximum of {limit} projects."),
        ),
        AppError::Validation(reason) => {
            Notification::destructive("Invalid Project Details", reason.clone())
        }
        AppError::NotFound(what) => {
            Notification::destructive("Update Failed", format!("No such {what}."))
        }
        other => Notification::destructive("Something Went Wrong", other.to_string()),
    }
}

pub fn analysis_complete() -> Notification {
    Notification::info(
        "AI Analysis Complete",
        "Originality report and improved abstract generated.".to_string(),
    )
}

pub fn analysis_failed() -> Notification {
    Notification::destructive(
        "AI Analysis Failed",
        "Could not generate report. Please try again.".to_string(),
    )
}

pub fn abstract_applied() -> Notification {
    Notification::info(
        "Abstract Updated",
        "Improved abstract has been applied to the form.".to_string(),
    )
}

pub fn file_selected(name: &str) -> Notification {
    Notification::info("File Selected", format!("Selected: {name}."))
}

pub fn submission_success() -> Notification {
    Notification::info(
        "Submission Successful!",
        "Your project details have been submitted.".to_string(),
    )
}

pub fn submission_error(reason: &str) -> Notification {
    Notification::destructive("Submission Error", reason.to_string())
}
