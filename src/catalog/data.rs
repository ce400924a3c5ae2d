use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;

use crate::catalog::models::{
    ActivityAction, Priority, Project, ProjectActivity, ProjectStats, ProjectStatus, ProjectTask,
};

pub fn project_statuses() -> Vec<ProjectStatus> {
    vec![
        status("planning", "Planning", "#6366f1", "Project is in planning phase"),
        status(
            "in-progress",
            "In Progress",
            "#eab308",
            "Project is actively being worked on",
        ),
        status("review", "Review", "#f59e0b", "Project is under review"),
        status("completed", "Completed", "#10b981", "Project has been completed"),
        status("on-hold", "On Hold", "#6b7280", "Project is temporarily on hold"),
        status("cancelled", "Cancelled", "#ef4444", "Project has been cancelled"),
    ]
}

pub fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            title: "E-Learning Platform".to_string(),
            description: "A comprehensive e-learning platform with course management, student tracking, and assessment tools.".to_string(),
            category: "Software Development".to_string(),
            status: "in-progress".to_string(),
            progress: 65,
            priority: Priority::High,
            deadline: Some(day(2024, 12, 15)),
            created_at: day(2024, 9, 1),
            updated_at: day(2024, 9, 9),
            tags: strings(&["React", "Node.js", "MongoDB", "Education"]),
            is_public: true,
            template_id: Some("web-app".to_string()),
            team: strings(&["john@example.com", "sarah@example.com"]),
            owner: "john@example.com".to_string(),
            tasks: vec![
                ProjectTask {
                    id: "t1".to_string(),
                    title: "User Authentication System".to_string(),
                    description: "Implement secure user login and registration".to_string(),
                    completed: true,
                    due_date: Some(day(2024, 9, 15)),
                    assignee: Some("john@example.com".to_string()),
                    priority: Priority::High,
                },
                ProjectTask {
                    id: "t2".to_string(),
                    title: "Course Management Interface".to_string(),
                    description: "Build interface for creating and managing courses".to_string(),
                    completed: true,
                    due_date: Some(day(2024, 10, 1)),
                    assignee: Some("sarah@example.com".to_string()),
                    priority: Priority::Medium,
                },
                ProjectTask {
                    id: "t3".to_string(),
                    title: "Student Dashboard".to_string(),
                    description: "Create dashboard for students to track progress".to_string(),
                    completed: false,
                    due_date: Some(day(2024, 10, 15)),
                    assignee: Some("john@example.com".to_string()),
                    priority: Priority::High,
                },
            ],
        },
        Project {
            id: "2".to_string(),
            title: "Smart Home Energy Monitor".to_string(),
            description: "IoT system to monitor and optimize home energy consumption using sensors and data analytics.".to_string(),
            category: "Hardware".to_string(),
            status: "planning".to_string(),
            progress: 25,
            priority: Priority::Medium,
            deadline: Some(day(2025, 1, 30)),
            created_at: day(2024, 8, 15),
            updated_at: day(2024, 9, 8),
            tags: strings(&["IoT", "Arduino", "Python", "Data Analytics"]),
            is_public: false,
            template_id: Some("iot-project".to_string()),
            team: strings(&["mike@example.com"]),
            owner: "mike@example.com".to_string(),
            tasks: vec![
                ProjectTask {
                    id: "t4".to_string(),
                    title: "Hardware Component Research".to_string(),
                    description: "Research and select appropriate sensors and microcontrollers".to_string(),
                    completed: true,
                    due_date: Some(day(2024, 9, 10)),
                    assignee: Some("mike@example.com".to_string()),
                    priority: Priority::High,
                },
                ProjectTask {
                    id: "t5".to_string(),
                    title: "Circuit Design".to_string(),
                    description: "Design the circuit layout and connections".to_string(),
                    completed: false,
                    due_date: Some(day(2024, 9, 25)),
                    assignee: Some("mike@example.com".to_string()),
                    priority: Priority::Medium,
                },
            ],
        },
        Project {
            id: "3".to_string(),
            title: "Customer Behavior Analysis".to_string(),
            description: "Machine learning project to analyze customer purchasing patterns and predict future trends.".to_string(),
            category: "Data Science".to_string(),
            status: "review".to_string(),
            progress: 85,
            priority: Priority::Medium,
            deadline: Some(day(2024, 11, 20)),
            created_at: day(2024, 7, 1),
            updated_at: day(2024, 9, 9),
            tags: strings(&["Python", "Machine Learning", "Pandas", "Scikit-learn"]),
            is_public: true,
            template_id: Some("data-science".to_string()),
            team: strings(&["anna@example.com", "david@example.com"]),
            owner: "anna@example.com".to_string(),
            tasks: vec![
                ProjectTask {
                    id: "t6".to_string(),
                    title: "Data Collection and Cleaning".to_string(),
                    description: "Gather and preprocess customer data".to_string(),
                    completed: true,
                    due_date: Some(day(2024, 8, 15)),
                    assignee: Some("anna@example.com".to_string()),
                    priority: Priority::High,
                },
                ProjectTask {
                    id: "t7".to_string(),
                    title: "Feature Engineering".to_string(),
                    description: "Create meaningful features from raw data".to_string(),
                    completed: true,
                    due_date: Some(day(2024, 9, 1)),
                    assignee: Some("david@example.com".to_string()),
                    priority: Priority::Medium,
                },
                ProjectTask {
                    id: "t8".to_string(),
                    title: "Model Training and Validation".to_string(),
                    description: "Train ML models and validate performance".to_string(),
                    completed: false,
                    due_date: Some(day(2024, 9, 20)),
                    assignee: Some("anna@example.com".to_string()),
                    priority: Priority::High,
                },
            ],
        },
        Project {
            id: "4".to_string(),
            title: "Sustainable Food Delivery App".to_string(),
            description: "Mobile application connecting eco-conscious consumers with local sustainable restaurants.".to_string(),
            category: "Software Development".to_string(),
            status: "completed".to_string(),
            progress: 100,
            priority: Priority::Low,
            deadline: Some(day(2024, 8, 31)),
            created_at: day(2024, 6, 1),
            updated_at: day(2024, 8, 31),
            tags: strings(&["React Native", "Firebase", "Maps API", "Sustainability"]),
            is_public: true,
            template_id: Some("mobile-app".to_string()),
            team: strings(&["emma@example.com", "carlos@example.com"]),
            owner: "emma@example.com".to_string(),
            tasks: vec![ProjectTask {
                id: "t9".to_string(),
                title: "App Store Deployment".to_string(),
                description: "Deploy app to iOS and Android stores".to_string(),
                completed: true,
                due_date: Some(day(2024, 8, 30)),
                assignee: Some("carlos@example.com".to_string()),
                priority: Priority::High,
            }],
        },
    ]
}

pub fn sample_activities() -> Vec<ProjectActivity> {
    vec![
        ProjectActivity {
            id: "a1".to_string(),
            project_id: "1".to_string(),
            user_id: "john@example.com".to_string(),
            user_name: "John Smith".to_string(),
            action: ActivityAction::CompletedTask,
            description: "Completed task: User Authentication System".to_string(),
            timestamp: at(2024, 9, 9, 10, 30),
            metadata: Some(json!({ "taskId": "t1" })),
        },
        ProjectActivity {
            id: "a2".to_string(),
            project_id: "1".to_string(),
            user_id: "sarah@example.com".to_string(),
            user_name: "Sarah Johnson".to_string(),
            action: ActivityAction::Updated,
            description: "Updated project description and added new requirements".to_string(),
            timestamp: at(2024, 9, 9, 9, 15),
            metadata: None,
        },
        ProjectActivity {
            id: "a3".to_string(),
            project_id: "2".to_string(),
            user_id: "mike@example.com".to_string(),
            user_name: "Mike Chen".to_string(),
            action: ActivityAction::StatusChanged,
            description: "Changed status from \"Planning\" to \"In Progress\"".to_string(),
            timestamp: at(2024, 9, 8, 14, 20),
            metadata: Some(json!({ "oldStatus": "planning", "newStatus": "in-progress" })),
        },
        ProjectActivity {
            id: "a4".to_string(),
            project_id: "3".to_string(),
            user_id: "anna@example.com".to_string(),
            user_name: "Anna Davis".to_string(),
            action: ActivityAction::CompletedTask,
            description: "Completed task: Feature Engineering".to_string(),
            timestamp: at(2024, 9, 8, 11, 45),
            metadata: Some(json!({ "taskId": "t7" })),
        },
        ProjectActivity {
            id: "a5".to_string(),
            project_id: "1".to_string(),
            user_id: "john@example.com".to_string(),
            user_name: "John Smith".to_string(),
            action: ActivityAction::Created,
            description: "Created new project: E-Learning Platform".to_string(),
            timestamp: at(2024, 9, 1, 9, 0),
            metadata: None,
        },
    ]
}

pub fn project_by_id<'a>(projects: &'a [Project], id: &str) -> Option<&'a Project> {
    projects.iter().find(|project| project.id == id)
}

pub fn projects_by_status<'a>(projects: &'a [Project], status: &str) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|project| project.status == status)
        .collect()
}

pub fn projects_by_category<'a>(projects: &'a [Project], category: &str) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|project| project.category == category)
        .collect()
}

pub fn activities_by_project<'a>(
    activities: &'a [ProjectActivity],
    project_id: &str,
) -> Vec<&'a ProjectActivity> {
    activities
        .iter()
        .filter(|activity| activity.project_id == project_id)
        .collect()
}

pub fn recent_activities(activities: &[ProjectActivity], limit: usize) -> Vec<ProjectActivity> {
    let mut sorted = activities.to_vec();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted.truncate(limit);
    sorted
}

pub fn status_by_id<'a>(statuses: &'a [ProjectStatus], status_id: &str) -> Option<&'a ProjectStatus> {
    statuses.iter().find(|status| status.id == status_id)
}

pub fn overall_progress(projects: &[Project]) -> u8 {
    if projects.is_empty() {
        return 0;
    }

    let total: u32 = projects.iter().map(|project| u32::from(project.progress)).sum();
    (f64::from(total) / projects.len() as f64).round() as u8
}

pub fn project_stats(projects: &[Project]) -> ProjectStats {
    let total = projects.len();
    let completed = projects.iter().filter(|p| p.status == "completed").count();
    let in_progress = projects.iter().filter(|p| p.status == "in-progress").count();
    let planning = projects.iter().filter(|p| p.status == "planning").count();

    let completion_rate = if total == 0 {
        0
    } else {
        ((completed as f64 / total as f64) * 100.0).round() as u8
    };

    ProjectStats {
        total,
        completed,
        in_progress,
        planning,
        completion_rate,
    }
}

fn status(id: &str, name: &str, color: &str, description: &str) -> ProjectStatus {
    ProjectStatus {
        id: id.to_string(),
        name: name.to_string(),
        color: color.to_string(),
        description: description.to_string(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

// Sample timestamps are fixed literals, so the conversions cannot fail.
fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    at(year, month, day, 0, 0)
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("sample timestamp should be valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_resolve_sample_entities() {
        let projects = sample_projects();
        let statuses = project_statuses();

        assert_eq!(
            project_by_id(&projects, "1").map(|p| p.title.as_str()),
            Some("E-Learning Platform")
        );
        assert!(project_by_id(&projects, "99").is_none());
        assert_eq!(projects_by_status(&projects, "completed").len(), 1);
        assert_eq!(projects_by_category(&projects, "Software Development").len(), 2);
        assert_eq!(
            status_by_id(&statuses, "review").map(|s| s.name.as_str()),
            Some("Review")
        );
    }

    #[test]
    fn recent_activities_sort_newest_first() {
        let activities = sample_activities();
        let recent = recent_activities(&activities, 3);

        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].id, "a1");
        assert!(recent[0].timestamp >= recent[1].timestamp);
        assert!(recent[1].timestamp >= recent[2].timestamp);
    }

    #[test]
    fn activities_filter_by_project() {
        let activities = sample_activities();
        let for_first = activities_by_project(&activities, "1");

        assert_eq!(for_first.len(), 3);
        assert!(for_first.iter().all(|activity| activity.project_id == "1"));
    }

    #[test]
    fn aggregates_match_sample_data() {
        let projects = sample_projects();

        // (65 + 25 + 85 + 100) / 4 = 68.75 rounds to 69.
        assert_eq!(overall_progress(&projects), 69);

        let stats = project_stats(&projects);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.planning, 1);
        assert_eq!(stats.completion_rate, 25);
    }

    #[test]
    fn empty_collections_do_not_divide_by_zero() {
        assert_eq!(overall_progress(&[]), 0);
        assert_eq!(project_stats(&[]).completion_rate, 0);
    }
}
