use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateSection {
    pub id: String,
    pub title: String,
    pub description: String,
    pub required: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateSample {
    pub title: String,
    pub abstract_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub icon: String,
    pub estimated_duration: String,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
    pub sections: Vec<TemplateSection>,
    pub sample: Option<TemplateSample>,
}

pub fn project_templates() -> Vec<ProjectTemplate> {
    vec![
        ProjectTemplate {
            id: "web-app".to_string(),
            name: "Web Application".to_string(),
            description: "A full-stack web application with modern technologies".to_string(),
            category: "Software Development".to_string(),
            icon: "🌐".to_string(),
            estimated_duration: "8-12 weeks".to_string(),
            difficulty: Difficulty::Intermediate,
            tags: tags(&["React", "Node.js", "Database", "API"]),
            sections: vec![
                section("requirements", "Requirements Analysis", "Define functional and non-functional requirements", true),
                section("design", "System Design", "Architecture, database design, and UI/UX mockups", true),
                section("implementation", "Implementation", "Frontend, backend, and database implementation", true),
                section("testing", "Testing", "Unit testing, integration testing, and user testing", true),
                section("deployment", "Deployment", "Production deployment and documentation", true),
            ],
            sample: Some(TemplateSample {
                title: "E-Learning Platform".to_string(),
                abstract_text: "A comprehensive e-learning platform that allows students to enroll in courses, access learning materials, take quizzes, and track their progress. The system includes features for instructors to create courses, manage content, and monitor student performance.".to_string(),
            }),
        },
        ProjectTemplate {
            id: "mobile-app".to_string(),
            name: "Mobile Application".to_string(),
            description: "Cross-platform mobile app for iOS and Android".to_string(),
            category: "Software Development".to_string(),
            icon: "📱".to_string(),
            estimated_duration: "10-16 weeks".to_string(),
            difficulty: Difficulty::Advanced,
            tags: tags(&["React Native", "Flutter", "Firebase", "API Integration"]),
            sections: vec![
                section("market-research", "Market Research", "Target audience analysis and competitor research", true),
                section("ui-ux", "UI/UX Design", "User interface and experience design", true),
                section("development", "App Development", "Cross-platform mobile app development", true),
                section("testing", "Testing & QA", "Device testing, performance optimization", true),
                section("store-deployment", "App Store Deployment", "Publishing to App Store and Google Play", false),
            ],
            sample: Some(TemplateSample {
                title: "Task Management Mobile App".to_string(),
                abstract_text: "A mobile application designed to help users organize and track their daily tasks. Features include task creation, priority setting, deadline reminders, progress tracking, and team collaboration capabilities.".to_string(),
            }),
        },
        ProjectTemplate {
            id: "data-science".to_string(),
            name: "Data Science Project".to_string(),
            description: "Data analysis and machine learning project".to_string(),
            category: "Data Science".to_string(),
            icon: "📊".to_string(),
            estimated_duration: "6-10 weeks".to_string(),
            difficulty: Difficulty::Intermediate,
            tags: tags(&["Python", "Machine Learning", "Data Analysis", "Visualization"]),
            sections: vec![
                section("data-collection", "Data Collection", "Gather and validate data sources", true),
                section("eda", "Exploratory Data Analysis", "Statistical analysis and data visualization", true),
                section("modeling", "Model Development", "Machine learning model training and validation", true),
                section("evaluation", "Model Evaluation", "Performance metrics and model comparison", true),
                section("deployment", "Model Deployment", "Deploy model for production use", false),
            ],
            sample: Some(TemplateSample {
                title: "Student Performance Prediction System".to_string(),
                abstract_text: "A machine learning project that analyzes student academic data to predict performance and identify at-risk students. Uses various algorithms to provide insights for educational interventions.".to_string(),
            }),
        },
        ProjectTemplate {
            id: "iot-project".to_string(),
            name: "IoT System".to_string(),
            description: "Internet of Things project with hardware and software components".to_string(),
            category: "Hardware".to_string(),
            icon: "🔌".to_string(),
            estimated_duration: "12-16 weeks".to_string(),
            difficulty: Difficulty::Advanced,
            tags: tags(&["Arduino", "Sensors", "Cloud", "Real-time Data"]),
            sections: vec![
                section("hardware-design", "Hardware Design", "Circuit design and component selection", true),
                section("firmware", "Firmware Development", "Embedded software programming", true),
                section("cloud-integration", "Cloud Integration", "Data collection and cloud connectivity", true),
                section("dashboard", "Dashboard Development", "Real-time monitoring interface", true),
                section("testing", "System Testing", "End-to-end system validation", true),
            ],
            sample: Some(TemplateSample {
                title: "Smart Home Energy Monitoring System".to_string(),
                abstract_text: "An IoT-based system that monitors energy consumption in real-time, provides insights on usage patterns, and suggests optimization strategies to reduce electricity costs.".to_string(),
            }),
        },
        ProjectTemplate {
            id: "research-paper".to_string(),
            name: "Research Paper".to_string(),
            description: "Academic research project with literature review and analysis".to_string(),
            category: "Research".to_string(),
            icon: "📚".to_string(),
            estimated_duration: "8-12 weeks".to_string(),
            difficulty: Difficulty::Intermediate,
            tags: tags(&["Literature Review", "Analysis", "Writing", "Citations"]),
            sections: vec![
                section("literature-review", "Literature Review", "Comprehensive review of existing research", true),
                section("methodology", "Research Methodology", "Research approach and methods", true),
                section("data-collection", "Data Collection", "Gather research data and evidence", true),
                section("analysis", "Analysis & Results", "Data analysis and findings presentation", true),
                section("conclusion", "Conclusion & Discussion", "Summary and future research directions", true),
            ],
            sample: Some(TemplateSample {
                title: "Impact of AI on Modern Education Systems".to_string(),
                abstract_text: "This research investigates how artificial intelligence technologies are transforming educational practices, examining benefits, challenges, and future implications for learning outcomes.".to_string(),
            }),
        },
        ProjectTemplate {
            id: "business-plan".to_string(),
            name: "Business Plan".to_string(),
            description: "Comprehensive business plan for a startup or new venture".to_string(),
            category: "Business".to_string(),
            icon: "💼".to_string(),
            estimated_duration: "6-8 weeks".to_string(),
            difficulty: Difficulty::Beginner,
            tags: tags(&["Market Analysis", "Financial Planning", "Strategy", "Presentation"]),
            sections: vec![
                section("executive-summary", "Executive Summary", "Overview of the business concept and key points", true),
                section("market-analysis", "Market Analysis", "Target market and competitive landscape", true),
                section("business-model", "Business Model", "Revenue streams and value proposition", true),
                section("financial-projections", "Financial Projections", "Budget, revenue forecasts, and funding needs", true),
                section("implementation-plan", "Implementation Plan", "Timeline and milestones for execution", true),
            ],
            sample: Some(TemplateSample {
                title: "EcoFriendly Food Delivery Service".to_string(),
                abstract_text: "A sustainable food delivery platform that connects local restaurants with environmentally conscious consumers, using electric vehicles and biodegradable packaging.".to_string(),
            }),
        },
    ]
}

pub fn template_by_id(id: &str) -> Option<ProjectTemplate> {
    project_templates().into_iter().find(|template| template.id == id)
}

pub fn templates_by_category(category: &str) -> Vec<ProjectTemplate> {
    project_templates()
        .into_iter()
        .filter(|template| template.category == category)
        .collect()
}

pub fn all_categories() -> Vec<String> {
    let mut categories = Vec::new();
    for template in project_templates() {
        if !categories.contains(&template.category) {
            categories.push(template.category);
        }
    }
    categories
}

fn section(id: &str, title: &str, description: &str, required: bool) -> TemplateSection {
    TemplateSection {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        required,
    }
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_lookup_by_id() {
        let template = template_by_id("web-app").expect("web-app template should exist");
        assert_eq!(template.name, "Web Application");
        assert_eq!(template.sections.len(), 5);
        assert!(template.sample.is_some());

        assert!(template_by_id("nonexistent").is_none());
    }

    #[test]
    fn categories_are_unique_and_ordered() {
        let categories = all_categories();
        assert_eq!(
            categories,
            vec!["Software Development", "Data Science", "Hardware", "Research", "Business"]
        );
    }

    #[test]
    fn category_filter_matches_catalog() {
        let software = templates_by_category("Software Development");
        assert_eq!(software.len(), 2);
        assert!(software.iter().all(|t| t.category == "Software Development"));
    }
}
