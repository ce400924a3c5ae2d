use serde::{Deserialize, Serialize};

pub const PROTECTED_PREFIXES: [&str; 6] = [
    "/dashboard",
    "/projects",
    "/appform",
    "/settings",
    "/enhanced-dashboard",
    "/search",
];

pub const PUBLIC_PATHS: [&str; 3] = [
    "/test-templates",
    "/demo-dashboard.html",
    "/templates-demo.html",
];

// Read-only identity context, injected at the application boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub display_name: String,
    pub email: String,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    RedirectToSignIn,
}

pub fn gate_route(path: &str, session: Option<&Session>) -> RouteDecision {
    if PUBLIC_PATHS.contains(&path) {
        return RouteDecision::Allow;
    }

    let protected = PROTECTED_PREFIXES
        .iter()
        .any(|prefix| path == *prefix || path.starts_with(&format!("{prefix}/")));

    if protected && session.is_none() {
        return RouteDecision::RedirectToSignIn;
    }

    RouteDecision::Allow
}
