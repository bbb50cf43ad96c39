//! Route descriptors and the route table.

use hourly_core::Role;
use serde::Serialize;
use std::collections::HashSet;

use crate::error::RouteTableError;

/// The view a route renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Login,
    AdminPanel,
    Dashboard,
    ManagerDashboard,
    ExecutorView,
}

/// Static metadata for one navigable route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDescriptor {
    pub path: String,
    pub name: String,
    pub view: View,
    pub requires_auth: bool,
    pub required_role: Option<Role>,
}

impl RouteDescriptor {
    /// A route anyone may visit.
    pub fn public(path: impl Into<String>, name: impl Into<String>, view: View) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view,
            requires_auth: false,
            required_role: None,
        }
    }

    /// A route that needs a resolved identity, optionally with a given role.
    pub fn protected(
        path: impl Into<String>,
        name: impl Into<String>,
        view: View,
        required_role: Option<Role>,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view,
            requires_auth: true,
            required_role,
        }
    }
}

/// Immutable set of routes with a designated login route.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
    login: usize,
}

impl RouteTable {
    pub fn new(routes: Vec<RouteDescriptor>, login_path: &str) -> Result<Self, RouteTableError> {
        let mut seen = HashSet::new();
        for route in &routes {
            if !seen.insert(route.path.as_str()) {
                return Err(RouteTableError::DuplicatePath(route.path.clone()));
            }
        }

        let login = routes
            .iter()
            .position(|r| r.path == login_path)
            .ok_or_else(|| RouteTableError::MissingLogin(login_path.to_string()))?;
        if routes[login].requires_auth {
            return Err(RouteTableError::ProtectedLogin(login_path.to_string()));
        }

        Ok(Self { routes, login })
    }

    /// The application's five routes, with `/` as the login view.
    pub fn standard() -> Self {
        Self {
            routes: vec![
                RouteDescriptor::public("/", "Login", View::Login),
                RouteDescriptor::protected("/admin", "Admin", View::AdminPanel, Some(Role::Admin)),
                RouteDescriptor::protected("/dashboard", "Dashboard", View::Dashboard, None),
                RouteDescriptor::protected(
                    "/manager",
                    "ManagerDashboard",
                    View::ManagerDashboard,
                    Some(Role::Manager),
                ),
                RouteDescriptor::protected(
                    "/executor",
                    "ExecutorView",
                    View::ExecutorView,
                    Some(Role::Executor),
                ),
            ],
            login: 0,
        }
    }

    /// Exact-match lookup by path.
    pub fn find(&self, path: &str) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|r| r.path == path)
    }

    pub fn login(&self) -> &RouteDescriptor {
        &self.routes[self.login]
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.routes.iter()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table() {
        let table = RouteTable::standard();
        assert_eq!(table.iter().count(), 5);
        assert_eq!(table.login().path, "/");
        assert!(!table.login().requires_auth);

        let admin = table.find("/admin").unwrap();
        assert_eq!(admin.required_role, Some(Role::Admin));
        assert!(admin.requires_auth);

        let dashboard = table.find("/dashboard").unwrap();
        assert!(dashboard.requires_auth);
        assert_eq!(dashboard.required_role, None);

        assert!(table.find("/nope").is_none());
    }

    #[test]
    fn test_standard_table_passes_validation() {
        let routes: Vec<_> = RouteTable::standard().iter().cloned().collect();
        assert!(RouteTable::new(routes, "/").is_ok());
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let routes = vec![
            RouteDescriptor::public("/", "Login", View::Login),
            RouteDescriptor::protected("/", "Other", View::Dashboard, None),
        ];
        assert_eq!(
            RouteTable::new(routes, "/").unwrap_err(),
            RouteTableError::DuplicatePath("/".into())
        );
    }

    #[test]
    fn test_login_must_exist_and_be_public() {
        let routes = vec![RouteDescriptor::protected("/home", "Home", View::Dashboard, None)];
        assert_eq!(
            RouteTable::new(routes.clone(), "/").unwrap_err(),
            RouteTableError::MissingLogin("/".into())
        );
        assert_eq!(
            RouteTable::new(routes, "/home").unwrap_err(),
            RouteTableError::ProtectedLogin("/home".into())
        );
    }
}
