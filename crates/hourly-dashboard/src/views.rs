//! Role view shells.
//!
//! Each shell renders its navigation tabs with empty states; the records
//! behind them live in the REST backend.

use axum::extract::State;
use axum::response::Html;
use hourly_core::UserIdentity;

use crate::auth::CurrentUser;
use crate::state::AppState;
use crate::templates::{self, card, empty_state, tabs};

/// Admin panel: users and competencies.
pub async fn admin_panel(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Html<String> {
    let content = tabs(
        "admin-tabs",
        &[
            (
                "users",
                "Users",
                empty_state(
                    "users",
                    "No users loaded",
                    "User accounts are managed by the backend.",
                ),
            ),
            (
                "competencies",
                "Competencies",
                empty_state(
                    "graduation-cap",
                    "No competencies loaded",
                    "Competencies are managed by the backend.",
                ),
            ),
        ],
    );
    page(&state, &user, "Admin panel", &content)
}

/// Manager dashboard: projects, tasks and reports.
pub async fn manager_dashboard(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Html<String> {
    let content = tabs(
        "manager-tabs",
        &[
            (
                "projects",
                "Projects",
                empty_state(
                    "folder-open",
                    "No projects yet",
                    "Projects you manage appear here.",
                ),
            ),
            (
                "tasks",
                "Tasks",
                empty_state(
                    "tasks",
                    "No tasks yet",
                    "Tasks across your projects appear here.",
                ),
            ),
            (
                "reports",
                "Reports",
                empty_state(
                    "chart-bar",
                    "No reports yet",
                    "Time reports for your projects appear here.",
                ),
            ),
        ],
    );
    page(&state, &user, "Manager dashboard", &content)
}

/// Executor view: time entries and tasks.
pub async fn executor_view(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Html<String> {
    let content = tabs(
        "executor-tabs",
        &[
            (
                "time-entries",
                "Time entries",
                empty_state(
                    "stopwatch",
                    "No time logged",
                    "Your time entries appear here.",
                ),
            ),
            (
                "tasks",
                "Tasks",
                empty_state(
                    "tasks",
                    "No tasks assigned",
                    "Tasks assigned to you appear here.",
                ),
            ),
        ],
    );
    page(&state, &user, "My time", &content)
}

/// Overview for any signed-in user.
pub async fn dashboard(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Html<String> {
    let landing = state.guard().landing().route_for(user.role);
    let content = card(
        "Welcome",
        &format!(
            r#"<p class="text-gray-700 dark:text-gray-300">Signed in as <strong>{name}</strong> {role}.</p>
            <a href="{landing}" class="mt-4 inline-flex items-center gap-2 bg-primary-600 hover:bg-primary-700 text-white px-4 py-2 rounded-lg font-medium">
                <i class="fas fa-arrow-right"></i> Go to your workspace
            </a>"#,
            name = templates::html_escape(&user.name),
            role = templates::role_badge(user.role),
        ),
    );
    page(&state, &user, "Dashboard", &content)
}

fn page(state: &AppState, user: &UserIdentity, title: &str, content: &str) -> Html<String> {
    let landing = state.guard().landing().route_for(user.role);
    Html(templates::layout(title, user, landing, content))
}
