//! HTML templates for the dashboard.
//!
//! Uses a simple template approach with Tailwind CSS and Alpine.js.

use hourly_core::{Role, UserIdentity};

const HEAD: &str = r##"<meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <script src="https://cdn.tailwindcss.com"></script>
    <script>
        tailwind.config = {
            darkMode: 'class',
            theme: {
                extend: {
                    colors: {
                        primary: {
                            50: '#ecfdf5',
                            100: '#d1fae5',
                            200: '#a7f3d0',
                            500: '#10b981',
                            600: '#059669',
                            700: '#047857',
                            800: '#065f46',
                            900: '#064e3b',
                        }
                    }
                }
            }
        }
    </script>
    <script defer src="https://unpkg.com/alpinejs@3.x.x/dist/cdn.min.js"></script>
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css">
    <style>[x-cloak] { display: none !important; }</style>"##;

/// Page layout for a signed-in user.
pub fn layout(title: &str, identity: &UserIdentity, landing: &str, content: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en" x-data="{{ darkMode: localStorage.getItem('darkMode') === 'true' }}" :class="{{ 'dark': darkMode }}">
<head>
    {HEAD}
    <title>{title} - Hourly</title>
</head>
<body class="bg-gray-50 dark:bg-gray-900 min-h-screen">
    {nav}

    <main class="p-6 lg:p-8">
        <div class="max-w-7xl mx-auto">
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white mb-6">{title}</h1>
            {content}
        </div>
    </main>
</body>
</html>"##,
        title = html_escape(title),
        nav = nav_template(identity, landing),
    )
}

fn nav_template(identity: &UserIdentity, landing: &str) -> String {
    format!(
        r##"<nav class="bg-primary-600 dark:bg-primary-900 text-white px-4 py-3 sticky top-0 z-50 shadow-lg">
        <div class="flex items-center justify-between">
            <div class="flex items-center gap-4">
                <a href="{landing}" class="flex items-center gap-2 font-semibold">
                    <i class="fas fa-clock"></i> Hourly
                </a>
                <a href="/dashboard" class="text-sm hover:underline">Dashboard</a>
            </div>
            <div class="flex items-center gap-4">
                <span class="text-sm">{name}</span>
                {role}
                <button @click="darkMode = !darkMode; localStorage.setItem('darkMode', darkMode)"
                        class="p-2 hover:bg-primary-700 rounded-lg">
                    <i class="fas" :class="darkMode ? 'fa-sun' : 'fa-moon'"></i>
                </button>
                <form method="POST" action="/logout">
                    <button type="submit" class="p-2 hover:bg-primary-700 rounded-lg" title="Sign out">
                        <i class="fas fa-sign-out-alt"></i>
                    </button>
                </form>
            </div>
        </div>
    </nav>"##,
        landing = html_escape(landing),
        name = html_escape(&identity.name),
        role = role_badge(identity.role),
    )
}

/// Badge showing a role.
pub fn role_badge(role: Role) -> String {
    let color = match role {
        Role::Admin => "red",
        Role::Manager => "blue",
        Role::Executor => "green",
    };
    badge(role.as_str(), color)
}

/// Badge component.
pub fn badge(text: &str, color: &str) -> String {
    format!(
        r##"<span class="inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium bg-{color}-100 dark:bg-{color}-900/30 text-{color}-800 dark:text-{color}-300">{text}</span>"##,
        text = html_escape(text),
    )
}

/// Card component.
pub fn card(title: &str, content: &str) -> String {
    format!(
        r##"<div class="bg-white dark:bg-gray-800 rounded-xl shadow-sm border border-gray-200 dark:border-gray-700 overflow-hidden">
            <div class="px-6 py-4 border-b border-gray-200 dark:border-gray-700">
                <h3 class="text-lg font-semibold text-gray-900 dark:text-white">{title}</h3>
            </div>
            <div class="p-6">
                {content}
            </div>
        </div>"##,
        title = html_escape(title),
    )
}

/// Empty state component.
pub fn empty_state(icon: &str, title: &str, description: &str) -> String {
    format!(
        r##"<div class="text-center py-12">
            <i class="fas fa-{icon} text-4xl text-gray-400 dark:text-gray-600 mb-4"></i>
            <h3 class="text-lg font-medium text-gray-900 dark:text-white">{title}</h3>
            <p class="mt-1 text-gray-500 dark:text-gray-400">{description}</p>
        </div>"##
    )
}

/// Tab container. Each tab is `(key, label, content)`; the first is active.
pub fn tabs(id: &str, tabs: &[(&str, &str, String)]) -> String {
    let tab_buttons: String = tabs
        .iter()
        .map(|(key, label, _)| {
            format!(
                r##"<button @click="activeTab = '{key}'"
                        :class="{{ 'border-primary-600 text-primary-600 dark:text-primary-400': activeTab === '{key}', 'border-transparent text-gray-500 hover:text-gray-700 hover:border-gray-300': activeTab !== '{key}' }}"
                        class="px-4 py-2 border-b-2 font-medium text-sm transition-colors">
                    {label}
                </button>"##
            )
        })
        .collect();

    let tab_contents: String = tabs
        .iter()
        .map(|(key, _, content)| {
            format!(
                r##"<div x-show="activeTab === '{key}'" x-cloak>
                    {content}
                </div>"##
            )
        })
        .collect();

    let first_key = tabs.first().map(|(k, _, _)| *k).unwrap_or("default");

    format!(
        r##"<div x-data="{{ activeTab: '{first_key}' }}" id="{id}">
            <div class="border-b border-gray-200 dark:border-gray-700 mb-4">
                <nav class="flex gap-2">
                    {tab_buttons}
                </nav>
            </div>
            <div>
                {tab_contents}
            </div>
        </div>"##
    )
}

/// Generate the login page HTML.
pub fn login_page(error: Option<&str>) -> String {
    let error_html = if error.is_some() {
        r##"<div class="mb-6 p-4 bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 rounded-lg">
            <div class="flex items-center gap-3">
                <i class="fas fa-exclamation-circle text-red-500"></i>
                <span class="text-red-700 dark:text-red-400">Invalid login or password. Please try again.</span>
            </div>
        </div>"##
    } else {
        ""
    };

    format!(
        r##"<!DOCTYPE html>
<html lang="en" x-data="{{ darkMode: localStorage.getItem('darkMode') === 'true' }}" :class="{{ 'dark': darkMode }}">
<head>
    {HEAD}
    <title>Sign in - Hourly</title>
</head>
<body class="bg-gradient-to-br from-primary-600 via-primary-700 to-primary-900 dark:from-gray-900 dark:via-gray-800 dark:to-gray-900 min-h-screen flex items-center justify-center p-4">
    <div class="w-full max-w-md">
        <div class="text-center mb-8 text-white">
            <i class="fas fa-clock text-4xl mb-2"></i>
            <h1 class="text-2xl font-bold">Hourly</h1>
            <p class="text-primary-200 dark:text-gray-400">Time tracking for teams</p>
        </div>

        <div class="bg-white dark:bg-gray-800 rounded-2xl shadow-2xl p-8">
            {error_html}

            <form method="POST" action="/login" class="space-y-5">
                <div>
                    <label for="login" class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">Login</label>
                    <input type="text" id="login" name="login" required autofocus
                        class="block w-full px-4 py-3 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-700 text-gray-900 dark:text-white focus:ring-2 focus:ring-primary-500"
                        placeholder="Enter your login">
                </div>

                <div x-data="{{ show: false }}" class="relative">
                    <label for="password" class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">Password</label>
                    <input :type="show ? 'text' : 'password'" id="password" name="password"
                        class="block w-full px-4 py-3 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-700 text-gray-900 dark:text-white focus:ring-2 focus:ring-primary-500"
                        placeholder="Enter your password">
                    <button type="button" @click="show = !show" class="absolute right-3 top-10 text-gray-400">
                        <i class="fas" :class="show ? 'fa-eye-slash' : 'fa-eye'"></i>
                    </button>
                </div>

                <button type="submit"
                    class="w-full py-3 px-4 bg-primary-600 hover:bg-primary-700 text-white font-medium rounded-lg shadow-lg transition-all">
                    <i class="fas fa-sign-in-alt"></i> Sign In
                </button>
            </form>
        </div>
    </div>
</body>
</html>"##
    )
}

/// Simple HTML escape function.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
