//! Application-wide constants
//!
//! Static tables shared by the UI, auth and storage layers. Nothing in this
//! crate enforces them; they are plain data.

use std::time::Duration;

use serde::Serialize;

// Navigation

/// A top-level navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "/", label: "Home" },
    NavLink { href: "/questions", label: "Questions" },
    NavLink { href: "/tags", label: "Tags" },
    NavLink { href: "/community", label: "Community" },
    NavLink { href: "/about", label: "About" },
];

// Pagination
pub const ITEMS_PER_PAGE: usize = 10;
pub const MAX_PAGE_DISPLAY: usize = 5;

// Form validation
pub const USERNAME_MIN_LENGTH: usize = 3;
pub const USERNAME_MAX_LENGTH: usize = 20;
pub const PASSWORD_MIN_LENGTH: usize = 8;

// API routes

/// Path prefixes of the backend API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ApiEndpoints {
    pub auth: &'static str,
    pub users: &'static str,
    pub posts: &'static str,
    pub comments: &'static str,
    pub tags: &'static str,
}

pub const API_ENDPOINTS: ApiEndpoints = ApiEndpoints {
    auth: "/api/auth",
    users: "/api/users",
    posts: "/api/posts",
    comments: "/api/comments",
    tags: "/api/tags",
};

// Timeouts
pub const DEBOUNCE_DELAY_MS: u64 = 300;
pub const API_TIMEOUT_MS: u64 = 10_000;
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(DEBOUNCE_DELAY_MS);
pub const API_TIMEOUT: Duration = Duration::from_millis(API_TIMEOUT_MS);

// Local storage keys

/// Keys under which the client persists its local state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StorageKeys {
    pub theme: &'static str,
    pub auth_token: &'static str,
    pub user: &'static str,
}

pub const STORAGE_KEYS: StorageKeys = StorageKeys {
    theme: "deve-overflow-theme",
    auth_token: "deve-overflow-token",
    user: "deve-overflow-user",
};

// Theme

/// Theme identifiers; see [`crate::domain::Theme`] for the typed form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Themes {
    pub light: &'static str,
    pub dark: &'static str,
    pub system: &'static str,
}

pub const THEMES: Themes = Themes {
    light: "light",
    dark: "dark",
    system: "system",
};
