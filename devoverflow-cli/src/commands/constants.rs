//! Constants command - print the shared constant tables

use anyhow::Result;
use colored::Colorize;
use serde_json::json;

use devoverflow_core::constants::{
    API_ENDPOINTS, API_TIMEOUT_MS, DEBOUNCE_DELAY_MS, ITEMS_PER_PAGE, MAX_PAGE_DISPLAY, NAV_LINKS,
    PASSWORD_MIN_LENGTH, STORAGE_KEYS, THEMES, USERNAME_MAX_LENGTH, USERNAME_MIN_LENGTH,
};

use crate::output;

pub fn run(json: bool) -> Result<()> {
    if json {
        return output::json(json!({
            "navLinks": NAV_LINKS,
            "pagination": {
                "itemsPerPage": ITEMS_PER_PAGE,
                "maxPageDisplay": MAX_PAGE_DISPLAY,
            },
            "validation": {
                "usernameMinLength": USERNAME_MIN_LENGTH,
                "usernameMaxLength": USERNAME_MAX_LENGTH,
                "passwordMinLength": PASSWORD_MIN_LENGTH,
            },
            "apiEndpoints": API_ENDPOINTS,
            "timeouts": {
                "debounceDelayMs": DEBOUNCE_DELAY_MS,
                "apiTimeoutMs": API_TIMEOUT_MS,
            },
            "storageKeys": STORAGE_KEYS,
            "themes": THEMES,
        }));
    }

    println!("{}", "Navigation".bold());
    let mut table = output::create_table();
    table.set_header(vec!["Label", "Path"]);
    for link in NAV_LINKS {
        table.add_row(vec![link.label, link.href]);
    }
    println!("{}", table);
    println!();

    println!("{}", "Settings".bold());
    let mut table = output::create_table();
    table.set_header(vec!["Name", "Value"]);
    table.add_row(vec!["Items per page".to_string(), ITEMS_PER_PAGE.to_string()]);
    table.add_row(vec!["Max page buttons".to_string(), MAX_PAGE_DISPLAY.to_string()]);
    table.add_row(vec![
        "Username length".to_string(),
        format!("{}-{}", USERNAME_MIN_LENGTH, USERNAME_MAX_LENGTH),
    ]);
    table.add_row(vec!["Password min length".to_string(), PASSWORD_MIN_LENGTH.to_string()]);
    table.add_row(vec!["Debounce delay".to_string(), format!("{} ms", DEBOUNCE_DELAY_MS)]);
    table.add_row(vec!["API timeout".to_string(), format!("{} ms", API_TIMEOUT_MS)]);
    println!("{}", table);
    println!();

    println!("{}", "API endpoints".bold());
    let mut table = output::create_table();
    table.set_header(vec!["Resource", "Path"]);
    table.add_row(vec!["auth", API_ENDPOINTS.auth]);
    table.add_row(vec!["users", API_ENDPOINTS.users]);
    table.add_row(vec!["posts", API_ENDPOINTS.posts]);
    table.add_row(vec!["comments", API_ENDPOINTS.comments]);
    table.add_row(vec!["tags", API_ENDPOINTS.tags]);
    println!("{}", table);
    println!();

    println!("{}", "Storage keys".bold());
    let mut table = output::create_table();
    table.set_header(vec!["Purpose", "Key"]);
    table.add_row(vec!["theme", STORAGE_KEYS.theme]);
    table.add_row(vec!["auth token", STORAGE_KEYS.auth_token]);
    table.add_row(vec!["user", STORAGE_KEYS.user]);
    println!("{}", table);
    println!();

    println!(
        "Themes: {}, {}, {}",
        THEMES.light, THEMES.dark, THEMES.system
    );

    Ok(())
}
