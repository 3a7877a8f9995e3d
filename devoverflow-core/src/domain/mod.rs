//! Core domain entities
//!
//! Plain data shapes shared with the UI and account layers. No I/O here.

mod theme;
mod user;
pub mod result;

pub use theme::Theme;
pub use user::User;
