//! User domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user record as exchanged with the account and profile layers
///
/// This crate never creates or mutates stored users; the struct only pins
/// down the shape. `password` holds whatever encoded credential the
/// authentication layer stores, never a plaintext value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            password: password.into(),
            created_at,
            updated_at: created_at,
        }
    }
}
