//! Rust structs that represent database table mappings.
//!
//! These models define the structure of data as it is stored in and retrieved
//! from the database, together with the request payloads that feed them. The
//! outward-facing `Profile` document differs from its storage row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Registration payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterUser {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[serde(default)]
    #[validate(email(message = "Please include a valid email"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 6, message = "Please enter a password with 6 or more characters"))]
    pub password: String,
}

/// Login payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginUser {
    #[serde(default)]
    #[validate(email(message = "Please include a valid email"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Row to insert for a new user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub password_hash: String,
}

/// Sparse profile submission, exactly as posted by the client.
///
/// `skills` is a comma separated list; the social handles are flat.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ProfileFields {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    #[validate(
        required(message = "Status is required"),
        length(min = 1, message = "Status is required")
    )]
    pub status: Option<String>,
    pub githubusername: Option<String>,
    #[validate(
        required(message = "Skills is required"),
        length(min = 1, message = "Skills is required")
    )]
    pub skills: Option<String>,
    pub youtube: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
}

/// Handles on external platforms. Absent handles are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Social {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

/// Normalized profile write. `None` leaves the stored value untouched,
/// apart from `social`, which always replaces the stored handles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePatch {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: Option<String>,
    pub githubusername: Option<String>,
    pub skills: Option<Vec<String>>,
    pub social: Social,
}

#[derive(Debug, Clone, FromRow)]
pub struct ProfileRow {
    pub id: String,
    pub user_id: String,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: Option<String>,
    pub githubusername: Option<String>,
    pub skills: Option<Json<Vec<String>>>,
    pub youtube: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Only selected when the owning user is joined in.
    #[sqlx(default)]
    pub owner_name: Option<String>,
    #[sqlx(default)]
    pub owner_avatar: Option<String>,
}

/// The user a profile belongs to, with name and avatar when resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileOwner {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub user: ProfileOwner,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub githubusername: Option<String>,
    pub skills: Vec<String>,
    pub social: Social,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Profile {
            id: row.id,
            user: ProfileOwner {
                id: row.user_id,
                name: row.owner_name,
                avatar: row.owner_avatar,
            },
            company: row.company,
            website: row.website,
            location: row.location,
            bio: row.bio,
            status: row.status,
            githubusername: row.githubusername,
            skills: row.skills.map(|skills| skills.0).unwrap_or_default(),
            social: Social {
                youtube: row.youtube,
                facebook: row.facebook,
                twitter: row.twitter,
                instagram: row.instagram,
                linkedin: row.linkedin,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
