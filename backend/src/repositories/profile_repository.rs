//! Database repository for profile operations.
//!
//! Profiles are keyed by their owning user; writes go through a single
//! atomic upsert so there is never more than one profile per user.

use crate::database::models::{ProfilePatch, ProfileRow};
use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;
use sqlx::types::Json;
use uuid::Uuid;

pub struct ProfileRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProfileRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates the user's profile or updates it in place.
    ///
    /// On create only the supplied fields are set. On update every supplied
    /// field overwrites the stored one and absent fields keep their value,
    /// except the social handles, which are replaced together.
    ///
    /// # Returns
    /// The profile row as it is after the write
    pub async fn upsert_profile(&self, user_id: &str, patch: &ProfilePatch) -> Result<ProfileRow> {
        let now = Utc::now();

        let profile = sqlx::query_as::<_, ProfileRow>(
            r#"
            INSERT INTO profiles (
                id, user_id, company, website, location, bio, status, githubusername,
                skills, youtube, facebook, twitter, instagram, linkedin, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT (user_id) DO UPDATE SET
                company = COALESCE(excluded.company, profiles.company),
                website = COALESCE(excluded.website, profiles.website),
                location = COALESCE(excluded.location, profiles.location),
                bio = COALESCE(excluded.bio, profiles.bio),
                status = COALESCE(excluded.status, profiles.status),
                githubusername = COALESCE(excluded.githubusername, profiles.githubusername),
                skills = COALESCE(excluded.skills, profiles.skills),
                youtube = excluded.youtube,
                facebook = excluded.facebook,
                twitter = excluded.twitter,
                instagram = excluded.instagram,
                linkedin = excluded.linkedin,
                updated_at = excluded.updated_at
            RETURNING
                id, user_id, company, website, location, bio, status, githubusername,
                skills, youtube, facebook, twitter, instagram, linkedin, created_at, updated_at
            "#,
        )
        .bind(Uuid::now_v7().to_string())
        .bind(user_id)
        .bind(&patch.company)
        .bind(&patch.website)
        .bind(&patch.location)
        .bind(&patch.bio)
        .bind(&patch.status)
        .bind(&patch.githubusername)
        .bind(patch.skills.clone().map(Json))
        .bind(&patch.social.youtube)
        .bind(&patch.social.facebook)
        .bind(&patch.social.twitter)
        .bind(&patch.social.instagram)
        .bind(&patch.social.linkedin)
        .bind(now)
        .bind(now)
        .fetch_one(self.pool)
        .await?;

        Ok(profile)
    }

    /// Retrieves a user's profile with the owner's name and avatar.
    ///
    /// # Returns
    /// `Some(ProfileRow)` if the user has a profile, `None` otherwise
    pub async fn get_profile_by_user_id(&self, user_id: &str) -> Result<Option<ProfileRow>> {
        let profile = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT
            p.id, p.user_id, p.company, p.website, p.location, p.bio, p.status,
            p.githubusername, p.skills, p.youtube, p.facebook, p.twitter, p.instagram,
            p.linkedin, p.created_at, p.updated_at,
            u.name AS owner_name,
            u.avatar AS owner_avatar
            FROM profiles p
            LEFT JOIN users u ON u.id = p.user_id
            WHERE p.user_id = ?
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(profile)
    }
}
