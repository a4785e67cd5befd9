//! Profile business logic service.
//!
//! Turns free-form profile submissions into a normalized patch and applies it
//! with create-or-update semantics, one profile per user.

use crate::database::models::{Profile, ProfileFields, ProfilePatch, Social};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::profile_repository::ProfileRepository;
use sqlx::SqlitePool;
use tracing::info;

/// Service layer for profile operations.
pub struct ProfileService<'a> {
    /// Shared database connection pool
    pool: &'a SqlitePool,
}

impl<'a> ProfileService<'a> {
    /// Creates a new ProfileService instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates the user's profile or updates the fields present in `fields`.
    ///
    /// # Arguments
    /// * `user_id` - Authenticated user the profile belongs to
    /// * `fields` - Sparse submission; absent fields keep their stored value
    ///
    /// # Returns
    /// The profile as written
    pub async fn upsert_profile(
        &self,
        user_id: &str,
        fields: ProfileFields,
    ) -> ServiceResult<Profile> {
        let patch = Self::build_patch(fields);

        let repo = ProfileRepository::new(self.pool);
        let profile = repo.upsert_profile(user_id, &patch).await?;

        info!("Saved profile {} for user {}", profile.id, user_id);
        Ok(profile.into())
    }

    /// Retrieves the caller's own profile with their name and avatar.
    ///
    /// # Errors
    /// Returns `ServiceError::NotFound` if the user has no profile yet
    pub async fn get_own_profile(&self, user_id: &str) -> ServiceResult<Profile> {
        self.get_profile_by_user_id(user_id).await
    }

    /// Retrieves any user's profile with their name and avatar.
    ///
    /// # Errors
    /// Returns `ServiceError::NotFound` if the user has no profile
    pub async fn get_profile_by_user_id(&self, user_id: &str) -> ServiceResult<Profile> {
        let repo = ProfileRepository::new(self.pool);
        let profile = repo
            .get_profile_by_user_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Profile", user_id))?;
        Ok(profile.into())
    }

    /// Normalizes a submission. Empty strings count as not supplied.
    pub fn build_patch(fields: ProfileFields) -> ProfilePatch {
        ProfilePatch {
            company: supplied(fields.company),
            website: supplied(fields.website),
            location: supplied(fields.location),
            bio: supplied(fields.bio),
            status: supplied(fields.status),
            githubusername: supplied(fields.githubusername),
            skills: supplied(fields.skills).map(|skills| split_skills(&skills)),
            social: Social {
                youtube: supplied(fields.youtube),
                facebook: supplied(fields.facebook),
                twitter: supplied(fields.twitter),
                instagram: supplied(fields.instagram),
                linkedin: supplied(fields.linkedin),
            },
        }
    }
}

fn supplied(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

/// Splits a comma separated skill list, trimming each entry.
///
/// Order is kept and empty entries are passed through.
pub fn split_skills(skills: &str) -> Vec<String> {
    skills
        .split(',')
        .map(|skill| skill.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::database::models::RegisterUser;
    use crate::services::credential_service::CredentialService;
    use crate::database::test_pool;
    use crate::repositories::user_repository::UserRepository;

    async fn registered_user(pool: &SqlitePool, email: &str) -> String {
        let config = Config::for_tests();
        CredentialService::new(pool, &config)
            .register(RegisterUser {
                name: "Jane Doe".to_string(),
                email: email.to_string(),
                password: "secret123".to_string(),
            })
            .await
            .unwrap();

        UserRepository::new(pool)
            .get_user_by_email(email)
            .await
            .unwrap()
            .unwrap()
            .id
    }

    #[test]
    fn test_split_skills_trims_and_keeps_order() {
        assert_eq!(split_skills("js, go , rust"), vec!["js", "go", "rust"]);
        assert_eq!(split_skills("rust"), vec!["rust"]);
    }

    #[test]
    fn test_split_skills_keeps_empty_entries() {
        assert_eq!(split_skills("js,,go"), vec!["js", "", "go"]);
    }

    #[test]
    fn test_build_patch_only_sets_supplied_fields() {
        let patch = ProfileService::build_patch(ProfileFields {
            status: Some("Developer".to_string()),
            skills: Some("js, go".to_string()),
            company: Some(String::new()),
            twitter: Some("@jane".to_string()),
            ..Default::default()
        });

        assert_eq!(patch.status.as_deref(), Some("Developer"));
        assert_eq!(patch.skills, Some(vec!["js".to_string(), "go".to_string()]));
        assert_eq!(patch.company, None);
        assert_eq!(patch.bio, None);
        assert_eq!(
            patch.social,
            Social {
                twitter: Some("@jane".to_string()),
                ..Default::default()
            }
        );
    }

    #[tokio::test]
    async fn test_upsert_creates_profile() {
        let pool = test_pool().await;
        let user_id = registered_user(&pool, "jane@example.com").await;
        let service = ProfileService::new(&pool);

        let profile = service
            .upsert_profile(
                &user_id,
                ProfileFields {
                    status: Some("Dev".to_string()),
                    skills: Some("js, go".to_string()),
                    youtube: Some("janedoe".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(profile.user.id, user_id);
        assert_eq!(profile.status.as_deref(), Some("Dev"));
        assert_eq!(profile.skills, vec!["js", "go"]);
        assert_eq!(profile.social.youtube.as_deref(), Some("janedoe"));
        assert_eq!(profile.social.twitter, None);
        assert_eq!(profile.company, None);
    }

    #[tokio::test]
    async fn test_upsert_keeps_fields_absent_from_update() {
        let pool = test_pool().await;
        let user_id = registered_user(&pool, "jane@example.com").await;
        let service = ProfileService::new(&pool);

        let created = service
            .upsert_profile(
                &user_id,
                ProfileFields {
                    status: Some("Dev".to_string()),
                    skills: Some("js, go".to_string()),
                    linkedin: Some("jane-doe".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let updated = service
            .upsert_profile(
                &user_id,
                ProfileFields {
                    bio: Some("hi".to_string()),
                    twitter: Some("@jane".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.status.as_deref(), Some("Dev"));
        assert_eq!(updated.skills, vec!["js", "go"]);
        assert_eq!(updated.bio.as_deref(), Some("hi"));
        assert_eq!(updated.social.twitter.as_deref(), Some("@jane"));
    }

    #[tokio::test]
    async fn test_upsert_replaces_social_handles_as_a_unit() {
        let pool = test_pool().await;
        let user_id = registered_user(&pool, "jane@example.com").await;
        let service = ProfileService::new(&pool);

        service
            .upsert_profile(
                &user_id,
                ProfileFields {
                    status: Some("Dev".to_string()),
                    skills: Some("js".to_string()),
                    linkedin: Some("jl".to_string()),
                    youtube: Some("janedoe".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let updated = service
            .upsert_profile(
                &user_id,
                ProfileFields {
                    status: Some("Dev".to_string()),
                    skills: Some("js".to_string()),
                    twitter: Some("@j".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(
            updated.social,
            Social {
                twitter: Some("@j".to_string()),
                ..Default::default()
            }
        );

        let cleared = service
            .upsert_profile(
                &user_id,
                ProfileFields {
                    status: Some("Dev".to_string()),
                    skills: Some("js".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(cleared.social, Social::default());
    }

    #[tokio::test]
    async fn test_upsert_overwrites_supplied_fields() {
        let pool = test_pool().await;
        let user_id = registered_user(&pool, "jane@example.com").await;
        let service = ProfileService::new(&pool);

        service
            .upsert_profile(
                &user_id,
                ProfileFields {
                    status: Some("Dev".to_string()),
                    skills: Some("js, go".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        let updated = service
            .upsert_profile(
                &user_id,
                ProfileFields {
                    status: Some("Senior Dev".to_string()),
                    skills: Some("rust".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.status.as_deref(), Some("Senior Dev"));
        assert_eq!(updated.skills, vec!["rust"]);

        let stored = service.get_own_profile(&user_id).await.unwrap();
        assert_eq!(stored.skills, vec!["rust"]);
    }

    #[tokio::test]
    async fn test_get_own_profile_includes_owner() {
        let pool = test_pool().await;
        let user_id = registered_user(&pool, "jane@example.com").await;
        let service = ProfileService::new(&pool);
        service
            .upsert_profile(
                &user_id,
                ProfileFields {
                    status: Some("Dev".to_string()),
                    skills: Some("js".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let profile = service.get_own_profile(&user_id).await.unwrap();

        assert_eq!(profile.user.id, user_id);
        assert_eq!(profile.user.name.as_deref(), Some("Jane Doe"));
        assert!(profile.user.avatar.is_some());
    }

    #[tokio::test]
    async fn test_get_own_profile_not_found() {
        let pool = test_pool().await;
        let user_id = registered_user(&pool, "jane@example.com").await;

        let result = ProfileService::new(&pool).get_own_profile(&user_id).await;

        assert!(matches!(result, Err(ServiceError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_upsert_for_unknown_user_is_a_storage_failure() {
        let pool = test_pool().await;

        let result = ProfileService::new(&pool)
            .upsert_profile(
                "missing",
                ProfileFields {
                    status: Some("Dev".to_string()),
                    skills: Some("js".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(ServiceError::Database { .. })));
    }
}
