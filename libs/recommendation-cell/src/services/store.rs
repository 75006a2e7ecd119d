use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use shared_config::AppConfig;
use shared_database::supabase::SupabaseClient;

use crate::models::{HealthSnapshot, Profile, SymptomCategory, SymptomEntry};

/// Read access to the records the recommendation rules consume.
#[async_trait]
pub trait HealthRecordStore: Send + Sync {
    /// Most recent `health_data` row by `record_date`, if any.
    async fn latest_snapshot(&self, user_id: &str, auth_token: &str) -> Result<Option<HealthSnapshot>>;

    /// Newest first, at most `limit` rows, optionally restricted to one category.
    async fn recent_symptoms(
        &self,
        user_id: &str,
        limit: usize,
        category: Option<SymptomCategory>,
        auth_token: &str,
    ) -> Result<Vec<SymptomEntry>>;

    async fn profile(&self, user_id: &str, auth_token: &str) -> Result<Option<Profile>>;
}

pub struct SupabaseHealthStore {
    supabase: SupabaseClient,
}

impl SupabaseHealthStore {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
        }
    }
}

#[async_trait]
impl HealthRecordStore for SupabaseHealthStore {
    async fn latest_snapshot(&self, user_id: &str, auth_token: &str) -> Result<Option<HealthSnapshot>> {
        debug!("Fetching latest health data for user: {}", user_id);

        let params = [
            ("user_id", format!("eq.{}", user_id)),
            ("order", "record_date.desc".to_string()),
            ("limit", "1".to_string()),
        ];
        let rows: Vec<HealthSnapshot> = self.supabase.select("health_data", &params, auth_token).await?;

        Ok(rows.into_iter().next())
    }

    async fn recent_symptoms(
        &self,
        user_id: &str,
        limit: usize,
        category: Option<SymptomCategory>,
        auth_token: &str,
    ) -> Result<Vec<SymptomEntry>> {
        debug!("Fetching up to {} recent symptoms for user: {} (category {:?})", limit, user_id, category);

        if limit == 0 {
            return Ok(Vec::new());
        }

        let mut params = vec![("user_id", format!("eq.{}", user_id))];
        if let Some(category) = category {
            params.push(("symptom_type", format!("eq.{}", category.as_str())));
        }
        params.push(("order", "logged_at.desc".to_string()));
        params.push(("limit", limit.to_string()));

        let mut rows: Vec<SymptomEntry> = self.supabase.select("symptoms", &params, auth_token).await?;
        rows.truncate(limit);

        Ok(rows)
    }

    async fn profile(&self, user_id: &str, auth_token: &str) -> Result<Option<Profile>> {
        debug!("Fetching profile for user: {}", user_id);

        let params = [
            ("id", format!("eq.{}", user_id)),
            ("select", "id,activity_level".to_string()),
            ("limit", "1".to_string()),
        ];
        let rows: Vec<Profile> = self.supabase.select("users", &params, auth_token).await?;

        Ok(rows.into_iter().next())
    }
}
