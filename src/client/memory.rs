use super::DataClient;
use crate::error::{ExportError, ExportResult};
use crate::types::{Campaign, Survey};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// Seed file layout:
///
/// ```yaml
/// surveys:
///   - id: S1
///     client: Acme
///     clientAddress: { streetNumber: "12", streetName: Main St, postalCode: "75000", city: Paris }
/// campaigns:
///   - id: C1
///     surveyId: S1
///     addressStatuses:
///       - address: { streetNumber: "1", streetName: Rue A, postalCode: "75001", city: Paris }
///         status: VALID
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub surveys: Vec<Survey>,
    #[serde(default)]
    pub campaigns: Vec<Campaign>,
}

impl SeedData {
    pub fn from_yaml_str(content: &str) -> ExportResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_yaml_file(path: &Path) -> ExportResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }
}

/// Process-local data source, keyed by id. Creating an existing id replaces it.
#[derive(Debug, Default)]
pub struct InMemoryDataClient {
    surveys: RwLock<HashMap<String, Survey>>,
    campaigns: RwLock<HashMap<String, Campaign>>,
}

impl InMemoryDataClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed(seed: SeedData) -> Self {
        let client = Self::new();
        {
            let mut surveys = client.surveys.write().unwrap_or_else(|e| e.into_inner());
            for survey in seed.surveys {
                surveys.insert(survey.id.clone(), survey);
            }
            let mut campaigns = client.campaigns.write().unwrap_or_else(|e| e.into_inner());
            for campaign in seed.campaigns {
                campaigns.insert(campaign.id.clone(), campaign);
            }
        }
        client
    }

    pub fn from_yaml_file(path: &Path) -> ExportResult<Self> {
        let seed = SeedData::from_yaml_file(path)?;
        debug!(
            surveys = seed.surveys.len(),
            campaigns = seed.campaigns.len(),
            path = %path.display(),
            "seed data loaded"
        );
        Ok(Self::from_seed(seed))
    }

    pub fn survey_count(&self) -> usize {
        self.surveys.read().map(|m| m.len()).unwrap_or_default()
    }

    pub fn campaign_count(&self) -> usize {
        self.campaigns.read().map(|m| m.len()).unwrap_or_default()
    }

    fn read<'a, T>(lock: &'a RwLock<T>) -> ExportResult<RwLockReadGuard<'a, T>> {
        lock.read()
            .map_err(|_| ExportError::Client("data store lock poisoned".to_string()))
    }

    fn write<'a, T>(lock: &'a RwLock<T>) -> ExportResult<RwLockWriteGuard<'a, T>> {
        lock.write()
            .map_err(|_| ExportError::Client("data store lock poisoned".to_string()))
    }
}

impl DataClient for InMemoryDataClient {
    fn get_survey(&self, id: &str) -> ExportResult<Option<Survey>> {
        Ok(Self::read(&self.surveys)?.get(id).cloned())
    }

    fn create_survey(&self, survey: Survey) -> ExportResult<()> {
        Self::write(&self.surveys)?.insert(survey.id.clone(), survey);
        Ok(())
    }

    fn get_campaign(&self, id: &str) -> ExportResult<Option<Campaign>> {
        Ok(Self::read(&self.campaigns)?.get(id).cloned())
    }

    fn create_campaign(&self, campaign: Campaign) -> ExportResult<()> {
        Self::write(&self.campaigns)?.insert(campaign.id.clone(), campaign);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Address, Status};

    const SEED: &str = r#"
surveys:
  - id: S1
    client: Acme
    clientAddress:
      streetNumber: "12"
      streetName: Main St
      postalCode: "75000"
      city: Paris
campaigns:
  - id: C1
    surveyId: S1
    addressStatuses:
      - address: { streetNumber: "1", streetName: Rue A, postalCode: "75001", city: Paris }
        status: VALID
      - address: { streetNumber: "2", streetName: Rue B, postalCode: "75002", city: Paris }
        status: INVALID
  - id: C2
    surveyId: S1
"#;

    #[test]
    fn test_seed_from_yaml() {
        let seed = SeedData::from_yaml_str(SEED).unwrap();
        assert_eq!(seed.surveys.len(), 1);
        assert_eq!(seed.campaigns.len(), 2);
        assert_eq!(seed.campaigns[0].address_statuses[1].status, Status::Invalid);
        assert!(seed.campaigns[1].address_statuses.is_empty());
    }

    #[test]
    fn test_seed_empty_document() {
        let seed = SeedData::from_yaml_str("{}").unwrap();
        assert!(seed.surveys.is_empty());
        assert!(seed.campaigns.is_empty());
    }

    #[test]
    fn test_seed_invalid_yaml() {
        let result = SeedData::from_yaml_str("surveys: [ {id: ");
        assert!(matches!(result, Err(ExportError::Yaml(_))));
    }

    #[test]
    fn test_seed_missing_file() {
        let result = SeedData::from_yaml_file(Path::new("/nonexistent/seed.yaml"));
        assert!(matches!(result, Err(ExportError::Io(_))));
    }

    #[test]
    fn test_lookup_after_seed() {
        let client = InMemoryDataClient::from_seed(SeedData::from_yaml_str(SEED).unwrap());
        assert_eq!(client.survey_count(), 1);
        assert_eq!(client.campaign_count(), 2);

        let campaign = client.get_campaign("C1").unwrap().unwrap();
        assert_eq!(campaign.survey_id, "S1");
        assert!(client.get_campaign("missing").unwrap().is_none());
        assert!(client.get_survey("missing").unwrap().is_none());
    }

    #[test]
    fn test_create_then_get() {
        let client = InMemoryDataClient::new();
        let survey = Survey::new("S9", "Globex", Address::new("5", "Elm", "10001", "NYC"));
        client.create_survey(survey.clone()).unwrap();
        client.create_campaign(Campaign::new("C9", "S9")).unwrap();

        assert_eq!(client.get_survey("S9").unwrap(), Some(survey));
        assert_eq!(client.get_campaign("C9").unwrap().unwrap().survey_id, "S9");
    }

    #[test]
    fn test_create_replaces_existing() {
        let client = InMemoryDataClient::new();
        client.create_campaign(Campaign::new("C1", "S1")).unwrap();
        client.create_campaign(Campaign::new("C1", "S2")).unwrap();

        assert_eq!(client.campaign_count(), 1);
        assert_eq!(client.get_campaign("C1").unwrap().unwrap().survey_id, "S2");
    }
}
