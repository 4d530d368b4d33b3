//! Campaign and survey data source
//!
//! The export pipeline only needs lookups by id and pass-through creation, so
//! the data source is a small trait. "Not found" is an `Ok(None)`, not an error;
//! `Err` is reserved for the source itself failing.

mod memory;

pub use memory::{InMemoryDataClient, SeedData};

use crate::error::ExportResult;
use crate::types::{Campaign, Survey};

pub trait DataClient: Send + Sync {
    fn get_survey(&self, id: &str) -> ExportResult<Option<Survey>>;

    fn create_survey(&self, survey: Survey) -> ExportResult<()>;

    fn get_campaign(&self, id: &str) -> ExportResult<Option<Campaign>>;

    fn create_campaign(&self, campaign: Campaign) -> ExportResult<()>;
}
