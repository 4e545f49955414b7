use crate::domain::sample::{NewSample, Sample, SearchCondition, UpdateSample};
use crate::pagination::PageWindow;
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod sample;

/// Filters and paging for a list query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleListQuery {
    pub condition: SearchCondition,
    pub keyword: Option<String>,
    pub window: Option<PageWindow>,
}

impl SampleListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn condition(mut self, condition: SearchCondition) -> Self {
        self.condition = condition;
        self
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn window(mut self, window: PageWindow) -> Self {
        self.window = Some(window);
        self
    }
}

pub trait SampleReader {
    fn get_sample_by_id(&self, id: &str) -> RepositoryResult<Option<Sample>>;
    /// Fetches one page window of samples. The matching total is a separate
    /// call; the two may observe different snapshots under concurrent writes.
    fn list_samples(&self, query: &SampleListQuery) -> RepositoryResult<Vec<Sample>>;
    fn count_samples(&self, query: &SampleListQuery) -> RepositoryResult<usize>;
}

pub trait SampleWriter {
    fn insert_sample(&self, new_sample: &NewSample) -> RepositoryResult<Sample>;
    fn update_sample(&self, updates: &UpdateSample) -> RepositoryResult<Sample>;
    /// Deletes by id. Removing a missing record is not an error.
    fn delete_sample(&self, id: &str) -> RepositoryResult<()>;
}
