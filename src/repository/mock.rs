//! Mock repository implementation for isolating services in tests.

use mockall::mock;

use crate::domain::sample::{NewSample, Sample, UpdateSample};
use crate::repository::errors::RepositoryResult;
use crate::repository::{SampleListQuery, SampleReader, SampleWriter};

mock! {
    pub SampleRepository {}

    impl SampleReader for SampleRepository {
        fn get_sample_by_id(&self, id: &str) -> RepositoryResult<Option<Sample>>;
        fn list_samples(&self, query: &SampleListQuery) -> RepositoryResult<Vec<Sample>>;
        fn count_samples(&self, query: &SampleListQuery) -> RepositoryResult<usize>;
    }

    impl SampleWriter for SampleRepository {
        fn insert_sample(&self, new_sample: &NewSample) -> RepositoryResult<Sample>;
        fn update_sample(&self, updates: &UpdateSample) -> RepositoryResult<Sample>;
        fn delete_sample(&self, id: &str) -> RepositoryResult<()>;
    }
}
