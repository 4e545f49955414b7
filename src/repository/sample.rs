use diesel::dsl::max;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::db::DbPool;
use crate::domain::sample::{NewSample, Sample, SearchCondition, UpdateSample};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{SampleListQuery, SampleReader, SampleWriter};

/// Diesel implementation of [`SampleReader`] and [`SampleWriter`].
pub struct DieselSampleRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> DieselSampleRepository<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }
}

type BoxedSamplesQuery<'q> = crate::schema::samples::BoxedQuery<'q, Sqlite>;

/// Applies the keyword filter of `query` to a boxed samples query.
fn filtered(query: &SampleListQuery) -> BoxedSamplesQuery<'static> {
    use crate::schema::samples;

    let mut filtered = samples::table.into_boxed();

    if let Some(keyword) = query.keyword.as_deref().map(str::trim).filter(|k| !k.is_empty()) {
        match query.condition {
            SearchCondition::Name => {
                filtered = filtered.filter(samples::name.like(format!("%{keyword}%")));
            }
            SearchCondition::SampleId => {
                filtered = filtered.filter(samples::sample_id.eq(keyword.to_string()));
            }
        }
    }

    filtered
}

/// Derives the next sequential identifier from the highest existing one.
///
/// Identifiers keep the `SAMPLE-00001` shape of the original data set, which
/// also keeps lexicographic and numeric ordering in agreement.
fn next_sample_id(conn: &mut SqliteConnection) -> RepositoryResult<String> {
    use crate::schema::samples;

    let last: Option<String> = samples::table
        .select(max(samples::sample_id))
        .first(conn)?;

    let next = last
        .as_deref()
        .and_then(|id| id.rsplit('-').next())
        .and_then(|suffix| suffix.parse::<u32>().ok())
        .map_or(1, |n| n + 1);

    Ok(format!("SAMPLE-{next:05}"))
}

impl SampleReader for DieselSampleRepository<'_> {
    fn get_sample_by_id(&self, id: &str) -> RepositoryResult<Option<Sample>> {
        use crate::models::sample::Sample as DbSample;
        use crate::schema::samples;

        let mut conn = self.pool.get()?;
        let sample = samples::table
            .find(id)
            .first::<DbSample>(&mut conn)
            .optional()?;

        Ok(sample.map(Into::into))
    }

    fn list_samples(&self, query: &SampleListQuery) -> RepositoryResult<Vec<Sample>> {
        use crate::models::sample::Sample as DbSample;
        use crate::schema::samples;

        let mut conn = self.pool.get()?;
        let mut items_query = filtered(query).order(samples::sample_id.asc());

        if let Some(window) = query.window {
            items_query = items_query.limit(window.limit()).offset(window.offset());
        }

        let items = items_query
            .load::<DbSample>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }

    fn count_samples(&self, query: &SampleListQuery) -> RepositoryResult<usize> {
        let mut conn = self.pool.get()?;
        let total: i64 = filtered(query).count().get_result(&mut conn)?;

        Ok(total as usize)
    }
}

impl SampleWriter for DieselSampleRepository<'_> {
    fn insert_sample(&self, new_sample: &NewSample) -> RepositoryResult<Sample> {
        use crate::models::sample::NewSample as DbNewSample;
        use crate::schema::samples;

        let mut conn = self.pool.get()?;

        // Id generation and insert share one transaction so concurrent
        // inserts cannot claim the same identifier.
        conn.transaction::<_, RepositoryError, _>(|conn| {
            let sample_id = next_sample_id(conn)?;

            let insertable = DbNewSample {
                sample_id: &sample_id,
                name: &new_sample.name,
                description: new_sample.description.as_deref(),
                use_yn: &new_sample.use_yn,
                reg_user: new_sample.reg_user.as_deref(),
            };

            diesel::insert_into(samples::table)
                .values(&insertable)
                .execute(conn)?;

            Ok(Sample {
                id: sample_id,
                name: new_sample.name.clone(),
                description: new_sample.description.clone(),
                use_yn: new_sample.use_yn.clone(),
                reg_user: new_sample.reg_user.clone(),
            })
        })
    }

    fn update_sample(&self, updates: &UpdateSample) -> RepositoryResult<Sample> {
        use crate::models::sample::{Sample as DbSample, UpdateSample as DbUpdateSample};
        use crate::schema::samples;

        let mut conn = self.pool.get()?;
        let changeset: DbUpdateSample = updates.into();

        let updated = diesel::update(samples::table.find(&updates.id))
            .set(&changeset)
            .get_result::<DbSample>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_sample(&self, id: &str) -> RepositoryResult<()> {
        use crate::schema::samples;

        let mut conn = self.pool.get()?;
        diesel::delete(samples::table.find(id)).execute(&mut conn)?;

        Ok(())
    }
}
