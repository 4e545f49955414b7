//! Board operations expressed over the repository traits, free of any web
//! framework types. Routes translate the returned data and outcomes into
//! rendered views.

use validator::Validate;

use crate::domain::sample::SearchCondition;
use crate::dto::sample::{FormPageData, ListPageData};
use crate::forms::sample::{FieldErrors, SampleForm, SearchParams, field_error_messages};
use crate::models::config::ServerConfig;
use crate::pagination::{PageWindow, Paginated};
use crate::repository::{SampleListQuery, SampleReader, SampleWriter};
use crate::services::{ServiceError, ServiceResult};

/// Result of a validated register/update submission.
///
/// `Saved` means the record was persisted and the caller should forward to
/// the list operation; `Invalid` carries the untouched input back to the
/// form, and nothing was persisted.
#[derive(Debug)]
pub enum SubmitOutcome {
    Saved,
    Invalid { form: SampleForm, errors: FieldErrors },
}

fn list_query(params: &SearchParams, window: PageWindow) -> SampleListQuery {
    let mut query = SampleListQuery::new().window(window);

    let keyword = params
        .search_keyword
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty());

    if let Some(keyword) = keyword {
        let condition = SearchCondition::from(params.search_condition.as_deref().unwrap_or("0"));
        query = query.condition(condition).keyword(keyword);
    }

    query
}

/// Loads one page of the board list.
///
/// The page fetch and the matching count are two independent repository
/// calls; under concurrent writes they may observe different snapshots.
pub fn load_list_page<R>(
    repo: &R,
    params: &SearchParams,
    config: &ServerConfig,
) -> ServiceResult<ListPageData>
where
    R: SampleReader + ?Sized,
{
    let window = PageWindow::new(params.page_index.unwrap_or(1), config.page_unit);
    let query = list_query(params, window);

    let samples = repo.list_samples(&query)?;
    let total = repo.count_samples(&query)?;

    Ok(ListPageData {
        samples: Paginated::new(samples, window, total, config.page_size),
        criteria: params.clone(),
    })
}

/// Loads the update form pre-filled with the record behind `selected_id`.
pub fn load_edit_page<R>(repo: &R, selected_id: &str) -> ServiceResult<FormPageData>
where
    R: SampleReader + ?Sized,
{
    let sample = repo
        .get_sample_by_id(selected_id)?
        .ok_or(ServiceError::NotFound)?;

    Ok(sample.into())
}

/// Validates and persists a new board post.
pub fn create_sample<R>(repo: &R, form: SampleForm) -> ServiceResult<SubmitOutcome>
where
    R: SampleWriter + ?Sized,
{
    if let Err(errors) = form.validate() {
        let errors = field_error_messages(&errors);
        return Ok(SubmitOutcome::Invalid { form, errors });
    }

    repo.insert_sample(&form.to_new_sample())?;

    Ok(SubmitOutcome::Saved)
}

/// Validates and persists changes to an existing board post.
pub fn update_sample<R>(repo: &R, form: SampleForm) -> ServiceResult<SubmitOutcome>
where
    R: SampleWriter + ?Sized,
{
    if let Err(errors) = form.validate() {
        let errors = field_error_messages(&errors);
        return Ok(SubmitOutcome::Invalid { form, errors });
    }

    let updates = form.to_update_sample().ok_or(ServiceError::NotFound)?;
    repo.update_sample(&updates)?;

    Ok(SubmitOutcome::Saved)
}

/// Deletes a board post by id. No validation and no existence check.
pub fn delete_sample<R>(repo: &R, id: &str) -> ServiceResult<()>
where
    R: SampleWriter + ?Sized,
{
    repo.delete_sample(id)?;

    Ok(())
}
