use actix_web::{Either, HttpResponse, Responder, get, post, route, web};
use tera::{Context, Tera};

use crate::db::DbPool;
use crate::dto::sample::{FormPageData, ListPageData};
use crate::forms::sample::{SampleForm, SampleKeyForm, SearchParams, SelectedKeyParams};
use crate::models::config::ServerConfig;
use crate::repository::SampleReader;
use crate::repository::sample::DieselSampleRepository;
use crate::routes::render_template;
use crate::services::sample::{self as sample_service, SubmitOutcome};
use crate::services::ServiceError;

const LIST_VIEW: &str = "sample/list.html";
const REGISTER_VIEW: &str = "sample/register.html";

fn list_context(data: &ListPageData) -> Context {
    let mut context = Context::new();
    context.insert("resultList", &data.samples.items);
    context.insert("paginationInfo", &data.samples);
    context.insert("criteria", &data.criteria);
    context
}

fn form_context(data: &FormPageData, criteria: &SearchParams) -> Context {
    let mut context = Context::new();
    context.insert("form", &data.form);
    context.insert("errors", &data.errors);
    context.insert("criteria", criteria);
    context
}

/// Renders the list view. Mutating handlers call this after a successful
/// write: a server-side forward that re-runs the list query within the same
/// request instead of issuing a client redirect.
fn forward_to_list<R>(
    repo: &R,
    params: &SearchParams,
    config: &ServerConfig,
    tera: &Tera,
) -> HttpResponse
where
    R: SampleReader + ?Sized,
{
    match sample_service::load_list_page(repo, params, config) {
        Ok(data) => render_template(tera, LIST_VIEW, &list_context(&data)),
        Err(e) => {
            log::error!("Failed to load sample list: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/egovSampleList.do")]
pub async fn sample_list(
    params: web::Query<SearchParams>,
    pool: web::Data<DbPool>,
    config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let repo = DieselSampleRepository::new(&pool);
    forward_to_list(&repo, &params, &config, &tera)
}

#[get("/addSample.do")]
pub async fn add_sample_view(
    params: web::Query<SearchParams>,
    tera: web::Data<Tera>,
) -> impl Responder {
    render_template(
        &tera,
        REGISTER_VIEW,
        &form_context(&FormPageData::empty(), &params),
    )
}

#[post("/addSample.do")]
pub async fn add_sample(
    params: web::Query<SearchParams>,
    web::Form(form): web::Form<SampleForm>,
    pool: web::Data<DbPool>,
    config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let repo = DieselSampleRepository::new(&pool);

    match sample_service::create_sample(&repo, form) {
        Ok(SubmitOutcome::Saved) => forward_to_list(&repo, &params, &config, &tera),
        Ok(SubmitOutcome::Invalid { form, errors }) => render_template(
            &tera,
            REGISTER_VIEW,
            &form_context(&FormPageData::invalid(form, errors), &params),
        ),
        Err(e) => {
            log::error!("Failed to register sample: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/updateSampleView.do")]
pub async fn update_sample_view(
    key: web::Query<SelectedKeyParams>,
    params: web::Query<SearchParams>,
    pool: web::Data<DbPool>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let repo = DieselSampleRepository::new(&pool);

    match sample_service::load_edit_page(&repo, &key.selected_id) {
        Ok(data) => render_template(&tera, REGISTER_VIEW, &form_context(&data, &params)),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(e) => {
            log::error!("Failed to load sample {}: {e}", key.selected_id);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[route("/updateSample.do", method = "GET", method = "POST")]
pub async fn update_sample(
    params: web::Query<SearchParams>,
    form: Either<web::Form<SampleForm>, web::Query<SampleForm>>,
    pool: web::Data<DbPool>,
    config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let form = match form {
        Either::Left(web::Form(form)) => form,
        Either::Right(web::Query(form)) => form,
    };
    let repo = DieselSampleRepository::new(&pool);

    match sample_service::update_sample(&repo, form) {
        Ok(SubmitOutcome::Saved) => forward_to_list(&repo, &params, &config, &tera),
        Ok(SubmitOutcome::Invalid { form, errors }) => render_template(
            &tera,
            REGISTER_VIEW,
            &form_context(&FormPageData::invalid(form, errors), &params),
        ),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(e) => {
            log::error!("Failed to update sample: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[route("/deleteSample.do", method = "GET", method = "POST")]
pub async fn delete_sample(
    params: web::Query<SearchParams>,
    key: Either<web::Form<SampleKeyForm>, web::Query<SampleKeyForm>>,
    pool: web::Data<DbPool>,
    config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let key = match key {
        Either::Left(web::Form(key)) => key,
        Either::Right(web::Query(key)) => key,
    };
    let repo = DieselSampleRepository::new(&pool);

    match sample_service::delete_sample(&repo, &key.id) {
        Ok(()) => forward_to_list(&repo, &params, &config, &tera),
        Err(e) => {
            log::error!("Failed to delete sample {}: {e}", key.id);
            HttpResponse::InternalServerError().finish()
        }
    }
}
