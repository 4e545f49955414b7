use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use tera::Tera;

use sample_board::domain::sample::NewSample;
use sample_board::models::config::ServerConfig;
use sample_board::repository::sample::DieselSampleRepository;
use sample_board::repository::{SampleReader, SampleWriter};
use sample_board::routes::sample::{
    add_sample, add_sample_view, delete_sample, sample_list, update_sample, update_sample_view,
};

mod common;

macro_rules! init_app {
    ($pool:expr) => {{
        let tera = Tera::new("templates/**/*.html").expect("failed to parse templates");
        test::init_service(
            App::new()
                .app_data(web::Data::new(tera))
                .app_data(web::Data::new($pool.clone()))
                .app_data(web::Data::new(ServerConfig::default()))
                .service(sample_list)
                .service(add_sample_view)
                .service(add_sample)
                .service(update_sample_view)
                .service(update_sample)
                .service(delete_sample),
        )
        .await
    }};
}

fn new_sample(name: &str) -> NewSample {
    NewSample::new(name.to_string(), None, "Y".to_string(), None)
}

macro_rules! read_ok_body {
    ($app:expr, $req:expr) => {{
        let resp = test::call_service($app, $req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        String::from_utf8(body.to_vec()).expect("non-utf8 response body")
    }};
}

#[actix_web::test]
async fn list_shows_registered_posts() {
    let test_db = common::TestDb::new("routes_list.db");
    let repo = DieselSampleRepository::new(test_db.pool());
    repo.insert_sample(&new_sample("First post")).unwrap();

    let app = init_app!(test_db.pool());

    let req = test::TestRequest::get()
        .uri("/egovSampleList.do")
        .to_request();
    let body = read_ok_body!(&app, req);

    assert!(body.contains("Sample List"));
    assert!(body.contains("First post"));
    assert!(body.contains("1 record(s)"));
}

#[actix_web::test]
async fn list_page_links_preserve_search_criteria() {
    let test_db = common::TestDb::new("routes_list_criteria.db");
    let repo = DieselSampleRepository::new(test_db.pool());
    for n in 1..=12 {
        repo.insert_sample(&new_sample(&format!("Match {n}"))).unwrap();
    }
    repo.insert_sample(&new_sample("Unrelated post")).unwrap();

    let app = init_app!(test_db.pool());

    let req = test::TestRequest::get()
        .uri("/egovSampleList.do?searchCondition=0&searchKeyword=Match")
        .to_request();
    let body = read_ok_body!(&app, req);

    assert!(body.contains("12 record(s)"));
    assert!(!body.contains("Unrelated post"));
    // the page-2 link keeps the active filter
    assert!(body.contains("pageIndex=2&amp;searchKeyword=Match&amp;searchCondition=0"));
}

#[actix_web::test]
async fn register_form_renders_empty() {
    let test_db = common::TestDb::new("routes_register_form.db");
    let app = init_app!(test_db.pool());

    let req = test::TestRequest::get().uri("/addSample.do").to_request();
    let body = read_ok_body!(&app, req);

    assert!(body.contains("Register Sample"));
    assert!(body.contains("/addSample.do"));
}

#[actix_web::test]
async fn add_sample_valid_forwards_to_list() {
    let test_db = common::TestDb::new("routes_add_valid.db");
    let app = init_app!(test_db.pool());

    let req = test::TestRequest::post()
        .uri("/addSample.do")
        .set_form([
            ("name", "Hello board"),
            ("description", "the very first entry"),
            ("useYn", "Y"),
            ("regUser", "admin"),
        ])
        .to_request();
    let body = read_ok_body!(&app, req);

    // internal forward: the response is the refreshed list, not the form
    assert!(body.contains("Sample List"));
    assert!(body.contains("Hello board"));

    let repo = DieselSampleRepository::new(test_db.pool());
    let stored = repo.get_sample_by_id("SAMPLE-00001").unwrap().unwrap();
    assert_eq!(stored.name, "Hello board");
}

#[actix_web::test]
async fn add_sample_invalid_redisplays_form() {
    let test_db = common::TestDb::new("routes_add_invalid.db");
    let app = init_app!(test_db.pool());

    let req = test::TestRequest::post()
        .uri("/addSample.do")
        .set_form([
            ("name", ""),
            ("description", "keep me intact"),
            ("useYn", "Y"),
            ("regUser", ""),
        ])
        .to_request();
    let body = read_ok_body!(&app, req);

    assert!(body.contains("Register Sample"));
    assert!(body.contains("Name is required"));
    // the rejected input is preserved verbatim
    assert!(body.contains("keep me intact"));

    let repo = DieselSampleRepository::new(test_db.pool());
    assert!(repo.get_sample_by_id("SAMPLE-00001").unwrap().is_none());
}

#[actix_web::test]
async fn update_view_prefills_the_record() {
    let test_db = common::TestDb::new("routes_update_view.db");
    let repo = DieselSampleRepository::new(test_db.pool());
    let created = repo.insert_sample(&new_sample("Editable post")).unwrap();

    let app = init_app!(test_db.pool());

    let req = test::TestRequest::get()
        .uri(&format!("/updateSampleView.do?selectedId={}", created.id))
        .to_request();
    let body = read_ok_body!(&app, req);

    assert!(body.contains("Update Sample"));
    assert!(body.contains("Editable post"));
    assert!(body.contains(&created.id));
}

#[actix_web::test]
async fn update_view_missing_record_is_404() {
    let test_db = common::TestDb::new("routes_update_view_missing.db");
    let app = init_app!(test_db.pool());

    let req = test::TestRequest::get()
        .uri("/updateSampleView.do?selectedId=SAMPLE-99999")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn update_sample_persists_changes() {
    let test_db = common::TestDb::new("routes_update.db");
    let repo = DieselSampleRepository::new(test_db.pool());
    let created = repo.insert_sample(&new_sample("Before edit")).unwrap();

    let app = init_app!(test_db.pool());

    let req = test::TestRequest::post()
        .uri("/updateSample.do")
        .set_form([
            ("id", created.id.as_str()),
            ("name", "After edit"),
            ("description", ""),
            ("useYn", "N"),
            ("regUser", ""),
        ])
        .to_request();
    let body = read_ok_body!(&app, req);

    assert!(body.contains("Sample List"));
    assert!(body.contains("After edit"));

    let stored = repo.get_sample_by_id(&created.id).unwrap().unwrap();
    assert_eq!(stored.name, "After edit");
    assert_eq!(stored.use_yn, "N");
}

#[actix_web::test]
async fn delete_sample_forwards_to_list() {
    let test_db = common::TestDb::new("routes_delete.db");
    let repo = DieselSampleRepository::new(test_db.pool());
    let created = repo.insert_sample(&new_sample("Doomed post")).unwrap();

    let app = init_app!(test_db.pool());

    let req = test::TestRequest::get()
        .uri(&format!("/deleteSample.do?id={}", created.id))
        .to_request();
    let body = read_ok_body!(&app, req);

    assert!(body.contains("Sample List"));
    assert!(body.contains("No posts found."));
    assert!(repo.get_sample_by_id(&created.id).unwrap().is_none());
}
