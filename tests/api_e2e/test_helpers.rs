//! Shared test helpers for API E2E tests.

use actix_web::{App, dev::ServiceResponse, test, web};
use bridge_records_lib::config::Config;
use bridge_records_lib::db::DbPool;
use serde_json::Value;
use std::sync::OnceLock;
use uuid::Uuid;

static MIGRATIONS_RUN: OnceLock<()> = OnceLock::new();

/// Create a fresh DB pool. Migrations run only once.
pub async fn create_test_pool() -> DbPool {
    create_test_pool_sized(2).await
}

/// Create a DB pool with room for `max_connections` concurrent queries.
pub async fn create_test_pool_sized(max_connections: u32) -> DbPool {
    let mut config = Config::from_env().expect(
        "Failed to load config. Ensure RUST_ENV and DATABASE_URL are set, \
         and that PostgreSQL is running.",
    );
    config.database.max_connections = max_connections;
    config.database.min_connections = 1;

    let pool = DbPool::new(&config)
        .await
        .expect("Failed to connect to database");

    if MIGRATIONS_RUN.get().is_none() {
        pool.run_migrations()
            .await
            .expect("Failed to run migrations");
        let _ = MIGRATIONS_RUN.set(());
    }

    pool
}

/// Generate a unique bridge name for test isolation.
pub fn unique_name(prefix: &str) -> String {
    format!(
        "{}-{}",
        prefix,
        Uuid::new_v4().to_string().split('-').next().unwrap()
    )
}

/// Create a test app with every API route mounted.
pub async fn create_test_app(
    pool: &DbPool,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = ServiceResponse,
    Error = actix_web::Error,
> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .service(web::scope("/api/v1").configure(bridge_records_lib::api::configure_api)),
    )
    .await
}

/// A valid bridge body with the given name and ratings.
pub fn bridge_body(name: &str, ratings: [Option<i32>; 4]) -> Value {
    serde_json::json!({
        "name": name,
        "bridge_type": "beam_composite",
        "length": 46.158,
        "width": 12.5,
        "lanes": 3,
        "material": "steel_concrete",
        "year_built": 2024,
        "route": "CITY-MASVINGO ROAD",
        "gps_coordinates": "X=-1593.793 Y=-1981906.781",
        "deck_rating": ratings[0],
        "girders_rating": ratings[1],
        "piers_rating": ratings[2],
        "abutment_rating": ratings[3],
    })
}

/// Send a JSON request and return status, Location header and body.
pub async fn send_json<S>(
    app: &S,
    req: test::TestRequest,
) -> (u16, Option<String>, Value)
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let resp = test::call_service(app, req.to_request()).await;
    let status = resp.status().as_u16();
    let location = resp
        .headers()
        .get(actix_web::http::header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body: Value = test::read_body_json(resp).await;
    (status, location, body)
}

/// Create a bridge and return its id.
pub async fn create_bridge<S>(app: &S, name: &str, ratings: [Option<i32>; 4]) -> String
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let (status, _, body) = send_json(
        app,
        test::TestRequest::post()
            .uri("/api/v1/bridges")
            .set_json(bridge_body(name, ratings)),
    )
    .await;
    assert_eq!(status, 201, "Failed to create bridge: {}", body);
    body["bridge"]["id"].as_str().unwrap().to_string()
}

/// Log a maintenance record and return its id.
pub async fn create_record<S>(app: &S, bridge_id: &str, record: Value) -> String
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let (status, _, body) = send_json(
        app,
        test::TestRequest::post()
            .uri(&format!("/api/v1/bridges/{}/maintenance", bridge_id))
            .set_json(record),
    )
    .await;
    assert_eq!(status, 201, "Failed to create record: {}", body);
    body["record"]["id"].as_str().unwrap().to_string()
}
