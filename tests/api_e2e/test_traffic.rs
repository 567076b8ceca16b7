//! E2E tests: traffic snapshot upsert.

use actix_web::test;
use bridge_records_lib::models::{TrafficRequest, UpsertOutcome};
use futures_util::future::join_all;
use uuid::Uuid;

use super::test_helpers::*;

#[actix_rt::test]
async fn test_upsert_creates_then_updates() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let id = create_bridge(&app, &unique_name("traffic"), [None; 4]).await;
    let uri = format!("/api/v1/bridges/{}/traffic", id);

    let (status, location, body) = send_json(
        &app,
        test::TestRequest::put()
            .uri(&uri)
            .set_json(serde_json::json!({"heavy_vehicles": 66, "small_vehicles": 46})),
    )
    .await;

    assert_eq!(status, 201);
    assert_eq!(body["outcome"], "created");
    assert_eq!(body["message"], "Traffic data created successfully!");
    assert_eq!(body["traffic"]["total_vehicles"], 112);
    let detail = format!("/api/v1/bridges/{}", id);
    assert_eq!(location.as_deref(), Some(detail.as_str()));
    assert_eq!(body["redirect_to"], detail.as_str());

    let (status, _, body) = send_json(
        &app,
        test::TestRequest::put()
            .uri(&uri)
            .set_json(serde_json::json!({"heavy_vehicles": 42, "small_vehicles": 52})),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["outcome"], "updated");
    assert_eq!(body["message"], "Traffic data updated successfully!");

    let (status, _, body) = send_json(&app, test::TestRequest::get().uri(&uri)).await;
    assert_eq!(status, 200);
    assert_eq!(body["heavy_vehicles"], 42);
    assert_eq!(body["small_vehicles"], 52);
}

#[actix_rt::test]
async fn test_negative_counts_rejected() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let id = create_bridge(&app, &unique_name("negative"), [None; 4]).await;

    let (status, _, body) = send_json(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/v1/bridges/{}/traffic", id))
            .set_json(serde_json::json!({"heavy_vehicles": -1})),
    )
    .await;

    assert_eq!(status, 422);
    assert_eq!(body["fields"][0]["field"], "heavy_vehicles");
}

#[actix_rt::test]
async fn test_traffic_for_missing_bridge() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let (status, _, _) = send_json(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/v1/bridges/{}/traffic", Uuid::now_v7()))
            .set_json(serde_json::json!({"heavy_vehicles": 1, "small_vehicles": 1})),
    )
    .await;

    assert_eq!(status, 404);
}

#[actix_rt::test]
async fn test_concurrent_first_puts_never_conflict() {
    let pool = create_test_pool_sized(8).await;
    let app = create_test_app(&pool).await;

    for round in 0..5 {
        let id = create_bridge(&app, &unique_name("race"), [None; 4]).await;
        let uri = format!("/api/v1/bridges/{}/traffic", id);

        let responses = join_all((0..8).map(|i| {
            test::call_service(
                &app,
                test::TestRequest::put()
                    .uri(&uri)
                    .set_json(serde_json::json!({"heavy_vehicles": i, "small_vehicles": i}))
                    .to_request(),
            )
        }))
        .await;

        let statuses: Vec<u16> = responses.iter().map(|r| r.status().as_u16()).collect();
        assert!(
            statuses.iter().all(|s| *s == 200 || *s == 201),
            "round {}: unexpected statuses {:?}",
            round,
            statuses
        );
        assert_eq!(
            statuses.iter().filter(|s| **s == 201).count(),
            1,
            "round {}: expected exactly one create in {:?}",
            round,
            statuses
        );

        let (status, _, body) = send_json(&app, test::TestRequest::get().uri(&uri)).await;
        assert_eq!(status, 200);
        assert_eq!(body["heavy_vehicles"], body["small_vehicles"]);
    }
}

#[actix_rt::test]
async fn test_concurrent_pool_upserts_create_once() {
    let pool = create_test_pool_sized(8).await;
    let app = create_test_app(&pool).await;
    let id = create_bridge(&app, &unique_name("race-pool"), [None; 4]).await;
    let id = Uuid::parse_str(&id).unwrap();

    let requests: Vec<TrafficRequest> = (0..8)
        .map(|i| TrafficRequest {
            heavy_vehicles: i,
            small_vehicles: 10,
        })
        .collect();
    let results = join_all(requests.iter().map(|req| pool.upsert_traffic(id, req))).await;

    let mut created = 0;
    for result in results {
        match result {
            Ok((UpsertOutcome::Created, _)) => created += 1,
            Ok((UpsertOutcome::Updated, _)) => {}
            Err(e) => panic!("concurrent upsert failed: {}", e),
        }
    }
    assert_eq!(created, 1);
}
