//! E2E tests: bridge CRUD, listing and cascade delete.

use actix_web::test;
use bridge_records_lib::entity::{maintenance_record, traffic_data};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use uuid::Uuid;

use super::test_helpers::*;

const FULL_MARKS: [Option<i32>; 4] = [Some(5), Some(5), Some(5), Some(4)];

#[actix_rt::test]
async fn test_create_and_get_bridge() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let name = unique_name("crud");

    let (status, location, body) = send_json(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/bridges")
            .set_json(bridge_body(&name, [Some(5), Some(5), Some(1), Some(2)])),
    )
    .await;

    assert_eq!(status, 201);
    assert_eq!(body["message"], "Bridge created successfully!");
    let id = body["bridge"]["id"].as_str().unwrap();
    assert_eq!(location.as_deref(), Some(format!("/api/v1/bridges/{}", id).as_str()));

    let (status, _, detail) = send_json(
        &app,
        test::TestRequest::get().uri(&format!("/api/v1/bridges/{}", id)),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(detail["name"], name.as_str());
    assert_eq!(detail["bridge_type_label"], "Beam Composite Bridge");
    assert_eq!(detail["condition"]["category"], "good");
    assert_eq!(detail["condition"]["bci_percentage"], 66);
    assert!(detail["traffic"].is_null());
    assert_eq!(detail["maintenance_records"].as_array().unwrap().len(), 0);
}

#[actix_rt::test]
async fn test_update_bridge_ratings() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let name = unique_name("update");
    let id = create_bridge(&app, &name, [None; 4]).await;

    let (status, _, body) = send_json(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/v1/bridges/{}", id))
            .set_json(bridge_body(&name, FULL_MARKS)),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["message"], "Bridge updated successfully!");
    assert_eq!(body["bridge"]["condition"]["category"], "excellent");
}

#[actix_rt::test]
async fn test_duplicate_name_conflicts() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let name = unique_name("dup");
    create_bridge(&app, &name, [None; 4]).await;

    let (status, _, body) = send_json(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/bridges")
            .set_json(bridge_body(&name, [None; 4])),
    )
    .await;

    assert_eq!(status, 409);
    assert_eq!(body["error"], "CONFLICT");
}

#[actix_rt::test]
async fn test_invalid_bridge_rejected_with_field_errors() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let mut bad = bridge_body(&unique_name("bad"), [Some(6), None, None, None]);
    bad["lanes"] = serde_json::json!(0);

    let (status, _, body) = send_json(
        &app,
        test::TestRequest::post().uri("/api/v1/bridges").set_json(bad),
    )
    .await;

    assert_eq!(status, 422);
    let fields: Vec<&str> = body["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["lanes", "deck_rating"]);
}

#[actix_rt::test]
async fn test_list_search_and_condition_filter() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let prefix = unique_name("search");
    create_bridge(&app, &format!("{}-a", prefix), FULL_MARKS).await;
    create_bridge(&app, &format!("{}-b", prefix), [Some(1); 4]).await;

    let (status, _, body) = send_json(
        &app,
        test::TestRequest::get().uri(&format!(
            "/api/v1/bridges?search={}&condition=EXCELLENT",
            prefix.to_uppercase()
        )),
    )
    .await;

    assert_eq!(status, 200);
    let bridges = body["bridges"].as_array().unwrap();
    assert_eq!(bridges.len(), 1);
    assert_eq!(bridges[0]["name"], format!("{}-a", prefix).as_str());
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["condition_filter"], "EXCELLENT");
    assert!(body["total_bridges"].as_u64().unwrap() >= 2);
}

#[actix_rt::test]
async fn test_unknown_condition_filter_rejected() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let (status, _, body) = send_json(
        &app,
        test::TestRequest::get().uri("/api/v1/bridges?condition=SUPERB"),
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["error"], "INVALID_INPUT");
}

#[actix_rt::test]
async fn test_delete_bridge_cascades() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let id = create_bridge(&app, &unique_name("cascade"), FULL_MARKS).await;

    let (status, _, _) = send_json(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/v1/bridges/{}/traffic", id))
            .set_json(serde_json::json!({"heavy_vehicles": 10, "small_vehicles": 20})),
    )
    .await;
    assert_eq!(status, 201);

    create_record(
        &app,
        &id,
        serde_json::json!({
            "action_type": "inspection",
            "description": "Annual inspection",
            "scheduled_date": "2025-09-01",
        }),
    )
    .await;

    let (status, _, body) = send_json(
        &app,
        test::TestRequest::delete().uri(&format!("/api/v1/bridges/{}", id)),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["message"], "Bridge deleted successfully!");
    assert_eq!(body["redirect_to"], "/api/v1/bridges");

    let bridge_id = Uuid::parse_str(&id).unwrap();
    let traffic_left = traffic_data::Entity::find()
        .filter(traffic_data::Column::BridgeId.eq(bridge_id))
        .count(pool.connection())
        .await
        .unwrap();
    let records_left = maintenance_record::Entity::find()
        .filter(maintenance_record::Column::BridgeId.eq(bridge_id))
        .count(pool.connection())
        .await
        .unwrap();
    assert_eq!(traffic_left, 0);
    assert_eq!(records_left, 0);

    let (status, _, _) = send_json(
        &app,
        test::TestRequest::get().uri(&format!("/api/v1/bridges/{}", id)),
    )
    .await;
    assert_eq!(status, 404);
}
