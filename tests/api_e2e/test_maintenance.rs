//! E2E tests: maintenance records.

use actix_web::test;

use super::test_helpers::*;

#[actix_rt::test]
async fn test_maintenance_lifecycle() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let bridge_id = create_bridge(&app, &unique_name("maint"), [None; 4]).await;
    let detail = format!("/api/v1/bridges/{}", bridge_id);

    let (status, location, body) = send_json(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/v1/bridges/{}/maintenance", bridge_id))
            .set_json(serde_json::json!({
                "action_type": "major_repair",
                "description": "Replace expansion joints",
                "scheduled_date": "2025-09-01",
                "cost": 12500.50,
            })),
    )
    .await;

    assert_eq!(status, 201);
    assert_eq!(body["message"], "Maintenance record created successfully!");
    assert_eq!(location.as_deref(), Some(detail.as_str()));
    assert_eq!(body["record"]["action_label"], "Major Repairs");
    let record_id = body["record"]["id"].as_str().unwrap().to_string();
    let record_uri = format!("/api/v1/maintenance/{}", record_id);

    let (status, _, body) = send_json(
        &app,
        test::TestRequest::put().uri(&record_uri).set_json(serde_json::json!({
            "action_type": "major_repair",
            "description": "Replace expansion joints",
            "scheduled_date": "2025-09-01",
            "completed_date": "2025-09-03",
            "is_completed": true,
        })),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["redirect_to"], detail.as_str());
    assert_eq!(body["record"]["is_completed"], true);
    assert_eq!(body["record"]["completed_date"], "2025-09-03");

    let (status, _, body) = send_json(
        &app,
        test::TestRequest::get().uri(&format!("/api/v1/bridges/{}/maintenance", bridge_id)),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["records"].as_array().unwrap().len(), 1);

    let (status, _, body) =
        send_json(&app, test::TestRequest::delete().uri(&record_uri)).await;
    assert_eq!(status, 200);
    assert_eq!(body["message"], "Maintenance record deleted successfully!");
    assert!(body.get("record").is_none());

    let (status, _, _) = send_json(&app, test::TestRequest::get().uri(&record_uri)).await;
    assert_eq!(status, 404);
}

#[actix_rt::test]
async fn test_completion_invariants_rejected() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let bridge_id = create_bridge(&app, &unique_name("invariant"), [None; 4]).await;
    let uri = format!("/api/v1/bridges/{}/maintenance", bridge_id);

    let cases = [
        (
            serde_json::json!({
                "action_type": "routine",
                "description": "Clean drains",
                "scheduled_date": "2025-09-01",
                "is_completed": true,
            }),
            "completed_date",
        ),
        (
            serde_json::json!({
                "action_type": "routine",
                "description": "Clean drains",
                "scheduled_date": "2025-09-01",
                "completed_date": "2025-09-02",
            }),
            "is_completed",
        ),
        (
            serde_json::json!({
                "action_type": "routine",
                "description": "Clean drains",
                "scheduled_date": "2025-09-10",
                "completed_date": "2025-09-02",
                "is_completed": true,
            }),
            "completed_date",
        ),
    ];

    for (body, field) in cases {
        let (status, _, resp) =
            send_json(&app, test::TestRequest::post().uri(&uri).set_json(body)).await;
        assert_eq!(status, 422);
        assert_eq!(resp["fields"][0]["field"], field);
    }

    let (_, _, body) = send_json(&app, test::TestRequest::get().uri(&uri)).await;
    assert_eq!(body["records"].as_array().unwrap().len(), 0);
}

#[actix_rt::test]
async fn test_detail_shows_five_latest_by_schedule() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let bridge_id = create_bridge(&app, &unique_name("latest"), [None; 4]).await;

    for day in 1..=7 {
        create_record(
            &app,
            &bridge_id,
            serde_json::json!({
                "action_type": "monitoring",
                "description": format!("Check {}", day),
                "scheduled_date": format!("2025-08-{:02}", day),
            }),
        )
        .await;
    }

    let (status, _, detail) = send_json(
        &app,
        test::TestRequest::get().uri(&format!("/api/v1/bridges/{}", bridge_id)),
    )
    .await;

    assert_eq!(status, 200);
    let dates: Vec<&str> = detail["maintenance_records"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["scheduled_date"].as_str().unwrap())
        .collect();
    assert_eq!(
        dates,
        vec!["2025-08-07", "2025-08-06", "2025-08-05", "2025-08-04", "2025-08-03"]
    );
}
