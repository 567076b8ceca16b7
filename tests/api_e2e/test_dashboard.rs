//! E2E tests: dashboard statistics.

use actix_web::test;

use super::test_helpers::*;

#[actix_rt::test]
async fn test_dashboard_reflects_fleet() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let bridge_id = create_bridge(&app, &unique_name("dash"), [Some(5); 4]).await;
    create_record(
        &app,
        &bridge_id,
        serde_json::json!({
            "action_type": "inspection",
            "description": "Dashboard inspection",
            "scheduled_date": "2025-09-01",
            "completed_date": "2025-09-01",
            "is_completed": true,
        }),
    )
    .await;

    let (status, _, body) = send_json(&app, test::TestRequest::get().uri("/api/v1/dashboard")).await;

    assert_eq!(status, 200);
    assert!(body["total_bridges"].as_u64().unwrap() >= 1);
    assert_eq!(
        body["total_bridges"],
        body["condition_stats"]["total_bridges"]
    );
    assert!(body["condition_stats"]["buckets"]["excellent"]["count"].as_u64().unwrap() >= 1);
    assert!(body["completed_maintenance_records"].as_u64().unwrap() >= 1);

    let rate = body["maintenance_completion_rate"].as_f64().unwrap();
    assert!((0.0..=100.0).contains(&rate));

    let recent = body["recent_maintenance"].as_array().unwrap();
    assert!(!recent.is_empty() && recent.len() <= 5);
    assert!(recent.iter().all(|r| r["bridge_name"].is_string()));
}
