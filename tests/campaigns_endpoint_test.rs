use axum::http::StatusCode;
use chrono::{Duration, Utc};
use std::sync::Arc;
use suvidha_unite::api::{self, AppState};
use suvidha_unite::domain::{CampaignStatus, Platform};
use suvidha_unite::{
    Campaign, CampaignBoard, CampaignId, Config, IntervalTickSource, ScriptedChance, SurgeSession,
    SurgeSimulation,
};
use tower::util::ServiceExt;

fn surge() -> Arc<SurgeSession> {
    Arc::new(SurgeSession::new(
        SurgeSimulation::new(Box::new(ScriptedChance::never())),
        Arc::new(IntervalTickSource::every_second()),
    ))
}

fn campaign(id: &str, status: CampaignStatus, participants: u32, ends_in: Duration) -> Campaign {
    let now = Utc::now();
    Campaign {
        id: CampaignId::new(id),
        title: format!("Campaign {}", id),
        description: "Minimum rate per km".to_string(),
        platform: Platform::Zomato,
        status,
        start_time: now - Duration::hours(1),
        end_time: now + ends_in,
        participants,
        target_participants: 200,
        region: "Pune".to_string(),
        created_by: "Riders Collective".to_string(),
    }
}

async fn request(app: &axum::Router, method: &str, uri: &str) -> (StatusCode, serde_json::Value) {
    let req = axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_demo_mode_lists_demo_campaign() {
    let app = api::create_router(AppState::new(Config::default(), surge()));
    let (status, json) = request(&app, "GET", "/v1/campaigns").await;
    assert_eq!(status, StatusCode::OK);

    let campaigns = json["campaigns"].as_array().unwrap();
    assert_eq!(campaigns.len(), 1);
    let c = &campaigns[0];
    assert_eq!(c["id"], "demo-strike-001");
    assert_eq!(c["title"], "Fair Pay Campaign");
    assert_eq!(c["status"], "active");
    assert_eq!(c["platform"], "all");
    assert_eq!(c["participants"], 2847);
    assert_eq!(c["targetParticipants"], 5000);
    assert_eq!(c["joined"], false);
    assert!(c["timer"].as_str().unwrap().starts_with("2"));
}

#[tokio::test]
async fn test_non_demo_mode_starts_empty() {
    let config = Config {
        demo_mode: false,
        ..Config::default()
    };
    let app = api::create_router(AppState::new(config, surge()));
    let (_, json) = request(&app, "GET", "/v1/campaigns").await;
    assert!(json["campaigns"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_timer_and_progress_fields() {
    let mut board = CampaignBoard::new();
    board.set_campaigns(vec![
        campaign("live", CampaignStatus::Active, 50, Duration::hours(3)),
        campaign("over", CampaignStatus::Active, 400, -Duration::minutes(5)),
        campaign("soon", CampaignStatus::Upcoming, 0, Duration::days(2)),
    ]);
    let app = api::create_router(AppState::with_board(Config::default(), surge(), board));

    let (_, json) = request(&app, "GET", "/v1/campaigns").await;
    let campaigns = json["campaigns"].as_array().unwrap();

    assert_eq!(campaigns[0]["progressPercent"].as_f64(), Some(25.0));
    let timer = campaigns[0]["timer"].as_str().unwrap();
    assert!(timer == "03:00:00" || timer == "02:59:59", "timer was {}", timer);

    assert_eq!(campaigns[1]["timer"], "Ended");
    assert_eq!(campaigns[1]["progressPercent"].as_f64(), Some(100.0));

    assert!(campaigns[2].get("timer").is_none());
}

#[tokio::test]
async fn test_join_then_leave() {
    let mut board = CampaignBoard::new();
    board.set_campaigns(vec![campaign(
        "c1",
        CampaignStatus::Active,
        10,
        Duration::hours(1),
    )]);
    let app = api::create_router(AppState::with_board(Config::default(), surge(), board));

    let (status, json) = request(&app, "POST", "/v1/campaigns/c1/join").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["participants"], 11);
    assert_eq!(json["joined"], true);

    let (status, _) = request(&app, "POST", "/v1/campaigns/c1/join").await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, json) = request(&app, "GET", "/v1/campaigns").await;
    assert_eq!(json["campaigns"][0]["joined"], true);

    let (status, json) = request(&app, "POST", "/v1/campaigns/c1/leave").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["participants"], 10);
    assert_eq!(json["joined"], false);

    let (status, _) = request(&app, "POST", "/v1/campaigns/c1/leave").await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_join_unknown_campaign() {
    let app = api::create_router(AppState::new(Config::default(), surge()));
    let (status, json) = request(&app, "POST", "/v1/campaigns/nope/join").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("nope"));
}
