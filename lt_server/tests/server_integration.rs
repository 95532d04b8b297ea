//! Integration tests for the HTTP server.
//!
//! Each test builds the router around an in-memory snapshot and drives it with
//! `oneshot` requests.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use league_table::snapshot::{GoalEvent, GoalKind, Group, MatchRecord, MatchStatus, Player, Team, Tournament};
use league_table::{Snapshot, StandingsEngine};
use lt_server::api::{AppState, create_router};
use serde_json::Value;
use tower::ServiceExt; // For `oneshot` method
use uuid::Uuid;

struct Fixture {
    snapshot: Snapshot,
    tournament_id: Uuid,
    group_id: Uuid,
}

/// Two-team group where Red beat Blue 2-1, plus a knockout rematch
fn fixture() -> Fixture {
    let tournament_id = Uuid::new_v4();
    let group_id = Uuid::new_v4();
    let red = Team {
        id: Uuid::new_v4(),
        name: "Red".to_string(),
    };
    let blue = Team {
        id: Uuid::new_v4(),
        name: "Blue".to_string(),
    };
    let ace = Player {
        id: Uuid::new_v4(),
        name: "Ace".to_string(),
        team_id: red.id,
    };
    let bo = Player {
        id: Uuid::new_v4(),
        name: "Bo".to_string(),
        team_id: blue.id,
    };

    let group_match = MatchRecord {
        id: Uuid::new_v4(),
        tournament_id,
        group_id: Some(group_id),
        home_team_id: Some(red.id),
        away_team_id: Some(blue.id),
        status: MatchStatus::Finished,
        goals: vec![
            GoalEvent::new(red.id, ace.id, GoalKind::Regular, 12),
            GoalEvent::new(blue.id, bo.id, GoalKind::Penalty, 40),
            GoalEvent::new(red.id, ace.id, GoalKind::Regular, 88),
        ],
        cards: vec![],
    };
    let final_match = MatchRecord {
        id: Uuid::new_v4(),
        group_id: None,
        goals: vec![GoalEvent::new(blue.id, bo.id, GoalKind::Regular, 7)],
        ..group_match.clone()
    };

    let snapshot = Snapshot {
        tournaments: vec![Tournament {
            id: tournament_id,
            name: "Spring Cup".to_string(),
        }],
        groups: vec![Group {
            id: group_id,
            tournament_id,
            name: "Group A".to_string(),
            team_ids: vec![red.id, blue.id],
        }],
        teams: vec![red, blue],
        players: vec![ace, bo],
        matches: vec![group_match, final_match],
    };

    Fixture {
        snapshot,
        tournament_id,
        group_id,
    }
}

/// Helper to create test server around a snapshot
fn create_test_server(snapshot: Snapshot) -> axum::Router {
    create_router(AppState::new(StandingsEngine::default(), snapshot))
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check_endpoint() {
    let app = create_test_server(fixture().snapshot);

    let (status, body) = get(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["snapshot"]["groups"], 1);
    assert_eq!(body["snapshot"]["matches"], 2);
}

// ============================================================================
// Group Standings Tests
// ============================================================================

#[tokio::test]
async fn test_group_standings_endpoint() {
    let fixture = fixture();
    let app = create_test_server(fixture.snapshot);

    let (status, body) = get(app, &format!("/api/v1/groups/{}/standings", fixture.group_id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["group_name"], "Group A");
    let standings = body["standings"].as_array().unwrap();
    assert_eq!(standings.len(), 2);
    assert_eq!(standings[0]["team_name"], "Red");
    assert_eq!(standings[0]["points"], 3);
    assert_eq!(standings[0]["rank"], 1);
    assert_eq!(standings[1]["team_name"], "Blue");
    assert_eq!(standings[1]["goal_difference"], -1);

    // Knockout goal is not part of the group leaderboard
    assert_eq!(body["top_scorers"][0]["player_name"], "Ace");
    assert_eq!(body["top_scorers"][1]["goals"], 1);
}

#[tokio::test]
async fn test_unknown_group_returns_404() {
    let app = create_test_server(fixture().snapshot);

    let (status, body) = get(app, &format!("/api/v1/groups/{}/standings", Uuid::new_v4())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Group not found");
}

#[tokio::test]
async fn test_malformed_group_id_returns_400() {
    let app = create_test_server(fixture().snapshot);

    let (status, body) = get(app, "/api/v1/groups/not-a-uuid/standings").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid group id");
}

// ============================================================================
// Top Scorers Tests
// ============================================================================

#[tokio::test]
async fn test_tournament_top_scorers_span_all_matches() {
    let fixture = fixture();
    let app = create_test_server(fixture.snapshot);

    let (status, body) = get(
        app,
        &format!("/api/v1/tournaments/{}/top-scorers", fixture.tournament_id),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let scorers = body.as_array().unwrap();
    assert_eq!(scorers.len(), 2);
    assert_eq!(scorers[0]["player_name"], "Ace");
    assert_eq!(scorers[0]["goals"], 2);
    assert_eq!(scorers[1]["player_name"], "Bo");
    assert_eq!(scorers[1]["goals"], 2);
}

#[tokio::test]
async fn test_top_scorers_respects_top_parameter() {
    let fixture = fixture();
    let app = create_test_server(fixture.snapshot);

    let (status, body) = get(
        app,
        &format!("/api/v1/tournaments/{}/top-scorers?top=1", fixture.tournament_id),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_unknown_tournament_returns_404() {
    let app = create_test_server(fixture().snapshot);

    let (status, body) = get(
        app,
        &format!("/api/v1/tournaments/{}/top-scorers", Uuid::new_v4()),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Tournament not found");
}

// ============================================================================
// Snapshot Replacement Tests
// ============================================================================

#[tokio::test]
async fn test_replace_snapshot_then_query() {
    let fixture = fixture();
    let app = create_test_server(Snapshot::new());

    let (status, _) = get(
        app.clone(),
        &format!("/api/v1/groups/{}/standings", fixture.group_id),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let request = Request::builder()
        .method("PUT")
        .uri("/api/v1/snapshot")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&fixture.snapshot).unwrap()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let summary: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(summary["teams"], 2);
    assert_eq!(summary["players"], 2);

    let (status, body) = get(app, &format!("/api/v1/groups/{}/standings", fixture.group_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["standings"][0]["team_name"], "Red");
}

#[tokio::test]
async fn test_malformed_snapshot_is_rejected() {
    let fixture = fixture();
    let app = create_test_server(fixture.snapshot);

    let request = Request::builder()
        .method("PUT")
        .uri("/api/v1/snapshot")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"groups": "nope"}"#))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());

    // The previous snapshot is still served
    let (status, _) = get(app, &format!("/api/v1/groups/{}/standings", fixture.group_id)).await;
    assert_eq!(status, StatusCode::OK);
}

// ============================================================================
// Middleware Tests
// ============================================================================

#[tokio::test]
async fn test_request_id_is_generated() {
    let app = create_test_server(Snapshot::new());

    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    let header = response.headers().get("x-request-id").unwrap();
    assert!(Uuid::parse_str(header.to_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let app = create_test_server(Snapshot::new());

    let request = Request::builder()
        .uri("/api/v1/groups/not-a-uuid/standings")
        .header("x-request-id", "trace-42")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.headers().get("x-request-id").unwrap(), "trace-42");
}

#[tokio::test]
async fn test_404_for_invalid_endpoint() {
    let app = create_test_server(Snapshot::new());

    let request = Request::builder()
        .uri("/api/v1/nonexistent")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
