use axum::extract::Path;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use exporter::config::Config;

pub const EVENT_ID: &str = "123";

fn room_json() -> Value {
    json!({ "id": 77, "timeControl": "90+30" })
}

fn game_summary(slug: &str) -> Value {
    match slug {
        "g1" => json!({
            "roundId": 5,
            "slug": "g1",
            "whiteElo": 2400,
            "blackElo": 2350,
            "white": { "name": "Alice", "title": "GM" },
            "black": { "name": "Bob", "title": "IM" },
            "result": "1-0"
        }),
        "g2" => json!({
            "roundId": 5,
            "slug": "g2",
            "whiteElo": 2500,
            "blackElo": 2450,
            "white": { "name": "Carol", "title": "WGM" },
            "black": { "name": "Dan" },
            "result": "1/2-1/2"
        }),
        "g3" => json!({
            "roundId": 6,
            "slug": "g3",
            "whiteElo": 2200,
            "blackElo": 2210,
            "white": { "name": "Mallory" },
            "black": { "name": "Trent" },
            "result": "*"
        }),
        "g4" => json!({
            "roundId": 7,
            "slug": "g4",
            "whiteElo": 2000,
            "blackElo": 2010,
            "white": { "name": "Erin" },
            "black": { "name": "Frank" },
            "result": "*"
        }),
        other => panic!("mock upstream has no game {other}"),
    }
}

async fn room_info(Path(_event_id): Path<String>) -> Json<Value> {
    Json(json!({
        "room": room_json(),
        "name": "Test Invitational",
        "rounds": [
            { "id": 5, "slug": "round-1" },
            { "id": 6, "slug": "round-2" },
            { "id": 7, "slug": "round-3" }
        ],
        "games": [
            game_summary("g1"),
            game_summary("g2"),
            game_summary("g3"),
            game_summary("g4")
        ]
    }))
}

async fn game_info(
    Path((_event_id, _round_slug, game_slug)): Path<(String, String, String)>,
) -> Json<Value> {
    let moves = match game_slug.as_str() {
        "g1" => json!([
            { "ply": 1, "cbn": "e2e4_e4", "clock": 5000 }
        ]),
        "g2" => json!([
            { "ply": 1, "cbn": "e2e4_e4", "clock": 3723000 },
            { "ply": 2, "cbn": "e7e5_e5", "clock": 59000 }
        ]),
        // White cannot reach e5 on the first move
        "g3" => json!([
            { "ply": 1, "cbn": "e2e5_e5", "clock": 1000 }
        ]),
        // Composite encoding without its delimiter
        "g4" => json!([
            { "ply": 1, "cbn": "e2e4", "clock": 1000 }
        ]),
        other => panic!("mock upstream has no moves for {other}"),
    };

    Json(json!({
        "game": game_summary(&game_slug),
        "room": room_json(),
        "moves": moves
    }))
}

/// Serve the two broadcast endpoints on an ephemeral port and return the
/// base URL to point the exporter at.
pub async fn spawn_mock_upstream() -> String {
    let app = Router::new()
        .route("/events/api/room/{event_id}", post(room_info))
        .route(
            "/events/api/game/{event_id}/{round_slug}/{game_slug}",
            post(game_info),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

pub fn test_config(base_url: String) -> Config {
    Config {
        base_url,
        user_agent: "exporter-tests".to_string(),
        request_timeout_secs: 5,
    }
}
