//! Wire types for the two broadcast API payloads. Only the fields this
//! exporter consumes are modeled; everything else in the responses is
//! ignored during deserialization.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: u64,
    pub time_control: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Round {
    pub id: u64,
    pub slug: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Player {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub round_id: u64,
    pub slug: String,
    pub white_elo: u32,
    pub black_elo: u32,
    pub white: Player,
    pub black: Player,
    pub result: String,
}

/// `POST /events/api/room/{event_id}` response.
#[derive(Debug, Clone, Deserialize)]
pub struct RoomInfo {
    pub room: Room,
    pub name: String,
    pub rounds: Vec<Round>,
    pub games: Vec<Game>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameMove {
    pub ply: u32,
    pub cbn: String,
    pub clock: u64,
}

/// `POST /events/api/game/{event_id}/{round_slug}/{game_slug}` response.
#[derive(Debug, Clone, Deserialize)]
pub struct GameInfo {
    pub game: Game,
    pub room: Room,
    pub moves: Vec<GameMove>,
}
