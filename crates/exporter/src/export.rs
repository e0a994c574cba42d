//! Round resolution and game-by-game PGN conversion.

use pgn_core::{cbn, clock, replay::GameReplay};

use crate::client::ChessComClient;
use crate::error::ExportError;
use crate::models::{RoomInfo, Round};

/// Source URLs look like `chessdotcom:<event_id>/<round_slug>`.
pub const SOURCE_SCHEME: &str = "chessdotcom:";

/// A round located inside fetched event metadata. Callers filter
/// `room.games` by `round_id`.
pub struct ResolvedRound {
    pub round_id: u64,
    pub room: RoomInfo,
}

/// Fetch event metadata and locate the requested round by slug.
pub async fn resolve_round(
    client: &ChessComClient,
    event_id: &str,
    round_slug: &str,
) -> Result<ResolvedRound, ExportError> {
    let room = client.fetch_room(event_id).await?;
    let round = find_round(&room.rounds, round_slug).ok_or_else(|| ExportError::RoundNotFound {
        round_slug: round_slug.to_string(),
        event_id: event_id.to_string(),
    })?;
    let round_id = round.id;
    Ok(ResolvedRound { round_id, room })
}

fn find_round<'a>(rounds: &'a [Round], slug: &str) -> Option<&'a Round> {
    rounds.iter().find(|r| r.slug == slug)
}

/// Fetch one game's move list, replay it, and serialize it to PGN with
/// clock annotations and event headers.
pub async fn convert_game(
    client: &ChessComClient,
    event_id: &str,
    round_slug: &str,
    game_slug: &str,
    room: &RoomInfo,
) -> Result<String, ExportError> {
    let info = client.fetch_game(event_id, round_slug, game_slug).await?;

    let mut replay = GameReplay::new();
    for mv in &info.moves {
        let san = cbn::san_part(&mv.cbn)?;
        replay.play_san(san)?;
        replay.comment_last(format!("[%clk {}]", clock::format_clock(mv.clock)));
    }

    let mut game = replay.finish();
    game.set_header("Event", &room.name);
    game.set_header("White", &info.game.white.name);
    game.set_header("Black", &info.game.black.name);
    game.set_header("WhiteElo", &info.game.white_elo.to_string());
    game.set_header("BlackElo", &info.game.black_elo.to_string());
    game.set_header("TimeControl", &room.room.time_control);
    game.set_header("Round", round_slug);
    game.set_header("Result", &info.game.result);

    Ok(game.render())
}

/// Export every game of one round as concatenated PGN, each game followed
/// by a blank line. Games are fetched and converted sequentially, in the
/// order the event lists them; the first failure aborts the whole round.
pub async fn export_round(
    client: &ChessComClient,
    name: &str,
    source_url: &str,
) -> Result<String, ExportError> {
    let (event_id, round_slug) = parse_source_url(source_url)?;
    tracing::info!(source = name, event_id = %event_id, round = %round_slug, "Exporting broadcast round");

    let resolved = resolve_round(client, &event_id, &round_slug).await?;

    let mut pgn = String::new();
    let mut converted = 0usize;
    for game in &resolved.room.games {
        if game.round_id != resolved.round_id {
            continue;
        }
        let text = convert_game(client, &event_id, &round_slug, &game.slug, &resolved.room).await?;
        pgn.push_str(&text);
        pgn.push_str("\n\n");
        converted += 1;
    }

    tracing::info!(games = converted, "Round export complete");
    Ok(pgn)
}

fn parse_source_url(url: &str) -> Result<(String, String), ExportError> {
    let rest = url
        .strip_prefix(SOURCE_SCHEME)
        .ok_or_else(|| ExportError::SourceUrl(url.to_string()))?;
    let (event_id, round_slug) = rest
        .split_once('/')
        .ok_or_else(|| ExportError::SourceUrl(url.to_string()))?;
    if event_id.is_empty() || round_slug.is_empty() {
        return Err(ExportError::SourceUrl(url.to_string()));
    }
    Ok((event_id.to_string(), round_slug.to_string()))
}
