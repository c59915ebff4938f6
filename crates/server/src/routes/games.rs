use axum::Json;
use serde::{Deserialize, Serialize};

use pgn_core::game_data::GameMetadata;
use pgn_core::history::{self, GamePosition};
use pgn_core::pgn;

use crate::error::AppError;

#[derive(Deserialize)]
pub struct HistoryRequest {
    pub pgn: String,
}

#[derive(Serialize)]
pub struct HistoryResponse {
    pub metadata: GameMetadata,
    pub positions: Vec<GamePosition>,
}

/// POST /api/games/history
///
/// Parses a PGN and replays it into one FEN per position, for board
/// scrubbing on the client.
pub async fn game_history(
    Json(req): Json<HistoryRequest>,
) -> Result<Json<HistoryResponse>, AppError> {
    let game = pgn::parse_pgn(&req.pgn)
        .ok_or_else(|| AppError::BadRequest("No moves found in PGN".into()))?;

    let positions = history::build_history(&game.moves)?;

    Ok(Json(HistoryResponse {
        metadata: game.metadata,
        positions,
    }))
}
