//! Replay a SAN move list into per-position FEN snapshots.
//!
//! This produces the data a board UI scrubs through: the starting
//! position followed by one entry per half-move. Legality is delegated to
//! shakmaty — an illegal or unparsable move aborts the replay.

use serde::Serialize;
use shakmaty::{fen::Fen, san::SanPlus, Chess, EnPassantMode, Position};

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("illegal or unparsable move '{san}' at ply {ply}")]
    IllegalMove { san: String, ply: usize },
}

/// One scrubber stop: a position, and the move that produced it.
/// `san` and `move_number` are None for the starting position.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GamePosition {
    pub fen: String,
    pub san: Option<String>,
    pub move_number: Option<u32>,
}

fn fen_of(pos: &Chess) -> String {
    Fen::from_position(pos, EnPassantMode::Legal).to_string()
}

/// Replay `moves` from the standard starting position.
/// Returns `moves.len() + 1` entries on success.
pub fn build_history(moves: &[String]) -> Result<Vec<GamePosition>, HistoryError> {
    let mut pos = Chess::default();
    let mut history = Vec::with_capacity(moves.len() + 1);

    history.push(GamePosition {
        fen: fen_of(&pos),
        san: None,
        move_number: None,
    });

    for (idx, san) in moves.iter().enumerate() {
        let ply = idx + 1;
        let illegal = || HistoryError::IllegalMove {
            san: san.clone(),
            ply,
        };

        let parsed: SanPlus = san.parse().map_err(|_| illegal())?;
        let mv = parsed.san.to_move(&pos).map_err(|_| illegal())?;
        pos.play_unchecked(mv);

        history.push(GamePosition {
            fen: fen_of(&pos),
            san: Some(san.clone()),
            move_number: Some((idx as u32 / 2) + 1),
        });
    }

    Ok(history)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    fn sans(moves: &[&str]) -> Vec<String> {
        moves.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_game_is_just_the_start() {
        let history = build_history(&[]).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].fen, STARTING_FEN);
        assert!(history[0].san.is_none());
    }

    #[test]
    fn test_replay_italian_opening() {
        let history = build_history(&sans(&["e4", "e5", "Nf3", "Nc6", "Bc4"])).unwrap();
        assert_eq!(history.len(), 6);

        // After 1. e4: black to move. No legal en passant capture exists,
        // so EnPassantMode::Legal leaves the ep field empty.
        assert_eq!(
            history[1].fen,
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1"
        );
        assert_eq!(history[1].san.as_deref(), Some("e4"));
        assert_eq!(history[1].move_number, Some(1));
        assert_eq!(history[2].move_number, Some(1));
        assert_eq!(history[3].move_number, Some(2));
    }

    #[test]
    fn test_checkmate_suffix_parses() {
        let history =
            build_history(&sans(&["e4", "e5", "Qh5", "Nc6", "Bc4", "Nf6", "Qxf7#"])).unwrap();
        assert_eq!(history.len(), 8);
        assert_eq!(history[7].san.as_deref(), Some("Qxf7#"));
    }

    #[test]
    fn test_illegal_move_reports_ply() {
        let err = build_history(&sans(&["e4", "e5", "Ke3"])).unwrap_err();
        match err {
            HistoryError::IllegalMove { san, ply } => {
                assert_eq!(san, "Ke3");
                assert_eq!(ply, 3);
            }
        }
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        assert!(build_history(&sans(&["xyzzy"])).is_err());
    }
}
