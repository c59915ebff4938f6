//! Core library: PGN normalization, deterministic password derivation,
//! and move-history replay. No I/O — the HTTP layer lives in the server crate.

pub mod game_data;
pub mod history;
pub mod password;
pub mod pgn;
