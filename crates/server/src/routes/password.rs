use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use pgn_core::{password, pgn};

use crate::config::Config;
use crate::error::AppError;

/// Matches the original UI's slider default.
const DEFAULT_LENGTH: usize = 16;

#[derive(Deserialize)]
pub struct GenerateRequest {
    pub pgn: String,
    pub length: Option<usize>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub password: String,
    pub length: usize,
    pub move_text: String,
    pub move_count: usize,
}

/// POST /api/password/generate
pub async fn generate(
    Extension(config): Extension<Config>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let length = req.length.unwrap_or(DEFAULT_LENGTH);
    if length > config.max_password_length {
        return Err(AppError::BadRequest(format!(
            "Password length must be at most {}",
            config.max_password_length
        )));
    }

    // Empty move text is still a valid derivation input.
    let move_text = pgn::normalize(&req.pgn);
    let password = password::derive_password(&move_text, length)?;

    let move_count = if move_text.is_empty() {
        0
    } else {
        move_text.split(' ').count()
    };

    Ok(Json(GenerateResponse {
        password,
        length,
        move_text,
        move_count,
    }))
}
