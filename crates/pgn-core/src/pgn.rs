//! PGN parsing utilities — lightweight regex-based parser.

use std::sync::LazyLock;

use regex::Regex;

use crate::game_data::{GameData, GameMetadata};

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[[^\]]*\]").unwrap());
static COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{[^}]*\}").unwrap());
static VARIATION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\([^)]*\)").unwrap());
static MOVE_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d+\.{1,3}").unwrap());
static RESULT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"1/2-1/2|1-0|0-1|\*").unwrap());
static ANNOTATION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[?!#+]").unwrap());
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\[(\w+)\s+"([^"]*)"\]"#).unwrap());

static MOVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[KQRBN]?[a-h]?[1-8]?x?[a-h][1-8](?:=[QRBN])?[+#]?|O-O-O|O-O").unwrap()
});

/// Remove tag pairs, comments and variations.
fn strip_block_tokens(pgn: &str) -> String {
    let text = TAG_RE.replace_all(pgn, "");
    let text = COMMENT_RE.replace_all(&text, "");
    VARIATION_RE.replace_all(&text, "").into_owned()
}

/// Reduce PGN text to its bare move sequence, single-space separated.
///
/// Strips tag pairs, comments, variations, move numbers (`12.` / `12...`),
/// result tokens (`1-0`, `0-1`, `1/2-1/2`, `*`) and annotation glyphs
/// (`? ! # +`), then collapses whitespace. Never fails: malformed PGN
/// degrades to whatever text remains. Idempotent.
pub fn normalize(pgn: &str) -> String {
    let text = strip_block_tokens(pgn);
    let text = MOVE_NUMBER_RE.replace_all(&text, "");
    let text = RESULT_RE.replace_all(&text, "");
    let text = ANNOTATION_RE.replace_all(&text, "");
    WHITESPACE_RE.replace_all(&text, " ").trim().to_string()
}

/// Extract SAN move tokens from PGN text (after removing headers, comments,
/// variations). Check and mate suffixes are kept on the tokens.
pub fn extract_moves(pgn: &str) -> Vec<String> {
    let cleaned = strip_block_tokens(pgn);
    MOVE_RE
        .find_iter(&cleaned)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Parse a PGN string into a GameData struct.
/// Returns None if no moves could be extracted.
pub fn parse_pgn(pgn: &str) -> Option<GameData> {
    let mut white = "Unknown".to_string();
    let mut black = "Unknown".to_string();
    let mut result = "*".to_string();
    let mut date = None;
    let mut event = None;

    for cap in HEADER_RE.captures_iter(pgn) {
        let key = &cap[1];
        let value = cap[2].to_string();
        match key {
            "White" => white = value,
            "Black" => black = value,
            "Result" => result = value,
            "Date" => date = Some(value),
            "Event" => event = Some(value),
            _ => {}
        }
    }

    let moves = extract_moves(pgn);
    if moves.is_empty() {
        return None;
    }

    Some(GameData {
        metadata: GameMetadata {
            white,
            black,
            result,
            date,
            event,
        },
        moves,
        pgn: pgn.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_everything_but_moves() {
        assert_eq!(
            normalize("1. e4 e5 2. Nf3 {a comment} Nc6 *"),
            "e4 e5 Nf3 Nc6"
        );
    }

    #[test]
    fn test_normalize_full_game() {
        let pgn = r#"[Event "Casual Game"]
[White "Player1"]
[Black "Player2"]
[Result "1-0"]

1. e4 e5 2. Qh5?! Nc6 3. Bc4 Nf6?? (3... g6 4. Qf3 Nf6) 4. Qxf7# 1-0"#;

        assert_eq!(normalize(pgn), "e4 e5 Qh5 Nc6 Bc4 Nf6 Qxf7");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "1. e4 e5 2. Nf3 {a comment} Nc6 *",
            "[White \"x\"]\n1. d4 d5 1/2-1/2",
            "12... Rxe1+ 13. Qxe1 0-1",
            "",
            "not a pgn at all",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "re-normalizing {input:?}");
        }
    }

    #[test]
    fn test_normalize_malformed_input_degrades() {
        // Unbalanced braces leave text behind rather than erroring.
        let out = normalize("1. e4 {unterminated comment e5");
        assert_eq!(out, "e4 {unterminated comment e5");
    }

    #[test]
    fn test_extract_moves_castling_and_promotion() {
        let moves = extract_moves("1. e4 e5 2. Nf3 Nc6 3. O-O d5 4. exd5 e4 5. d6 e3 6. d7 e2 7. d8=Q exf1=N+");
        assert!(moves.contains(&"O-O".to_string()));
        assert!(moves.contains(&"d8=Q".to_string()));
        assert!(moves.contains(&"exf1=N+".to_string()));
    }

    #[test]
    fn test_parse_pgn_basic() {
        let pgn = r#"[White "Player1"]
[Black "Player2"]
[Result "1-0"]
[Date "2025.01.15"]

1. e4 e5 2. Nf3 Nc6 1-0"#;

        let game = parse_pgn(pgn).unwrap();
        assert_eq!(game.metadata.white, "Player1");
        assert_eq!(game.metadata.black, "Player2");
        assert_eq!(game.metadata.result, "1-0");
        assert_eq!(game.moves.len(), 4);
        assert_eq!(game.moves[0], "e4");
    }

    #[test]
    fn test_parse_pgn_no_moves() {
        assert!(parse_pgn("[White \"Player1\"]\n").is_none());
    }
}
