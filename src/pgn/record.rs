//! PGN game records and the append-only game log.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::core::Outcome;

/// Name both sides play under in training games.
pub const ENGINE_NAME: &str = "SelfTeachEngine";

/// Movetext lines wrap before exceeding this width.
const MOVETEXT_WIDTH: usize = 80;

/// One game, ready to be exported as PGN.
#[derive(Clone, Debug, PartialEq)]
pub struct GameRecord {
    pub event: String,
    pub site: String,
    pub date: String,
    pub round: String,
    pub white: String,
    pub black: String,
    pub result: String,
    pub san_moves: Vec<String>,
}

impl GameRecord {
    /// Record for one self-play training game. Site and date are left
    /// as the PGN unknown markers.
    #[must_use]
    pub fn training_game(round: u32, san_moves: Vec<String>, outcome: Outcome) -> Self {
        Self {
            event: "Self-Play Training".to_string(),
            site: "?".to_string(),
            date: "????.??.??".to_string(),
            round: round.to_string(),
            white: ENGINE_NAME.to_string(),
            black: ENGINE_NAME.to_string(),
            result: outcome.as_pgn().to_string(),
            san_moves,
        }
    }

    /// Export as PGN text: seven-tag roster, blank line, then numbered
    /// movetext ending in the result token.
    #[must_use]
    pub fn to_pgn(&self) -> String {
        let mut out = String::new();
        for (tag, value) in [
            ("Event", &self.event),
            ("Site", &self.site),
            ("Date", &self.date),
            ("Round", &self.round),
            ("White", &self.white),
            ("Black", &self.black),
            ("Result", &self.result),
        ] {
            out.push_str(&format!("[{tag} \"{value}\"]\n"));
        }
        out.push('\n');

        let mut tokens: Vec<String> = Vec::new();
        for (index, san) in self.san_moves.iter().enumerate() {
            if index % 2 == 0 {
                tokens.push(format!("{}.", index / 2 + 1));
            }
            tokens.push(san.clone());
        }
        tokens.push(self.result.clone());

        let mut line_len = 0;
        for token in &tokens {
            if line_len == 0 {
                out.push_str(token);
                line_len = token.len();
            } else if line_len + 1 + token.len() > MOVETEXT_WIDTH {
                out.push('\n');
                out.push_str(token);
                line_len = token.len();
            } else {
                out.push(' ');
                out.push_str(token);
                line_len += 1 + token.len();
            }
        }
        out.push('\n');
        out
    }
}

/// Append-only PGN file; games are separated by a blank line.
#[derive(Clone, Debug)]
pub struct PgnLog {
    path: PathBuf,
}

impl PgnLog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one game, creating the file on first use.
    pub fn append(&self, record: &GameRecord) -> anyhow::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("opening PGN log {}", self.path.display()))?;
        file.write_all(record.to_pgn().as_bytes())
            .and_then(|()| file.write_all(b"\n"))
            .with_context(|| format!("appending to PGN log {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::{env, fs, process};

    fn temp_log() -> PgnLog {
        static NEXT_FILE: AtomicUsize = AtomicUsize::new(0);
        let name = format!(
            "chess-td-pgn-{}-{}.pgn",
            process::id(),
            NEXT_FILE.fetch_add(1, Ordering::Relaxed)
        );
        PgnLog::new(env::temp_dir().join(name))
    }

    fn moves(sans: &[&str]) -> Vec<String> {
        sans.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_headers_follow_the_seven_tag_roster() {
        let record = GameRecord::training_game(3, moves(&["e4", "e5"]), Outcome::WhiteWin);
        let pgn = record.to_pgn();

        let expected_head = "[Event \"Self-Play Training\"]\n\
                             [Site \"?\"]\n\
                             [Date \"????.??.??\"]\n\
                             [Round \"3\"]\n\
                             [White \"SelfTeachEngine\"]\n\
                             [Black \"SelfTeachEngine\"]\n\
                             [Result \"1-0\"]\n\n";
        assert!(pgn.starts_with(expected_head), "got:\n{pgn}");
        assert!(pgn.ends_with("1. e4 e5 1-0\n"));
    }

    #[test]
    fn test_movetext_numbers_full_moves() {
        let record = GameRecord::training_game(
            1,
            moves(&["e4", "e5", "Nf3", "Nc6", "Bb5"]),
            Outcome::Draw,
        );
        assert!(record
            .to_pgn()
            .ends_with("1. e4 e5 2. Nf3 Nc6 3. Bb5 1/2-1/2\n"));
    }

    #[test]
    fn test_unfinished_game_gets_the_open_result() {
        let record = GameRecord::training_game(1, moves(&["e4"]), Outcome::Unfinished);
        let pgn = record.to_pgn();
        assert!(pgn.contains("[Result \"*\"]"));
        assert!(pgn.ends_with("1. e4 *\n"));
    }

    #[test]
    fn test_long_movetext_wraps_at_the_margin() {
        let record =
            GameRecord::training_game(1, moves(&["Nf3"; 120]), Outcome::BlackWin);
        let pgn = record.to_pgn();
        let movetext: Vec<&str> = pgn
            .split("\n\n")
            .nth(1)
            .expect("movetext section")
            .lines()
            .collect();

        assert!(movetext.len() > 1, "expected wrapping, got one line");
        for line in movetext {
            assert!(line.len() <= 80, "line overflows: {line:?}");
        }
    }

    #[test]
    fn test_append_accumulates_games() {
        let log = temp_log();
        log.append(&GameRecord::training_game(1, moves(&["e4"]), Outcome::WhiteWin))
            .unwrap();
        log.append(&GameRecord::training_game(2, moves(&["d4"]), Outcome::BlackWin))
            .unwrap();

        let contents = fs::read_to_string(log.path()).unwrap();
        assert_eq!(contents.matches("[Event ").count(), 2);
        assert!(contents.contains("[Round \"1\"]"));
        assert!(contents.contains("[Round \"2\"]"));

        fs::remove_file(log.path()).unwrap();
    }
}
