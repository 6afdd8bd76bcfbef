//! PGN export: SAN rendering and the append-only game log.

pub mod record;
pub mod san;

pub use record::{GameRecord, PgnLog, ENGINE_NAME};
pub use san::san;
