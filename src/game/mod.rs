//! Game orchestration.
//!
//! ## Key Types
//!
//! - `Session`: owns every zone and sequences turns
//! - `Snapshot` / `Prompt` / `Status`: what a shell renders
//! - `Player` / `play_out`: drive a session with a decision policy

pub mod driver;
pub mod session;
pub mod snapshot;

pub use driver::{play_out, GreedyPlayer, PlayOutcome, Player, RandomPlayer};
pub use session::{Layout, Session};
pub use snapshot::{Prompt, Snapshot, Status};
