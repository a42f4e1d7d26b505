//! Chess position model and move logic for puzzle training.
//!
//! Every operation takes complete position text (or a decoded [`Position`])
//! and returns a fresh result. Nothing is cached between calls, so callers on
//! any number of threads may use the crate without coordination.

pub mod apply;
pub mod attacks;
pub mod board;
pub mod error;
pub mod movegen;
pub mod perft;
pub mod types;
pub mod uci;

pub use apply::*;
pub use attacks::*;
pub use board::*;
pub use error::*;
pub use movegen::*;
pub use perft::perft;
pub use types::*;
pub use uci::*;
