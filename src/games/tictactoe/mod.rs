mod engine;
mod position;
mod score;
mod types;

pub mod invariants;
pub mod rules;

pub use engine::{EngineSnapshot, GameEngine, Phase, Transition};
pub use position::Position;
pub use rules::WinLine;
pub use score::Score;
pub use types::{Board, Mark, Square};
