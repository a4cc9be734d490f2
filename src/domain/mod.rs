// ドメイン層 - 盤面の語彙とルール

pub mod cell;
pub mod config;
pub mod moves;
pub mod rules;
pub mod twelve_beads;

pub use cell::{Cell, Direction, Side};
pub use config::{BoardFill, FrameCount, GameConfig};
pub use moves::{MoveOption, MoveTemplate};
pub use rules::{RulesEngine, Step, TurnResult, TurnStatus};
pub use twelve_beads::TwelveBeads;
