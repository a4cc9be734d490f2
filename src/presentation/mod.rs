// プレゼンテーション層 - 盤面の入力・アニメーション

pub mod animation;
pub mod board;
pub mod draw_list;
pub mod geometry;
pub mod highlight;
pub mod input;

pub use animation::{Piece, PieceAnimator};
pub use board::{BoardState, InteractionPhase};
pub use draw_list::{CursorAffordance, Sprite, SpriteKind};
pub use geometry::BoardGeometry;
pub use highlight::{HighlightMarker, HighlightTracker};
pub use input::{ClickOutcome, InputDispatcher, PointerButton, PointerEvent};
