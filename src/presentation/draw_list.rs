// 描画リスト（描画バックエンドへの受け渡し）

use egui::{Pos2, Rect, Vec2};

use crate::domain::Side;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpriteKind {
    Board,
    Piece(Side),
    Highlight,
}

/// 1枚のスプライト（左上座標とピクセルサイズ）
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub pos: Pos2,
    pub size: Vec2,
}

impl Sprite {
    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.pos, self.size)
    }
}

/// カーソルの見た目
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorAffordance {
    #[default]
    Default,
    /// 操作できるマスの上
    Interactive,
}
