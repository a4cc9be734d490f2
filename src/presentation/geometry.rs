// 盤面の座標変換（ピクセル ↔ マス）

use egui::{Pos2, Rect, Vec2};

use crate::constants::{BOARD_DIVISIONS, BOARD_TEXTURE_SIZE, MARGIN_RATIO};
use crate::domain::Cell;

/// 盤スプライトの位置と拡大率
///
/// マスの大きさ・間隔・余白はここから都度計算し、別に保持しない。
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardGeometry {
    origin: Pos2,
    scale: Vec2,
    texture_size: Vec2,
}

impl BoardGeometry {
    pub fn new(texture_size: Vec2) -> Self {
        Self {
            origin: Pos2::ZERO,
            scale: Vec2::splat(1.0),
            texture_size,
        }
    }

    pub fn origin(&self) -> Pos2 {
        self.origin
    }

    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    /// 盤全体のピクセルサイズ
    pub fn board_size(&self) -> Vec2 {
        self.texture_size * self.scale
    }

    pub fn board_rect(&self) -> Rect {
        Rect::from_min_size(self.origin, self.board_size())
    }

    /// 1マス（駒1個分）のピクセルサイズ
    pub fn cell_size(&self) -> Vec2 {
        self.board_size() / BOARD_DIVISIONS
    }

    /// 盤の端から最初のマスまでの余白
    pub fn margin(&self) -> Vec2 {
        self.cell_size() * MARGIN_RATIO
    }

    /// マスの間隔（余白込み）
    pub fn gap(&self) -> Vec2 {
        self.cell_size() * (MARGIN_RATIO + 1.0)
    }

    /// 盤をピクセルサイズに合わせる
    pub fn set_size(&mut self, size: Vec2) {
        if self.texture_size.x <= 0.0 || self.texture_size.y <= 0.0 {
            return;
        }
        self.scale = size / self.texture_size;
    }

    pub fn set_origin(&mut self, origin: Pos2) {
        self.origin = origin;
    }

    /// 領域の中央に盤を置く
    pub fn center_in(&mut self, area: Rect) {
        self.origin = area.min + (area.size() - self.board_size()) / 2.0;
    }

    /// マスに置かれた駒の左上座標
    pub fn cell_to_pixel(&self, cell: Cell) -> Pos2 {
        self.grid_to_pixel(Vec2::new(cell.x as f32, cell.y as f32))
    }

    /// 小数のマス座標（移動中の駒）を左上座標に変換
    pub fn grid_to_pixel(&self, grid: Vec2) -> Pos2 {
        self.origin + self.margin() + self.gap() * grid
    }

    pub fn cell_rect(&self, cell: Cell) -> Rect {
        Rect::from_min_size(self.cell_to_pixel(cell), self.cell_size())
    }

    pub fn cell_center(&self, cell: Cell) -> Pos2 {
        self.cell_to_pixel(cell) + self.cell_size() / 2.0
    }

    /// ピクセル座標からマスを求める（楕円の当たり判定）
    ///
    /// マスの正方形ではなく、内接する楕円の内側だけを有効とする。
    pub fn pixel_to_cell(&self, pos: Pos2) -> Option<Cell> {
        let gap = self.gap();
        if !(gap.x > 0.0 && gap.y > 0.0) {
            return None;
        }
        let rel = (pos - self.origin) / gap;
        let (fx, fy) = (rel.x.floor(), rel.y.floor());
        if !fx.is_finite() || !fy.is_finite() {
            return None;
        }
        let cell = Cell::new(fx as i32, fy as i32)?;

        let half = self.cell_size() / 2.0;
        let d = pos - self.cell_center(cell);
        let inside = (d.x / half.x).powi(2) + (d.y / half.y).powi(2) <= 1.0;
        inside.then_some(cell)
    }
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self::new(Vec2::splat(BOARD_TEXTURE_SIZE))
    }
}
