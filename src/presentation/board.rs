// 盤面の表示・操作状態

use egui::{Rect, Vec2};

use super::animation::{Piece, PieceAnimator};
use super::draw_list::{CursorAffordance, Sprite, SpriteKind};
use super::geometry::BoardGeometry;
use super::highlight::HighlightTracker;
use crate::constants::GRID;
use crate::domain::{Cell, GameConfig, RulesEngine, Step};
use crate::vlog;

/// 操作状態
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionPhase {
    /// 未選択
    Idle,
    /// 駒を選択中（ハイライト点灯）
    Selected(Cell),
    /// 終局（入力を受け付けない）
    Blocked,
}

/// 盤面状態（駒配列・ハイライト・フラグ・ルールエンジン）
pub struct BoardState<R: RulesEngine> {
    /// `pieces[x][y]`。1マスに1駒まで
    pub(crate) pieces: [[Option<Piece>; GRID]; GRID],
    /// 取られて盤外へ退場中の駒
    pub(crate) departing: Vec<Piece>,
    pub(crate) highlights: HighlightTracker,
    pub(crate) geometry: BoardGeometry,
    pub(crate) blocked: bool,
    pub(crate) visible: bool,
    pub(crate) cursor: CursorAffordance,
    pub(crate) move_frames: u32,
    pub(crate) remove_frames: u32,
    pub(crate) rules: R,
}

impl<R: RulesEngine> BoardState<R> {
    pub fn new(rules: R) -> Self {
        Self::with_config(rules, &GameConfig::default())
    }

    pub fn with_config(rules: R, config: &GameConfig) -> Self {
        let mut board = Self {
            pieces: [[None; GRID]; GRID],
            departing: Vec::new(),
            highlights: HighlightTracker::new(),
            geometry: BoardGeometry::default(),
            blocked: false,
            visible: true,
            cursor: CursorAffordance::Default,
            move_frames: config.move_frames.get(),
            remove_frames: config.remove_frames.get(),
            rules,
        };
        board.sync_pieces();
        board
    }

    /// ルールエンジンの配置から駒を並べ直す
    fn sync_pieces(&mut self) {
        self.pieces = [[None; GRID]; GRID];
        self.departing.clear();
        for cell in Cell::all() {
            if let Some(side) = self.rules.occupant(cell) {
                let (x, y) = cell.index();
                self.pieces[x][y] = Some(Piece::at(side, cell));
            }
        }
    }

    /// 新しい対局を始める（盤の位置・大きさは維持）
    pub fn restart(&mut self) {
        self.rules = R::new_game();
        self.highlights.clear();
        self.blocked = false;
        self.cursor = CursorAffordance::Default;
        self.sync_pieces();
        vlog!("新しい対局を開始");
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    pub fn highlights(&self) -> &HighlightTracker {
        &self.highlights
    }

    pub fn piece(&self, cell: Cell) -> Option<&Piece> {
        if !cell.in_grid() {
            return None;
        }
        let (x, y) = cell.index();
        self.pieces[x][y].as_ref()
    }

    /// 盤上の駒（マス, 駒）
    pub fn pieces(&self) -> impl Iterator<Item = (Cell, &Piece)> + '_ {
        Cell::all().filter_map(|c| self.piece(c).map(|p| (c, p)))
    }

    pub fn departing(&self) -> &[Piece] {
        &self.departing
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn cursor(&self) -> CursorAffordance {
        self.cursor
    }

    pub fn phase(&self) -> InteractionPhase {
        if self.blocked {
            return InteractionPhase::Blocked;
        }
        match self.highlights.base() {
            Some(base) => InteractionPhase::Selected(base),
            None => InteractionPhase::Idle,
        }
    }

    // 表示位置は毎フレーム geometry から求めるため、変更時に他の状態を更新する必要はない

    pub fn set_board_size(&mut self, size: Vec2) {
        self.geometry.set_size(size);
    }

    pub fn center_in(&mut self, area: Rect) {
        self.geometry.center_in(area);
    }

    /// 領域の短辺 × `fill` の正方形で中央に置く
    pub fn fit_to(&mut self, area: Rect, fill: f32) {
        let side = area.size().min_elem() * fill;
        self.set_board_size(Vec2::splat(side));
        self.center_in(area);
    }

    /// 全駒を1フレーム進め、退場し終えた駒を捨てる
    pub fn step_animation(&mut self) {
        for piece in self.pieces.iter_mut().flatten().flatten() {
            PieceAnimator::advance(piece);
        }
        for piece in self.departing.iter_mut() {
            PieceAnimator::advance(piece);
        }
        self.departing.retain(Piece::is_moving);
    }

    pub fn is_animating(&self) -> bool {
        self.pieces().any(|(_, p)| p.is_moving()) || !self.departing.is_empty()
    }

    /// 駒を移動先へ付け替え、アニメーションを開始する
    pub(crate) fn relocate(&mut self, step: Step) {
        let (fx, fy) = step.from.index();
        let Some(mut piece) = self.pieces[fx][fy].take() else {
            vlog!("移動元に駒がありません: {}", step.from);
            return;
        };
        PieceAnimator::set_target(&mut piece, step.to, self.move_frames);
        let (tx, ty) = step.to.index();
        if let Some(previous) = self.pieces[tx][ty].replace(piece) {
            vlog!("移動先 {} の駒 {:?} を上書き", step.to, previous.side);
        }
    }

    /// 取られた駒をマスから外し、盤外へ退場させる
    pub(crate) fn capture(&mut self, cell: Cell) {
        let (x, y) = cell.index();
        let Some(mut piece) = self.pieces[x][y].take() else {
            vlog!("取られたマス {} に駒がありません", cell);
            return;
        };
        PieceAnimator::remove(&mut piece, self.remove_frames);
        self.departing.push(piece);
    }

    /// 盤・駒・ハイライトの描画リスト
    pub fn draw_list(&self) -> Vec<Sprite> {
        if !self.visible {
            return Vec::new();
        }
        let g = &self.geometry;
        let size = g.cell_size();
        let mut sprites = vec![Sprite {
            kind: SpriteKind::Board,
            pos: g.origin(),
            size: g.board_size(),
        }];
        for (_, piece) in self.pieces() {
            sprites.push(Sprite {
                kind: SpriteKind::Piece(piece.side),
                pos: g.grid_to_pixel(piece.pos),
                size,
            });
        }
        for piece in &self.departing {
            sprites.push(Sprite {
                kind: SpriteKind::Piece(piece.side),
                pos: g.grid_to_pixel(piece.pos),
                size,
            });
        }
        for cell in self.highlights.active_cells() {
            sprites.push(Sprite {
                kind: SpriteKind::Highlight,
                pos: g.cell_to_pixel(cell),
                size,
            });
        }
        sprites
    }
}
