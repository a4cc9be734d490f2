// 駒の移動アニメーション制御

use egui::Vec2;

use crate::constants::{ARRIVAL_EPSILON, OFF_BOARD_ROW};
use crate::domain::{Cell, Side};

/// 盤上の駒
///
/// 論理的な位置は `BoardState` のマス配列が持ち、ここでは表示位置だけを扱う。
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Piece {
    pub side: Side,
    /// 表示位置（小数のマス座標）
    pub pos: Vec2,
    pub target: Vec2,
    /// 1フレームあたりの移動量
    pub velocity: Vec2,
}

impl Piece {
    /// 静止状態で配置
    pub fn at(side: Side, cell: Cell) -> Self {
        let pos = Vec2::new(cell.x as f32, cell.y as f32);
        Self {
            side,
            pos,
            target: pos,
            velocity: Vec2::ZERO,
        }
    }

    pub fn is_moving(&self) -> bool {
        self.pos != self.target
    }
}

/// アニメーション制御のユーティリティ
pub struct PieceAnimator;

impl PieceAnimator {
    /// `frames` フレームで目標マスに着くよう速度を設定
    pub fn set_target(piece: &mut Piece, destination: Cell, frames: u32) {
        let target = Vec2::new(destination.x as f32, destination.y as f32);
        Self::aim(piece, target, frames);
    }

    /// 盤外（行 = -2）へ退場させる
    pub fn remove(piece: &mut Piece, frames: u32) {
        let target = Vec2::new(piece.target.x, OFF_BOARD_ROW);
        Self::aim(piece, target, frames);
    }

    fn aim(piece: &mut Piece, target: Vec2, frames: u32) {
        piece.target = target;
        piece.velocity = (target - piece.pos) / frames.max(1) as f32;
    }

    /// 1フレーム進める。移動中だったらtrue
    pub fn advance(piece: &mut Piece) -> bool {
        if piece.pos == piece.target {
            return false;
        }
        piece.pos += piece.velocity;

        let v = piece.velocity;
        let overshoot = piece.pos.x * v.x > piece.target.x * v.x
            || piece.pos.y * v.y > piece.target.y * v.y;
        let arrived = (piece.target - piece.pos).length() < ARRIVAL_EPSILON;
        if overshoot || arrived || v == Vec2::ZERO {
            piece.velocity = Vec2::ZERO;
            piece.pos = piece.pos.round();
            if piece.pos != piece.target {
                // 目標が整数でない（外部から直接書き換えられた）場合も必ず止める
                piece.pos = piece.target;
            }
        }
        true
    }
}
