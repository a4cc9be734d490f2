// ルールエンジンの呼び出し規約

use super::cell::{Cell, Direction, Side};
use super::moves::MoveTemplate;

/// 1手の結果種別
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnStatus {
    /// 不正な手
    Rejected,
    /// 同じ駒が続けて駒取りしなければならない
    Continue,
    /// 手番交代
    Normal,
    /// 終局
    GameOver,
}

impl TurnStatus {
    pub fn is_success(self) -> bool {
        !matches!(self, TurnStatus::Rejected)
    }
}

/// 駒の移動（移動元 → 移動先）
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub from: Cell,
    pub to: Cell,
}

/// `play_turn` の結果
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnResult {
    pub status: TurnStatus,
    pub step: Option<Step>,
    /// 取られた駒のマス
    pub captured: Option<Cell>,
}

impl TurnResult {
    pub fn rejected() -> Self {
        Self {
            status: TurnStatus::Rejected,
            step: None,
            captured: None,
        }
    }
}

/// 盤面入力層から見たルールエンジン
///
/// 合法手生成・手番・駒取りの判定はすべてこちら側が持ち、
/// 入力層は結果に従って表示状態を更新するだけ。
pub trait RulesEngine {
    /// 初期配置の新しい対局
    fn new_game() -> Self
    where
        Self: Sized;

    /// マスの駒の持ち主（空ならNone）
    fn occupant(&self, cell: Cell) -> Option<Side>;

    /// 手番（未開始・終局ならNone）
    fn turn(&self) -> Option<Side>;

    /// 指定マスの駒の局所合法手
    fn moves(&self, cell: Cell) -> MoveTemplate;

    /// 手を指す。不正なら `TurnStatus::Rejected` を返し状態は変えない
    fn play_turn(&mut self, base: Cell, direction: Direction) -> TurnResult;

    /// 連続駒取り中の駒（なければNone）
    fn forced_continuation(&self) -> Option<Cell>;

    /// 勝者（終局していなければNone）
    fn winner(&self) -> Option<Side> {
        None
    }
}
