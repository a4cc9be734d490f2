// ポインタ入力の振り分け（選択・着手・カーソル）

use egui::Pos2;

use super::board::BoardState;
use super::draw_list::CursorAffordance;
use crate::domain::{Cell, RulesEngine, TurnResult, TurnStatus};
use crate::vlog;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// 描画バックエンドから受け取るポインタイベント
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Moved(Pos2),
    Pressed { pos: Pos2, button: PointerButton },
}

/// クリック処理の結果
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// 何も変わらない
    Ignored,
    /// 駒を選択してハイライトを点灯
    Selected(Cell),
    /// 選択を解除
    Deselected,
    /// ルールエンジンが手を受理
    Moved(TurnResult),
    /// ルールエンジンが手を拒否（選択も解除）
    Rejected,
}

/// 入力振り分けのユーティリティ
pub struct InputDispatcher;

impl InputDispatcher {
    /// イベントを1件処理する。クリックなら結果を返す
    pub fn dispatch<R: RulesEngine>(
        board: &mut BoardState<R>,
        event: PointerEvent,
    ) -> Option<ClickOutcome> {
        match event {
            PointerEvent::Moved(pos) => {
                Self::handle_hover(board, pos);
                None
            }
            PointerEvent::Pressed {
                pos,
                button: PointerButton::Primary,
            } => Some(Self::handle_click(board, pos)),
            PointerEvent::Pressed { .. } => Some(ClickOutcome::Ignored),
        }
    }

    /// 手番側の動かせる駒か（連続駒取り中はその駒だけ）
    pub fn is_movable<R: RulesEngine>(board: &BoardState<R>, cell: Cell) -> bool {
        let rules = board.rules();
        let Some(turn) = rules.turn() else {
            return false;
        };
        let forced_ok = match rules.forced_continuation() {
            None => true,
            Some(forced) => forced == cell,
        };
        forced_ok && rules.occupant(cell) == Some(turn)
    }

    /// カーソルの見た目だけを更新する（選択状態は変えない）
    pub fn handle_hover<R: RulesEngine>(board: &mut BoardState<R>, pos: Pos2) -> CursorAffordance {
        let cursor = if board.blocked {
            CursorAffordance::Default
        } else {
            match board.geometry.pixel_to_cell(pos) {
                Some(cell)
                    if board.highlights.is_reachable(cell) || Self::is_movable(board, cell) =>
                {
                    CursorAffordance::Interactive
                }
                _ => CursorAffordance::Default,
            }
        };
        board.cursor = cursor;
        cursor
    }

    pub fn handle_click<R: RulesEngine>(board: &mut BoardState<R>, pos: Pos2) -> ClickOutcome {
        if board.blocked {
            return ClickOutcome::Ignored;
        }
        let hit = board.geometry.pixel_to_cell(pos);
        match hit {
            Some(cell) if board.highlights.is_reachable(cell) => Self::attempt_turn(board, cell),
            Some(cell) if Self::is_movable(board, cell) => Self::select(board, cell),
            _ => {
                // 連続駒取り中は選択を外せない
                if board.rules.forced_continuation().is_some() || board.highlights.is_empty() {
                    return ClickOutcome::Ignored;
                }
                board.highlights.clear();
                vlog!("選択解除");
                ClickOutcome::Deselected
            }
        }
    }

    fn select<R: RulesEngine>(board: &mut BoardState<R>, cell: Cell) -> ClickOutcome {
        let template = board.rules.moves(cell);
        board.highlights.activate(cell, &template);
        vlog!("選択: {} 候補{}件", cell, template.len());
        ClickOutcome::Selected(cell)
    }

    /// 点灯中のマスへの着手をルールエンジンに送る
    fn attempt_turn<R: RulesEngine>(board: &mut BoardState<R>, cell: Cell) -> ClickOutcome {
        let Some(marker) = board.highlights.marker(cell).copied() else {
            return ClickOutcome::Ignored;
        };
        let (Some(base), Some(option)) = (marker.base, marker.option) else {
            return ClickOutcome::Ignored;
        };

        let result = board.rules.play_turn(base, option.direction);
        board.highlights.clear();
        vlog!("着手: {} {:?} -> {:?}", base, option.direction, result);

        if !result.status.is_success() {
            return ClickOutcome::Rejected;
        }
        let Some(step) = result.step else {
            vlog!("ルールエンジンが移動なしで成功を返しました: {:?}", result);
            return ClickOutcome::Moved(result);
        };

        // 取られたマスと移動先が重なる場合に備えて先に退場させる
        if let Some(captured) = result.captured {
            board.capture(captured);
        }
        board.relocate(step);

        match result.status {
            TurnStatus::GameOver => {
                board.blocked = true;
                board.cursor = CursorAffordance::Default;
            }
            TurnStatus::Continue => {
                let template = board.rules.moves(step.to);
                board.highlights.activate(step.to, &template);
            }
            TurnStatus::Normal | TurnStatus::Rejected => {}
        }
        ClickOutcome::Moved(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Side, TwelveBeads};
    use crate::presentation::board::InteractionPhase;
    use egui::Vec2;

    fn cell(x: i32, y: i32) -> Cell {
        Cell::new(x, y).unwrap()
    }

    fn board() -> BoardState<TwelveBeads> {
        let mut b = BoardState::new(TwelveBeads::new_game());
        b.set_board_size(Vec2::splat(500.0));
        b
    }

    fn centre<R: RulesEngine>(b: &BoardState<R>, c: Cell) -> Pos2 {
        b.geometry().cell_center(c)
    }

    fn click<R: RulesEngine>(b: &mut BoardState<R>, c: Cell) -> ClickOutcome {
        let pos = centre(b, c);
        InputDispatcher::handle_click(b, pos)
    }

    #[test]
    fn selecting_own_piece_highlights_moves() {
        let mut b = board();
        assert_eq!(click(&mut b, cell(2, 3)), ClickOutcome::Selected(cell(2, 3)));
        assert_eq!(b.phase(), InteractionPhase::Selected(cell(2, 3)));
        assert_eq!(b.highlights().active_cells().collect::<Vec<_>>(), vec![cell(2, 2)]);
    }

    #[test]
    fn opponent_piece_is_not_selectable() {
        let mut b = board();
        assert_eq!(click(&mut b, cell(2, 1)), ClickOutcome::Ignored);
        assert_eq!(b.phase(), InteractionPhase::Idle);
    }

    #[test]
    fn clicking_elsewhere_cancels_selection() {
        let mut b = board();
        click(&mut b, cell(2, 3));
        assert_eq!(click(&mut b, cell(0, 0)), ClickOutcome::Deselected);
        assert_eq!(b.phase(), InteractionPhase::Idle);
        assert_eq!(b.rules().turn(), Some(Side::A));
    }

    #[test]
    fn clicking_corner_of_cell_is_a_miss() {
        let mut b = board();
        click(&mut b, cell(2, 3));
        let corner = b.geometry().cell_to_pixel(cell(2, 2));
        assert_eq!(InputDispatcher::handle_click(&mut b, corner), ClickOutcome::Deselected);
    }

    #[test]
    fn selecting_another_piece_moves_selection() {
        let mut b = board();
        click(&mut b, cell(2, 3));
        assert_eq!(click(&mut b, cell(3, 2)), ClickOutcome::Selected(cell(3, 2)));
        assert_eq!(b.highlights().base(), Some(cell(3, 2)));
    }

    #[test]
    fn hover_reports_affordance_without_changing_selection() {
        let mut b = board();
        let over_own = centre(&b, cell(2, 3));
        let over_other = centre(&b, cell(2, 1));
        assert_eq!(
            InputDispatcher::handle_hover(&mut b, over_own),
            CursorAffordance::Interactive
        );
        assert_eq!(
            InputDispatcher::handle_hover(&mut b, over_other),
            CursorAffordance::Default
        );
        assert_eq!(b.phase(), InteractionPhase::Idle);

        click(&mut b, cell(2, 3));
        let over_target = centre(&b, cell(2, 2));
        assert_eq!(
            InputDispatcher::handle_hover(&mut b, over_target),
            CursorAffordance::Interactive
        );
        assert_eq!(b.cursor(), CursorAffordance::Interactive);
    }

    #[test]
    fn secondary_button_is_ignored() {
        let mut b = board();
        let pos = centre(&b, cell(2, 3));
        let out = InputDispatcher::dispatch(
            &mut b,
            PointerEvent::Pressed {
                pos,
                button: PointerButton::Secondary,
            },
        );
        assert_eq!(out, Some(ClickOutcome::Ignored));
        assert_eq!(b.phase(), InteractionPhase::Idle);
        assert_eq!(InputDispatcher::dispatch(&mut b, PointerEvent::Moved(pos)), None);
    }
}
