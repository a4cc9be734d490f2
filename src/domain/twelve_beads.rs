// 十二珠（5×5・各12駒）の既定ルールエンジン

use anyhow::{anyhow, Result};

use super::cell::{Cell, Direction, Side};
use super::moves::{MoveOption, MoveTemplate};
use super::rules::{RulesEngine, Step, TurnResult, TurnStatus};
use crate::constants::GRID;

/// 対局状態
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TwelveBeads {
    /// `board[x][y]`
    board: [[Option<Side>; GRID]; GRID],
    turn: Option<Side>,
    forced: Option<Cell>,
    winner: Option<Side>,
}

impl TwelveBeads {
    /// 5行の文字列（'a' / 'b' / '.'）から局面を構築
    pub fn from_rows(rows: [&str; GRID], turn: Option<Side>) -> Result<Self> {
        let mut board = [[None; GRID]; GRID];
        for (y, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.chars().filter(|c| !c.is_whitespace()).collect();
            if chars.len() != GRID {
                return Err(anyhow!(
                    "{}行目の文字数が不正: 期待{}、実際{}",
                    y,
                    GRID,
                    chars.len()
                ));
            }
            for (x, ch) in chars.into_iter().enumerate() {
                board[x][y] = match ch {
                    'a' | 'A' => Some(Side::A),
                    'b' | 'B' => Some(Side::B),
                    '.' | '・' => None,
                    _ => return Err(anyhow!("不正な文字: {}", ch)),
                };
            }
        }
        Ok(Self {
            board,
            turn,
            forced: None,
            winner: None,
        })
    }

    /// 各陣営の駒数
    pub fn count(&self, side: Side) -> usize {
        Cell::all()
            .filter(|&c| self.occupant(c) == Some(side))
            .count()
    }

    fn set(&mut self, cell: Cell, value: Option<Side>) {
        let (x, y) = cell.index();
        self.board[x][y] = value;
    }

    /// 斜めの線は (x+y) が偶数のマスからのみ伸びる
    fn connects(cell: Cell, direction: Direction) -> bool {
        !direction.is_diagonal() || (cell.x + cell.y) % 2 == 0
    }

    /// 手番・連続駒取りの制約を考えない局所手
    fn raw_moves(&self, cell: Cell, side: Side) -> MoveTemplate {
        let mut template = MoveTemplate::default();
        for direction in Direction::ALL {
            if !Self::connects(cell, direction) {
                continue;
            }
            let Some(next) = cell.offset(direction, 1) else {
                continue;
            };
            match self.occupant(next) {
                None => template.push(MoveOption::step(direction)),
                Some(other) if other != side => {
                    if let Some(landing) = cell.offset(direction, 2) {
                        if self.occupant(landing).is_none() {
                            template.push(MoveOption::capture(direction));
                        }
                    }
                }
                Some(_) => {}
            }
        }
        template
    }

    fn has_any_move(&self, side: Side) -> bool {
        Cell::all()
            .filter(|&c| self.occupant(c) == Some(side))
            .any(|c| !self.raw_moves(c, side).is_empty())
    }

    fn finish(&mut self, winner: Side) {
        self.turn = None;
        self.forced = None;
        self.winner = Some(winner);
    }
}

impl Default for TwelveBeads {
    fn default() -> Self {
        Self::new_game()
    }
}

impl RulesEngine for TwelveBeads {
    fn new_game() -> Self {
        let mut board = [[None; GRID]; GRID];
        for (x, column) in board.iter_mut().enumerate() {
            for (y, slot) in column.iter_mut().enumerate() {
                *slot = match (x, y) {
                    (_, 0 | 1) => Some(Side::B),
                    (_, 3 | 4) => Some(Side::A),
                    (0 | 1, 2) => Some(Side::B),
                    (3 | 4, 2) => Some(Side::A),
                    _ => None,
                };
            }
        }
        Self {
            board,
            turn: Some(Side::A),
            forced: None,
            winner: None,
        }
    }

    fn occupant(&self, cell: Cell) -> Option<Side> {
        if !cell.in_grid() {
            return None;
        }
        let (x, y) = cell.index();
        self.board[x][y]
    }

    fn turn(&self) -> Option<Side> {
        self.turn
    }

    fn moves(&self, cell: Cell) -> MoveTemplate {
        let Some(side) = self.turn else {
            return MoveTemplate::default();
        };
        if self.occupant(cell) != Some(side) {
            return MoveTemplate::default();
        }
        match self.forced {
            Some(forced) if forced != cell => MoveTemplate::default(),
            Some(_) => self.raw_moves(cell, side).captures_only(),
            None => self.raw_moves(cell, side),
        }
    }

    fn play_turn(&mut self, base: Cell, direction: Direction) -> TurnResult {
        let Some(side) = self.turn else {
            return TurnResult::rejected();
        };
        let Some(option) = self.moves(base).get(direction) else {
            return TurnResult::rejected();
        };
        let Some(to) = option.destination(base) else {
            return TurnResult::rejected();
        };

        self.set(base, None);
        self.set(to, Some(side));
        let captured = if option.is_capture {
            base.offset(direction, 1)
        } else {
            None
        };
        if let Some(cell) = captured {
            self.set(cell, None);
        }

        let step = Some(Step { from: base, to });
        let result = |status| TurnResult {
            status,
            step,
            captured,
        };

        let opponent = side.opponent();
        if captured.is_some() {
            if self.count(opponent) == 0 {
                self.finish(side);
                return result(TurnStatus::GameOver);
            }
            if self.raw_moves(to, side).has_capture() {
                self.forced = Some(to);
                return result(TurnStatus::Continue);
            }
        }

        self.forced = None;
        if !self.has_any_move(opponent) {
            self.finish(side);
            return result(TurnStatus::GameOver);
        }
        self.turn = Some(opponent);
        result(TurnStatus::Normal)
    }

    fn forced_continuation(&self) -> Option<Cell> {
        self.forced
    }

    fn winner(&self) -> Option<Side> {
        self.winner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(x: i32, y: i32) -> Cell {
        Cell::new(x, y).unwrap()
    }

    #[test]
    fn new_game_has_twelve_each_and_empty_centre() {
        let g = TwelveBeads::new_game();
        assert_eq!(g.count(Side::A), 12);
        assert_eq!(g.count(Side::B), 12);
        assert_eq!(g.occupant(cell(2, 2)), None);
        assert_eq!(g.turn(), Some(Side::A));
        assert_eq!(g.forced_continuation(), None);
    }

    #[test]
    fn opening_moves_only_reach_centre() {
        let g = TwelveBeads::new_game();
        let t = g.moves(cell(2, 3));
        assert_eq!(t.len(), 1);
        assert_eq!(t.get(Direction::N), Some(MoveOption::step(Direction::N)));
        // 奇数マスからは斜めに動けない
        assert!(g.moves(cell(1, 4)).is_empty());
        // 相手の駒は手番外
        assert!(g.moves(cell(2, 1)).is_empty());
    }

    #[test]
    fn diagonal_only_from_even_cells() {
        let g = TwelveBeads::new_game();
        let t = g.moves(cell(1, 3));
        assert_eq!(t.get(Direction::NE), Some(MoveOption::step(Direction::NE)));
        assert!(g.moves(cell(3, 2)).get(Direction::W).is_some());
    }

    #[test]
    fn opening_move_passes_turn() {
        let mut g = TwelveBeads::new_game();
        let r = g.play_turn(cell(2, 3), Direction::N);
        assert_eq!(r.status, TurnStatus::Normal);
        assert_eq!(
            r.step,
            Some(Step {
                from: cell(2, 3),
                to: cell(2, 2)
            })
        );
        assert_eq!(r.captured, None);
        assert_eq!(g.turn(), Some(Side::B));
        assert_eq!(g.occupant(cell(2, 2)), Some(Side::A));
        assert_eq!(g.occupant(cell(2, 3)), None);
    }

    #[test]
    fn illegal_move_is_rejected_without_change() {
        let mut g = TwelveBeads::new_game();
        let before = g.clone();
        assert_eq!(g.play_turn(cell(2, 3), Direction::S).status, TurnStatus::Rejected);
        assert_eq!(g.play_turn(cell(2, 1), Direction::S).status, TurnStatus::Rejected);
        assert_eq!(g, before);
    }

    #[test]
    fn capture_removes_jumped_piece() {
        let mut g = TwelveBeads::new_game();
        g.play_turn(cell(2, 3), Direction::N);
        let r = g.play_turn(cell(2, 1), Direction::S);
        assert_eq!(r.status, TurnStatus::Normal);
        assert_eq!(r.captured, Some(cell(2, 2)));
        assert_eq!(g.occupant(cell(2, 2)), None);
        assert_eq!(g.occupant(cell(2, 3)), Some(Side::B));
        assert_eq!(g.count(Side::A), 11);
    }

    #[test]
    fn chained_capture_forces_continuation() {
        let mut g = TwelveBeads::from_rows(
            [".....", "..b..", ".....", "..b..", "..a.b"],
            Some(Side::A),
        )
        .unwrap();
        let r = g.play_turn(cell(2, 4), Direction::N);
        assert_eq!(r.status, TurnStatus::Continue);
        assert_eq!(g.forced_continuation(), Some(cell(2, 2)));
        assert_eq!(g.turn(), Some(Side::A));
        // 連続駒取り中は駒取り以外を指せない
        assert_eq!(g.moves(cell(2, 2)).len(), 1);
        assert_eq!(g.play_turn(cell(2, 2), Direction::E).status, TurnStatus::Rejected);

        let r = g.play_turn(cell(2, 2), Direction::N);
        assert_eq!(r.status, TurnStatus::Normal);
        assert_eq!(r.captured, Some(cell(2, 1)));
        assert_eq!(g.forced_continuation(), None);
        assert_eq!(g.turn(), Some(Side::B));
    }

    #[test]
    fn capturing_last_piece_ends_game() {
        let mut g = TwelveBeads::from_rows(
            [".....", ".....", ".....", "..b..", "..a.."],
            Some(Side::A),
        )
        .unwrap();
        let r = g.play_turn(cell(2, 4), Direction::N);
        assert_eq!(r.status, TurnStatus::GameOver);
        assert_eq!(g.turn(), None);
        assert_eq!(g.winner(), Some(Side::A));
        assert!(g.moves(cell(2, 2)).is_empty());
        assert_eq!(g.play_turn(cell(2, 2), Direction::N).status, TurnStatus::Rejected);
    }

    #[test]
    fn blocked_opponent_ends_game() {
        // 青は角に閉じ込められる
        let mut g = TwelveBeads::from_rows(
            ["baa..", "aa...", "a.a..", ".....", "...a."],
            Some(Side::A),
        )
        .unwrap();
        let r = g.play_turn(cell(3, 4), Direction::E);
        assert_eq!(r.status, TurnStatus::GameOver);
        assert_eq!(g.winner(), Some(Side::A));
    }

    #[test]
    fn from_rows_rejects_bad_input() {
        assert!(TwelveBeads::from_rows(["....", ".....", ".....", ".....", "....."], None).is_err());
        assert!(TwelveBeads::from_rows(["....x", ".....", ".....", ".....", "....."], None).is_err());
    }
}
