// 局所移動テンプレート

use super::cell::{Cell, Direction};

/// 1方向の移動候補
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOption {
    pub direction: Direction,
    /// 進むマス数（1 以上）
    pub magnitude: i32,
    pub is_capture: bool,
}

impl MoveOption {
    pub fn step(direction: Direction) -> Self {
        Self {
            direction,
            magnitude: 1,
            is_capture: false,
        }
    }

    pub fn capture(direction: Direction) -> Self {
        Self {
            direction,
            magnitude: 2,
            is_capture: true,
        }
    }

    /// 基点からの移動先（範囲外はNone）
    pub fn destination(&self, base: Cell) -> Option<Cell> {
        base.offset(self.direction, self.magnitude)
    }
}

/// 選択駒の合法手集合（3×3 テンプレートの明示表現）
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveTemplate {
    options: Vec<MoveOption>,
}

impl MoveTemplate {
    pub fn new(options: Vec<MoveOption>) -> Self {
        let mut template = Self::default();
        for option in options {
            template.push(option);
        }
        template
    }

    /// 生の 3×3 強度グリッドから構築する
    ///
    /// `grid[i][j]` は方向 (i-1, j-1) の強度。中央 (1,1) は常に無視し、
    /// 強度 2 以上は駒取りとして扱う。
    pub fn from_grid(grid: [[u8; 3]; 3]) -> Self {
        let mut options = Vec::new();
        for (i, row) in grid.iter().enumerate() {
            for (j, &magnitude) in row.iter().enumerate() {
                if magnitude == 0 {
                    continue;
                }
                let Some(direction) = Direction::from_delta(i as i32 - 1, j as i32 - 1) else {
                    continue;
                };
                options.push(MoveOption {
                    direction,
                    magnitude: magnitude as i32,
                    is_capture: magnitude >= 2,
                });
            }
        }
        Self::new(options)
    }

    /// 同じ方向は後勝ちで1件にまとめる
    pub fn push(&mut self, option: MoveOption) {
        if option.magnitude <= 0 {
            return;
        }
        self.options.retain(|o| o.direction != option.direction);
        self.options.push(option);
    }

    pub fn get(&self, direction: Direction) -> Option<MoveOption> {
        self.options.iter().copied().find(|o| o.direction == direction)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveOption> {
        self.options.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn has_capture(&self) -> bool {
        self.options.iter().any(|o| o.is_capture)
    }

    /// 駒取りのみを残す
    pub fn captures_only(mut self) -> Self {
        self.options.retain(|o| o.is_capture);
        self
    }
}
