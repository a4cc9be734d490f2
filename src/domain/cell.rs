// マス・陣営・方向の型定義（ドメイン層）

use crate::constants::GRID_I32;
use std::fmt;

/// 5×5 盤面上のマス（列, 行）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// 範囲外ならNone
    pub fn new(x: i32, y: i32) -> Option<Self> {
        let cell = Self { x, y };
        cell.in_grid().then_some(cell)
    }

    pub fn in_grid(self) -> bool {
        (0..GRID_I32).contains(&self.x) && (0..GRID_I32).contains(&self.y)
    }

    /// 方向に `magnitude` マス進んだマス（範囲外はNone）
    pub fn offset(self, direction: Direction, magnitude: i32) -> Option<Self> {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx * magnitude, self.y + dy * magnitude)
    }

    /// 盤面配列のインデックス
    pub fn index(self) -> (usize, usize) {
        (self.x as usize, self.y as usize)
    }

    /// 全マスを列優先で列挙
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..GRID_I32).flat_map(|x| (0..GRID_I32).map(move |y| Cell { x, y }))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// 駒の持ち主
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// 先手（赤）
    A,
    /// 後手（青）
    B,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::A => "赤",
            Side::B => "青",
        }
    }
}

/// 8方向（3×3 テンプレートの中央を除いた各要素）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::S,
        Direction::E,
        Direction::W,
        Direction::NE,
        Direction::NW,
        Direction::SE,
        Direction::SW,
    ];

    /// (dx, dy)。y は下向きが正
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::N => (0, -1),
            Direction::S => (0, 1),
            Direction::E => (1, 0),
            Direction::W => (-1, 0),
            Direction::NE => (1, -1),
            Direction::NW => (-1, -1),
            Direction::SE => (1, 1),
            Direction::SW => (-1, 1),
        }
    }

    /// (dx, dy) から方向へ。(0, 0) や範囲外はNone
    pub fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.delta() == (dx, dy))
    }

    pub fn is_diagonal(self) -> bool {
        let (dx, dy) = self.delta();
        dx != 0 && dy != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_out_of_grid() {
        assert!(Cell::new(0, 0).is_some());
        assert!(Cell::new(4, 4).is_some());
        assert!(Cell::new(-1, -1).is_none());
        assert!(Cell::new(5, 0).is_none());
        assert!(Cell::new(0, 5).is_none());
    }

    #[test]
    fn offset_scales_by_magnitude() {
        let c = Cell::new(2, 2).unwrap();
        assert_eq!(c.offset(Direction::N, 2), Cell::new(2, 0));
        assert_eq!(c.offset(Direction::SE, 1), Cell::new(3, 3));
        assert_eq!(c.offset(Direction::W, 3), None);
    }

    #[test]
    fn from_delta_excludes_centre() {
        assert_eq!(Direction::from_delta(0, 0), None);
        assert_eq!(Direction::from_delta(2, 0), None);
        for d in Direction::ALL {
            let (dx, dy) = d.delta();
            assert_eq!(Direction::from_delta(dx, dy), Some(d));
        }
    }

    #[test]
    fn all_cells_cover_grid() {
        assert_eq!(Cell::all().count(), 25);
        assert!(Cell::all().all(Cell::in_grid));
    }

    #[test]
    fn opponent_swaps() {
        assert_eq!(Side::A.opponent(), Side::B);
        assert_eq!(Side::B.opponent(), Side::A);
    }
}
