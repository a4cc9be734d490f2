// 移動先ハイライトの管理

use crate::constants::GRID;
use crate::domain::{Cell, MoveOption, MoveTemplate};
use crate::vlog;

/// マスごとのハイライト
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HighlightMarker {
    /// 基点からこのマスへの移動（Noneなら非表示）
    pub option: Option<MoveOption>,
    /// 選択中の駒のマス
    pub base: Option<Cell>,
}

impl HighlightMarker {
    pub fn is_active(&self) -> bool {
        self.option.is_some()
    }
}

/// 選択中の駒の移動先ハイライト（同時に1駒分のみ）
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HighlightTracker {
    markers: [[HighlightMarker; GRID]; GRID],
}

impl HighlightTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 既存のハイライトを消してから、選択駒の移動先を点灯する
    pub fn activate(&mut self, selected: Cell, template: &MoveTemplate) {
        self.clear();
        for option in template.iter() {
            let Some(dest) = option.destination(selected) else {
                vlog!("盤外の移動先を無視: {} {:?}", selected, option);
                continue;
            };
            let (x, y) = dest.index();
            self.markers[x][y] = HighlightMarker {
                option: Some(*option),
                base: Some(selected),
            };
        }
    }

    /// 点灯中のマスか
    pub fn is_reachable(&self, cell: Cell) -> bool {
        self.marker(cell).is_some_and(|m| m.is_active())
    }

    pub fn marker(&self, cell: Cell) -> Option<&HighlightMarker> {
        if !cell.in_grid() {
            return None;
        }
        let (x, y) = cell.index();
        Some(&self.markers[x][y])
    }

    /// すべて消灯
    pub fn clear(&mut self) {
        for column in self.markers.iter_mut() {
            for marker in column.iter_mut() {
                *marker = HighlightMarker::default();
            }
        }
    }

    /// 点灯中のマス
    pub fn active_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::all().filter(|&c| self.is_reachable(c))
    }

    /// 点灯中ハイライトの基点（選択中の駒）
    pub fn base(&self) -> Option<Cell> {
        self.active_cells()
            .next()
            .and_then(|c| self.marker(c))
            .and_then(|m| m.base)
    }

    pub fn is_empty(&self) -> bool {
        self.active_cells().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Direction;

    fn cell(x: i32, y: i32) -> Cell {
        Cell::new(x, y).unwrap()
    }

    #[test]
    fn activate_marks_destinations() {
        let mut h = HighlightTracker::new();
        let t = MoveTemplate::new(vec![
            MoveOption::step(Direction::N),
            MoveOption::capture(Direction::E),
        ]);
        h.activate(cell(2, 2), &t);
        assert!(h.is_reachable(cell(2, 1)));
        assert!(h.is_reachable(cell(4, 2)));
        assert!(!h.is_reachable(cell(3, 2)));
        assert!(!h.is_reachable(cell(2, 2)));
        assert_eq!(h.active_cells().count(), 2);
        assert_eq!(h.base(), Some(cell(2, 2)));
        let m = h.marker(cell(4, 2)).unwrap();
        assert!(m.option.unwrap().is_capture);
    }

    #[test]
    fn activate_replaces_previous_selection() {
        let mut h = HighlightTracker::new();
        h.activate(cell(0, 0), &MoveTemplate::new(vec![MoveOption::step(Direction::S)]));
        h.activate(cell(4, 4), &MoveTemplate::new(vec![MoveOption::step(Direction::W)]));
        assert!(!h.is_reachable(cell(0, 1)));
        assert!(h.is_reachable(cell(3, 4)));
        let bases: Vec<_> = h
            .active_cells()
            .filter_map(|c| h.marker(c).and_then(|m| m.base))
            .collect();
        assert!(bases.iter().all(|&b| b == cell(4, 4)));
    }

    #[test]
    fn out_of_grid_entries_are_skipped() {
        let mut h = HighlightTracker::new();
        h.activate(
            cell(0, 0),
            &MoveTemplate::new(vec![
                MoveOption::step(Direction::N),
                MoveOption::capture(Direction::W),
                MoveOption::step(Direction::SE),
            ]),
        );
        assert_eq!(h.active_cells().collect::<Vec<_>>(), vec![cell(1, 1)]);
    }

    #[test]
    fn clear_resets_everything() {
        let mut h = HighlightTracker::new();
        h.activate(cell(2, 2), &MoveTemplate::new(vec![MoveOption::step(Direction::N)]));
        h.clear();
        assert!(h.is_empty());
        assert_eq!(h.base(), None);
        assert_eq!(h, HighlightTracker::new());
    }

    #[test]
    fn out_of_grid_query_is_not_reachable() {
        let h = HighlightTracker::new();
        assert!(!h.is_reachable(Cell { x: -1, y: -1 }));
        assert!(!h.is_reachable(Cell { x: 5, y: 0 }));
    }
}
