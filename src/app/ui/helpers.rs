// UI描画用のヘルパー関数

use egui::{Color32, Painter, Stroke};

use crate::domain::{Cell, Direction, Side};
use crate::presentation::{BoardGeometry, Sprite, SpriteKind};

/// スプライトの見た目（描画リソース）
///
/// 起動時に1度作ってアプリ状態が所有する。
#[derive(Clone, Debug)]
pub struct SpriteSheet {
    pub board_fill: Color32,
    pub board_line: Stroke,
    pub piece_a: Color32,
    pub piece_b: Color32,
    pub piece_stroke: Stroke,
    pub highlight: Stroke,
}

impl Default for SpriteSheet {
    fn default() -> Self {
        Self {
            board_fill: Color32::from_rgb(222, 184, 135),
            board_line: Stroke::new(2.0, Color32::from_rgb(120, 80, 40)),
            piece_a: Color32::from_rgb(239, 68, 68),
            piece_b: Color32::from_rgb(59, 130, 246),
            piece_stroke: Stroke::new(1.5, Color32::from_gray(40)),
            highlight: Stroke::new(3.0, Color32::from_rgb(234, 179, 8)),
        }
    }
}

impl SpriteSheet {
    pub fn piece_color(&self, side: Side) -> Color32 {
        match side {
            Side::A => self.piece_a,
            Side::B => self.piece_b,
        }
    }

    /// 描画リストを順に描く
    pub fn paint(&self, painter: &Painter, geometry: &BoardGeometry, sprites: &[Sprite]) {
        for sprite in sprites {
            let rect = sprite.rect();
            match sprite.kind {
                SpriteKind::Board => {
                    painter.rect_filled(rect, 8.0, self.board_fill);
                    self.paint_lines(painter, geometry);
                }
                SpriteKind::Piece(side) => {
                    let radius = rect.size().min_elem() * 0.45;
                    painter.circle_filled(rect.center(), radius, self.piece_color(side));
                    painter.circle_stroke(rect.center(), radius, self.piece_stroke);
                }
                SpriteKind::Highlight => {
                    let radius = rect.size().min_elem() * 0.5;
                    painter.circle_stroke(rect.center(), radius, self.highlight);
                }
            }
        }
    }

    /// 盤の線（縦横と、(x+y) が偶数のマスから伸びる斜め線）
    fn paint_lines(&self, painter: &Painter, geometry: &BoardGeometry) {
        for cell in Cell::all() {
            for direction in [Direction::E, Direction::S, Direction::SE, Direction::SW] {
                if direction.is_diagonal() && (cell.x + cell.y) % 2 != 0 {
                    continue;
                }
                if let Some(next) = cell.offset(direction, 1) {
                    painter.line_segment(
                        [geometry.cell_center(cell), geometry.cell_center(next)],
                        self.board_line,
                    );
                }
            }
        }
    }
}

/// 日本語フォントのインストール
pub fn install_japanese_fonts(ctx: &egui::Context) {
    use egui::{FontData, FontDefinitions, FontFamily};

    let mut fonts = FontDefinitions::default();

    let windir = std::env::var("WINDIR").unwrap_or_else(|_| "C:\\Windows".to_string());
    let candidates = [
        std::path::Path::new(&windir).join("Fonts").join("meiryo.ttc"),
        std::path::Path::new(&windir).join("Fonts").join("YuGothM.ttc"),
        std::path::Path::new(&windir).join("Fonts").join("msgothic.ttc"),
        "/System/Library/Fonts/ヒラギノ角ゴシック W3.ttc".into(),
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc".into(),
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc".into(),
        "/usr/share/fonts/truetype/fonts-japanese-gothic.ttf".into(),
    ];

    for path in candidates.iter() {
        let Ok(bytes) = std::fs::read(path) else {
            continue;
        };
        let key = "jp-font".to_string();
        fonts
            .font_data
            .insert(key.clone(), FontData::from_owned(bytes));
        for family in [FontFamily::Proportional, FontFamily::Monospace] {
            if let Some(list) = fonts.families.get_mut(&family) {
                list.insert(0, key.clone());
            }
        }
        ctx.set_fonts(fonts);
        return;
    }

    eprintln!("日本語フォントを見つけられませんでした。");
}
