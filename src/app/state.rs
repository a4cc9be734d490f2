// アプリケーション状態

use super::ui::helpers::SpriteSheet;
use crate::constants::MAX_LOG_LINES;
use crate::domain::{GameConfig, RulesEngine, TwelveBeads};
use crate::presentation::BoardState;

/// アプリケーション状態
pub struct App {
    pub board: BoardState<TwelveBeads>,
    pub config: GameConfig,
    pub sprites: SpriteSheet,
    pub log_lines: Vec<String>,
    pub verbose_logging: bool,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        let board = BoardState::with_config(TwelveBeads::new_game(), &config);
        Self {
            board,
            verbose_logging: config.verbose_logging,
            config,
            sprites: SpriteSheet::default(),
            log_lines: vec!["赤の手番から開始".into()],
        }
    }

    pub fn push_log(&mut self, s: String) {
        self.log_lines.push(s);
        if self.log_lines.len() > MAX_LOG_LINES {
            let cut = self.log_lines.len() - MAX_LOG_LINES;
            self.log_lines.drain(0..cut);
        }
    }

    /// 新しい対局
    pub fn restart(&mut self) {
        self.board.restart();
        self.log_lines.clear();
        self.push_log("新しい対局を開始".into());
    }

    /// 手番・勝敗の表示文
    pub fn status_text(&self) -> String {
        let rules = self.board.rules();
        if let Some(winner) = rules.winner() {
            return format!("終局: {}の勝ち", winner.label());
        }
        match (rules.turn(), rules.forced_continuation()) {
            (Some(side), Some(cell)) => format!("{}の手番（{} で続けて駒取り）", side.label(), cell),
            (Some(side), None) => format!("{}の手番", side.label()),
            (None, _) => "対局していません".to_string(),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_log_keeps_last_lines() {
        let mut app = App::default();
        for i in 0..(MAX_LOG_LINES + 20) {
            app.push_log(format!("line {i}"));
        }
        assert_eq!(app.log_lines.len(), MAX_LOG_LINES);
        assert_eq!(app.log_lines.last().unwrap(), &format!("line {}", MAX_LOG_LINES + 19));
    }

    #[test]
    fn status_text_follows_turn() {
        let app = App::default();
        assert_eq!(app.status_text(), "赤の手番");
    }
}
