// 十二珠 - 盤面の入力・アニメーションエンジン

pub mod app;
pub mod constants;
pub mod domain; // ドメイン層
pub mod logging;
pub mod presentation; // 盤面の入力・表示層

// 外部クレートの再エクスポート
pub use anyhow::{anyhow, Context, Result};

// 主要な型を再エクスポート
pub use app::App;
pub use constants::GRID;
pub use domain::{Cell, Direction, GameConfig, RulesEngine, Side, TwelveBeads};
pub use presentation::{BoardState, InputDispatcher};
