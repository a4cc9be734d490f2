// アプリケーション層（eframe のウィンドウ）

pub mod event_adapter;
pub mod state;
pub mod ui;

pub use state::App;
