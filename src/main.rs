use anyhow::{anyhow, Result};
use eframe::egui;

use twelve_beads::app::ui::helpers::install_japanese_fonts;
use twelve_beads::{logging, App, GameConfig};

const CONFIG_PATH: &str = "twelve_beads.json";

fn main() -> Result<()> {
    let config = GameConfig::load_or_default(CONFIG_PATH)?;

    match logging::init_log_file(&config.log_path) {
        Ok(()) => println!("デバッグログを {} に出力します", config.log_path),
        Err(e) => eprintln!("ログファイルの初期化に失敗: {e:#}"),
    }
    logging::set_verbose_logging(config.verbose_logging);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(egui::vec2(980.0, 760.0)),
        ..Default::default()
    };

    eframe::run_native(
        "十二珠",
        options,
        Box::new(move |cc| {
            install_japanese_fonts(&cc.egui_ctx);
            Box::new(App::new(config))
        }),
    )
    .map_err(|e| anyhow!("GUI起動に失敗: {e}"))
}
