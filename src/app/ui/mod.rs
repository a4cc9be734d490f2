// UIモジュールのエントリポイント

pub mod helpers;

use std::time::Duration;

use super::event_adapter::{cursor_icon, outcome_message, pointer_events};
use crate::app::App;
use crate::domain::RulesEngine;
use crate::presentation::InputDispatcher;

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.heading("十二珠（5×5）");
            ui.horizontal(|ui| {
                ui.label(self.status_text());
                ui.add_space(12.0);
                if ui.button("新しいゲーム").clicked() {
                    self.restart();
                }
                ui.add_space(12.0);
                let prev = self.verbose_logging;
                ui.checkbox(&mut self.verbose_logging, "詳細ログ出力");
                if prev != self.verbose_logging {
                    crate::logging::set_verbose_logging(self.verbose_logging);
                }
            });
        });

        egui::SidePanel::left("left")
            .min_width(220.0)
            .show(ctx, |ui| {
                ui.label("棋譜");
                ui.separator();
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for line in &self.log_lines {
                            ui.monospace(line);
                        }
                    });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let area = ui.max_rect();
            self.board.fit_to(area, self.config.board_fill.get());

            let events = ctx.input(|i| i.events.clone());
            for event in pointer_events(&events, area) {
                let mover = self.board.rules().turn();
                if let Some(outcome) = InputDispatcher::dispatch(&mut self.board, event) {
                    let winner = self.board.rules().winner();
                    if let Some(line) = outcome_message(outcome, mover, winner) {
                        self.push_log(line);
                    }
                }
            }

            // 着手後も同じ位置でカーソルを評価し直す
            let hover = ctx.input(|i| i.pointer.hover_pos()).filter(|p| area.contains(*p));
            if let Some(pos) = hover {
                InputDispatcher::handle_hover(&mut self.board, pos);
                ctx.set_cursor_icon(cursor_icon(self.board.cursor()));
            }

            self.board.step_animation();

            let painter = ui.painter_at(area);
            let sprites = self.board.draw_list();
            self.sprites
                .paint(&painter, self.board.geometry(), &sprites);
        });

        ctx.request_repaint_after(Duration::from_millis(16));
    }
}
