// egui の入力を盤面層の型に、盤面層の結果をUI表示に変換するアダプタ

use egui::{CursorIcon, Event, Rect};

use crate::domain::{Side, TurnStatus};
use crate::presentation::{ClickOutcome, CursorAffordance, PointerButton, PointerEvent};

/// 領域内で起きたポインタイベントだけを取り出す
pub fn pointer_events(events: &[Event], area: Rect) -> Vec<PointerEvent> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::PointerMoved(pos) if area.contains(*pos) => Some(PointerEvent::Moved(*pos)),
            Event::PointerButton {
                pos,
                button,
                pressed: true,
                ..
            } if area.contains(*pos) => convert_button(*button).map(|button| {
                PointerEvent::Pressed { pos: *pos, button }
            }),
            _ => None,
        })
        .collect()
}

fn convert_button(button: egui::PointerButton) -> Option<PointerButton> {
    match button {
        egui::PointerButton::Primary => Some(PointerButton::Primary),
        egui::PointerButton::Secondary => Some(PointerButton::Secondary),
        egui::PointerButton::Middle => Some(PointerButton::Middle),
        _ => None,
    }
}

pub fn cursor_icon(affordance: CursorAffordance) -> CursorIcon {
    match affordance {
        CursorAffordance::Default => CursorIcon::Default,
        CursorAffordance::Interactive => CursorIcon::PointingHand,
    }
}

/// クリック結果をログ行に変換（ログ不要ならNone）
///
/// `mover` は着手前の手番、`winner` は着手後の勝者。
pub fn outcome_message(
    outcome: ClickOutcome,
    mover: Option<Side>,
    winner: Option<Side>,
) -> Option<String> {
    match outcome {
        ClickOutcome::Ignored | ClickOutcome::Selected(_) | ClickOutcome::Deselected => None,
        ClickOutcome::Rejected => Some("不正な手です".to_string()),
        ClickOutcome::Moved(result) => {
            let side = mover.map(Side::label).unwrap_or("?");
            let mut line = match result.step {
                Some(step) => format!("{}: {} → {}", side, step.from, step.to),
                None => format!("{}: 着手", side),
            };
            if let Some(captured) = result.captured {
                line.push_str(&format!(" ×{}", captured));
            }
            match result.status {
                TurnStatus::Continue => line.push_str("（続けて駒取り）"),
                TurnStatus::GameOver => {
                    let w = winner.map(Side::label).unwrap_or("?");
                    line.push_str(&format!("　終局: {}の勝ち", w));
                }
                TurnStatus::Normal | TurnStatus::Rejected => {}
            }
            Some(line)
        }
    }
}
