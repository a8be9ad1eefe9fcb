use eframe::egui;
use snapdoc_async_runtime::AppCommand;
use snapdoc_collection::{EntryId, ImageCollection, MoveDirection};
use std::collections::HashMap;
use tokio::sync::mpsc;

const CARD_WIDTH: f32 = 240.0;
const PREVIEW_MAX: egui::Vec2 = egui::Vec2::new(220.0, 150.0);

/// Deferred card actions: collected while the list is being drawn, applied
/// afterwards so the draw loop never mutates the list it is iterating.
enum CardAction {
    Remove(EntryId),
    Move(usize, MoveDirection),
    RequestCaption(EntryId),
}

pub fn show_pages(
    ui: &mut egui::Ui,
    collection: &mut ImageCollection,
    textures: &mut HashMap<EntryId, egui::TextureHandle>,
    command_tx: &mpsc::UnboundedSender<AppCommand>,
    status: &mut String,
) {
    if collection.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("Drop images here, or use “Add images…” above.\nPages appear in export order.");
        });
        return;
    }

    let total = collection.len();
    let mut actions: Vec<CardAction> = Vec::new();

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            for (index, entry) in collection.iter_mut().enumerate() {
                ui.group(|ui| {
                    ui.set_width(CARD_WIDTH);
                    ui.vertical(|ui| {
                        ui.horizontal(|ui| {
                            ui.strong(format!("Page {}", index + 1));
                            ui.weak(format!("{}×{}", entry.width, entry.height));
                        });

                        if let Some(texture) = textures.get(&entry.id) {
                            let size =
                                fit_size(entry.preview.width, entry.preview.height, PREVIEW_MAX);
                            ui.image((texture.id(), size));
                        }

                        ui.add(
                            egui::TextEdit::multiline(&mut entry.caption)
                                .hint_text("Caption…")
                                .desired_rows(2)
                                .desired_width(CARD_WIDTH - 20.0),
                        );

                        ui.horizontal(|ui| {
                            if ui
                                .add_enabled(index > 0, egui::Button::new("⬅"))
                                .on_hover_text("Move earlier")
                                .clicked()
                            {
                                actions.push(CardAction::Move(index, MoveDirection::Earlier));
                            }
                            if ui
                                .add_enabled(index + 1 < total, egui::Button::new("➡"))
                                .on_hover_text("Move later")
                                .clicked()
                            {
                                actions.push(CardAction::Move(index, MoveDirection::Later));
                            }
                            if entry.caption_pending {
                                ui.spinner();
                            } else if ui
                                .button("✨ AI caption")
                                .on_hover_text("Generate a caption with Gemini")
                                .clicked()
                            {
                                actions.push(CardAction::RequestCaption(entry.id));
                            }
                            if ui.button("🗑").on_hover_text("Remove page").clicked() {
                                actions.push(CardAction::Remove(entry.id));
                            }
                        });
                    });
                });
            }
        });
    });

    for action in actions {
        match action {
            CardAction::Remove(id) => {
                collection.remove(id);
                // Dropping the handle is what frees the GPU-side preview.
                textures.remove(&id);
            }
            CardAction::Move(index, direction) => {
                collection.move_entry(index, direction);
            }
            CardAction::RequestCaption(id) => {
                if let Some((data, mime)) = collection
                    .get(id)
                    .map(|entry| (entry.data.clone(), entry.mime.clone()))
                {
                    collection.set_caption_pending(id, true);
                    let _ = command_tx.send(AppCommand::RequestCaption { id, data, mime });
                    *status = "Requesting caption…".to_string();
                }
            }
        }
    }
}

/// Scale `width`×`height` down to fit inside `max`, preserving aspect.
fn fit_size(width: u32, height: u32, max: egui::Vec2) -> egui::Vec2 {
    let (w, h) = (width.max(1) as f32, height.max(1) as f32);
    let scale = (max.x / w).min(max.y / h).min(1.0);
    egui::vec2(w * scale, h * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_size_never_exceeds_bounds_or_upscales() {
        let max = egui::vec2(220.0, 150.0);
        let big = fit_size(4000, 3000, max);
        assert!(big.x <= max.x && big.y <= max.y);
        assert!((big.x / big.y - 4.0 / 3.0).abs() < 1e-3);

        let small = fit_size(100, 50, max);
        assert_eq!(small, egui::vec2(100.0, 50.0));
    }
}
