use eframe::egui;
use snapdoc_render::{Orientation, PaperSize, RenderOptions};

/// Export controls: the three render toggles plus the export button.
/// Returns true when the export button was clicked.
pub fn show_export_bar(
    ui: &mut egui::Ui,
    options: &mut RenderOptions,
    page_count: usize,
    is_exporting: bool,
) -> bool {
    let mut export_clicked = false;

    ui.checkbox(&mut options.include_captions, "Include captions");
    ui.separator();

    ui.label("Paper:");
    egui::ComboBox::from_id_salt("paper_size")
        .selected_text(options.paper_size.name())
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut options.paper_size, PaperSize::A4, "A4");
            ui.selectable_value(&mut options.paper_size, PaperSize::Letter, "Letter");
        });

    ui.label("Orientation:");
    egui::ComboBox::from_id_salt("orientation")
        .selected_text(options.orientation.name())
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut options.orientation, Orientation::Portrait, "Portrait");
            ui.selectable_value(&mut options.orientation, Orientation::Landscape, "Landscape");
        });

    ui.separator();
    ui.label(format!(
        "{page_count} page{} ready",
        if page_count == 1 { "" } else { "s" }
    ));

    let label = if is_exporting {
        "Exporting…"
    } else {
        "Export PDF"
    };
    if ui
        .add_enabled(page_count > 0 && !is_exporting, egui::Button::new(label))
        .clicked()
    {
        export_clicked = true;
    }

    export_clicked
}
