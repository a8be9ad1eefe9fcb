use std::collections::HashMap;
use std::sync::Arc;

use eframe::egui;
use snapdoc_async_runtime::{AppCommand, AppUpdate};
use snapdoc_caption::GeminiClient;
use snapdoc_collection::{EntryId, ImageCollection, IncomingFile, mime_for_path};
use snapdoc_render::{DEFAULT_OUTPUT_NAME, RenderOptions};
use tokio::sync::mpsc;

use crate::logger::AppLogger;
use crate::views;

pub struct SnapDocApp {
    collection: ImageCollection,
    options: RenderOptions,
    /// One GPU texture per entry, created from the entry's preview and
    /// dropped when the entry is removed.
    textures: HashMap<EntryId, egui::TextureHandle>,

    status: String,
    is_exporting: bool,

    // Async infrastructure
    command_tx: mpsc::UnboundedSender<AppCommand>,
    update_rx: mpsc::UnboundedReceiver<AppUpdate>,

    logger: AppLogger,

    _tokio_handle: tokio::runtime::Handle,
}

impl SnapDocApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        tokio_handle: tokio::runtime::Handle,
        logger: AppLogger,
    ) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        // Built once here and injected into the worker; nothing else holds a
        // captioning client.
        let caption_client = GeminiClient::from_env();
        if !caption_client.has_credential() {
            log::info!("GEMINI_API_KEY not set; AI captions will report a missing credential");
        }
        tokio_handle.spawn(crate::worker::worker_task(
            command_rx,
            update_tx,
            caption_client,
        ));

        Self {
            collection: ImageCollection::new(),
            options: RenderOptions::default(),
            textures: HashMap::new(),
            status: String::new(),
            is_exporting: false,
            command_tx,
            update_rx,
            logger,
            _tokio_handle: tokio_handle,
        }
    }

    fn collect_dropped_files(&mut self, ctx: &egui::Context) {
        let mut files: Vec<IncomingFile> = Vec::new();
        ctx.input(|i| {
            for file in &i.raw.dropped_files {
                let name = file
                    .path
                    .as_ref()
                    .and_then(|p| p.file_name())
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| file.name.clone());
                let mime = if !file.mime.is_empty() {
                    file.mime.clone()
                } else if let Some(path) = &file.path {
                    mime_for_path(path).to_string()
                } else {
                    String::new()
                };
                let data: Option<Arc<[u8]>> = if let Some(bytes) = &file.bytes {
                    Some(bytes.clone())
                } else if let Some(path) = &file.path {
                    match std::fs::read(path) {
                        Ok(bytes) => Some(Arc::from(bytes.into_boxed_slice())),
                        Err(e) => {
                            log::warn!("failed to read {}: {e}", path.display());
                            None
                        }
                    }
                } else {
                    None
                };
                if let Some(data) = data {
                    files.push(IncomingFile { name, mime, data });
                }
            }
        });
        self.send_ingest(files);
    }

    fn pick_files(&mut self) {
        let Some(paths) = rfd::FileDialog::new()
            .add_filter(
                "Images",
                &["png", "jpg", "jpeg", "gif", "webp", "bmp", "tif", "tiff"],
            )
            .pick_files()
        else {
            return;
        };

        let mut files = Vec::new();
        for path in paths {
            match std::fs::read(&path) {
                Ok(bytes) => files.push(IncomingFile {
                    name: path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default(),
                    mime: mime_for_path(&path).to_string(),
                    data: Arc::from(bytes.into_boxed_slice()),
                }),
                Err(e) => {
                    self.status = format!("Failed to read {}: {e}", path.display());
                }
            }
        }
        self.send_ingest(files);
    }

    fn send_ingest(&mut self, files: Vec<IncomingFile>) {
        if files.is_empty() {
            return;
        }
        self.status = format!(
            "Adding {} file{}…",
            files.len(),
            if files.len() == 1 { "" } else { "s" }
        );
        let _ = self.command_tx.send(AppCommand::IngestFiles { files });
    }

    fn apply_updates(&mut self, ctx: &egui::Context) {
        while let Ok(update) = self.update_rx.try_recv() {
            match update {
                AppUpdate::FilesIngested { entries, skipped } => {
                    for pending in entries {
                        let preview = &pending.preview;
                        let color_image = egui::ColorImage::from_rgba_unmultiplied(
                            [preview.width as usize, preview.height as usize],
                            &preview.rgba,
                        );
                        let id = self.collection.push(pending);
                        let texture = ctx.load_texture(
                            format!("preview_{}", id.0),
                            color_image,
                            egui::TextureOptions::default(),
                        );
                        self.textures.insert(id, texture);
                    }
                    for skip in &skipped {
                        log::warn!("skipped {}: {}", skip.name, skip.reason);
                    }
                    self.status = if skipped.is_empty() {
                        format!(
                            "{} page{} ready",
                            self.collection.len(),
                            if self.collection.len() == 1 { "" } else { "s" }
                        )
                    } else {
                        format!(
                            "{} pages ready, {} file{} skipped",
                            self.collection.len(),
                            skipped.len(),
                            if skipped.len() == 1 { "" } else { "s" }
                        )
                    };
                }
                AppUpdate::CaptionReady { id, caption } => {
                    // No-ops if the entry was removed while the request ran.
                    self.collection.update_caption(id, caption);
                    self.collection.set_caption_pending(id, false);
                }
                AppUpdate::CaptionFailed { id, message } => {
                    self.collection.set_caption_pending(id, false);
                    self.status = format!("Caption failed: {message}");
                }
                AppUpdate::PdfComplete { path, page_count } => {
                    self.is_exporting = false;
                    self.status = format!(
                        "Exported {page_count} page{} → {}",
                        if page_count == 1 { "" } else { "s" },
                        path.display()
                    );
                }
                AppUpdate::Error { message } => {
                    self.is_exporting = false;
                    self.status = format!("Error: {message}");
                }
            }
        }
    }

    fn start_export(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(DEFAULT_OUTPUT_NAME)
            .add_filter("PDF", &["pdf"])
            .save_file()
        else {
            return;
        };
        self.is_exporting = true;
        self.status = "Generating PDF…".to_string();
        let _ = self.command_tx.send(AppCommand::GeneratePdf {
            pages: self.collection.document_pages(),
            options: self.options,
            output_path: path,
        });
    }
}

impl eframe::App for SnapDocApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.collect_dropped_files(ctx);
        self.apply_updates(ctx);

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("SnapDoc");
                ui.separator();
                if ui.button("Add images…").clicked() {
                    self.pick_files();
                }
                ui.separator();
                if views::show_export_bar(
                    ui,
                    &mut self.options,
                    self.collection.len(),
                    self.is_exporting,
                ) {
                    self.start_export();
                }
            });
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.is_exporting {
                    ui.spinner();
                }
                if !self.status.is_empty() {
                    ui.label(&self.status);
                }
                if let Some(message) = self.logger.latest_message() {
                    ui.separator();
                    ui.weak(message);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            views::show_pages(
                ui,
                &mut self.collection,
                &mut self.textures,
                &self.command_tx,
                &mut self.status,
            );
        });

        // Spinners need frames while async work is outstanding.
        let busy = self.is_exporting
            || self
                .collection
                .entries()
                .iter()
                .any(|entry| entry.caption_pending);
        if busy {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
