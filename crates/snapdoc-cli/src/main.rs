use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;

use snapdoc_caption::{CaptionProvider, GeminiClient};
use snapdoc_collection::{ImageCollection, IncomingFile, ingest_files, mime_for_path};
use snapdoc_render::{Orientation, PaperSize, RenderOptions, render_to_file};

#[derive(Parser)]
#[command(name = "snapdoc", about = "Convert images to a captioned PDF", version)]
struct Cli {
    /// Input image files, in page order
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output PDF file
    #[arg(short, long, default_value = "snapdoc-converted.pdf")]
    output: PathBuf,

    /// Paper size
    #[arg(long, default_value = "a4", value_enum)]
    paper: PaperArg,

    /// Page orientation
    #[arg(long, default_value = "portrait", value_enum)]
    orientation: OrientationArg,

    /// Leave captions out of the PDF
    #[arg(long)]
    no_captions: bool,

    /// Caption text, repeatable; matched to input files by position
    #[arg(long = "caption")]
    captions: Vec<String>,

    /// Generate missing captions with Gemini (requires GEMINI_API_KEY)
    #[arg(long)]
    ai_captions: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A4,
    Letter,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<PaperArg> for PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A4 => Self::A4,
            PaperArg::Letter => Self::Letter,
        }
    }
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut files = Vec::new();
    for path in &cli.input {
        let bytes = tokio::fs::read(path).await?;
        files.push(IncomingFile {
            name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            mime: mime_for_path(path).to_string(),
            data: Arc::from(bytes.into_boxed_slice()),
        });
    }

    let outcome = ingest_files(files).await;
    for skip in &outcome.skipped {
        eprintln!("skipped {}: {}", skip.name, skip.reason);
    }
    if outcome.entries.is_empty() {
        bail!("no usable images among the {} input file(s)", cli.input.len());
    }

    let mut collection = ImageCollection::new();
    let ids: Vec<_> = outcome
        .entries
        .into_iter()
        .map(|pending| collection.push(pending))
        .collect();

    for (id, caption) in ids.iter().zip(&cli.captions) {
        collection.update_caption(*id, caption.clone());
    }

    if cli.ai_captions {
        let client = GeminiClient::from_env();
        let targets: Vec<_> = collection
            .entries()
            .iter()
            .filter(|entry| entry.caption.is_empty())
            .map(|entry| (entry.id, entry.name.clone(), entry.data.clone(), entry.mime.clone()))
            .collect();
        for (id, name, data, mime) in targets {
            // Per-item failures are reported but never abort the batch.
            match client.caption(&data, &mime).await {
                Ok(caption) => {
                    println!("{name}: {caption}");
                    collection.update_caption(id, caption);
                }
                Err(e) => eprintln!("caption failed for {name}: {e}"),
            }
        }
    }

    let options = RenderOptions {
        include_captions: !cli.no_captions,
        paper_size: cli.paper.into(),
        orientation: cli.orientation.into(),
    };

    let pages = collection.document_pages();
    render_to_file(&pages, &options, &cli.output).await?;
    println!("Wrote {} page(s) → {}", pages.len(), cli.output.display());

    Ok(())
}
