//! Booklet de-imposition pipeline
//!
//! This module drives one document at a time through the pipeline:
//! 1. Rasterize each physical page to a working PNG
//! 2. Crop the page into left/right halves named by reading position
//! 3. Reassemble the halves, in position order, into the output PDF
//!
//! Processing is strictly sequential: one document, one page, one half at a
//! time. The deterministic working-file names (`page<N>.png`, `<pos>.png`)
//! rely on that ordering, so nothing here may overlap in flight. Working
//! files live in a per-run temporary directory with one subdirectory per
//! document; the directory guard sweeps whatever a failed document leaves
//! behind.

mod assemble;
mod render;
mod split;

pub use assemble::assemble_document;
pub use render::{page_count, render_page};
pub use split::crop_to_file;

use crate::layout::{SheetHalf, reading_position};
use crate::options::DeimposeOptions;
use crate::types::*;
use std::path::{Path, PathBuf};

/// Process every booklet PDF in `folder`, writing one reordered PDF next to
/// each input.
///
/// Documents are processed in file-name order. A document that fails is
/// logged, recorded in the summary, and skipped; the batch carries on with
/// the next one. Outputs already written are never touched by a later
/// failure.
pub async fn process_folder(
    folder: impl AsRef<Path>,
    options: &DeimposeOptions,
) -> Result<BatchSummary> {
    options.validate()?;

    let folder = folder.as_ref();
    match tokio::fs::metadata(folder).await {
        Ok(meta) if meta.is_dir() => {}
        _ => return Err(DeimposeError::FolderNotFound(folder.to_path_buf())),
    }

    let documents = list_documents(folder, options).await?;
    let mut summary = BatchSummary {
        documents_found: documents.len(),
        ..Default::default()
    };

    if documents.is_empty() {
        log::info!("no PDF documents found in {}", folder.display());
        return Ok(summary);
    }

    let scratch = tempfile::tempdir()?;

    for (num_document, input) in documents.iter().enumerate() {
        let workdir = scratch.path().join(format!("doc{num_document}"));
        tokio::fs::create_dir_all(&workdir).await?;

        let mut context = DocumentContext {
            num_document,
            input: input.clone(),
            workdir,
            num_pages: 0,
        };

        match divide_and_reassemble(&mut context, options).await {
            Ok(output) => {
                log::info!("generated {}", output.display());
                summary.generated.push(output);
            }
            Err(err) => {
                log::error!("{}: {err}", input.display());
                summary.failed.push(FailedDocument {
                    input: input.clone(),
                    reason: err.to_string(),
                });
            }
        }
    }

    Ok(summary)
}

/// Process a single booklet PDF, returning the path of the reordered output.
pub async fn process_document(
    input: impl AsRef<Path>,
    options: &DeimposeOptions,
) -> Result<PathBuf> {
    options.validate()?;

    let scratch = tempfile::tempdir()?;
    let mut context = DocumentContext {
        num_document: 0,
        input: input.as_ref().to_path_buf(),
        workdir: scratch.path().to_path_buf(),
        num_pages: 0,
    };

    divide_and_reassemble(&mut context, options).await
}

/// Everything one document carries through the pipeline
struct DocumentContext {
    /// Index in the processing queue
    num_document: usize,
    input: PathBuf,
    /// Directory holding this document's working PNGs
    workdir: PathBuf,
    /// Discovered when the document is first opened
    num_pages: usize,
}

/// The per-document pipeline: render and split every page, then reassemble.
async fn divide_and_reassemble(
    context: &mut DocumentContext,
    options: &DeimposeOptions,
) -> Result<PathBuf> {
    context.num_pages = page_count(&context.input).await?;
    if context.num_pages == 0 {
        return Err(DeimposeError::NoPages);
    }
    log::info!(
        "document #{}: {} ({} pages)",
        context.num_document,
        context.input.display(),
        context.num_pages
    );

    for page_num in 1..=context.num_pages {
        split_page(context, page_num, options).await?;
    }
    log::info!(
        "document #{} divided into {} half-page images",
        context.num_document,
        context.num_pages * 2
    );

    let output = output_path(&context.input, options);
    assemble_document(&context.workdir, context.num_pages * 2, options, &output).await?;

    Ok(output)
}

/// Render one page, crop both halves to their reading positions, and drop
/// the full-page working image.
///
/// A render or crop failure aborts the whole document: continuing past a
/// missing half would leave a hole in the position sequence the assembler
/// walks unconditionally.
async fn split_page(
    context: &DocumentContext,
    page_num: usize,
    options: &DeimposeOptions,
) -> Result<()> {
    let page_png = context.workdir.join(format!("page{page_num}.png"));
    let (width, height) = render_page(
        &context.input,
        page_num,
        options.render_scale,
        &page_png,
    )
    .await?;

    // Odd widths round the extra column into the right half.
    let middle = width / 2;
    let left_rect = CropRect {
        width: middle,
        height,
        top: 0,
        left: 0,
    };
    let right_rect = CropRect {
        width: width - middle,
        height,
        top: 0,
        left: middle,
    };

    let left_pos = reading_position(page_num, context.num_pages, SheetHalf::Left);
    let right_pos = reading_position(page_num, context.num_pages, SheetHalf::Right);

    let left_png = context.workdir.join(format!("{left_pos}.png"));
    let right_png = context.workdir.join(format!("{right_pos}.png"));
    crop_to_file(&page_png, &left_png, left_rect).await?;
    crop_to_file(&page_png, &right_png, right_rect).await?;

    tokio::fs::remove_file(&page_png).await?;
    log::debug!("page {page_num} split into positions {left_pos} and {right_pos}");

    Ok(())
}

/// `name.pdf` → `name<suffix>.pdf`, next to the input.
fn output_path(input: &Path, options: &DeimposeOptions) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");
    input.with_file_name(format!("{stem}{}.pdf", options.output_suffix))
}

/// PDF files in `folder`, sorted by name for deterministic numbering.
///
/// Outputs from an earlier run (stem already carrying the output suffix)
/// are skipped so reprocessing a folder does not chew on its own results.
async fn list_documents(folder: &Path, options: &DeimposeOptions) -> Result<Vec<PathBuf>> {
    let mut entries = tokio::fs::read_dir(folder).await?;
    let mut documents = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if !entry.file_type().await?.is_file() {
            continue;
        }

        let is_pdf = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if !is_pdf {
            continue;
        }

        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
        if stem.ends_with(options.output_suffix.as_str()) {
            continue;
        }

        documents.push(path);
    }

    documents.sort();
    Ok(documents)
}
