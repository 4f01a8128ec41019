//! Page rasterization via PDFium

use crate::types::{DeimposeError, Result};
use pdfium_render::prelude::*;
use std::path::Path;

/// Initialize Pdfium, trying the vendored library first, then falling back to system
fn init_pdfium() -> std::result::Result<Pdfium, PdfiumError> {
    let vendor_path = std::env::current_dir().ok().and_then(|mut p| {
        p.push("vendor/pdfium/lib");
        if p.exists() { Some(p) } else { None }
    });

    if let Some(vendor_path) = vendor_path {
        if let Ok(binding) =
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(&vendor_path))
        {
            return Ok(Pdfium::new(binding));
        }
    }

    Pdfium::bind_to_system_library().map(Pdfium::new)
}

/// Number of pages in the document at `path`.
pub async fn page_count(path: &Path) -> Result<usize> {
    let owned = path.to_owned();

    let count = tokio::task::spawn_blocking(move || {
        let pdfium = init_pdfium()?;
        let document = pdfium.load_pdf_from_file(&owned, None)?;
        Ok::<_, PdfiumError>(document.pages().len() as usize)
    })
    .await?
    .map_err(|e| DeimposeError::Load {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    Ok(count)
}

/// Rasterize one page (1-based) to a PNG file at the given zoom factor,
/// returning the pixel dimensions of the written image.
///
/// PDFium is not thread-safe, so the document is reopened inside a blocking
/// task for every call rather than held across await points.
pub async fn render_page(
    path: &Path,
    page_num: usize,
    scale: f32,
    out: &Path,
) -> Result<(u32, u32)> {
    let path = path.to_owned();
    let out = out.to_owned();

    tokio::task::spawn_blocking(move || {
        let pdfium = init_pdfium().map_err(|e| render_error(page_num, &e))?;
        let document = pdfium
            .load_pdf_from_file(&path, None)
            .map_err(|e| render_error(page_num, &e))?;
        let page = document
            .pages()
            .get((page_num - 1) as u16)
            .map_err(|e| render_error(page_num, &e))?;

        let config = PdfRenderConfig::new().scale_page_by_factor(scale);
        let bitmap = page
            .render_with_config(&config)
            .map_err(|e| render_error(page_num, &e))?;

        let image = bitmap.as_image();
        let (width, height) = (image.width(), image.height());
        image
            .into_rgb8()
            .save(&out)
            .map_err(|e| DeimposeError::Render {
                page: page_num,
                reason: e.to_string(),
            })?;

        Ok((width, height))
    })
    .await?
}

fn render_error(page: usize, e: &PdfiumError) -> DeimposeError {
    DeimposeError::Render {
        page,
        reason: e.to_string(),
    }
}
