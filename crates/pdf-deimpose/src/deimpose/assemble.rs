//! Output PDF construction via printpdf

use crate::options::DeimposeOptions;
use crate::types::{DeimposeError, Result};
use printpdf::*;
use std::path::Path;

/// Compose the half-page images in reading order into the output PDF.
///
/// Positions `1..=half_count` are read from `workdir`, placed one per page
/// on the fixed output canvas, and deleted as they are consumed. The whole
/// document is built in memory first; the output file only appears on full
/// success, so a failed assembly never leaves a partial PDF under the final
/// name.
pub async fn assemble_document(
    workdir: &Path,
    half_count: usize,
    options: &DeimposeOptions,
    output_path: &Path,
) -> Result<()> {
    let workdir = workdir.to_owned();
    let title = output_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document")
        .to_owned();
    let (page_width, page_height) = (options.page_width_pt, options.page_height_pt);

    let bytes = tokio::task::spawn_blocking(move || {
        build_pdf_bytes(&workdir, half_count, &title, page_width, page_height)
    })
    .await??;

    tokio::fs::write(output_path, bytes).await?;
    Ok(())
}

fn build_pdf_bytes(
    workdir: &Path,
    half_count: usize,
    title: &str,
    page_width: f32,
    page_height: f32,
) -> Result<Vec<u8>> {
    let mut doc = PdfDocument::new(title);
    let mut warnings = Vec::new();

    for position in 1..=half_count {
        let path = workdir.join(format!("{position}.png"));
        if !path.exists() {
            return Err(DeimposeError::MissingHalf(position));
        }

        let data = std::fs::read(&path)?;
        let image = RawImage::decode_from_bytes(&data, &mut warnings)
            .map_err(|reason| DeimposeError::Assembly(format!("position {position}: {reason}")))?;
        let image_id = doc.add_image(&image);

        doc.pages.push(page_for_image(
            image_id,
            image.width as f32,
            image.height as f32,
            page_width,
            page_height,
        ));

        std::fs::remove_file(&path)?;
    }

    Ok(doc.save(&PdfSaveOptions::default(), &mut warnings))
}

/// One output page: the image scaled to fit the canvas, centered both ways.
fn page_for_image(
    image_id: XObjectId,
    image_width: f32,
    image_height: f32,
    page_width: f32,
    page_height: f32,
) -> PdfPage {
    // At 72 dpi the transform maps one pixel to one point, so the scale
    // factor works directly in pixel coordinates.
    let scale = (page_width / image_width).min(page_height / image_height);
    let x = (page_width - image_width * scale) / 2.0;
    let y = (page_height - image_height * scale) / 2.0;

    let ops = vec![Op::UseXobject {
        id: image_id,
        transform: XObjectTransform {
            translate_x: Some(Pt(x)),
            translate_y: Some(Pt(y)),
            scale_x: Some(scale),
            scale_y: Some(scale),
            dpi: Some(72.0),
            ..Default::default()
        },
    }];

    PdfPage {
        media_box: Rect {
            x: Pt(0.0),
            y: Pt(0.0),
            width: Pt(page_width),
            height: Pt(page_height),
        },
        trim_box: Rect {
            x: Pt(0.0),
            y: Pt(0.0),
            width: Pt(page_width),
            height: Pt(page_height),
        },
        crop_box: Rect {
            x: Pt(0.0),
            y: Pt(0.0),
            width: Pt(page_width),
            height: Pt(page_height),
        },
        ops,
    }
}
