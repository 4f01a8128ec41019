//! Half-page extraction via the `image` crate

use crate::types::{CropRect, DeimposeError, Result};
use std::path::Path;

/// Crop the region `rect` out of `source` and write it to `dest`.
///
/// Both paths name PNG files. Decoding and re-encoding are CPU-bound, so
/// the work runs on the blocking pool.
pub async fn crop_to_file(source: &Path, dest: &Path, rect: CropRect) -> Result<()> {
    let source = source.to_owned();
    let dest = dest.to_owned();

    tokio::task::spawn_blocking(move || {
        let image = image::open(&source).map_err(|e| crop_error(&dest, &e))?;
        let half = image.crop_imm(rect.left, rect.top, rect.width, rect.height);
        half.save(&dest).map_err(|e| crop_error(&dest, &e))?;
        Ok(())
    })
    .await?
}

fn crop_error(dest: &Path, e: &image::ImageError) -> DeimposeError {
    DeimposeError::Crop {
        path: dest.to_path_buf(),
        reason: e.to_string(),
    }
}
