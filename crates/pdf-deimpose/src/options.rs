use crate::types::{DeimposeError, Result};

/// Configuration for a de-imposition run
#[derive(Debug, Clone, PartialEq)]
pub struct DeimposeOptions {
    /// Zoom factor handed to the page renderer
    pub render_scale: f32,
    /// Output page canvas width in points
    pub page_width_pt: f32,
    /// Output page canvas height in points
    pub page_height_pt: f32,
    /// Suffix appended to the input file stem to form the output file name
    pub output_suffix: String,
}

impl Default for DeimposeOptions {
    fn default() -> Self {
        Self {
            render_scale: 1.5,
            page_width_pt: 600.0,
            page_height_pt: 820.0,
            output_suffix: "-processed".to_string(),
        }
    }
}

impl DeimposeOptions {
    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.render_scale <= 0.0 {
            return Err(DeimposeError::Config(
                "render scale must be positive".to_string(),
            ));
        }

        if self.page_width_pt <= 0.0 || self.page_height_pt <= 0.0 {
            return Err(DeimposeError::Config(
                "output page dimensions must be positive".to_string(),
            ));
        }

        // An empty suffix would make the output overwrite its input.
        if self.output_suffix.is_empty() {
            return Err(DeimposeError::Config(
                "output suffix must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
