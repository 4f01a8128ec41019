pub mod deimpose;
pub mod layout;
mod options;
mod types;

pub use deimpose::{assemble_document, crop_to_file, process_document, process_folder};
pub use layout::*;
pub use options::*;
pub use types::*;
