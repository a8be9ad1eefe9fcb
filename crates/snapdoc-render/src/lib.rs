pub mod layout;
mod options;
mod pdf;
mod types;

pub use options::*;
pub use pdf::{render_pdf_bytes, render_to_file};
pub use types::*;
