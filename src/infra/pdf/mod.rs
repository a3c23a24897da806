//! PDF rendering of the sentiment report.

pub mod layout;
mod renderer;

pub use renderer::PdfRenderer;
