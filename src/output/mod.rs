// Fri Oct 16 2026 - Alex

pub mod renderer;
pub mod error;

pub use renderer::LayoutRenderer;
pub use error::ReportError;
