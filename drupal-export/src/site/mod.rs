//! Jekyll source tree layout and file output.
pub mod layout;
mod writer;

pub use writer::SiteWriter;
