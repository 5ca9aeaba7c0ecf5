//! PDF renderer for assembled documents
//!
//! This module takes a [`Document`](crate::Document) and replays each page's
//! draw operations as PDF content streams.

pub mod config;
pub mod pdf;

pub use config::PdfConfig;
pub use pdf::render_pdf;
