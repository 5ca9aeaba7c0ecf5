//! Layout primitives for absolutely positioned pages
//!
//! Everything here works in millimetres with the origin at the top-left corner
//! of the page. Renderers measure and wrap text with [`metrics`] and [`wrap`],
//! and place repeating cards with [`Grid`] so column arithmetic lives in one
//! place.

pub mod config;
pub mod grid;
pub mod metrics;
pub mod types;
pub mod wrap;

pub use config::PageConfig;
pub use grid::{Grid, GridLayout};
pub use metrics::{text_width, PT_TO_MM};
pub use types::{BoundingBox, Color, FontFace, TextAlign, TextStyle};
pub use wrap::wrap_text;
