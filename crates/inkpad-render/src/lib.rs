//! InkPad Render Library
//!
//! Renderer abstraction for InkPad drawing sessions. The bundled
//! implementation writes an SVG document with one path element per stroke.

mod renderer;
mod svg;

pub use renderer::{RenderContext, RenderResult, Renderer, RendererError};
pub use svg::SvgRenderer;
