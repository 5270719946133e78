//! SVG output.

use crate::renderer::{RenderContext, RenderResult, Renderer, RendererError};
use inkpad_core::{PaletteColor, PathDescription, css_color};
use std::fmt::Write;

/// Renders a session as a standalone SVG document.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    output: String,
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last rendered document.
    pub fn as_str(&self) -> &str {
        &self.output
    }

    /// Take the last rendered document, leaving the renderer empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    fn write_path(
        out: &mut String,
        path: &PathDescription,
        color: PaletteColor,
        width: f64,
        id: Option<&str>,
    ) -> RenderResult<()> {
        if path.is_empty() {
            return Ok(());
        }
        write!(
            out,
            r#"  <path d="{}" stroke="{}" stroke-width="{}" fill="none" stroke-linecap="round" stroke-linejoin="round""#,
            path.as_str().trim_end(),
            color.hex(),
            width
        )?;
        if let Some(id) = id {
            write!(out, r#" data-stroke-id="{id}""#)?;
        }
        out.push_str("/>\n");
        Ok(())
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, ctx: &RenderContext) -> RenderResult<()> {
        if !ctx.stroke_width.is_finite() || ctx.stroke_width <= 0.0 {
            return Err(RendererError::RenderFailed(format!(
                "invalid stroke width {}",
                ctx.stroke_width
            )));
        }

        let size = ctx.viewport_size;
        let mut out = String::new();
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = size.width,
            h = size.height
        )?;

        if let Some(background) = ctx.background_color {
            writeln!(
                out,
                r#"  <rect width="100%" height="100%" fill="{}"/>"#,
                css_color(background)
            )?;
        }

        for stroke in ctx.session.strokes() {
            let id = stroke.id().to_string();
            Self::write_path(
                &mut out,
                stroke.path(),
                stroke.color(),
                ctx.stroke_width,
                Some(&id),
            )?;
        }

        if ctx.include_active {
            if let Some(path) = ctx.session.active_path() {
                Self::write_path(&mut out, path, ctx.session.color(), ctx.stroke_width, None)?;
            }
        }

        out.push_str("</svg>\n");
        log::debug!(
            "Rendered {} strokes to {} bytes of SVG",
            ctx.session.strokes().len(),
            out.len()
        );
        self.output = out;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkpad_core::{CoordinateMode, DrawingSession, Surface};
    use peniko::Color;
    use kurbo::{Point, Rect};

    fn session_with_stroke() -> DrawingSession {
        let mut session = DrawingSession::new(Surface::with_bounds(
            CoordinateMode::BoundingBox,
            Rect::new(0.0, 0.0, 100.0, 80.0),
        ));
        session.pointer_down(Point::new(10.0, 10.0));
        session.pointer_move(Point::new(15.0, 12.0));
        session.pointer_move(Point::new(20.0, 9.0));
        session.pointer_up();
        session
    }

    #[test]
    fn test_renders_committed_stroke() {
        let session = session_with_stroke();
        let mut renderer = SvgRenderer::new();
        renderer
            .render(&RenderContext::new(&session).with_stroke_width(3.0))
            .unwrap();

        let svg = renderer.as_str();
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains(r#"width="100" height="80""#));
        assert!(svg.contains(r#"d="M 10 10C "#));
        assert!(svg.contains(r##"stroke="#000000""##));
        assert!(svg.contains(r#"stroke-width="3""#));
        let id = session.strokes()[0].id().to_string();
        assert!(svg.contains(&id));
        assert_eq!(svg.matches("<path ").count(), 1);
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_active_path_rendered_with_current_color() {
        let mut session = session_with_stroke();
        session.set_color(PaletteColor::Blue);
        session.pointer_down(Point::new(50.0, 50.0));

        let mut renderer = SvgRenderer::new();
        renderer.render(&RenderContext::new(&session)).unwrap();
        assert_eq!(renderer.as_str().matches("<path ").count(), 2);
        assert!(renderer.as_str().contains(r#"d="M 50 50""#));
        assert!(renderer.as_str().contains("#3b82f6"));

        renderer
            .render(&RenderContext::new(&session).with_active(false))
            .unwrap();
        assert_eq!(renderer.as_str().matches("<path ").count(), 1);
    }

    #[test]
    fn test_background() {
        let session = DrawingSession::default();
        let mut renderer = SvgRenderer::new();
        renderer
            .render(
                &RenderContext::new(&session)
                    .with_viewport_size(kurbo::Size::new(10.0, 10.0))
                    .with_background(Some(Color::from_rgba8(255, 255, 255, 255))),
            )
            .unwrap();
        assert!(renderer.as_str().contains(r##"fill="#ffffff""##));
        assert_eq!(renderer.as_str().matches("<path ").count(), 0);
    }

    #[test]
    fn test_rejects_bad_stroke_width() {
        let session = DrawingSession::default();
        let mut renderer = SvgRenderer::new();
        let result = renderer.render(&RenderContext::new(&session).with_stroke_width(0.0));
        assert!(matches!(result, Err(RendererError::RenderFailed(_))));
    }

    #[test]
    fn test_take_empties_output() {
        let session = DrawingSession::default();
        let mut renderer = SvgRenderer::new();
        renderer.render(&RenderContext::new(&session)).unwrap();
        let svg = renderer.take();
        assert!(!svg.is_empty());
        assert!(renderer.as_str().is_empty());
    }
}
