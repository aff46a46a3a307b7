//! Line and text styles used in the gear drawing.

use crate::float_types::Real;

/// The kinds of stroke and label used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// Dash-dot reference lines: pitch circle and tooth center lines.
    Dash,
    /// The gear outline and cross-hairs.
    Solid,
    /// Secondary reference circles.
    Thin,
    /// Background grid.
    Grid,
    /// Text labels.
    Annotation,
}

/// Concrete paint settings for a [`Style`], in drawing units.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleDescriptor {
    pub stroke_width: Option<i64>,
    pub stroke: Option<&'static str>,
    /// Dash pattern lengths, empty for a continuous stroke.
    pub dash: Vec<i64>,
    pub font_size: Option<i64>,
    /// `None` means no fill.
    pub fill: Option<&'static str>,
    pub fill_opacity: Option<Real>,
    pub text_anchor: Option<&'static str>,
}

impl Style {
    /// Resolve this style at `scale` drawing units per mm.
    pub fn descriptor(self, scale: i64) -> StyleDescriptor {
        let mm = |v: Real| (v * scale as Real) as i64;
        let stroke = |width: Real, colour: &'static str, dash: Vec<i64>| StyleDescriptor {
            stroke_width: Some(mm(width)),
            stroke: Some(colour),
            dash,
            font_size: None,
            fill: None,
            fill_opacity: None,
            text_anchor: None,
        };

        match self {
            Style::Dash => stroke(0.1, "black", vec![mm(3.0), mm(1.0), mm(1.0), mm(1.0)]),
            Style::Solid => stroke(0.25, "black", Vec::new()),
            Style::Thin => stroke(0.1, "black", Vec::new()),
            Style::Grid => stroke(0.1, "lightgrey", Vec::new()),
            Style::Annotation => StyleDescriptor {
                stroke_width: None,
                stroke: None,
                dash: Vec::new(),
                font_size: Some(mm(5.0)),
                fill: Some("#888888"),
                fill_opacity: Some(0.5),
                text_anchor: Some("middle"),
            },
        }
    }
}

impl StyleDescriptor {
    /// Render as an inline CSS `style` attribute value.
    pub fn to_css(&self) -> String {
        let mut parts = Vec::new();
        if let Some(anchor) = self.text_anchor {
            parts.push(format!("text-anchor:{anchor}"));
        }
        if let Some(size) = self.font_size {
            parts.push(format!("font-size:{size}"));
        }
        match self.fill {
            Some(fill) => parts.push(format!("fill:{fill}")),
            None => parts.push("fill:none".to_string()),
        }
        if let Some(opacity) = self.fill_opacity {
            parts.push(format!("fill-opacity:{opacity}"));
        }
        if let Some(width) = self.stroke_width {
            parts.push(format!("stroke-width:{width}"));
        }
        if let Some(stroke) = self.stroke {
            parts.push(format!("stroke:{stroke}"));
        }
        if !self.dash.is_empty() {
            let pattern: Vec<String> = self.dash.iter().map(i64::to_string).collect();
            parts.push(format!("stroke-dasharray:{}", pattern.join(",")));
        }
        parts.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_at_default_scale() {
        assert_eq!(
            Style::Solid.descriptor(1000).to_css(),
            "fill:none; stroke-width:250; stroke:black"
        );
    }

    #[test]
    fn dash_pattern_scales() {
        let d = Style::Dash.descriptor(100);
        assert_eq!(d.dash, vec![300, 100, 100, 100]);
        assert_eq!(d.stroke_width, Some(10));
        assert!(d.to_css().ends_with("stroke-dasharray:300,100,100,100"));
    }

    #[test]
    fn annotation_is_filled_text() {
        assert_eq!(
            Style::Annotation.descriptor(1000).to_css(),
            "text-anchor:middle; font-size:5000; fill:#888888; fill-opacity:0.5"
        );
    }
}
