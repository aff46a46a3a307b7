//! Two-gear layout and tooth drawing.
//!
//! [`GearRenderer`] turns a [`GearPair`] into a complete scaled drawing: background grid,
//! both gears with their reference geometry and teeth, labels and a footer. The pass is a
//! pure function of the pair and the [`RenderConfig`]; rendering the same input twice gives
//! identical operation sequences.

use crate::drawing::{Canvas, Coord, DrawOp, Drawing, DrawingSink, Transform, to_coord};
use crate::errors::ValidationError;
use crate::float_types::{RAD_TO_DEG, Real};
use crate::gear::{GearPair, GearProfile};
use crate::involute::ToothProfile;
use crate::style::Style;
use nalgebra::Point2;
use tracing::{debug, instrument, trace, warn};

/// Output resolution and page furniture.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Drawing units per millimetre. 1000 keeps three decimals of a millimetre in integer
    /// coordinates.
    pub scale: i64,
    /// Empty margin around the gears, mm.
    pub border_mm: Real,
    /// Background grid pitch, mm.
    pub grid_spacing_mm: Real,
    /// Radius steps per involute flank.
    pub flank_steps: usize,
    /// Also draw root, base and outside circles.
    pub reference_circles: bool,
    /// Attribution line at the bottom of the page.
    pub footer: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scale: 1000,
            border_mm: 5.0,
            grid_spacing_mm: 5.0,
            flank_steps: 100,
            reference_circles: false,
            footer: Some("Generated by geargen".to_string()),
        }
    }
}

impl RenderConfig {
    pub fn with_scale(mut self, scale: i64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_border(mut self, border_mm: Real) -> Self {
        self.border_mm = border_mm;
        self
    }

    pub fn with_flank_steps(mut self, steps: usize) -> Self {
        self.flank_steps = steps;
        self
    }

    pub fn with_reference_circles(mut self, enabled: bool) -> Self {
        self.reference_circles = enabled;
        self
    }

    pub fn with_footer(mut self, footer: Option<String>) -> Self {
        self.footer = footer;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.scale < 1 {
            return Err(ValidationError::NonPositiveScale(self.scale));
        }
        if self.flank_steps < 1 {
            return Err(ValidationError::TooFewFlankSteps(self.flank_steps));
        }
        Ok(())
    }

    #[inline]
    fn mm(&self, v: Real) -> i64 {
        (v * self.scale as Real) as i64
    }
}

/// Where the two gears sit on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub canvas: Canvas,
    pub drive_center: Coord,
    pub driven_center: Coord,
}

impl Layout {
    /// Horizontal center-to-center distance in drawing units.
    pub fn center_distance(&self) -> i64 {
        self.driven_center.x - self.drive_center.x
    }
}

/// Lays out and draws a meshing gear pair.
#[derive(Debug, Clone, Default)]
pub struct GearRenderer {
    config: RenderConfig,
}

impl GearRenderer {
    pub fn new(config: RenderConfig) -> Result<Self, ValidationError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub const fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Page size and gear centers for `pair`.
    ///
    /// The page is sized in whole millimetres, rounded up, so both outside circles keep at
    /// least `border_mm` of margin. The drive gear sits `border + od/2` from the left edge,
    /// both centers on the horizontal mid-line.
    pub fn layout(&self, pair: &GearPair) -> Layout {
        let (g1, g2) = (&pair.drive, &pair.driven);
        let border = self.config.border_mm;

        let height = g1.outside_diameter().max(g2.outside_diameter()) + 2.0 * border;
        let width =
            g1.pitch_diameter() + g2.pitch_diameter() + g1.addendum() + g2.addendum() + 2.0 * border;
        let canvas = Canvas {
            width_mm: width.ceil() as i64,
            height_mm: height.ceil() as i64,
            scale: self.config.scale,
        };

        let cy = canvas.height() / 2;
        let cx = self.config.mm(border + g1.outside_diameter() / 2.0);
        let drive_center = Coord::new(cx, cy);
        let driven_center = Coord::new(cx + self.config.mm(pair.center_distance()), cy);

        Layout {
            canvas,
            drive_center,
            driven_center,
        }
    }

    /// Render `pair` into a fresh [`Drawing`].
    pub fn plot(&self, pair: &GearPair) -> Drawing {
        let mut drawing = Drawing::new();
        self.plot_to(pair, &mut drawing);
        drawing
    }

    /// Render `pair` into `sink`.
    #[instrument(skip_all, fields(
        drive_teeth = pair.drive.tooth_count(),
        driven_teeth = pair.driven.tooth_count(),
        rotation = pair.rotation_percent(),
    ))]
    pub fn plot_to<K: DrawingSink>(&self, pair: &GearPair, sink: &mut K) {
        let layout = self.layout(pair);
        debug!(
            width_mm = layout.canvas.width_mm,
            height_mm = layout.canvas.height_mm,
            center_distance = layout.center_distance(),
            "gear pair layout"
        );

        sink.begin(&layout.canvas);
        self.plot_grid(&layout, sink);
        self.plot_gear(layout.drive_center, pair.drive_rotation_deg(), &pair.drive, sink);
        self.plot_gear(layout.driven_center, pair.driven_rotation_deg(), &pair.driven, sink);

        if let Some(footer) = &self.config.footer {
            sink.draw(DrawOp::Text {
                at: Coord::new(
                    layout.canvas.width() / 2,
                    (layout.canvas.height_mm - 2) * layout.canvas.scale,
                ),
                content: footer.clone(),
                style: Style::Annotation,
            });
        }
    }

    /// Grid lines aligned so that a line pair crosses at the drive gear center, with an even
    /// margin on opposite sides.
    fn plot_grid<K: DrawingSink>(&self, layout: &Layout, sink: &mut K) {
        let spacing = self.config.mm(self.config.grid_spacing_mm).max(1);
        let gx = layout.drive_center.x % spacing;
        let gy = layout.drive_center.y % spacing;
        let gw = layout.canvas.width() - 2 * gx;
        let gh = layout.canvas.height() - 2 * gy;

        let mut x = gx;
        while x <= gx + gw {
            sink.draw(DrawOp::Line {
                from: Coord::new(x, gy),
                to: Coord::new(x, gy + gh),
                style: Style::Grid,
            });
            x += spacing;
        }
        let mut y = gy;
        while y <= gy + gh {
            sink.draw(DrawOp::Line {
                from: Coord::new(gx, y),
                to: Coord::new(gx + gw, y),
                style: Style::Grid,
            });
            y += spacing;
        }
    }

    /// One complete gear centred at `center` and turned by `rotation_deg`.
    fn plot_gear<K: DrawingSink>(
        &self,
        center: Coord,
        rotation_deg: Real,
        gear: &GearProfile,
        sink: &mut K,
    ) {
        let cfg = &self.config;
        let tooth = ToothProfile::new(gear, cfg.scale as Real, cfg.flank_steps);
        if !tooth.has_root_circle() {
            warn!(
                teeth = gear.tooth_count(),
                root_diameter = gear.root_circle_diameter(),
                "root circle collapses through the gear center, skipping root arcs"
            );
        }

        sink.draw(DrawOp::BeginGroup(Transform::Translate(center)));
        sink.draw(DrawOp::Circle {
            center: Coord::origin(),
            radius: cfg.mm(gear.pitch_diameter() / 2.0),
            style: Style::Dash,
        });
        if cfg.reference_circles {
            for diameter in [
                gear.root_circle_diameter(),
                gear.base_circle_diameter(),
                gear.outside_diameter(),
            ] {
                sink.draw(DrawOp::Circle {
                    center: Coord::origin(),
                    radius: cfg.mm(diameter / 2.0),
                    style: Style::Thin,
                });
            }
        }

        let cross = cfg.mm(gear.outside_diameter() / 8.0);
        sink.draw(DrawOp::Line {
            from: Coord::new(-cross, 0),
            to: Coord::new(cross, 0),
            style: Style::Solid,
        });
        sink.draw(DrawOp::Line {
            from: Coord::new(0, -cross),
            to: Coord::new(0, cross),
            style: Style::Solid,
        });

        sink.draw(DrawOp::BeginGroup(Transform::Rotate(rotation_deg)));
        for i in 0..gear.tooth_count() {
            let angle = tooth.angular_pitch * i as Real;
            let (sin, cos) = angle.sin_cos();
            trace!(tooth = i, angle_deg = angle * RAD_TO_DEG, "tooth");
            sink.draw(DrawOp::Line {
                from: to_coord(&Point2::new(cos * tooth.root_radius, sin * tooth.root_radius)),
                to: to_coord(&Point2::new(cos * tooth.outside_radius, sin * tooth.outside_radius)),
                style: Style::Dash,
            });
            sink.draw(DrawOp::BeginGroup(Transform::Rotate(gear.angular_pitch_deg() * i as Real)));
            plot_tooth(&tooth, sink);
            sink.draw(DrawOp::EndGroup);
        }
        sink.draw(DrawOp::EndGroup);

        let labels = [
            (-1.0, format!("Pitch Dia: {:.1}", gear.pitch_diameter())),
            (5.0, format!("Teeth: {}", gear.tooth_count())),
            (11.0, format!("Pressure Angle: {:.1}", gear.pressure_angle_deg())),
        ];
        for (y_mm, content) in labels {
            sink.draw(DrawOp::Text {
                at: Coord::new(0, cfg.mm(y_mm)),
                content,
                style: Style::Annotation,
            });
        }
        sink.draw(DrawOp::EndGroup);
    }
}

/// Both flanks, the crest and the root arc of a tooth lying along +X. The root arc is left
/// out when the gear has no root circle.
fn plot_tooth<K: DrawingSink>(tooth: &ToothProfile, sink: &mut K) {
    let offset_deg = tooth.offset * RAD_TO_DEG;

    sink.draw(DrawOp::BeginGroup(Transform::Rotate(offset_deg)));
    sink.draw(DrawOp::Polyline {
        points: tooth.upper.iter().map(to_coord).collect(),
        style: Style::Solid,
    });
    sink.draw(DrawOp::EndGroup);

    sink.draw(DrawOp::BeginGroup(Transform::Rotate(-offset_deg)));
    sink.draw(DrawOp::Polyline {
        points: tooth.lower.iter().map(to_coord).collect(),
        style: Style::Solid,
    });
    sink.draw(DrawOp::EndGroup);

    let (from, to) = tooth.crest_arc();
    sink.draw(DrawOp::Arc {
        from: to_coord(&from),
        to: to_coord(&to),
        radius: tooth.outside_radius as i64,
        style: Style::Solid,
    });

    if tooth.has_root_circle() {
        let (from, to) = tooth.root_arc();
        sink.draw(DrawOp::Arc {
            from: to_coord(&from),
            to: to_coord(&to),
            radius: tooth.root_radius as i64,
            style: Style::Solid,
        });
    }
}
