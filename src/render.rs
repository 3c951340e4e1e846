use kurbo::Point;

use crate::{
    arc,
    color::Rgba8,
    error::{HudError, HudResult},
    layout::{RingSpec, layout_rings},
    metric::Metric,
    theme::Theme,
};

/// One rendered frame, straight off the pixmap.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Canvas and ring spacing parameters. Defaults match the reference layout:
/// a 180px outer ring, 22px strokes, 14px gaps, 20px outer margin.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RingGeometry {
    pub max_radius: f64,
    pub stroke_width: f64,
    pub gap: f64,
    pub margin: f64,
}

impl Default for RingGeometry {
    fn default() -> Self {
        Self {
            max_radius: 180.0,
            stroke_width: 22.0,
            gap: 14.0,
            margin: 20.0,
        }
    }
}

impl RingGeometry {
    pub fn canvas_side(&self) -> f64 {
        2.0 * (self.max_radius + self.margin)
    }

    pub fn validate(&self) -> HudResult<()> {
        if !(self.max_radius > 0.0) {
            return Err(HudError::validation("max_radius must be > 0"));
        }
        if !(self.stroke_width > 0.0) {
            return Err(HudError::validation("stroke_width must be > 0"));
        }
        if !(self.gap >= 0.0) {
            return Err(HudError::validation("gap must be >= 0"));
        }
        if !(self.margin >= 0.0) {
            return Err(HudError::validation("margin must be >= 0"));
        }
        Ok(())
    }
}

/// Draws the metric list as concentric rings over the theme's background
/// gradient. Stateless: the same inputs produce the same bytes.
#[tracing::instrument(skip(metrics, theme), fields(rings = metrics.len()))]
pub fn render_rings(
    metrics: &[Metric],
    theme: &Theme,
    geometry: RingGeometry,
) -> HudResult<FrameRGBA> {
    geometry.validate()?;

    let side = geometry.canvas_side().ceil() as u32;
    let side_u16: u16 = side
        .try_into()
        .map_err(|_| HudError::render("canvas side exceeds u16"))?;
    if side_u16 == 0 {
        return Err(HudError::render("canvas side must be > 0"));
    }

    let mut pixmap = vello_cpu::Pixmap::new(side_u16, side_u16);
    fill_background_gradient(&mut pixmap, theme);

    let specs = layout_rings(
        metrics.len(),
        geometry.max_radius,
        geometry.stroke_width,
        geometry.gap,
    );
    let center = Point::new(f64::from(side) / 2.0, f64::from(side) / 2.0);

    let mut ctx = vello_cpu::RenderContext::new(side_u16, side_u16);
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    let mut drawn = 0usize;
    for (metric, spec) in metrics.iter().zip(&specs) {
        if spec.radius <= spec.stroke_width / 2.0 {
            tracing::warn!(
                label = %metric.label,
                radius = spec.radius,
                "ring does not fit the canvas, skipping"
            );
            continue;
        }
        draw_ring(&mut ctx, center, metric, spec, theme);
        drawn += 1;
    }
    if drawn > 0 {
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);
    }

    Ok(FrameRGBA {
        width: side,
        height: side,
        data: pixmap.data_as_u8_slice().to_vec(),
        premultiplied: true,
    })
}

fn draw_ring(
    ctx: &mut vello_cpu::RenderContext,
    center: Point,
    metric: &Metric,
    spec: &RingSpec,
    theme: &Theme,
) {
    let color = metric.color.rgba();

    // Track first: the full circle at a low opacity of the ring's own color.
    let track = arc::ring_track(center, spec.radius, spec.stroke_width);
    ctx.set_paint(color_to_cpu(color.with_opacity(theme.track_opacity)));
    ctx.fill_path(&bezpath_to_cpu(&track));

    // Progress band on top at full opacity.
    if metric.value > 0.0 {
        let band = arc::arc_band(center, spec.radius, spec.stroke_width, metric.value);
        ctx.set_paint(color_to_cpu(color));
        ctx.fill_path(&bezpath_to_cpu(&band));
    }
}

fn fill_background_gradient(pixmap: &mut vello_cpu::Pixmap, theme: &Theme) {
    let width = usize::from(pixmap.width());
    let height = usize::from(pixmap.height());
    let data = pixmap.data_as_u8_slice_mut();

    for row in 0..height {
        let t = if height > 1 {
            row as f64 / (height - 1) as f64
        } else {
            0.0
        };
        let rgba = lerp_rgba(theme.background_top, theme.background_bottom, t).to_premul_bytes();
        let line = &mut data[row * width * 4..(row + 1) * width * 4];
        for px in line.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }
}

fn lerp_rgba(a: Rgba8, b: Rgba8, t: f64) -> Rgba8 {
    fn lerp(a: u8, b: u8, t: f64) -> u8 {
        (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8
    }

    Rgba8 {
        r: lerp(a.r, b.r, t),
        g: lerp(a.g, b.g, t),
        b: lerp(a.b, b.b, t),
        a: lerp(a.a, b.a, t),
    }
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}
