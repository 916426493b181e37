// File: crates/outlook-core/src/chart.rs
// Summary: Per-pass drawing context over a Skia CPU raster surface, and the two-pass PNG pipeline.

use std::path::{Path, PathBuf};

use skia_safe as skia;
use tracing::{debug, info};

use crate::axis::{value_label, AxisPlan};
use crate::config::{ChartConfig, FigureText, PointAnnotation};
use crate::error::{OutlookError, OutlookResult};
use crate::geometry::{clamp, RectI32};
use crate::plan::{RenderPass, RenderPlan};
use crate::scale::{ValueScale, YearScale};
use crate::text::{Emphasis, HAlign, TextShaper};
use crate::theme::Theme;
use crate::trend::TrendSegment;
use crate::types::{Insets, HEIGHT, WIDTH};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text off keeps pixel output independent of installed fonts.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct LegendEntry<'s> {
    pub label: &'s str,
    pub color: skia::Color,
    pub edged: bool,
}

/// Drawing state owned by exactly one render pass.
///
/// Captions live on the context, and `finish_png` consumes it, so nothing set
/// for one pass can leak into the image of the next.
pub struct ChartContext<'a> {
    surface: skia::Surface,
    opts: &'a RenderOptions,
    text: &'a TextShaper,
    plot: RectI32,
    x: YearScale,
    y: ValueScale,
    captions: Vec<FigureText>,
}

impl<'a> ChartContext<'a> {
    pub fn new(opts: &'a RenderOptions, text: &'a TextShaper, axis: &AxisPlan) -> OutlookResult<Self> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| OutlookError::Render("failed to create raster surface".into()))?;
        surface.canvas().clear(opts.theme.background);

        let plot = opts.insets.plot_rect(opts.width, opts.height);
        let x = YearScale::new(plot.left as f32, plot.right as f32, axis.x_min, axis.x_max);
        let y = ValueScale::new(
            axis.scale_kind,
            plot.top as f32,
            plot.bottom as f32,
            axis.vertical_floor,
            axis.vertical_ceiling,
        );
        Ok(Self { surface, opts, text, plot, x, y, captions: Vec::new() })
    }

    pub fn captions(&self) -> &[FigureText] {
        &self.captions
    }

    pub fn add_caption(&mut self, caption: FigureText) {
        self.captions.push(caption);
    }

    pub fn to_px(&self, (x, y): (f64, f64)) -> (f32, f32) {
        (self.x.to_px(x), self.y.to_px(y))
    }

    pub fn draw_grid(&mut self, axis: &AxisPlan) {
        let (plot, xs, ys, theme) = (self.plot, self.x, self.y, self.opts.theme);
        let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
        let canvas = self.surface.canvas();

        let mut paint = stroke(theme.grid_minor, 1.0);
        for &v in axis.minor_ticks.iter().filter(|&&v| in_range(v, axis)) {
            let py = ys.to_px(v);
            canvas.draw_line((l, py), (r, py), &paint);
        }

        paint.set_color(theme.grid);
        for year in axis.visible_years() {
            let px = xs.to_px(year as f64);
            canvas.draw_line((px, t), (px, b), &paint);
        }
        for &v in axis.value_ticks.iter().filter(|&&v| in_range(v, axis)) {
            let py = ys.to_px(v);
            canvas.draw_line((l, py), (r, py), &paint);
        }
    }

    /// Axis lines, tick marks and tick labels. Year labels are derived from the
    /// final tick set here, so they always follow the abbreviation rule.
    pub fn draw_axes(&mut self, axis: &AxisPlan, x_label: &str, y_label: &str) {
        let (plot, xs, ys, theme, text) = (self.plot, self.x, self.y, self.opts.theme, self.text);
        let (l, t, b) = (plot.left as f32, plot.top as f32, plot.bottom as f32);
        let draw_labels = self.opts.draw_labels;
        let canvas = self.surface.canvas();

        let axis_paint = stroke(theme.axis_line, 1.5);
        canvas.draw_line((l, b), (plot.right as f32, b), &axis_paint);
        canvas.draw_line((l, t), (l, b), &axis_paint);

        let tick_paint = stroke(theme.tick, 1.0);
        for year in axis.visible_years() {
            let px = xs.to_px(year as f64);
            canvas.draw_line((px, b), (px, b + 5.0), &tick_paint);
            if draw_labels {
                let label = axis.label_for(year);
                text.draw(canvas, &label, px, b + 22.0, 12.0, theme.tick, HAlign::Center, Emphasis::Numeric);
            }
        }
        for &v in axis.value_ticks.iter().filter(|&&v| in_range(v, axis)) {
            let py = ys.to_px(v);
            canvas.draw_line((l - 5.0, py), (l, py), &tick_paint);
            if draw_labels {
                text.draw(canvas, &value_label(v), l - 8.0, py + 4.0, 12.0, theme.tick, HAlign::Right, Emphasis::Numeric);
            }
        }

        if draw_labels {
            let mid_x = (l + plot.right as f32) * 0.5;
            text.draw(canvas, x_label, mid_x, b + 52.0, 14.0, theme.axis_label, HAlign::Center, Emphasis::Regular);

            let mid_y = (t + b) * 0.5;
            let anchor = skia::Point::new(l - 64.0, mid_y);
            canvas.save();
            canvas.rotate(-90.0, Some(anchor));
            text.draw(canvas, y_label, anchor.x, anchor.y, 14.0, theme.axis_label, HAlign::Center, Emphasis::Regular);
            canvas.restore();
        }
    }

    pub fn draw_title(&mut self, title: &str) {
        if !self.opts.draw_labels {
            return;
        }
        let (text, color) = (self.text, self.opts.theme.axis_label);
        let cx = self.opts.width as f32 * 0.5;
        let y = self.plot.top as f32 * 0.55;
        text.draw(self.surface.canvas(), title, cx, y, 18.0, color, HAlign::Center, Emphasis::Bold);
    }

    /// Connected line through `points`, clipped to the plot area.
    pub fn draw_polyline(&mut self, points: &[(f64, f64)], color: skia::Color, width: f32) {
        if points.len() < 2 {
            return;
        }
        let (xs, ys, clip) = (self.x, self.y, self.plot.to_skia());
        let mut path = skia::Path::new();
        let (x0, y0) = points[0];
        path.move_to((xs.to_px(x0), ys.to_px(y0)));
        for &(x, y) in points.iter().skip(1) {
            path.line_to((xs.to_px(x), ys.to_px(y)));
        }

        let canvas = self.surface.canvas();
        canvas.save();
        canvas.clip_rect(clip, None, true);
        canvas.draw_path(&path, &stroke(color, width));
        canvas.restore();
    }

    /// Independent straight legs; a scenario's legs are not assumed to be contiguous.
    pub fn draw_segments(&mut self, segments: &[TrendSegment], color: skia::Color, width: f32) {
        if segments.is_empty() {
            return;
        }
        let (xs, ys, clip) = (self.x, self.y, self.plot.to_skia());
        let canvas = self.surface.canvas();
        canvas.save();
        canvas.clip_rect(clip, None, true);
        let paint = stroke(color, width);
        for seg in segments {
            let (x0, y0) = seg.start();
            let (x1, y1) = seg.end();
            canvas.draw_line((xs.to_px(x0), ys.to_px(y0)), (xs.to_px(x1), ys.to_px(y1)), &paint);
        }
        canvas.restore();
    }

    pub fn draw_markers(&mut self, points: &[(f64, f64)], radius: f32, fill: skia::Color, edge: Option<skia::Color>) {
        let (xs, ys, clip) = (self.x, self.y, self.plot.to_skia());
        let canvas = self.surface.canvas();
        canvas.save();
        canvas.clip_rect(clip, None, true);
        let mut body = skia::Paint::default();
        body.set_anti_alias(true);
        body.set_style(skia::paint::Style::Fill);
        body.set_color(fill);
        let rim = edge.map(|c| stroke(c, 1.0));
        for &(x, y) in points {
            let center = (xs.to_px(x), ys.to_px(y));
            canvas.draw_circle(center, radius, &body);
            if let Some(rim) = &rim {
                canvas.draw_circle(center, radius, rim);
            }
        }
        canvas.restore();
    }

    /// Boxed legend in the upper-left corner of the plot.
    pub fn draw_legend(&mut self, entries: &[LegendEntry<'_>]) {
        if entries.is_empty() || !self.opts.draw_labels {
            return;
        }
        let (plot, theme, text) = (self.plot, self.opts.theme, self.text);
        let size = 13.0;
        let row_h = 22.0;
        let widest = entries
            .iter()
            .map(|e| text.measure_width(e.label, size, Emphasis::Regular))
            .fold(0.0f32, f32::max);
        let left = plot.left as f32 + 12.0;
        let top = plot.top as f32 + 12.0;
        let boxed = skia::Rect::from_xywh(left, top, widest + 56.0, row_h * entries.len() as f32 + 10.0);

        let canvas = self.surface.canvas();
        let mut fill = skia::Paint::default();
        fill.set_color(theme.legend_fill);
        canvas.draw_rect(boxed, &fill);
        canvas.draw_rect(boxed, &stroke(theme.grid, 1.0));

        for (i, e) in entries.iter().enumerate() {
            let cy = top + 5.0 + row_h * (i as f32 + 0.5);
            canvas.draw_line((left + 8.0, cy), (left + 36.0, cy), &stroke(e.color, 2.0));
            let mut dot = skia::Paint::default();
            dot.set_anti_alias(true);
            dot.set_color(e.color);
            canvas.draw_circle((left + 22.0, cy), 4.0, &dot);
            if e.edged {
                canvas.draw_circle((left + 22.0, cy), 4.0, &stroke(theme.marker_edge, 1.0));
            }
            text.draw(canvas, e.label, left + 44.0, cy + 4.5, size, theme.axis_label, HAlign::Left, Emphasis::Regular);
        }
    }

    /// Text at `text_at` in data coordinates, kept on the surface.
    pub fn annotate_point(&mut self, annotation: &PointAnnotation) {
        if !self.opts.draw_labels {
            return;
        }
        let (px, py) = self.to_px(annotation.text_at);
        let px = clamp(px, 0.0, self.opts.width as f32);
        let py = clamp(py, 12.0, self.opts.height as f32);
        let (text, color) = (self.text, self.opts.theme.axis_label);
        text.draw(self.surface.canvas(), &annotation.text, px, py, 12.0, color, HAlign::Center, Emphasis::Regular);
    }

    /// Draw this pass's captions and encode the surface as PNG. Consumes the context.
    pub fn finish_png(mut self) -> OutlookResult<Vec<u8>> {
        if self.opts.draw_labels {
            let figure = RectI32::from_ltrb(0, 0, self.opts.width, self.opts.height);
            let (text, color) = (self.text, self.opts.theme.axis_label);
            let canvas = self.surface.canvas();
            for c in &self.captions {
                let (x, y) = figure.at_fraction(c.x_frac, c.y_frac);
                text.draw(canvas, &c.text, x, y, c.size, color, c.align, Emphasis::Italic);
            }
        }

        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| OutlookError::Render("encode PNG failed".into()))?;
        Ok(data.as_bytes().to_vec())
    }
}

/// Draw one pass of `plan` and return PNG bytes.
pub fn render_pass(
    plan: &RenderPlan,
    pass: &RenderPass,
    config: &ChartConfig,
    opts: &RenderOptions,
    text: &TextShaper,
) -> OutlookResult<Vec<u8>> {
    let theme = opts.theme;
    debug!(pass = %pass.file_suffix, theme = theme.name, kind = ?pass.axis.scale_kind, "render pass");
    let mut ctx = ChartContext::new(opts, text, &pass.axis)?;

    ctx.draw_grid(&pass.axis);
    for s in &plan.scenarios {
        ctx.draw_segments(&s.segments, theme.scenario, 2.0);
    }
    ctx.draw_polyline(&plan.observed, theme.observed, 2.0);
    ctx.draw_markers(&plan.observed, 4.0, theme.observed, None);
    for s in &plan.scenarios {
        ctx.draw_markers(&s.markers, 5.0, theme.scenario, Some(theme.marker_edge));
    }

    ctx.draw_axes(&pass.axis, &config.x_label, &config.y_label);
    ctx.draw_title(&config.title);
    ctx.draw_legend(&[
        LegendEntry { label: &config.observed_label, color: theme.observed, edged: false },
        LegendEntry { label: &config.scenario_label, color: theme.scenario, edged: true },
    ]);
    for a in &config.annotations {
        ctx.annotate_point(a);
    }

    ctx.add_caption(pass.caption.clone());
    ctx.add_caption(config.attribution.clone());
    ctx.finish_png()
}

/// Render both passes in order, saving each image before the next pass starts.
///
/// A failure in the second pass leaves the first image on disk.
pub fn render_outputs(
    plan: &RenderPlan,
    config: &ChartConfig,
    opts: &RenderOptions,
    out_dir: impl AsRef<Path>,
) -> OutlookResult<Vec<PathBuf>> {
    let out_dir = out_dir.as_ref();
    let text = TextShaper::new();
    let mut written = Vec::with_capacity(2);
    for pass in plan.passes() {
        let bytes = render_pass(plan, pass, config, opts, &text)?;
        let path = out_dir.join(format!("{}_{}.png", config.output_stem, pass.file_suffix));
        std::fs::create_dir_all(out_dir)?;
        std::fs::write(&path, &bytes)?;
        info!(path = %path.display(), bytes = bytes.len(), "plot saved");
        written.push(path);
    }
    Ok(written)
}

// ---- helpers ----------------------------------------------------------------

fn stroke(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn in_range(v: f64, axis: &AxisPlan) -> bool {
    let lo = axis.vertical_floor.min(axis.vertical_ceiling);
    let hi = axis.vertical_floor.max(axis.vertical_ceiling);
    v >= lo - 1e-9 * hi.abs().max(1.0) && v <= hi + 1e-9 * hi.abs().max(1.0)
}
