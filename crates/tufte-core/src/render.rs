// File: crates/tufte-core/src/render.rs
// Summary: Headless rendering of a Figure to RGBA pixels and PNG using Skia CPU raster surfaces.

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use skia_safe as skia;

use crate::figure::{Artist, Axes, AxesRole, Figure, Marker, Orientation};
use crate::geometry::{pt_to_px, PixelRect};
use crate::scale::LinearScale;
use crate::style::{GridAxis, Style};
use crate::text::{HAlign, TextShaper, VAlign};
use crate::theme::Color;
use crate::ticks::{format_tick, tick_step};

/// Line height as a multiple of font size for stacked text.
const LINE_SPACING: f32 = 1.4;
/// Legend handle length in points.
const LEGEND_HANDLE_PT: f32 = 18.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    /// Pixels per inch; also scales every point-sized quantity.
    pub dpi: f32,
    /// Text is skipped entirely when false (useful for pixel-exact tests).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { dpi: 100.0, draw_labels: true }
    }
}

impl RenderOptions {
    /// Options for writing files at the style's save resolution.
    pub fn for_saving(style: &Style) -> Self {
        Self { dpi: style.save_dpi, ..Self::default() }
    }
}

fn sk(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn stroke_paint(color: Color, width_px: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_cap(skia::paint::Cap::Butt);
    paint.set_stroke_width(width_px.max(0.5));
    paint.set_color(sk(color));
    paint
}

fn fill_paint(color: Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(sk(color));
    paint
}

/// Per-render state shared by every axes.
struct Ctx<'a> {
    style: &'a Style,
    dpi: f32,
    shaper: Option<TextShaper>,
}

impl Ctx<'_> {
    fn px(&self, pt: f32) -> f32 {
        pt_to_px(pt, self.dpi)
    }
}

impl Figure {
    /// Render into a tightly packed RGBA buffer: `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = self.pixel_size(opts.dpi);
        let mut surface = skia::surfaces::raster_n32_premul((w as i32, h as i32))
            .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
        self.paint(surface.canvas(), w as f32, h as f32, opts);

        let info = skia::ImageInfo::new(
            (w as i32, h as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("failed to read back rendered pixels");
        }
        Ok((pixels, w, h, stride))
    }

    /// Render and encode as PNG in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        let img = image::RgbaImage::from_raw(w, h, pixels)
            .ok_or_else(|| anyhow::anyhow!("pixel buffer does not match {w}x{h}"))?;
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).context("encode PNG")?;
        Ok(out.into_inner())
    }

    /// Render to a PNG file, creating parent directories as needed.
    pub fn render_to_png(&self, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        std::fs::write(path, &bytes).with_context(|| format!("write {}", path.display()))?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "saved figure");
        Ok(())
    }

    fn paint(&self, canvas: &skia::Canvas, w: f32, h: f32, opts: &RenderOptions) {
        tracing::debug!(width = w, height = h, dpi = opts.dpi, axes = self.axes.len(), "render figure");
        canvas.clear(sk(self.background));

        let ctx = Ctx {
            style: &self.style,
            dpi: opts.dpi,
            shaper: opts.draw_labels.then(|| TextShaper::new(&self.style.fonts.families)),
        };
        for axes in &self.axes {
            tracing::trace!(role = axes.role.name(), artists = axes.artists.len(), "draw axes");
            draw_axes(canvas, axes, axes.rect.to_pixels(w, h), &ctx);
        }
    }
}

fn draw_axes(canvas: &skia::Canvas, ax: &Axes, px: PixelRect, ctx: &Ctx) {
    let sx = LinearScale::horizontal(ax.x.limits, px.left, px.right);
    let sy = LinearScale::vertical(ax.y.limits, px.top, px.bottom);

    if ctx.style.grid.enabled && ax.role == AxesRole::Main {
        draw_gridlines(canvas, ax, px, &sx, &sy, ctx);
    }

    canvas.save();
    canvas.clip_rect(
        skia::Rect::from_ltrb(px.left, px.top, px.right, px.bottom),
        skia::ClipOp::Intersect,
        true,
    );
    for artist in &ax.artists {
        draw_artist(canvas, artist, &sx, &sy, ctx);
    }
    canvas.restore();

    draw_spines(canvas, ax, px, &sx, &sy, ctx);
    let (x_extent, y_extent) = draw_ticks(canvas, ax, px, &sx, &sy, ctx);
    draw_labels(canvas, ax, px, x_extent, y_extent, ctx);
    if let Some(legend) = &ax.legend {
        draw_legend(canvas, &legend.entries, px, ctx);
    }
}

fn draw_gridlines(
    canvas: &skia::Canvas,
    ax: &Axes,
    px: PixelRect,
    sx: &LinearScale,
    sy: &LinearScale,
    ctx: &Ctx,
) {
    let grid = &ctx.style.grid;
    let paint = stroke_paint(ctx.style.colors.grid.with_alpha(grid.alpha), ctx.px(ctx.style.lines.grid_width));
    if matches!(grid.axis, GridAxis::X | GridAxis::Both) {
        for t in ax.x.ticks() {
            let x = sx.to_px(t);
            canvas.draw_line((x, px.top), (x, px.bottom), &paint);
        }
    }
    if matches!(grid.axis, GridAxis::Y | GridAxis::Both) {
        for t in ax.y.ticks() {
            let y = sy.to_px(t);
            canvas.draw_line((px.left, y), (px.right, y), &paint);
        }
    }
}

fn draw_artist(canvas: &skia::Canvas, artist: &Artist, sx: &LinearScale, sy: &LinearScale, ctx: &Ctx) {
    match artist {
        Artist::Bars { positions, heights, widths, orientation, color } => {
            let paint = fill_paint(*color);
            for ((&pos, &height), &width) in positions.iter().zip(heights).zip(widths) {
                if !pos.is_finite() || !height.is_finite() || height == 0.0 {
                    continue;
                }
                let rect = match orientation {
                    Orientation::Vertical => {
                        let (x0, x1) = (sx.to_px(pos), sx.to_px(pos + width));
                        let (y0, y1) = (sy.to_px(0.0), sy.to_px(height));
                        skia::Rect::from_ltrb(x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1))
                    }
                    Orientation::Horizontal => {
                        let (x0, x1) = (sx.to_px(0.0), sx.to_px(height));
                        let (y0, y1) = (sy.to_px(pos), sy.to_px(pos + width));
                        skia::Rect::from_ltrb(x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1))
                    }
                };
                canvas.draw_rect(rect, &paint);
            }
        }
        Artist::Line { xs, ys, color, width, marker, .. } => {
            // A non-finite point breaks the line into separate runs.
            let mut path = skia::Path::new();
            let mut pen_down = false;
            for (&x, &y) in xs.iter().zip(ys) {
                if !(x.is_finite() && y.is_finite()) {
                    pen_down = false;
                    continue;
                }
                let p = (sx.to_px(x), sy.to_px(y));
                if pen_down {
                    path.line_to(p);
                } else {
                    path.move_to(p);
                    pen_down = true;
                }
            }
            let mut stroke = stroke_paint(*color, ctx.px(*width));
            stroke.set_stroke_join(skia::paint::Join::Round);
            canvas.draw_path(&path, &stroke);

            if let Some(Marker::HollowCircle { size, edge_width }) = marker {
                let ring = stroke_paint(*color, ctx.px(*edge_width));
                let fill = fill_paint(ctx.style.colors.background);
                let radius = ctx.px(*size) * 0.5;
                for (&x, &y) in xs.iter().zip(ys) {
                    if x.is_finite() && y.is_finite() {
                        let c = (sx.to_px(x), sy.to_px(y));
                        canvas.draw_circle(c, radius, &fill);
                        canvas.draw_circle(c, radius, &ring);
                    }
                }
            }
        }
        Artist::Scatter { xs, ys, color, size } => {
            let paint = fill_paint(*color);
            // Marker size is an area in points squared.
            let radius = ctx.px(size.max(0.0).sqrt()) * 0.5;
            for (&x, &y) in xs.iter().zip(ys) {
                if x.is_finite() && y.is_finite() {
                    canvas.draw_circle((sx.to_px(x), sy.to_px(y)), radius, &paint);
                }
            }
        }
    }
}

fn draw_spines(
    canvas: &skia::Canvas,
    ax: &Axes,
    px: PixelRect,
    sx: &LinearScale,
    sy: &LinearScale,
    ctx: &Ctx,
) {
    let paint = stroke_paint(ax.spine_color, ctx.px(ax.spine_width));
    let (x0, x1) = ax.x.spine_bounds.unwrap_or(ax.x.limits);
    let (y0, y1) = ax.y.spine_bounds.unwrap_or(ax.y.limits);
    let (x0, x1) = (sx.to_px(x0), sx.to_px(x1));
    let (y0, y1) = (sy.to_px(y0), sy.to_px(y1));

    if ax.spines.bottom {
        canvas.draw_line((x0, px.bottom), (x1, px.bottom), &paint);
    }
    if ax.spines.top {
        canvas.draw_line((x0, px.top), (x1, px.top), &paint);
    }
    if ax.spines.left {
        canvas.draw_line((px.left, y0), (px.left, y1), &paint);
    }
    if ax.spines.right {
        canvas.draw_line((px.right, y0), (px.right, y1), &paint);
    }
}

/// Draws outward ticks and tick labels; returns how far the x labels reach
/// below the axes and the y labels reach left of it, in pixels.
fn draw_ticks(
    canvas: &skia::Canvas,
    ax: &Axes,
    px: PixelRect,
    sx: &LinearScale,
    sy: &LinearScale,
    ctx: &Ctx,
) -> (f32, f32) {
    let text_color = sk(ctx.style.colors.text);
    let font_px = ctx.px(ctx.style.fonts.tick_size);
    let pad = ctx.px(ctx.style.spacing.tick_pad);

    let xticks = ax.x.ticks();
    let x_len = ctx.px(ax.x.tick_length);
    let x_paint = stroke_paint(ax.spine_color, ctx.px(ax.x.tick_width));
    let mut x_extent = if xticks.is_empty() { 0.0 } else { x_len };
    let x_step = tick_step(&xticks);
    for &t in &xticks {
        let x = sx.to_px(t);
        canvas.draw_line((x, px.bottom), (x, px.bottom + x_len), &x_paint);
        if let (true, Some(shaper)) = (ax.x.show_tick_labels, &ctx.shaper) {
            let label = format_tick(t, x_step);
            shaper.draw(canvas, &label, x, px.bottom + x_len + pad, font_px, text_color, HAlign::Center, VAlign::Top);
            let (_, h) = shaper.measure(&label, font_px);
            x_extent = x_extent.max(x_len + pad + h);
        }
    }

    let yticks = ax.y.ticks();
    let y_len = ctx.px(ax.y.tick_length);
    let y_paint = stroke_paint(ax.spine_color, ctx.px(ax.y.tick_width));
    let mut y_extent = if yticks.is_empty() { 0.0 } else { y_len };
    let y_step = tick_step(&yticks);
    for &t in &yticks {
        let y = sy.to_px(t);
        canvas.draw_line((px.left - y_len, y), (px.left, y), &y_paint);
        if let (true, Some(shaper)) = (ax.y.show_tick_labels, &ctx.shaper) {
            let label = format_tick(t, y_step);
            shaper.draw(canvas, &label, px.left - y_len - pad, y, font_px, text_color, HAlign::Right, VAlign::Center);
            let (w, _) = shaper.measure(&label, font_px);
            y_extent = y_extent.max(y_len + pad + w);
        }
    }

    (x_extent, y_extent)
}

fn draw_labels(canvas: &skia::Canvas, ax: &Axes, px: PixelRect, x_extent: f32, y_extent: f32, ctx: &Ctx) {
    let Some(shaper) = &ctx.shaper else {
        return;
    };
    let color = sk(ctx.style.colors.text);
    let fonts = &ctx.style.fonts;
    let label_pad = ctx.px(ctx.style.spacing.label_pad);

    if let Some(label) = &ax.x.label {
        let y = px.bottom + x_extent + label_pad;
        shaper.draw(canvas, label, px.center_x(), y, ctx.px(fonts.label_size), color, HAlign::Center, VAlign::Top);
    }
    if let Some(label) = &ax.y.label {
        let size = ctx.px(fonts.label_size);
        let (_, h) = shaper.measure(label, size);
        let x = px.left - y_extent - label_pad - h * 0.5;
        shaper.draw_vertical(canvas, label, x, px.center_y(), size, color);
    }
    if let Some(title) = &ax.title {
        let y = px.top - ctx.px(ctx.style.spacing.title_pad);
        shaper.draw(canvas, title, px.center_x(), y, ctx.px(fonts.title_size), color, HAlign::Center, VAlign::Bottom);
    }
}

fn draw_legend(canvas: &skia::Canvas, entries: &[(String, Color)], px: PixelRect, ctx: &Ctx) {
    let Some(shaper) = &ctx.shaper else {
        return;
    };
    let size = ctx.px(ctx.style.fonts.legend_size);
    let pad = ctx.px(ctx.style.spacing.legend_pad);
    let handle = ctx.px(LEGEND_HANDLE_PT);
    let gap = size * 0.5;
    let text_w = entries
        .iter()
        .map(|(label, _)| shaper.measure(label, size).0)
        .fold(0.0f32, f32::max);

    let left = px.right - pad - text_w - gap - handle;
    let row_h = size * LINE_SPACING;
    let text_color = sk(ctx.style.colors.text);
    for (i, (label, color)) in entries.iter().enumerate() {
        let cy = px.top + pad + row_h * (i as f32 + 0.5);
        let paint = stroke_paint(*color, ctx.px(ctx.style.lines.data_width));
        canvas.draw_line((left, cy), (left + handle, cy), &paint);
        shaper.draw(canvas, label, left + handle + gap, cy, size, text_color, HAlign::Left, VAlign::Center);
    }
}
