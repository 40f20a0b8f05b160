//! 基于 plotters 位图后端的 PNG 输出

use super::{RenderOptions, RenderSink};
use crate::error::{Result, TimelineError};
use crate::layout::{RenderPlan, Rgb};
use image::RgbaImage;
use image::imageops::{self, FilterType};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontStyle, FontTransform, register_font};
use std::collections::HashMap;
use std::fmt::Display;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

const FONT_FAMILY: &str = "sans-serif";

fn render_err<E: Display>(err: E) -> TimelineError {
    TimelineError::Render(err.to_string())
}

fn to_plotters(c: Rgb) -> RGBColor {
    RGBColor(c.0, c.1, c.2)
}

fn label_transform(deg: i32) -> FontTransform {
    match deg.rem_euclid(360) {
        90 => FontTransform::Rotate90,
        180 => FontTransform::Rotate180,
        270 => FontTransform::Rotate270,
        _ => FontTransform::None,
    }
}

/// 刻度数量上限（与 matplotlib 的 `MAXTICKS` 同量级）
pub(crate) const MAX_TICKS: usize = 1000;

/// `[lo, hi]` 内 `step` 的整数倍，最多 `MAX_TICKS` 个
pub(crate) fn tick_positions(lo: f64, hi: f64, step: f64) -> Vec<f64> {
    if step.is_nan() || step <= 0.0 || !lo.is_finite() || !hi.is_finite() || hi < lo {
        return Vec::new();
    }
    let first = (lo / step).ceil();
    let last = (hi / step).floor();
    if last < first {
        return Vec::new();
    }
    // 按下标生成，避免大数值上 `t += step` 不再前进
    let n = ((last - first) as usize).saturating_add(1).min(MAX_TICKS);
    (0..n).map(|i| (first + i as f64) * step).collect()
}

/// 绘制到一个 PNG 文件
#[derive(Debug, Clone)]
pub struct PngSink {
    path: PathBuf,
    opts: RenderOptions,
}

impl PngSink {
    pub fn new(path: impl Into<PathBuf>, opts: RenderOptions) -> Self {
        Self {
            path: path.into(),
            opts,
        }
    }

    /// 注册字体；失败只影响文字，不影响出图
    fn load_font(&self) -> bool {
        let Some(path) = &self.opts.font else {
            return false;
        };
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "字体读取失败，不绘制文字");
                return false;
            }
        };
        // plotters 要求 'static 字节；每次渲染最多注册一次
        let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
        if register_font(FONT_FAMILY, FontStyle::Normal, bytes).is_err() {
            warn!(path = %path.display(), "无法解析字体，不绘制文字");
            return false;
        }
        true
    }
}

fn blit_icon(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    icon: &RgbaImage,
    center: (i32, i32),
) -> Result<()> {
    let left = center.0 - icon.width() as i32 / 2;
    let top = center.1 - icon.height() as i32 / 2;
    for (x, y, px) in icon.enumerate_pixels() {
        let [r, g, b, a] = px.0;
        if a == 0 {
            continue;
        }
        let color = RGBAColor(r, g, b, f64::from(a) / 255.0);
        area.draw_pixel((left + x as i32, top + y as i32), &color)
            .map_err(render_err)?;
    }
    Ok(())
}

fn scale_icon(glyph: &RgbaImage, edge: u32) -> RgbaImage {
    let (w, h) = glyph.dimensions();
    if w == 0 || h == 0 {
        return glyph.clone();
    }
    let (tw, th) = if w >= h {
        (edge, (edge * h / w).max(1))
    } else {
        ((edge * w / h).max(1), edge)
    };
    imageops::resize(glyph, tw, th, FilterType::Triangle)
}

impl RenderSink for PngSink {
    #[tracing::instrument(skip(self, plan), fields(path = %self.path.display(), points = plan.points.len()))]
    fn render(&mut self, plan: &RenderPlan<'_>) -> Result<()> {
        let with_text = self.load_font();
        let root = BitMapBackend::new(&self.path, (self.opts.width, self.opts.height))
            .into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let (x_lo, x_hi) = plan.x_range().unwrap_or((0.0, plan.x_tick_step));
        let pad = (plan.x_tick_step / 2.0).max(0.5);
        let (x_lo, x_hi) = (x_lo - pad, x_hi + pad);
        let y_hi = f64::from(plan.max_slot()) + 0.5;
        let ticks = tick_positions(x_lo, x_hi, plan.x_tick_step);

        let mut builder = ChartBuilder::on(&root);
        builder.margin(20);
        if with_text {
            builder.x_label_area_size(60).y_label_area_size(40);
            if let Some(title) = &self.opts.title {
                builder.caption(title, (FONT_FAMILY, 20));
            }
        }
        let mut chart = builder
            .build_cartesian_2d((x_lo..x_hi).with_key_points(ticks), -0.5_f64..y_hi)
            .map_err(render_err)?;

        {
            let mut mesh = chart.configure_mesh();
            mesh.disable_y_mesh();
            if with_text {
                mesh.x_desc(plan.x_label.as_str())
                    .y_desc(plan.y_label.as_str())
                    .y_labels(plan.max_slot() as usize + 1)
                    .x_label_style(
                        (FONT_FAMILY, 12)
                            .into_font()
                            .transform(label_transform(plan.x_label_rotation_deg)),
                    );
            } else {
                mesh.x_labels(0).y_labels(0);
            }
            mesh.draw().map_err(render_err)?;
        }

        let radius = self.opts.marker_radius;
        for (player, color) in &plan.legend {
            let color = to_plotters(*color);
            let series = chart
                .draw_series(
                    plan.points
                        .iter()
                        .filter(|p| &p.player == player)
                        .map(|p| Circle::new((p.x, f64::from(p.slot)), radius, color.filled())),
                )
                .map_err(render_err)?;
            if with_text {
                series
                    .label(player.as_str())
                    .legend(move |(x, y)| Circle::new((x, y), 5, color.filled()));
            }
        }
        if with_text && !plan.legend.is_empty() {
            chart
                .configure_series_labels()
                .background_style(WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()
                .map_err(render_err)?;
        }

        let mut scaled: HashMap<&str, RgbaImage> = HashMap::new();
        for point in &plan.points {
            let icon = scaled
                .entry(point.event.as_str())
                .or_insert_with(|| scale_icon(point.glyph, self.opts.icon_px));
            let center = chart.backend_coord(&(point.x, f64::from(point.slot)));
            blit_icon(&root, icon, center)?;
        }

        root.present().map_err(render_err)?;
        info!(icons = scaled.len(), "🖨️  时间轴已输出");
        Ok(())
    }
}
