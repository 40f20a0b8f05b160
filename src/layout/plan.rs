use super::palette::{PlayerColors, Rgb, TAB10};
use super::slots::assign_slots;
use crate::error::Result;
use crate::icon::IconTable;
use crate::timeline::TimelineEntry;
use image::RgbaImage;
use tracing::{info, warn};

/// x 轴每隔多少时间单位一个刻度
pub const X_TICK_STEP: f64 = 6.0;
/// x 轴刻度文字旋转角度
pub const X_LABEL_ROTATION_DEG: i32 = 90;

/// 一个待绘制的事件
#[derive(Debug, Clone)]
pub struct PlotPoint<'a> {
    /// 在时间轴表中的行号
    pub entry: usize,
    pub x: f64,
    pub slot: u32,
    pub player: String,
    pub color: Rgb,
    pub event: String,
    pub detail: String,
    pub glyph: &'a RgbaImage,
}

/// 交给渲染端的完整绘制计划
#[derive(Debug, Clone)]
pub struct RenderPlan<'a> {
    pub points: Vec<PlotPoint<'a>>,
    /// (玩家, 颜色)，按首次出现顺序
    pub legend: Vec<(String, Rgb)>,
    pub x_tick_step: f64,
    pub x_label_rotation_deg: i32,
    pub x_label: String,
    pub y_label: String,
}

impl RenderPlan<'_> {
    /// x 轴范围 (min, max)；没有点时返回 `None`
    pub fn x_range(&self) -> Option<(f64, f64)> {
        let mut iter = self.points.iter().map(|p| p.x);
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), x| (lo.min(x), hi.max(x))))
    }

    pub fn max_slot(&self) -> u32 {
        self.points.iter().map(|p| p.slot).max().unwrap_or(0)
    }
}

/// 计算每一行的坐标、颜色与图标
///
/// `time` 缺失的行不绘制；事件名找不到图标时直接返回错误。
#[tracing::instrument(skip(entries, icons), fields(entries = entries.len()))]
pub fn layout_timeline<'a>(entries: &[TimelineEntry], icons: &'a IconTable) -> Result<RenderPlan<'a>> {
    let colors = PlayerColors::from_entries(entries);
    let slots = assign_slots(entries);

    let mut points = Vec::with_capacity(entries.len());
    let mut skipped = 0_usize;
    for (idx, (entry, slot)) in entries.iter().zip(slots).enumerate() {
        let (Some(x), Some(slot)) = (entry.time, slot) else {
            warn!(entry = idx, player = %entry.player, event = ?entry.event, "缺少时间，跳过绘制");
            skipped += 1;
            continue;
        };
        let glyph = icons.resolve(entry.event.as_deref())?;
        let color = colors
            .color(&entry.player)
            .unwrap_or(TAB10[0]);
        points.push(PlotPoint {
            entry: idx,
            x,
            slot,
            player: entry.player.clone(),
            color,
            event: entry.event.clone().unwrap_or_default(),
            detail: entry.event_detail.clone(),
            glyph,
        });
    }

    info!(points = points.len(), skipped, players = colors.len(), "📐 布局完成");
    Ok(RenderPlan {
        points,
        legend: colors.legend(),
        x_tick_step: X_TICK_STEP,
        x_label_rotation_deg: X_LABEL_ROTATION_DEG,
        x_label: "time".to_string(),
        y_label: "slot".to_string(),
    })
}
