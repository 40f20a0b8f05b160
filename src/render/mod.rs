//! 渲染端
//!
//! 核心只产出 `RenderPlan`；怎么画、画到哪里由 `RenderSink` 决定。

mod png;

pub use png::PngSink;
#[cfg(test)]
pub(crate) use png::{MAX_TICKS, tick_positions};

use crate::error::Result;
use crate::layout::RenderPlan;
use std::path::PathBuf;

pub trait RenderSink {
    fn render(&mut self, plan: &RenderPlan<'_>) -> Result<()>;
}

/// 输出图像的尺寸与样式
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    /// 图标绘制边长（像素）
    pub icon_px: u32,
    /// 散点半径（像素）
    pub marker_radius: i32,
    /// 坐标轴文字所用字体；没有字体时不画文字
    pub font: Option<PathBuf>,
    pub title: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 600,
            icon_px: 24,
            marker_radius: 11,
            font: None,
            title: None,
        }
    }
}
