//! 布局：把时间轴行映射为散点坐标、颜色和图标
//!
//! - x：事件时间
//! - y：同一时间点上的第几个事件（从 0 开始）
//! - 颜色：按玩家首次出现的顺序从调色板取色

mod palette;
mod plan;
mod slots;

pub use palette::{PlayerColors, Rgb, TAB10};
pub use plan::{PlotPoint, RenderPlan, X_LABEL_ROTATION_DEG, X_TICK_STEP, layout_timeline};
pub use slots::{SlotCounter, assign_slots};
