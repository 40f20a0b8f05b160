//! 赛车事件时间轴
//!
//! 数据单向流动：原始记录 → 时间轴表 → 布局（坐标/颜色/图标）→ 渲染端。

pub mod error;
pub mod event;
pub mod icon;
pub mod layout;
pub mod render;
pub mod source;
pub mod timeline;

#[cfg(test)]
mod test;
