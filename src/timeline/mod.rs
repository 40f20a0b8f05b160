//! 时间轴表
//!
//! 从原始记录中筛出带事件的行，整理成 (player, time, event, event_detail) 四列，
//! 保持原始顺序，不排序、不去重。

mod builder;
mod entry;

pub use builder::build_timeline;
pub use entry::{TimelineEntry, write_tsv};
