use super::entry::TimelineEntry;
use crate::error::Result;
use crate::event::{RawEventRecord, extract_detail};
use tracing::{debug, info, warn};

/// 构建时间轴：每条 `event` 非 null 的记录对应一行，按原始顺序输出
#[tracing::instrument(skip(records), fields(records = records.len()))]
pub fn build_timeline(records: &[RawEventRecord]) -> Result<Vec<TimelineEntry>> {
    let mut entries = Vec::new();

    for (idx, record) in records.iter().enumerate() {
        if !record.has_event() {
            continue;
        }

        if !record.time.is_null() && !record.time.is_object() {
            warn!(record = idx, time = %record.time, "time 不是对象，按缺失处理");
        }
        if !record.event.is_object() {
            warn!(record = idx, event = %record.event, "event 不是对象，按缺失处理");
        }

        let entry = TimelineEntry {
            player: record.player_name(),
            time: record.time_value(),
            event: record.event_type().map(str::to_string),
            event_detail: extract_detail(record)?,
        };
        debug!(record = idx, player = %entry.player, event = ?entry.event, detail = %entry.event_detail, "事件入表");
        entries.push(entry);
    }

    info!(entries = entries.len(), "📋 时间轴构建完成");
    Ok(entries)
}
