use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// 时间轴中的一行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub player: String,
    /// `time` 不是对象时为 `None`
    pub time: Option<f64>,
    /// `event` 不是对象时为 `None`
    pub event: Option<String>,
    pub event_detail: String,
}

/// 转义 TSV 字段中的反斜杠、制表符与换行
fn escape_field(field: &str) -> std::borrow::Cow<'_, str> {
    if !field.contains(['\\', '\t', '\n', '\r']) {
        return field.into();
    }
    let mut out = String::with_capacity(field.len() + 2);
    for ch in field.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out.into()
}

/// 以 TSV 输出时间轴（带表头），缺失值留空，文本字段做反斜杠转义
pub fn write_tsv<W: Write>(entries: &[TimelineEntry], mut out: W) -> io::Result<()> {
    writeln!(out, "player\ttime\tevent\tevent_detail")?;
    for entry in entries {
        let time = entry.time.map(|t| t.to_string()).unwrap_or_default();
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            escape_field(&entry.player),
            time,
            escape_field(entry.event.as_deref().unwrap_or("")),
            escape_field(&entry.event_detail)
        )?;
    }
    out.flush()
}
