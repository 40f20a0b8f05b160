use serde::Deserialize;
use serde_json::Value;

/// NDJSON 的一行记录（未声明 schema，其它字段全部忽略）
///
/// 没有 `event` 的行是遥测数据，时间轴不会使用它们。
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawEventRecord {
    #[serde(default)]
    pub player: Value,
    /// 期望形如 `{"value": 12.5}`
    #[serde(default)]
    pub time: Value,
    /// 期望形如 `{"type": "finish", ...}`
    #[serde(default)]
    pub event: Value,
}

impl RawEventRecord {
    /// `event` 非 null 的记录才会进入时间轴
    pub fn has_event(&self) -> bool {
        !self.event.is_null()
    }

    pub fn player_name(&self) -> String {
        match &self.player {
            Value::Null => String::new(),
            other => super::display_value(other),
        }
    }

    /// `time.value`；`time` 不是对象时返回 `None`
    pub fn time_value(&self) -> Option<f64> {
        self.time.as_object()?.get("value")?.as_f64()
    }

    /// `event.type`；`event` 不是对象时返回 `None`
    pub fn event_type(&self) -> Option<&str> {
        self.event.as_object()?.get("type")?.as_str()
    }
}
