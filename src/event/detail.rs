//! 事件摘要提取

use super::record::RawEventRecord;
use super::types::RaceEvent;
use crate::error::{Result, TimelineError};
use serde::Deserialize;
use serde_json::Value;

const NO_EFFECT: &str = "(no effect)";
const WRONG_DIRECTION: &str = "wrong direction";

/// 值的自然文本形式：字符串不带引号，其它按 JSON 字面量输出
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// 提取一条记录的事件摘要
///
/// `event` 缺失或不是对象时返回空串；未知类型同样返回空串。
/// `type` 不是字符串时按未知类型处理。
/// 已知类型缺少必需字段、或事件对象没有 `type` 时返回 `MissingField`。
pub fn extract_detail(record: &RawEventRecord) -> Result<String> {
    let Some(obj) = record.event.as_object() else {
        return Ok(String::new());
    };
    let Some(raw_type) = obj.get("type") else {
        return Err(TimelineError::MissingField {
            event_type: String::new(),
            message: "missing field `type`".to_string(),
        });
    };
    let Some(event_type) = raw_type.as_str() else {
        return Ok(String::new());
    };
    let event =
        RaceEvent::deserialize(&record.event).map_err(|err| TimelineError::MissingField {
            event_type: event_type.to_string(),
            message: err.to_string(),
        })?;
    Ok(event.detail())
}

impl RaceEvent {
    pub fn detail(&self) -> String {
        match self {
            Self::ChargeJump { direction } | Self::Jump { direction } => display_value(direction),
            Self::CoinLose { coin } => display_value(coin),
            Self::Collision { cause, player } => {
                if cause.as_str() == Some("player") {
                    display_value(player)
                } else {
                    display_value(cause)
                }
            }
            Self::Drift {
                is_correct_direction,
            } => {
                if *is_correct_direction {
                    String::new()
                } else {
                    WRONG_DIRECTION.to_string()
                }
            }
            Self::ChargeSpark { level } | Self::DriftSpark { level } | Self::WallRideSpark { level } => {
                format!("level {}", display_value(level))
            }
            Self::Finish { rank } => display_value(rank),
            Self::Flattening { is_effect, player } => {
                if *is_effect {
                    display_value(player)
                } else {
                    NO_EFFECT.to_string()
                }
            }
            Self::ItemBlock { item, block } => {
                format!("{} block {}", display_value(item), display_value(block))
            }
            Self::ItemDecide { items } => items
                .iter()
                .map(|group| {
                    let names: Vec<String> = group
                        .iter()
                        .filter_map(|entry| entry.as_object()?.get("item"))
                        .map(display_value)
                        .collect();
                    format!("[{}]", names.join(","))
                })
                .collect::<Vec<_>>()
                .join(","),
            Self::ItemGet { number } | Self::ItemRoll { number } => display_value(number),
            Self::ItemLose { item } | Self::ItemUse { item } => display_value(item),
            Self::RocketStart { distance } => display_value(distance),
            Self::Slipstream { player } | Self::SlipstreamBoost { player } => display_value(player),
            Self::Spinout { cause, is_effect } => {
                if *is_effect {
                    display_value(cause)
                } else {
                    NO_EFFECT.to_string()
                }
            }
            Self::Other => String::new(),
        }
    }
}
