use serde::Deserialize;
use serde_json::Value;

/// 按 `type` 分派的比赛事件
///
/// 每个变体只声明摘要需要读取的字段；缺字段会在反序列化时报错。
/// 值的具体类型因事件而异（字符串/数字都可能出现），所以大多保留为 `Value`。
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RaceEvent {
    ChargeJump {
        direction: Value,
    },
    Jump {
        direction: Value,
    },
    CoinLose {
        coin: Value,
    },
    Collision {
        cause: Value,
        player: Value,
    },
    Drift {
        is_correct_direction: bool,
    },
    ChargeSpark {
        level: Value,
    },
    DriftSpark {
        level: Value,
    },
    WallRideSpark {
        level: Value,
    },
    Finish {
        rank: Value,
    },
    Flattening {
        is_effect: bool,
        player: Value,
    },
    ItemBlock {
        item: Value,
        block: Value,
    },
    /// 每组是一次抽取的候选，组内元素不一定带 `item`
    ItemDecide {
        items: Vec<Vec<Value>>,
    },
    ItemGet {
        number: Value,
    },
    ItemRoll {
        number: Value,
    },
    ItemLose {
        item: Value,
    },
    ItemUse {
        item: Value,
    },
    RocketStart {
        distance: Value,
    },
    Slipstream {
        player: Value,
    },
    SlipstreamBoost {
        player: Value,
    },
    Spinout {
        cause: Value,
        is_effect: bool,
    },
    /// 其它事件（boost、hop、next_lap ...）没有摘要
    #[serde(other)]
    Other,
}
