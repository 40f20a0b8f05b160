use std::fmt;
use std::str::FromStr;

/// 图标素材（文件名即 `<name>.png`）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetIcon {
    Block,
    Cancel,
    Choose,
    Coin,
    Decide,
    Get,
    Item,
    Lose,
    Mushroom,
    Roll,
    Spark,
    Stop,
    Track,
    Boost,
    Charge,
    Collision,
    Drift,
    Finish,
    Flattening,
    Hop,
    Jump,
    NextLap,
    RailRide,
    RocketStart,
    Slipstream,
    Spinout,
    Start,
    WallRide,
}

impl AssetIcon {
    pub const ALL: [AssetIcon; 28] = [
        Self::Block,
        Self::Cancel,
        Self::Choose,
        Self::Coin,
        Self::Decide,
        Self::Get,
        Self::Item,
        Self::Lose,
        Self::Mushroom,
        Self::Roll,
        Self::Spark,
        Self::Stop,
        Self::Track,
        Self::Boost,
        Self::Charge,
        Self::Collision,
        Self::Drift,
        Self::Finish,
        Self::Flattening,
        Self::Hop,
        Self::Jump,
        Self::NextLap,
        Self::RailRide,
        Self::RocketStart,
        Self::Slipstream,
        Self::Spinout,
        Self::Start,
        Self::WallRide,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Cancel => "cancel",
            Self::Choose => "choose",
            Self::Coin => "coin",
            Self::Decide => "decide",
            Self::Get => "get",
            Self::Item => "item",
            Self::Lose => "lose",
            Self::Mushroom => "mushroom",
            Self::Roll => "roll",
            Self::Spark => "spark",
            Self::Stop => "stop",
            Self::Track => "track",
            Self::Boost => "boost",
            Self::Charge => "charge",
            Self::Collision => "collision",
            Self::Drift => "drift",
            Self::Finish => "finish",
            Self::Flattening => "flattening",
            Self::Hop => "hop",
            Self::Jump => "jump",
            Self::NextLap => "next_lap",
            Self::RailRide => "rail_ride",
            Self::RocketStart => "rocket_start",
            Self::Slipstream => "slipstream",
            Self::Spinout => "spinout",
            Self::Start => "start",
            Self::WallRide => "wall_ride",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for AssetIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 图标的构成方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphRecipe {
    /// 直接使用一张素材
    Asset(AssetIcon),
    /// `secondary` 缩小后覆盖到 `primary` 的右下角
    Overlay {
        primary: AssetIcon,
        secondary: AssetIcon,
    },
}

/// 事件名对应的图标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Boost,
    Charge,
    Collision,
    Drift,
    Finish,
    Flattening,
    Hop,
    ItemUse,
    Jump,
    NextLap,
    RailRide,
    RocketStart,
    Slipstream,
    Spinout,
    Start,
    WallRide,
    ChargeCancel,
    ChargeJump,
    ChargeSpark,
    ChargeStop,
    ChooseTrack,
    CoinGet,
    CoinLose,
    DecideTrack,
    DriftBoost,
    DriftSpark,
    DriftStop,
    ItemBlock,
    ItemDecide,
    ItemGet,
    ItemLose,
    ItemRoll,
    JumpBoost,
    MushroomBoost,
    SlipstreamBoost,
    WallRideSpark,
    WallRideStop,
}

impl Glyph {
    pub const ALL: [Glyph; 37] = [
        Self::Boost,
        Self::Charge,
        Self::Collision,
        Self::Drift,
        Self::Finish,
        Self::Flattening,
        Self::Hop,
        Self::ItemUse,
        Self::Jump,
        Self::NextLap,
        Self::RailRide,
        Self::RocketStart,
        Self::Slipstream,
        Self::Spinout,
        Self::Start,
        Self::WallRide,
        Self::ChargeCancel,
        Self::ChargeJump,
        Self::ChargeSpark,
        Self::ChargeStop,
        Self::ChooseTrack,
        Self::CoinGet,
        Self::CoinLose,
        Self::DecideTrack,
        Self::DriftBoost,
        Self::DriftSpark,
        Self::DriftStop,
        Self::ItemBlock,
        Self::ItemDecide,
        Self::ItemGet,
        Self::ItemLose,
        Self::ItemRoll,
        Self::JumpBoost,
        Self::MushroomBoost,
        Self::SlipstreamBoost,
        Self::WallRideSpark,
        Self::WallRideStop,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Boost => "boost",
            Self::Charge => "charge",
            Self::Collision => "collision",
            Self::Drift => "drift",
            Self::Finish => "finish",
            Self::Flattening => "flattening",
            Self::Hop => "hop",
            Self::ItemUse => "item_use",
            Self::Jump => "jump",
            Self::NextLap => "next_lap",
            Self::RailRide => "rail_ride",
            Self::RocketStart => "rocket_start",
            Self::Slipstream => "slipstream",
            Self::Spinout => "spinout",
            Self::Start => "start",
            Self::WallRide => "wall_ride",
            Self::ChargeCancel => "charge_cancel",
            Self::ChargeJump => "charge_jump",
            Self::ChargeSpark => "charge_spark",
            Self::ChargeStop => "charge_stop",
            Self::ChooseTrack => "choose_track",
            Self::CoinGet => "coin_get",
            Self::CoinLose => "coin_lose",
            Self::DecideTrack => "decide_track",
            Self::DriftBoost => "drift_boost",
            Self::DriftSpark => "drift_spark",
            Self::DriftStop => "drift_stop",
            Self::ItemBlock => "item_block",
            Self::ItemDecide => "item_decide",
            Self::ItemGet => "item_get",
            Self::ItemLose => "item_lose",
            Self::ItemRoll => "item_roll",
            Self::JumpBoost => "jump_boost",
            Self::MushroomBoost => "mushroom_boost",
            Self::SlipstreamBoost => "slipstream_boost",
            Self::WallRideSpark => "wall_ride_spark",
            Self::WallRideStop => "wall_ride_stop",
        }
    }

    pub fn recipe(self) -> GlyphRecipe {
        use AssetIcon as A;
        use GlyphRecipe::{Asset, Overlay};

        let pair = |primary, secondary| Overlay { primary, secondary };
        match self {
            Self::Boost => Asset(A::Boost),
            Self::Charge => Asset(A::Charge),
            Self::Collision => Asset(A::Collision),
            Self::Drift => Asset(A::Drift),
            Self::Finish => Asset(A::Finish),
            Self::Flattening => Asset(A::Flattening),
            Self::Hop => Asset(A::Hop),
            Self::ItemUse => Asset(A::Item),
            Self::Jump => Asset(A::Jump),
            Self::NextLap => Asset(A::NextLap),
            Self::RailRide => Asset(A::RailRide),
            Self::RocketStart => Asset(A::RocketStart),
            Self::Slipstream => Asset(A::Slipstream),
            Self::Spinout => Asset(A::Spinout),
            Self::Start => Asset(A::Start),
            Self::WallRide => Asset(A::WallRide),
            Self::ChargeCancel => pair(A::Charge, A::Cancel),
            Self::ChargeJump => pair(A::Jump, A::Charge),
            Self::ChargeSpark => pair(A::Spark, A::Charge),
            Self::ChargeStop => pair(A::Charge, A::Stop),
            Self::ChooseTrack => pair(A::Track, A::Choose),
            Self::CoinGet => pair(A::Coin, A::Get),
            Self::CoinLose => pair(A::Coin, A::Lose),
            Self::DecideTrack => pair(A::Track, A::Decide),
            Self::DriftBoost => pair(A::Boost, A::Drift),
            Self::DriftSpark => pair(A::Spark, A::Drift),
            Self::DriftStop => pair(A::Spark, A::Stop),
            Self::ItemBlock => pair(A::Item, A::Block),
            Self::ItemDecide => pair(A::Item, A::Decide),
            Self::ItemGet => pair(A::Item, A::Get),
            Self::ItemLose => pair(A::Item, A::Lose),
            Self::ItemRoll => pair(A::Item, A::Roll),
            Self::JumpBoost => pair(A::Boost, A::Jump),
            Self::MushroomBoost => pair(A::Boost, A::Mushroom),
            Self::SlipstreamBoost => pair(A::Boost, A::Slipstream),
            Self::WallRideSpark => pair(A::Spark, A::WallRide),
            Self::WallRideStop => pair(A::WallRide, A::Stop),
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Glyph {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|glyph| glyph.name() == raw)
            .ok_or_else(|| format!("unknown glyph: {raw}"))
    }
}
