mod icon_table;
mod timeline_builder;

use crate::error::Result;
use crate::event::RawEventRecord;
use crate::icon::{AssetIcon, IconSource};
use image::{Rgba, RgbaImage};
use serde_json::Value;
use std::cell::RefCell;

/// 用 JSON 字面量构造一条记录
pub(super) fn record(raw: &str) -> RawEventRecord {
    serde_json::from_str(raw).expect("parse record")
}

pub(super) fn event_record(event: Value) -> RawEventRecord {
    RawEventRecord {
        player: Value::from("A"),
        time: serde_json::json!({ "value": 1.0 }),
        event,
    }
}

/// 每张素材一个纯色正方形，颜色由素材下标决定；记录加载次数
pub(super) struct SolidIconSource {
    pub side: u32,
    pub loads: RefCell<Vec<AssetIcon>>,
}

impl SolidIconSource {
    pub fn new(side: u32) -> Self {
        Self {
            side,
            loads: RefCell::new(Vec::new()),
        }
    }

    pub fn color_of(icon: AssetIcon) -> Rgba<u8> {
        let i = AssetIcon::ALL
            .iter()
            .position(|a| *a == icon)
            .expect("known asset") as u8;
        Rgba([i.wrapping_mul(9), 255 - i.wrapping_mul(9), i, 255])
    }
}

impl IconSource for SolidIconSource {
    fn get_image(&self, icon: AssetIcon) -> Result<RgbaImage> {
        self.loads.borrow_mut().push(icon);
        Ok(RgbaImage::from_pixel(
            self.side,
            self.side,
            Self::color_of(icon),
        ))
    }
}
