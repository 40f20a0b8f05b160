use crate::timeline::TimelineEntry;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// matplotlib `tab10`
pub const TAB10: [Rgb; 10] = [
    Rgb(31, 119, 180),
    Rgb(255, 127, 14),
    Rgb(44, 160, 44),
    Rgb(214, 39, 40),
    Rgb(148, 103, 189),
    Rgb(140, 86, 75),
    Rgb(227, 119, 194),
    Rgb(127, 127, 127),
    Rgb(188, 189, 34),
    Rgb(23, 190, 207),
];

/// 玩家 -> 颜色；玩家数超过调色板长度时颜色循环复用
#[derive(Debug, Clone, Default)]
pub struct PlayerColors {
    order: Vec<String>,
    index: HashMap<String, usize>,
}

impl PlayerColors {
    pub fn from_entries(entries: &[TimelineEntry]) -> Self {
        let mut colors = Self::default();
        for entry in entries {
            colors.insert(&entry.player);
        }
        colors
    }

    fn insert(&mut self, player: &str) {
        if self.index.contains_key(player) {
            return;
        }
        self.index.insert(player.to_string(), self.order.len());
        self.order.push(player.to_string());
    }

    /// 玩家首次出现的名次
    pub fn rank(&self, player: &str) -> Option<usize> {
        self.index.get(player).copied()
    }

    pub fn color(&self, player: &str) -> Option<Rgb> {
        self.rank(player).map(|p| TAB10[p % TAB10.len()])
    }

    /// 按首次出现顺序列出 (玩家, 颜色)
    pub fn legend(&self) -> Vec<(String, Rgb)> {
        self.order
            .iter()
            .enumerate()
            .map(|(p, name)| (name.clone(), TAB10[p % TAB10.len()]))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
