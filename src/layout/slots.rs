use crate::timeline::TimelineEntry;
use std::collections::HashMap;

/// 每个时间点一个计数器，返回当前事件在该时间点上的序号
#[derive(Debug, Default)]
pub struct SlotCounter {
    counters: HashMap<u64, u32>,
}

impl SlotCounter {
    pub fn next(&mut self, time: f64) -> u32 {
        // 0.0 与 -0.0 视为同一时间点
        let key = if time == 0.0 { 0_u64 } else { time.to_bits() };
        let counter = self.counters.entry(key).or_insert(0);
        let slot = *counter;
        *counter += 1;
        slot
    }
}

/// 按原始顺序为每行分配槽位；`time` 缺失的行不占槽位
pub fn assign_slots(entries: &[TimelineEntry]) -> Vec<Option<u32>> {
    let mut counter = SlotCounter::default();
    entries
        .iter()
        .map(|entry| entry.time.map(|t| counter.next(t)))
        .collect()
}
