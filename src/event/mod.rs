//! 比赛事件
//!
//! - `RawEventRecord`：NDJSON 中的一行，只读取 `player` / `time` / `event`
//! - `RaceEvent`：按 `type` 分派的类型化事件，每个变体只携带它需要的字段
//! - `extract_detail`：把一条记录压缩成一段简短的摘要文本

mod detail;
mod record;
mod types;

pub use detail::{display_value, extract_detail};
pub use record::RawEventRecord;
pub use types::RaceEvent;
