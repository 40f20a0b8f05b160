//! 原始记录来源
//!
//! 把若干 NDJSON 文件（每行一个 JSON 对象）拼接成一个记录序列。

mod ndjson;

pub use ndjson::{NdjsonGlobSource, read_ndjson};

use crate::error::Result;
use crate::event::RawEventRecord;

/// 提供完整的原始记录序列（一次读完，全部放在内存里）
pub trait RecordSource {
    fn read_records(&mut self) -> Result<Vec<RawEventRecord>>;
}

impl RecordSource for Vec<RawEventRecord> {
    fn read_records(&mut self) -> Result<Vec<RawEventRecord>> {
        Ok(std::mem::take(self))
    }
}
