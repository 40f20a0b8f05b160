//! 错误类型
//!
//! 结构不完整的子字段（`time` / `event` 不是对象）和未知事件类型不算错误，
//! 它们只会产生 `None` 或空摘要；这里只收录必须中止流水线的情况。

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TimelineError>;

#[derive(Debug, Error)]
pub enum TimelineError {
    /// 已匹配的事件类型缺少必需字段（或字段形状不对）
    #[error("event `{event_type}` is malformed: {message}")]
    MissingField { event_type: String, message: String },

    /// 事件名没有对应的图标
    #[error("no icon for event {event:?}")]
    UnknownGlyph { event: Option<String> },

    #[error("icon `{name}` must be square, got {width}x{height}")]
    IconNotSquare {
        name: &'static str,
        width: u32,
        height: u32,
    },

    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON at {path}:{line}")]
    Json {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode timeline JSON")]
    Encode(#[source] serde_json::Error),

    #[error("invalid glob pattern `{pattern}`")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("failed to load image {path}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("render failed: {0}")]
    Render(String),
}
