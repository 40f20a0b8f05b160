use super::RecordSource;
use crate::error::{Result, TimelineError};
use crate::event::RawEventRecord;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// 读取一个 NDJSON 流；空行跳过，行号从 1 开始计
pub fn read_ndjson<R: BufRead>(reader: R, path: &Path) -> Result<Vec<RawEventRecord>> {
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| TimelineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(&line).map_err(|source| TimelineError::Json {
            path: path.to_path_buf(),
            line: idx + 1,
            source,
        })?;
        records.push(record);
    }
    Ok(records)
}

/// 匹配 glob 的所有文件，按路径排序后依次读取
#[derive(Debug, Clone)]
pub struct NdjsonGlobSource {
    pattern: String,
}

impl NdjsonGlobSource {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    pub fn paths(&self) -> Result<Vec<PathBuf>> {
        let entries = glob::glob(&self.pattern).map_err(|source| TimelineError::Pattern {
            pattern: self.pattern.clone(),
            source,
        })?;
        let mut paths = Vec::new();
        for entry in entries {
            let path = entry.map_err(|err| {
                let path = err.path().to_path_buf();
                TimelineError::Io {
                    path,
                    source: err.into(),
                }
            })?;
            if path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }
}

impl RecordSource for NdjsonGlobSource {
    #[tracing::instrument(skip(self), fields(pattern = %self.pattern))]
    fn read_records(&mut self) -> Result<Vec<RawEventRecord>> {
        let paths = self.paths()?;
        if paths.is_empty() {
            warn!("没有匹配的 NDJSON 文件");
        }

        let mut records = Vec::new();
        for path in &paths {
            let file = File::open(path).map_err(|source| TimelineError::Io {
                path: path.clone(),
                source,
            })?;
            let mut chunk = read_ndjson(BufReader::new(file), path)?;
            debug!(path = %path.display(), records = chunk.len(), "读取文件");
            records.append(&mut chunk);
        }

        info!(files = paths.len(), records = records.len(), "📥 记录读取完成");
        Ok(records)
    }
}
