use super::names::AssetIcon;
use crate::error::{Result, TimelineError};
use image::RgbaImage;
use std::path::PathBuf;
use tracing::trace;

/// 按名字提供图标素材
pub trait IconSource {
    fn get_image(&self, icon: AssetIcon) -> Result<RgbaImage>;
}

/// 从目录读取 `<name>.png`
#[derive(Debug, Clone)]
pub struct DirIconSource {
    dir: PathBuf,
}

impl DirIconSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl IconSource for DirIconSource {
    fn get_image(&self, icon: AssetIcon) -> Result<RgbaImage> {
        let path = self.dir.join(format!("{}.png", icon.name()));
        trace!(path = %path.display(), "加载图标");
        let img = image::open(&path).map_err(|source| TimelineError::Image {
            path: path.clone(),
            source,
        })?;
        Ok(img.to_rgba8())
    }
}
