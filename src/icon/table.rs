use super::names::{AssetIcon, Glyph, GlyphRecipe};
use super::source::IconSource;
use crate::error::{Result, TimelineError};
use image::RgbaImage;
use image::imageops::{self, FilterType};
use tracing::{debug, info};

/// 合成图中副图标相对主图标的边长比例
pub const SUB_ICON_RATIO: f64 = 0.6;

/// 合成图标：把 `secondary` 缩放到 `floor(w * 0.6)` 见方，覆盖 `primary` 副本的右下角
///
/// `primary` 必须是正方形，边长取自它的高度。
pub fn overlay(primary: &RgbaImage, secondary: &RgbaImage) -> RgbaImage {
    let side = primary.height();
    let sub_side = (f64::from(side) * SUB_ICON_RATIO) as u32;
    let offset = i64::from(side - sub_side);

    let mut out = primary.clone();
    if sub_side == 0 {
        return out;
    }
    let sub = imageops::resize(secondary, sub_side, sub_side, FilterType::Triangle);
    imageops::replace(&mut out, &sub, offset, offset);
    out
}

/// 事件名 -> 图标 的只读表（按 `Glyph` 下标存放）
#[derive(Debug, Clone)]
pub struct IconTable {
    glyphs: Vec<RgbaImage>,
}

impl IconTable {
    /// 先加载全部素材，再按配方生成每个事件的图标
    #[tracing::instrument(skip(source))]
    pub fn build(source: &dyn IconSource) -> Result<Self> {
        let mut assets = Vec::with_capacity(AssetIcon::ALL.len());
        for asset in AssetIcon::ALL {
            assets.push(source.get_image(asset)?);
        }
        debug!(assets = assets.len(), "图标素材加载完成");

        let mut glyphs = Vec::with_capacity(Glyph::ALL.len());
        for glyph in Glyph::ALL {
            let img = match glyph.recipe() {
                GlyphRecipe::Asset(asset) => assets[asset.index()].clone(),
                GlyphRecipe::Overlay { primary, secondary } => {
                    let main = &assets[primary.index()];
                    if main.width() != main.height() {
                        return Err(TimelineError::IconNotSquare {
                            name: primary.name(),
                            width: main.width(),
                            height: main.height(),
                        });
                    }
                    overlay(main, &assets[secondary.index()])
                }
            };
            glyphs.push(img);
        }

        info!(glyphs = glyphs.len(), "🖼️  图标表构建完成");
        Ok(Self { glyphs })
    }

    pub fn get(&self, glyph: Glyph) -> &RgbaImage {
        &self.glyphs[glyph.index()]
    }

    /// 按事件名查图标；`None` 或未登记的名字返回 `UnknownGlyph`
    pub fn resolve(&self, event: Option<&str>) -> Result<&RgbaImage> {
        let glyph = event
            .and_then(|name| name.parse::<Glyph>().ok())
            .ok_or_else(|| TimelineError::UnknownGlyph {
                event: event.map(str::to_string),
            })?;
        Ok(self.get(glyph))
    }
}
