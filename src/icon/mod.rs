//! 事件图标
//!
//! 图标分两层：
//! - `AssetIcon`：磁盘上的一张 PNG，每张只加载一次
//! - `Glyph`：事件名对应的最终图标，要么直接复用一张素材，要么是两张素材叠加的合成图
//!
//! `IconTable` 在启动时一次性构建，之后只读。

mod names;
mod source;
mod table;

pub use names::{AssetIcon, Glyph, GlyphRecipe};
pub use source::{DirIconSource, IconSource};
pub use table::{IconTable, SUB_ICON_RATIO, overlay};
