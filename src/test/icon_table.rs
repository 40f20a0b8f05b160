use super::SolidIconSource;
use crate::error::{Result, TimelineError};
use crate::icon::{AssetIcon, Glyph, GlyphRecipe, IconSource, IconTable, overlay};
use image::{Rgba, RgbaImage};

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

#[test]
fn overlay_replaces_exactly_the_bottom_right_block() {
    let primary = RgbaImage::from_pixel(100, 100, RED);
    for sub_side in [37, 100, 250] {
        let secondary = RgbaImage::from_pixel(sub_side, sub_side, BLUE);
        let out = overlay(&primary, &secondary);
        assert_eq!(out.dimensions(), (100, 100));

        for (x, y, px) in out.enumerate_pixels() {
            let in_block = x >= 40 && y >= 40;
            if in_block {
                assert!(px[2] > 200 && px[0] < 50, "({x},{y}) = {px:?}");
            } else {
                assert_eq!(*px, RED, "({x},{y}) changed");
            }
        }
    }
    // 原图不受影响
    assert!(primary.pixels().all(|px| *px == RED));
}

#[test]
fn overlay_block_uses_floor_of_sixty_percent() {
    let primary = RgbaImage::from_pixel(24, 24, RED);
    let secondary = RgbaImage::from_pixel(8, 8, BLUE);
    let out = overlay(&primary, &secondary);
    // floor(24 * 0.6) = 14，偏移 10
    assert_eq!(*out.get_pixel(9, 23), RED);
    assert_eq!(*out.get_pixel(23, 9), RED);
    assert_ne!(*out.get_pixel(10, 10), RED);
}

#[test]
fn table_loads_each_asset_once_and_builds_every_glyph() {
    let source = SolidIconSource::new(20);
    let table = IconTable::build(&source).expect("build icon table");

    let loads = source.loads.borrow();
    assert_eq!(loads.len(), AssetIcon::ALL.len());
    for asset in AssetIcon::ALL {
        assert_eq!(loads.iter().filter(|a| **a == asset).count(), 1, "{asset}");
    }

    for glyph in Glyph::ALL {
        let img = table.get(glyph);
        assert_eq!(img.dimensions(), (20, 20), "{glyph}");
        match glyph.recipe() {
            GlyphRecipe::Asset(asset) => {
                assert!(img.pixels().all(|px| *px == SolidIconSource::color_of(asset)));
            }
            GlyphRecipe::Overlay { primary, secondary } => {
                assert_eq!(*img.get_pixel(0, 0), SolidIconSource::color_of(primary));
                assert_eq!(*img.get_pixel(19, 19), SolidIconSource::color_of(secondary));
            }
        }
    }
}

#[test]
fn glyph_recipes_match_named_composites() {
    assert_eq!(
        Glyph::ChargeJump.recipe(),
        GlyphRecipe::Overlay {
            primary: AssetIcon::Jump,
            secondary: AssetIcon::Charge,
        }
    );
    assert_eq!(
        Glyph::ItemBlock.recipe(),
        GlyphRecipe::Overlay {
            primary: AssetIcon::Item,
            secondary: AssetIcon::Block,
        }
    );
    assert_eq!(Glyph::ItemUse.recipe(), GlyphRecipe::Asset(AssetIcon::Item));

    let composites = Glyph::ALL
        .iter()
        .filter(|g| matches!(g.recipe(), GlyphRecipe::Overlay { .. }))
        .count();
    assert_eq!(composites, 21);
}

#[test]
fn glyph_names_parse_back() {
    for glyph in Glyph::ALL {
        assert_eq!(glyph.name().parse::<Glyph>(), Ok(glyph));
    }
    assert!("banana_peel".parse::<Glyph>().is_err());
}

#[test]
fn resolve_reports_unknown_and_missing_events() {
    let table = IconTable::build(&SolidIconSource::new(8)).expect("build icon table");
    assert!(table.resolve(Some("finish")).is_ok());

    match table.resolve(Some("teleport")) {
        Err(TimelineError::UnknownGlyph { event }) => assert_eq!(event.as_deref(), Some("teleport")),
        other => panic!("expected UnknownGlyph, got {other:?}"),
    }
    assert!(matches!(
        table.resolve(None),
        Err(TimelineError::UnknownGlyph { event: None })
    ));
}

struct WideSpark;

impl IconSource for WideSpark {
    fn get_image(&self, icon: AssetIcon) -> Result<RgbaImage> {
        let width = if icon == AssetIcon::Spark { 30 } else { 20 };
        Ok(RgbaImage::from_pixel(width, 20, RED))
    }
}

#[test]
fn non_square_primary_is_rejected() {
    let err = IconTable::build(&WideSpark).expect_err("spark is not square");
    assert!(matches!(
        err,
        TimelineError::IconNotSquare {
            name: "spark",
            width: 30,
            height: 20
        }
    ));
}
