mod common;

use std::fs;

use common::{NameEntry, build_font_with_h_metrics, fonts_dir_with, write_font};
use watermark_studio::{ImageSize, PlanError, WatermarkPlanner, text_position};
use watermark_studio_config::{SettingsError, WatermarkPosition, WatermarkSettings};
use watermark_studio_fonts::{CatalogError, TextExtent};

fn planner_for(dir: &tempfile::TempDir) -> WatermarkPlanner {
    WatermarkPlanner::from_dir(Some(dir.path())).expect("fonts dir should build")
}

#[test]
fn test_resolves_exact_display_name() {
    let dir = fonts_dir_with(&[("arial.ttf", "Arial"), ("georgia.ttf", "Georgia")]);
    let planner = planner_for(&dir);

    let font = planner.resolve_font("Georgia").unwrap();
    assert_eq!(font.name, "Georgia");
    assert_eq!(font.path.file_name().unwrap(), "georgia.ttf");
}

#[test]
fn test_resolves_name_ignoring_case() {
    let dir = fonts_dir_with(&[("a1.ttf", "Fira Sans")]);
    let planner = planner_for(&dir);
    assert_eq!(planner.resolve_font("fira sans").unwrap().name, "Fira Sans");
}

#[test]
fn test_resolves_filename_stem() {
    // The default `font: arial` matches arial.ttf even though it is called "Arial Regular"
    let dir = fonts_dir_with(&[("Arial.ttf", "Arial Regular")]);
    let planner = planner_for(&dir);
    let font = planner.resolve_font("arial").unwrap();
    assert_eq!(font.name, "Arial Regular");
}

#[test]
fn test_display_name_wins_over_stem() {
    let dir = fonts_dir_with(&[("b.ttf", "Mono"), ("mono.ttf", "Other")]);
    let planner = planner_for(&dir);
    assert_eq!(planner.resolve_font("mono").unwrap().name, "Mono");
}

#[test]
fn test_plan_measures_with_resolved_font() {
    let dir = fonts_dir_with(&[("arial.ttf", "Arial")]);
    let planner = planner_for(&dir);
    let settings = WatermarkSettings::new("abc")
        .with_font("Arial")
        .with_font_size(1000)
        .with_position(WatermarkPosition::BottomRight);

    let image = ImageSize::new(4000, 3000);
    let plan = planner.plan(image, &settings).unwrap();

    let expected = planner.catalog().directory().join("arial.ttf");
    assert_eq!(plan.font_file(), Some(expected.as_path()));
    assert_eq!(plan.text_extent.width, 1800);
    assert_eq!(plan.origin.0, 4000 - 1800 - 20);
    assert_eq!(
        plan.origin,
        text_position(image, plan.text_extent, WatermarkPosition::BottomRight, 20)
    );
    assert_eq!(plan.text, "abc");
    assert_eq!(plan.opacity, 0.5);
    assert_eq!(plan.color, "white");
}

#[test]
fn test_unknown_font_uses_estimate() {
    let dir = fonts_dir_with(&[("arial.ttf", "Arial")]);
    let planner = planner_for(&dir);
    let settings = WatermarkSettings::new("hello")
        .with_font("Comic Sans")
        .with_font_size(20);

    let plan = planner.plan(ImageSize::new(800, 600), &settings).unwrap();
    assert!(plan.font.is_none());
    assert_eq!(plan.text_extent, TextExtent::new(60, 20));
    assert_eq!(plan.origin, (800 - 60 - 20, 600 - 20 - 20));
}

#[test]
fn test_unreadable_font_falls_back_to_estimate() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::write(dir.path().join("broken.ttf"), b"not a font").unwrap();
    let planner = planner_for(&dir);
    let settings = WatermarkSettings::new("hi").with_font("broken").with_font_size(10);

    let plan = planner.plan(ImageSize::new(100, 100), &settings).unwrap();
    assert_eq!(plan.font.as_ref().unwrap().name, "broken");
    assert_eq!(plan.text_extent, TextExtent::new(12, 10));
}

#[test]
fn test_corrupt_metrics_fall_back_to_estimate() {
    let dir = tempfile::TempDir::new().unwrap();
    let names = [NameEntry::windows(4, "Broken")];
    write_font(dir.path(), "zero.ttf", &build_font_with_h_metrics(&names, 0));
    write_font(dir.path(), "wide.ttf", &build_font_with_h_metrics(&names, 500));
    let planner = planner_for(&dir);

    for font in ["Broken", "Broken (2)"] {
        let settings = WatermarkSettings::new("hello").with_font(font).with_font_size(20);
        let plan = planner.plan(ImageSize::new(800, 600), &settings).unwrap();
        assert_eq!(plan.font.as_ref().unwrap().name, font);
        assert_eq!(plan.text_extent, TextExtent::new(60, 20), "{font}");
    }
}

#[test]
fn test_custom_margin() {
    let dir = fonts_dir_with(&[]);
    let planner = planner_for(&dir).with_margin(0);
    let settings = WatermarkSettings::new("x")
        .with_font_size(10)
        .with_position(WatermarkPosition::TopLeft);
    let plan = planner.plan(ImageSize::new(100, 100), &settings).unwrap();
    assert_eq!(plan.origin, (0, 0));
}

#[test]
fn test_invalid_settings_are_rejected() {
    let dir = fonts_dir_with(&[]);
    let planner = planner_for(&dir);
    let result = planner.plan(ImageSize::new(100, 100), &WatermarkSettings::new(" "));
    assert!(matches!(
        result,
        Err(PlanError::Settings(SettingsError::EmptyText))
    ));
}

#[test]
fn test_batch_plans_each_image() {
    let dir = fonts_dir_with(&[("arial.ttf", "Arial")]);
    let planner = planner_for(&dir);
    let settings = WatermarkSettings::new("abc").with_font_size(1000);
    let images = [ImageSize::new(4000, 3000), ImageSize::new(1000, 1000)];

    let plans = planner.plan_batch(&images, &settings);
    assert_eq!(plans.len(), 2);
    let first = plans[0].as_ref().unwrap();
    let second = plans[1].as_ref().unwrap();
    assert_eq!(first.image, images[0]);
    assert_eq!(second.origin.0, 1000 - 1800 - 20);
}

#[test]
fn test_missing_fonts_dir_is_a_catalog_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let missing = dir.path().join("nope");
    let result = WatermarkPlanner::from_dir(Some(&missing));
    assert!(matches!(
        result,
        Err(PlanError::Catalog(CatalogError::NotFound { .. }))
    ));
}

#[test]
fn test_plan_display_lists_font_box_and_origin() {
    let dir = fonts_dir_with(&[]);
    let planner = planner_for(&dir);
    let settings = WatermarkSettings::new("hello").with_font_size(20);
    let text = planner
        .plan(ImageSize::new(800, 600), &settings)
        .unwrap()
        .to_string();
    assert!(text.contains("image: 800x600"));
    assert!(text.contains("font: none"));
    assert!(text.contains("box: 60x20"));
    assert!(text.contains("origin: (720, 560) bottom-right"));
}
