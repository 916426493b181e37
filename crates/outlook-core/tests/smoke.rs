// File: crates/outlook-core/tests/smoke.rs
// Purpose: End-to-end render smoke tests writing both PNGs and checking pass isolation.

mod common;

use outlook_core::{build_plan, render_outputs, render_pass, ChartConfig, RenderOptions, TextShaper, Theme};

#[test]
fn render_both_scales_to_png() {
    let cfg = ChartConfig::default();
    let (_, plan) = build_plan(&common::sample_table(), &cfg).expect("plan");

    let out = std::path::PathBuf::from("target/test_out/smoke");
    let written = render_outputs(&plan, &cfg, &RenderOptions::default(), &out).expect("render should succeed");
    assert_eq!(written.len(), 2);
    assert!(written[0].ends_with("solar_generation_with_projections_linear.png"));
    assert!(written[1].ends_with("solar_generation_with_projections_log.png"));

    for path in &written {
        let bytes = std::fs::read(path).expect("output exists");
        assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
        let img = image::load_from_memory(&bytes).expect("decode png");
        assert_eq!((img.width(), img.height()), (1200, 800));
    }
}

#[test]
fn linear_and_log_images_differ() {
    let cfg = ChartConfig::default();
    let (_, plan) = build_plan(&common::sample_table(), &cfg).expect("plan");
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let text = TextShaper::new();

    let linear = render_pass(&plan, &plan.linear, &cfg, &opts, &text).expect("linear");
    let log = render_pass(&plan, &plan.log, &cfg, &opts, &text).expect("log");
    let a = image::load_from_memory(&linear).expect("decode linear").to_rgba8();
    let b = image::load_from_memory(&log).expect("decode log").to_rgba8();
    assert_ne!(a.as_raw(), b.as_raw());
}

#[test]
fn rendering_is_deterministic() {
    let cfg = ChartConfig::default();
    let (_, plan) = build_plan(&common::sample_table(), &cfg).expect("plan");
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let text = TextShaper::new();

    let first = render_pass(&plan, &plan.log, &cfg, &opts, &text).expect("first");
    let second = render_pass(&plan, &plan.log, &cfg, &opts, &text).expect("second");
    let a = image::load_from_memory(&first).expect("decode").to_rgba8();
    let b = image::load_from_memory(&second).expect("decode").to_rgba8();
    assert_eq!(a.as_raw(), b.as_raw());
}

fn rgba(png: &[u8]) -> Vec<u8> {
    image::load_from_memory(png).expect("decode").to_rgba8().into_raw()
}

#[test]
fn labelled_passes_do_not_leak_captions() {
    let cfg = ChartConfig::default();
    let (_, plan) = build_plan(&common::sample_table(), &cfg).expect("plan");
    let opts = RenderOptions::default();
    assert!(opts.draw_labels);
    let text = TextShaper::new();

    let linear_alone = rgba(&render_pass(&plan, &plan.linear, &cfg, &opts, &text).expect("linear alone"));
    let log_first = rgba(&render_pass(&plan, &plan.log, &cfg, &opts, &text).expect("log first"));
    let linear_after_log = rgba(&render_pass(&plan, &plan.linear, &cfg, &opts, &text).expect("linear after log"));
    let log_after_linear = rgba(&render_pass(&plan, &plan.log, &cfg, &opts, &text).expect("log after linear"));

    assert_eq!(linear_alone, linear_after_log, "log pass left marks on the linear image");
    assert_eq!(log_first, log_after_linear, "linear pass left marks on the log image");
    assert_ne!(linear_alone, log_first);
}

#[test]
fn empty_plan_renders_with_dark_theme() {
    let cfg = ChartConfig::default();
    let plan = outlook_core::plan_render(&outlook_core::ExtractedSeries::default(), &cfg);
    let mut opts = RenderOptions::default();
    opts.theme = Theme::dark();
    opts.width = 640;
    opts.height = 400;
    let bytes = render_pass(&plan, &plan.linear, &cfg, &opts, &TextShaper::new()).expect("render");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (640, 400));
    // Top-left pixel is background.
    assert_eq!(img.get_pixel(0, 0).0, [18, 18, 20, 255]);
}

#[test]
fn missing_input_fails_before_writing() {
    let out = std::path::PathBuf::from("target/test_out/missing_input");
    let _ = std::fs::remove_dir_all(&out);
    let err = outlook_core::run("target/test_out/no_such.csv", &out, &ChartConfig::default(), &RenderOptions::default())
        .unwrap_err();
    assert!(matches!(err, outlook_core::OutlookError::InputUnavailable { .. }));
    assert!(!out.exists());
}
