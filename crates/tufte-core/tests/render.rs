// File: crates/tufte-core/tests/render.rs
// Purpose: End-to-end rendering of each chart type to PNG and RGBA buffers.

use tufte_core::{histogram, line, scatter, HistogramOptions, LineOptions, RenderOptions, ScatterOptions};

fn small() -> RenderOptions {
    RenderOptions { dpi: 20.0, draw_labels: false }
}

#[test]
fn histogram_renders_png() {
    let data: Vec<f64> = (0..100).map(|i| (i % 17) as f64).collect();
    let fig = histogram(&data, &HistogramOptions::default()).unwrap();
    let out = std::path::PathBuf::from("target/test_out/histogram.png");
    fig.render_to_png(&small(), &out).expect("render should succeed");
    let bytes = std::fs::read(&out).expect("output exists");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn rgba_buffer_shape_and_background() {
    let x = [0.0, 1.0, 2.0, f64::NAN, 4.0];
    let y = vec![0.0, 2.0, 1.0, 3.0, 2.5];
    let opts = LineOptions { markers: true, labels: vec!["trend".into()], ..Default::default() };
    let fig = line(&x, &[&y], &opts).unwrap();

    let (px, w, h, stride) = fig.render_to_rgba8(&small()).expect("rgba render");
    assert_eq!((w, h), (160, 100));
    assert_eq!(stride, w as usize * 4);
    assert_eq!(px.len(), stride * h as usize);
    // Top-left corner is plain white background.
    assert_eq!(&px[..4], &[255, 255, 255, 255]);
}

#[test]
fn marginal_scatter_renders_with_labels() {
    let x: Vec<f64> = (0..40).map(|i| i as f64 * 0.5).collect();
    let y: Vec<f64> = x.iter().map(|v| (v * 0.7).sin()).collect();
    let opts = ScatterOptions {
        marginals: true,
        title: Some("Joint distribution".into()),
        xlabel: Some("x".into()),
        ylabel: Some("sin".into()),
        ..Default::default()
    };
    let fig = scatter(&x, &y, &opts).unwrap();
    let bytes = fig
        .render_to_png_bytes(&RenderOptions { dpi: 30.0, draw_labels: true })
        .expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (240, 240));
    // Some ink lands on the canvas.
    assert!(img.pixels().any(|p| p.0[0] < 128));
}
