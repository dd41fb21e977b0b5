//! Chart rendering for the dashboard page.
//!
//! Every chart is drawn with plotters into an in-memory RGB buffer, encoded
//! as PNG and returned as a `data:image/png;base64,...` string for direct
//! embedding in an `<img>` tag. Rendering is raster-only; no display surface
//! is ever opened. Buffers are dropped after encoding so repeated requests
//! do not accumulate memory.

use anyhow::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use plotters::element::Pie;
use plotters::prelude::*;

use crate::models::{Category, RegionTotal, YearTotal};

const TEAL: RGBColor = RGBColor(0, 128, 128);
const DARK_RED: RGBColor = RGBColor(139, 0, 0);

/// Slice colors in category label order (Rendah, Sedang, Tinggi).
const PIE_COLORS: [RGBColor; 3] = [
    RGBColor(0xff, 0x99, 0x99),
    RGBColor(0x66, 0xb3, 0xff),
    RGBColor(0x99, 0xff, 0x99),
];

/// Horizontal top-10 bar chart for the latest year. `rows` must be in
/// ascending order; index 0 is drawn at the bottom, so the largest value
/// ends up visually on top.
pub fn bar_chart(rows: &[RegionTotal], year: i32, size: (u32, u32)) -> Result<String> {
    let (width, height) = size;
    let mut buf = vec![0u8; (width * height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
        root.fill(&WHITE)?;

        let x_max = rows.iter().map(|r| r.cases).max().unwrap_or(0) as f64 * 1.05;
        let x_max = x_max.max(1.0);

        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!("Top 10 Wilayah Penderita Tertinggi ({year})"),
                ("sans-serif", 22),
            )
            .margin(12)
            .x_label_area_size(36)
            .y_label_area_size(160)
            .build_cartesian_2d(0f64..x_max, (0i32..rows.len() as i32).into_segmented())?;

        chart
            .configure_mesh()
            .disable_y_mesh()
            .light_line_style(BLACK.mix(0.15))
            .y_labels(rows.len())
            .y_label_formatter(&|seg| match seg {
                SegmentValue::CenterOf(i) => rows
                    .get(*i as usize)
                    .map(|r| r.region.clone())
                    .unwrap_or_default(),
                _ => String::new(),
            })
            .draw()?;

        chart.draw_series(rows.iter().enumerate().map(|(i, row)| {
            let i = i as i32;
            Rectangle::new(
                [
                    (0.0, SegmentValue::Exact(i)),
                    (row.cases as f64, SegmentValue::Exact(i + 1)),
                ],
                TEAL.filled(),
            )
        }))?;

        root.present()?;
    }
    encode_data_uri(&buf, width, height)
}

/// Yearly trend line with a marker per year and an x tick per year present.
pub fn line_chart(points: &[YearTotal], size: (u32, u32)) -> Result<String> {
    let (width, height) = size;
    let mut buf = vec![0u8; (width * height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
        root.fill(&WHITE)?;

        let first = points.first().map(|p| p.year).unwrap_or(0);
        let last = points.last().map(|p| p.year).unwrap_or(0);
        let y_max = points.iter().map(|p| p.cases).max().unwrap_or(0) as f64 * 1.05;
        let y_max = y_max.max(1.0);

        let mut chart = ChartBuilder::on(&root)
            .caption("Tren Total Penderita per Tahun", ("sans-serif", 22))
            .margin(12)
            .x_label_area_size(32)
            .y_label_area_size(72)
            .build_cartesian_2d(first..last + 1, 0f64..y_max)?;

        chart
            .configure_mesh()
            .light_line_style(BLACK.mix(0.15))
            .x_labels(points.len())
            .x_label_formatter(&|year| year.to_string())
            .draw()?;

        chart.draw_series(LineSeries::new(
            points.iter().map(|p| (p.year, p.cases as f64)),
            DARK_RED.stroke_width(2),
        ))?;
        chart.draw_series(
            points
                .iter()
                .map(|p| Circle::new((p.year, p.cases as f64), 4, DARK_RED.filled())),
        )?;

        root.present()?;
    }
    encode_data_uri(&buf, width, height)
}

/// Category proportion pie for the latest year. `distribution` is in label
/// order and carries only the labels actually present; colors follow label
/// order as well. Percentage labels are drawn to one decimal place.
pub fn pie_chart(
    distribution: &[(Category, u64)],
    year: i32,
    size: (u32, u32),
) -> Result<String> {
    let (width, height) = size;
    let mut buf = vec![0u8; (width * height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
        root.fill(&WHITE)?;
        let root = root.titled(
            &format!("Proporsi Kategori DM ({year})"),
            ("sans-serif", 22),
        )?;

        let center = ((width / 2) as i32, (height / 2) as i32);
        let radius = f64::from(width.min(height)) * 0.32;
        let sizes: Vec<f64> = distribution.iter().map(|(_, n)| *n as f64).collect();
        let labels: Vec<String> = distribution
            .iter()
            .map(|(cat, _)| cat.label().to_string())
            .collect();
        let colors: Vec<RGBColor> = distribution.iter().map(|(cat, _)| color_for(*cat)).collect();

        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.start_angle(90.0);
        pie.label_style(("sans-serif", 18).into_font().color(&BLACK));
        pie.percentages(("sans-serif", 16).into_font().color(&BLACK));
        root.draw(&pie)?;

        root.present()?;
    }
    encode_data_uri(&buf, width, height)
}

fn color_for(cat: Category) -> RGBColor {
    PIE_COLORS[Category::ALL.iter().position(|c| *c == cat).unwrap_or(0)]
}

/// PNG-encode an RGB buffer and wrap it as an inline data URI.
fn encode_data_uri(rgb: &[u8], width: u32, height: u32) -> Result<String> {
    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(rgb, width, height, ExtendedColorType::Rgb8)?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(&png)))
}
