use crate::domain::model::ScenarioResult;
use crate::domain::ports::ChartSettings;
use crate::utils::error::{CommuteError, Result};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use plotters::prelude::*;
use std::io::Write;

const BAR_LABELS: [&str; 2] = ["Current", "Projected"];
const BAR_COLOR: RGBColor = RGBColor(31, 119, 180);

/// `0.3` → `"30"`, `0.125` → `"12.5"`.
pub fn format_percent(factor: f64) -> String {
    let percent = factor * 100.0;
    if (percent - percent.round()).abs() < 1e-9 {
        format!("{:.0}", percent)
    } else {
        format!("{}", (percent * 100.0).round() / 100.0)
    }
}

pub fn format_report(scenario: &ScenarioResult) -> Vec<String> {
    vec![
        format!(
            "Current average commute time: {:.2} minutes",
            scenario.avg_commute_time
        ),
        format!(
            "Projected average commute time ({}% reduction): {:.2} minutes",
            format_percent(scenario.reduction_factor),
            scenario.avg_commute_time_new
        ),
        format!(
            "Average time saved per commuter: {:.2} minutes",
            scenario.reduction
        ),
    ]
}

pub fn write_report<W: Write>(out: &mut W, scenario: &ScenarioResult) -> Result<()> {
    for line in format_report(scenario) {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(())
}

fn chart_error<E: std::fmt::Display>(e: E) -> CommuteError {
    CommuteError::ChartError {
        message: e.to_string(),
    }
}

/// Renders the Current/Projected bar chart and returns it as PNG bytes.
///
/// Drawing happens in an in-memory RGB buffer, so nothing touches the
/// filesystem until the caller stores the encoded image.
pub fn render_chart(scenario: &ScenarioResult, settings: &ChartSettings) -> Result<Vec<u8>> {
    let (width, height) = (settings.width, settings.height);
    if width == 0 || height == 0 {
        return Err(CommuteError::ChartError {
            message: format!("chart size {}x{} has no pixels", width, height),
        });
    }

    let mut pixels = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_error)?;

        let y_max = scenario
            .avg_commute_time
            .max(scenario.avg_commute_time_new)
            .max(1.0)
            * 1.1;

        let mut chart = ChartBuilder::on(&root)
            .caption(&settings.title, ("sans-serif", 20))
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d((0u32..1u32).into_segmented(), 0f64..y_max)
            .map_err(chart_error)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .y_desc(settings.y_label.as_str())
            .x_label_formatter(&|x: &SegmentValue<u32>| match x {
                SegmentValue::CenterOf(i) => BAR_LABELS
                    .get(*i as usize)
                    .map(|label| label.to_string())
                    .unwrap_or_default(),
                _ => String::new(),
            })
            .draw()
            .map_err(chart_error)?;

        chart
            .draw_series(
                Histogram::vertical(&chart)
                    .style(BAR_COLOR.filled())
                    .margin(60)
                    .data([
                        (0u32, scenario.avg_commute_time),
                        (1u32, scenario.avg_commute_time_new),
                    ]),
            )
            .map_err(chart_error)?;

        root.present().map_err(chart_error)?;
    }

    encode_png(&pixels, width, height)
}

fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(chart_error)?;
    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn scenario() -> ScenarioResult {
        ScenarioResult {
            avg_commute_time: 3500.0 / 150.0,
            avg_commute_time_new: 2450.0 / 150.0,
            reduction: 1050.0 / 150.0,
            reduction_factor: 0.3,
            total_commuters: 150.0,
            record_count: 2,
        }
    }

    #[test]
    fn test_format_report_lines() {
        let lines = format_report(&scenario());

        assert_eq!(
            lines,
            vec![
                "Current average commute time: 23.33 minutes",
                "Projected average commute time (30% reduction): 16.33 minutes",
                "Average time saved per commuter: 7.00 minutes",
            ]
        );
    }

    #[test]
    fn test_write_report_ends_each_line() {
        let mut out = Vec::new();
        write_report(&mut out, &scenario()).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.ends_with("7.00 minutes\n"));
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.3), "30");
        assert_eq!(format_percent(0.0), "0");
        assert_eq!(format_percent(0.125), "12.5");
    }

    #[test]
    fn test_render_chart_produces_png() {
        let settings = ChartSettings::default();
        let png = render_chart(&scenario(), &settings).unwrap();

        assert_eq!(png[..8], PNG_SIGNATURE);
        // IHDR carries width and height as big-endian u32 at bytes 16..24
        assert_eq!(u32::from_be_bytes([png[16], png[17], png[18], png[19]]), 640);
        assert_eq!(u32::from_be_bytes([png[20], png[21], png[22], png[23]]), 480);
    }

    #[test]
    fn test_render_chart_is_deterministic() {
        let settings = ChartSettings::default();
        let first = render_chart(&scenario(), &settings).unwrap();
        let second = render_chart(&scenario(), &settings).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_chart_text_reaches_the_image() {
        let default_png = render_chart(&scenario(), &ChartSettings::default()).unwrap();

        let retitled = ChartSettings {
            title: "Commute Time With Pod Transit".to_string(),
            ..ChartSettings::default()
        };
        let retitled_png = render_chart(&scenario(), &retitled).unwrap();

        let relabeled = ChartSettings {
            y_label: "Hours".to_string(),
            ..ChartSettings::default()
        };
        let relabeled_png = render_chart(&scenario(), &relabeled).unwrap();

        assert_ne!(default_png, retitled_png);
        assert_ne!(default_png, relabeled_png);
        assert_ne!(retitled_png, relabeled_png);
    }

    #[test]
    fn test_render_chart_rejects_empty_canvas() {
        let settings = ChartSettings {
            width: 0,
            ..ChartSettings::default()
        };
        assert!(matches!(
            render_chart(&scenario(), &settings),
            Err(CommuteError::ChartError { .. })
        ));
    }
}
