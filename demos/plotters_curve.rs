extern crate plotters;
use plotters::prelude::*;

extern crate casteljau;
use casteljau::editor::{Canvas, ControlPolygon, CurvePreset};
use casteljau::SampleCount;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let canvas = Canvas::default();
    let polygon = ControlPolygon::from_preset(CurvePreset::Heart, canvas)?;
    let segments: SampleCount = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<SampleCount>())
        .transpose()?
        .unwrap_or_default();

    // control polygon and the sampled curve as plain tuples for plotting
    let cpoints: Vec<(f64, f64)> = polygon.positions().into_iter().map(Into::into).collect();
    let curve: Vec<(f64, f64)> = polygon.sample(segments)?.into_iter().map(Into::into).collect();

    let root = BitMapBackend::new("nth_order_curve.png", (640, 640)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Degree {} Bezier, {} segments", cpoints.len() - 1, segments),
            ("sans-serif", 21).into_font(),
        )
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(0f64..canvas.width, 0f64..canvas.height)?;

    chart.configure_mesh().draw()?;

    // draw the control polygon
    chart
        .draw_series(LineSeries::new(cpoints.clone(), &BLUE))?
        .label("Control polygon")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    // draw the control points with their order
    chart.draw_series(cpoints.iter().map(|&c| Circle::new(c, 5, BLUE.filled())))?;
    chart.draw_series(cpoints.iter().enumerate().map(|(order, &c)| {
        Text::new(format!("{}", order), c, ("sans-serif", 15).into_font())
    }))?;

    // draw the sampled curve and its sample points
    chart
        .draw_series(LineSeries::new(curve.clone(), &RED))?
        .label("B(t)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));
    chart.draw_series(curve.iter().map(|&c| Circle::new(c, 2, RED.filled())))?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}
