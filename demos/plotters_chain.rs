extern crate plotters;
use plotters::prelude::*;

extern crate casteljau;
use casteljau::editor::{AnchorChain, Canvas, ChainPreset};
use casteljau::SampleCount;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let canvas = Canvas::default();
    let chain = AnchorChain::from_preset(ChainPreset::Heart, canvas)?;
    let segments = SampleCount::new(16)?;

    let curve: Vec<(f64, f64)> = chain.sample(segments)?.into_iter().map(Into::into).collect();

    let root = BitMapBackend::new("cubic_chain.png", (640, 640)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("{} cubic segments", chain.len().saturating_sub(1)),
            ("sans-serif", 21).into_font(),
        )
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(0f64..canvas.width, 0f64..canvas.height)?;

    chart.configure_mesh().draw()?;

    // tangent handles of every anchor: left - middle - right
    for anchor in &chain {
        let handles: Vec<(f64, f64)> = vec![anchor.left.into(), anchor.middle.into(), anchor.right.into()];
        chart.draw_series(LineSeries::new(handles.clone(), &BLUE))?;
        chart.draw_series(handles.into_iter().map(|c| Circle::new(c, 4, BLUE.filled())))?;
    }

    chart
        .draw_series(LineSeries::new(curve, &RED))?
        .label("chained B(t)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}
