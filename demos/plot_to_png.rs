//! Render every control curve of a track to a PNG, one colour per controller

use midi_cc_curves::prelude::*;
use plotters::prelude::*;

const PALETTE: [RGBColor; 4] = [
    RGBColor(100, 180, 255),
    RGBColor(255, 100, 120),
    RGBColor(100, 230, 140),
    RGBColor(255, 180, 80),
];

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("🎨 Generating control curve plots...\n");

    std::fs::create_dir_all("plots")?;

    let set = ControlSet::new([pad_track()])?;
    for track in &set {
        let path = format!("plots/{}.png", track.name().to_lowercase());
        plot_track(track, &path)?;
        println!("  ✓ Generated {path}");
    }

    println!("\n✅ All plots generated in ./plots/\n");
    Ok(())
}

fn pad_track() -> InputTrack {
    let mut track = InputTrack::new("Pad");
    for step in 0..=96u32 {
        let delta = if step == 0 { 0.0 } else { 10.0 };
        track = track
            .with_cc(7, delta, (step * 2).min(110))
            .with_cc(74, 0.0, if step % 24 < 12 { 30 } else { 90 })
            .with_cc(10, 0.0, 64);
    }
    track.ended()
}

fn plot_track(track: &ControlTrack, path: &str) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, (1400, 800)).into_drawing_area();
    root.fill(&RGBColor(28, 28, 32))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(track.name(), ("sans-serif", 28, &RGBColor(220, 220, 225)))
        .build_cartesian_2d(0.0..1.0, -0.05..1.05)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .disable_axes()
        .draw()?;

    for (i, (control, curve)) in track.iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];

        // Controllers hold their value until the next point, so draw steps
        let mut steps: Vec<(f64, f64)> = Vec::with_capacity(curve.len() * 2);
        for p in curve {
            if let Some(&(_, held)) = steps.last() {
                steps.push((p.time, held));
            }
            steps.push((p.time, p.value));
        }

        chart
            .draw_series(LineSeries::new(
                steps,
                ShapeStyle {
                    color: color.to_rgba(),
                    filled: false,
                    stroke_width: 4,
                },
            ))?
            .label(format!("CC{control}"))
            .legend(move |(x, y)| {
                PathElement::new(
                    vec![(x, y), (x + 30, y)],
                    ShapeStyle {
                        color: color.to_rgba(),
                        filled: false,
                        stroke_width: 4,
                    },
                )
            });

        // Defining points
        let points: Vec<(f64, f64)> = curve.iter().map(|p| (p.time, p.value)).collect();
        chart.draw_series(PointSeries::of_element(
            points,
            6,
            color,
            &|c, s, st| EmptyElement::at(c) + Circle::new((0, 0), s, st.filled()),
        ))?;
    }

    chart
        .configure_series_labels()
        .background_style(RGBColor(38, 38, 42).mix(0.95))
        .border_style(RGBColor(80, 80, 85))
        .label_font(("sans-serif", 20, &RGBColor(220, 220, 225)))
        .draw()?;

    root.present()?;
    Ok(())
}
