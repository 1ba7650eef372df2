//! Visualization example - ASCII art plots of reduced CC curves

use midi_cc_curves::prelude::*;

const WIDTH: usize = 60;
const HEIGHT: usize = 20;

fn main() -> Result<()> {
    env_logger::init();
    println!("\n🎨 Reduced Control Curves\n");

    let track = InputTrack::from_triples("Synth", sweep_events());
    let set = ControlSet::new([track])?;
    let synth = set.track("Synth")?;

    for (control, curve) in synth.iter() {
        plot_curve(&format!("CC{control}"), curve);
    }

    println!("\n💡 Run: cargo run --example plot_to_png");
    Ok(())
}

/// A cutoff sweep written at a dense rate, plus a mod wheel that mostly holds
fn sweep_events() -> Vec<(u32, f64, u32)> {
    let mut events = Vec::new();
    for step in 0..=64u32 {
        let cutoff = (if step < 32 { step * 4 } else { (64 - step) * 4 }).min(127);
        events.push((74, if step == 0 { 0.0 } else { 12.0 }, cutoff));
        let wheel = if (16..48).contains(&step) { 100 } else { 0 };
        events.push((1, 0.0, wheel));
    }
    events
}

/// Character cell for a normalized (time, value) pair
fn cell(time: f64, value: f64) -> (usize, usize) {
    let col = (time.clamp(0.0, 1.0) * (WIDTH - 1) as f64).round() as usize;
    let row = ((1.0 - value.clamp(0.0, 1.0)) * (HEIGHT - 1) as f64).round() as usize;
    (col, row)
}

/// Draw the curve as a staircase: held values run flat, changes jump
/// vertically at the point where they happen
fn plot_curve(name: &str, curve: &ReducedCurve) {
    println!("{} ({} points)", name, curve.len());

    let mut canvas = vec![vec![' '; WIDTH]; HEIGHT];
    let cells: Vec<(usize, usize)> = curve.iter().map(|p| cell(p.time, p.value)).collect();

    for pair in cells.windows(2) {
        let ((from_col, held_row), (to_col, next_row)) = (pair[0], pair[1]);

        for col in from_col..to_col {
            canvas[held_row][col] = '─';
        }
        for row in held_row.min(next_row)..=held_row.max(next_row) {
            canvas[row][to_col] = '│';
        }
    }
    for &(col, row) in &cells {
        canvas[row][col] = '●';
    }

    for row in &canvas {
        println!("  │{}", row.iter().collect::<String>());
    }
    println!("  └{}", "─".repeat(WIDTH));

    let labels: Vec<String> = curve
        .iter()
        .map(|p| format!("{:.2}→{:.2}", p.time, p.value))
        .collect();
    println!("  {}\n", labels.join("  "));
}
