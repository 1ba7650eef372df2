//! Minimal example showing the essential features

use midi_cc_curves::prelude::*;

fn main() -> Result<()> {
    env_logger::init();
    println!("🎛  MIDI CC Curves - Essential Features\n");

    // 1. Build curves from parsed tracks
    let set = build_set()?;

    // 2. Walk tracks and controls
    list_curves(&set)?;

    // 3. Query held values
    held_values(&set)?;

    // 4. Lookup failures are typed
    lookups(&set);

    Ok(())
}

fn build_set() -> Result<ControlSet> {
    println!("1️⃣  Building\n");

    // Ticks between events, 96 per beat
    let strings = InputTrack::from_triples(
        "Strings",
        [
            (7, 0.0, 40),
            (1, 0.0, 0),
            (7, 96.0, 80),
            (1, 48.0, 32),
            (7, 48.0, 80),
            (1, 96.0, 64),
            (7, 96.0, 80),
            (7, 96.0, 127),
        ],
    );
    let drums = InputTrack::new("Drums").ended();

    let set = ControlSet::new([strings, drums])?;
    println!("   {} track(s) with control curves\n", set.len());
    Ok(set)
}

fn list_curves(set: &ControlSet) -> Result<()> {
    println!("2️⃣  Curves\n");

    for name in set.tracks() {
        let track = set.track(name)?;
        println!("   {name} ({} ticks)", track.final_time());
        for (control, curve) in track.iter() {
            let points: Vec<String> = curve
                .iter()
                .map(|p| format!("({:.2}, {:.2})", p.time, p.value))
                .collect();
            println!("     CC{control:<3} {}", points.join(" "));
        }
    }
    println!();
    Ok(())
}

fn held_values(set: &ControlSet) -> Result<()> {
    println!("3️⃣  Held Values\n");

    let track = set.track("Strings")?;
    for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
        let values: Vec<String> = track
            .values_at(t)
            .iter()
            .map(|(control, value)| format!("CC{control}={value:.2}"))
            .collect();
        println!("   t={t:.2}: {}", values.join("  "));
    }
    println!();
    Ok(())
}

fn lookups(set: &ControlSet) {
    println!("4️⃣  Lookups\n");

    if let Err(err) = set.track("Drums") {
        println!("   {err}");
    }
    if let Ok(track) = set.track("Strings") {
        if let Err(err) = track.curve(74) {
            println!("   {err}");
        }
    }
}
