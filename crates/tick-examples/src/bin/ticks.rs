// File: crates/tick-examples/src/bin/ticks.rs
// Summary: Example that lays out a few range tracks and prints ticks, offsets, and margins.

use anyhow::{Context, Result};
use tick_core::{Domain, RangeTrack, Step, TickValue};

fn print_track(name: &str, track: &RangeTrack) -> Result<()> {
    let layout = track.layout().with_context(|| format!("laying out {name}"))?;
    println!("{name} (interval {}):", layout.interval);
    for tick in &layout.ticks {
        println!("  {:>8} at {:>6.2}%", tick.label, tick.offset_percent);
    }
    if !layout.hint.is_empty() {
        println!("  style: {}", layout.hint.to_style());
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let volume = RangeTrack::new(Domain::new(0.0, 100.0)?)
        .with_step(Step::new(5.0)?)
        .with_tick_interval(25.0);
    print_track("volume", &volume)?;

    let temperature = RangeTrack::new(Domain::new(-1000.0, 1000.0)?)
        .with_step(Step::new(10.0)?)
        .with_ticks(vec![
            TickValue::labeled(-1000.0, "cold"),
            TickValue::new(0.0),
            TickValue::labeled(1000.0, "hot"),
        ]);
    print_track("temperature", &temperature)?;

    // 21 ticks exceed the default ceiling
    let dense = RangeTrack::new(Domain::new(0.0, 1.0)?).with_step(Step::new(0.05)?).with_show_ticks(true);
    match dense.layout() {
        Ok(_) => println!("dense: laid out"),
        Err(err) => log::warn!("dense: {err}"),
    }
    Ok(())
}
