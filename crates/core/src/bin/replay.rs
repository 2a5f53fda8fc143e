use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

use hopbox_core::{Config, InputState, World};

/// A recorded session: startup config plus one input bitmask per tick.
#[derive(Deserialize)]
struct Trace {
    #[serde(default)]
    config: Config,
    inputs: Vec<u8>,
}

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: cargo run -p hopbox_core --bin replay -- <trace.json>")?;
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let trace: Trace = serde_json::from_str(&raw)
        .with_context(|| format!("malformed trace {}", path.display()))?;
    trace.config.validate().context("invalid trace config")?;
    eprintln!("config: {}", serde_json::to_string(&trace.config)?);

    let mut world = World::new(trace.config);

    println!("frame,x,y,dx,dy,grounded");
    for (frame, bits) in trace.inputs.iter().enumerate() {
        world.input = InputState::from_bits(*bits);
        world.tick();
        let e = &world.entity;
        println!(
            "{},{},{},{},{},{}",
            frame, e.x, e.y, e.dx, e.dy, e.grounded as u8
        );
    }

    Ok(())
}
