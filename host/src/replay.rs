use std::path::Path;

use anyhow::{Context, Result};
use padarena_core::*;

pub fn execute(path: &Path, config: Option<GameConfig>, draw_list: Option<&Path>) -> Result<()> {
    let mut recording = Recording::load(path)
        .with_context(|| format!("failed to load recording {}", path.display()))?;
    if let Some(config) = config {
        recording.config = config;
    }
    tracing::info!(
        "Recording loaded: {} frames, devices={:?}",
        recording.frames.len(),
        recording.device_names
    );

    let mut draws: Vec<DrawList> = Vec::new();
    let state = if draw_list.is_some() {
        recording.replay_with(|state| {
            let mut canvas = DrawList::new();
            draw_frame(state, &mut canvas);
            draws.push(canvas);
        })
    } else {
        recording.replay()
    };

    print_result(&state, &recording);

    if let Some(out) = draw_list {
        let json = serde_json::to_string(&draws)?;
        std::fs::write(out, json)
            .with_context(|| format!("failed to write draw list {}", out.display()))?;
        tracing::info!("Draw list for {} frames written to {}", draws.len(), out.display());
    }
    Ok(())
}

fn print_result(state: &GameState, recording: &Recording) {
    println!("=== Replay Result ===");
    println!("Frames: {}", state.frame);
    for p in &state.players {
        let bullet = if p.bullet.active {
            format!(
                "in flight at ({:.1}, {:.1}), age {}",
                p.bullet.hitbox.x, p.bullet.hitbox.y, p.bullet.age
            )
        } else {
            "idle".to_string()
        };
        let fire = match p.fire_button {
            Some(button) => format!("{button:?}"),
            None => "none".to_string(),
        };
        println!(
            "P{}: ready={} pos=({:.1}, {:.1}) facing={:?} fire={} shot={} bullet {}",
            p.id, p.ready, p.hitbox.x, p.hitbox.y, p.facing, fire, p.shot, bullet
        );
    }
    println!("Input hash: {}", hex::encode(hash_frames(&recording.frames)));
    println!("State hash: {}", hex::encode(hash_state(state)));
}
