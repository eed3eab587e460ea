//! Rect Engine demo entry point.
//!
//! A headless driver for the engine: builds a small scene (or loads one
//! from a JSON file), runs a fixed-step frame loop, and dumps the final
//! object snapshots as JSON. Useful for exercising the engine without any
//! presentation layer attached.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --ticks 300 --step-ms 16
//! ```

use clap::Parser;
use log::{debug, info, trace};
use serde::Deserialize;
use std::path::PathBuf;

use rectengine::engine::{Engine, ObjectConfig};
use rectengine::events::{EVENT_COLLISION, EVENT_PLAYER_CREATED, EnginePayload};
use rectengine::resources::engineconfig::EngineConfig;

/// Rect Engine 2D
#[derive(Parser)]
#[command(version, about = "Minimal 2D AABB physics engine, headless demo")]
struct Cli {
    /// Number of frames to simulate.
    #[arg(long, default_value_t = 300)]
    ticks: u32,

    /// Milliseconds of simulated time per frame.
    #[arg(long, default_value_t = 16.0)]
    step_ms: f32,

    /// Number of falling crates in the generated scene.
    #[arg(long, default_value_t = 6)]
    crates: usize,

    /// Load the scene from a JSON file instead of generating one.
    #[arg(long, value_name = "PATH")]
    scene: Option<PathBuf>,

    /// Engine configuration INI file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// One entry of a JSON scene file.
#[derive(Deserialize)]
struct SceneObject {
    id: String,
    #[serde(default)]
    config: ObjectConfig,
}

fn load_scene(engine: &mut Engine, path: &PathBuf) -> Result<usize, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read scene file {}: {}", path.display(), e))?;
    let objects: Vec<SceneObject> =
        serde_json::from_str(&text).map_err(|e| format!("Failed to parse scene JSON: {}", e))?;
    let count = objects.len();
    for object in objects {
        engine
            .create_object(object.id, object.config)
            .map_err(|e| e.to_string())?;
    }
    Ok(count)
}

fn generate_scene(engine: &mut Engine, crates: usize) {
    engine
        .create_object(
            "floor",
            ObjectConfig::sized(800.0, 40.0)
                .at(0.0, 400.0)
                .static_body()
                .with_tag("floor"),
        )
        .expect("fresh engine cannot hold a duplicate id");

    for index in 0..crates {
        let x = fastrand::f32() * 700.0;
        let y = fastrand::f32() * 200.0;
        let vx = fastrand::f32() * 80.0 - 40.0;
        engine
            .create_object(
                format!("crate-{}", index),
                ObjectConfig::sized(24.0, 24.0)
                    .at(x, y)
                    .with_velocity(vx, 0.0)
                    .require_ground()
                    .with_tag("crate"),
            )
            .expect("generated crate ids are unique");
    }

    engine
        .create_object(
            "player",
            ObjectConfig::sized(24.0, 32.0)
                .at(380.0, 100.0)
                .require_ground()
                .player_controlled()
                .with_tag("player"),
        )
        .expect("player id is unique in the generated scene");
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => EngineConfig::with_path(path.clone()),
        None => EngineConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        if cli.config.is_some() {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        debug!("No config file loaded, using defaults: {}", e);
    }

    let mut engine = Engine::with_config(config);

    engine.subscribe(EVENT_COLLISION, |payload| {
        if let EnginePayload::Collision(event) = payload {
            debug!(
                "collision: {} vs {} ({:?})",
                event.first.id, event.second.id, event.data.direction
            );
        }
    });
    engine.subscribe(EVENT_PLAYER_CREATED, |payload| {
        if let EnginePayload::Object(object) = payload {
            info!("player object '{}' is ready for input binding", object.id);
        }
    });
    engine.set_render_adapter(|snapshot| {
        trace!(
            "position sync: {} -> ({}, {})",
            snapshot.id, snapshot.position.x, snapshot.position.y
        );
    });

    match &cli.scene {
        Some(path) => match load_scene(&mut engine, path) {
            Ok(count) => info!("Loaded {} objects from {}", count, path.display()),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => {
            generate_scene(&mut engine, cli.crates);
            info!("Generated scene with {} objects", engine.object_count());
        }
    }

    for frame in 1..=cli.ticks {
        engine.tick(frame as f32 * cli.step_ms);
    }
    info!(
        "Simulated {} frames at {} ms/frame",
        cli.ticks, cli.step_ms
    );

    match serde_json::to_string_pretty(&engine.snapshots()) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing snapshots: {}", e);
            std::process::exit(1);
        }
    }
}
