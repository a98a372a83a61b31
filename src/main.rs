//! Hazardcore headless demo runner.
//!
//! Stands in for the host loop: builds a world with a floor, a patroller, a
//! turret and an ambient ornament, then steps the simulation at a fixed
//! delta and logs what the entities do. No rendering, no input; this is the
//! behavior layer exercised end to end.
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run -- --frames 600 --dt 0.016666
//! ```

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use log::info;
use std::path::PathBuf;

use hazardcore::bundles;
use hazardcore::components::boxcollider::Rect;
use hazardcore::components::projectile::Projectile;
use hazardcore::events::hit::{HitEvent, observe_hit};
use hazardcore::events::spawn::SpawnProjectile;
use hazardcore::resources::animationstore::{AnimationClip, AnimationStore};
use hazardcore::resources::playertracker::PlayerTracker;
use hazardcore::resources::staticgeometry::StaticGeometry;
use hazardcore::resources::tuning::Tuning;
use hazardcore::resources::worldtime::WorldTime;
use hazardcore::systems::ambient::ambient_idle_system;
use hazardcore::systems::animation::animation;
use hazardcore::systems::patrol::patrol_system;
use hazardcore::systems::projectile::projectile_system;
use hazardcore::systems::spawn::{PROJECTILE_CLIP, projectile_spawner};
use hazardcore::systems::time::update_world_time;
use hazardcore::systems::turret::turret_system;

/// Hazardcore behavior demo
#[derive(Parser)]
#[command(version, about = "Headless demo of the hazardcore behavior layer")]
struct Cli {
    /// Number of frames to simulate.
    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// Fixed frame delta in seconds.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Path to a tuning INI file.
    #[arg(long, value_name = "PATH")]
    tuning: Option<PathBuf>,
}

fn demo_clips() -> AnimationStore {
    let mut store = AnimationStore::default();
    store.insert(
        "tooth_run",
        AnimationClip {
            tex_key: "tooth".to_string(),
            frame_count: 4,
            fps: 6.0,
            looped: true,
            frame_width: 32.0,
            frame_height: 32.0,
        },
    );
    store.insert(
        "canon_idle",
        AnimationClip {
            tex_key: "canon".to_string(),
            frame_count: 1,
            fps: 6.0,
            looped: true,
            frame_width: 48.0,
            frame_height: 48.0,
        },
    );
    store.insert(
        "canon_fire",
        AnimationClip {
            tex_key: "canon_fire".to_string(),
            frame_count: 6,
            fps: 6.0,
            looped: false,
            frame_width: 48.0,
            frame_height: 48.0,
        },
    );
    store.insert(
        PROJECTILE_CLIP,
        AnimationClip {
            tex_key: "canonball".to_string(),
            frame_count: 1,
            fps: 6.0,
            looped: true,
            frame_width: 16.0,
            frame_height: 16.0,
        },
    );
    store.insert(
        "heart_beat",
        AnimationClip {
            tex_key: "heart".to_string(),
            frame_count: 5,
            fps: 6.0,
            looped: false,
            frame_width: 24.0,
            frame_height: 24.0,
        },
    );
    store
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut tuning = match &cli.tuning {
        Some(path) => Tuning::with_path(path),
        None => Tuning::new(),
    };
    if cli.tuning.is_some()
        && let Err(e) = tuning.load_from_file()
    {
        log::warn!("{e}; using defaults");
    }

    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(PlayerTracker::new(700.0, 340.0));
    world.insert_resource(StaticGeometry::new(vec![
        // Ground under the whole demo strip, plus a wall on the right.
        Rect::new(0.0, 368.0, 1280.0, 64.0),
        Rect::new(1200.0, 200.0, 32.0, 168.0),
    ]));
    world.init_resource::<Messages<SpawnProjectile>>();

    world.spawn(Observer::new(observe_hit));
    world.flush();

    let store = demo_clips();

    // A patroller on the ground.
    let patroller = world
        .spawn(bundles::patroller(&store, &tuning, "tooth_run", 400.0, 336.0))
        .id();

    // A turret facing right on the same ground level as the player.
    world.spawn(bundles::turret(
        &store,
        &tuning,
        false,
        "canon_idle",
        "canon_fire",
        100.0,
        320.0,
    ));

    // A UI ornament with the self-triggering idle animation.
    world.spawn(bundles::ambient(&store, tuning.ambient_one_in, "heart_beat"));

    world.insert_resource(store);
    world.insert_resource(tuning);

    let mut update = Schedule::default();
    update.add_systems(animation);
    update.add_systems(ambient_idle_system.after(animation));
    update.add_systems(patrol_system);
    update.add_systems(turret_system.after(animation));
    update.add_systems(projectile_spawner.after(turret_system));
    update.add_systems(projectile_system.after(projectile_spawner));
    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    info!(
        "simulating {} frames at dt={:.4}s",
        cli.frames, cli.dt
    );

    for frame in 0..cli.frames {
        update_world_time(&mut world, cli.dt);
        update.run(&mut world);

        // Demo host duties: bounce the player through the turret's sight and
        // poke the patroller now and then.
        let t = world.resource::<WorldTime>().elapsed;
        world.resource_mut::<PlayerTracker>().center.x = 700.0 + (t * 0.5).sin() * 400.0;
        if frame > 0 && frame % 240 == 0 {
            world.trigger(HitEvent { entity: patroller });
        }

        world.resource_mut::<Messages<SpawnProjectile>>().update();
        world.clear_trackers();
    }

    let mut projectiles = world.query::<&Projectile>();
    let live_projectiles = projectiles.iter(&world).count();
    let time = world.resource::<WorldTime>();
    info!(
        "done: {:.2}s simulated over {} frames, {} projectile(s) still in flight",
        time.elapsed, time.frame_count, live_projectiles
    );
}
