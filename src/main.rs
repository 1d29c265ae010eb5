//! Tumble headless demo
//!
//! Runs the sandbox core without a renderer: builds the reference scene
//! (three balls over a floor, two walls, and an angled platform) or a
//! seeded random ball rain, advances it at a fixed 60 Hz timestep, and logs
//! the outcome.
//!
//! Usage: `tumble [seed] [ball_count]`

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use tumble::consts::SIM_DT;
use tumble::{Scene, SimError};

/// Ticks to simulate (10 seconds of sim time).
const DEMO_TICKS: u32 = 600;

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        log::error!("demo failed: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), SimError> {
    let mut args = std::env::args().skip(1);
    let seed: Option<u64> = args.next().and_then(|s| s.parse().ok());
    let count: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(20);

    let mut scene = match seed {
        Some(seed) => ball_rain_scene(seed, count)?,
        None => reference_scene()?,
    };

    log::info!(
        "starting demo: {} balls, {} grounds, {DEMO_TICKS} ticks at {:.1} Hz",
        scene.balls().len(),
        scene.grounds().len(),
        1.0 / SIM_DT
    );

    let mut total_culled = 0;
    for tick in 0..DEMO_TICKS {
        total_culled += scene.tick(SIM_DT);

        if tick % 60 == 59 {
            log::debug!(
                "t={:.1}s: {} balls live, {total_culled} culled",
                (tick + 1) as f32 * SIM_DT,
                scene.balls().len()
            );
        }
    }

    log::info!(
        "demo finished: {} balls live, {total_culled} culled",
        scene.balls().len()
    );
    for (index, ball) in scene.balls().iter().enumerate() {
        log::info!(
            "  ball {index}: pos=({:.1}, {:.1}) speed={:.1}",
            ball.pos.x,
            ball.pos.y,
            ball.speed()
        );
    }

    Ok(())
}

/// The classic sandbox layout: three balls dropped onto a floor flanked by
/// walls, with an angled platform in the middle.
fn reference_scene() -> Result<Scene, SimError> {
    let mut scene = Scene::new();

    scene.add_ball(200.0, 100.0, 20.0)?;
    scene.add_ball(400.0, 200.0, 30.0)?;
    scene.add_ball(600.0, 150.0, 25.0)?;

    scene.add_ground(100.0, 500.0, 700.0, 500.0)?; // floor
    scene.add_ground(100.0, 500.0, 100.0, 300.0)?; // left wall
    scene.add_ground(700.0, 500.0, 700.0, 300.0)?; // right wall
    scene.add_ground(200.0, 400.0, 500.0, 200.0)?; // angled platform

    Ok(scene)
}

/// A deterministic rain of `count` balls over the floor, seeded for
/// reproducible runs.
fn ball_rain_scene(seed: u64, count: usize) -> Result<Scene, SimError> {
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut scene = Scene::new();

    scene.add_ground(100.0, 500.0, 700.0, 500.0)?;
    scene.add_ground(100.0, 500.0, 100.0, 300.0)?;
    scene.add_ground(700.0, 500.0, 700.0, 300.0)?;

    for _ in 0..count {
        let x = rng.random_range(140.0..660.0);
        let y = rng.random_range(20.0..250.0);
        let radius = rng.random_range(8.0..28.0);
        scene.add_ball(x, y, radius)?;
    }

    Ok(scene)
}
