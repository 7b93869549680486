//! Duck Dash entry point
//!
//! The browser build is driven from JavaScript through `platform::web`. The
//! native build runs a headless session with the demo autopilot.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use duck_dash::platform::{Autopilot, FixedTimestep, load_game};
    use duck_dash::sim::{GameEvent, GamePhase};

    env_logger::init();
    log::info!("Duck Dash (native) starting...");

    let args: Vec<String> = std::env::args().collect();
    let tuning_json = read_arg_file(&args, "--tuning");
    let levels_json = read_arg_file(&args, "--levels");

    let mut game = load_game(tuning_json.as_deref(), levels_json.as_deref());
    let mut timestep = FixedTimestep::new(game.tuning().tick_ms);
    let mut pilot = Autopilot::new();
    game.start_or_reset();

    // Feed simulated 60 Hz frames; at most ten minutes of play
    let frame_ms = 1000.0 / 60.0;
    let max_frames = 60 * 60 * 10;
    let mut frames = 0;

    while game.phase() == GamePhase::Playing && frames < max_frames {
        frames += 1;
        for _ in 0..timestep.accumulate(frame_ms) {
            pilot.drive(&mut game);
            match game.tick() {
                Some(GameEvent::LifeLost { lives }) => println!("Ouch! {} lives left", lives),
                Some(GameEvent::LevelAdvanced { level }) => println!("Level {}", level + 1),
                Some(GameEvent::GameOver) => println!("UM..."),
                Some(GameEvent::Won) => println!("YIPPEE!"),
                None => {}
            }
            if game.phase() != GamePhase::Playing {
                break;
            }
        }
    }

    let snapshot = game.snapshot();
    println!(
        "Finished in {} ticks: phase={}, level {}/{}, lives {}/{}",
        game.state().time_ticks,
        snapshot.phase.as_str(),
        snapshot.level_index + 1,
        snapshot.level_count,
        snapshot.lives,
        snapshot.max_lives
    );
}

/// Contents of the file named after `flag`, if given and readable
#[cfg(not(target_arch = "wasm32"))]
fn read_arg_file(args: &[String], flag: &str) -> Option<String> {
    let path = args
        .iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))?;

    match std::fs::read_to_string(path) {
        Ok(contents) => Some(contents),
        Err(e) => {
            log::warn!("Could not read {} {}: {}", flag, path, e);
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start, this is just to satisfy the compiler
}
