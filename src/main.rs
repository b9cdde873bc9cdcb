use std::fmt;
use std::process::ExitCode;
use std::thread;

use anyhow::Context;
use tracing::debug;
use tracing::info;
use tracing_subscriber::EnvFilter;

use torus_life::config::Config;
use torus_life::config::GameArea;
use torus_life::error::SizeError;
use torus_life::events::Control;
use torus_life::render::render_frame;
use torus_life::render::render_status;
use torus_life::terminal::Terminal;
use torus_life::world::World;

/// How the game ended, when it ended well
#[derive(Debug)]
enum Exit {
    Quit,
    Interrupted,
}

impl fmt::Display for Exit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exit::Quit => write!(f, "Game terminated by user."),
            Exit::Interrupted => write!(f, "The game was ended with Ctrl+C."),
        }
    }
}

fn run(config: &Config) -> anyhow::Result<Exit> {
    let mut term = Terminal::new().context("Failed to set up the terminal")?;

    let (cols, rows) = term.size();
    let area = GameArea::from_terminal(rows, cols, config)?;
    let mut world = World::from_area(area, None);

    thread::sleep(config.startup_delay);

    loop {
        render_frame(world.grid(), &mut term).context("Failed to draw frame")?;

        world.step();

        if world.generation() % config.status_interval == 0 {
            debug!(
                generation = world.generation(),
                alive = world.alive_count(),
                "status"
            );
            render_status(&world, &mut term).context("Failed to draw status line")?;
        }

        match term.poll_control(config.tick).context("Failed to read input")? {
            Some(Control::Quit) => return Ok(Exit::Quit),
            Some(Control::Interrupt) => return Ok(Exit::Interrupted),
            Some(Control::Resize { .. }) | None => {}
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // The terminal is restored by the time `run` returns
    match run(&Config::default()) {
        Ok(exit) => {
            info!(?exit, "game over");
            println!("\n{exit}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            match err.downcast_ref::<SizeError>() {
                Some(size) => println!("\n{size}"),
                None => println!("\nError: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
