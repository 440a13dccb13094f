use std::{io::stdout, thread};

use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use golrs_grid::{Game, Grid, Options, Pattern, RuleEngine, View};

fn initial_grid(options: &Options) -> Result<Grid, Box<dyn std::error::Error>> {
    let (width, height) = (options.width, options.height);
    let grid = match (&options.pattern, options.seed) {
        (Some(path), _) => {
            let pattern = Pattern::load(path)?;
            let mut grid = Grid::empty(width, height)?;
            pattern.stamp(&mut grid, options.origin())?;
            info!(path = %path.display(), cells = pattern.actives().len(), "pattern loaded");
            grid
        }
        (None, Some(seed)) => Grid::with_rng(width, height, &mut StdRng::seed_from_u64(seed))?,
        (None, None) => Grid::new(width, height)?,
    };
    Ok(grid)
}

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let options = Options::parse();
    info!(
        width = options.width,
        height = options.height,
        generations = options.generations,
        seed = options.seed,
        "starting"
    );

    let mut game = Game::new(initial_grid(&options)?, RuleEngine::default());
    let mut view = if options.plain {
        View::plain(stdout().lock())
    } else {
        View::new(stdout().lock())
    };

    for _ in 0..options.generations {
        view.show(&game)?;
        if options.stop_on_cycle && game.cycle().is_some() {
            break;
        }
        game.play_round()?;
        thread::sleep(options.delay());
    }

    info!(
        generation = game.generation(),
        alive = game.grid().alive_count(),
        cycle = ?game.cycle(),
        "done"
    );
    Ok(())
}
