use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use ram_run::{logger, render::render, CLIArgs, Grid};

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    logger::init(args.verbose).map_err(|error| anyhow!("Failed to set up logger: {error}"))?;
    let corr_positions = ram_run::read_positions(&args.input_path).with_context(|| {
        format!(
            "Failed to read corrupted positions from given file({}).",
            args.input_path.display()
        )
    })?;
    let (width, height) = (args.map_width(), args.map_height());
    ram_run::check_positions(&corr_positions, width, height)
        .context("Given positions don't fit in map.")?;

    let start_time = Instant::now();
    let mut grid = Grid::new(&corr_positions, width, height);
    let max_time = corr_positions.len();
    let found = if args.linear {
        ram_run::find_critical_threshold_linear(&mut grid, max_time)
    } else {
        ram_run::find_critical_threshold(&mut grid, max_time)
    };
    log::info!(
        "Finder stopped at threshold {} of {} position(s).",
        found,
        max_time
    );
    let blocking_ind = ram_run::blocking_index(&mut grid, found, max_time);
    log::info!("Finding blocking position took {:?}.", start_time.elapsed());

    if args.render {
        grid.reset();
        ram_run::shortest_path(&mut grid, found);
        print!("{}", render(&grid, found + 1));
    }

    if let Some(pos) = blocking_ind.map(|ind| &corr_positions[ind]) {
        println!(
            "The first corrupted position that makes no path from {},{} to 0,0 exists is {}.",
            width - 1,
            height - 1,
            pos
        );
    } else {
        eprintln!(
            "There's no corrupted position can break the path from {},{} to 0,0.",
            width - 1,
            height - 1
        );
    }

    Ok(())
}
