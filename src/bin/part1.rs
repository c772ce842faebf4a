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
    let corrupt_size = args.corrupt_size.unwrap_or(corr_positions.len());
    log::info!(
        "Searching {}x{} map with {} corrupted position(s).",
        width,
        height,
        corrupt_size
    );
    let min_exit_steps_n = ram_run::shortest_path(&mut grid, corrupt_size);
    log::info!("Search took {:?}.", start_time.elapsed());

    if args.render {
        print!("{}", render(&grid, corrupt_size));
    }

    if let Some(min_exit_steps_n) = min_exit_steps_n {
        println!(
            "It takes at least {} steps moving from {},{} to 0,0 after corrupting {} positions.",
            min_exit_steps_n,
            width - 1,
            height - 1,
            corrupt_size
        );
    } else {
        eprintln!(
            "There's no path from {},{} to 0,0 after corrupting {} positions.",
            width - 1,
            height - 1,
            corrupt_size
        );
    }

    Ok(())
}
