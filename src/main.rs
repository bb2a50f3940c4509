mod cli;

use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use common::{Board, SearchTree, depth_first_search_with};

use crate::cli::{Args, render_solution};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    args.apply_color_choice();

    let start = Instant::now();

    let mut tree = SearchTree::new(Board::initial());
    let solution = depth_first_search_with(&mut tree, &Board::goal(), &args.search_options())
        .context("failed to solve the initial board")?;

    println!(
        "Found solution in {} seconds",
        start.elapsed().as_secs_f64()
    );
    println!("at depth: {}", tree.depth(solution.goal));
    log::info!(
        "expanded {} boards, skipped {} duplicates, peak frontier {}",
        solution.stats.expanded,
        solution.stats.duplicates_skipped,
        solution.stats.peak_frontier
    );

    print!("{}", render_solution(&tree, solution.goal, args.order));
    Ok(())
}
