//! Counts near-duplicate points in random point clouds using the quadtree.

use clap::{App, Arg, ArgMatches};
use quadtree_index::render::{render_tree, render_tree_short};
use quadtree_index::simulation::{Simulation, SimulationConfig};
use std::str::FromStr;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq)]
enum PrintTree {
    No,
    Full,
    Short,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let matches = App::new("quadtree-sim")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Counts overlapping points in random point clouds.")
        .arg(
            Arg::with_name("CONFIG")
                .short("c")
                .long("config")
                .takes_value(true)
                .help("TOML file with the simulation parameters"),
        )
        .arg(
            Arg::with_name("ROUNDS")
                .short("r")
                .long("rounds")
                .takes_value(true)
                .help("Number of rounds to run"),
        )
        .arg(
            Arg::with_name("POINTS")
                .short("n")
                .long("points")
                .takes_value(true)
                .help("Points generated per round"),
        )
        .arg(
            Arg::with_name("SEED")
                .short("s")
                .long("seed")
                .takes_value(true)
                .help("Seed of the point generator"),
        )
        .arg(
            Arg::with_name("PRINT_TREE")
                .long("print-tree")
                .help("Print the tree of the last round"),
        )
        .arg(
            Arg::with_name("PRINT_TREE_SHORT")
                .long("print-tree-short")
                .conflicts_with("PRINT_TREE")
                .help("Print the points of every node of the last round's tree"),
        )
        .get_matches();

    let mut config = match matches.value_of("CONFIG") {
        Some(path) => SimulationConfig::from_file(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(rounds) = parse_arg(&matches, "ROUNDS")? {
        config.rounds = rounds;
    }
    if let Some(points) = parse_arg(&matches, "POINTS")? {
        config.points = points;
    }
    if let Some(seed) = parse_arg(&matches, "SEED")? {
        config.seed = Some(seed);
    }
    let print = if matches.is_present("PRINT_TREE") {
        PrintTree::Full
    } else if matches.is_present("PRINT_TREE_SHORT") {
        PrintTree::Short
    } else {
        PrintTree::No
    };

    info!("Quadtree simulation v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "  World: {}x{}, {} points, {} rounds, capacity {}",
        config.width, config.height, config.points, config.rounds, config.capacity
    );

    let rounds = config.rounds;
    let mut sim = Simulation::new(config)?;
    for round in 0..rounds {
        let last = round + 1 == rounds;
        sim.run_round_with(round, |tree| {
            if !last {
                return;
            }
            match print {
                PrintTree::Full => print!("{}", render_tree(tree)),
                PrintTree::Short => print!("{}", render_tree_short(tree)),
                PrintTree::No => {}
            }
        });
    }

    Ok(())
}

fn parse_arg<T>(matches: &ArgMatches<'_>, name: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    matches
        .value_of(name)
        .map(|v| {
            v.parse::<T>()
                .map_err(|err| anyhow::anyhow!("invalid value {:?} for {}: {}", v, name, err))
        })
        .transpose()
}
