//! Layered-map pathfinding demo.
//!
//! Run: cargo run --bin pathdemo -- [seed] [max_iterations] [floor]
//!
//! Set `RUST_LOG=delve_paths=trace` to watch every expansion.

use delve_demos::{DemoArgs, FLOORS, LayeredMap, RUBBLE, USAGE};
use delve_paths::PathFinder;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let args = match DemoArgs::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    };

    let mut map = match LayeredMap::parse(&FLOORS) {
        Ok(map) => map,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if let Some(seed) = args.seed {
        let mut rng = StdRng::seed_from_u64(seed);
        map.scatter_rubble(&mut rng, RUBBLE);
        tracing::info!(seed, "scattered rubble");
    }

    let Some((start, goal)) = map.markers(args.floor) else {
        eprintln!("Error: floor {} has no start/goal markers", args.floor);
        std::process::exit(1);
    };

    let mut pf = PathFinder::with_capacity(map.bounds().layer(args.floor).len());
    let path = pf.find_path(&map, start, goal, args.max_iterations);
    let stats = pf.last_stats();
    tracing::info!(?stats, %start, %goal, "search finished");

    print!("{}", map.render_floor(args.floor, path.as_deref().unwrap_or(&[])));
    match path {
        Some(path) => println!("route: {} steps", path.len()),
        None => println!("no route ({:?} after {} iterations)", stats.end, stats.iterations),
    }
}
