//! Headless sapling growth simulation
//!
//! Plants a square of mixed saplings on grass and ticks them until the
//! tick budget runs out, then reports what grew.
//!
//! Usage:
//!     grow_sim [OPTIONS]
//!
//! Options:
//!     -t, --ticks <N>         Number of ticks to run (default: 400)
//!     --seed <SEED>           Seed for the RNG (default: 12345)
//!     -s, --size <W>          Side length of the planted square (default: 12)
//!     -c, --config <PATH>     Growth config JSON (default: built-in)
//!     -h, --help              Show this help message

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use arbor::core::types::{IVec2, IVec3};
use arbor::sapling::{GrowthConfig, GrowthResult, SaplingGrowth, TickOutcome, Variant};
use arbor::structure::{GeneratorSet, StructureKind, TrunkGenerator};
use arbor::world::{blocks, GridWorld, GrowthRng, Terrain};

fn print_help() {
    eprintln!("grow_sim - Headless sapling growth simulation");
    eprintln!();
    eprintln!("Usage: grow_sim [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("    -t, --ticks <N>         Number of ticks to run (default: 400)");
    eprintln!("    --seed <SEED>           Seed for the RNG (default: 12345)");
    eprintln!("    -s, --size <W>          Side length of the planted square (default: 12)");
    eprintln!("    -c, --config <PATH>     Growth config JSON (default: built-in)");
    eprintln!("    -h, --help              Show this help message");
    eprintln!();
    eprintln!("Example:");
    eprintln!("    grow_sim --ticks 1000 --seed 42");
    eprintln!("    RUST_LOG=debug grow_sim -s 4 -c growth.json");
}

#[derive(Debug)]
struct Args {
    ticks: u32,
    seed: u64,
    size: i32,
    config: Option<PathBuf>,
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut ticks: u32 = 400;
    let mut seed: u64 = 12345;
    let mut size: i32 = 12;
    let mut config: Option<PathBuf> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-t" | "--ticks" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --ticks".to_string());
                }
                ticks = args[i]
                    .parse()
                    .map_err(|_| format!("Invalid tick count: {}", args[i]))?;
            }
            "--seed" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --seed".to_string());
                }
                seed = args[i]
                    .parse()
                    .map_err(|_| format!("Invalid seed: {}", args[i]))?;
            }
            "-s" | "--size" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --size".to_string());
                }
                size = args[i]
                    .parse()
                    .map_err(|_| format!("Invalid size: {}", args[i]))?;
                if size < 1 {
                    return Err("Size must be at least 1".to_string());
                }
            }
            "-c" | "--config" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --config".to_string());
                }
                config = Some(PathBuf::from(&args[i]));
            }
            arg => {
                return Err(format!("Unknown option: {}", arg));
            }
        }
        i += 1;
    }

    Ok(Args {
        ticks,
        seed,
        size,
        config,
    })
}

/// Trunk generator for every structure kind, wide for the 2x2 families
fn trunk_generators() -> GeneratorSet {
    let mut set = GeneratorSet::new();
    for kind in StructureKind::all() {
        let generator = match kind {
            StructureKind::HugeFir | StructureKind::Redwood => TrunkGenerator::wide(12, 8),
            StructureKind::BigAutumn(_) => TrunkGenerator::narrow(8, 4),
            _ => TrunkGenerator::narrow(4, 3),
        };
        set.register(kind, generator);
    }
    set
}

#[derive(Debug, Default)]
struct Tally {
    marked: u32,
    grown: u32,
    obstructed: u32,
    stalled: u32,
    uprooted: u32,
}

fn main() {
    arbor::core::logging::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_help();
            std::process::exit(1);
        }
    };

    let config = match &args.config {
        Some(path) => match GrowthConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: failed to load {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => GrowthConfig::default(),
    };

    let growth = match SaplingGrowth::new(config, trunk_generators()) {
        Ok(growth) => growth,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut world = GridWorld::new();
    let half = args.size / 2 + 2;
    world.fill_layer(0, IVec2::splat(-half), IVec2::splat(half), blocks::GRASS);

    // Plant in pairs of rows so needle variants get a chance to cluster
    let mut planted = 0;
    for z in 0..args.size {
        for x in 0..args.size {
            let variant = Variant::ALL[rng.next_below(Variant::ALL.len() as u32) as usize];
            let variant = if z % 2 == 1 {
                // Repeat the row above for needle variants
                let above = IVec3::new(x - args.size / 2, 1, z - 1 - args.size / 2);
                growth
                    .sapling_at(&world, above)
                    .map(|s| s.variant)
                    .ok()
                    .filter(|v| matches!(v, Variant::Fir | Variant::Redwood))
                    .unwrap_or(variant)
            } else {
                variant
            };
            let pos = IVec3::new(x - args.size / 2, 1, z - args.size / 2);
            if growth.plant(&mut world, pos, variant) {
                planted += 1;
            }
        }
    }

    log::info!(
        "Planted {} saplings on a {}x{} plot, running {} ticks (seed {})",
        planted,
        args.size,
        args.size,
        args.ticks,
        args.seed
    );

    let start = Instant::now();
    let mut tally = Tally::default();

    for tick in 0..args.ticks {
        let saplings = world.positions_of(growth.sapling_block());
        if saplings.is_empty() {
            log::info!("No saplings left after {} ticks", tick);
            break;
        }

        for pos in saplings {
            // An earlier sapling's tree may have replaced this one
            if world.block_id(pos) != growth.sapling_block() {
                continue;
            }
            match growth.on_tick(&mut world, pos, &mut rng) {
                Ok(TickOutcome::Marked) => tally.marked += 1,
                Ok(TickOutcome::Growth(GrowthResult::Grown(_))) => tally.grown += 1,
                Ok(TickOutcome::Growth(GrowthResult::Obstructed(_))) => tally.obstructed += 1,
                Ok(TickOutcome::Growth(GrowthResult::NoStructure)) => tally.stalled += 1,
                Ok(TickOutcome::Uprooted(_)) => tally.uprooted += 1,
                Ok(_) => {}
                Err(e) => log::warn!("Tick {} at {}: {}", tick, pos, e),
            }
        }
    }

    let remaining = world.positions_of(growth.sapling_block()).len();
    let elapsed = start.elapsed();

    log::info!("Finished in {:.1}ms", elapsed.as_secs_f64() * 1000.0);
    println!("Saplings planted:   {}", planted);
    println!("Marked:             {}", tally.marked);
    println!("Trees grown:        {}", tally.grown);
    println!("Obstructed:         {}", tally.obstructed);
    println!("Lone redwood ticks: {}", tally.stalled);
    println!("Uprooted:           {}", tally.uprooted);
    println!("Saplings remaining: {}", remaining);
    println!("Log blocks:         {}", world.positions_of(blocks::LOG).len());
}
