use mt_random::utils::{init_tracing, RandomSeed};
use mt_random::RandomSource;
use serde::Deserialize;

const USAGE: &str = "
Print uniform draws in [0, 1) for a seed. Values are written with enough
digits to round-trip, so they can be diffed against another implementation.

Usage:
  draw [--seed=<seed>] [--count=<n>] [--summary]
  draw --help

Options:
  -h --help          Show this screen.
  -s --seed=<seed>   Seed, decimal or 0x hexadecimal. Negative values wrap
                     like a C int seed [default: 42].
  -n --count=<n>     Number of values to draw [default: 10].
  --summary          Print count, mean, min and max instead of the values.
";

#[derive(Debug, Deserialize)]
struct Args {
    flag_seed: RandomSeed,
    flag_count: u64,
    flag_summary: bool,
}

fn main() {
    init_tracing();
    let args: Args = docopt::Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    let source = RandomSource::new(args.flag_seed.value);
    let draws = source.take(args.flag_count as usize);

    if !args.flag_summary {
        for v in draws {
            println!("{:?}", v);
        }
        return;
    }

    let (mut sum, mut min, mut max) = (0.0, f64::INFINITY, f64::NEG_INFINITY);
    for v in draws {
        sum += v;
        min = min.min(v);
        max = max.max(v);
    }
    println!("seed  = {}", args.flag_seed.value);
    println!("count = {}", args.flag_count);
    if args.flag_count > 0 {
        println!("mean  = {:?}", sum / args.flag_count as f64);
        println!("min   = {:?}", min);
        println!("max   = {:?}", max);
    }
}
