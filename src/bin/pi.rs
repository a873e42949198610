use mt_random::utils::{init_tracing, RandomSeed};
use mt_random::{RandomSource, UniformReal};
use serde::Deserialize;

const USAGE: &str = "
Usage:
  pi [--seed=<seed>] <samples>
  pi --help

Options:
  -h --help         Show this screen.
  -s --seed=<seed>  Seed for the random number generator, decimal or 0x
                    hexadecimal [default: 42].
";

#[derive(Debug, Deserialize)]
struct Args {
    flag_seed: RandomSeed,
    arg_samples: u64,
}

fn main() -> Result<(), mt_random::Error> {
    init_tracing();
    let args: Args = docopt::Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    let between = UniformReal::new(-1.0, 1.0)?;
    let mut rng = RandomSource::new(args.flag_seed.value);

    println!("calculating pi with {} samples ...", args.arg_samples);
    let mut count = 0u64;
    for _ in 0 .. args.arg_samples {
        let x = rng.sample(&between);
        let y = rng.sample(&between);
        if x * x + y * y <= 1.0 {
            count += 1;
        }
    }
    println!("pi = {}", 4. * (count as f64) / (args.arg_samples as f64));
    Ok(())
}
