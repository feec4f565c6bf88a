use multigraph::graph::Graph;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn main() {
    let mut input: Option<String> = None;
    let mut random: Option<(usize, usize)> = None;
    let mut seed: Option<u64> = None;

    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--random" => {
                let v = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                let e = args.get(i + 2).unwrap_or_else(|| usage_and_exit(2));
                random = Some((
                    v.parse().unwrap_or_else(|_| usage_and_exit(2)),
                    e.parse().unwrap_or_else(|_| usage_and_exit(2)),
                ));
                i += 3;
            }
            "--seed" => {
                let v = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                seed = Some(v.parse().unwrap_or_else(|_| usage_and_exit(2)));
                i += 2;
            }
            "--help" | "-h" => usage_and_exit(0),
            arg if arg.starts_with("--") => usage_and_exit(2),
            arg => {
                if input.is_some() {
                    usage_and_exit(2);
                }
                input = Some(arg.to_string());
                i += 1;
            }
        }
    }

    let graph = match (random, input) {
        (Some((v, e)), None) => {
            let mut rng = match seed {
                Some(s) => SmallRng::seed_from_u64(s),
                None => SmallRng::seed_from_u64(rand::rng().random()),
            };
            Graph::with_random_edges(v, e, &mut rng)
        }
        (None, Some(path)) if path == "-" => {
            Graph::from_reader(std::io::stdin().lock()).unwrap_or_else(|e| {
                eprintln!("error reading graph from stdin: {e}");
                std::process::exit(1);
            })
        }
        (None, Some(path)) => Graph::load_from_file(&path).unwrap_or_else(|e| {
            eprintln!("error reading graph from {path}: {e}");
            std::process::exit(1);
        }),
        _ => usage_and_exit(2),
    };

    print!("{graph}");
}

fn usage_and_exit(code: i32) -> ! {
    eprintln!(
        "Usage:\n  multigraph FILE\n  multigraph -\n  multigraph --random V E [--seed SEED]\n\nReads a graph as whitespace-separated integers (V E, then E vertex pairs)\nand prints it, or builds a uniformly random graph of V vertices and E edges.\n\nOptions:\n  --random V E    Build a random graph instead of reading one\n  --seed SEED     Seed the random generator for reproducible output\n  --help          Show this message\n"
    );
    std::process::exit(code)
}
