// seedlist-generate: Generate a password candidate list from personal information.
//
// Seeds come from TOKEN arguments, --user-data, or the tokens of a --config
// file. Candidates are generated, capped, judged by the built-in heuristic
// and written one per line.
//
// Usage:
//   seedlist-generate [OPTIONS] [TOKEN...]
//
// Examples:
//   seedlist-generate John 1990 --method leet --max 5000
//   seedlist-generate --user-data 'John, 1990-01-01, @jdoe' --compress
//   seedlist-generate anna berg --pattern '[name]_[word][number][symbol]' --seed 7
//   seedlist-generate John --use-model --datasets rockyou.txt --model-path model.json

use std::path::PathBuf;

use clap::Parser;
use seedlist_cli::judge::HeuristicJudge;
use seedlist_cli::markov::{DEFAULT_ORDER, MarkovModel};
use seedlist_cli::output::{summary, write_list};
use seedlist_cli::{SeedArgs, build_config, fatal, init_tracing};
use seedlist_engine::{Generator, estimate};

#[derive(Parser)]
#[command(name = "seedlist-generate")]
#[command(about = "Generate password candidates from personal information")]
struct Cli {
    #[command(flatten)]
    seed: SeedArgs,

    /// Output file
    #[arg(short, long, default_value = "generated_passwords.txt")]
    output: PathBuf,

    /// Gzip the output (".gz" is appended to the file name)
    #[arg(long)]
    compress: bool,

    /// Password lists used to train the sequence model
    #[arg(long, value_name = "FILE", num_args = 1..)]
    datasets: Vec<PathBuf>,

    /// Cached sequence model: loaded if present, otherwise trained and saved here
    #[arg(long, value_name = "FILE")]
    model_path: Option<PathBuf>,

    /// Print the estimated candidate count and exit
    #[arg(long)]
    estimate_size: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.seed.verbose);

    let config = build_config(&cli.seed).unwrap_or_else(|e| fatal(&e.to_string()));

    if cli.estimate_size {
        let estimate = estimate(&config);
        println!(
            "Estimated candidates: {} (raw bound {}, cap {})",
            estimate.bounded(),
            estimate.raw(),
            estimate.max_count
        );
        return;
    }

    if (!cli.datasets.is_empty() || cli.model_path.is_some()) && !config.use_model {
        tracing::warn!("--datasets and --model-path have no effect without --use-model");
    }

    let seed = config.seed;
    let use_model = config.use_model;
    let mut generator = Generator::new(config).unwrap_or_else(|e| fatal(&e.to_string()));
    if use_model {
        let model = MarkovModel::load_or_train(
            cli.model_path.as_deref(),
            &cli.datasets,
            DEFAULT_ORDER,
            seed,
        )
        .unwrap_or_else(|e| fatal(&e.to_string()));
        generator = generator.with_model(Box::new(model));
    }

    let report = generator.run(&HeuristicJudge);
    if report.empty_input {
        fatal("no usable seed tokens (give TOKEN arguments, --user-data or --config)");
    }

    let written = write_list(&report.passwords, &cli.output, cli.compress)
        .unwrap_or_else(|e| fatal(&e.to_string()));

    println!(
        "Generated {} passwords -> {}",
        written.count,
        written.path.display()
    );
    eprintln!("  {}", summary(&report, &written));
}
