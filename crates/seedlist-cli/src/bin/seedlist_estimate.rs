// seedlist-estimate: Upper bound on the candidates a run would generate.
//
// Accepts the same seed and run options as seedlist-generate and prints the
// per-stream breakdown without generating anything.
//
// Usage:
//   seedlist-estimate [OPTIONS] [TOKEN...]
//
// Options (in addition to the shared seed options):
//   --json   Print the breakdown as JSON

use clap::Parser;
use seedlist_cli::{SeedArgs, build_config, fatal, init_tracing};
use seedlist_engine::{StreamSource, estimate};

#[derive(Parser)]
#[command(name = "seedlist-estimate")]
#[command(about = "Estimate the number of password candidates for a run")]
struct Cli {
    #[command(flatten)]
    seed: SeedArgs,

    /// Print the breakdown as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.seed.verbose);

    let config = build_config(&cli.seed).unwrap_or_else(|e| fatal(&e.to_string()));
    let estimate = estimate(&config);

    if cli.json {
        let value = serde_json::json!({
            "method": config.method.name(),
            "estimate": &estimate,
            "raw": estimate.raw(),
            "bounded": estimate.bounded(),
        });
        let text = serde_json::to_string_pretty(&value).unwrap_or_else(|e| fatal(&e.to_string()));
        println!("{text}");
        return;
    }

    println!("method: {}", config.method);
    println!("tokens: {}", estimate.tokens);
    for source in StreamSource::ALL {
        println!("  {:<22} {}", source.name(), estimate.stream(source));
    }
    println!("  {:<22} {}", "total (raw)", estimate.raw());
    println!(
        "  {:<22} {}",
        format!("total (max {})", estimate.max_count),
        estimate.bounded()
    );
}
