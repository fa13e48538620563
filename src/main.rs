use anyhow::{Context, Result};
use argh::FromArgs;
use sortbench_util::{generate_vec_seeded, printer, stat, GenMode};
use tracing_subscriber::EnvFilter;

#[derive(FromArgs, Debug)]
/// Generate and inspect benchmark input vectors
struct Args {
    /// number of elements to generate
    #[argh(option, short = 'n', default = "100")]
    len: usize,

    /// distribution of the values: random, sorted or rev-sorted
    #[argh(option, short = 'm', default = "GenMode::Random")]
    mode: GenMode,

    /// seed for the random mode, taken from OS entropy when omitted
    #[argh(option, short = 's')]
    seed: Option<u64>,

    /// number of leading and trailing elements to display
    #[argh(option, short = 'w', default = "sortbench_util::printer::HALF_WIDTH")]
    width: usize,

    /// print statistics as JSON
    #[argh(switch)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Args = argh::from_env();
    tracing::info!(?args, "starting");

    let data: Vec<usize> = generate_vec_seeded(args.len, args.mode, args.seed)
        .with_context(|| format!("unable to generate {} vector", args.mode))?;
    printer::write_with_half_width(&mut std::io::stdout().lock(), &data, args.width)
        .context("unable to write vector")?;

    let stats = stat(&data).context("unable to compute statistics")?;
    if args.json {
        println!("{}", serde_json::to_string(&stats)?);
    } else {
        println!("min: {}, max: {}, avg: {:.3}", stats.min, stats.max, stats.avg);
    }

    Ok(())
}
