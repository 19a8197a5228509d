use stepstat::{ day_action_info, training_info, errors::StepStatError };

use colored::*;
use structopt::StructOpt;

/// Body metrics shared by every subcommand
#[derive(StructOpt, Debug)]
struct Body {
    /// Weight in kilograms
    #[structopt(short = "w", long = "weight", env = "STEPSTAT_WEIGHT")]
    weight: f64,

    /// Height in centimetres
    #[structopt(short = "H", long = "height", env = "STEPSTAT_HEIGHT")]
    height: f64,
}

/// Summarise a walking or running session.
///
/// Records are comma separated. Durations look like `45m` or `1h30m`.
/// Activity labels are `Бег` (running) and `Ходьба` (walking).
#[derive(StructOpt, Debug)]
#[structopt(name = "stepstat")]
enum Opt {
    /// Daily steps: RECORD is `steps,duration`, e.g. `6000,45m`
    #[structopt(name = "day")]
    Day {
        #[structopt(name = "RECORD")]
        record: String,

        #[structopt(flatten)]
        body: Body,
    },

    /// Training session: RECORD is `steps,activity,duration`, e.g. `6000,Бег,45m`
    #[structopt(name = "training")]
    Training {
        #[structopt(name = "RECORD")]
        record: String,

        #[structopt(flatten)]
        body: Body,
    },
}

// Log filter comes from `STEPSTAT_LOG`, then `RUST_LOG`, defaulting to `warn`.
fn init_logging() {
    let log_env = std::env::var("STEPSTAT_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_new(&log_env)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
}

fn run(opt: &Opt) -> Result<String, StepStatError> {
    match opt {
        Opt::Day { record, body } => day_action_info(record, body.weight, body.height),
        Opt::Training { record, body } => training_info(record, body.weight, body.height),
    }
}

fn main() {
    init_logging();
    let opt = Opt::from_args();

    match run(&opt) {
        Ok(summary) => println!("{}", summary),
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}
