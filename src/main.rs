use clap::{ArgAction, Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use unitfmt::UnitKind;
use unitfmt::commands::config_cmd::ConfigOptions;
use unitfmt::commands::format_cmd::{FormatOptions, Target};
use unitfmt::commands::{execute_config, execute_format};
use unitfmt::error::AppError;

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("UNITFMT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bytes(args) => {
            let binary = if args.decimal {
                Some(false)
            } else if args.binary {
                Some(true)
            } else {
                None
            };
            execute_format(FormatOptions {
                target: Target::Bytes { binary },
                values: args.output.values,
                strict: args.output.strict,
                json: args.output.json,
            })?;
        }
        Commands::Grams(args) => execute_metric(UnitKind::Gram, args)?,
        Commands::Meters(args) => execute_metric(UnitKind::Meter, args)?,
        Commands::Config(args) => {
            let options = ConfigOptions {
                show_path: args.path,
                edit: args.edit,
                decimals: args.decimals,
                binary: args.binary,
                strict: args.strict,
            };
            execute_config(options)?;
        }
    }

    Ok(())
}

fn execute_metric(unit: UnitKind, args: MetricArgs) -> Result<(), AppError> {
    execute_format(FormatOptions {
        target: Target::Metric { unit, decimals: args.decimals, bias: args.bias },
        values: args.output.values,
        strict: args.output.strict,
        json: args.output.json,
    })?;
    Ok(())
}

#[derive(Parser)]
#[command(name = "unitfmt", version, about = "Format byte sizes, grams and meters for humans.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format byte counts (1024 -> 1.0 kB).
    #[command(visible_alias = "b")]
    Bytes(BytesArgs),
    /// Format masses in grams (0.001 -> 1.00 mg).
    #[command(visible_alias = "g")]
    Grams(MetricArgs),
    /// Format lengths in meters (0.01 -> 1.00 cm).
    #[command(visible_alias = "m")]
    Meters(MetricArgs),
    /// Manage unitfmt configuration (default precision, byte base, strict mode).
    #[command(visible_alias = "cfg")]
    Config(ConfigArgs),
}

#[derive(Args)]
struct OutputArgs {
    /// Values to format (read from stdin when omitted).
    #[arg(value_name = "VALUE", num_args = 0.., allow_negative_numbers = true)]
    values: Vec<String>,

    /// Scale by a zero bias and reject negative byte counts.
    #[arg(long = "strict", action = ArgAction::SetTrue)]
    strict: bool,

    /// Print a JSON array of {input, output} objects.
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,
}

#[derive(Args)]
struct BytesArgs {
    /// Divide by 1000 instead of 1024.
    #[arg(long = "decimal", action = ArgAction::SetTrue, conflicts_with = "binary")]
    decimal: bool,

    /// Divide by 1024 (default unless configured otherwise).
    #[arg(long = "binary", action = ArgAction::SetTrue)]
    binary: bool,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
struct MetricArgs {
    /// Number of fractional digits.
    #[arg(short = 'd', long = "decimals", value_name = "N", allow_negative_numbers = true)]
    decimals: Option<i32>,

    /// Multiply values by this factor first (e.g. 1e3 for kilograms).
    #[arg(long = "bias", value_name = "FACTOR", allow_negative_numbers = true)]
    bias: Option<f64>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
struct ConfigArgs {
    /// Show the configuration file path.
    #[arg(long = "path", action = ArgAction::SetTrue)]
    path: bool,

    /// Open the configuration file in $EDITOR.
    #[arg(long = "edit", action = ArgAction::SetTrue)]
    edit: bool,

    /// Store the default number of fractional digits.
    #[arg(long = "decimals", value_name = "N", allow_negative_numbers = true)]
    decimals: Option<i32>,

    /// Store the default byte base (true = 1024, false = 1000).
    #[arg(long = "binary", value_name = "BOOL")]
    binary: Option<bool>,

    /// Store whether strict mode is on.
    #[arg(long = "strict", value_name = "BOOL")]
    strict: Option<bool>,
}
