use calc::commands::run::RunOptions;
use calc::consts::DEFAULT_HISTORY_LEN;
use calc::models::Operation;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "calc",
    about = "Four-function integer calculator with an operation history",
    long_about = None,
    version = env!("CARGO_PKG_VERSION"),
    long_version = concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\n",
        "Build Information:\n",
        "  Date:           ", env!("VERGEN_BUILD_DATE"), "\n",
        "  Commit SHA:     ", env!("VERGEN_GIT_SHA"), "\n",
        "  Dirty:          ", env!("VERGEN_GIT_DIRTY"), "\n",
        "  Rustc Version:  ", env!("VERGEN_RUSTC_SEMVER"), "\n"
    ),
    disable_help_subcommand = true
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). CALC_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct Operands {
    #[arg(allow_negative_numbers = true)]
    lhs: i32,
    #[arg(allow_negative_numbers = true)]
    rhs: i32,
    /// Print the history record instead of the bare result
    #[arg(long)]
    record: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Add two integers (wraps on overflow).
    Add(Operands),
    /// Subtract RHS from LHS (wraps on overflow).
    Sub(Operands),
    /// Multiply two integers (wraps on overflow).
    Mul(Operands),
    /// Divide LHS by RHS, truncating toward zero.
    Div(Operands),

    /// Evaluate a script of operations, one `<op> <a> <b>` per line.
    ///
    /// Reads from SCRIPT, or from stdin when SCRIPT is omitted or `-`.
    /// Blank lines and lines starting with `#` are ignored.
    Run {
        #[arg(value_hint = clap::ValueHint::FilePath)]
        script: Option<PathBuf>,
        /// Report failing lines and continue instead of stopping
        #[arg(long)]
        keep_going: bool,
        /// Print the most recent history records after evaluation
        #[arg(long)]
        history: bool,
        /// Number of history records to show
        #[arg(long, default_value_t = DEFAULT_HISTORY_LEN)]
        last: usize,
        /// Output results and history as JSON
        #[arg(long)]
        json: bool,
    },
}

fn eval(op: Operation, args: Operands) -> Result<(), calc::exceptions::CalcError> {
    calc::commands::eval::run(op, args.lhs, args.rhs, args.record)
}

fn main() {
    let cli = Cli::parse();
    calc::logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Add(args) => eval(Operation::Add, args),
        Commands::Sub(args) => eval(Operation::Subtract, args),
        Commands::Mul(args) => eval(Operation::Multiply, args),
        Commands::Div(args) => eval(Operation::Divide, args),
        Commands::Run {
            script,
            keep_going,
            history,
            last,
            json,
        } => calc::commands::run::run(RunOptions {
            script,
            keep_going,
            show_history: history,
            last,
            json,
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
