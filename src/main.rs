use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use gh_open::{Error, browser, diagnostics};
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the log filter, e.g. `GH_OPEN_LOG=debug`.
const LOG_ENV: &str = "GH_OPEN_LOG";

#[derive(Parser)]
#[command(
    name = "gh-open",
    about = "Open the hosted web page of a file or directory in a git repository",
    version
)]
struct Cli {
    /// Branch, tag, or commit to link to (defaults to the current commit)
    #[arg(short, long, default_value = "")]
    branch: String,

    /// Print the resolution as JSON instead of opening a browser
    #[arg(long)]
    json: bool,

    /// Line number or range, e.g. 10 or 10-20
    #[arg(short, long, default_value = "")]
    line: String,

    /// File or directory inside a git working copy
    object: PathBuf,

    /// Print the URL instead of opening a browser
    #[arg(short, long)]
    print: bool,

    /// Log each resolution step to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        },
    };

    init_logging(cli.verbose);

    return match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            diagnostics::print_error(&e);
            ExitCode::FAILURE
        },
    };
}

/// Install the stderr log subscriber. `GH_OPEN_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let fallback = if verbose { "gh_open=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| return EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Resolve the object and print or open its URL.
///
/// # Errors
///
/// Returns any resolution error, `Error::Json` if the resolution cannot be
/// serialized, or `Error::BrowserOpenFailed` when opening the URL fails.
fn run(cli: &Cli) -> Result<(), Error> {
    let resolution = gh_open::resolve(&cli.object, &cli.branch, &cli.line)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
        return Ok(());
    }
    if cli.print {
        println!("{}", resolution.url);
        return Ok(());
    }
    return browser::open_url(&resolution.url);
}
