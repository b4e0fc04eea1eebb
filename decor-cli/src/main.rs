//! Decor CLI - command-line front end for the record wrappers
//!
//! This binary provides:
//! - say: format free text with bold/italic/shout
//! - search: full name for a username, optionally formatted and gated
//! - lookup: one record as JSON or CSV, optionally gated
//! - list: every record as JSON lines or CSV

mod config;

use clap::{Args, Parser, Subcommand, ValueEnum};
use decor_records::{DecorError, RecordStore};
use decor_wrap::{
    decorate_all, BoxedOp, CredentialSource, CsvOptions, FixedCredential, Gate, JsonWrapper,
    StdinCredentials, Style, WrapConfig,
};
use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "decor")]
#[command(about = "Formatted, gated, and serialized lookups over the person table")]
#[command(version)]
struct Cli {
    /// TOML file with [gate] and [csv] settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Credential to present to the gate instead of prompting on stdin
    #[arg(long, global = true)]
    credential: Option<String>,
    /// Log wrapper activity to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format text with one or more styles
    ///
    /// Styles apply in decorator order: the first one listed is outermost.
    ///
    /// Examples:
    ///   decor say hello --style bold --style shout    # <b>HELLO!!!</b>
    ///   decor say hello --style italic
    Say {
        /// Text to format
        text: String,
        /// Style to apply (repeatable)
        #[arg(long = "style", value_enum)]
        styles: Vec<StyleArg>,
    },
    /// Look up the full name for a username
    ///
    /// Examples:
    ///   decor search fred
    ///   decor search barney --style bold --auth
    Search {
        /// Username to find
        username: String,
        /// Style to apply to the full name (repeatable)
        #[arg(long = "style", value_enum)]
        styles: Vec<StyleArg>,
        /// Require the secret before searching
        #[arg(long)]
        auth: bool,
    },
    /// Print one record by 0-based index
    ///
    /// Examples:
    ///   decor lookup 0
    ///   decor lookup 2 --format csv --delimiter ';' --header --auth
    Lookup {
        /// Data row index (header excluded)
        index: usize,
        #[command(flatten)]
        output: OutputArgs,
        /// Require the secret before looking up
        #[arg(long)]
        auth: bool,
    },
    /// Print every record
    List {
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
    /// CSV delimiter (overrides the config file)
    #[arg(long)]
    delimiter: Option<String>,
    /// Emit the CSV header line
    #[arg(long)]
    header: bool,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum StyleArg {
    Bold,
    Italic,
    Shout,
}

impl From<StyleArg> for Style {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Bold => Style::Bold,
            StyleArg::Italic => Style::Italic,
            StyleArg::Shout => Style::Shout,
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("No record with username '{0}'")]
    UsernameNotFound(String),
    #[error(transparent)]
    Decor(#[from] DecorError),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = config::load_config(cli.config.as_deref())?;
    let gate_source = cli.credential.clone();

    match cli.command {
        Commands::Say { text, styles } => {
            handle_say(text, &styles)?;
        }
        Commands::Search {
            username,
            styles,
            auth,
        } => {
            let gate = auth.then(|| build_gate(gate_source, &config));
            handle_search(username, &styles, gate)?;
        }
        Commands::Lookup {
            index,
            output,
            auth,
        } => {
            let gate = auth.then(|| build_gate(gate_source, &config));
            handle_lookup(index, &output, &config, gate)?;
        }
        Commands::List { output } => {
            handle_list(&output, &config)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn build_gate(credential: Option<String>, config: &WrapConfig) -> Gate {
    let source: Box<dyn CredentialSource> = match credential {
        Some(value) => Box::new(FixedCredential::new(value)),
        None => Box::new(StdinCredentials),
    };
    Gate::from_config(source, &config.gate)
}

/// Put `op` behind `gate` if one is given; ungated calls always yield `Some`.
fn gated<'a, A: 'a, R: 'a>(
    op: BoxedOp<'a, A, R>,
    gate: Option<Gate>,
) -> BoxedOp<'a, A, Option<R>> {
    match gate {
        Some(gate) => Box::new(gate.guard(op)),
        None => Box::new(move |args| Some(op(args))),
    }
}

fn styles_of(args: &[StyleArg]) -> Vec<Style> {
    args.iter().copied().map(Style::from).collect()
}

fn csv_options(output: &OutputArgs, config: &WrapConfig) -> CsvOptions {
    let delimiter = output
        .delimiter
        .clone()
        .unwrap_or_else(|| config.csv.delimiter.clone());
    CsvOptions::new()
        .delimiter(delimiter)
        .include_header(output.header || config.csv.include_header)
}

fn handle_say(text: String, styles: &[StyleArg]) -> Result<(), Box<dyn Error>> {
    let base: BoxedOp<'_, String, String> = Box::new(|text: String| text);
    let op = decorate_all(&styles_of(styles), base);
    println!("{}", op(text));
    Ok(())
}

fn handle_search(
    username: String,
    styles: &[StyleArg],
    gate: Option<Gate>,
) -> Result<(), Box<dyn Error>> {
    let store = RecordStore::builtin();
    let base: BoxedOp<'_, String, Option<String>> =
        Box::new(move |name: String| store.full_name_of(&name).map(str::to_string));
    let op = gated(decorate_all(&styles_of(styles), base), gate);

    match op(username.clone()) {
        None => Ok(()),
        Some(None) => Err(CliError::UsernameNotFound(username).into()),
        Some(Some(full_name)) => {
            println!("{}", full_name);
            Ok(())
        }
    }
}

fn handle_lookup(
    index: usize,
    output: &OutputArgs,
    config: &WrapConfig,
    gate: Option<Gate>,
) -> Result<(), Box<dyn Error>> {
    let store = RecordStore::builtin();
    let base = move |i: usize| store.lookup_by_index(i);
    let serialized: BoxedOp<'_, usize, decor_records::Result<String>> = match output.format {
        OutputFormat::Json => Box::new(JsonWrapper::new(store).wrap(base)),
        OutputFormat::Csv => Box::new(csv_options(output, config).build_for(store).wrap(base)),
    };
    let op = gated(serialized, gate);

    if let Some(result) = op(index) {
        let text = result.map_err(CliError::from)?;
        println!("{}", text);
    }
    Ok(())
}

fn handle_list(output: &OutputArgs, config: &WrapConfig) -> Result<(), Box<dyn Error>> {
    let store = RecordStore::builtin();
    let stdout = io::stdout();
    let mut writer = stdout.lock();

    match output.format {
        OutputFormat::Json => {
            let json = JsonWrapper::new(store);
            for row in store.rows() {
                writeln!(writer, "{}", json.render(row.fields())?)?;
            }
        }
        OutputFormat::Csv => {
            let options = csv_options(output, config);
            if options.include_header {
                writeln!(writer, "{}", store.header().join(&options.delimiter))?;
            }
            let csv = options.include_header(false).build_for(store);
            for row in store.rows() {
                writeln!(writer, "{}", csv.render(row.fields()))?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}
