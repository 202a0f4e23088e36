/*!
cbor-walk - A CLI for walking CBOR data without decoding it into a document

# Commands

- `inspect`: Print an outline of every item: offset, major type and value
- `skip`: Report how many bytes the first item (or every item) occupies

# Examples

```bash
# Outline a CBOR file
cbor-walk inspect data.cbor

# Outline hex text from stdin
echo '82a1010241ff' | cbor-walk inspect --hex -

# Measure the first item in a file
cbor-walk skip data.cbor

# Count the items in an RFC 8742 CBOR sequence, allowing deeper nesting
cbor-walk skip --sequence --max-depth 64 stream.cbor

# Show where decoding failed
cbor-walk --log-level trace skip truncated.cbor
```
*/

use clap::{Parser, Subcommand};

mod inspect;
mod io;
mod skip;

/// A CLI tool for walking CBOR data
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "A CLI tool for walking the structure of CBOR data",
    long_about = "cbor-walk decodes CBOR (Concise Binary Object Representation) item headers in place.\n\n\
                  Features:\n\
                  - Outline nested arrays and maps without building a document\n\
                  - Measure items and CBOR sequences\n\
                  - Bounded nesting depth for untrusted input"
)]
struct Cli {
    /// Log level for decoder diagnostics (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_name = "LEVEL")]
    log_level: tracing_subscriber::filter::LevelFilter,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print an outline of CBOR items
    Inspect(inspect::Command),

    /// Skip over CBOR items and report their size
    Skip(skip::Command),
}

fn init_logger(log_level: tracing_subscriber::filter::LevelFilter) {
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(
            log_level > tracing_subscriber::filter::LevelFilter::from_level(tracing::Level::INFO),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level);

    match cli.command {
        Commands::Inspect(args) => args.exec(),
        Commands::Skip(args) => args.exec(),
    }
}
