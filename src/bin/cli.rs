//! pylons-item CLI
//!
//! Converts records between their JSON form and wire bytes.

use std::fs;
use std::io::{self, Cursor, Read, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use pylons_item::config::DEFAULT_MAX_FRAME_SIZE;
use pylons_item::wire::{encode_delimited, read_delimited};
use pylons_item::{Config, DoubleKeyValue, Item, LongKeyValue, Message, StringKeyValue};
use serde_json::Value;
use tracing_subscriber::{fmt, EnvFilter};

/// pylons-item CLI
#[derive(Parser, Debug)]
#[command(name = "pylons-item")]
#[command(about = "Encode and decode Pylons item records")]
#[command(version)]
struct Args {
    /// Largest delimited frame accepted when decoding (bytes)
    #[arg(long, default_value_t = DEFAULT_MAX_FRAME_SIZE)]
    max_frame_size: usize,

    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Read JSON, write wire bytes
    Encode {
        /// Record kind
        #[arg(short, long, value_enum, default_value = "item")]
        kind: Kind,

        /// JSON input file (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Length-prefix each record; a JSON array becomes one frame per element
        #[arg(long)]
        delimited: bool,
    },

    /// Read wire bytes, print JSON
    Decode {
        /// Record kind
        #[arg(short, long, value_enum, default_value = "item")]
        kind: Kind,

        /// Binary input file (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Input is a sequence of length-prefixed records
        #[arg(long)]
        delimited: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Kind {
    Item,
    Double,
    Long,
    String,
}

fn main() {
    // Initialize tracing/logging (stderr keeps stdout for codec output)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,pylons_item=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .max_frame_size(args.max_frame_size)
        .pretty_json(!args.compact)
        .build();

    if let Err(e) = run(args.command, &config) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands, config: &Config) -> pylons_item::Result<()> {
    match command {
        Commands::Encode {
            kind,
            input,
            output,
            delimited,
        } => {
            let value: Value = serde_json::from_slice(&read_input(input.as_ref())?)?;

            let bytes = match kind {
                Kind::Item => encode_json::<Item>(&value, delimited),
                Kind::Double => encode_json::<DoubleKeyValue>(&value, delimited),
                Kind::Long => encode_json::<LongKeyValue>(&value, delimited),
                Kind::String => encode_json::<StringKeyValue>(&value, delimited),
            };
            tracing::debug!(?kind, bytes = bytes.len(), "encoded");

            match output {
                Some(path) => fs::write(path, &bytes)?,
                None => {
                    let mut stdout = io::stdout().lock();
                    stdout.write_all(&bytes)?;
                    stdout.flush()?;
                }
            }
        }
        Commands::Decode {
            kind,
            input,
            delimited,
        } => {
            let bytes = read_input(input.as_ref())?;
            let value = match kind {
                Kind::Item => decode_bytes::<Item>(&bytes, delimited, config)?,
                Kind::Double => decode_bytes::<DoubleKeyValue>(&bytes, delimited, config)?,
                Kind::Long => decode_bytes::<LongKeyValue>(&bytes, delimited, config)?,
                Kind::String => decode_bytes::<StringKeyValue>(&bytes, delimited, config)?,
            };
            println!("{}", config.render_json(&value)?);
        }
    }

    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> io::Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path),
        None => {
            let mut bytes = Vec::new();
            io::stdin().lock().read_to_end(&mut bytes)?;
            Ok(bytes)
        }
    }
}

fn encode_json<M: Message>(value: &Value, delimited: bool) -> Vec<u8> {
    match (value, delimited) {
        (Value::Array(items), true) => items
            .iter()
            .flat_map(|item| encode_delimited(&M::from_json(item)))
            .collect(),
        (_, true) => encode_delimited(&M::from_json(value)),
        (_, false) => <M as Message>::encode(&M::from_json(value)),
    }
}

fn decode_bytes<M: Message>(
    bytes: &[u8],
    delimited: bool,
    config: &Config,
) -> pylons_item::Result<Value> {
    if !delimited {
        return Ok(<M as Message>::decode(bytes)?.to_json());
    }

    let mut cursor = Cursor::new(bytes);
    let mut records = Vec::new();
    while let Some(record) = read_delimited::<_, M>(&mut cursor, config)? {
        records.push(record.to_json());
    }
    Ok(Value::Array(records))
}
