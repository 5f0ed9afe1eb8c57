//! osm-buffer CLI - Inspect raw entity record files and convert timestamps.

use std::env;
use std::process::ExitCode;

use anyhow::{bail, Context};
use osm_buffer::memory::{ItemType, MappedBuffer};
use osm_buffer::Timestamp;
use tracing::{debug, info, trace};
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const BUILD_DATE: &str = env!("OSM_BUFFER_BUILD_DATE");
const BUILD_TIME: &str = env!("OSM_BUFFER_BUILD_TIME");

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let prog = args.first().map(String::as_str).unwrap_or("osm-buffer");

    // Parse global flags
    let mut level = "info";
    let mut filtered_args: Vec<&str> = Vec::new();
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "-v" | "--verbose" => level = "debug",
            "-vv" | "--trace" => level = "trace",
            "-q" | "--quiet" => level = "error",
            _ => filtered_args.push(arg),
        }
    }
    init_tracing(level);

    if filtered_args.is_empty() {
        print_usage(prog);
        return ExitCode::SUCCESS;
    }

    let result = match filtered_args[0] {
        "info" | "i" => with_path(prog, "info", &filtered_args, cmd_info),
        "dump" | "d" => with_path(prog, "dump", &filtered_args, cmd_dump),
        "ts" | "t" => {
            if filtered_args.len() < 2 {
                eprintln!("Usage: {} ts <yyyy-mm-ddThh:mm:ssZ | seconds>...", prog);
                return ExitCode::FAILURE;
            }
            cmd_ts(&filtered_args[1..])
        }
        "version" | "-V" | "--version" => {
            println!("osm-buffer {} (built {} {})", VERSION, BUILD_DATE, BUILD_TIME);
            Ok(())
        }
        "help" | "h" | "-h" | "--help" => {
            print_usage(prog);
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage(prog);
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins over the level picked by the verbosity flags.
fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn with_path(
    prog: &str,
    name: &str,
    args: &[&str],
    cmd: fn(&str) -> anyhow::Result<()>,
) -> anyhow::Result<()> {
    match args.get(1) {
        Some(path) => cmd(path),
        None => bail!("missing file argument\nUsage: {} {} <file>", prog, name),
    }
}

fn print_usage(prog: &str) {
    println!("osm-buffer CLI - Inspect raw OSM entity record files");
    println!();
    println!("Usage: {} [options] <command> [args]", prog);
    println!();
    println!("Commands:");
    println!("  i, info <file>     Show record counts per entity kind");
    println!("  d, dump <file>     List every record");
    println!("  t, ts <value>...   Convert ISO timestamps to seconds and back");
    println!("  version            Show version and build date");
    println!("  h, help            Show this help");
    println!();
    println!("Options:");
    println!("  -v, --verbose  Debug output");
    println!("  -vv, --trace   Trace output (very verbose)");
    println!("  -q, --quiet    Errors only");
    println!();
    println!("RUST_LOG overrides the log level.");
}

/// Record counts for statistics
#[derive(Default)]
struct EntityCounts {
    per_kind: [usize; ItemType::ALL.len()],
    removed: usize,
    unknown: usize,
    bytes: usize,
}

impl EntityCounts {
    fn total(&self) -> usize {
        self.per_kind.iter().sum::<usize>() + self.unknown
    }

    fn count(&self, kind: ItemType) -> usize {
        self.per_kind[kind.as_u16() as usize - 1]
    }
}

fn cmd_info(path: &str) -> anyhow::Result<()> {
    info!("Opening record file: {}", path);
    let mapped = MappedBuffer::open(path).with_context(|| format!("failed to open {}", path))?;
    let buffer = mapped.buffer();
    debug!("Mapped {} bytes", buffer.len());

    let mut counts = EntityCounts::default();
    let mut damaged = None;
    for entity in buffer.entities() {
        match entity {
            Ok(view) => {
                let record = view.record();
                counts.per_kind[view.kind().as_u16() as usize - 1] += 1;
                counts.bytes += record.len();
                if record.is_removed() {
                    counts.removed += 1;
                }
            }
            Err(osm_buffer::Error::UnknownItemType { item_type, offset }) => {
                trace!("Unknown item type 0x{:04x} at {}", item_type, offset);
                counts.unknown += 1;
            }
            Err(e) => damaged = Some(e),
        }
    }

    println!("File: {}", path);
    println!("Size: {} bytes", buffer.len());
    println!();
    println!("Entities:");
    for kind in ItemType::ALL {
        println!("  {:<10} {}", format!("{}:", kind), counts.count(kind));
    }
    if counts.unknown > 0 {
        println!("  {:<10} {}", "unknown:", counts.unknown);
    }
    println!();
    println!("Total records: {} ({} removed)", counts.total(), counts.removed);
    println!("Entity bytes:  {}", counts.bytes);

    if let Some(e) = damaged {
        bail!("buffer is damaged: {}", e);
    }
    Ok(())
}

fn cmd_dump(path: &str) -> anyhow::Result<()> {
    info!("Opening record file: {}", path);
    let mapped = MappedBuffer::open(path).with_context(|| format!("failed to open {}", path))?;

    println!("{:>10}  {:<10} {:>8}  {}", "offset", "kind", "size", "flags");
    for record in mapped.buffer().records() {
        let record = record.context("damaged record")?;
        let kind = match record.kind() {
            Some(kind) => kind.to_string(),
            None => format!("?0x{:04x}", record.item_type()),
        };
        println!(
            "{:>10}  {:<10} {:>8}  {}{}",
            record.offset(),
            kind,
            record.len(),
            if record.is_removed() { "removed " } else { "" },
            record.diff().as_char(),
        );
    }
    Ok(())
}

fn cmd_ts(values: &[&str]) -> anyhow::Result<()> {
    for value in values {
        if let Ok(seconds) = value.parse::<i64>() {
            let ts = Timestamp::from(seconds);
            if !ts.valid() {
                println!("{}\t(unset)", value);
            } else {
                println!("{}\t{}", value, ts);
            }
        } else {
            let ts = Timestamp::parse(value).with_context(|| format!("invalid timestamp {:?}", value))?;
            println!("{}\t{}", value, ts.seconds_since_epoch());
        }
    }
    Ok(())
}
