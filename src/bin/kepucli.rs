//! kepu CLI Client
//!
//! Switches the controller relays and prints the current temperature.

use clap::{ArgGroup, Parser};
use kepu::{Config, RelayCommand};
use tracing_subscriber::{fmt, EnvFilter};

/// A client to interact with the kitchen garden controller
#[derive(Parser, Debug)]
#[command(name = "kepucli")]
#[command(about = "A client to interact with the kitchen garden controller")]
#[command(version)]
#[command(group(ArgGroup::new("relay0_state").required(true).args(["relay0", "no_relay0"])))]
#[command(group(ArgGroup::new("relay1_state").required(true).args(["relay1", "no_relay1"])))]
struct Args {
    /// Controller hostname or IPv4 address
    #[arg(long, default_value = "192.168.101.102")]
    host: String,

    /// Controller port
    #[arg(long, default_value = "29500")]
    port: u16,

    /// Log filter (e.g. "debug", "kepu=trace"); falls back to RUST_LOG, then "warn"
    #[arg(long)]
    log_level: Option<String>,

    /// Size of receive buffer
    #[arg(long, default_value = "1024")]
    receive_bufsize: usize,

    /// Connect timeout in milliseconds
    #[arg(long)]
    connect_timeout_ms: Option<u64>,

    /// Turn relay0 on
    #[arg(long)]
    relay0: bool,

    /// Turn relay0 off
    #[arg(long)]
    no_relay0: bool,

    /// Turn relay1 on
    #[arg(long)]
    relay1: bool,

    /// Turn relay1 off
    #[arg(long)]
    no_relay1: bool,
}

fn main() {
    let args = Args::parse();

    init_tracing(args.log_level.as_deref());
    tracing::debug!("args: {:?}", args);

    let config = Config::builder()
        .host(&args.host)
        .port(args.port)
        .receive_bufsize(args.receive_bufsize)
        .connect_timeout_ms(args.connect_timeout_ms)
        .build();

    // Each group admits exactly one flag, so the "on" flag alone decides
    let command = RelayCommand::new(args.relay0, args.relay1);

    let reading = kepu::process(config, command);
    if let Some(reading) = &reading {
        println!("{}", reading.summary());
    }

    std::process::exit(kepu::exit_code(reading.as_ref()));
}

/// Initialize tracing once for the whole process
fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(directive) => EnvFilter::try_new(directive).unwrap_or_else(|e| {
            eprintln!("invalid log level {:?}: {}", directive, e);
            EnvFilter::new("warn")
        }),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
