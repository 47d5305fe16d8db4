//! hotkey-recorder: describe a recorded hotkey
//!
//! Usage: `hotkey-recorder <key_code> <modifier_flags> [--json]`
//!
//! Both numbers accept plain decimal or `0x`-prefixed hex; a leading sign is
//! rejected. Prints the hotkey in menu glyph form, or as JSON with `--json`.
//! `-h`/`--help` prints the usage and exits successfully.

use anyhow::{bail, Context, Result};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use hotkey_recorder::{Config, HotKey, Observers};

const USAGE: &str = "usage: hotkey-recorder <key_code> <modifier_flags> [--json]";

/// Parsed command line
#[derive(Debug, PartialEq, Eq)]
struct Args {
    hot_key: HotKey,
    json: bool,
}

fn main() -> Result<()> {
    let config = Config::load();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!(?config, "configuration loaded");

    let Some(args) = parse_args(std::env::args().skip(1))? else {
        println!("{USAGE}");
        return Ok(());
    };
    info!(
        key_code = args.hot_key.key_code(),
        modifier_flags = args.hot_key.modifier_flags(),
        "hotkey parsed"
    );

    let json = args.json;
    let mut observers = Observers::new();
    observers.register(move |hot_key: &HotKey| {
        if json {
            match serde_json::to_string(hot_key) {
                Ok(line) => println!("{line}"),
                Err(e) => tracing::error!(?e, "failed to encode hotkey"),
            }
        } else {
            println!("{hot_key}");
        }
    });
    observers.notify(&args.hot_key);

    Ok(())
}

/// Parse the command line; `None` means help was requested
fn parse_args<I>(args: I) -> Result<Option<Args>>
where
    I: IntoIterator<Item = String>,
{
    let mut json = false;
    let mut positional = Vec::new();

    for arg in args {
        match arg.as_str() {
            "--json" => json = true,
            "-h" | "--help" => return Ok(None),
            _ => positional.push(arg),
        }
    }

    let [key_code, modifier_flags] = positional.as_slice() else {
        bail!(USAGE);
    };

    let key_code = u16::try_from(parse_number(key_code).context("invalid key code")?)
        .context("key code does not fit in 16 bits")?;
    let modifier_flags = parse_number(modifier_flags).context("invalid modifier flags")?;

    Ok(Some(Args {
        hot_key: HotKey::new(key_code, modifier_flags),
        json,
    }))
}

fn parse_number(text: &str) -> Result<u64> {
    let hex = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X"));
    if hex.unwrap_or(text).starts_with(['+', '-']) {
        bail!("`{text}` must not carry a sign");
    }
    let value = match hex {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => text.parse(),
    };
    value.with_context(|| format!("`{text}` is not an unsigned integer"))
}
