//! Logging setup
//!
//! Installs a `tracing` subscriber writing compact records to stderr.
//! Verbosity comes from `RUST_LOG` (default `info`); per-tick movement
//! details are emitted at `trace`/`debug`.

use std::io;
use std::sync::Once;

use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt};

static PANIC_HOOK: Once = Once::new();

/// Install the global subscriber and panic hook.
///
/// Safe to call more than once; only the first call installs anything.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .compact();

    if tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .try_init()
        .is_err()
    {
        return;
    }

    PANIC_HOOK.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let mut msg = String::new();
            if let Some(loc) = info.location() {
                msg.push_str(&format!("panic at {}:{}:{} ", loc.file(), loc.line(), loc.column()));
            }
            if let Some(s) = info.payload().downcast_ref::<&str>() {
                msg.push_str(s);
            } else if let Some(s) = info.payload().downcast_ref::<String>() {
                msg.push_str(s);
            } else {
                msg.push_str("<non-string panic>");
            }
            let bt = std::backtrace::Backtrace::capture();
            tracing::error!("{}\nBacktrace:\n{}", msg, bt);
        }));
    });
}
