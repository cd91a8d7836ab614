use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

fn timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format!("{}", now)
}

/// Installs the console logger. Defaults to `info`; `RUST_LOG` still applies.
/// Safe to call more than once.
pub fn init() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            if record.level() == log::Level::Info {
                writeln!(buf, "[{}] {}", timestamp(), record.args())
            } else {
                writeln!(buf, "[{}] {}: {}", timestamp(), record.level(), record.args())
            }
        })
        .try_init();
}
