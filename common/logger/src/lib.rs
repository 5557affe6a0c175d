use std::collections::HashMap;
use std::io::Write;

use env_logger::{Builder, Env};

/// Install the global logger.
///
/// `RUST_LOG` takes precedence over `filter` and `modules_level` when it is
/// set. Calling this twice keeps the first logger.
pub fn init(filter: String, console_show_file_and_line: bool, modules_level: HashMap<String, String>) {
    let spec = filter_spec(&filter, &modules_level);
    let mut builder = Builder::from_env(Env::default().default_filter_or(spec));

    if console_show_file_and_line {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}:{} {}",
                buf.timestamp_millis(),
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or_default(),
                record.args()
            )
        });
    }

    if let Err(e) = builder.try_init() {
        log::warn!("[logger]: already initialized {}", e);
    }
}

/// Join the global filter and the per module levels into one env_logger
/// directive string, e.g. `info,core_tx_populator=debug`.
fn filter_spec(filter: &str, modules_level: &HashMap<String, String>) -> String {
    let mut modules = modules_level
        .iter()
        .map(|(module, level)| format!("{}={}", module, level))
        .collect::<Vec<_>>();
    modules.sort();

    std::iter::once(filter.to_owned())
        .filter(|f| !f.is_empty())
        .chain(modules)
        .collect::<Vec<_>>()
        .join(",")
}
