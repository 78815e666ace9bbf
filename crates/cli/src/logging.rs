//! Tracing setup for the CLI.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Initialize the tracing subscriber.
///
/// `DOCSEARCH_LOG` controls the log level: "trace", "debug", "info", "warn",
/// "error", or a full tracing filter spec like "docsearch_index=debug".
pub fn init_tracing() {
    let filter = match std::env::var("DOCSEARCH_LOG") {
        Ok(level) if is_plain_level(&level) => {
            format!("docsearch_cli={level},docsearch_index={level}")
        }
        Ok(spec) => spec,
        Err(_) => "docsearch_cli=info,docsearch_index=info".to_string(),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(EnvFilter::new(filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

fn is_plain_level(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_levels_are_recognized_case_insensitively() {
        assert!(is_plain_level("debug"));
        assert!(is_plain_level("WARN"));
        assert!(!is_plain_level("docsearch_index=debug"));
    }
}
