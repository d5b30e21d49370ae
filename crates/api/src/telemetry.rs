//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "todo_api=debug,todo_db=debug,tower_http=debug";

/// Install the global subscriber.
///
/// `LOG_FORMAT=json` switches to one JSON object per line; anything else
/// gives the human-readable format.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    let registry = tracing_subscriber::registry().with(filter);

    if json_requested(std::env::var("LOG_FORMAT").ok().as_deref()) {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn json_requested(format: Option<&str>) -> bool {
    format.is_some_and(|f| f.trim().eq_ignore_ascii_case("json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_format_is_case_insensitive() {
        assert!(json_requested(Some("json")));
        assert!(json_requested(Some(" JSON ")));
        assert!(!json_requested(Some("pretty")));
        assert!(!json_requested(None));
    }
}
