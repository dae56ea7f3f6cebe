//! Console tracing setup.
//!
//! Filter comes from `RUST_LOG`; this crate logs at `info` unless told
//! otherwise.

use tracing_subscriber::EnvFilter;

/// Default directive applied on top of `RUST_LOG`.
pub const DEFAULT_DIRECTIVE: &str = "agent_floor=info";

/// Build the environment filter used by [`init_tracing`].
#[must_use]
pub fn env_filter() -> EnvFilter {
    let filter = EnvFilter::from_default_env();
    match DEFAULT_DIRECTIVE.parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Install the global fmt subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directive_parses() {
        assert!(DEFAULT_DIRECTIVE.parse::<tracing_subscriber::filter::Directive>().is_ok());
    }

    #[test]
    fn init_is_idempotent() {
        init_tracing();
        init_tracing();
    }
}
