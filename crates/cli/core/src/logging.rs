//! Logging initialization.

use crate::args::LogArgs;
use eyre::Result;
use tracing_subscriber::EnvFilter;

/// Build the filter from command line arguments.
///
/// The filter is built with the following precedence:
/// 1. If `--quiet` is set, only errors are shown
/// 2. Otherwise, start with `RUST_LOG` if set, or the level implied by `-v`
/// 3. Apply any custom directives from `--log.filter`
pub fn build_filter(args: &LogArgs) -> EnvFilter {
    if args.quiet {
        return EnvFilter::new(args.level());
    }

    let mut filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.level()));

    if let Some(custom_filter) = &args.filter {
        for directive in custom_filter.split(',') {
            if let Ok(d) = directive.trim().parse() {
                filter = filter.add_directive(d);
            }
        }
    }

    filter
}

/// Initialize logging based on command line arguments.
///
/// Logs are written to stderr so that stdout only carries command output.
pub fn init_logging(args: &LogArgs) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(args))
        .with_writer(std::io::stderr)
        .without_time();

    let result = if args.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| eyre::eyre!("failed to initialize logging: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_overrides_filter() {
        let args = LogArgs {
            quiet: true,
            filter: Some("gnfd_chain=trace".into()),
            ..Default::default()
        };
        assert_eq!(build_filter(&args).to_string(), "error");
    }

    #[test]
    fn test_custom_directives_are_added() {
        let args = LogArgs {
            filter: Some("gnfd_chain=debug,gnfd_quota=info".into()),
            ..Default::default()
        };
        let filter = build_filter(&args).to_string();
        assert!(filter.contains("gnfd_chain=debug"));
        assert!(filter.contains("gnfd_quota=info"));
    }
}
