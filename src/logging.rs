use env_logger::Env;

/// Initialize the global logger. `RUST_LOG` wins when set; otherwise
/// `verbose` selects `debug` for this crate and `warn` for everything else.
pub fn init(verbose: bool) {
    let default_filter = if verbose { "warn,catapi=debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
