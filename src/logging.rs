use env_logger::{
    Builder,
    Env,
};

/// Sends log records to stderr, `warn` and up unless `RUST_LOG` says otherwise.
pub fn init() {
    // a second init (tests) is harmless
    let _ = Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .try_init();
}
