use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber, filtered by `RUST_LOG` (default `info`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let filter = ["alloy_transport_http", "alloy_rpc_client", "reqwest", "hyper_util"]
        .into_iter()
        .fold(filter, |filter, target| match format!("{target}=off").parse() {
            Ok(directive) => filter.add_directive(directive),
            Err(_) => filter,
        });

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
