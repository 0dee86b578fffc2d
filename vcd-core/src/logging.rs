use std::io;

// Logs go to stderr so they never interleave with the progress lines the CLI prints on stdout.
pub fn setup_for_cli(env_filter: &str) {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .without_time()
        .compact()
        .init();
}
