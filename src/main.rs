use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    // I/O failures are consumed inside each operation; the process exits 0
    // even when run() reports a setup error.
    if let Err(err) = textfiler::run() {
        tracing::error!("Ошибка при выполнении: {err}");
    }
}
