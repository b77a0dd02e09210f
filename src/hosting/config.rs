use clap::Parser;

/// Server settings, from flags or the environment.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Serve static GTO lookups over HTTP", long_about = None)]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:8080")]
    pub bind: String,
    /// Number of actix worker threads.
    #[arg(long, env = "WORKERS", default_value_t = 2)]
    pub workers: usize,
}
