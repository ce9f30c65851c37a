use hello_server::config::Config;
use hello_server::{logger, server, Result, ServerError};

fn main() {
    if let Err(e) = start() {
        logger::log_fatal(&e);
        std::process::exit(1);
    }
}

fn start() -> Result<()> {
    let cfg = Config::builtin()?;
    logger::log_server_start(cfg.server.port);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(ServerError::Runtime)?;

    runtime.block_on(server::run(&cfg))
}
