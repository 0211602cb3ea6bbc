use std::process::ExitCode;

use configs::AppConfig;
use tokio::runtime::{Builder, Runtime};
use tracing::{error, info};
use uuid::Uuid;

fn main() -> ExitCode {
    // .env first so RUST_LOG, LOG_FORMAT and CONFIG_PATH apply
    dotenvy::dotenv().ok();
    common::utils::logging::init_logging_from_env();

    let boot_id = Uuid::new_v4();
    log_panics(boot_id);

    let cfg = match AppConfig::load_or_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(%boot_id, error = ?e, "configuration rejected");
            return ExitCode::FAILURE;
        }
    };

    let runtime = match build_runtime(&cfg) {
        Ok(rt) => rt,
        Err(e) => {
            error!(%boot_id, error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        %boot_id,
        pid = std::process::id(),
        version = env!("CARGO_PKG_VERSION"),
        addr = %cfg.server.bind_addr(),
        worker_threads = cfg.server.worker_threads.unwrap_or_default(),
        "camp server starting"
    );

    match runtime.block_on(server::run(cfg)) {
        Ok(()) => {
            info!(%boot_id, "camp server stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(%boot_id, error = ?e, "camp server failed");
            ExitCode::FAILURE
        }
    }
}

fn log_panics(boot_id: Uuid) {
    std::panic::set_hook(Box::new(move |info| {
        let location = info.location().map(|l| format!("{}:{}", l.file(), l.line())).unwrap_or_default();
        error!(%boot_id, %location, "panic: {info}");
    }));
}

fn build_runtime(cfg: &AppConfig) -> std::io::Result<Runtime> {
    let mut builder = Builder::new_multi_thread();
    builder.enable_all();
    if let Some(threads) = cfg.server.worker_threads {
        builder.worker_threads(threads);
    }
    builder.build()
}
