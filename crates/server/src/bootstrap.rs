//! Process entry shared by the service binaries.

use std::process::ExitCode;

use common::utils::logging::init_logging_from_env;
use configs::AppConfig;
use dotenvy::dotenv;
use service::Record;
use tracing::{error, info};
use uuid::Uuid;

fn init_logging(service: &'static str) {
    // .env first so RUST_LOG and LOG_FORMAT take effect
    dotenv().ok();
    init_logging_from_env();
    info!(service, event = "logger_init", "tracing subscriber initialized");
}

/// Run the service for `R` to completion and map the outcome to an exit code.
pub fn launch<R: Record>(service: &'static str, default_port: u16) -> ExitCode {
    init_logging(service);

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service,
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    let cfg = match AppConfig::load_and_validate(service, default_port) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service, event = "config_invalid", error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = cfg.server.worker_threads {
        builder.worker_threads(w);
    }
    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service, event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        service,
        event = "start",
        %service_id,
        pid,
        version,
        threads = cfg.server.worker_threads.unwrap_or_default(),
        "{service} starting"
    );

    rt.block_on(async move {
        match crate::run::<R>(service, &cfg.server).await {
            Ok(()) => {
                info!(service, event = "stop", %service_id, pid, "{service} stopped");
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!(service, event = "run_failed", %service_id, error = %e, "{service} failed");
                ExitCode::FAILURE
            }
        }
    })
}
