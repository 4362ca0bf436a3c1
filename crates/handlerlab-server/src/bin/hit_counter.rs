//! Hit counter service.
//!
//! - `/count`       : any method, increments and reports the shared counter
//! - `GET /healthz` : liveness

use std::process::ExitCode;

use handlerlab_core::error::Result;
use handlerlab_server::{app_state::CounterState, config, router, runtime};

#[tokio::main]
async fn main() -> ExitCode {
    runtime::init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "hit-counter exited");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let cfg = config::load_default()?;
    let listen = cfg.hit_counter.listen_addr("hit_counter")?;

    // One counter for the whole process, shared by every connection.
    let app = router::build_counter_router(CounterState::default());

    runtime::serve("hit-counter", listen, app, "/count").await
}
