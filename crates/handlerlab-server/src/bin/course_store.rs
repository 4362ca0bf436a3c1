//! Course store service.
//!
//! - `GET /courses`  : list all courses (JSON array)
//! - `POST /courses` : create a course, id assigned server-side
//! - `GET /healthz`  : liveness

use std::process::ExitCode;

use handlerlab_core::course::SEED_COURSES_JSON;
use handlerlab_core::error::Result;
use handlerlab_server::{app_state::CourseState, config, router, runtime};

#[tokio::main]
async fn main() -> ExitCode {
    runtime::init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "course-store exited");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let cfg = config::load_default()?;
    let listen = cfg.course_store.listen_addr("course_store")?;

    // A bad seed is fatal: nothing is served.
    let state = CourseState::from_seed(SEED_COURSES_JSON)?;
    let app = router::build_course_router(state);

    runtime::serve("course-store", listen, app, "/courses").await
}
