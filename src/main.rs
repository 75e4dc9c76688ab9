use std::process::ExitCode;

use plan_sync::output as out;
use plan_sync::PlanSyncError;

mod app;
mod logging;

fn main() -> ExitCode {
    let args = plan_sync::cli::parse();
    match app::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            out::print_error(&format!("{e:#}"));
            let code = e
                .downcast_ref::<PlanSyncError>()
                .map(PlanSyncError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}
