//! nutriscale
//!
//! Interactive nutrition label calculator on stdin/stdout.

use std::io;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use nutriscale::build_info::BuildInfo;
use nutriscale::nutrition::ReferenceDailyValues;
use nutriscale::session::{Session, SessionError};

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout is reserved for prompts and the report
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new("nutriscale=warn")?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    BuildInfo::current().log_startup();

    let reference = ReferenceDailyValues::standard();
    let session = Session::new(io::stdin().lock(), io::stdout(), io::stderr(), &reference);

    match session.run() {
        Ok(_) => Ok(ExitCode::SUCCESS),
        // Already explained to the user by the session
        Err(SessionError::InvalidConsumedServingSize(_)) => Ok(ExitCode::FAILURE),
        Err(err) => {
            tracing::debug!(error = ?err, "session aborted");
            eprintln!("{}", err);
            Ok(ExitCode::FAILURE)
        }
    }
}
