/// Gradeform: student grade entry and listing service
///
/// Main entry point. Loads configuration from the environment and starts the
/// HTTP server.

use gradeform::{config::Config, server::start_server};

/// Application entry point
///
/// The server provides:
/// - Grade input form at /
/// - Paginated listing at /grades
/// - JSON endpoints at /api/grades and /api/courses
/// - Health check at /healthz
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration (defaults to 0.0.0.0:3005 and data/grades.db)
    let config = Config::default();

    start_server(config).await?;

    Ok(())
}
