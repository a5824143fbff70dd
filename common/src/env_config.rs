use std::{env, sync::Arc};

#[derive(Clone, Debug)]
/// Configuration struct for the server.
///
/// This struct holds all the necessary configuration parameters
/// required to initialize and run the portal: database location,
/// session cookie secret, server host and port, number of worker
/// threads, CORS settings, logging preferences, and the directories
/// where vehicle images and QR codes are written.
pub struct Config {
    // environment
    pub environment: String, // development or production
    /// Path of the SQLite database file.
    pub database_path: String,
    /// Secret used to derive the session cookie signing key.
    pub session_secret: String,
    /// The hostname or IP address the server will bind to.
    pub server_host: String,
    /// The port number the server will listen on.
    pub server_port: u16,
    /// The number of worker threads to spawn for handling requests.
    pub num_workers: usize,
    /// The allowed origin for CORS (Cross-Origin Resource Sharing).
    pub cors_allowed_origin: String,
    /// A boolean indicating whether console logging is enabled.
    pub console_logging_enabled: bool,
    /// Directory where uploaded vehicle images are stored.
    pub upload_dir: String,
    /// Directory where generated QR code images are stored.
    pub qr_dir: String,
}

impl Config {
    /// Creates a new `Config` instance from environment variables.
    ///
    /// Loads all configuration values from environment variables with
    /// sensible defaults for most optional settings.
    ///
    /// # Environment Variables
    ///
    /// Required:
    /// - `ENVIRONMENT`: "development" or "production"
    ///
    /// Optional (with defaults):
    /// - `DATABASE_PATH`: SQLite file path (default: "data/dealership.db")
    /// - `SESSION_SECRET`: session cookie secret (a development value is
    ///   used when unset; always set it in production)
    /// - `IP`: Server host (default: "127.0.0.1")
    /// - `PORT`: Server port (default: 8080)
    /// - `WORKERS`: Number of worker threads (default: 4)
    /// - `CORS_ALLOWED_ORIGIN`: Allowed CORS origin (default: "http://localhost:3000")
    /// - `ENABLE_CONSOLE_LOGGING`: Whether to enable console logging (default: true)
    /// - `UPLOAD_DIR`: vehicle image directory (default: "public/uploads/vehicles")
    /// - `QR_DIR`: QR code directory (default: "public/qr-codes")
    ///
    /// # Panics
    ///
    /// This function will panic if required environment variables are
    /// missing.
    pub fn from_env() -> Arc<Self> {
        dotenvy::dotenv().ok();

        Arc::new(Config {
            environment: env::var("ENVIRONMENT").expect("ENVIRONMENT must be set"),
            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "data/dealership.db".to_string()),
            session_secret: env::var("SESSION_SECRET").unwrap_or_else(|_| {
                "before-you-sign-development-session-secret-key".to_string()
            }),
            server_host: env::var("IP").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            num_workers: env::var("WORKERS")
                .unwrap_or_else(|_| "4".to_string())
                .parse()
                .unwrap_or(4),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            console_logging_enabled: env::var("ENABLE_CONSOLE_LOGGING")
                .unwrap_or_else(|_| "true".to_string())
                .to_lowercase()
                == "true",
            upload_dir: env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| "public/uploads/vehicles".to_string()),
            qr_dir: env::var("QR_DIR").unwrap_or_else(|_| "public/qr-codes".to_string()),
        })
    }
}
