mod cors;

use actix_files::Files;
use actix_multipart::form::MultipartFormConfig;
use actix_web::{
    App, HttpServer,
    web::{self},
};
use common::env_config::Config;

// 10 images at 5 MB each, plus the text fields.
const MULTIPART_TOTAL_LIMIT: usize = 60 * 1024 * 1024;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // get env vars
    let config = Config::from_env();
    let config_data = config.clone();

    // get info
    let origin = config.cors_allowed_origin.clone();
    let cookie_secure = !origin.contains("localhost");

    // init logger
    if config.console_logging_enabled {
        logger::setup().expect("Failed to set up logger");
    }

    // init db connection
    let pool = db::setup(&config.database_path)
        .await
        .expect("Failed to set up database");

    // artifact directories must exist before anything is uploaded
    std::fs::create_dir_all(&config.upload_dir).expect("Failed to create upload directory");
    std::fs::create_dir_all(&config.qr_dir).expect("Failed to create QR code directory");

    HttpServer::new(move || {
        let secret = config_data.session_secret.as_bytes();
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(config_data.clone()))
            .app_data(MultipartFormConfig::default().total_limit(MULTIPART_TOTAL_LIMIT))
            .wrap(logger::middleware()) // 3rd
            .wrap(cors::middleware(&origin)) // 2nd
            .wrap(api_auth::session_middleware(cookie_secure, secret)) // 1st
            .service(Files::new("/uploads/vehicles", &config_data.upload_dir))
            .service(Files::new("/qr-codes", &config_data.qr_dir))
            .service(api_vehicles::mount_vehicle())
            .service(api_customer::mount_customer())
            .service(api_dealer::mount_dealer())
            .service(api_admin::mount_admin())
            .service(api_auth::mount_auth())
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .workers(config.num_workers)
    .run()
    .await
}
