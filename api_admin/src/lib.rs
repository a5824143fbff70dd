use actix_web::web;

pub mod routes {
    pub mod dashboard;
    pub mod dealerships;
    pub mod disputes;
    pub mod verify;
}
mod services {
    pub(crate) mod dispute;
    pub(crate) mod verify;
}
mod dtos {
    pub(crate) mod admin;
}

pub fn mount_admin() -> actix_web::Scope {
    web::scope("/admin")
        .service(routes::dashboard::get_dashboard)
        .service(routes::dealerships::get_dealerships)
        .service(routes::dealerships::get_dealership_detail)
        .service(routes::dealerships::post_update_status)
        .service(routes::verify::get_verify_vehicles)
        .service(routes::verify::get_verify_vehicle_detail)
        .service(routes::verify::post_verify_vehicle)
        .service(routes::verify::get_verified_vehicles)
        .service(routes::disputes::get_disputes)
        .service(routes::disputes::post_update_dispute)
}
