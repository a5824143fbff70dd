use actix_web::web;

pub mod routes {
    pub mod dealer;
    pub mod vehicles;
}
mod services {
    pub(crate) mod dealer;
    pub(crate) mod vehicle;
}
mod dtos {
    pub(crate) mod vehicle;
}

pub fn mount_dealer() -> actix_web::Scope {
    web::scope("/dealership")
        .service(routes::dealer::get_dashboard)
        .service(routes::dealer::get_profile)
        .service(routes::dealer::post_profile_update)
        .service(routes::vehicles::get_vehicles)
        .service(routes::vehicles::post_add_vehicle)
        .service(routes::vehicles::get_vehicle_detail)
        .service(routes::vehicles::post_delete_vehicle)
}
