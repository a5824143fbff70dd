use actix_web::web;

pub mod routes {
    pub mod vehicle;
}
mod dtos {
    pub(crate) mod vehicle;
}

/// Public per-vehicle routes: detail view and exact-VIN lookup.
pub fn mount_vehicle() -> actix_web::Scope {
    web::scope("/vehicle")
        .service(routes::vehicle::get_search_vin)
        .service(routes::vehicle::get_vehicle_by_vin)
        .service(routes::vehicle::get_vehicle_detail)
}
