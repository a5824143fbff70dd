use actix_web::web;

pub mod routes {
    pub mod catalog;
    pub mod customer;
}
mod services {
    pub(crate) mod dispute;
    pub(crate) mod search;
}
mod dtos {
    pub(crate) mod dispute;
    pub(crate) mod search;
}

/// The customer-facing surface: the public catalog plus the
/// session-gated dispute routes, all under one prefix.
pub fn mount_customer() -> actix_web::Scope {
    web::scope("/customer")
        .service(routes::catalog::get_vehicles)
        .service(routes::catalog::get_browse_dealerships)
        .service(routes::customer::get_dashboard)
        .service(routes::customer::get_report_dispute)
        .service(routes::customer::post_report_dispute)
        .service(routes::customer::get_my_disputes)
}
