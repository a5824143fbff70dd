//! Seed helpers for tests in this crate and the api crates. Not used
//! by production code paths.

use common::principal::Role;
use sqlx::SqlitePool;

use crate::dtos::customer::CustomerCreateRequest;
use crate::dtos::dealership::DealershipCreateRequest;
use crate::dtos::user::UserCreateRequest;
use crate::dtos::vehicle::{ChecklistFlags, VehicleCreateRequest};
use crate::models::vehicle::Vehicle;

/// A syntactically valid VIN, unique per `n` (no I/O/Q characters).
pub fn test_vin(n: usize) -> String {
    format!("1HGBH41JXMN1{:05}", n)
}

pub async fn seed_user(pool: &SqlitePool, username: &str, role: Role) -> i64 {
    crate::user::insert_user(
        pool,
        UserCreateRequest {
            username: username.to_string(),
            email: format!("{}@example.com", username),
            password_hash: "hash".to_string(),
            role,
        },
    )
    .await
    .unwrap()
    .id
}

/// Creates a dealership account and profile, returning
/// `(user_id, dealership_id)`.
pub async fn seed_dealership(pool: &SqlitePool, tag: &str) -> (i64, i64) {
    let user_id = seed_user(pool, &format!("dealer-{}", tag), Role::Dealership).await;
    let dealership_id = crate::dealership::insert_dealership(
        pool,
        DealershipCreateRequest {
            user_id,
            business_name: format!("{} Motors", tag),
            registration_number: format!("REG-{}", tag),
            license_number: None,
            year_established: Some(2010),
            email: format!("{}@motors.example.com", tag),
            phone: "021-555-0100".to_string(),
            address: "1 Main Road".to_string(),
            city: "Cape Town".to_string(),
            postal_code: None,
            website: None,
            operating_hours: None,
            description: None,
        },
    )
    .await
    .unwrap()
    .id;
    (user_id, dealership_id)
}

/// Creates a customer account and profile, returning the customer id.
pub async fn seed_customer(pool: &SqlitePool, tag: &str) -> i64 {
    let user_id = seed_user(pool, &format!("customer-{}", tag), Role::Customer).await;
    crate::customer::insert_customer(
        pool,
        CustomerCreateRequest {
            user_id,
            full_name: format!("Customer {}", tag),
            phone: None,
            address: None,
            city: None,
            postal_code: None,
        },
    )
    .await
    .unwrap()
    .id
}

pub fn vehicle_request(dealership_id: i64, vin: &str) -> VehicleCreateRequest {
    VehicleCreateRequest {
        dealership_id,
        vin: vin.to_string(),
        make: "Toyota".to_string(),
        model: "Corolla".to_string(),
        year: 2019,
        mileage: 48_000,
        price: 180_000.0,
        color: Some("Silver".to_string()),
        body_type: Some("sedan".to_string()),
        fuel_type: None,
        transmission: None,
        previous_owners: 1,
        registration_authority: None,
        plate_number: Some("CA 123-456".to_string()),
        engine_number: None,
        tare_weight: None,
        date_liability_licensing: None,
        vehicle_status: None,
        date_liable_registration: None,
        license_numbers: None,
        engine_type: None,
        engine_capacity: None,
        service_history: None,
        accident_history: None,
        recall_information: None,
        additional_features: None,
        description: None,
        image_urls: None,
    }
}

pub async fn seed_vehicle(pool: &SqlitePool, dealership_id: i64, n: usize) -> Vehicle {
    crate::vehicle::insert_vehicle(pool, vehicle_request(dealership_id, &test_vin(n)))
        .await
        .unwrap()
}

/// Approves a vehicle the way the admin workflow does: status update
/// and checklist upsert in one transaction.
pub async fn approve_vehicle(
    pool: &SqlitePool,
    vehicle_id: i64,
    admin_id: i64,
    flags: &ChecklistFlags,
) {
    let mut tx = pool.begin().await.unwrap();
    crate::vehicle::mark_verified(&mut *tx, vehicle_id, admin_id, Some("ok"))
        .await
        .unwrap();
    crate::checklist::upsert_checklist(&mut *tx, vehicle_id, flags)
        .await
        .unwrap();
    tx.commit().await.unwrap();
}
