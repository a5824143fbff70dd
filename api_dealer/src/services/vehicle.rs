use actix_multipart::form::text::Text;
use common::error::{AppError, Res};
use common::vin;
use db::dtos::vehicle::VehicleCreateRequest;
use db::models::vehicle::{Vehicle, VehicleStatus};
use media::qr::QrPayload;
use sqlx::SqlitePool;

use crate::dtos::vehicle::AddVehicleForm;
use crate::services::dealer::require_dealership;

const MAX_IMAGES: usize = 10;

/// Creates a listing for the dealership behind `user_id`.
///
/// Validation (VIN shape, image count/type) happens before anything is
/// written. Images are stored first; if the insert then fails they are
/// removed best-effort. The QR code is generated after the row exists,
/// since its payload includes the vehicle id.
pub async fn create_vehicle(
    pool: &SqlitePool,
    upload_dir: &str,
    qr_dir: &str,
    user_id: i64,
    form: AddVehicleForm,
) -> Res<Vehicle> {
    let dealership = require_dealership(pool, user_id).await?;

    if form.vehicle_images.len() > MAX_IMAGES {
        return Err(AppError::BadRequest(format!(
            "Too many files. Maximum is {} images.",
            MAX_IMAGES
        )));
    }

    let vin_value = form.vin.trim().to_string();
    if !vin::is_valid(&vin_value) {
        return Err(AppError::BadRequest(
            "Invalid VIN format (17 characters, no I, O, Q)".to_string(),
        ));
    }

    let mut stored = Vec::new();
    for file in &form.vehicle_images {
        match media::upload::save_vehicle_image(file, upload_dir) {
            Ok(name) => stored.push(name),
            Err(error) => {
                media::upload::remove_images(upload_dir, &stored);
                return Err(error);
            }
        }
    }
    let image_urls: Vec<String> = stored
        .iter()
        .map(|name| format!("/uploads/vehicles/{}", name))
        .collect();

    let license_numbers: Vec<String> = [
        &form.license_number_1,
        &form.license_number_2,
        &form.license_number_3,
    ]
    .into_iter()
    .filter_map(|t| t.as_ref().map(|t| t.0.clone()))
    .filter(|v| !v.trim().is_empty())
    .collect();

    let plate_number = text(form.plate_number);
    let request = VehicleCreateRequest {
        dealership_id: dealership.id,
        vin: vin_value.clone(),
        make: form.make.into_inner(),
        model: form.model.into_inner(),
        year: form.year.into_inner(),
        mileage: form.mileage.into_inner(),
        price: form.price.into_inner(),
        color: text(form.color),
        body_type: text(form.body_type),
        fuel_type: text(form.fuel_type),
        transmission: text(form.transmission),
        previous_owners: form.previous_owners.map(Text::into_inner).unwrap_or(0),
        registration_authority: text(form.registration_authority),
        plate_number: plate_number.clone(),
        engine_number: text(form.engine_number),
        tare_weight: form.tare_weight.map(Text::into_inner),
        date_liability_licensing: text(form.date_liability_licensing),
        vehicle_status: text(form.vehicle_status),
        date_liable_registration: text(form.date_liable_registration),
        license_numbers: Some(serde_json::to_string(&license_numbers).unwrap_or_default()),
        engine_type: text(form.engine_type),
        engine_capacity: text(form.engine_capacity),
        service_history: text(form.service_history),
        accident_history: text(form.accident_history),
        recall_information: text(form.recall_information),
        additional_features: text(form.additional_features),
        description: text(form.description),
        image_urls: Some(serde_json::to_string(&image_urls).unwrap_or_default()),
    };

    let mut vehicle = match db::vehicle::insert_vehicle(pool, request).await {
        Ok(vehicle) => vehicle,
        Err(error) => {
            media::upload::remove_images(upload_dir, &stored);
            return Err(match error {
                AppError::Conflict(_) => AppError::Conflict(
                    "Vehicle with this VIN or plate number may already exist".to_string(),
                ),
                other => other,
            });
        }
    };

    let qr_file = media::qr::generate_vehicle_qr(
        qr_dir,
        &QrPayload {
            vehicle_id: vehicle.id,
            vin: vin_value,
            plate_number,
            dealership_id: dealership.id,
        },
    )?;
    let qr_path = format!("/qr-codes/{}", qr_file);
    db::vehicle::set_qr_code_path(pool, vehicle.id, &qr_path).await?;
    vehicle.qr_code_path = Some(qr_path);

    Ok(vehicle)
}

/// Removes a listing. Only the owning dealership may delete, and only
/// while the vehicle is still awaiting verification; both failures are
/// surfaced rather than silently ignored.
pub async fn delete_vehicle(pool: &SqlitePool, user_id: i64, vehicle_id: i64) -> Res<()> {
    let dealership = require_dealership(pool, user_id).await?;

    let vehicle = db::vehicle::get_owned_vehicle(pool, vehicle_id, dealership.id)
        .await?
        .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

    if vehicle.status != VehicleStatus::PendingVerification {
        return Err(AppError::Conflict(
            "Only vehicles awaiting verification can be removed".to_string(),
        ));
    }

    db::vehicle::delete_vehicle(pool, vehicle_id).await
}

fn text(value: Option<Text<String>>) -> Option<String> {
    value
        .map(Text::into_inner)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_multipart::form::tempfile::TempFile;
    use common::principal::Role;
    use db::testing::{seed_dealership, seed_user, seed_vehicle, test_vin};
    use std::io::Write;

    fn minimal_form(vin: &str) -> AddVehicleForm {
        AddVehicleForm {
            vehicle_images: Vec::new(),
            vin: Text(vin.to_string()),
            make: Text("Toyota".to_string()),
            model: Text("Hilux".to_string()),
            year: Text(2021),
            mileage: Text(30_000),
            price: Text(350_000.0),
            color: None,
            body_type: Some(Text("bakkie".to_string())),
            fuel_type: None,
            transmission: None,
            previous_owners: None,
            registration_authority: None,
            plate_number: Some(Text("CA 99-88-77".to_string())),
            engine_number: None,
            tare_weight: None,
            date_liability_licensing: None,
            vehicle_status: None,
            date_liable_registration: None,
            license_number_1: Some(Text("LIC-1".to_string())),
            license_number_2: None,
            license_number_3: None,
            engine_type: None,
            engine_capacity: None,
            service_history: None,
            accident_history: None,
            recall_information: None,
            additional_features: None,
            description: None,
        }
    }

    fn image_upload(name: &str) -> TempFile {
        let mut named = tempfile::NamedTempFile::new().unwrap();
        named.write_all(b"image bytes").unwrap();
        TempFile {
            file: named,
            content_type: None,
            file_name: Some(name.to_string()),
            size: 11,
        }
    }

    #[tokio::test]
    async fn add_vehicle_stores_images_and_generates_a_qr_code() {
        let pool = db::setup_in_memory().await.unwrap();
        let (user_id, dealership_id) = seed_dealership(&pool, "a").await;
        let uploads = tempfile::tempdir().unwrap();
        let qr = tempfile::tempdir().unwrap();

        let mut form = minimal_form(&test_vin(1));
        form.vehicle_images.push(image_upload("front.jpg"));

        let vehicle = create_vehicle(
            &pool,
            uploads.path().to_str().unwrap(),
            qr.path().to_str().unwrap(),
            user_id,
            form,
        )
        .await
        .unwrap();

        assert_eq!(vehicle.dealership_id, dealership_id);
        assert_eq!(vehicle.status, VehicleStatus::PendingVerification);

        let image_urls: Vec<String> =
            serde_json::from_str(vehicle.image_urls.as_deref().unwrap()).unwrap();
        assert_eq!(image_urls.len(), 1);
        assert!(image_urls[0].starts_with("/uploads/vehicles/vehicle-"));
        assert_eq!(std::fs::read_dir(uploads.path()).unwrap().count(), 1);

        assert_eq!(
            vehicle.qr_code_path.as_deref(),
            Some(format!("/qr-codes/vehicle_{}.png", vehicle.id).as_str())
        );
        assert!(qr.path().join(format!("vehicle_{}.png", vehicle.id)).exists());

        let stored = db::vehicle::get_vehicle_by_id(&*pool, vehicle.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.qr_code_path, vehicle.qr_code_path);
        let licenses: Vec<String> =
            serde_json::from_str(stored.license_numbers.as_deref().unwrap()).unwrap();
        assert_eq!(licenses, vec!["LIC-1".to_string()]);
    }

    #[tokio::test]
    async fn invalid_vin_fails_before_anything_is_written() {
        let pool = db::setup_in_memory().await.unwrap();
        let (user_id, _) = seed_dealership(&pool, "a").await;
        let uploads = tempfile::tempdir().unwrap();
        let qr = tempfile::tempdir().unwrap();

        let mut form = minimal_form("SHORTVIN");
        form.vehicle_images.push(image_upload("front.jpg"));

        let err = create_vehicle(
            &pool,
            uploads.path().to_str().unwrap(),
            qr.path().to_str().unwrap(),
            user_id,
            form,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(std::fs::read_dir(uploads.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn duplicate_vin_cleans_up_the_stored_images() {
        let pool = db::setup_in_memory().await.unwrap();
        let (user_id, dealership_id) = seed_dealership(&pool, "a").await;
        let uploads = tempfile::tempdir().unwrap();
        let qr = tempfile::tempdir().unwrap();

        seed_vehicle(&pool, dealership_id, 1).await;

        let mut form = minimal_form(&test_vin(1));
        form.vehicle_images.push(image_upload("front.jpg"));

        let err = create_vehicle(
            &pool,
            uploads.path().to_str().unwrap(),
            qr.path().to_str().unwrap(),
            user_id,
            form,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        // Orphaned uploads were removed again.
        assert_eq!(std::fs::read_dir(uploads.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn delete_requires_ownership_and_pending_status() {
        let pool = db::setup_in_memory().await.unwrap();
        let admin_id = seed_user(&pool, "admin", Role::Admin).await;
        let (owner_user, owner_dealership) = seed_dealership(&pool, "owner").await;
        let (intruder_user, _) = seed_dealership(&pool, "intruder").await;

        let pending = seed_vehicle(&pool, owner_dealership, 1).await;
        let verified = seed_vehicle(&pool, owner_dealership, 2).await;
        db::testing::approve_vehicle(
            &pool,
            verified.id,
            admin_id,
            &db::dtos::vehicle::ChecklistFlags::default(),
        )
        .await;

        // Someone else's dealership cannot see the vehicle at all.
        let err = delete_vehicle(&pool, intruder_user, pending.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        // A verified vehicle is no longer deletable.
        let err = delete_vehicle(&pool, owner_user, verified.id).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        // In both failure cases the rows are untouched.
        assert!(
            db::vehicle::get_vehicle_by_id(&*pool, pending.id)
                .await
                .unwrap()
                .is_some()
        );
        assert!(
            db::vehicle::get_vehicle_by_id(&*pool, verified.id)
                .await
                .unwrap()
                .is_some()
        );

        // The owner removes their own pending listing.
        delete_vehicle(&pool, owner_user, pending.id).await.unwrap();
        assert!(
            db::vehicle::get_vehicle_by_id(&*pool, pending.id)
                .await
                .unwrap()
                .is_none()
        );
    }
}
