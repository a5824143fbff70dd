use std::fs;
use std::path::Path;

use actix_multipart::form::tempfile::TempFile;
use common::error::{AppError, Res};
use uuid::Uuid;

const ALLOWED_EXTENSIONS: [&str; 5] = ["jpeg", "jpg", "png", "gif", "webp"];

/// Checks an uploaded file name against the image extension allow-list.
pub fn allowed_image(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ALLOWED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Persists one uploaded vehicle image under `dir` with a fresh
/// `vehicle-<uuid>.<ext>` name and returns the stored file name.
///
/// Rejects anything outside the image allow-list before touching disk.
pub fn save_vehicle_image(file: &TempFile, dir: &str) -> Res<String> {
    let original_name = file.file_name.as_deref().unwrap_or_default();
    if !allowed_image(original_name) {
        return Err(AppError::BadRequest(
            "Only image files are allowed (jpeg, jpg, png, gif, webp)".to_string(),
        ));
    }
    if let Some(content_type) = &file.content_type {
        if content_type.type_().as_str() != "image" {
            return Err(AppError::BadRequest(
                "Only image files are allowed (jpeg, jpg, png, gif, webp)".to_string(),
            ));
        }
    }

    let extension = Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("jpg")
        .to_lowercase();
    let stored_name = format!("vehicle-{}.{}", Uuid::new_v4(), extension);

    fs::create_dir_all(dir)
        .map_err(|e| AppError::Internal(format!("Failed to create upload directory: {}", e)))?;
    fs::copy(file.file.path(), Path::new(dir).join(&stored_name))
        .map_err(|e| AppError::Internal(format!("Failed to store uploaded image: {}", e)))?;

    Ok(stored_name)
}

/// Best-effort removal of stored images after a failed insert. Failures
/// are logged and otherwise ignored; there is no retry.
pub fn remove_images(dir: &str, stored_names: &[String]) {
    for name in stored_names {
        let path = Path::new(dir).join(name);
        if let Err(e) = fs::remove_file(&path) {
            log::warn!("Failed to clean up orphaned upload {}: {}", path.display(), e);
        }
    }
}
