use std::fs;
use std::path::Path;

use common::error::{AppError, Res};
use image::{GrayImage, Luma};
use qrcode::{Color, QrCode};
use serde::Serialize;

const MODULE_SCALE: u32 = 8;
const QUIET_ZONE: u32 = 4;

/// The JSON document encoded into a vehicle's QR image. Scanning it is
/// enough to look the listing up without typing the VIN.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QrPayload {
    pub vehicle_id: i64,
    pub vin: String,
    pub plate_number: Option<String>,
    pub dealership_id: i64,
}

/// Renders the payload as a PNG named `vehicle_<id>.png` under `dir`
/// and returns the file name.
pub fn generate_vehicle_qr(dir: &str, payload: &QrPayload) -> Res<String> {
    let data = serde_json::to_string(payload)
        .map_err(|e| AppError::Internal(format!("Failed to serialize QR payload: {}", e)))?;
    let code = QrCode::new(data.as_bytes())
        .map_err(|e| AppError::Internal(format!("Failed to build QR code: {}", e)))?;

    let image = rasterize(&code);

    fs::create_dir_all(dir)
        .map_err(|e| AppError::Internal(format!("Failed to create QR directory: {}", e)))?;
    let file_name = format!("vehicle_{}.png", payload.vehicle_id);
    image
        .save(Path::new(dir).join(&file_name))
        .map_err(|e| AppError::Internal(format!("Failed to write QR image: {}", e)))?;

    Ok(file_name)
}

fn rasterize(code: &QrCode) -> GrayImage {
    let modules = code.width();
    let colors = code.to_colors();
    let size = (modules as u32 + QUIET_ZONE * 2) * MODULE_SCALE;
    let mut image = GrayImage::from_pixel(size, size, Luma([255u8]));

    for (index, color) in colors.iter().enumerate() {
        if *color != Color::Dark {
            continue;
        }
        let module_x = (index % modules) as u32 + QUIET_ZONE;
        let module_y = (index / modules) as u32 + QUIET_ZONE;
        for dy in 0..MODULE_SCALE {
            for dx in 0..MODULE_SCALE {
                image.put_pixel(
                    module_x * MODULE_SCALE + dx,
                    module_y * MODULE_SCALE + dy,
                    Luma([0u8]),
                );
            }
        }
    }

    image
}
