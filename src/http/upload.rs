use axum::{body::Bytes, extract::Multipart};
use rand::Rng;
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use crate::{errors::AppError, models::car::{CarDetails, split_list}};

pub const MAX_IMAGES: usize = 10;
pub const IMAGE_URL_PREFIX: &str = "/images";

pub struct UploadedFile {
    pub original_name: Option<String>,
    pub bytes: Bytes,
}

/// A multipart car form: text fields plus the files sent under one field name.
#[derive(Default)]
pub struct CarForm {
    pub fields: HashMap<String, String>,
    pub files: Vec<UploadedFile>,
}

impl CarForm {
    pub async fn from_multipart(mut multipart: Multipart, file_field: &str) -> Result<Self, AppError> {
        let mut form = CarForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {}", e)))?
        {
            let name = field.name().unwrap_or_default().to_string();

            if name == file_field {
                if form.files.len() >= MAX_IMAGES {
                    return Err(AppError::BadRequest(format!(
                        "At most {MAX_IMAGES} images can be uploaded"
                    )));
                }
                let original_name = field.file_name().map(String::from);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read image: {}", e)))?;
                if !bytes.is_empty() {
                    form.files.push(UploadedFile { original_name, bytes });
                }
            } else {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Invalid field '{}': {}", name, e)))?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }

    fn text(&self, key: &str) -> String {
        self.fields
            .get(key)
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    }

    /// Listing fields from the form. Price gets the `priceUnit` suffix when present.
    pub fn details(&self) -> Result<CarDetails, AppError> {
        let model = self.text("model");
        let brand = self.text("brand");
        if model.is_empty() || brand.is_empty() {
            return Err(AppError::BadRequest("Brand and model are required".into()));
        }

        let year = match self.text("year") {
            y if y.is_empty() => None,
            y => Some(
                y.parse::<i32>()
                    .map_err(|_| AppError::BadRequest(format!("Invalid year: {}", y)))?,
            ),
        };

        let price = match (self.text("price"), self.text("priceUnit")) {
            (price, unit) if unit.is_empty() => price,
            (price, unit) => format!("{price} {unit}"),
        };

        Ok(CarDetails {
            model,
            brand,
            price,
            description: self.text("description"),
            year,
            fuel_type: self.text("fuelType"),
            mileage: self.text("mileage"),
            transmission: self.text("transmission"),
            engine_capacity: self.text("engineCapacity"),
            seating_capacity: self.text("seatingCapacity"),
            body_type: self.text("bodyType"),
            safety_features: split_list(&self.text("safetyFeatures")),
            boot_space: self.text("bootSpace"),
            features: split_list(&self.text("features")),
            warranty: self.text("warranty"),
        })
    }
}

/// `<millis>-<random><.ext>`, keeping only a plain alphanumeric extension.
pub fn unique_file_name(original_name: Option<&str>) -> String {
    let suffix: u32 = rand::rng().random_range(0..1_000_000_000);
    let extension = original_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
        .unwrap_or_default();

    format!("{}-{}{}", chrono::Utc::now().timestamp_millis(), suffix, extension)
}

/// Writes the files into `dir` and returns their public URLs.
pub async fn save_images(dir: &Path, files: Vec<UploadedFile>) -> Result<Vec<String>, AppError> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| AppError::StorageError(format!("Failed to create image directory: {}", e)))?;

    let mut urls = Vec::with_capacity(files.len());
    for file in files {
        let file_name = unique_file_name(file.original_name.as_deref());
        if let Err(e) = tokio::fs::write(dir.join(&file_name), &file.bytes).await {
            remove_images(dir, &urls).await;
            return Err(AppError::StorageError(format!("Failed to store image: {}", e)));
        }
        urls.push(format!("{IMAGE_URL_PREFIX}/{file_name}"));
    }

    tracing::info!("Stored {} uploaded image(s)", urls.len());

    Ok(urls)
}

/// Maps a stored `/images/<file>` URL back to a path inside `dir`.
pub fn image_path(dir: &Path, url: &str) -> Option<PathBuf> {
    Path::new(url).file_name().map(|name| dir.join(name))
}

/// Best-effort removal; failures are logged and otherwise ignored.
pub async fn remove_images(dir: &Path, urls: &[String]) {
    for url in urls {
        let Some(path) = image_path(dir, url) else {
            tracing::warn!("Skipping malformed image URL: {}", url);
            continue;
        };
        match tokio::fs::remove_file(&path).await {
            Ok(()) => tracing::debug!("Deleted image file {}", path.display()),
            Err(e) => tracing::error!("Error deleting file {}: {}", path.display(), e),
        }
    }
}
