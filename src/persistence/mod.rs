use std::{fs, path::PathBuf};

use serde::Serialize;

use crate::core::TangonoteError;

const APP_NAME: &str = "tangonote";

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        let _ = fs::create_dir_all(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

/// Serialize `data` and replace the stored file wholesale.
pub fn save_json<T: Serialize>(data: &T, filename: &str) -> Result<(), TangonoteError> {
    let file_path = get_data_file_path(filename);
    let json = serde_json::to_string_pretty(data)?;
    fs::write(&file_path, json)?;
    log::debug!("Data saved to: {}", file_path.display());
    Ok(())
}
