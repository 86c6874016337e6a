use std::fs;

use crate::hazard::HazardRecord;

/// Имя файла выгрузки, предлагаемое пользователю
pub const EXPORT_FILENAME: &str = "daet_ai_plan.json";

/// MIME-тип выгрузки
pub const EXPORT_MIME: &str = "application/json";

/// Сериализует набор опасностей в читаемый JSON (отступ 2 пробела)
///
/// Пустой набор даёт `[]`.
pub fn to_json_pretty(hazards: &[HazardRecord]) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec_pretty(hazards)
}

/// Обратная операция: читает набор опасностей из байтов выгрузки
pub fn from_json(bytes: &[u8]) -> Result<Vec<HazardRecord>, serde_json::Error> {
    serde_json::from_slice(bytes)
}

/// Сохраняет выгрузку на диск
pub fn save_to_file(
    hazards: &[HazardRecord],
    path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    fs::write(path, to_json_pretty(hazards)?)?;
    Ok(())
}
