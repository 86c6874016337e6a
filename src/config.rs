// src/config.rs
//! Конфигурация симуляции опасностей
//!
//! Этот модуль определяет все параметры, управляющие сессией симуляции:
//! - Сид генератора случайных чисел (детерминированные сессии)
//! - Центр города и разброс координат (ограничивающий прямоугольник)
//! - Смещение маркеров плана эвакуации
//! - Масштаб радиуса маркеров опасностей
//!
//! Все структуры поддерживают сериализацию в TOML/JSON для удобной настройки через конфигурационные файлы.

use serde::{Deserialize, Serialize};
use std::fs;

/// Центр города Даэт (Камаринес-Норте, Филиппины)
pub const DAET: (f64, f64) = (14.1122, 122.9550);

/// Основные параметры симуляции
///
/// Полная конфигурация одной сессии. Поддерживает загрузку из TOML-файлов;
/// каждое поле имеет значение по умолчанию, поэтому пустой файл тоже валиден.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationParams {
    /// Сид генератора случайных чисел (детерминированная симуляция)
    #[serde(default)]
    pub seed: u64,

    /// Центр города: (широта, долгота) в градусах (по умолчанию Даэт)
    #[serde(default = "default_origin")]
    pub origin: (f64, f64),

    /// Максимальное отклонение сгенерированной опасности от центра по каждой оси,
    /// в градусах (по умолчанию ±0.025)
    #[serde(default = "default_spread")]
    pub spread: f64,

    /// Смещение маркера плана относительно опасности по обеим осям, в градусах:
    /// маркеры плана не должны визуально перекрывать маркеры опасностей
    #[serde(default = "default_plan_offset")]
    pub plan_offset: f64,

    /// Радиус маркера опасности на единицу риска, в метрах
    /// (риск 9 → круг радиусом 1080 м)
    #[serde(default = "default_marker_radius_scale")]
    pub marker_radius_scale: f64,
}

fn default_origin() -> (f64, f64) {
    DAET
}
fn default_spread() -> f64 {
    0.025
}
fn default_plan_offset() -> f64 {
    0.003
}
fn default_marker_radius_scale() -> f64 {
    120.0
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            seed: 0,
            origin: DAET,
            spread: 0.025,
            plan_offset: 0.003,
            marker_radius_scale: 120.0,
        }
    }
}

impl SimulationParams {
    /// Загружает параметры из TOML-файла
    ///
    /// # Аргументы
    /// * `path` - путь к файлу конфигурации в формате TOML
    ///
    /// # Ошибки
    /// Возвращает ошибку, если файл не найден или содержит недопустимый формат.
    ///
    /// # Пример
    /// ```toml
    /// # session.toml
    /// seed = 42
    /// origin = [14.1122, 122.9550]
    /// spread = 0.025
    /// ```
    pub fn from_toml_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let params: Self = toml::from_str(&contents)?;
        Ok(params)
    }

    /// Возвращает ограничивающий прямоугольник сессии:
    /// `(мин. широта, мин. долгота, макс. широта, макс. долгота)`
    #[must_use]
    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        (
            self.origin.0 - self.spread,
            self.origin.1 - self.spread,
            self.origin.0 + self.spread,
            self.origin.1 + self.spread,
        )
    }
}
