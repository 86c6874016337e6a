use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::SimulationParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HazardType {
    Flood,
    Typhoon,
    StormSurge,
    Landslide,
    /// Нераспознанный тип из внешних данных; генератор его никогда не выдаёт
    #[serde(other)]
    Unknown,
}

impl HazardType {
    /// Четыре известных типа опасностей, из которых выбирает генератор
    pub const KNOWN: [HazardType; 4] = [
        HazardType::Flood,
        HazardType::Typhoon,
        HazardType::StormSurge,
        HazardType::Landslide,
    ];

    /// «ИИ-модель» риска для Даэта: фиксированная таблица тип → балл в [5, 9]
    #[must_use]
    pub fn risk_score(self) -> u8 {
        match self {
            HazardType::Flood => 9,
            HazardType::Typhoon => 8,
            HazardType::StormSurge => 7,
            HazardType::Landslide => 6,
            HazardType::Unknown => 5,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            HazardType::Flood => "flood",
            HazardType::Typhoon => "typhoon",
            HazardType::StormSurge => "storm_surge",
            HazardType::Landslide => "landslide",
            HazardType::Unknown => "unknown",
        }
    }
}

/// Одна обнаруженная опасность
///
/// `location` — (широта, долгота) в градусах; `risk` всегда равен
/// `kind.risk_score()`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HazardRecord {
    #[serde(rename = "type")]
    pub kind: HazardType,
    pub location: (f64, f64),
    pub risk: u8,
}

impl HazardRecord {
    /// Радиус маркера на карте в метрах: пропорционален риску
    #[must_use]
    pub fn marker_radius(&self, scale: f64) -> f64 {
        f64::from(self.risk) * scale
    }

    /// Текст всплывающей подсказки маркера
    #[must_use]
    pub fn popup_text(&self) -> String {
        format!("Hazard: {}\nRisk Level: {}", self.kind.label(), self.risk)
    }
}

/// Случайная точка внутри прямоугольника города: каждая ось сэмплируется
/// независимо и равномерно из `origin ± spread`
pub fn random_coord<R: Rng>(rng: &mut R, params: &SimulationParams) -> (f64, f64) {
    let lat = params.origin.0 + rng.gen_range(-params.spread..=params.spread);
    let lng = params.origin.1 + rng.gen_range(-params.spread..=params.spread);
    (lat, lng)
}

/// Симулирует обнаружение одной опасности: равномерный выбор типа,
/// случайная точка, риск из таблицы
pub fn random_hazard<R: Rng>(rng: &mut R, params: &SimulationParams) -> HazardRecord {
    let kind = HazardType::KNOWN[rng.gen_range(0..HazardType::KNOWN.len())];
    let location = random_coord(rng, params);
    HazardRecord {
        kind,
        location,
        risk: kind.risk_score(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn risk_table_is_fixed() {
        assert_eq!(HazardType::Flood.risk_score(), 9);
        assert_eq!(HazardType::Typhoon.risk_score(), 8);
        assert_eq!(HazardType::StormSurge.risk_score(), 7);
        assert_eq!(HazardType::Landslide.risk_score(), 6);
        assert_eq!(HazardType::Unknown.risk_score(), 5);
    }

    #[test]
    fn generated_hazards_stay_in_bounding_box() {
        let params = SimulationParams::default();
        let (min_lat, min_lng, max_lat, max_lng) = params.bounding_box();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..1000 {
            let hazard = random_hazard(&mut rng, &params);
            let (lat, lng) = hazard.location;
            assert!(lat >= min_lat && lat <= max_lat);
            assert!(lng >= min_lng && lng <= max_lng);
            assert_eq!(hazard.risk, hazard.kind.risk_score());
            assert!((5..=9).contains(&hazard.risk));
            assert_ne!(hazard.kind, HazardType::Unknown);
        }
    }

    #[test]
    fn generation_is_deterministic_for_equal_seeds() {
        let params = SimulationParams::default();
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..50 {
            assert_eq!(random_hazard(&mut a, &params), random_hazard(&mut b, &params));
        }
    }

    #[test]
    fn unknown_tag_deserializes_to_unknown() {
        let record: HazardRecord =
            serde_json::from_str(r#"{"type":"earthquake","location":[14.1,122.9],"risk":5}"#)
                .unwrap();
        assert_eq!(record.kind, HazardType::Unknown);
    }

    #[test]
    fn known_tags_roundtrip_snake_case() {
        let json = serde_json::to_string(&HazardType::StormSurge).unwrap();
        assert_eq!(json, r#""storm_surge""#);
    }

    #[test]
    fn popup_text_names_type_and_risk() {
        let hazard = HazardRecord {
            kind: HazardType::Flood,
            location: (14.1, 122.9),
            risk: 9,
        };
        assert_eq!(hazard.popup_text(), "Hazard: flood\nRisk Level: 9");
        assert_eq!(hazard.marker_radius(120.0), 1080.0);
    }
}
