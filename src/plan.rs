// src/plan.rs
use serde::Serialize;

use crate::hazard::{HazardRecord, HazardType};

/// Одна рекомендация плана эвакуации, привязанная к точке рядом с опасностью
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanItem {
    pub location: (f64, f64),
    pub recommendation: &'static str,
}

impl PlanItem {
    #[must_use]
    pub fn popup_text(&self) -> String {
        format!("AI Recommendation:\n{}", self.recommendation)
    }
}

/// Фиксированная таблица тип опасности → мера защиты
///
/// `Unknown` не даёт рекомендации: для нераспознанного типа план не строится.
#[must_use]
pub fn recommendation(kind: HazardType) -> Option<&'static str> {
    match kind {
        HazardType::Flood => Some("Upgrade Drainage System"),
        HazardType::Typhoon => Some("Build Evacuation Center"),
        HazardType::StormSurge => Some("Construct Sea Wall"),
        HazardType::Landslide => Some("Slope Reinforcement"),
        HazardType::Unknown => None,
    }
}

/// Строит план по всем опасностям в порядке их обнаружения
///
/// Маркер рекомендации смещён на `offset` градусов по обеим осям, чтобы не
/// перекрывать маркер самой опасности.
#[must_use]
pub fn generate_plan(hazards: &[HazardRecord], offset: f64) -> Vec<PlanItem> {
    let mut items = Vec::with_capacity(hazards.len());

    for hazard in hazards {
        let Some(recommendation) = recommendation(hazard.kind) else {
            continue;
        };

        items.push(PlanItem {
            location: (hazard.location.0 + offset, hazard.location.1 + offset),
            recommendation,
        });
    }

    items
}
