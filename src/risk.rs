use serde::Serialize;

use crate::hazard::HazardRecord;

/// Качественная классификация среднего риска по городу
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskBand {
    Low,
    Moderate,
    High,
}

impl RiskBand {
    /// Классифицирует числовое среднее: `High` при > 7, `Moderate` при (4, 7],
    /// иначе `Low`. Пороги покрывают всю ось без пересечений.
    #[must_use]
    pub fn classify(average: f64) -> Self {
        if average > 7.0 {
            RiskBand::High
        } else if average > 4.0 {
            RiskBand::Moderate
        } else {
            RiskBand::Low
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            RiskBand::Low => "LOW",
            RiskBand::Moderate => "MODERATE",
            RiskBand::High => "HIGH",
        }
    }
}

/// Сводка по всем зарегистрированным опасностям сессии
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskReport {
    pub count: usize,
    pub total: u32,
    /// Средний риск, округлённый до 2 знаков; 0 для пустой сессии
    pub average: f64,
    pub band: RiskBand,
}

impl RiskReport {
    /// Текстовый отчёт для показа пользователю
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Daet Risk Analysis\nHazards: {}\nAvg Risk: {:.2}\nRisk Level: {}",
            self.count,
            self.average,
            self.band.label()
        )
    }
}

/// Сводит список опасностей к отчёту: количество, сумма, среднее, класс риска
///
/// Классификация идёт по числовому среднему, а не по его строковому
/// представлению.
#[must_use]
pub fn analyze(hazards: &[HazardRecord]) -> RiskReport {
    let count = hazards.len();
    let total: u32 = hazards.iter().map(|h| u32::from(h.risk)).sum();

    // Явная защита от деления на ноль: пустая сессия даёт среднее 0
    let average = if count == 0 {
        0.0
    } else {
        round2(f64::from(total) / count as f64)
    };

    RiskReport {
        count,
        total,
        average,
        band: RiskBand::classify(average),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
