// src/session.rs
//! Сессия симуляции
//!
//! Вся изменяемая сторона движка собрана в одном объекте `Session`:
//! параметры, генератор случайных чисел, набор опасностей, текст отчёта и
//! (опционально) канва карты. Никакого глобального состояния — несколько
//! независимых сессий могут жить одновременно, а тесты обходятся без
//! рендеринга вовсе.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::SimulationParams;
use crate::export;
use crate::hazard::{self, HazardRecord};
use crate::plan::{self, PlanItem};
use crate::render::MapCanvas;
use crate::risk::{self, RiskReport};

/// Одна сессия симуляции: единственный владелец набора опасностей
///
/// Набор создаётся пустым, в течение сессии только растёт (операции удаления
/// нет) и умирает вместе с сессией; наружу уходит только выгрузка в JSON.
pub struct Session {
    pub params: SimulationParams,
    rng: ChaCha8Rng,
    hazards: Vec<HazardRecord>,
    report_text: String,
    canvas: Option<MapCanvas>,
}

impl Session {
    #[must_use]
    pub fn new(params: SimulationParams) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(params.seed);
        Self {
            params,
            rng,
            hazards: Vec::new(),
            report_text: String::new(),
            canvas: None,
        }
    }

    /// Подключает канву, на которую сессия будет рисовать маркеры
    pub fn attach_canvas(&mut self, width: u32, height: u32) {
        self.canvas = Some(MapCanvas::new(width, height, &self.params));
    }

    #[must_use]
    pub fn hazards(&self) -> &[HazardRecord] {
        &self.hazards
    }

    #[must_use]
    pub fn report_text(&self) -> &str {
        &self.report_text
    }

    #[must_use]
    pub fn canvas(&self) -> Option<&MapCanvas> {
        self.canvas.as_ref()
    }

    /// Симулирует обнаружение опасности: добавляет запись в конец набора и
    /// рисует её маркер на подключённой канве
    pub fn detect_hazard(&mut self) -> HazardRecord {
        let hazard = hazard::random_hazard(&mut self.rng, &self.params);
        if let Some(canvas) = self.canvas.as_mut() {
            canvas.draw_hazard(&hazard, self.params.marker_radius_scale);
        }
        self.hazards.push(hazard);
        hazard
    }

    /// Сводит текущий набор к отчёту; текст отчёта заменяет предыдущий
    pub fn analyze(&mut self) -> RiskReport {
        let report = risk::analyze(&self.hazards);
        self.report_text = report.summary();
        report
    }

    /// Строит план по текущему набору; слой плана на канве заменяется
    /// целиком, а подтверждение дописывается к тексту отчёта
    pub fn generate_plan(&mut self) -> Vec<PlanItem> {
        let items = plan::generate_plan(&self.hazards, self.params.plan_offset);
        if let Some(canvas) = self.canvas.as_mut() {
            canvas.set_plan(&items);
        }
        self.report_text.push_str("\n\nAI Final Plan Generated");
        items
    }

    /// Выгрузка набора в JSON (см. [`export`])
    pub fn export_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        export::to_json_pretty(&self.hazards)
    }

    pub fn export_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        export::save_to_file(&self.hazards, path)
    }

    pub fn save_map_png(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        match &self.canvas {
            Some(canvas) => canvas.save_as_png(path),
            None => Err("no canvas attached to session".into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::RiskBand;

    #[test]
    fn equal_params_give_identical_sessions() {
        let params = SimulationParams {
            seed: 99,
            ..SimulationParams::default()
        };
        let mut a = Session::new(params.clone());
        let mut b = Session::new(params);

        for _ in 0..20 {
            assert_eq!(a.detect_hazard(), b.detect_hazard());
        }
        assert_eq!(a.hazards(), b.hazards());
    }

    #[test]
    fn hazard_set_grows_in_detection_order() {
        let mut session = Session::new(SimulationParams::default());
        let first = session.detect_hazard();
        let second = session.detect_hazard();

        assert_eq!(session.hazards().len(), 2);
        assert_eq!(session.hazards()[0], first);
        assert_eq!(session.hazards()[1], second);
    }

    #[test]
    fn analyze_replaces_report_and_plan_appends() {
        let mut session = Session::new(SimulationParams::default());
        session.detect_hazard();

        session.analyze();
        let first_report = session.report_text().to_owned();

        // Повторный анализ заменяет текст, а не дописывает
        session.analyze();
        assert_eq!(session.report_text(), first_report);

        // Подтверждение плана дописывается к отчёту
        session.generate_plan();
        assert_eq!(
            session.report_text(),
            format!("{first_report}\n\nAI Final Plan Generated")
        );
    }

    #[test]
    fn analyze_on_fresh_session_is_low() {
        let mut session = Session::new(SimulationParams::default());
        let report = session.analyze();
        assert_eq!(report.count, 0);
        assert_eq!(report.average, 0.0);
        assert_eq!(report.band, RiskBand::Low);
    }

    #[test]
    fn plan_markers_follow_hazards_on_canvas() {
        let mut session = Session::new(SimulationParams::default());
        session.attach_canvas(256, 256);

        session.detect_hazard();
        session.detect_hazard();
        let items = session.generate_plan();

        assert_eq!(items.len(), 2);
        let canvas = session.canvas().unwrap();
        assert!(canvas.hazard_layer.pixels().any(|p| p.0[3] != 0));
        assert!(canvas.plan_layer.pixels().any(|p| p.0[3] != 0));
    }

    #[test]
    fn export_roundtrip_matches_session_set() {
        let mut session = Session::new(SimulationParams::default());
        for _ in 0..5 {
            session.detect_hazard();
        }
        let bytes = session.export_json().unwrap();
        let restored = crate::export::from_json(&bytes).unwrap();
        assert_eq!(restored, session.hazards());
    }
}
