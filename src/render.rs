use image::imageops::overlay;
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_filled_circle_mut;

use crate::config::SimulationParams;
use crate::hazard::HazardRecord;
use crate::plan::PlanItem;

/// Приблизительная длина одного градуса широты в метрах
const METERS_PER_DEGREE: f64 = 111_320.0;

const BACKGROUND: Rgba<u8> = Rgba([228, 233, 223, 255]);
// fillOpacity 0.4 у исходных маркеров опасностей
const HAZARD_FILL: Rgba<u8> = Rgba([255, 0, 0, 102]);
const PLAN_FILL: Rgba<u8> = Rgba([30, 90, 210, 255]);

/// Карта сессии: два накладываемых слоя маркеров поверх фоновой заливки
///
/// Слой опасностей только растёт вместе с набором; слой плана при каждой
/// генерации плана заменяется целиком.
#[derive(Debug, Clone)]
pub struct MapCanvas {
    pub width: u32,
    pub height: u32,
    /// (мин. широта, мин. долгота, макс. широта, макс. долгота)
    pub bounds: (f64, f64, f64, f64),
    pub meters_per_pixel: f64,
    pub hazard_layer: RgbaImage,
    pub plan_layer: RgbaImage,
}

impl MapCanvas {
    #[must_use]
    pub fn new(width: u32, height: u32, params: &SimulationParams) -> Self {
        let bounds = params.bounding_box();
        let lat_span = bounds.2 - bounds.0;
        let meters_per_pixel = lat_span * METERS_PER_DEGREE / f64::from(height);

        Self {
            width,
            height,
            bounds,
            meters_per_pixel,
            hazard_layer: RgbaImage::new(width, height),
            plan_layer: RgbaImage::new(width, height),
        }
    }

    /// Проекция (широта, долгота) → пиксель: широта растёт вверх,
    /// поэтому ось Y переворачивается
    #[must_use]
    pub fn to_pixel(&self, location: (f64, f64)) -> (i32, i32) {
        let (min_lat, min_lng, max_lat, max_lng) = self.bounds;
        let x = (location.1 - min_lng) / (max_lng - min_lng) * f64::from(self.width);
        let y = (max_lat - location.0) / (max_lat - min_lat) * f64::from(self.height);
        (x.round() as i32, y.round() as i32)
    }

    /// Рисует круговой маркер опасности с радиусом, пропорциональным риску
    pub fn draw_hazard(&mut self, hazard: &HazardRecord, radius_scale: f64) {
        let center = self.to_pixel(hazard.location);
        let radius = (hazard.marker_radius(radius_scale) / self.meters_per_pixel).max(2.0) as i32;
        draw_filled_circle_mut(&mut self.hazard_layer, center, radius, HAZARD_FILL);
    }

    /// Полностью заменяет слой плана новым набором маркеров
    pub fn set_plan(&mut self, items: &[PlanItem]) {
        self.plan_layer = RgbaImage::new(self.width, self.height);
        for item in items {
            let center = self.to_pixel(item.location);
            draw_filled_circle_mut(&mut self.plan_layer, center, 4, PLAN_FILL);
        }
    }

    /// Склеивает фон и оба слоя в итоговое изображение
    #[must_use]
    pub fn to_rgba_image(&self) -> RgbaImage {
        let mut img = RgbaImage::from_pixel(self.width, self.height, BACKGROUND);
        overlay(&mut img, &self.hazard_layer, 0, 0);
        overlay(&mut img, &self.plan_layer, 0, 0);
        img
    }

    pub fn save_as_png(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.to_rgba_image().save(path)?;
        Ok(())
    }
}
