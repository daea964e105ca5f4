// src/gui/pages/map.rs
//
// Point map of geocoded household addresses. Only rows with both
// coordinates after filtering make it here; addresses that never geocoded
// (null cache entries) are simply absent. Plain equirectangular fit of
// the visible points — at neighborhood scale the distortion is invisible.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, vec2};

use crate::gui::{app::App, router::PageKind};

use super::Page;

pub struct MapPage;
pub static PAGE: MapPage = MapPage;

const POINT_RADIUS: f32 = 5.0;
const HOVER_RADIUS: f32 = 9.0;
const MARGIN: f32 = 24.0;

impl Page for MapPage {
    fn kind(&self) -> PageKind { PageKind::Map }
    fn title(&self) -> &'static str { "Map" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let points: Vec<(f64, f64, String)> = app
            .view
            .iter()
            .filter_map(|r| match (r.lat, r.lon) {
                (Some(lat), Some(lon)) => Some((lat, lon, r.name.clone())),
                _ => None,
            })
            .collect();

        if points.is_empty() {
            ui.add_space(12.0);
            ui.label("No geocoded addresses for the current filter.");
            return;
        }

        let (resp, painter) =
            ui.allocate_painter(ui.available_size(), Sense::hover());
        let rect = resp.rect;

        painter.rect_filled(rect, 4.0, ui.visuals().extreme_bg_color);

        let inner = rect.shrink(MARGIN);
        let accent = ui.visuals().hyperlink_color;

        let positions: Vec<Pos2> = {
            let (lat_lo, lat_hi, lon_lo, lon_hi) = bounds(&points);
            points
                .iter()
                .map(|&(lat, lon, _)| {
                    project(lat, lon, lat_lo, lat_hi, lon_lo, lon_hi, inner)
                })
                .collect()
        };

        for pos in &positions {
            painter.circle_filled(*pos, POINT_RADIUS, accent);
            painter.circle_stroke(*pos, POINT_RADIUS, Stroke::new(1.0, Color32::WHITE));
        }

        // Name label for the point under the cursor
        if let Some(cursor) = resp.hover_pos() {
            let hit = positions
                .iter()
                .enumerate()
                .filter(|(_, p)| p.distance(cursor) <= HOVER_RADIUS)
                .min_by(|(_, a), (_, b)| {
                    a.distance(cursor).total_cmp(&b.distance(cursor))
                });
            if let Some((i, pos)) = hit {
                painter.text(
                    *pos + vec2(0.0, -(POINT_RADIUS + 4.0)),
                    Align2::CENTER_BOTTOM,
                    &points[i].2,
                    FontId::proportional(13.0),
                    ui.visuals().strong_text_color(),
                );
            }
        }
    }
}

/// Lat/lon extremes of the point set, padded so a lone point (or points on
/// one street) still spreads instead of dividing by zero.
fn bounds(points: &[(f64, f64, String)]) -> (f64, f64, f64, f64) {
    let mut lat_lo = f64::MAX;
    let mut lat_hi = f64::MIN;
    let mut lon_lo = f64::MAX;
    let mut lon_hi = f64::MIN;
    for &(lat, lon, _) in points {
        lat_lo = lat_lo.min(lat);
        lat_hi = lat_hi.max(lat);
        lon_lo = lon_lo.min(lon);
        lon_hi = lon_hi.max(lon);
    }

    const MIN_SPAN: f64 = 0.005;
    if lat_hi - lat_lo < MIN_SPAN {
        let mid = (lat_hi + lat_lo) / 2.0;
        lat_lo = mid - MIN_SPAN / 2.0;
        lat_hi = mid + MIN_SPAN / 2.0;
    }
    if lon_hi - lon_lo < MIN_SPAN {
        let mid = (lon_hi + lon_lo) / 2.0;
        lon_lo = mid - MIN_SPAN / 2.0;
        lon_hi = mid + MIN_SPAN / 2.0;
    }
    (lat_lo, lat_hi, lon_lo, lon_hi)
}

fn project(
    lat: f64,
    lon: f64,
    lat_lo: f64,
    lat_hi: f64,
    lon_lo: f64,
    lon_hi: f64,
    rect: Rect,
) -> Pos2 {
    let fx = ((lon - lon_lo) / (lon_hi - lon_lo)) as f32;
    let fy = ((lat - lat_lo) / (lat_hi - lat_lo)) as f32;
    // screen y grows downward; latitude grows upward
    Pos2 {
        x: rect.left() + fx * rect.width(),
        y: rect.bottom() - fy * rect.height(),
    }
}
