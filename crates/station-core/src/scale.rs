//! Viewport ↔ design-space mapping.
//!
//! The stage is authored on a fixed 1920×1080 canvas and scaled uniformly so
//! that it covers the viewport. Hotspot positions are stored as percentages
//! of that canvas, which keeps them valid at any viewport size.

use crate::constants::{DESIGN_ASPECT, DESIGN_HEIGHT, DESIGN_WIDTH};
use glam::DVec2;

/// A point in design space, expressed as percentages of the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DesignPoint {
    pub left: f64,
    pub top: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleTransform {
    pub scale: f64,
}

impl Default for ScaleTransform {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl ScaleTransform {
    /// Aspect-preserving cover fit of the design canvas into the viewport.
    pub fn fit(viewport_width: f64, viewport_height: f64) -> Self {
        if !(viewport_width > 0.0 && viewport_height > 0.0) {
            return Self::default();
        }
        let scale = if viewport_width / viewport_height > DESIGN_ASPECT {
            viewport_width / DESIGN_WIDTH
        } else {
            viewport_height / DESIGN_HEIGHT
        };
        Self { scale }
    }

    /// Client pixels relative to the stage origin, in unscaled design pixels.
    #[inline]
    pub fn client_to_design_px(&self, client: DVec2, origin: DVec2) -> DVec2 {
        (client - origin) / self.scale
    }

    /// Client pixels to design-space percentages, rounded to two decimals.
    pub fn client_to_percent(&self, client: DVec2, origin: DVec2) -> DesignPoint {
        let px = self.client_to_design_px(client, origin);
        DesignPoint {
            left: round_percent(px.x / DESIGN_WIDTH),
            top: round_percent(px.y / DESIGN_HEIGHT),
        }
    }

    /// Inverse mapping, used to place hotspot markers over the scaled stage.
    pub fn percent_to_client(&self, point: DesignPoint, origin: DVec2) -> DVec2 {
        let design = DVec2::new(
            point.left / 100.0 * DESIGN_WIDTH,
            point.top / 100.0 * DESIGN_HEIGHT,
        );
        origin + design * self.scale
    }

    /// CSS transform for the centred 1920×1080 stage element.
    pub fn css_transform(&self) -> String {
        format!("translate(-50%, -50%) scale({})", self.scale)
    }
}

/// Fraction (0..1) to a percentage rounded half-up to two decimals.
#[inline]
pub fn round_percent(fraction: f64) -> f64 {
    (fraction * 10_000.0 + 0.5).floor() / 100.0
}

/// Shortest decimal form of a percentage (`50`, `12.5`, `33.33`).
pub fn format_percent(value: f64) -> String {
    format!("{value}%")
}
