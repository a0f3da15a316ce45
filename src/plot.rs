use crate::{
    config,
    data::{PolarPoint, ScanSample},
    error::ScanError,
};
use std::f64::consts::TAU;

/// Everything needed to draw one polar scatter plot.
#[derive(Debug, Clone)]
pub struct PolarPlot {
    pub title: String,
    pub points: Vec<PolarPoint>,
    /// Upper bound of the radial axis. The lower bound is always 0.
    pub radial_max: f64,
    pub rings: usize,
    pub spokes: usize,
}

impl PolarPlot {
    pub fn new(samples: &[ScanSample], style: &config::Plot) -> Result<Self, ScanError> {
        let max_distance = samples
            .iter()
            .map(|sample| sample.distance)
            .reduce(f64::max)
            .ok_or(ScanError::EmptyData)?;

        Ok(Self {
            title: style.title.to_string(),
            points: samples.iter().map(PolarPoint::from).collect(),
            radial_max: max_distance * style.radial_margin,
            rings: style.rings.get(),
            spokes: style.spokes.get(),
        })
    }

    /// Radii of the evenly spaced grid circles, the outermost being `radial_max`.
    pub fn ring_radii(&self) -> Vec<f64> {
        let step = self.radial_max / self.rings as f64;
        (1..=self.rings).map(|index| step * index as f64).collect()
    }

    /// Angles of the radial grid lines in radians, starting at 0.
    pub fn spoke_angles(&self) -> Vec<f64> {
        let step = TAU / self.spokes as f64;
        (0..self.spokes).map(|index| step * index as f64).collect()
    }

    /// Maps a polar coordinate onto a plane centered at the origin, where
    /// `radial_max` lands at distance `extent`. Angle 0 points along +x and
    /// angles grow counter-clockwise.
    pub fn project(&self, angle_rad: f64, radius: f64, extent: f32) -> [f32; 2] {
        // A plot whose distances are all 0 has nothing to scale against.
        let scale = if self.radial_max > 0.0 {
            extent as f64 / self.radial_max
        } else {
            0.0
        };
        let r = radius * scale;
        [(r * angle_rad.cos()) as f32, (r * angle_rad.sin()) as f32]
    }
}

/// Formats a grid label without trailing zeros.
pub fn format_label(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round())
    } else {
        format!("{value:.1}")
    }
}
