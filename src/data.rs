/// One row of a scan file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanSample {
    pub angle_deg: f64,
    pub distance: f64,
}

/// A sample placed on the polar plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarPoint {
    pub angle_rad: f64,
    pub radius: f64,
}

impl From<&ScanSample> for PolarPoint {
    fn from(from: &ScanSample) -> Self {
        let ScanSample {
            angle_deg,
            distance,
        } = *from;

        Self {
            angle_rad: angle_deg.to_radians(),
            radius: distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn converts_degrees_to_radians() {
        for deg in [-90.0, 0.0, 45.0, 359.5, 720.0] {
            let point = PolarPoint::from(&ScanSample {
                angle_deg: deg,
                distance: 3.0,
            });
            assert!((point.angle_rad - deg * PI / 180.0).abs() < 1e-12);
            assert_eq!(point.radius, 3.0);
        }
    }
}
