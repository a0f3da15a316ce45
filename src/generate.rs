use crate::data::ScanSample;
use anyhow::{Context, Result};
use rand::Rng;
use std::{io::Write, path::Path};

const BASE_DISTANCE: f64 = 1000.0;
const OBSTACLE_AMPLITUDE: f64 = 300.0;
const NOISE: f64 = 50.0;

/// Simulates one full revolution, one sample per degree: a sinusoidal
/// obstacle pattern with uniform noise.
pub fn synthetic_scan<R: Rng>(rng: &mut R) -> Vec<ScanSample> {
    (0..360)
        .map(|angle| {
            let angle_deg = angle as f64;
            let base = BASE_DISTANCE
                + OBSTACLE_AMPLITUDE * (angle_deg.to_radians().sin() * 2.0).sin();
            let noise = rng.gen_range(-NOISE..NOISE);
            ScanSample {
                angle_deg,
                distance: (base + noise).max(0.0),
            }
        })
        .collect()
}

pub fn export_scan(samples: &[ScanSample], path: &Path) -> Result<()> {
    let writer = csv::Writer::from_path(path)
        .with_context(|| format!("unable to create '{}'", path.display()))?;
    write_scan(samples, writer)
}

fn write_scan<W: Write>(samples: &[ScanSample], mut writer: csv::Writer<W>) -> Result<()> {
    writer.write_record(["angle", "distance"])?;
    for sample in samples {
        writer.write_record([sample.angle_deg.to_string(), sample.distance.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{load_scan, read_scan};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn one_sample_per_degree_within_bounds() {
        let scan = synthetic_scan(&mut StdRng::seed_from_u64(7));
        assert_eq!(scan.len(), 360);
        for (index, sample) in scan.iter().enumerate() {
            assert_eq!(sample.angle_deg, index as f64);
            assert!(sample.distance >= 0.0);
            assert!(sample.distance < BASE_DISTANCE + OBSTACLE_AMPLITUDE + NOISE);
            assert!(sample.distance >= BASE_DISTANCE - OBSTACLE_AMPLITUDE - NOISE);
        }
    }

    #[test]
    fn seeded_scans_are_reproducible() {
        let a = synthetic_scan(&mut StdRng::seed_from_u64(42));
        let b = synthetic_scan(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn exported_scan_loads_back() {
        let scan = synthetic_scan(&mut StdRng::seed_from_u64(1));

        let mut buf = Vec::new();
        write_scan(&scan, csv::Writer::from_writer(&mut buf)).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("angle,distance\n0,"));
        assert_eq!(read_scan(text.as_bytes()).unwrap(), scan);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan_data.csv");
        export_scan(&scan, &path).unwrap();
        assert_eq!(load_scan(&path).unwrap().len(), 360);
    }
}
