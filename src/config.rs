//! Store configuration
//!
//! Defaults reproduce the classic 4.0 grading scale: 90+ earns 4 points,
//! 80+ earns 3, 70+ earns 2, 60+ earns 1, anything lower earns 0.
//!
//! ```rust
//! use roster_db::config::StoreConfig;
//!
//! let config = StoreConfig::default().passing_threshold(50.0).report_top_n(3);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Lowest score that still earns `points`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeBand {
    /// Inclusive lower bound of the band
    pub min_score: f64,
    /// Grade points awarded inside the band
    pub points: f64,
}

/// Ordered grade bands used to turn raw scores into grade points.
///
/// Bands are checked highest first; a score below every band earns 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGradeScale")]
pub struct GradeScale {
    bands: Vec<GradeBand>,
}

#[derive(Deserialize)]
struct RawGradeScale {
    bands: Vec<GradeBand>,
}

impl TryFrom<RawGradeScale> for GradeScale {
    type Error = Error;

    fn try_from(raw: RawGradeScale) -> Result<Self> {
        Self::new(raw.bands)
    }
}

impl GradeScale {
    /// Create a scale from bands sorted by descending `min_score`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if bands are not strictly descending
    /// or a bound lies outside [0, 100].
    pub fn new(bands: Vec<GradeBand>) -> Result<Self> {
        let scale = Self { bands };
        scale.validate()?;
        Ok(scale)
    }

    /// Bands, highest first.
    #[must_use]
    pub fn bands(&self) -> &[GradeBand] {
        &self.bands
    }

    /// Grade points earned by `score`.
    #[must_use]
    pub fn points(&self, score: f64) -> f64 {
        self.bands
            .iter()
            .find(|band| score >= band.min_score)
            .map_or(0.0, |band| band.points)
    }

    fn validate(&self) -> Result<()> {
        for band in &self.bands {
            if !(0.0..=100.0).contains(&band.min_score) {
                return Err(Error::InvalidConfig(format!(
                    "grade band bound {} outside 0..=100",
                    band.min_score
                )));
            }
            if !band.points.is_finite() || band.points < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "grade band points must be finite and non-negative, got {}",
                    band.points
                )));
            }
        }
        if self
            .bands
            .windows(2)
            .any(|pair| pair[0].min_score <= pair[1].min_score)
        {
            return Err(Error::InvalidConfig(
                "grade bands must be sorted by strictly descending min_score".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for GradeScale {
    fn default() -> Self {
        Self {
            bands: vec![
                GradeBand { min_score: 90.0, points: 4.0 },
                GradeBand { min_score: 80.0, points: 3.0 },
                GradeBand { min_score: 70.0, points: 2.0 },
                GradeBand { min_score: 60.0, points: 1.0 },
            ],
        }
    }
}

/// Tunables for a [`RecordStore`](crate::store::RecordStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Score-to-points mapping used for GPA
    pub grade_scale: GradeScale,
    /// Minimum score counted as passing in course statistics
    pub passing_threshold: f64,
    /// Number of students listed in a report's ranking
    pub report_top_n: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            grade_scale: GradeScale::default(),
            passing_threshold: 60.0,
            report_top_n: 5,
        }
    }
}

impl StoreConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the JSON is malformed or fails [`Self::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the grade scale
    #[must_use]
    pub fn grade_scale(mut self, scale: GradeScale) -> Self {
        self.grade_scale = scale;
        self
    }

    /// Set the passing threshold
    #[must_use]
    pub const fn passing_threshold(mut self, threshold: f64) -> Self {
        self.passing_threshold = threshold;
        self
    }

    /// Set how many students a report ranks
    #[must_use]
    pub const fn report_top_n(mut self, n: usize) -> Self {
        self.report_top_n = n;
        self
    }

    /// Check every field is usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] describing the first bad field.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.passing_threshold) {
            return Err(Error::InvalidConfig(format!(
                "passing threshold {} outside 0..=100",
                self.passing_threshold
            )));
        }
        self.grade_scale.validate()
    }
}
