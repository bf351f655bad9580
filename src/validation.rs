//! Pre-network input checks: joint ranges and the dataset allow-list.
//!
//! Everything here is pure. A failure is a [`ReachyError::Validation`] and
//! must be raised before the transport is touched.

use serde::{Deserialize, Serialize};

use crate::catalog::{DANCES_DATASET, EMOTIONS_DATASET};
use crate::ReachyError;

/// Inclusive range for one controllable value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointLimit {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
}

impl JointLimit {
    const fn new(name: &'static str, min: f64, max: f64) -> Self {
        Self { name, min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Angles in degrees, duration in seconds.
pub const JOINT_LIMITS: &[JointLimit] = &[
    JointLimit::new("head_pitch", -45.0, 45.0),
    JointLimit::new("head_roll", -30.0, 30.0),
    JointLimit::new("head_yaw", -60.0, 60.0),
    JointLimit::new("antenna_left", -45.0, 45.0),
    JointLimit::new("antenna_right", -45.0, 45.0),
    JointLimit::new("body_yaw", -90.0, 90.0),
    JointLimit::new("duration", 0.1, 10.0),
];

pub fn joint_limit(field: &str) -> Option<&'static JointLimit> {
    JOINT_LIMITS.iter().find(|limit| limit.name == field)
}

/// Check `value` against the range table. Fields without an entry pass.
pub fn validate_joint(field: &str, value: f64) -> Result<(), ReachyError> {
    match joint_limit(field) {
        Some(limit) if !limit.contains(value) => Err(ReachyError::Validation(format!(
            "{} must be between {} and {}, got {}",
            field, limit.min, limit.max, value
        ))),
        _ => Ok(()),
    }
}

/// The two recorded-move datasets the daemon is allowed to play from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dataset {
    #[serde(rename = "pollen-robotics/reachy-mini-emotions-library")]
    Emotions,
    #[serde(rename = "pollen-robotics/reachy-mini-dances-library")]
    Dances,
}

impl Dataset {
    pub const ALL: [Dataset; 2] = [Dataset::Emotions, Dataset::Dances];

    pub fn id(&self) -> &'static str {
        match self {
            Dataset::Emotions => EMOTIONS_DATASET,
            Dataset::Dances => DANCES_DATASET,
        }
    }

    /// Path listing the moves of this dataset.
    pub fn list_path(&self) -> String {
        format!("/api/move/recorded-move-datasets/list/{}", self.id())
    }
}

/// Allow-list check. Rejects anything but the two known identifiers.
pub fn check_dataset(id: &str) -> Result<Dataset, ReachyError> {
    Dataset::ALL
        .into_iter()
        .find(|dataset| dataset.id() == id)
        .ok_or_else(|| {
            let allowed: Vec<&str> = Dataset::ALL.iter().map(|d| d.id()).collect();
            ReachyError::Validation(format!("Invalid dataset. Allowed: {}", allowed.join(", ")))
        })
}

/// A move inside an allowed dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetRef {
    pub dataset: Dataset,
    pub move_id: String,
}

impl DatasetRef {
    pub fn new(dataset: Dataset, move_id: impl Into<String>) -> Self {
        Self {
            dataset,
            move_id: move_id.into(),
        }
    }

    /// Validate a raw dataset identifier and pair it with a move.
    pub fn parse(dataset: &str, move_id: impl Into<String>) -> Result<Self, ReachyError> {
        Ok(Self::new(check_dataset(dataset)?, move_id))
    }

    pub fn play_path(&self) -> String {
        format!(
            "/api/move/play/recorded-move-dataset/{}/{}",
            self.dataset.id(),
            self.move_id
        )
    }
}
