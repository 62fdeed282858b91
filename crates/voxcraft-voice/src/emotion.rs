use serde::Serialize;
use strum::{Display, EnumIter, EnumString, IntoStaticStr, VariantNames};

/// Stability shift applied for excited delivery
const EXCITED_STABILITY_DELTA: f64 = 0.2;
/// Stability shift applied for calm delivery
const CALM_STABILITY_DELTA: f64 = -0.2;
/// Style shift applied for dramatic delivery
const DRAMATIC_STYLE_DELTA: f64 = 0.3;

/// Emotion tag selected by the user
///
/// Only `Excited`, `Calm` and `Dramatic` change the vendor settings; the
/// rest are accepted and carried through unchanged.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter, IntoStaticStr, VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Emotion {
    #[default]
    Neutral,
    Happy,
    Sad,
    Angry,
    Excited,
    Calm,
    Worried,
    Confident,
    Dramatic,
}

impl Emotion {
    /// Amount added to the base stability before clamping
    pub const fn stability_delta(self) -> f64 {
        match self {
            Self::Excited => EXCITED_STABILITY_DELTA,
            Self::Calm => CALM_STABILITY_DELTA,
            _ => 0.0,
        }
    }

    /// Amount added to the base style before clamping
    pub const fn style_delta(self) -> f64 {
        match self {
            Self::Dramatic => DRAMATIC_STYLE_DELTA,
            _ => 0.0,
        }
    }
}
