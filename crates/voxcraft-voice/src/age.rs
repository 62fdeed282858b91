use serde::Serialize;
use strum::{Display, EnumIter, EnumString, IntoStaticStr, VariantNames};

/// Age category of the requested voice
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter, IntoStaticStr, VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AgeCategory {
    Child,
    Teen,
    #[default]
    Adult,
    Senior,
}

impl AgeCategory {
    /// Fixed multiplier associated with the category
    pub const fn factor(self) -> f64 {
        match self {
            Self::Child => 0.7,
            Self::Teen => 0.8,
            Self::Adult => 1.0,
            Self::Senior => 1.2,
        }
    }

    /// Find the category whose factor matches `factor`
    ///
    /// Older clients send the factor instead of the category name. Only the
    /// four canonical values are recognized.
    pub fn from_factor(factor: f64) -> Option<Self> {
        use strum::IntoEnumIterator;

        Self::iter().find(|category| (category.factor() - factor).abs() < 1e-9)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn factor_table() {
        assert_eq!(AgeCategory::Child.factor(), 0.7);
        assert_eq!(AgeCategory::Teen.factor(), 0.8);
        assert_eq!(AgeCategory::Adult.factor(), 1.0);
        assert_eq!(AgeCategory::Senior.factor(), 1.2);
    }

    #[test]
    fn factor_maps_back_to_category() {
        assert_eq!(AgeCategory::from_factor(0.7), Some(AgeCategory::Child));
        assert_eq!(AgeCategory::from_factor(1.2), Some(AgeCategory::Senior));
        assert_eq!(AgeCategory::from_factor(0.9), None);
        assert_eq!(AgeCategory::from_factor(f64::NAN), None);
    }

    #[test]
    fn parses_names() {
        assert_eq!(AgeCategory::from_str("teen").unwrap(), AgeCategory::Teen);
        assert!(AgeCategory::from_str("toddler").is_err());
    }
}
