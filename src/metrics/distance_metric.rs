use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumMessage, EnumString, IntoStaticStr};

/// Distance between two index-aligned datasets of equal length.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    EnumMessage,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DistanceMetric {
    #[strum(
        message = "Chebyshev",
        detailed_message = "Largest absolute difference. Declared but not implemented."
    )]
    Chebyshev = 1,
    #[strum(
        message = "Euclidean",
        detailed_message = "Sum of squared differences divided by the squared length."
    )]
    Euclidean = 2,
    #[strum(
        message = "Manhattan",
        detailed_message = "Mean absolute difference."
    )]
    Manhattan = 3,
}

impl DistanceMetric {
    #[inline]
    pub fn is_implemented(self) -> bool {
        !matches!(self, DistanceMetric::Chebyshev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::{EnumMessage, IntoEnumIterator};

    #[test]
    fn parses_and_displays_kebab_case() {
        assert_eq!(
            DistanceMetric::from_str("manhattan").unwrap(),
            DistanceMetric::Manhattan
        );
        assert_eq!(DistanceMetric::Euclidean.to_string(), "euclidean");
        assert!(DistanceMetric::from_str("hamming").is_err());
    }

    #[test]
    fn only_chebyshev_is_unimplemented() {
        let missing: Vec<_> = DistanceMetric::iter()
            .filter(|m| !m.is_implemented())
            .collect();
        assert_eq!(missing, vec![DistanceMetric::Chebyshev]);
    }

    #[test]
    fn serde_uses_kebab_case() {
        let v = serde_json::to_value(DistanceMetric::Manhattan).unwrap();
        assert_eq!(v, serde_json::json!("manhattan"));
        let back: DistanceMetric = serde_json::from_value(v).unwrap();
        assert_eq!(back, DistanceMetric::Manhattan);
    }

    #[test]
    fn declared_numbering_starts_at_one() {
        let codes: Vec<_> = DistanceMetric::iter().map(|m| m as u8).collect();
        assert_eq!(codes, vec![1, 2, 3]);
    }

    #[test]
    fn messages_available() {
        assert_eq!(DistanceMetric::Euclidean.get_message(), Some("Euclidean"));
        assert!(DistanceMetric::Chebyshev.get_detailed_message().is_some());
    }
}
