use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumMessage, EnumString, IntoStaticStr};

/// Correlation coefficient between two index-aligned datasets.
///
/// Only [`CorrelationMethod::Pearson`] is computed; the other variants are
/// recognised so that configuration can name them, and are rejected when used.
///
/// Parses from (and serializes as) kebab-case names; displays as
/// `Correlation<Name>`.
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
pub enum CorrelationMethod {
    #[strum(
        serialize = "pearson",
        to_string = "CorrelationPearson",
        message = "Pearson",
        detailed_message = "Linear correlation: population covariance over the product of population standard deviations."
    )]
    Pearson,
    #[strum(serialize = "spearman", to_string = "CorrelationSpearman", message = "Spearman")]
    Spearman,
    #[strum(serialize = "kendall", to_string = "CorrelationKendall", message = "Kendall")]
    Kendall,
    #[strum(serialize = "custom", to_string = "CorrelationCustom", message = "Custom")]
    Custom,
}

impl CorrelationMethod {
    #[inline]
    pub fn is_implemented(self) -> bool {
        matches!(self, CorrelationMethod::Pearson)
    }
}
