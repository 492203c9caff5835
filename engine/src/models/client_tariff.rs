//! Client tariff model
//!
//! A `ClientTariff` is one client's agreed price for one billing concept,
//! bounded by a validity window. Revenue calculation filters tariffs to those
//! valid on the calculation date before matching by concept.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::NodeId;

/// Billing concept a client is charged under
///
/// Closed set. `Transporte` and `Disposicion` are charged for every load;
/// `Tratamiento` only for loads routed to a treatment plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingConcept {
    /// Haulage of the load
    Transporte,

    /// Final disposal at the destination site
    Disposicion,

    /// Treatment-plant processing
    Tratamiento,
}

impl BillingConcept {
    /// All concepts, in breakdown order
    pub const ALL: [BillingConcept; 3] = [
        BillingConcept::Transporte,
        BillingConcept::Disposicion,
        BillingConcept::Tratamiento,
    ];
}

impl fmt::Display for BillingConcept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BillingConcept::Transporte => "TRANSPORTE",
            BillingConcept::Disposicion => "DISPOSICION",
            BillingConcept::Tratamiento => "TRATAMIENTO",
        };
        f.write_str(name)
    }
}

/// Errors that can occur when constructing a client tariff
#[derive(Debug, Error, PartialEq)]
pub enum ClientTariffError {
    #[error("rate per ton must be positive, got {rate_per_ton}")]
    NonPositiveRate { rate_per_ton: f64 },

    #[error("guaranteed minimum weight cannot be negative, got {min_weight_tons}")]
    NegativeMinWeight { min_weight_tons: f64 },

    #[error("valid_to {valid_to} precedes valid_from {valid_from}")]
    ValidToBeforeValidFrom {
        valid_from: NaiveDate,
        valid_to: NaiveDate,
    },
}

/// One client's price for one billing concept
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use transport_settlement_core_rs::{BillingConcept, ClientTariff};
///
/// let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let tariff = ClientTariff::new(7, BillingConcept::Transporte, 0.5, 0.0, from, None).unwrap();
///
/// // Open-ended window: valid on any date at or after valid_from
/// assert!(tariff.is_valid_on(NaiveDate::from_ymd_opt(2030, 6, 15).unwrap()));
/// assert!(!tariff.is_valid_on(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientTariff {
    /// Client the price was agreed with
    client_id: NodeId,

    /// Billing concept the price covers
    concept: BillingConcept,

    /// Rate in UF per ton
    rate_per_ton: f64,

    /// Guaranteed minimum billable weight (tons)
    min_weight_tons: f64,

    /// First day the tariff applies
    valid_from: NaiveDate,

    /// Last day the tariff applies; `None` means open-ended
    valid_to: Option<NaiveDate>,
}

impl ClientTariff {
    /// Create a new client tariff
    ///
    /// # Arguments
    /// * `client_id` - Client the price was agreed with
    /// * `concept` - Billing concept the price covers
    /// * `rate_per_ton` - Rate in UF per ton (must be positive)
    /// * `min_weight_tons` - Guaranteed minimum billable weight (non-negative)
    /// * `valid_from` - First day the tariff applies
    /// * `valid_to` - Last day the tariff applies, or `None` for open-ended
    pub fn new(
        client_id: NodeId,
        concept: BillingConcept,
        rate_per_ton: f64,
        min_weight_tons: f64,
        valid_from: NaiveDate,
        valid_to: Option<NaiveDate>,
    ) -> Result<Self, ClientTariffError> {
        if rate_per_ton <= 0.0 {
            return Err(ClientTariffError::NonPositiveRate { rate_per_ton });
        }
        if min_weight_tons < 0.0 {
            return Err(ClientTariffError::NegativeMinWeight { min_weight_tons });
        }
        if let Some(to) = valid_to {
            if to < valid_from {
                return Err(ClientTariffError::ValidToBeforeValidFrom {
                    valid_from,
                    valid_to: to,
                });
            }
        }

        Ok(Self {
            client_id,
            concept,
            rate_per_ton,
            min_weight_tons,
            valid_from,
            valid_to,
        })
    }

    /// Client the price was agreed with
    pub fn client_id(&self) -> NodeId {
        self.client_id
    }

    /// Billing concept the price covers
    pub fn concept(&self) -> BillingConcept {
        self.concept
    }

    /// Rate in UF per ton
    pub fn rate_per_ton(&self) -> f64 {
        self.rate_per_ton
    }

    /// Guaranteed minimum billable weight (tons)
    pub fn min_weight_tons(&self) -> f64 {
        self.min_weight_tons
    }

    /// First day the tariff applies
    pub fn valid_from(&self) -> NaiveDate {
        self.valid_from
    }

    /// Last day the tariff applies, if bounded
    pub fn valid_to(&self) -> Option<NaiveDate> {
        self.valid_to
    }

    /// Check whether the tariff is valid on a calendar date
    ///
    /// Both window bounds are inclusive: a tariff is valid from `valid_from`
    /// through `valid_to`, or indefinitely when `valid_to` is `None`.
    pub fn is_valid_on(&self, date: NaiveDate) -> bool {
        date >= self.valid_from && self.valid_to.map_or(true, |to| date <= to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let tariff = ClientTariff::new(
            1,
            BillingConcept::Disposicion,
            0.3,
            0.0,
            date(2024, 1, 1),
            Some(date(2024, 6, 30)),
        )
        .unwrap();

        assert!(tariff.is_valid_on(date(2024, 1, 1)));
        assert!(tariff.is_valid_on(date(2024, 6, 30)));
        assert!(!tariff.is_valid_on(date(2023, 12, 31)));
        assert!(!tariff.is_valid_on(date(2024, 7, 1)));
    }

    #[test]
    fn test_rejects_inverted_window() {
        let result = ClientTariff::new(
            1,
            BillingConcept::Transporte,
            0.5,
            0.0,
            date(2024, 6, 1),
            Some(date(2024, 1, 1)),
        );
        assert!(matches!(
            result,
            Err(ClientTariffError::ValidToBeforeValidFrom { .. })
        ));
    }

    #[test]
    fn test_single_day_window_is_allowed() {
        let tariff = ClientTariff::new(
            1,
            BillingConcept::Tratamiento,
            0.2,
            0.0,
            date(2024, 3, 15),
            Some(date(2024, 3, 15)),
        )
        .unwrap();
        assert!(tariff.is_valid_on(date(2024, 3, 15)));
        assert!(!tariff.is_valid_on(date(2024, 3, 16)));
    }

    #[test]
    fn test_concept_display_names() {
        assert_eq!(BillingConcept::Transporte.to_string(), "TRANSPORTE");
        assert_eq!(BillingConcept::Disposicion.to_string(), "DISPOSICION");
        assert_eq!(BillingConcept::Tratamiento.to_string(), "TRATAMIENTO");
    }
}
