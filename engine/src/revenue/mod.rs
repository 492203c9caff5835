//! Client revenue calculation
//!
//! Computes what is billed to the client that generated a single load, split
//! across the three billing concepts. `Transporte` and `Disposicion` are
//! charged for every load; `Tratamiento` only when the load is routed to a
//! treatment plant, and it is recorded as an explicit zero otherwise so the
//! breakdown always accounts for all three concepts.
//!
//! Tariffs are filtered to those valid on the calculation date before
//! matching by concept; an expired or not-yet-valid tariff is as absent as a
//! missing one. Concepts are computed independently; there is no
//! cross-concept discount or cap.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{BillingConcept, ClientTariff, Load};

/// Errors that can occur during revenue calculation
#[derive(Debug, Error, PartialEq)]
pub enum RevenueError {
    #[error("load net weight must be positive, got {net_weight_tons}")]
    InvalidWeight { net_weight_tons: f64 },

    #[error("UF conversion value must be positive, got {uf_value}")]
    InvalidConversionRate { uf_value: f64 },

    #[error("no tariff for concept {concept} valid on {date}")]
    MissingTariff {
        concept: BillingConcept,
        date: NaiveDate,
    },
}

/// UF amount billed per concept; an uncharged concept is an explicit zero
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptBreakdown {
    /// Haulage amount (UF)
    pub transporte_uf: f64,

    /// Disposal amount (UF)
    pub disposicion_uf: f64,

    /// Treatment amount (UF); zero when the load skips treatment
    pub tratamiento_uf: f64,
}

impl ConceptBreakdown {
    /// Sum across the three concepts
    pub fn total_uf(&self) -> f64 {
        self.transporte_uf + self.disposicion_uf + self.tratamiento_uf
    }

    /// Amount for one concept
    pub fn amount_for(&self, concept: BillingConcept) -> f64 {
        match concept {
            BillingConcept::Transporte => self.transporte_uf,
            BillingConcept::Disposicion => self.disposicion_uf,
            BillingConcept::Tratamiento => self.tratamiento_uf,
        }
    }
}

/// Revenue billed to the client for one load
///
/// Constructed only by [`calculate_load_revenue`]; read-only to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueResult {
    /// Total billed in UF
    total_uf: f64,

    /// Total billed in CLP at the supplied UF value
    total_clp: f64,

    /// Per-concept amounts, all three concepts always present
    breakdown: ConceptBreakdown,
}

impl RevenueResult {
    /// Total billed in UF
    pub fn total_uf(&self) -> f64 {
        self.total_uf
    }

    /// Total billed in CLP
    pub fn total_clp(&self) -> f64 {
        self.total_clp
    }

    /// Per-concept amounts
    pub fn breakdown(&self) -> &ConceptBreakdown {
        &self.breakdown
    }
}

/// Find the tariff for a concept among those valid on the date
///
/// First match wins, preserving the configured order when a client carries
/// overlapping windows for the same concept.
fn find_valid_tariff<'a>(
    tariffs: &'a [ClientTariff],
    concept: BillingConcept,
    date: NaiveDate,
) -> Option<&'a ClientTariff> {
    tariffs
        .iter()
        .find(|t| t.concept() == concept && t.is_valid_on(date))
}

/// Amount for one mandatory (or treatment-bound) concept
fn concept_amount(
    load: &Load,
    tariffs: &[ClientTariff],
    concept: BillingConcept,
    date: NaiveDate,
) -> Result<f64, RevenueError> {
    let tariff =
        find_valid_tariff(tariffs, concept, date).ok_or(RevenueError::MissingTariff {
            concept,
            date,
        })?;

    let billable_weight = load.net_weight_tons.max(tariff.min_weight_tons());
    Ok(tariff.rate_per_ton() * billable_weight)
}

/// Compute the revenue billed to a client for one load on a given date
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use transport_settlement_core_rs::{
///     calculate_load_revenue, BillingConcept, ClientTariff, Load,
/// };
///
/// let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let tariffs = vec![
///     ClientTariff::new(7, BillingConcept::Transporte, 0.5, 0.0, from, None).unwrap(),
///     ClientTariff::new(7, BillingConcept::Disposicion, 0.3, 0.0, from, None).unwrap(),
/// ];
/// let load = Load::new(20.0, 1, 2, false);
/// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
///
/// let result = calculate_load_revenue(&load, &tariffs, 37000.0, date).unwrap();
/// assert!((result.total_uf() - 16.0).abs() < 1e-9);
/// assert_eq!(result.breakdown().tratamiento_uf, 0.0);
/// ```
pub fn calculate_load_revenue(
    load: &Load,
    tariffs: &[ClientTariff],
    uf_value: f64,
    calculation_date: NaiveDate,
) -> Result<RevenueResult, RevenueError> {
    if load.net_weight_tons <= 0.0 {
        return Err(RevenueError::InvalidWeight {
            net_weight_tons: load.net_weight_tons,
        });
    }
    if uf_value <= 0.0 {
        return Err(RevenueError::InvalidConversionRate { uf_value });
    }

    let transporte_uf =
        concept_amount(load, tariffs, BillingConcept::Transporte, calculation_date)?;
    let disposicion_uf =
        concept_amount(load, tariffs, BillingConcept::Disposicion, calculation_date)?;
    let tratamiento_uf = if load.goes_to_treatment {
        concept_amount(load, tariffs, BillingConcept::Tratamiento, calculation_date)?
    } else {
        0.0
    };

    let breakdown = ConceptBreakdown {
        transporte_uf,
        disposicion_uf,
        tratamiento_uf,
    };
    let total_uf = breakdown.total_uf();

    Ok(RevenueResult {
        total_uf,
        total_clp: total_uf * uf_value,
        breakdown,
    })
}

/// [`calculate_load_revenue`] evaluated at the local calendar date
///
/// Convenience for interactive callers; batch billing passes the cycle date
/// explicitly to stay deterministic.
pub fn calculate_load_revenue_today(
    load: &Load,
    tariffs: &[ClientTariff],
    uf_value: f64,
) -> Result<RevenueResult, RevenueError> {
    calculate_load_revenue(load, tariffs, uf_value, chrono::Local::now().date_naive())
}
