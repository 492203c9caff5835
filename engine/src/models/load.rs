//! Load projection
//!
//! The minimal view of a shipment this engine needs. Loads are owned and
//! mutated by the logistics module; the engine consumes them read-only and
//! validates only what its own formulas require.

use serde::{Deserialize, Serialize};

use super::NodeId;

/// Read-only projection of one shipment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Load {
    /// Net weight of the cargo in tons
    pub net_weight_tons: f64,

    /// Site the cargo was collected from
    pub origin_id: NodeId,

    /// Disposal site or treatment plant the cargo is delivered to
    pub destination_id: NodeId,

    /// Whether the cargo is routed to a treatment plant
    pub goes_to_treatment: bool,
}

impl Load {
    /// Create a load projection
    pub fn new(
        net_weight_tons: f64,
        origin_id: NodeId,
        destination_id: NodeId,
        goes_to_treatment: bool,
    ) -> Self {
        Self {
            net_weight_tons,
            origin_id,
            destination_id,
            goes_to_treatment,
        }
    }
}
