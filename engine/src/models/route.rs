//! Distance routes and the route map
//!
//! A `DistanceRoute` is one edge in the distance graph between logistics
//! nodes. The `is_segment_link` flag distinguishes the intermediate pickup
//! leg of a consolidated trip from a terminal main-haul leg: the same
//! origin/destination pair may exist in both variants with different
//! distances.
//!
//! `RouteMap` indexes routes by `(origin, destination, segment_link)` so trip
//! costing does a hash lookup instead of scanning the route list.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use super::NodeId;

/// Errors that can occur when constructing routes or building a route map
#[derive(Debug, Error, PartialEq)]
pub enum RouteError {
    #[error("route distance must be positive, got {distance_km}")]
    NonPositiveDistance { distance_km: f64 },

    #[error(
        "duplicate route for origin {origin_id} -> destination {destination_id} \
         (segment_link={segment_link})"
    )]
    DuplicateRoute {
        origin_id: NodeId,
        destination_id: NodeId,
        segment_link: bool,
    },
}

/// One edge in the distance graph between logistics nodes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceRoute {
    /// Origin node
    origin_id: NodeId,

    /// Destination node
    destination_id: NodeId,

    /// Road distance in kilometers
    distance_km: f64,

    /// Marks an intermediate pickup leg of a consolidated trip rather than a
    /// terminal main-haul leg
    is_segment_link: bool,
}

impl DistanceRoute {
    /// Create a new route edge
    ///
    /// # Arguments
    /// * `origin_id` - Origin node id
    /// * `destination_id` - Destination node id
    /// * `distance_km` - Road distance in kilometers (must be positive)
    /// * `is_segment_link` - Whether this edge is a consolidated-trip pickup leg
    pub fn new(
        origin_id: NodeId,
        destination_id: NodeId,
        distance_km: f64,
        is_segment_link: bool,
    ) -> Result<Self, RouteError> {
        if distance_km <= 0.0 {
            return Err(RouteError::NonPositiveDistance { distance_km });
        }

        Ok(Self {
            origin_id,
            destination_id,
            distance_km,
            is_segment_link,
        })
    }

    /// Origin node id
    pub fn origin_id(&self) -> NodeId {
        self.origin_id
    }

    /// Destination node id
    pub fn destination_id(&self) -> NodeId {
        self.destination_id
    }

    /// Road distance in kilometers
    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Whether this edge is a consolidated-trip pickup leg
    pub fn is_segment_link(&self) -> bool {
        self.is_segment_link
    }
}

/// Lookup key: `(origin, destination, segment_link)` is unique within a map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct RouteKey {
    origin_id: NodeId,
    destination_id: NodeId,
    segment_link: bool,
}

/// The distance matrix, indexed for trip costing
///
/// # Example
/// ```
/// use transport_settlement_core_rs::{DistanceRoute, RouteMap};
///
/// let routes = RouteMap::from_routes(vec![
///     DistanceRoute::new(1, 2, 50.0, false).unwrap(),
///     DistanceRoute::new(1, 2, 12.5, true).unwrap(),
/// ])
/// .unwrap();
///
/// assert_eq!(routes.get(1, 2, false).unwrap().distance_km(), 50.0);
/// assert_eq!(routes.get(1, 2, true).unwrap().distance_km(), 12.5);
/// assert!(routes.get(2, 1, false).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteMap {
    routes: HashMap<RouteKey, DistanceRoute>,
}

impl RouteMap {
    /// Build a route map from a list of edges
    ///
    /// Fails if two edges share the same `(origin, destination, segment_link)`
    /// key: a duplicate means the distance matrix is ambiguous and must be
    /// corrected upstream, not silently resolved here.
    pub fn from_routes(routes: Vec<DistanceRoute>) -> Result<Self, RouteError> {
        let mut map = HashMap::with_capacity(routes.len());
        for route in routes {
            let key = RouteKey {
                origin_id: route.origin_id,
                destination_id: route.destination_id,
                segment_link: route.is_segment_link,
            };
            if map.insert(key, route).is_some() {
                return Err(RouteError::DuplicateRoute {
                    origin_id: key.origin_id,
                    destination_id: key.destination_id,
                    segment_link: key.segment_link,
                });
            }
        }
        Ok(Self { routes: map })
    }

    /// Look up the route for an origin/destination pair and leg kind
    pub fn get(
        &self,
        origin_id: NodeId,
        destination_id: NodeId,
        segment_link: bool,
    ) -> Option<&DistanceRoute> {
        self.routes.get(&RouteKey {
            origin_id,
            destination_id,
            segment_link,
        })
    }

    /// Number of edges in the map
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the map has no edges
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_distance() {
        let result = DistanceRoute::new(1, 2, 0.0, false);
        assert_eq!(
            result.unwrap_err(),
            RouteError::NonPositiveDistance { distance_km: 0.0 }
        );
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let result = RouteMap::from_routes(vec![
            DistanceRoute::new(1, 2, 50.0, false).unwrap(),
            DistanceRoute::new(1, 2, 55.0, false).unwrap(),
        ]);
        assert_eq!(
            result.unwrap_err(),
            RouteError::DuplicateRoute {
                origin_id: 1,
                destination_id: 2,
                segment_link: false,
            }
        );
    }

    #[test]
    fn test_segment_flag_disambiguates_same_pair() {
        // Same pair, one terminal edge and one pickup edge: both must coexist
        let map = RouteMap::from_routes(vec![
            DistanceRoute::new(1, 2, 50.0, false).unwrap(),
            DistanceRoute::new(1, 2, 12.5, true).unwrap(),
        ])
        .unwrap();
        assert_eq!(map.len(), 2);
    }
}
