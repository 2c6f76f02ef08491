//! The canonical road (edge) record.

use mcr_core::LocationId;

/// Fuel price charged per 10 km travelled.
pub const FUEL_PRICE_PER_10KM: f64 = 2.05;

/// One undirected road between two locations.
///
/// There is exactly one `Road` per physical road; both endpoints' incident
/// lists refer to it by `RoadId`, so a congestion update is seen from either
/// direction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Road {
    a:                 LocationId,
    b:                 LocationId,
    distance_km:       f64,
    toll_cost:         f64,
    base_travel_time:  f64,
    congestion_factor: f64,
}

impl Road {
    /// A fresh road with congestion factor 1.0.  Attributes are validated by
    /// [`RoadNetwork::add_road`](crate::RoadNetwork::add_road).
    pub(crate) fn new(
        a: LocationId,
        b: LocationId,
        distance_km: f64,
        toll_cost: f64,
        base_travel_time: f64,
    ) -> Self {
        Self { a, b, distance_km, toll_cost, base_travel_time, congestion_factor: 1.0 }
    }

    /// The two endpoints in insertion order.
    #[inline]
    pub fn endpoints(&self) -> (LocationId, LocationId) {
        (self.a, self.b)
    }

    /// The endpoint opposite `from`.  For a self-loop this is `from` itself.
    #[inline]
    pub fn other(&self, from: LocationId) -> LocationId {
        if from == self.a { self.b } else { self.a }
    }

    #[inline]
    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    #[inline]
    pub fn toll_cost(&self) -> f64 {
        self.toll_cost
    }

    /// Free-flow travel time in minutes.
    #[inline]
    pub fn base_travel_time(&self) -> f64 {
        self.base_travel_time
    }

    #[inline]
    pub fn congestion_factor(&self) -> f64 {
        self.congestion_factor
    }

    pub(crate) fn set_congestion_factor(&mut self, factor: f64) {
        self.congestion_factor = factor;
    }

    /// Travel time in minutes under the current congestion.
    #[inline]
    pub fn current_travel_time(&self) -> f64 {
        self.base_travel_time * self.congestion_factor
    }

    #[inline]
    pub fn fuel_cost(&self) -> f64 {
        self.distance_km / 10.0 * FUEL_PRICE_PER_10KM
    }

    /// Toll plus fuel.
    #[inline]
    pub fn total_monetary_cost(&self) -> f64 {
        self.toll_cost + self.fuel_cost()
    }
}
