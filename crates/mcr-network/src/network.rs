//! Road network representation.
//!
//! # Data layout
//!
//! Location names are interned once into dense [`LocationId`]s.  Roads live
//! in a single `Vec<Road>` indexed by [`RoadId`]; each location keeps the
//! `RoadId`s of its incident roads in insertion order:
//!
//! ```text
//! incident[loc] = [road, road, ...]      roads[road].other(loc) = neighbour
//! ```
//!
//! Because both endpoints point at the same record, the two travel
//! directions of a road can never disagree on distance, toll, base time or
//! congestion.
//!
//! # Lifecycle
//!
//! Locations and roads are added before any search.  Congestion may change
//! between searches; every mutation bumps [`RoadNetwork::generation`] so a
//! result can be matched to the network state it was computed against.

use rustc_hash::FxHashMap;
use tracing::debug;

use mcr_core::{LocationId, RoadId};

use crate::road::Road;
use crate::{NetworkError, NetworkResult};

/// Undirected, weighted road graph over named locations.
#[derive(Debug, Clone, Default)]
pub struct RoadNetwork {
    names:      Vec<String>,
    index:      FxHashMap<String, LocationId>,
    incident:   Vec<Vec<RoadId>>,
    roads:      Vec<Road>,
    generation: u64,
}

impl RoadNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for the expected number of locations and roads.
    pub fn with_capacity(locations: usize, roads: usize) -> Self {
        Self {
            names:      Vec::with_capacity(locations),
            index:      FxHashMap::with_capacity_and_hasher(locations, Default::default()),
            incident:   Vec::with_capacity(locations),
            roads:      Vec::with_capacity(roads),
            generation: 0,
        }
    }

    // ── Topology mutation ─────────────────────────────────────────────────

    /// Add a location and return its id.
    ///
    /// Idempotent: adding a name that already exists returns the existing id
    /// and leaves its incident roads untouched.
    pub fn add_location(&mut self, name: &str) -> NetworkResult<LocationId> {
        if let Some(&id) = self.index.get(name) {
            return Ok(id);
        }
        let id = location_id_for(self.names.len())?;
        self.names.push(name.to_owned());
        self.index.insert(name.to_owned(), id);
        self.incident.push(Vec::new());
        self.generation += 1;
        Ok(id)
    }

    /// Add an undirected road between two existing locations.
    ///
    /// - `distance_km` must be > 0
    /// - `toll_cost` must be >= 0
    /// - `base_travel_time` (minutes) must be > 0
    ///
    /// The road starts with congestion factor 1.0.
    pub fn add_road(
        &mut self,
        a: &str,
        b: &str,
        distance_km: f64,
        toll_cost: f64,
        base_travel_time: f64,
    ) -> NetworkResult<RoadId> {
        let a = self.require(a)?;
        let b = self.require(b)?;
        self.add_road_by_id(a, b, distance_km, toll_cost, base_travel_time)
    }

    /// [`add_road`](Self::add_road) for callers that already hold ids.
    pub fn add_road_by_id(
        &mut self,
        a: LocationId,
        b: LocationId,
        distance_km: f64,
        toll_cost: f64,
        base_travel_time: f64,
    ) -> NetworkResult<RoadId> {
        self.check(a)?;
        self.check(b)?;
        positive("distance_km", distance_km)?;
        non_negative("toll_cost", toll_cost)?;
        positive("base_travel_time", base_travel_time)?;

        let id = road_id_for(self.roads.len())?;
        self.roads.push(Road::new(a, b, distance_km, toll_cost, base_travel_time));
        self.incident[a.index()].push(id);
        if a != b {
            self.incident[b.index()].push(id);
        }
        self.generation += 1;
        Ok(id)
    }

    // ── Congestion ────────────────────────────────────────────────────────

    /// Set the congestion factor of the first road at `source` (in insertion
    /// order) that leads to `destination`.
    ///
    /// Returns `Ok(false)` without touching anything when the two locations
    /// exist but no road joins them.  Unknown names are an error.
    pub fn update_traffic_conditions(
        &mut self,
        source: &str,
        destination: &str,
        factor: f64,
    ) -> NetworkResult<bool> {
        let a = self.require(source)?;
        let b = self.require(destination)?;
        self.set_congestion(a, b, factor)
    }

    /// Id-based form of [`update_traffic_conditions`](Self::update_traffic_conditions).
    pub fn set_congestion(
        &mut self,
        source: LocationId,
        destination: LocationId,
        factor: f64,
    ) -> NetworkResult<bool> {
        self.check(source)?;
        self.check(destination)?;
        if !factor.is_finite() || factor < 0.0 {
            return Err(NetworkError::InvalidCongestion(factor));
        }
        let Some(road) = self.road_between(source, destination) else {
            debug!(%source, %destination, "no road between locations; congestion update ignored");
            return Ok(false);
        };
        self.roads[road.index()].set_congestion_factor(factor);
        self.generation += 1;
        Ok(true)
    }

    /// Restore every road to free-flow (factor 1.0).
    pub fn reset_traffic(&mut self) {
        for road in &mut self.roads {
            road.set_congestion_factor(1.0);
        }
        self.generation += 1;
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    pub fn location(&self, name: &str) -> Option<LocationId> {
        self.index.get(name).copied()
    }

    /// Like [`location`](Self::location) but an unknown name is an error.
    pub fn require(&self, name: &str) -> NetworkResult<LocationId> {
        self.location(name)
            .ok_or_else(|| NetworkError::UnknownLocation(name.to_owned()))
    }

    /// Fail with `UnknownLocationId` if `id` was not issued by this network.
    pub fn check(&self, id: LocationId) -> NetworkResult<()> {
        if id.index() < self.names.len() {
            Ok(())
        } else {
            Err(NetworkError::UnknownLocationId(id))
        }
    }

    /// Name of a location.  Panics if `id` is out of range.
    pub fn name(&self, id: LocationId) -> &str {
        &self.names[id.index()]
    }

    /// All location names, indexed by `LocationId`.
    pub fn locations(&self) -> impl Iterator<Item = (LocationId, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(i, n)| (LocationId(i as u32), n.as_str()))
    }

    #[inline]
    pub fn road(&self, id: RoadId) -> &Road {
        &self.roads[id.index()]
    }

    pub fn roads(&self) -> impl Iterator<Item = (RoadId, &Road)> + '_ {
        self.roads
            .iter()
            .enumerate()
            .map(|(i, r)| (RoadId(i as u32), r))
    }

    /// Incident roads of `location` in insertion order.
    #[inline]
    pub fn incident_roads(&self, location: LocationId) -> &[RoadId] {
        &self.incident[location.index()]
    }

    /// `(road, neighbour)` pairs reachable in one hop from `location`.
    #[inline]
    pub fn neighbors(&self, location: LocationId) -> impl Iterator<Item = (RoadId, LocationId)> + '_ {
        self.incident[location.index()]
            .iter()
            .map(move |&r| (r, self.roads[r.index()].other(location)))
    }

    /// First road at `from` (insertion order) whose far end is `to`.
    pub fn road_between(&self, from: LocationId, to: LocationId) -> Option<RoadId> {
        self.neighbors(from)
            .find(|&(_, other)| other == to)
            .map(|(road, _)| road)
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn location_count(&self) -> usize {
        self.names.len()
    }

    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Mutation counter.  Two reads with the same generation saw identical
    /// topology and congestion.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

fn positive(field: &'static str, value: f64) -> NetworkResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(NetworkError::InvalidAttribute { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> NetworkResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(NetworkError::InvalidAttribute { field, value })
    }
}

/// Id for the `len`-th location.  The `INVALID` sentinel is never handed out.
pub(crate) fn location_id_for(len: usize) -> NetworkResult<LocationId> {
    LocationId::try_from(len)
        .ok()
        .filter(|id| id.is_valid())
        .ok_or(NetworkError::CapacityExceeded("locations"))
}

/// Id for the `len`-th road.
pub(crate) fn road_id_for(len: usize) -> NetworkResult<RoadId> {
    RoadId::try_from(len)
        .ok()
        .filter(|id| id.is_valid())
        .ok_or(NetworkError::CapacityExceeded("roads"))
}
