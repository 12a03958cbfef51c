//! # Waypoints and Routes
//!
//! A `WaypointSet` is the fixed list of points every route visits. A `Route` is an ordering
//! of that set, stored as indices into it: a waypoint's identity is its position in the set,
//! so two waypoints with the same coordinates are still distinct stops.
//!
//! ## Example
//!
//! ```rust
//! use paretoroute::waypoint::{Route, WaypointSet};
//!
//! let set = WaypointSet::from_coords(&[(10, 20), (30, 50), (10, 20)]);
//! let route = Route::new(vec![2, 0, 1]);
//!
//! assert!(route.is_permutation_of(&set));
//! let stops: Vec<_> = route.resolve(&set).map(|w| (w.x, w.y)).collect();
//! assert_eq!(stops, vec![(10, 20), (10, 20), (30, 50)]);
//! ```

use std::ops::Index;

/// A point on the integer grid.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Waypoint {
    pub x: i32,
    pub y: i32,
}

impl Waypoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The immutable, ordered set of waypoints shared by all routes of a cycle.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WaypointSet {
    waypoints: Vec<Waypoint>,
}

impl WaypointSet {
    pub fn new(waypoints: Vec<Waypoint>) -> Self {
        Self { waypoints }
    }

    /// Builds a set from `(x, y)` pairs, keeping their order.
    pub fn from_coords(coords: &[(i32, i32)]) -> Self {
        Self::new(coords.iter().map(|&(x, y)| Waypoint::new(x, y)).collect())
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Waypoint> {
        self.waypoints.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Waypoint> {
        self.waypoints.iter()
    }

    pub fn as_slice(&self) -> &[Waypoint] {
        &self.waypoints
    }
}

impl Index<usize> for WaypointSet {
    type Output = Waypoint;

    fn index(&self, index: usize) -> &Self::Output {
        &self.waypoints[index]
    }
}

impl From<Vec<Waypoint>> for WaypointSet {
    fn from(waypoints: Vec<Waypoint>) -> Self {
        Self::new(waypoints)
    }
}

impl<'a> IntoIterator for &'a WaypointSet {
    type Item = &'a Waypoint;
    type IntoIter = std::slice::Iter<'a, Waypoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.waypoints.iter()
    }
}

/// An ordering of a `WaypointSet`, stored as indices into the set.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Route {
    order: Vec<usize>,
}

impl Route {
    pub fn new(order: Vec<usize>) -> Self {
        Self { order }
    }

    /// The visiting order as indices into the waypoint set.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Materializes the route against the set it was generated from.
    ///
    /// # Panics
    ///
    /// Panics if the route holds an index outside of `waypoints`.
    pub fn resolve<'a>(
        &'a self,
        waypoints: &'a WaypointSet,
    ) -> impl Iterator<Item = &'a Waypoint> + 'a {
        self.order.iter().map(move |&index| &waypoints[index])
    }

    /// Returns true if every index of `waypoints` appears exactly once.
    pub fn is_permutation_of(&self, waypoints: &WaypointSet) -> bool {
        if self.order.len() != waypoints.len() {
            return false;
        }

        let mut seen = vec![false; waypoints.len()];
        for &index in &self.order {
            match seen.get_mut(index) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_coords_keeps_order() {
        let set = WaypointSet::from_coords(&[(1, 2), (3, 4)]);
        assert_eq!(set.len(), 2);
        assert_eq!(set[0], Waypoint::new(1, 2));
        assert_eq!(set.get(1), Some(&Waypoint::new(3, 4)));
        assert_eq!(set.get(2), None);
    }

    #[test]
    fn test_permutation_check() {
        let set = WaypointSet::from_coords(&[(0, 0), (1, 1), (2, 2)]);

        assert!(Route::new(vec![2, 0, 1]).is_permutation_of(&set));
        assert!(!Route::new(vec![0, 0, 1]).is_permutation_of(&set));
        assert!(!Route::new(vec![0, 1]).is_permutation_of(&set));
        assert!(!Route::new(vec![0, 1, 3]).is_permutation_of(&set));
    }

    #[test]
    fn test_duplicate_coordinates_are_distinct_stops() {
        let set = WaypointSet::from_coords(&[(5, 5), (5, 5)]);
        let route = Route::new(vec![1, 0]);

        assert!(route.is_permutation_of(&set));
        assert_eq!(route.resolve(&set).count(), 2);
    }

    #[test]
    fn test_empty_route_of_empty_set() {
        let set = WaypointSet::default();
        let route = Route::default();

        assert!(set.is_empty());
        assert!(route.is_empty());
        assert!(route.is_permutation_of(&set));
    }
}
