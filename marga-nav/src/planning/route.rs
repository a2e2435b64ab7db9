//! Shortest-route extraction from a flood distance field.

use crate::core::Cell;
use crate::map::WallMap;
use crate::planning::Flood;
use crate::{MargaError, Result};

/// One shortest-hop path, ordered goal -> source. The move planner walks it
/// end-to-start.
pub type Route = Vec<Cell>;

/// Walk the distance field backward from the reached goal cell, producing
/// every shortest-hop route to the source.
///
/// At each level the walk steps from a route head to the open neighbors one
/// hop closer to the source; when several neighbors tie, the route branches
/// and each branch continues independently. Multiplicities are preserved
/// exactly; the caller's random tie-break over the returned list is
/// intentional, so no dedup happens here.
pub fn extract_routes(walls: &WallMap, flood: &Flood) -> Result<Vec<Route>> {
    let mut routes: Vec<Route> = vec![vec![flood.goal]];

    for level in (0..flood.distance).rev() {
        let mut extended: Vec<Route> = Vec::with_capacity(routes.len());
        for mut route in routes {
            let head = match route.last() {
                Some(&cell) => cell,
                None => {
                    return Err(MargaError::InvariantViolation(
                        "route lost its head during extraction".into(),
                    ))
                }
            };
            let predecessors: Vec<Cell> = walls
                .neighbors(head)
                .into_iter()
                .flatten()
                .filter(|&cell| flood.field.distance(cell) == Some(level))
                .collect();

            match predecessors.split_first() {
                None => return Err(MargaError::CorruptDistanceField { at: head }),
                Some((&first, rest)) => {
                    for &branch in rest {
                        let mut forked = route.clone();
                        forked.push(branch);
                        extended.push(forked);
                    }
                    route.push(first);
                    extended.push(route);
                }
            }
        }
        routes = extended;
    }

    Ok(routes)
}
