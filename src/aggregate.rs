/*
*	Copyright (C) 2024 Kendall Tauser
*
*	This program is free software; you can redistribute it and/or modify
*	it under the terms of the GNU General Public License as published by
*	the Free Software Foundation; either version 2 of the License, or
*	(at your option) any later version.
*
*	This program is distributed in the hope that it will be useful,
*	but WITHOUT ANY WARRANTY; without even the implied warranty of
*	MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
*	GNU General Public License for more details.
*
*	You should have received a copy of the GNU General Public License along
*	with this program; if not, write to the Free Software Foundation, Inc.,
*	51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.
 */

//! Coordinator and worker sides of the gather protocol. Worker ranks
//! generate their own trees' edges and hand them to a `WorkerTransport`;
//! rank 0 generates its own trees locally, then drains every other rank's
//! `TreeReport` through a `CoordinatorTransport` in ascending rank order,
//! and folds everything into one `children_t[parent] -> [child, ...]`
//! table per tree.

use rustc_hash::FxHashMap;

use crate::{
    edges::{self, EdgeTuple},
    errors::BubbleForestError,
    transport::{CoordinatorTransport, TreeReport, WorkerTransport},
    vertex_table::VertexTable,
};

/// `table[parent_id]` is the list of `parent_id`'s children, in the order
/// their edges were drained; never re-sorted.
pub type ChildrenTable = Vec<Vec<u32>>;

fn build_children_table(count: usize, edges: &[EdgeTuple]) -> ChildrenTable {
    let mut table = vec![Vec::new(); count];
    for &(parent, child) in edges {
        table[parent as usize].push(child);
    }
    table
}

/// Runs a non-coordinator worker's half of the protocol: compute this
/// rank's assigned trees' edges and send the report.
pub fn run_worker<W: WorkerTransport>(
    vt: &VertexTable,
    rank: usize,
    trees: &[usize],
    transport: &mut W,
) -> Result<(), BubbleForestError> {
    let edges = edges::generate_edges(vt, trees)?;
    transport.send_report(TreeReport {
        rank,
        trees: trees.to_vec(),
        edges,
    })
}

/// Runs the coordinator's half: compute rank 0's own trees locally, then
/// collect every other rank's report and merge into one children table per
/// tree across the whole forest (trees `1..n`).
pub fn run_coordinator<C: CoordinatorTransport>(
    vt: &VertexTable,
    own_trees: &[usize],
    transport: &mut C,
) -> Result<FxHashMap<usize, ChildrenTable>, BubbleForestError> {
    let mut all_edges: FxHashMap<usize, Vec<EdgeTuple>> = edges::generate_edges(vt, own_trees)?;

    for report in transport.collect_reports()? {
        for (t, list) in report.edges {
            all_edges.insert(t, list);
        }
    }

    let count = vt.count();
    let mut tables = FxHashMap::default();
    for (t, list) in all_edges {
        tables.insert(t, build_children_table(count, &list));
    }
    Ok(tables)
}
