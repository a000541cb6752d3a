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

//! Data-parallel edge generation: for each vertex owned by this worker's
//! slice of the id space and each tree it is responsible for, computes the
//! parent edge `(parent_id, child_id)` and buffers it. Each rayon chunk
//! keeps its own thread-local per-tree buffer and only touches the shared,
//! sharded-by-tree `DashMap` once that buffer crosses `FLUSH_THRESHOLD`, so
//! contention never extends past a single tree's shard.

use dashmap::DashMap;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::{errors::BubbleForestError, oracle, vertex_table::VertexTable};

pub type EdgeTuple = (u32, u32);

/// Thread-local buffers flush into the shared map once they reach this many
/// tuples.
const FLUSH_THRESHOLD: usize = 100_000;

/// Computes, for every tree in `trees`, the full `(parent_id, child_id)`
/// edge list covering every non-identity vertex `1..vt.count()`.
///
/// This is a whole-tree computation: a single worker owning tree `t` needs
/// every vertex's parent in that tree, not just a slice of vertices, so the
/// parallelism here is over the vertex id range rather than over trees.
pub fn generate_edges(
    vt: &VertexTable,
    trees: &[usize],
) -> Result<FxHashMap<usize, Vec<EdgeTuple>>, BubbleForestError> {
    if trees.is_empty() {
        return Ok(FxHashMap::default());
    }

    let shared: DashMap<usize, Vec<EdgeTuple>> = DashMap::with_capacity(trees.len());
    for &t in trees {
        shared.insert(t, Vec::new());
    }

    let count = vt.count();
    let vertices: Vec<u32> = (1..count as u32).collect();
    let workers = num_cpus::get().max(1);
    let chunk_size = (vertices.len() / (workers * 4).max(1)).max(1);

    vertices
        .par_chunks(chunk_size)
        .try_for_each(|chunk| -> Result<(), BubbleForestError> {
            let mut local: FxHashMap<usize, Vec<EdgeTuple>> = FxHashMap::default();
            for &v in chunk {
                for &t in trees {
                    let parent = oracle::find_parent(vt, v, t as u8)?;
                    let buf = local.entry(t).or_default();
                    buf.push((parent, v));
                    if buf.len() >= FLUSH_THRESHOLD {
                        let drained = std::mem::take(buf);
                        shared.entry(t).or_default().extend(drained);
                    }
                }
            }
            for (t, buf) in local {
                if !buf.is_empty() {
                    shared.entry(t).or_default().extend(buf);
                }
            }
            Ok(())
        })?;

    let mut out = FxHashMap::default();
    for &t in trees {
        if let Some((_, v)) = shared.remove(&t) {
            out.insert(t, v);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tree_gets_exactly_count_minus_one_edges() {
        let vt = VertexTable::build(4).unwrap();
        let trees: Vec<usize> = (1..4).collect();
        let edges = generate_edges(&vt, &trees).unwrap();
        for &t in &trees {
            assert_eq!(edges[&t].len(), vt.count() - 1);
        }
    }

    #[test]
    fn every_child_id_appears_exactly_once_per_tree() {
        let vt = VertexTable::build(4).unwrap();
        let edges = generate_edges(&vt, &[1]).unwrap();
        let mut children: Vec<u32> = edges[&1].iter().map(|&(_, c)| c).collect();
        children.sort_unstable();
        let expected: Vec<u32> = (1..vt.count() as u32).collect();
        assert_eq!(children, expected);
    }

    #[test]
    fn empty_tree_list_yields_an_empty_map() {
        let vt = VertexTable::build(3).unwrap();
        let edges = generate_edges(&vt, &[]).unwrap();
        assert!(edges.is_empty());
    }

    #[test]
    fn matches_sequential_find_parent_for_every_edge() {
        let vt = VertexTable::build(5).unwrap();
        let edges = generate_edges(&vt, &[1, 2, 3, 4]).unwrap();
        for (&t, list) in edges.iter() {
            for &(parent, child) in list {
                assert_eq!(oracle::find_parent(&vt, child, t as u8).unwrap(), parent);
            }
        }
    }
}
