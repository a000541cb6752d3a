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

//! The single-process fallback: builds every tree for dimension `n` without
//! opening a socket. Runs through `aggregate::run_coordinator` with a
//! `LoopbackCoordinatorTransport` of world size 1 (so `collect_reports`
//! drains zero peers); the serial and distributed paths share this one
//! aggregation implementation, which is what makes property 6
//! (serial/distributed equivalence) true by construction rather than by
//! keeping two codepaths in sync by hand.

use std::path::Path;

use crate::{
    aggregate, errors::BubbleForestError, partition, transport::loopback_channels,
    vertex_table::VertexTable,
};

/// Builds and writes every tree `1..n` for dimension `n` under `root`.
pub fn build_all(root: &Path, n: usize) -> Result<(), BubbleForestError> {
    let vt = VertexTable::build(n)?;
    let total_trees = n - 1;
    let own_trees = partition::assign_trees(total_trees, 1, 0);
    debug_assert_eq!(own_trees, (1..=total_trees).collect::<Vec<_>>());

    let (mut coordinator, workers) = loopback_channels(1);
    debug_assert!(workers.is_empty());

    let tables = aggregate::run_coordinator(&vt, &own_trees, &mut coordinator)?;
    crate::dot::write_forest(root, &vt, n, &tables)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tempdir(tag: &str) -> std::path::PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("bubble_forest_serial_test_{}_{}", tag, std::process::id()));
        p
    }

    #[test]
    fn builds_every_tree_file_for_n4() {
        let dir = tempdir("n4");
        build_all(&dir, 4).unwrap();
        for t in 1..4 {
            let path = crate::dot::tree_path(&dir, 4, t);
            assert!(path.exists(), "missing {:?}", path);
        }
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn every_dot_file_has_exactly_count_minus_one_edge_lines() {
        let dir = tempdir("n4_count");
        build_all(&dir, 4).unwrap();
        let vt = VertexTable::build(4).unwrap();
        for t in 1..4 {
            let contents = std::fs::read_to_string(crate::dot::tree_path(&dir, 4, t)).unwrap();
            let edge_lines = contents.lines().filter(|l| l.contains("->")).count();
            assert_eq!(edge_lines, vt.count() - 1);
        }
        std::fs::remove_dir_all(&dir).ok();
    }

    // Only vertices 12/21, T=1: the single tree has exactly one edge,
    // 21 -> 12.
    #[test]
    fn n2_scenario_has_exactly_one_edge_in_the_only_tree() {
        let dir = tempdir("n2_scenario");
        build_all(&dir, 2).unwrap();
        let contents = std::fs::read_to_string(crate::dot::tree_path(&dir, 2, 1)).unwrap();
        let edge_lines: Vec<&str> = contents.lines().filter(|l| l.contains("->")).collect();
        assert_eq!(edge_lines.len(), 1);
        assert!(edge_lines[0].contains("\"21\" -> \"12\";"));
        std::fs::remove_dir_all(&dir).ok();
    }

    // dot/5/ should contain exactly 4 tree files (T = n - 1 = 4).
    #[test]
    fn n5_scenario_produces_exactly_four_tree_files() {
        let dir = tempdir("n5_scenario");
        build_all(&dir, 5).unwrap();
        for t in 1..=4 {
            assert!(crate::dot::tree_path(&dir, 5, t).exists());
        }
        assert!(!crate::dot::tree_path(&dir, 5, 5).exists());
        let n5_dir = dir.join("5");
        let count = std::fs::read_dir(&n5_dir).unwrap().count();
        assert_eq!(count, 4);
        std::fs::remove_dir_all(&dir).ok();
    }

    // Two independent builds at the same n must produce byte-identical
    // DOT output.
    #[test]
    fn repeated_builds_are_byte_identical() {
        let dir_a = tempdir("determinism_a");
        let dir_b = tempdir("determinism_b");
        build_all(&dir_a, 5).unwrap();
        build_all(&dir_b, 5).unwrap();
        for t in 1..=4 {
            let a = std::fs::read_to_string(crate::dot::tree_path(&dir_a, 5, t)).unwrap();
            let b = std::fs::read_to_string(crate::dot::tree_path(&dir_b, 5, t)).unwrap();
            assert_eq!(a, b);
        }
        std::fs::remove_dir_all(&dir_a).ok();
        std::fs::remove_dir_all(&dir_b).ok();
    }
}
