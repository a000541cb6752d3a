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

//! Splits the tree range `{1..=T}` across `world_size` workers using a
//! balanced block distribution, remainder absorbed by low-numbered ranks.

/// Returns the (possibly empty) list of tree indices assigned to `rank`,
/// out of `world_size` workers splitting `total_trees` total trees.
pub fn assign_trees(total_trees: usize, world_size: usize, rank: usize) -> Vec<usize> {
    assert!(world_size > 0, "world_size must be at least 1");
    assert!(rank < world_size, "rank must be < world_size");

    let per = total_trees / world_size;
    let rem = total_trees % world_size;

    // `hi` is computed in signed arithmetic because `lo + per - 1` can be
    // one below `lo` (an empty assignment) whenever `per == 0`.
    let (lo, hi): (usize, isize) = if rank < rem {
        let lo = rank * (per + 1) + 1;
        (lo, lo as isize + per as isize)
    } else {
        let lo = rem * (per + 1) + (rank - rem) * per + 1;
        (lo, lo as isize + per as isize - 1)
    };

    if hi < lo as isize {
        Vec::new()
    } else {
        (lo..=hi as usize).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn n5_w3_matches_the_spec_scenario() {
        // n=5 => T=4 trees, W=3 workers: ranks own {1,2}, {3}, {4}.
        assert_eq!(assign_trees(4, 3, 0), vec![1, 2]);
        assert_eq!(assign_trees(4, 3, 1), vec![3]);
        assert_eq!(assign_trees(4, 3, 2), vec![4]);
    }

    #[test]
    fn n5_w6_matches_the_spec_scenario() {
        // T=4, W=6: ranks 0..3 own one tree each, ranks 4..5 own none.
        assert_eq!(assign_trees(4, 6, 0), vec![1]);
        assert_eq!(assign_trees(4, 6, 1), vec![2]);
        assert_eq!(assign_trees(4, 6, 2), vec![3]);
        assert_eq!(assign_trees(4, 6, 3), vec![4]);
        assert_eq!(assign_trees(4, 6, 4), Vec::<usize>::new());
        assert_eq!(assign_trees(4, 6, 5), Vec::<usize>::new());
    }

    #[test]
    fn partition_covers_every_tree_exactly_once() {
        for total in 1..=9usize {
            for world_size in 1..=12usize {
                let mut seen = Vec::new();
                for rank in 0..world_size {
                    seen.extend(assign_trees(total, world_size, rank));
                }
                seen.sort_unstable();
                assert_eq!(seen, (1..=total).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn single_worker_owns_every_tree() {
        assert_eq!(assign_trees(9, 1, 0), (1..=9).collect::<Vec<_>>());
    }
}
