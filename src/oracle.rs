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

//! The parent oracle: for a non-identity vertex `v` and a tree index `t`,
//! computes the unique parent of `v` in tree `t`.

use crate::{errors::BubbleForestError, vertex_table::VertexTable};

/// `slide(v, s)`: the neighbor reached by swapping symbol `s` with the
/// symbol immediately to its right in `perm[v]`. If `s` is already in the
/// last position, `perm[v]` is returned unchanged.
pub fn slide(vt: &VertexTable, v: u32, s: u8) -> Vec<u8> {
    let j = vt.pos_of(v, s) as usize;
    let mut p = vt.perm(v).to_vec();
    if j + 1 >= vt.n() {
        return p;
    }
    p.swap(j, j + 1);
    p
}

/// The fallback variant used when a direct `slide` would close a cycle or
/// leave a degenerate subgraph.
fn fallback(vt: &VertexTable, identity: &[u8], v: u32, t: u8) -> Vec<u8> {
    let cand = slide(vt, v, t);
    if t == 2 && cand == identity {
        return slide(vt, v, 1);
    }
    let n = vt.n();
    let pen = vt.perm(v)[n - 2];
    // Inclusive OR is intentional: pen == t and pen == n-1 both route
    // through the mismatch fallback rather than being split into separate
    // cases with different behavior.
    if pen == t || pen == (n - 1) as u8 {
        return slide(vt, v, vt.mismatch(v) + 1);
    }
    cand
}

/// Computes `findParent(v, t)`: the parent of non-identity vertex `v` in
/// tree `t` (`t` in `1..=n-1`). Fatal (`InvariantViolated`) if the
/// resulting permutation has no known vertex id.
pub fn find_parent(vt: &VertexTable, v: u32, t: u8) -> Result<u32, BubbleForestError> {
    let n = vt.n();
    let identity = vt.perm(vt.identity_id()).to_vec();
    let perm = vt.perm(v);
    let last = perm[n - 1];
    let prev = perm[n - 2];

    let parent_perm = if last == n as u8 {
        // Case A
        if t != (n - 1) as u8 {
            fallback(vt, &identity, v, t)
        } else {
            slide(vt, v, prev)
        }
    } else if last == (n - 1) as u8 && prev == n as u8 && slide(vt, v, n as u8) != identity {
        // Case B
        if t == 1 {
            slide(vt, v, n as u8)
        } else {
            slide(vt, v, t - 1)
        }
    } else {
        // Case C
        if last == t {
            slide(vt, v, n as u8)
        } else {
            slide(vt, v, t)
        }
    };

    vt.index_of(&parent_perm)
}
