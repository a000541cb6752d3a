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

//! Dense per-vertex lookup tables for B_n: symbol positions, the
//! tail-mismatch marker, and the permutation -> id inverse map.

use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::{errors::BubbleForestError, permutation};

/// Immutable, once-built tables every worker constructs independently
/// (they are a deterministic function of n). Read-only after
/// construction; no synchronization is required to access them.
pub struct VertexTable {
    n: usize,
    /// `perm[i]` is the permutation sequence for vertex id `i`.
    perm: Vec<Vec<u8>>,
    /// `pos[i][s]` is the 0-based position of symbol `s` within `perm[i]`.
    /// Indexed `1..=n`; index 0 is unused padding.
    pos: Vec<Vec<u8>>,
    /// `mismatch[i]` is the largest k with `perm[i][k] != k+1`, or 1 if
    /// `perm[i]` is the identity.
    mismatch: Vec<u8>,
    /// Inverse lookup from a permutation's key to its vertex id.
    index_of: FxHashMap<String, u32>,
}

impl VertexTable {
    /// Builds the full vertex table for dimension `n`, validating n is in
    /// [2, 10]. Table initialization (position/mismatch) is data-parallel
    /// across vertices; it has no cross-vertex dependencies.
    pub fn build(n: usize) -> Result<Self, BubbleForestError> {
        permutation::validate_n(n)?;
        let perm = permutation::all_perms(n)?;
        let count = perm.len();

        let mut index_of = FxHashMap::with_capacity_and_hasher(count, Default::default());
        for (i, p) in perm.iter().enumerate() {
            index_of.insert(permutation::key(p), i as u32);
        }

        let tables: Vec<(Vec<u8>, u8)> = perm
            .par_iter()
            .map(|p| {
                let mut row = vec![0u8; n + 1];
                for (j, &s) in p.iter().enumerate() {
                    row[s as usize] = j as u8;
                }
                let mut k = n as isize - 1;
                while k >= 0 && p[k as usize] == (k as u8 + 1) {
                    k -= 1;
                }
                let mismatch = if k < 0 { 1 } else { k as u8 };
                (row, mismatch)
            })
            .collect();

        let (pos, mismatch): (Vec<Vec<u8>>, Vec<u8>) = tables.into_iter().unzip();

        Ok(Self {
            n,
            perm,
            pos,
            mismatch,
            index_of,
        })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn count(&self) -> usize {
        self.perm.len()
    }

    pub fn perm(&self, id: u32) -> &[u8] {
        &self.perm[id as usize]
    }

    /// The 0-based position of symbol `s` (1..=n) within vertex `id`.
    pub fn pos_of(&self, id: u32, s: u8) -> u8 {
        self.pos[id as usize][s as usize]
    }

    pub fn mismatch(&self, id: u32) -> u8 {
        self.mismatch[id as usize]
    }

    pub fn is_identity(&self, id: u32) -> bool {
        id == 0
    }

    /// The identity vertex is always id 0: it is the first permutation
    /// `all_perms` yields.
    pub fn identity_id(&self) -> u32 {
        0
    }

    /// Looks up the vertex id for a permutation's key. A miss is a fatal
    /// internal error (`InvariantViolated`); see the parent oracle.
    pub fn index_of(&self, perm: &[u8]) -> Result<u32, BubbleForestError> {
        let k = permutation::key(perm);
        self.index_of.get(&k).copied().ok_or_else(|| {
            BubbleForestError::InvariantViolated(format!(
                "oracle produced a permutation with no known vertex id: key={k}"
            ))
        })
    }
}
