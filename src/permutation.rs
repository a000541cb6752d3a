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

//! Permutation enumeration and key encoding for the bubble-sort graph B_n.

use crate::errors::BubbleForestError;

/// The largest n this crate supports.
pub const MAX_N: usize = 10;
/// The smallest n this crate supports.
pub const MIN_N: usize = 2;

/// Validates n is in [2, 10], the only range the forest builder supports.
pub fn validate_n(n: usize) -> Result<(), BubbleForestError> {
    if !(MIN_N..=MAX_N).contains(&n) {
        return Err(BubbleForestError::UsageError(format!(
            "n must be in [{MIN_N}, {MAX_N}], got {n}"
        )));
    }
    Ok(())
}

/// Advances `perm` to the lexicographically next permutation in place.
/// Returns `false` once `perm` is the last (strictly descending) one.
fn next_permutation(perm: &mut [u8]) -> bool {
    if perm.len() < 2 {
        return false;
    }
    let mut k = perm.len() - 1;
    loop {
        if k == 0 {
            return false;
        }
        k -= 1;
        if perm[k] < perm[k + 1] {
            break;
        }
    }
    let mut l = perm.len() - 1;
    while perm[k] >= perm[l] {
        l -= 1;
    }
    perm.swap(k, l);
    perm[k + 1..].reverse();
    true
}

/// Produces all n! permutations of {1..n} in strictly ascending
/// lexicographic order. Element 0 is always the identity `[1, 2, ..., n]`.
pub fn all_perms(n: usize) -> Result<Vec<Vec<u8>>, BubbleForestError> {
    validate_n(n)?;
    let factorial: usize = (2..=n as u64).product::<u64>() as usize;
    let mut current: Vec<u8> = (1..=n as u8).collect();
    let mut out = Vec::with_capacity(factorial);
    out.push(current.clone());
    while next_permutation(&mut current) {
        out.push(current.clone());
    }
    Ok(out)
}

/// Encodes a permutation as a fixed-width string key: each symbol `s`
/// becomes the character `'0' + s`. Unique for n ≤ 10 (n = 10 yields the
/// character `':'` for the tenth symbol, which is not itself a digit but is
/// still a distinct, stable key; callers must never parse it as decimal).
pub fn key(perm: &[u8]) -> String {
    perm.iter().map(|&s| (b'0' + s) as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_n() {
        assert!(validate_n(1).is_err());
        assert!(validate_n(11).is_err());
        assert!(validate_n(2).is_ok());
        assert!(validate_n(10).is_ok());
    }

    #[test]
    fn enumerates_exact_factorial_count_and_identity_first() {
        for n in MIN_N..=7 {
            let perms = all_perms(n).unwrap();
            let expected: usize = (2..=n as u64).product::<u64>() as usize;
            assert_eq!(perms.len(), expected);
            assert_eq!(perms[0], (1..=n as u8).collect::<Vec<_>>());
        }
    }

    #[test]
    fn enumerates_in_strictly_ascending_order_with_no_duplicates() {
        let perms = all_perms(5).unwrap();
        for w in perms.windows(2) {
            assert!(w[0] < w[1], "{:?} should precede {:?}", w[0], w[1]);
        }
    }

    #[test]
    fn n3_matches_the_spec_scenario_order() {
        let perms = all_perms(3).unwrap();
        let expected: Vec<Vec<u8>> = vec![
            vec![1, 2, 3],
            vec![1, 3, 2],
            vec![2, 1, 3],
            vec![2, 3, 1],
            vec![3, 1, 2],
            vec![3, 2, 1],
        ];
        assert_eq!(perms, expected);
    }

    #[test]
    fn key_round_trips_distinctly() {
        let perms = all_perms(6).unwrap();
        let mut keys: Vec<String> = perms.iter().map(|p| key(p)).collect();
        let before = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), before, "every permutation must have a unique key");
    }

    #[test]
    fn key_for_n10_uses_non_digit_tenth_symbol_but_stays_unique() {
        let k = key(&[10, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(k.chars().next().unwrap(), ':');
    }
}
