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

//! Fixed-width big-endian integer framing for the inter-process wire
//! format (`M_COUNT`, `M_TREES`, `M_EDGE_COUNT`, `M_EDGES`). Both sides of
//! `Transport` use these primitives directly over a `Read`/`Write` stream;
//! no serde framework is involved because the format is a short, fixed
//! sequence of typed integers, not a self-describing document.

use std::io::{self, Read, Write};

pub fn write_u32<W: Write>(w: &mut W, v: u32) -> io::Result<()> {
    w.write_all(&v.to_be_bytes())
}

pub fn read_u32<R: Read>(r: &mut R) -> io::Result<u32> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_be_bytes(buf))
}

pub fn write_i32<W: Write>(w: &mut W, v: i32) -> io::Result<()> {
    w.write_all(&v.to_be_bytes())
}

pub fn read_i32<R: Read>(r: &mut R) -> io::Result<i32> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(i32::from_be_bytes(buf))
}

/// Writes `M_TREES`: the count followed by each tree index.
pub fn write_tree_indices<W: Write>(w: &mut W, trees: &[usize]) -> io::Result<()> {
    write_u32(w, trees.len() as u32)?;
    for &t in trees {
        write_i32(w, t as i32)?;
    }
    Ok(())
}

pub fn read_tree_indices<R: Read>(r: &mut R) -> io::Result<Vec<usize>> {
    let count = read_u32(r)? as usize;
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        out.push(read_i32(r)? as usize);
    }
    Ok(out)
}

/// Writes one tree's edges: `M_EDGE_COUNT` followed by `M_EDGES` (2m
/// interleaved `parent_id, child_id` u32s) when the count is nonzero.
pub fn write_edges<W: Write>(w: &mut W, edges: &[(u32, u32)]) -> io::Result<()> {
    write_u32(w, edges.len() as u32)?;
    for &(p, c) in edges {
        write_u32(w, p)?;
        write_u32(w, c)?;
    }
    Ok(())
}

pub fn read_edges<R: Read>(r: &mut R) -> io::Result<Vec<(u32, u32)>> {
    let count = read_u32(r)? as usize;
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let p = read_u32(r)?;
        let c = read_u32(r)?;
        out.push((p, c));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn tree_indices_round_trip() {
        let mut buf = Vec::new();
        write_tree_indices(&mut buf, &[3, 4, 7]).unwrap();
        let mut cur = Cursor::new(buf);
        assert_eq!(read_tree_indices(&mut cur).unwrap(), vec![3, 4, 7]);
    }

    #[test]
    fn empty_tree_indices_round_trip() {
        let mut buf = Vec::new();
        write_tree_indices(&mut buf, &[]).unwrap();
        let mut cur = Cursor::new(buf);
        assert_eq!(read_tree_indices(&mut cur).unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn edges_round_trip() {
        let mut buf = Vec::new();
        let edges = vec![(0u32, 1u32), (1, 2), (5, 9)];
        write_edges(&mut buf, &edges).unwrap();
        let mut cur = Cursor::new(buf);
        assert_eq!(read_edges(&mut cur).unwrap(), edges);
    }

    #[test]
    fn zero_edges_writes_only_the_count() {
        let mut buf = Vec::new();
        write_edges(&mut buf, &[]).unwrap();
        assert_eq!(buf.len(), 4);
    }
}
