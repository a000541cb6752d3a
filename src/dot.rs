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

//! Writes one tree's `children_t` table out as a GraphViz DOT file under
//! `dot/<n>/`.

use std::{
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use rustc_hash::FxHashMap;

use crate::{aggregate::ChildrenTable, errors::BubbleForestError, permutation, vertex_table::VertexTable};

/// Returns `dot/<n>/Tree_<n>_<t>.dot` under `root`.
pub fn tree_path(root: &Path, n: usize, t: usize) -> PathBuf {
    root.join(n.to_string()).join(format!("Tree_{n}_{t}.dot"))
}

/// Writes a single tree's DOT file. Parents are visited in ascending id
/// order; a parent with no children is skipped entirely. The file is
/// plain ASCII with LF line endings.
pub fn write_tree(
    root: &Path,
    vt: &VertexTable,
    n: usize,
    t: usize,
    table: &ChildrenTable,
) -> Result<(), BubbleForestError> {
    let dir = root.join(n.to_string());
    fs::create_dir_all(&dir)?;

    let path = tree_path(root, n, t);
    let file = fs::File::create(&path)?;
    let mut w = BufWriter::new(file);

    writeln!(w, "digraph Tree{n}_{t} {{")?;
    writeln!(w, "    rankdir = LR;")?;
    for (parent, children) in table.iter().enumerate() {
        if children.is_empty() {
            continue;
        }
        let pkey = permutation::key(vt.perm(parent as u32));
        for &child in children {
            let ckey = permutation::key(vt.perm(child));
            writeln!(w, "    \"{pkey}\" -> \"{ckey}\";")?;
        }
    }
    writeln!(w, "}}")?;
    w.flush()?;
    Ok(())
}

/// Writes every tree `1..n` for dimension `n` in one call.
pub fn write_forest(
    root: &Path,
    vt: &VertexTable,
    n: usize,
    tables: &FxHashMap<usize, ChildrenTable>,
) -> Result<(), BubbleForestError> {
    for t in 1..n {
        let table = tables.get(&t).ok_or_else(|| {
            BubbleForestError::InvariantViolated(format!("tree {t} was never assigned to any worker"))
        })?;
        write_tree(root, vt, n, t, table)?;
    }
    Ok(())
}
