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

//! Builds the n-1 edge-disjoint spanning trees rooted at the identity of
//! the bubble-sort graph B_n, for every n in [2, 10], across a cohort of
//! worker processes.

pub mod aggregate;
pub mod config;
pub mod dot;
pub mod edges;
pub mod errors;
pub mod oracle;
pub mod partition;
pub mod permutation;
pub mod serial;
pub mod transport;
pub mod vertex_table;
pub mod wire;
