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

use std::path::PathBuf;

use bubble_forest::{errors::BubbleForestError, serial};

#[derive(clap::Parser)]
pub(super) struct SerialForestArgs {
    /// Dimension of the bubble-sort graph; must be in [2, 10].
    #[arg(short, long)]
    n: usize,

    /// Directory DOT output is written under.
    #[arg(short, long, default_value_t = String::from("dot"))]
    output_dir: String,
}

impl SerialForestArgs {
    pub(super) fn entry(&self) -> Result<(), BubbleForestError> {
        println!("serial_forest: n={}", self.n);
        serial::build_all(&PathBuf::from(&self.output_dir), self.n)
    }
}
