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

use bubble_forest::{
    aggregate,
    config::{self, ClusterConfig},
    dot,
    errors::BubbleForestError,
    partition, serial,
    transport::{TcpCoordinatorTransport, TcpWorkerTransport},
    vertex_table::VertexTable,
};

#[derive(clap::Parser)]
pub(super) struct ForestBuilderArgs {
    /// Dimension of the bubble-sort graph; must be in [2, 10].
    #[arg(short, long)]
    n: usize,

    /// This process's rank. Rank 0 is always the coordinator.
    #[arg(short, long)]
    rank: usize,

    /// Total number of worker processes in the cohort.
    #[arg(short, long = "world-size")]
    world_size: usize,

    /// Base TCP port used when no cluster config is given; rank r listens
    /// on / dials `127.0.0.1:<base-port + r>`.
    #[arg(long, default_value_t = 9000)]
    base_port: u16,

    /// Explicit `host:port` for rank 0, overriding the localhost default
    /// addressing scheme. Ignored for rank 0 itself, which always binds
    /// its own resolved address rather than dialing out.
    #[arg(long)]
    coordinator: Option<String>,

    /// Optional JSON file mapping rank -> host:port, taking priority over
    /// both `--coordinator` and the localhost default scheme.
    #[arg(long = "cluster-config")]
    cluster_config: Option<String>,

    /// Directory DOT output is written under (rank 0 only).
    #[arg(short, long, default_value_t = String::from("dot"))]
    output_dir: String,
}

impl ForestBuilderArgs {
    pub(super) fn entry(&self) -> Result<(), BubbleForestError> {
        println!(
            "forest_builder: n={} rank={} world_size={} cores={}",
            self.n,
            self.rank,
            self.world_size,
            num_cpus::get()
        );

        if self.rank >= self.world_size {
            return Err(BubbleForestError::UsageError(format!(
                "rank {} must be < world_size {}",
                self.rank, self.world_size
            )));
        }

        let vt = VertexTable::build(self.n)?;
        let total_trees = self.n - 1;
        let own_trees = partition::assign_trees(total_trees, self.world_size, self.rank);

        if self.world_size == 1 {
            return serial::build_all(&PathBuf::from(&self.output_dir), self.n);
        }

        if self.rank == 0 {
            let addr = self.own_bind_addr()?;
            let mut coordinator = TcpCoordinatorTransport::bind(&addr, self.world_size)?;
            let tables = aggregate::run_coordinator(&vt, &own_trees, &mut coordinator)?;
            dot::write_forest(&PathBuf::from(&self.output_dir), &vt, self.n, &tables)
        } else {
            let coordinator_addr = self.coordinator_dial_addr()?;
            let mut worker = TcpWorkerTransport::connect(&coordinator_addr, self.rank)?;
            aggregate::run_worker(&vt, self.rank, &own_trees, &mut worker)
        }
    }

    /// The address this process binds to when it is rank 0. `--coordinator`
    /// never applies here: it names the address *other* ranks dial, which
    /// may differ from what rank 0 itself binds to (e.g. a public host name
    /// vs. a local bind address).
    fn own_bind_addr(&self) -> Result<String, BubbleForestError> {
        if let Some(path) = &self.cluster_config {
            let cfg = ClusterConfig::from_file(path)?;
            return cfg.coordinator_addr().map(str::to_string);
        }
        Ok(config::default_addr(self.base_port, 0))
    }

    /// The address a non-coordinator rank dials to reach rank 0.
    fn coordinator_dial_addr(&self) -> Result<String, BubbleForestError> {
        if let Some(path) = &self.cluster_config {
            let cfg = ClusterConfig::from_file(path)?;
            return cfg.coordinator_addr().map(str::to_string);
        }
        if let Some(coordinator) = &self.coordinator {
            return Ok(coordinator.clone());
        }
        Ok(config::default_addr(self.base_port, 0))
    }
}
