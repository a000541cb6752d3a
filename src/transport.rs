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

//! Carries one worker's tree report (the `M_TREES` / `M_EDGE_COUNT` /
//! `M_EDGES` sequence) to the coordinator. Two implementations share the
//! same ordering contract: the coordinator always drains reports in
//! ascending rank order, never connection- or send-arrival order.

use std::{
    collections::BTreeMap,
    io::{BufReader, BufWriter, Write},
    net::{TcpListener, TcpStream},
    sync::mpsc,
};

use rustc_hash::FxHashMap;

use crate::{edges::EdgeTuple, errors::BubbleForestError, wire};

/// One worker's complete contribution: the trees it was assigned and the
/// edge list it computed for each.
#[derive(Debug, Clone)]
pub struct TreeReport {
    pub rank: usize,
    pub trees: Vec<usize>,
    pub edges: FxHashMap<usize, Vec<EdgeTuple>>,
}

impl TreeReport {
    fn write_to<W: Write>(&self, w: &mut W) -> Result<(), BubbleForestError> {
        wire::write_tree_indices(w, &self.trees)?;
        for &t in &self.trees {
            let empty = Vec::new();
            let list = self.edges.get(&t).unwrap_or(&empty);
            wire::write_edges(w, list)?;
        }
        Ok(())
    }

    fn read_from<R: std::io::Read>(rank: usize, r: &mut R) -> Result<Self, BubbleForestError> {
        let trees = wire::read_tree_indices(r)?;
        let mut edges = FxHashMap::default();
        for &t in &trees {
            edges.insert(t, wire::read_edges(r)?);
        }
        Ok(Self { rank, trees, edges })
    }
}

/// A worker's side of the protocol: hand off exactly one `TreeReport` to
/// the coordinator.
pub trait WorkerTransport {
    fn send_report(&mut self, report: TreeReport) -> Result<(), BubbleForestError>;
}

/// The coordinator's side: collect every other rank's report, in rank
/// order, regardless of the order reports actually arrived in.
pub trait CoordinatorTransport {
    fn collect_reports(&mut self) -> Result<Vec<TreeReport>, BubbleForestError>;
}

/// One real OS process per rank. Rank 0 listens and accepts `world_size -
/// 1` connections tagged by a leading rank header; every other rank dials
/// out and announces its own rank before sending its report.
pub struct TcpWorkerTransport {
    rank: usize,
    stream: TcpStream,
}

impl TcpWorkerTransport {
    pub fn connect(coordinator_addr: &str, rank: usize) -> Result<Self, BubbleForestError> {
        let mut stream = TcpStream::connect(coordinator_addr).map_err(|e| {
            BubbleForestError::TransportError(format!(
                "failed to connect to coordinator at {coordinator_addr}: {e}"
            ))
        })?;
        wire::write_u32(&mut stream, rank as u32)?;
        Ok(Self { rank, stream })
    }
}

impl WorkerTransport for TcpWorkerTransport {
    fn send_report(&mut self, report: TreeReport) -> Result<(), BubbleForestError> {
        debug_assert_eq!(report.rank, self.rank);
        let mut w = BufWriter::new(&mut self.stream);
        report.write_to(&mut w)?;
        w.flush().map_err(BubbleForestError::from)
    }
}

/// Rank 0's side of `TcpWorkerTransport`: binds, accepts every peer, then
/// sorts connections by the rank header they announced before reading any
/// payload, so reads happen in ascending rank order.
pub struct TcpCoordinatorTransport {
    world_size: usize,
    streams: BTreeMap<usize, TcpStream>,
}

impl TcpCoordinatorTransport {
    pub fn bind(addr: &str, world_size: usize) -> Result<Self, BubbleForestError> {
        let listener = TcpListener::bind(addr).map_err(|e| {
            BubbleForestError::TransportError(format!("failed to bind coordinator at {addr}: {e}"))
        })?;
        let mut streams = BTreeMap::new();
        for _ in 0..world_size.saturating_sub(1) {
            let (mut stream, _) = listener.accept().map_err(BubbleForestError::from)?;
            let rank = wire::read_u32(&mut stream)? as usize;
            streams.insert(rank, stream);
        }
        Ok(Self {
            world_size,
            streams,
        })
    }
}

impl CoordinatorTransport for TcpCoordinatorTransport {
    fn collect_reports(&mut self) -> Result<Vec<TreeReport>, BubbleForestError> {
        let mut out = Vec::with_capacity(self.world_size - 1);
        for rank in 1..self.world_size {
            let stream = self.streams.get_mut(&rank).ok_or_else(|| {
                BubbleForestError::TransportError(format!("no connection registered for rank {rank}"))
            })?;
            let mut r = BufReader::new(stream);
            out.push(TreeReport::read_from(rank, &mut r)?);
        }
        Ok(out)
    }
}

/// A single-process stand-in for the TCP transport, used by the serial
/// binary and by tests exercising multiple simulated ranks without
/// spawning OS processes. Each rank gets its own channel so the
/// coordinator can read rank 1's report before rank 2's even if rank 2's
/// thread finished first.
pub struct LoopbackWorkerTransport {
    rank: usize,
    sender: mpsc::Sender<TreeReport>,
}

impl WorkerTransport for LoopbackWorkerTransport {
    fn send_report(&mut self, report: TreeReport) -> Result<(), BubbleForestError> {
        debug_assert_eq!(report.rank, self.rank);
        self.sender
            .send(report)
            .map_err(|e| BubbleForestError::TransportError(format!("loopback send failed: {e}")))
    }
}

pub struct LoopbackCoordinatorTransport {
    world_size: usize,
    receivers: BTreeMap<usize, mpsc::Receiver<TreeReport>>,
}

impl CoordinatorTransport for LoopbackCoordinatorTransport {
    fn collect_reports(&mut self) -> Result<Vec<TreeReport>, BubbleForestError> {
        let mut out = Vec::with_capacity(self.world_size - 1);
        for rank in 1..self.world_size {
            let rx = self.receivers.get(&rank).ok_or_else(|| {
                BubbleForestError::TransportError(format!("no channel registered for rank {rank}"))
            })?;
            let report = rx.recv().map_err(|e| {
                BubbleForestError::TransportError(format!("loopback recv failed for rank {rank}: {e}"))
            })?;
            out.push(report);
        }
        Ok(out)
    }
}

/// Builds one coordinator handle and `world_size - 1` worker handles
/// (ranks `1..world_size`) wired together in-process.
pub fn loopback_channels(
    world_size: usize,
) -> (LoopbackCoordinatorTransport, Vec<LoopbackWorkerTransport>) {
    let mut receivers = BTreeMap::new();
    let mut workers = Vec::with_capacity(world_size.saturating_sub(1));
    for rank in 1..world_size {
        let (tx, rx) = mpsc::channel();
        receivers.insert(rank, rx);
        workers.push(LoopbackWorkerTransport { rank, sender: tx });
    }
    (
        LoopbackCoordinatorTransport {
            world_size,
            receivers,
        },
        workers,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report(rank: usize, trees: &[usize]) -> TreeReport {
        let mut edges = FxHashMap::default();
        for &t in trees {
            edges.insert(t, vec![(0u32, t as u32), (t as u32, (t + 10) as u32)]);
        }
        TreeReport {
            rank,
            trees: trees.to_vec(),
            edges,
        }
    }

    #[test]
    fn wire_round_trip_preserves_trees_and_edges() {
        let report = sample_report(3, &[2, 5]);
        let mut buf = Vec::new();
        report.write_to(&mut buf).unwrap();
        let mut cur = std::io::Cursor::new(buf);
        let back = TreeReport::read_from(3, &mut cur).unwrap();
        assert_eq!(back.trees, report.trees);
        assert_eq!(back.edges, report.edges);
    }

    #[test]
    fn loopback_collects_in_ascending_rank_order_even_when_sent_out_of_order() {
        let (mut coordinator, mut workers) = loopback_channels(4);
        // send in reverse order: rank 3 first, then 2, then 1
        let mut w3 = workers.remove(2);
        let mut w2 = workers.remove(1);
        let mut w1 = workers.remove(0);
        w3.send_report(sample_report(3, &[3])).unwrap();
        w2.send_report(sample_report(2, &[2])).unwrap();
        w1.send_report(sample_report(1, &[1])).unwrap();

        let reports = coordinator.collect_reports().unwrap();
        let ranks: Vec<usize> = reports.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }
}
