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

//! Rank -> `host:port` addressing for `TcpTransport`. Cohort bootstrapping
//! itself is out of scope; this is the minimal config a bootstrapper is
//! assumed to hand each worker so it knows where rank 0 lives.

use std::fs;

use serde::{Deserialize, Serialize};

use crate::errors::BubbleForestError;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ClusterConfig {
    /// `addresses[r]` is the `host:port` rank `r` listens on (rank 0) or is
    /// reachable at (every other rank). Length must equal `world_size`.
    pub addresses: Vec<String>,
}

impl ClusterConfig {
    pub fn from_file(path: &str) -> Result<Self, BubbleForestError> {
        let contents = fs::read_to_string(path)?;
        let config: ClusterConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// The address rank 0 listens on / every other rank dials.
    pub fn coordinator_addr(&self) -> Result<&str, BubbleForestError> {
        self.addresses.first().map(String::as_str).ok_or_else(|| {
            BubbleForestError::UsageError("cluster config has no addresses".to_string())
        })
    }
}

/// Default addressing scheme used when no `--cluster-config` is given:
/// every rank lives on localhost at `base_port + rank`.
pub fn default_addr(base_port: u16, rank: usize) -> String {
    format!("127.0.0.1:{}", base_port as u32 + rank as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_addr_offsets_the_base_port_by_rank() {
        assert_eq!(default_addr(9000, 0), "127.0.0.1:9000");
        assert_eq!(default_addr(9000, 3), "127.0.0.1:9003");
    }

    #[test]
    fn coordinator_addr_is_the_first_entry() {
        let cfg = ClusterConfig {
            addresses: vec!["10.0.0.1:7000".to_string(), "10.0.0.2:7000".to_string()],
        };
        assert_eq!(cfg.coordinator_addr().unwrap(), "10.0.0.1:7000");
    }

    #[test]
    fn empty_addresses_is_a_usage_error() {
        let cfg = ClusterConfig { addresses: vec![] };
        assert!(matches!(
            cfg.coordinator_addr(),
            Err(BubbleForestError::UsageError(_))
        ));
    }
}
