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

use std::{
    fmt::{Debug, Display},
    io,
};

/// The error taxonomy from the error handling design: bad usage, a broken
/// oracle invariant, a filesystem failure, or a failed inter-process
/// send/recv. Every kind is fatal for the whole job; none are retried.
pub enum BubbleForestError {
    /// Bad argument count, or n outside [2, 10].
    UsageError(String),
    /// The parent oracle returned a permutation key absent from `indexOf`.
    InvariantViolated(String),
    IoError(io::Error),
    /// An inter-process send or receive failed.
    TransportError(String),
}

impl Display for BubbleForestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UsageError(e) => write!(f, "usage: {}", e),
            Self::InvariantViolated(e) => write!(f, "invariant violated: {}", e),
            Self::IoError(e) => write!(f, "io: {}", e),
            Self::TransportError(e) => write!(f, "transport: {}", e),
        }
    }
}

impl Debug for BubbleForestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl From<&str> for BubbleForestError {
    fn from(value: &str) -> Self {
        Self::UsageError(value.to_string())
    }
}

impl From<String> for BubbleForestError {
    fn from(value: String) -> Self {
        Self::UsageError(value)
    }
}

impl From<io::Error> for BubbleForestError {
    fn from(value: io::Error) -> Self {
        Self::IoError(value)
    }
}

impl From<serde_json::Error> for BubbleForestError {
    fn from(value: serde_json::Error) -> Self {
        Self::UsageError(format!("malformed cluster config: {value}"))
    }
}
