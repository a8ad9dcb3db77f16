//! Multiway number partitioning.
//!
//! Splits a list of integers into `k` parts whose sums are as equal as
//! possible:
//!
//! - **Karmarkar-Karp (KK)**: largest differencing heuristic, merging the
//!   two partial partitions with the largest spread until one remains.
//! - **Complete Karmarkar-Karp (CKK)**: branch-and-bound over every bin
//!   alignment of each merge. An anytime iterator that yields partitions of
//!   strictly decreasing spread and ends with an optimal one.
//! - **Greedy**: largest number first into the currently smallest part.
//! - **Complete greedy**: depth-first search over all assignments in
//!   greedy order, minimizing a pluggable [`greedy::Objective`].
//!
//! Each operation takes a [`config::PartitionConfig`] (part count, whether
//! parts hold values or input positions, and the implementation selector)
//! and produces [`result::PartitioningResult`]s.
//!
//! ```
//! use u_partition::config::PartitionConfig;
//! use u_partition::kk::{CompleteKarmarkarKarp, KarmarkarKarpRunner};
//!
//! let numbers = [4, 5, 6, 7, 8];
//! let config = PartitionConfig::new(2);
//!
//! let quick = KarmarkarKarpRunner::run(&numbers, &config).unwrap();
//! let best = CompleteKarmarkarKarp::new(&numbers, &config).unwrap().last().unwrap();
//! assert!(best.spread() <= quick.spread());
//! assert_eq!(best.spread(), 0);
//! ```

pub mod config;
pub mod error;
pub mod greedy;
pub mod indices;
pub mod kk;
pub mod result;
pub mod stats;

#[cfg(test)]
mod testing;

pub use config::{Method, PartitionConfig};
pub use error::{PartitionError, Result};
pub use result::{Partition, PartitioningResult};
