//! Karmarkar-Karp (largest differencing) partitioning.
//!
//! # Key Components
//!
//! - [`KarmarkarKarpRunner`]: the one-shot heuristic
//! - [`CompleteKarmarkarKarp`]: branch-and-bound search over every merge
//!   alignment, yielding strictly improving partitions
//! - [`combine`]: all distinct bin alignments of two partial partitions
//! - [`lower_bound`]: admissible bound on the spread reachable from a node
//!
//! # References
//!
//! - Karmarkar, N. & Karp, R. M. (1982). "The differencing method of set
//!   partitioning", UCB/CSD 82/113.
//! - Korf, R. E. (1998). "A complete anytime algorithm for number
//!   partitioning", *Artificial Intelligence* 106(2), 181-203.
//! - Korf, R. E. (2009). "Multi-way number partitioning", *IJCAI-09*, 538-543.

mod bound;
mod combine;
mod complete;
mod runner;
mod types;

pub use bound::lower_bound;
pub use combine::combine;
pub use complete::CompleteKarmarkarKarp;
pub use runner::KarmarkarKarpRunner;
pub use types::PartialPartition;
