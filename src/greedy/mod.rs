//! Greedy partitioning and its complete (anytime) extension.
//!
//! # Key Components
//!
//! - [`GreedyRunner`]: place each number, largest first, into the part with
//!   the smallest sum
//! - [`CompleteGreedy`]: depth-first search over all assignments in greedy
//!   order, yielding partitions that strictly improve an [`Objective`]
//! - [`Spread`], [`LargestSums`], [`SmallestSums`]: ready-made objectives
//!
//! # References
//!
//! - Graham, R. L. (1969). "Bounds on multiprocessing timing anomalies",
//!   *SIAM Journal on Applied Mathematics* 17(2), 416-429.
//! - Korf, R. E. (1998). "A complete anytime algorithm for number
//!   partitioning", *Artificial Intelligence* 106(2), 181-203.

mod complete;
mod objective;
mod runner;

pub use complete::CompleteGreedy;
pub use objective::{LargestSums, Objective, SmallestSums, Spread};
pub use runner::GreedyRunner;
