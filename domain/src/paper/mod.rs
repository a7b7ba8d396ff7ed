//! Question paper assembly.
//!
//! A paper is built bucket by bucket, one bucket per [`DistributionEntry`]:
//!
//! 1. [`distribution`]: the requested split must sum to exactly 100 percent
//! 2. [`shuffle`]: candidates are permuted with an injected RNG
//! 3. [`selection`]: a greedy first-fit pass fills the bucket's marks target
//!
//! Fetching candidates is the application layer's job; everything here is pure.
//!
//! [`DistributionEntry`]: distribution::DistributionEntry

pub mod distribution;
pub mod selection;
pub mod shuffle;
