//!
//! Forced alignment calculation
//!
//! # Overview of calculation
//!
//! source = source[0],...,source[T-1] : predicted distributions (T frames)
//! target = target[0],...,target[N-1] : label distributions (N frames)
//!
//! Match lattice
//! sim[t][n]
//!  = P(frame t and label n emit a compatible symbol)
//!  = dot(source[t], target[n])
//!
//! Forward
//! F[t][n]
//!  = P(of all monotonic paths from (0,0) to (t,n)) for 0<=t<T, 0<=n<N
//!  = sim[t][n] * (F[t-1][n] + F[t][n-1] + F[t-1][n-1])
//!
//! Backward
//! B[t][n]
//!  = P(of all monotonic paths from (t,n) to (T-1,N-1))
//!  = sim[t][n] * (B[t+1][n] + B[t][n+1] + B[t+1][n+1])
//!
//! Posterior
//! A[t][n]
//!  = F[t][n] B[t][n] / (sum of F B over all cells)
//! so that the total mass of A is exactly 1.
//!
//! Z = F[T-1][N-1] = B[0][0] is the total path mass and defines the
//! per-example cost `-log Z` of the batch variant.
//!
pub mod backward;
pub mod batch;
pub mod forward;
pub mod lattice;
pub mod mocks;
pub mod params;
pub mod posterior;
pub mod single;
pub mod table;

pub use batch::ctc_align_targets_batch;
pub use params::{AlignParams, CostNorm};
pub use posterior::{run, AlignOutput, Posterior};
pub use single::{ctc_align_targets, ctc_aligned_targets};
