//!
//! Backward algorithm definitions
//!
use super::forward::forward;
use super::lattice::MatchLattice;
use super::table::AlignResult;

///
/// Run Backward algorithm on the match lattice
///
/// `B[t][n]` = total probability of all monotonic paths from (t,n)
/// to (T-1,N-1):
///
/// ```text
/// B[t][n] = sim[t][n] * (B[t+1][n] + B[t][n+1] + B[t+1][n+1])
/// ```
///
/// Computed as the forward variable of the reversed lattice, with both
/// axes of the result flipped back so that `tables[t][n]` corresponds
/// to the cell (t,n) of the original lattice.
///
/// By construction `B[0][0] = F[T-1][N-1] = Z`.
///
pub fn backward(lattice: &MatchLattice) -> AlignResult {
    let mut r = forward(&lattice.reversed());
    r.tables.reverse();
    for table in r.tables.iter_mut() {
        table.probs.reverse();
    }
    r
}
