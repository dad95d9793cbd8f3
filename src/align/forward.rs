//!
//! Forward algorithm definitions
//!
use super::lattice::MatchLattice;
use super::table::{AlignResult, AlignTable};
use crate::prob::Prob;

///
/// Run Forward algorithm on the match lattice
///
/// `F[t][n]` = total probability of all monotonic paths from (0,0)
/// to (t,n), where a path may advance the source frame, the target
/// frame, or both at each step:
///
/// ```text
/// F[t][n] = sim[t][n] * (F[t-1][n] + F[t][n-1] + F[t-1][n-1])
/// F[-1][*] = F[*][-1] = 0, except the virtual start F[-1][-1] = 1
/// ```
///
/// The whole recursion runs on log-domain `Prob` values, so long
/// sequences do not underflow.
///
pub fn forward(lattice: &MatchLattice) -> AlignResult {
    let t_len = lattice.n_source();
    let n_len = lattice.n_target();
    let mut r = AlignResult {
        tables: Vec::with_capacity(t_len),
    };
    for t in 0..t_len {
        let table = f_step(lattice, t, r.tables.last());
        r.tables.push(table);
    }
    r
}

///
/// Calculate the table of frame `t` from the table of frame `t-1`
///
fn f_step(lattice: &MatchLattice, t: usize, prev: Option<&AlignTable>) -> AlignTable {
    let n_len = lattice.n_target();
    let mut table = AlignTable::zero(n_len);
    for n in 0..n_len {
        // up = F[t-1][n], left = F[t][n-1], diag = F[t-1][n-1]
        let up = match prev {
            Some(prev) => prev[n],
            None => Prob::zero(),
        };
        let left = if n > 0 { table[n - 1] } else { Prob::zero() };
        let diag = match prev {
            Some(prev) if n > 0 => prev[n - 1],
            _ => Prob::zero(),
        };
        let from = if t == 0 && n == 0 {
            Prob::one()
        } else {
            up + left + diag
        };
        table[n] = lattice.sim(t, n) * from;
    }
    table
}
