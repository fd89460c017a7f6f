#![allow(clippy::needless_range_loop)]

use thiserror::Error;

const N: usize = 3;

pub type Mat3 = [[f64; 3]; 3];

#[derive(Debug, Error)]
#[error("LU decomposition failed, matrix is degenerate")]
pub struct DegenerateMatrixError;

/// LU decomposition with partial pivoting of a 3×3 matrix, `P·A = L·U`.
///
/// `lu` packs `L - E` below the diagonal and `U` on and above it. `perm[i]` is
/// the source row of row `i`.
#[derive(Debug, Clone, Copy)]
pub struct Lu {
    lu: Mat3,
    perm: [usize; N],
}

impl Lu {
    pub fn decompose(a: &Mat3, tol: f64) -> Result<Lu, DegenerateMatrixError> {
        let mut a = *a;
        let mut perm = [0, 1, 2];

        for i in 0..N {
            let mut pivot = 0.0;
            let mut pivot_row = i;
            for k in i..N {
                let abs = a[k][i].abs();
                if abs > pivot {
                    pivot = abs;
                    pivot_row = k;
                }
            }

            if pivot < tol {
                return Err(DegenerateMatrixError);
            }

            if pivot_row != i {
                perm.swap(i, pivot_row);
                a.swap(i, pivot_row);
            }

            for j in (i + 1)..N {
                a[j][i] /= a[i][i];
                for k in (i + 1)..N {
                    a[j][k] -= a[j][i] * a[i][k];
                }
            }
        }

        Ok(Lu { lu: a, perm })
    }

    /// Solve `A·x = b` for `x`.
    pub fn solve(&self, b: [f64; 3]) -> [f64; 3] {
        let a = &self.lu;
        let mut x = [0.0; N];

        // Forward substitution with the unit lower triangle.
        for i in 0..N {
            x[i] = b[self.perm[i]];
            for k in 0..i {
                x[i] -= a[i][k] * x[k];
            }
        }

        // Back substitution with the upper triangle.
        for i in (0..N).rev() {
            for k in (i + 1)..N {
                x[i] -= a[i][k] * x[k];
            }
            x[i] /= a[i][i];
        }

        x
    }
}

pub fn mul_vec(m: &Mat3, v: [f64; 3]) -> [f64; 3] {
    let mut out = [0.0; N];
    for i in 0..N {
        out[i] = m[i][0] * v[0] + m[i][1] * v[1] + m[i][2] * v[2];
    }
    out
}
