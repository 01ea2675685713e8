//! Associated Legendre functions used in the spherical harmonics synthesis.

/// Maximal degree (and order) of the expansion
pub const MAX_DEGREE: usize = 9;

/// Number of (n, m) terms for [MAX_DEGREE]
pub const NUM_TERMS: usize = (MAX_DEGREE + 1) * (MAX_DEGREE + 2) / 2;

const SIZE: usize = MAX_DEGREE + 1;

/// Iterates the (degree, order) pairs in the order the coefficient
/// tables are stored: degree major, order ascending within each degree.
pub fn degree_order() -> impl Iterator<Item = (usize, usize)> {
    (0..=MAX_DEGREE).flat_map(|n| (0..=n).map(move |m| (n, m)))
}

/// [Legendre] functions `V(n, m)` and `W(n, m)` evaluated
/// for one direction on the unit sphere.
#[derive(Debug, Clone, PartialEq)]
pub struct Legendre {
    v: [[f64; SIZE]; SIZE],
    w: [[f64; SIZE]; SIZE],
}

impl Legendre {
    /// Evaluates all [Legendre] functions up to [MAX_DEGREE]
    /// for given unit vector.
    pub fn new(unit: &[f64; 3]) -> Self {
        let [x, y, z] = *unit;

        let mut v = [[0.0_f64; SIZE]; SIZE];
        let mut w = [[0.0_f64; SIZE]; SIZE];

        // zonal terms
        v[0][0] = 1.0;
        v[1][0] = z * v[0][0];

        for n in 2..SIZE {
            let nf = n as f64;
            v[n][0] = ((2.0 * nf - 1.0) * z * v[n - 1][0] - (nf - 1.0) * v[n - 2][0]) / nf;
        }

        for m in 1..SIZE {
            let mf = m as f64;

            // sectorial terms
            v[m][m] = (2.0 * mf - 1.0) * (x * v[m - 1][m - 1] - y * w[m - 1][m - 1]);
            w[m][m] = (2.0 * mf - 1.0) * (x * w[m - 1][m - 1] + y * v[m - 1][m - 1]);

            if m < MAX_DEGREE {
                v[m + 1][m] = (2.0 * mf + 1.0) * z * v[m][m];
                w[m + 1][m] = (2.0 * mf + 1.0) * z * w[m][m];
            }

            // tesseral terms
            for n in (m + 2)..SIZE {
                let nf = n as f64;
                let k1 = 2.0 * nf - 1.0;
                let k2 = nf + mf - 1.0;
                let d = nf - mf;
                v[n][m] = (k1 * z * v[n - 1][m] - k2 * v[n - 2][m]) / d;
                w[n][m] = (k1 * z * w[n - 1][m] - k2 * w[n - 2][m]) / d;
            }
        }

        Self { v, w }
    }

    /// Returns `V(n, m)`. Panics if `m > n` or `n > MAX_DEGREE`.
    pub fn v(&self, n: usize, m: usize) -> f64 {
        assert!(m <= n, "order {} exceeds degree {}", m, n);
        self.v[n][m]
    }

    /// Returns `W(n, m)`. Panics if `m > n` or `n > MAX_DEGREE`.
    pub fn w(&self, n: usize, m: usize) -> f64 {
        assert!(m <= n, "order {} exceeds degree {}", m, n);
        self.w[n][m]
    }

    /// Iterates `(V(n, m), W(n, m))` following [degree_order].
    pub fn terms(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        degree_order().map(|(n, m)| (self.v[n][m], self.w[n][m]))
    }
}
