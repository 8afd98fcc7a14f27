//! Constant matrices for the puzzle gate set
//!
//! Matrices are row-major. For multi-qubit gates the first qubit of the
//! operation is the most significant bit of the row and column index.

use num_complex::Complex64;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);
const NEG_I: Complex64 = Complex64::new(0.0, -1.0);
const NEG_ONE: Complex64 = Complex64::new(-1.0, 0.0);

/// 1/√2
pub const INV_SQRT2: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Identity
/// I = [[1, 0],
///      [0, 1]]
pub const IDENTITY: [[Complex64; 2]; 2] = [[ONE, ZERO], [ZERO, ONE]];

/// Hadamard
/// H = 1/√2 * [[1,  1],
///             [1, -1]]
pub const HADAMARD: [[Complex64; 2]; 2] = [
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(INV_SQRT2, 0.0),
    ],
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(-INV_SQRT2, 0.0),
    ],
];

/// Pauli-X
/// X = [[0, 1],
///      [1, 0]]
pub const PAULI_X: [[Complex64; 2]; 2] = [[ZERO, ONE], [ONE, ZERO]];

/// Pauli-Y
/// Y = [[0, -i],
///      [i,  0]]
pub const PAULI_Y: [[Complex64; 2]; 2] = [[ZERO, NEG_I], [I, ZERO]];

/// Pauli-Z
/// Z = [[1,  0],
///      [0, -1]]
pub const PAULI_Z: [[Complex64; 2]; 2] = [[ONE, ZERO], [ZERO, NEG_ONE]];

/// Phase gate, √Z
/// S = [[1, 0],
///      [0, i]]
pub const S_GATE: [[Complex64; 2]; 2] = [[ONE, ZERO], [ZERO, I]];

/// π/8 gate, √S
/// T = [[1, 0],
///      [0, e^(iπ/4)]]
pub const T_GATE: [[Complex64; 2]; 2] = [
    [ONE, ZERO],
    [ZERO, Complex64::new(INV_SQRT2, INV_SQRT2)],
];

/// Controlled-NOT, control first
pub const CNOT: [[Complex64; 4]; 4] = [
    [ONE, ZERO, ZERO, ZERO],
    [ZERO, ONE, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ONE],
    [ZERO, ZERO, ONE, ZERO],
];

/// Controlled-Z
pub const CZ: [[Complex64; 4]; 4] = [
    [ONE, ZERO, ZERO, ZERO],
    [ZERO, ONE, ZERO, ZERO],
    [ZERO, ZERO, ONE, ZERO],
    [ZERO, ZERO, ZERO, NEG_ONE],
];

/// Toffoli (CCX), both controls first
pub const TOFFOLI: [[Complex64; 8]; 8] = toffoli();

const fn toffoli() -> [[Complex64; 8]; 8] {
    let mut m = [[ZERO; 8]; 8];
    let mut i = 0;
    while i < 6 {
        m[i][i] = ONE;
        i += 1;
    }
    m[6][7] = ONE;
    m[7][6] = ONE;
    m
}

/// Flatten a square matrix into row-major order
pub fn flatten<const N: usize>(matrix: &[[Complex64; N]; N]) -> Vec<Complex64> {
    matrix.iter().flatten().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn is_unitary<const N: usize>(m: &[[Complex64; N]; N]) -> bool {
        for i in 0..N {
            for j in 0..N {
                let mut sum = ZERO;
                for k in 0..N {
                    sum += m[k][i].conj() * m[k][j];
                }
                let expected = if i == j { ONE } else { ZERO };
                if (sum - expected).norm() > 1e-12 {
                    return false;
                }
            }
        }
        true
    }

    #[test]
    fn test_all_matrices_unitary() {
        for m in [IDENTITY, HADAMARD, PAULI_X, PAULI_Y, PAULI_Z, S_GATE, T_GATE] {
            assert!(is_unitary(&m));
        }
        assert!(is_unitary(&CNOT));
        assert!(is_unitary(&CZ));
        assert!(is_unitary(&TOFFOLI));
    }

    #[test]
    fn test_t_squared_is_s() {
        let t = T_GATE[1][1];
        let s = t * t;
        assert_relative_eq!(s.re, S_GATE[1][1].re, epsilon = 1e-12);
        assert_relative_eq!(s.im, S_GATE[1][1].im, epsilon = 1e-12);
    }

    #[test]
    fn test_toffoli_swaps_last_two() {
        assert_eq!(TOFFOLI[6][7], ONE);
        assert_eq!(TOFFOLI[7][6], ONE);
        assert_eq!(TOFFOLI[7][7], ZERO);
        assert_eq!(TOFFOLI[5][5], ONE);
    }

    #[test]
    fn test_flatten_row_major() {
        let flat = flatten(&PAULI_Y);
        assert_eq!(flat, vec![ZERO, NEG_I, I, ZERO]);
    }
}
