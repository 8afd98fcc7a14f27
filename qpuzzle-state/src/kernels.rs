//! Scalar gate kernels over a flat amplitude slice
//!
//! Amplitude index bit `k` is qubit `k`. Gate matrices are row-major and use
//! the textbook ordering: the first qubit in `qubits` is the most significant
//! bit of the matrix index.

use num_complex::Complex64;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);

/// Apply a 2×2 matrix to one qubit
///
/// Visits each pair (i, i | mask) with bit `qubit` clear in i.
pub fn apply_single_qubit(state: &mut [Complex64], matrix: &[[Complex64; 2]; 2], qubit: usize) {
    let mask = 1usize << qubit;
    for i in 0..state.len() {
        if i & mask != 0 {
            continue;
        }
        let a0 = state[i];
        let a1 = state[i | mask];
        state[i] = matrix[0][0] * a0 + matrix[0][1] * a1;
        state[i | mask] = matrix[1][0] * a0 + matrix[1][1] * a1;
    }
}

/// Apply a 4×4 matrix to (`first`, `second`)
///
/// `first` is the high bit of the matrix index, so CNOT(control, target)
/// passes the control as `first`.
pub fn apply_two_qubit(
    state: &mut [Complex64],
    matrix: &[[Complex64; 4]; 4],
    first: usize,
    second: usize,
) {
    let m_first = 1usize << first;
    let m_second = 1usize << second;
    let offsets = [0, m_second, m_first, m_first | m_second];
    let both = m_first | m_second;

    for base in 0..state.len() {
        if base & both != 0 {
            continue;
        }
        let local = [
            state[base],
            state[base | offsets[1]],
            state[base | offsets[2]],
            state[base | offsets[3]],
        ];
        for (row, &offset) in matrix.iter().zip(offsets.iter()) {
            state[base | offset] = row
                .iter()
                .zip(local.iter())
                .map(|(m, a)| m * a)
                .sum();
        }
    }
}

/// Flip `target` wherever every control bit is set
///
/// One control is CNOT, two is Toffoli.
pub fn apply_controlled_x(state: &mut [Complex64], controls: &[usize], target: usize) {
    let control_mask: usize = controls.iter().map(|&c| 1usize << c).sum();
    let target_mask = 1usize << target;
    for i in 0..state.len() {
        if i & control_mask == control_mask && i & target_mask == 0 {
            state.swap(i, i | target_mask);
        }
    }
}

/// Negate amplitudes where both qubits are set
pub fn apply_cz(state: &mut [Complex64], qubit1: usize, qubit2: usize) {
    let mask = (1usize << qubit1) | (1usize << qubit2);
    for (i, amp) in state.iter_mut().enumerate() {
        if i & mask == mask {
            *amp = -*amp;
        }
    }
}

/// Apply a 2^k × 2^k row-major matrix to `qubits`
///
/// Callers guarantee the qubits are distinct and in range and that
/// `matrix.len() == 4^k`.
pub fn apply_matrix(state: &mut [Complex64], matrix: &[Complex64], qubits: &[usize]) {
    let k = qubits.len();
    let dim = 1usize << k;

    // offsets[l]: global bits set by local index l
    let offsets: Vec<usize> = (0..dim)
        .map(|local| {
            qubits
                .iter()
                .enumerate()
                .filter(|(j, _)| (local >> (k - 1 - j)) & 1 == 1)
                .map(|(_, &q)| 1usize << q)
                .sum()
        })
        .collect();
    let mask = offsets[dim - 1];

    let mut gathered = vec![ZERO; dim];
    for base in 0..state.len() {
        if base & mask != 0 {
            continue;
        }
        for (slot, &offset) in gathered.iter_mut().zip(&offsets) {
            *slot = state[base | offset];
        }
        for (row, &offset) in offsets.iter().enumerate() {
            state[base | offset] = matrix[row * dim..(row + 1) * dim]
                .iter()
                .zip(&gathered)
                .map(|(m, a)| m * a)
                .sum();
        }
    }
}

/// |amplitude|² for every basis state
pub fn compute_probabilities(state: &[Complex64], probabilities: &mut [f64]) {
    for (p, amp) in probabilities.iter_mut().zip(state) {
        *p = amp.norm_sqr();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use qpuzzle_gates::matrices;

    fn basis(n: usize, index: usize) -> Vec<Complex64> {
        let mut v = vec![ZERO; 1 << n];
        v[index] = Complex64::new(1.0, 0.0);
        v
    }

    fn assert_state_eq(a: &[Complex64], b: &[Complex64]) {
        for (x, y) in a.iter().zip(b) {
            assert_relative_eq!(x.re, y.re, epsilon = 1e-12);
            assert_relative_eq!(x.im, y.im, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_x_on_second_qubit() {
        let mut state = basis(2, 0);
        apply_single_qubit(&mut state, &matrices::PAULI_X, 1);
        assert_state_eq(&state, &basis(2, 0b10));
    }

    #[test]
    fn test_cnot_matrix_matches_fast_path() {
        // control q2, target q0, on every basis state of 3 qubits
        for index in 0..8 {
            let mut via_matrix = basis(3, index);
            let mut via_swap = basis(3, index);
            apply_two_qubit(&mut via_matrix, &matrices::CNOT, 2, 0);
            apply_controlled_x(&mut via_swap, &[2], 0);
            assert_state_eq(&via_matrix, &via_swap);
        }
    }

    #[test]
    fn test_generic_matrix_matches_two_qubit() {
        let flat = matrices::flatten(&matrices::CNOT);
        for index in 0..4 {
            let mut a = basis(2, index);
            let mut b = basis(2, index);
            apply_matrix(&mut a, &flat, &[0, 1]);
            apply_two_qubit(&mut b, &matrices::CNOT, 0, 1);
            assert_state_eq(&a, &b);
        }
    }

    #[test]
    fn test_toffoli_matrix_matches_fast_path() {
        let flat = matrices::flatten(&matrices::TOFFOLI);
        for index in 0..16 {
            let mut a = basis(4, index);
            let mut b = basis(4, index);
            apply_matrix(&mut a, &flat, &[3, 1, 0]);
            apply_controlled_x(&mut b, &[3, 1], 0);
            assert_state_eq(&a, &b);
        }
    }

    #[test]
    fn test_cz_negates_only_both_set() {
        let mut state = vec![Complex64::new(0.5, 0.0); 4];
        apply_cz(&mut state, 0, 1);
        assert_relative_eq!(state[3].re, -0.5);
        assert_relative_eq!(state[1].re, 0.5);
        assert_relative_eq!(state[2].re, 0.5);
    }

    #[test]
    fn test_probabilities() {
        let state = vec![Complex64::new(0.6, 0.0), Complex64::new(0.0, 0.8)];
        let mut probs = vec![0.0; 2];
        compute_probabilities(&state, &mut probs);
        assert_relative_eq!(probs[0], 0.36, epsilon = 1e-12);
        assert_relative_eq!(probs[1], 0.64, epsilon = 1e-12);
    }
}
