//! Ket notation
//!
//! A ket string is an optional global phase (`-`, `i`, `-i`) followed by one
//! or more kets joined by `⊗`. The label inside a ket is a product of
//! factors read left to right, the leftmost factor describing qubit 0:
//!
//! | factor | qubits | state |
//! |--------|--------|-------|
//! | `0`, `1` | 1 | computational basis |
//! | `+`, `-` | 1 | equal superposition, relative phase ±1 |
//! | `+i`, `-i` | 1 | equal superposition, relative phase ±i |
//! | `i·1` | 1 | one, times i |
//! | `T+` | 1 | T applied to plus |
//! | `Φ+`, `Φ-`, `Ψ+`, `Ψ-` | 2 | Bell states |
//! | `GHZ`, `W` | all | must be the only factor |
//!
//! `>` may replace `⟩`, and `Phi`/`Psi` may replace `Φ`/`Ψ`.
//!
//! ```
//! use qpuzzle_state::ket;
//!
//! let state = ket::parse_ket("|1+⟩", 2).unwrap();
//! // qubit 0 is |1⟩, so only odd indices are populated
//! assert!(state.get_probability(0b01).unwrap() > 0.49);
//! assert!(state.get_probability(0b11).unwrap() > 0.49);
//! assert_eq!(ket::basis_label(0b01, 2), "|10⟩");
//! ```

use crate::dense_state::DenseState;
use crate::error::{Result, StateError};
use crate::state_vector::MAX_STATE_QUBITS;
use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Factor {
    Zero,
    One,
    Plus,
    Minus,
    PlusI,
    MinusI,
    IOne,
    TPlus,
    PhiPlus,
    PhiMinus,
    PsiPlus,
    PsiMinus,
    Ghz,
    W,
}

/// Longest spellings first so `+i` wins over `+`
const TOKENS: &[(&str, Factor)] = &[
    ("Phi+", Factor::PhiPlus),
    ("Phi-", Factor::PhiMinus),
    ("Psi+", Factor::PsiPlus),
    ("Psi-", Factor::PsiMinus),
    ("Φ+", Factor::PhiPlus),
    ("Φ-", Factor::PhiMinus),
    ("Ψ+", Factor::PsiPlus),
    ("Ψ-", Factor::PsiMinus),
    ("GHZ", Factor::Ghz),
    ("i·1", Factor::IOne),
    ("i*1", Factor::IOne),
    ("+i", Factor::PlusI),
    ("-i", Factor::MinusI),
    ("T+", Factor::TPlus),
    ("i1", Factor::IOne),
    ("W", Factor::W),
    ("0", Factor::Zero),
    ("1", Factor::One),
    ("+", Factor::Plus),
    ("-", Factor::Minus),
];

/// Single-qubit factors tried by [`identify`], in display order
const PRODUCT_FACTORS: [(Factor, &str); 6] = [
    (Factor::Zero, "0"),
    (Factor::One, "1"),
    (Factor::Plus, "+"),
    (Factor::Minus, "-"),
    (Factor::PlusI, "+i"),
    (Factor::MinusI, "-i"),
];

impl Factor {
    fn is_register_wide(self) -> bool {
        matches!(self, Factor::Ghz | Factor::W)
    }

    fn width(self, num_qubits: usize) -> usize {
        match self {
            Factor::PhiPlus | Factor::PhiMinus | Factor::PsiPlus | Factor::PsiMinus => 2,
            Factor::Ghz | Factor::W => num_qubits,
            _ => 1,
        }
    }

    /// Little-endian amplitudes over `width` qubits
    fn amplitudes(self, width: usize) -> Vec<Complex64> {
        let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
        match self {
            Factor::Zero => vec![ONE, ZERO],
            Factor::One => vec![ZERO, ONE],
            Factor::Plus => vec![h, h],
            Factor::Minus => vec![h, -h],
            Factor::PlusI => vec![h, h * I],
            Factor::MinusI => vec![h, -h * I],
            Factor::IOne => vec![ZERO, I],
            Factor::TPlus => vec![h, Complex64::new(0.5, 0.5)],
            // |01⟩ (qubit 0 = 0, qubit 1 = 1) is index 2
            Factor::PhiPlus => vec![h, ZERO, ZERO, h],
            Factor::PhiMinus => vec![h, ZERO, ZERO, -h],
            Factor::PsiPlus => vec![ZERO, h, h, ZERO],
            Factor::PsiMinus => vec![ZERO, -h, h, ZERO],
            Factor::Ghz => {
                let mut amps = vec![ZERO; 1 << width];
                amps[0] = h;
                amps[(1 << width) - 1] = h;
                amps
            }
            Factor::W => {
                let amp = Complex64::new(1.0 / (width as f64).sqrt(), 0.0);
                let mut amps = vec![ZERO; 1 << width];
                for k in 0..width {
                    amps[1 << k] = amp;
                }
                amps
            }
        }
    }
}

/// Parse a ket string into a state over exactly `num_qubits` qubits
///
/// # Errors
/// [`StateError::InvalidKet`] when the string is malformed, describes a
/// different number of qubits, or `num_qubits` is zero or above
/// [`MAX_STATE_QUBITS`].
pub fn parse_ket(label: &str, num_qubits: usize) -> Result<DenseState> {
    if num_qubits == 0 || num_qubits > MAX_STATE_QUBITS {
        return Err(StateError::invalid_ket(
            label,
            format!("register must have 1 to {} qubits, got {}", MAX_STATE_QUBITS, num_qubits),
        ));
    }
    let text = label.trim();
    let start = text
        .find('|')
        .ok_or_else(|| StateError::invalid_ket(label, "expected a ket such as |0⟩"))?;
    let phase = parse_phase(label, text[..start].trim())?;

    let mut factors = Vec::new();
    let mut rest = &text[start..];
    loop {
        rest = rest.trim_start();
        let Some(inner_start) = rest.strip_prefix('|') else {
            return Err(StateError::invalid_ket(label, format!("unexpected '{}'", rest)));
        };
        let end = inner_start
            .find(['⟩', '>'])
            .ok_or_else(|| StateError::invalid_ket(label, "missing closing ⟩"))?;
        let inner = &inner_start[..end];
        if inner.trim().is_empty() {
            return Err(StateError::invalid_ket(label, "empty ket"));
        }
        parse_factors(label, inner, &mut factors)?;

        let closing_len = inner_start[end..].chars().next().map_or(1, char::len_utf8);
        rest = inner_start[end + closing_len..].trim_start();
        if rest.is_empty() {
            break;
        }
        rest = rest.strip_prefix('⊗').unwrap_or(rest);
    }

    if factors.iter().any(|f| f.is_register_wide()) {
        if factors.len() != 1 {
            return Err(StateError::invalid_ket(
                label,
                "GHZ and W must be the only factor",
            ));
        }
        if num_qubits < 2 {
            return Err(StateError::invalid_ket(label, "GHZ and W need at least 2 qubits"));
        }
    }

    let total: usize = factors.iter().map(|f| f.width(num_qubits)).sum();
    if total != num_qubits {
        return Err(StateError::invalid_ket(
            label,
            format!("describes {} qubits, expected {}", total, num_qubits),
        ));
    }

    let mut amplitudes = vec![phase];
    let mut width = 0;
    for factor in factors {
        let w = factor.width(num_qubits);
        amplitudes = tensor(&amplitudes, width, &factor.amplitudes(w));
        width += w;
    }
    DenseState::from_amplitudes(num_qubits, &amplitudes)
}

fn parse_phase(label: &str, prefix: &str) -> Result<Complex64> {
    match prefix {
        "" | "+" => Ok(ONE),
        "-" => Ok(-ONE),
        "i" | "+i" => Ok(I),
        "-i" => Ok(-I),
        other => Err(StateError::invalid_ket(
            label,
            format!("unsupported phase '{}'", other),
        )),
    }
}

fn parse_factors(label: &str, inner: &str, factors: &mut Vec<Factor>) -> Result<()> {
    let mut rest = inner.trim();
    while !rest.is_empty() {
        let (token, factor) = TOKENS
            .iter()
            .find(|(token, _)| rest.starts_with(token))
            .ok_or_else(|| StateError::invalid_ket(label, format!("unknown factor at '{}'", rest)))?;
        factors.push(*factor);
        rest = rest[token.len()..].trim_start();
    }
    Ok(())
}

/// `low` covers the first `low_width` qubits, `high` the ones after it
fn tensor(low: &[Complex64], low_width: usize, high: &[Complex64]) -> Vec<Complex64> {
    let mut out = vec![ZERO; low.len() * high.len()];
    for (j, h) in high.iter().enumerate() {
        for (i, l) in low.iter().enumerate() {
            out[i | (j << low_width)] = l * h;
        }
    }
    out
}

/// Basis state digits with qubit 0 first, e.g. `"10"` for index 1 of 2 qubits
pub fn bitstring(index: usize, num_qubits: usize) -> String {
    (0..num_qubits)
        .map(|k| if (index >> k) & 1 == 1 { '1' } else { '0' })
        .collect()
}

/// Basis state as a ket, e.g. `"|10⟩"`
pub fn basis_label(index: usize, num_qubits: usize) -> String {
    format!("|{}⟩", bitstring(index, num_qubits))
}

fn clean(x: f64) -> f64 {
    if x.abs() < 5e-4 {
        0.0
    } else {
        x
    }
}

/// Compact amplitude, e.g. `0.707`, `-0.500i`, `(0.500+0.500i)`
pub fn format_amplitude(amp: Complex64) -> String {
    let (re, im) = (clean(amp.re), clean(amp.im));
    if im == 0.0 {
        format!("{:.3}", re)
    } else if re == 0.0 {
        format!("{:.3}i", im)
    } else {
        format!("({:.3}{:+.3}i)", re, im)
    }
}

/// Sum of basis kets with non-negligible amplitude
///
/// ```
/// use qpuzzle_state::{ket, DenseState};
///
/// let state = ket::parse_ket("|Φ-⟩", 2).unwrap();
/// assert_eq!(ket::format_state(&state, 1e-9), "0.707|00⟩ - 0.707|11⟩");
/// ```
pub fn format_state(state: &DenseState, epsilon: f64) -> String {
    let n = state.num_qubits();
    let mut out = String::new();
    for (index, &amp) in state.amplitudes().iter().enumerate() {
        if amp.norm() <= epsilon {
            continue;
        }
        let negative = (clean(amp.im) == 0.0 && amp.re < 0.0) || (clean(amp.re) == 0.0 && amp.im < 0.0);
        let shown = if negative { -amp } else { amp };
        match (out.is_empty(), negative) {
            (true, false) => {}
            (true, true) => out.push('-'),
            (false, false) => out.push_str(" + "),
            (false, true) => out.push_str(" - "),
        }
        out.push_str(&format_amplitude(shown));
        out.push_str(&basis_label(index, n));
    }
    if out.is_empty() {
        out.push('0');
    }
    out
}

/// Name a state from the ket vocabulary, ignoring global phase
///
/// Tries products of single-qubit factors (up to 4 qubits), then the Bell,
/// GHZ and W states.
pub fn identify(state: &DenseState, tolerance: f64) -> Option<String> {
    let n = state.num_qubits();
    let is_match = |amps: &[Complex64]| {
        DenseState::from_amplitudes(n, amps)
            .and_then(|candidate| candidate.fidelity(state))
            .map_or(false, |f| f >= 1.0 - tolerance)
    };

    if n <= 4 {
        let combos = PRODUCT_FACTORS.len().pow(n as u32);
        for combo in 0..combos {
            let mut amps = vec![ONE];
            let mut label = String::new();
            let mut digits = combo;
            for qubit in 0..n {
                let (factor, text) = PRODUCT_FACTORS[digits % PRODUCT_FACTORS.len()];
                digits /= PRODUCT_FACTORS.len();
                amps = tensor(&amps, qubit, &factor.amplitudes(1));
                label.push_str(text);
            }
            if is_match(&amps) {
                return Some(format!("|{}⟩", label));
            }
        }
    }

    let named: &[(Factor, &str)] = if n == 2 {
        &[
            (Factor::PhiPlus, "Φ+"),
            (Factor::PhiMinus, "Φ-"),
            (Factor::PsiPlus, "Ψ+"),
            (Factor::PsiMinus, "Ψ-"),
        ]
    } else if n > 2 {
        &[(Factor::Ghz, "GHZ"), (Factor::W, "W")]
    } else {
        &[]
    };
    named
        .iter()
        .find(|(factor, _)| is_match(&factor.amplitudes(n)))
        .map(|(_, text)| format!("|{}⟩", text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn amp(state: &DenseState, index: usize) -> Complex64 {
        state.amplitude(index).unwrap()
    }

    #[test]
    fn test_basis_kets() {
        let state = parse_ket("|01⟩", 2).unwrap();
        // qubit 1 is set
        assert_eq!(amp(&state, 0b10), ONE);
        let state = parse_ket("|110>", 3).unwrap();
        assert_eq!(amp(&state, 0b011), ONE);
    }

    #[test]
    fn test_superposition_factors() {
        let minus = parse_ket("|-⟩", 1).unwrap();
        assert_relative_eq!(amp(&minus, 1).re, -FRAC_1_SQRT_2, epsilon = 1e-12);

        let plus_i = parse_ket("|+i⟩", 1).unwrap();
        assert_relative_eq!(amp(&plus_i, 1).im, FRAC_1_SQRT_2, epsilon = 1e-12);

        let t_plus = parse_ket("|T+⟩", 1).unwrap();
        assert_relative_eq!(amp(&t_plus, 1).re, 0.5, epsilon = 1e-12);
        assert_relative_eq!(amp(&t_plus, 1).im, 0.5, epsilon = 1e-12);

        let i_one = parse_ket("|i·1⟩", 1).unwrap();
        assert_eq!(amp(&i_one, 1), I);
    }

    #[test]
    fn test_phase_prefix() {
        let state = parse_ket("-|1⟩", 1).unwrap();
        assert_eq!(amp(&state, 1), -ONE);
        let state = parse_ket("-i |0⟩", 1).unwrap();
        assert_eq!(amp(&state, 0), -I);
        assert!(parse_ket("2|0⟩", 1).is_err());
    }

    #[test]
    fn test_bell_and_mixed() {
        let psi_minus = parse_ket("|Ψ-⟩", 2).unwrap();
        assert_relative_eq!(amp(&psi_minus, 0b10).re, FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_relative_eq!(amp(&psi_minus, 0b01).re, -FRAC_1_SQRT_2, epsilon = 1e-12);

        // qubit 0 is |0⟩, qubits 1 and 2 hold Φ+
        let state = parse_ket("|0Φ+⟩", 3).unwrap();
        assert_relative_eq!(state.get_probability(0b000).unwrap(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(state.get_probability(0b110).unwrap(), 0.5, epsilon = 1e-12);

        let ascii = parse_ket("|Phi+>", 2).unwrap();
        assert_eq!(ascii, parse_ket("|Φ+⟩", 2).unwrap());
    }

    #[test]
    fn test_tensor_of_kets() {
        let joined = parse_ket("|1⟩ ⊗ |0⟩ ⊗ |+⟩", 3).unwrap();
        let single = parse_ket("|10+⟩", 3).unwrap();
        assert_eq!(joined, single);
        let adjacent = parse_ket("|1⟩|0+⟩", 3).unwrap();
        assert_eq!(adjacent, single);
    }

    #[test]
    fn test_ghz_and_w() {
        let ghz = parse_ket("|GHZ⟩", 3).unwrap();
        assert_relative_eq!(ghz.get_probability(0).unwrap(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(ghz.get_probability(7).unwrap(), 0.5, epsilon = 1e-12);

        let w = parse_ket("|W⟩", 3).unwrap();
        for k in 0..3 {
            assert_relative_eq!(w.get_probability(1 << k).unwrap(), 1.0 / 3.0, epsilon = 1e-12);
        }
        assert!(parse_ket("|GHZ⟩", 1).is_err());
        assert!(parse_ket("|0GHZ⟩", 3).is_err());
    }

    #[test]
    fn test_errors() {
        for bad in ["0", "|", "|⟩", "|2⟩", "|0", "|0⟩ junk"] {
            assert!(
                matches!(parse_ket(bad, 1), Err(StateError::InvalidKet { .. })),
                "{bad}"
            );
        }
        let err = parse_ket("|00⟩", 3).unwrap_err();
        assert!(err.to_string().contains("describes 2 qubits, expected 3"));
    }

    #[test]
    fn test_register_size_checked_first() {
        // Register-wide factors would otherwise size their vector from num_qubits
        for (label, n) in [("|GHZ⟩", 64), ("|W⟩", MAX_STATE_QUBITS + 1), ("|0⟩", 0)] {
            let err = parse_ket(label, n).unwrap_err();
            assert!(matches!(err, StateError::InvalidKet { .. }), "{label} on {n}");
            assert!(err.to_string().contains("register must have 1 to"));
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(bitstring(0b001, 3), "100");
        assert_eq!(basis_label(0b110, 3), "|011⟩");
    }

    #[test]
    fn test_format_state() {
        let plus_i = parse_ket("|+i⟩", 1).unwrap();
        assert_eq!(format_state(&plus_i, 1e-9), "0.707|0⟩ + 0.707i|1⟩");
        let neg = parse_ket("-|1⟩", 1).unwrap();
        assert_eq!(format_state(&neg, 1e-9), "-1.000|1⟩");
        let t_plus = parse_ket("|T+⟩", 1).unwrap();
        assert_eq!(format_state(&t_plus, 1e-9), "0.707|0⟩ + (0.500+0.500i)|1⟩");
    }

    #[test]
    fn test_identify() {
        let state = parse_ket("|1+⟩", 2).unwrap();
        assert_eq!(identify(&state, 1e-9).as_deref(), Some("|1+⟩"));
        let state = parse_ket("-|Φ-⟩", 2).unwrap();
        assert_eq!(identify(&state, 1e-9).as_deref(), Some("|Φ-⟩"));
        let state = parse_ket("|W⟩", 3).unwrap();
        assert_eq!(identify(&state, 1e-9).as_deref(), Some("|W⟩"));
        let state = parse_ket("|T+⟩", 1).unwrap();
        assert_eq!(identify(&state, 1e-9), None);
    }
}
