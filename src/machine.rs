//! Toy Machine-Number Model.
//!
//! A teaching model of floating-point representation. A machine number
//! is a sign bit, `t - 1` binary fraction bits, and an integer base-3
//! characteristic `k`, denoting the real value `±(1 + f) * 3^k` with
//! `f` the binary fraction; the all-zero mantissa denotes zero. The
//! deliberately odd base-3 exponent keeps the model visibly distinct
//! from IEEE 754 while exhibiting the same structure: a largest
//! representable value, a smallest positive one, and a gap after 1.

use serde::{Deserialize, Serialize};

/// Errors raised by the machine-number model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MachineError {
    /// Mantissa contains a digit other than 0 or 1
    #[error("mantissa bits must be 0 or 1")]
    InvalidMantissa,

    /// Mantissa has no bits
    #[error("mantissa must have at least one bit")]
    EmptyMantissa,

    /// Operand widths differ
    #[error("operand widths differ: {left} vs {right}")]
    WidthMismatch {
        /// Mantissa width of the left operand
        left: usize,
        /// Mantissa width of the right operand
        right: usize,
    },

    /// Set parameters are unusable
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Real number falls outside the representable set
    #[error("number not representable: {0}")]
    OutOfRange(String),
}

/// A machine number: sign bit, fraction bits, and characteristic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineNumber {
    /// Mantissa bits; the first is the sign (0 positive, 1 negative)
    pub mantissa: Vec<u8>,
    /// Base-3 exponent
    pub characteristic: i32,
}

impl MachineNumber {
    /// Create a machine number, validating the mantissa bits.
    pub fn new(mantissa: Vec<u8>, characteristic: i32) -> Result<Self, MachineError> {
        if mantissa.is_empty() {
            return Err(MachineError::EmptyMantissa);
        }
        if mantissa.iter().any(|&b| b > 1) {
            return Err(MachineError::InvalidMantissa);
        }
        Ok(Self {
            mantissa,
            characteristic,
        })
    }

    /// The zero of width `t` (all mantissa bits zero, characteristic zero).
    pub fn zero(t: usize) -> Self {
        Self {
            mantissa: vec![0; t],
            characteristic: 0,
        }
    }

    /// Whether this is the zero representation.
    pub fn is_zero(&self) -> bool {
        self.mantissa.iter().all(|&b| b == 0)
    }

    /// Mantissa width `t`.
    pub fn width(&self) -> usize {
        self.mantissa.len()
    }

    /// The real number this machine number represents.
    pub fn decode(&self) -> f64 {
        if self.is_zero() {
            return 0.0;
        }

        let sign = if self.mantissa[0] == 0 { 1.0 } else { -1.0 };

        let mut fraction = 0.0;
        for (i, &bit) in self.mantissa[1..].iter().enumerate() {
            fraction += f64::from(bit) * 2f64.powi(-(i as i32 + 1));
        }

        sign * (1.0 + fraction) * 3f64.powi(self.characteristic)
    }
}

/// The set of machine numbers with mantissa width `t` and
/// characteristic range `[k1, k2]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSet {
    /// Mantissa width (sign bit included)
    pub t: usize,
    /// Minimum characteristic
    pub k1: i32,
    /// Maximum characteristic
    pub k2: i32,
}

/// Summary parameters of a machine-number set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetParameters {
    /// Largest representable magnitude
    pub largest: f64,
    /// Smallest positive representable number
    pub smallest_positive: f64,
    /// Gap between 1 and the next larger representable number, when 1
    /// itself is representable
    pub epsilon_at_one: Option<f64>,
    /// Number of distinct values in the set, zero included
    pub count: usize,
}

impl MachineSet {
    /// Enumerating all mantissa patterns is exponential in `t`
    const MAX_WIDTH: usize = 24;

    /// Create a set description, validating the parameters.
    pub fn new(t: usize, k1: i32, k2: i32) -> Result<Self, MachineError> {
        if t < 2 {
            return Err(MachineError::InvalidParameters(
                "mantissa width must be at least 2 (sign bit plus fraction)".into(),
            ));
        }
        if t > Self::MAX_WIDTH {
            return Err(MachineError::InvalidParameters(format!(
                "mantissa width {t} is too wide to enumerate (limit {})",
                Self::MAX_WIDTH
            )));
        }
        if k1 >= k2 {
            return Err(MachineError::InvalidParameters(format!(
                "characteristic range is empty: k1 = {k1} must be below k2 = {k2}"
            )));
        }
        Ok(Self { t, k1, k2 })
    }

    /// All distinct representable values, sorted ascending.
    pub fn enumerate(&self) -> Vec<f64> {
        let mut values = vec![0.0];

        for k in self.k1..=self.k2 {
            for bits in 1u64..(1u64 << self.t) {
                let mantissa: Vec<u8> = (0..self.t)
                    .map(|pos| ((bits >> (self.t - 1 - pos)) & 1) as u8)
                    .collect();
                let number = MachineNumber {
                    mantissa,
                    characteristic: k,
                };
                values.push(number.decode());
            }
        }

        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        values.dedup();
        values
    }

    /// Summary parameters of the set.
    pub fn parameters(&self) -> SetParameters {
        let values = self.enumerate();

        let largest = values.iter().fold(0.0f64, |acc, &v| acc.max(v.abs()));
        let smallest_positive = values
            .iter()
            .filter(|&&v| v > 0.0)
            .fold(f64::INFINITY, |acc, &v| acc.min(v));

        let next_after_one = values
            .iter()
            .filter(|&&v| v > 1.0)
            .fold(f64::INFINITY, |acc, &v| acc.min(v));
        let epsilon_at_one = next_after_one.is_finite().then(|| next_after_one - 1.0);

        SetParameters {
            largest,
            smallest_positive,
            epsilon_at_one,
            count: values.len(),
        }
    }
}

/// Encode a real number into the machine-number set.
///
/// The characteristic is chosen so the mantissa lands in `[1, 2)`, then
/// clamped into the set's range; the fraction bits are extracted
/// greedily. When the greedy bits misrepresent the value badly, one
/// rounding retry with carry propagation is attempted.
pub fn encode(value: f64, set: &MachineSet) -> Result<MachineNumber, MachineError> {
    if value == 0.0 {
        return Ok(MachineNumber::zero(set.t));
    }

    let params = set.parameters();
    if value.abs() < params.smallest_positive {
        return Err(MachineError::OutOfRange(format!(
            "magnitude {} is below the smallest positive value {}",
            value.abs(),
            params.smallest_positive
        )));
    }
    if value.abs() > params.largest {
        return Err(MachineError::OutOfRange(format!(
            "magnitude {} exceeds the largest representable value {}",
            value.abs(),
            params.largest
        )));
    }

    let sign_bit = u8::from(value < 0.0);
    let abs = value.abs();

    // Characteristic k with 3^k <= |value| < 3^(k+1), clamped to range
    let mut k = (abs.ln() / 3f64.ln()).floor() as i32;
    k = k.clamp(set.k1, set.k2);

    let mantissa_value = abs / 3f64.powi(k);
    let fraction = (mantissa_value - 1.0).clamp(0.0, 1.0 - f64::EPSILON);

    let mut frac_bits = extract_fraction_bits(fraction, set.t - 1);

    let mut mantissa = Vec::with_capacity(set.t);
    mantissa.push(sign_bit);
    mantissa.extend_from_slice(&frac_bits);
    let mut result = MachineNumber {
        mantissa,
        characteristic: k,
    };

    // Greedy truncation can be badly off near a carry boundary: round
    // the last bit up and propagate once
    let relative_error = (result.decode() - value).abs() / value.abs();
    if relative_error > 0.5 {
        let mut carry = true;
        for bit in frac_bits.iter_mut().rev() {
            if *bit == 0 {
                *bit = 1;
                carry = false;
                break;
            }
            *bit = 0;
        }
        if carry && k < set.k2 {
            k += 1;
            frac_bits = vec![0; set.t - 1];
        }

        let mut mantissa = Vec::with_capacity(set.t);
        mantissa.push(sign_bit);
        mantissa.extend_from_slice(&frac_bits);
        result = MachineNumber {
            mantissa,
            characteristic: k,
        };
    }

    Ok(result)
}

/// Add two machine numbers of equal width.
///
/// Decodes, adds exactly, and re-encodes into a set whose characteristic
/// range widens around the operands'; a second, wider attempt is made
/// before saturating to the largest representable value of that range.
pub fn add(a: &MachineNumber, b: &MachineNumber) -> Result<MachineNumber, MachineError> {
    if a.width() != b.width() {
        return Err(MachineError::WidthMismatch {
            left: a.width(),
            right: b.width(),
        });
    }

    if a.is_zero() {
        return Ok(b.clone());
    }
    if b.is_zero() {
        return Ok(a.clone());
    }

    let t = a.width();
    let sum = a.decode() + b.decode();
    if sum == 0.0 {
        return Ok(MachineNumber::zero(t));
    }

    let k_lo = a.characteristic.min(b.characteristic) - 2;
    let k_hi = a.characteristic.max(b.characteristic) + 2;

    let narrow = MachineSet::new(t, k_lo, k_hi)?;
    if let Ok(result) = encode(sum, &narrow) {
        return Ok(result);
    }

    let wide = MachineSet::new(t, k_lo - 3, k_hi + 3)?;
    if let Ok(result) = encode(sum, &wide) {
        return Ok(result);
    }

    // Saturate to the widest magnitude of the attempted range
    let mut mantissa = vec![u8::from(sum < 0.0)];
    mantissa.extend(std::iter::repeat(1).take(t - 1));
    Ok(MachineNumber {
        mantissa,
        characteristic: k_hi + 3,
    })
}

/// Greedy binary expansion of a fraction in `[0, 1)`.
fn extract_fraction_bits(fraction: f64, bits: usize) -> Vec<u8> {
    let mut out = vec![0; bits];
    let mut rest = fraction;
    for bit in out.iter_mut() {
        rest *= 2.0;
        if rest >= 1.0 {
            *bit = 1;
            rest -= 1.0;
        }
    }
    out
}
