//! Boolean gates over encrypted bits.
//!
//! Binary gates compute a linear combination of their inputs on the torus and
//! bootstrap it, so their output noise does not depend on the inputs'. NOT is
//! a noiseless negation and needs no key.

use boolgate_backend::{Degree, MU, Torus};
use log::debug;

use crate::{
    ciphertext::Ciphertext,
    error::GateError,
    keys::CloudKey,
    layouts::{LWE, LWEInfos},
};

fn check_shape(expected: &Ciphertext, found: &Ciphertext) -> Result<(), GateError> {
    if expected.shape() != found.shape() {
        return Err(GateError::ShapeMismatch {
            expected: expected.shape().to_vec(),
            found: found.shape().to_vec(),
        });
    }
    Ok(())
}

fn check_dimension(ck: &CloudKey, ct: &Ciphertext) -> Result<(), GateError> {
    let expected: Degree = ck.params.lwe_layout().n;
    match ct.iter().find(|lwe| lwe.n() != expected) {
        Some(lwe) => Err(GateError::DimensionMismatch {
            expected,
            found: lwe.n(),
        }),
        None => Ok(()),
    }
}

/// Evaluates `out[i] = bootstrap(constant + k * (a[i] + b[i]))`.
fn bootstrapped_gate(
    name: &str,
    ck: &CloudKey,
    out: &mut Ciphertext,
    a: &Ciphertext,
    b: &Ciphertext,
    constant: Torus,
    k: i32,
) -> Result<(), GateError> {
    check_shape(a, b)?;
    check_shape(a, out)?;
    check_dimension(ck, a)?;
    check_dimension(ck, b)?;
    check_dimension(ck, out)?;

    debug!("{name}: {} elements", a.len());

    let mut tmp: LWE = LWE::alloc(ck.params.lwe_layout().n);
    out.data
        .iter_mut()
        .zip(a.iter().zip(b.iter()))
        .for_each(|(res, (ai, bi))| {
            tmp.zero();
            tmp.add_constant(constant);
            tmp.add_scaled_inplace(k, ai);
            tmp.add_scaled_inplace(k, bi);
            ck.bootstrap(res, &tmp);
        });

    Ok(())
}

/// `out = a AND b`, computed as `bootstrap(-1/8 + a + b)`.
pub fn and(ck: &CloudKey, out: &mut Ciphertext, a: &Ciphertext, b: &Ciphertext) -> Result<(), GateError> {
    bootstrapped_gate("and", ck, out, a, b, MU.wrapping_neg(), 1)
}

/// `out = a OR b`, computed as `bootstrap(1/8 + a + b)`.
pub fn or(ck: &CloudKey, out: &mut Ciphertext, a: &Ciphertext, b: &Ciphertext) -> Result<(), GateError> {
    bootstrapped_gate("or", ck, out, a, b, MU, 1)
}

/// `out = a XOR b`, computed as `bootstrap(1/4 + 2a + 2b)`.
pub fn xor(ck: &CloudKey, out: &mut Ciphertext, a: &Ciphertext, b: &Ciphertext) -> Result<(), GateError> {
    bootstrapped_gate("xor", ck, out, a, b, MU << 1, 2)
}

/// `out = a NAND b`, computed as `bootstrap(1/8 - a - b)`.
pub fn nand(ck: &CloudKey, out: &mut Ciphertext, a: &Ciphertext, b: &Ciphertext) -> Result<(), GateError> {
    bootstrapped_gate("nand", ck, out, a, b, MU, -1)
}

/// `out = NOT a`. Negates every sample; no key and no bootstrapping.
pub fn not(out: &mut Ciphertext, a: &Ciphertext) -> Result<(), GateError> {
    check_shape(a, out)?;
    if let Some(lwe) = out.iter().find(|lwe| lwe.n() != a.n()) {
        return Err(GateError::DimensionMismatch {
            expected: a.n(),
            found: lwe.n(),
        });
    }

    debug!("not: {} elements", a.len());

    out.data.iter_mut().zip(a.iter()).for_each(|(res, ai)| {
        res.copy_from(ai);
        res.negate_inplace();
    });

    Ok(())
}
