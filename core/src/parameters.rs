//! Parameter sets of the gate library.
//!
//! The only shipped set, [`TOY_PARAMETERS`], is sized so that the whole
//! verification run completes in seconds. It offers **no security** and
//! exists to exercise the evaluation pipeline.

use boolgate_backend::{Base2K, Degree, Dnum, Rank, Torus};

use crate::{
    error::GateError,
    blind_rotation::BlindRotationKeyLayout,
    layouts::{LWELayout, LWESwitchingKeyLayout},
};

/// Bound, in standard deviations, of the rejection-sampled Gaussian error.
pub const SIGMA_BOUND: f64 = 6.0;

/// Largest GLWE degree whose `2N` still fits a torus mod switch.
pub const MAX_GLWE_DEGREE: Degree = Degree(1 << (Torus::BITS - 2));

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GateParameters {
    pub layout_brk: BlindRotationKeyLayout,
    pub layout_ksk: LWESwitchingKeyLayout,
    /// Standard deviation of LWE and key-switching key errors, as a torus fraction.
    pub sigma_lwe: f64,
    /// Standard deviation of GLWE/GGSW errors, as a torus fraction.
    pub sigma_glwe: f64,
}

pub static TOY_PARAMETERS: GateParameters = GateParameters {
    layout_brk: BlindRotationKeyLayout {
        n_glwe: Degree(128),
        n_lwe: Degree(32),
        base2k: Base2K(6),
        dnum: Dnum(3),
        rank: Rank(1),
    },
    layout_ksk: LWESwitchingKeyLayout {
        n_in: Degree(128),
        n_out: Degree(32),
        base2k: Base2K(4),
        dnum: Dnum(4),
    },
    sigma_lwe: 9.5367431640625e-7,     // 2^-20
    sigma_glwe: 2.9802322387695312e-8, // 2^-25
};

impl Default for GateParameters {
    fn default() -> Self {
        TOY_PARAMETERS
    }
}

impl GateParameters {
    /// Layout of the ciphertexts consumed and produced by gates.
    pub fn lwe_layout(&self) -> LWELayout {
        LWELayout {
            n: self.layout_brk.n_lwe,
        }
    }

    /// Dimension of the LWE samples extracted after blind rotation.
    pub fn n_extracted(&self) -> Degree {
        self.layout_brk.n_glwe * Degree(self.layout_brk.rank.0)
    }

    pub fn validate(&self) -> Result<(), GateError> {
        let brk: &BlindRotationKeyLayout = &self.layout_brk;
        let ksk: &LWESwitchingKeyLayout = &self.layout_ksk;

        if brk.n_glwe.0 == 0 || !brk.n_glwe.is_power_of_two() || brk.n_glwe > MAX_GLWE_DEGREE {
            return Err(GateError::InvalidParameters(format!(
                "GLWE degree must be a non-zero power of two at most {MAX_GLWE_DEGREE} but is {}",
                brk.n_glwe
            )));
        }
        if brk.n_lwe.0 == 0 {
            return Err(GateError::InvalidParameters("LWE dimension must be non-zero".into()));
        }
        if brk.rank.0 == 0 {
            return Err(GateError::InvalidParameters("GLWE rank must be non-zero".into()));
        }
        for (name, base2k, dnum) in [("blind rotation", brk.base2k, brk.dnum), ("key switching", ksk.base2k, ksk.dnum)] {
            if base2k.0 == 0 || dnum.0 == 0 || base2k.0.saturating_mul(dnum.0) >= Torus::BITS {
                return Err(GateError::InvalidParameters(format!(
                    "{name} decomposition base2k={base2k} dnum={dnum} must be non-empty and narrower than the torus"
                )));
            }
        }
        if ksk.n_in != self.n_extracted() || ksk.n_out != brk.n_lwe {
            return Err(GateError::InvalidParameters(format!(
                "key-switching key maps {} -> {} but blind rotation needs {} -> {}",
                ksk.n_in,
                ksk.n_out,
                self.n_extracted(),
                brk.n_lwe
            )));
        }
        for sigma in [self.sigma_lwe, self.sigma_glwe] {
            if !sigma.is_finite() || sigma < 0.0 {
                return Err(GateError::InvalidParameters(format!("invalid noise standard deviation {sigma}")));
            }
        }
        Ok(())
    }
}
