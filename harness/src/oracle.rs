//! Ground truth for every gate over every input pair.

use std::fmt;

/// Result slot of a verification case. Every binary gate has one slot and NOT
/// has one per input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gate {
    And,
    Or,
    Xor,
    Nand,
    NotA,
    NotB,
}

impl Gate {
    /// All slots, in reporting order.
    pub const ALL: [Gate; 6] = [Gate::And, Gate::Or, Gate::Xor, Gate::Nand, Gate::NotA, Gate::NotB];

    pub fn name(&self) -> &'static str {
        match self {
            Gate::And => "AND",
            Gate::Or => "OR",
            Gate::Xor => "XOR",
            Gate::Nand => "NAND",
            Gate::NotA => "NOT_a",
            Gate::NotB => "NOT_b",
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One boolean per [`Gate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GateResults {
    pub and: bool,
    pub or: bool,
    pub xor: bool,
    pub nand: bool,
    pub not_a: bool,
    pub not_b: bool,
}

impl GateResults {
    /// Plaintext evaluation of every gate on `(a, b)`.
    pub const fn truth(a: bool, b: bool) -> Self {
        Self {
            and: a & b,
            or: a | b,
            xor: a ^ b,
            nand: !(a & b),
            not_a: !a,
            not_b: !b,
        }
    }

    pub fn get(&self, gate: Gate) -> bool {
        match gate {
            Gate::And => self.and,
            Gate::Or => self.or,
            Gate::Xor => self.xor,
            Gate::Nand => self.nand,
            Gate::NotA => self.not_a,
            Gate::NotB => self.not_b,
        }
    }

    pub fn set(&mut self, gate: Gate, value: bool) {
        match gate {
            Gate::And => self.and = value,
            Gate::Or => self.or = value,
            Gate::Xor => self.xor = value,
            Gate::Nand => self.nand = value,
            Gate::NotA => self.not_a = value,
            Gate::NotB => self.not_b = value,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Gate, bool)> + '_ {
        Gate::ALL.into_iter().map(|gate| (gate, self.get(gate)))
    }
}

impl fmt::Display for GateResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        self.iter().enumerate().try_for_each(|(i, (gate, value))| {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{gate}: {value}")
        })?;
        f.write_str("}")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestCase {
    pub inputs: (bool, bool),
    pub expected: GateResults,
}

/// The four input pairs, in reporting order.
pub static TEST_CASES: [TestCase; 4] = [
    TestCase {
        inputs: (false, false),
        expected: GateResults {
            and: false,
            or: false,
            xor: false,
            nand: true,
            not_a: true,
            not_b: true,
        },
    },
    TestCase {
        inputs: (false, true),
        expected: GateResults {
            and: false,
            or: true,
            xor: true,
            nand: true,
            not_a: true,
            not_b: false,
        },
    },
    TestCase {
        inputs: (true, false),
        expected: GateResults {
            and: false,
            or: true,
            xor: true,
            nand: true,
            not_a: false,
            not_b: true,
        },
    },
    TestCase {
        inputs: (true, true),
        expected: GateResults {
            and: true,
            or: true,
            xor: false,
            nand: false,
            not_a: false,
            not_b: false,
        },
    },
];
