use boolgate_backend::Degree;
use boolgate_sampling::{Source, fill_binary};

use crate::layouts::LWEInfos;

/// Binary LWE secret key.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LWESecret {
    pub(crate) data: Vec<i32>,
}

impl LWEInfos for LWESecret {
    fn n(&self) -> Degree {
        Degree(self.data.len() as u32)
    }
}

impl LWESecret {
    pub fn alloc(n: Degree) -> Self {
        Self {
            data: vec![0; n.as_usize()],
        }
    }

    pub fn raw(&self) -> &[i32] {
        &self.data
    }

    pub fn fill_binary(&mut self, source: &mut Source) {
        fill_binary(&mut self.data, source);
    }
}
