//! Default value functions for serde.

pub fn max_iterations() -> usize {
    10_000
}

pub fn intersection_epsilon() -> f32 {
    1e-6
}
