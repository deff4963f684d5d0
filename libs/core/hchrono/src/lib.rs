#[cfg(test)]
use rstest_reuse;

pub mod grid;
pub mod timepoint;

pub mod ext {
    pub use chrono;
}
