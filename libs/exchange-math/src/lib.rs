#![no_std]

pub mod full_math;
pub mod pricing;
pub mod share_math;

pub use full_math::*;
pub use pricing::*;
pub use share_math::*;
