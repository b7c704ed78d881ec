mod common;
mod harvests;
mod pricing;

pub use harvests::*;
pub use pricing::*;
