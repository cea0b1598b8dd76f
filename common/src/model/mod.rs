pub mod calculation;
pub mod metrics;
pub mod product;
pub mod template;
