mod product;

pub use product::{Product, ProductResponse};
