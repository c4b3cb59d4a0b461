pub mod common;
pub mod department;
pub mod pagination;
pub mod product;

pub use common::*;
pub use department::*;
pub use pagination::*;
pub use product::*;
