// src/factor/mod.rs

pub mod factorization;
pub mod result_map;

pub use factorization::Factorization;
pub use result_map::ResultMap;
