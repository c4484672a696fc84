pub mod binary_search;
pub mod rotated;
