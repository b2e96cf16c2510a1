pub mod check;
pub mod patterns;
