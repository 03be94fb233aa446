//! Linear algebra used by the luma/chroma kernels

pub mod matrix;

pub use matrix::Matrix3x3;
