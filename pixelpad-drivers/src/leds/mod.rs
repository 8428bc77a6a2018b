//! LED matrix support

pub mod matrix;

pub use matrix::{chain_index, encode_frame, to_rgb8, MATRIX_LEN};
