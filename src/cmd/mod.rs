pub mod decode;
pub mod score;
