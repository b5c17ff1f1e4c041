//! Core value types shared by records, the decoder and the encoder

pub mod color;
pub mod handle;
pub mod line_weight;
pub mod vector;
pub mod version;

pub use color::{Color, TrueColor, ACI_PALETTE};
pub use handle::{Handle, HandleSeed};
pub use line_weight::LineWeight;
pub use vector::Vector3;
pub use version::DxfVersion;
