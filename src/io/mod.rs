//! I/O module for reading and writing DXF pair streams

pub mod dxf;

pub use dxf::{DxfReader, DxfWriter};
