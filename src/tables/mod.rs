//! Table records: layers, line types and text styles

pub mod layer;
pub mod linetype;
pub mod textstyle;

pub use layer::{Layer, LayerFlags};
pub use linetype::LineType;
pub use textstyle::TextStyle;
