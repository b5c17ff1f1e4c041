//! Per-entity presentation state
//!
//! Every entity shares one small sub-grammar for presentation: layer (8),
//! color (62), 24-bit color (420), line weight (370), line type (6),
//! line-type scale (48), handle (5) and paper-space flag (67). The decoder
//! keeps one live [`Attributes`] value per session, updates it as those
//! codes arrive and attaches a snapshot to every completed record.

use crate::types::{Color, Handle, LineWeight, TrueColor, Vector3};

/// Line type name meaning "use the layer's line type"
pub const BYLAYER: &str = "BYLAYER";

/// Line type name meaning "use the block's line type"
pub const BYBLOCK: &str = "BYBLOCK";

/// Presentation attributes of a record
#[derive(Debug, Clone, PartialEq)]
pub struct Attributes {
    /// Layer name; `None` inherits (written as layer "0")
    pub layer: Option<String>,
    /// Indexed color or inheritance sentinel
    pub color: Color,
    /// Optional 24-bit override of `color`
    pub true_color: Option<TrueColor>,
    /// Line weight or inheritance sentinel
    pub line_weight: LineWeight,
    /// Raw line type name; see [`Attributes::line_type`]
    pub line_type_name: String,
    /// Line-type scale
    pub line_type_scale: f64,
    /// Handle read from the stream; the encoder assigns its own
    pub handle: Option<Handle>,
    /// Entity lives in paper space
    pub paper_space: bool,
}

impl Attributes {
    /// Default attributes on the given layer
    pub fn on_layer(layer: impl Into<String>) -> Self {
        Attributes {
            layer: Some(layer.into()),
            ..Default::default()
        }
    }

    /// Layer name as written on the wire
    pub fn layer_name(&self) -> &str {
        self.layer.as_deref().unwrap_or("0")
    }

    /// Effective line type name; an empty name reads as `BYLAYER`
    pub fn line_type(&self) -> &str {
        if self.line_type_name.is_empty() {
            BYLAYER
        } else {
            &self.line_type_name
        }
    }

    /// Whether the line type inherits from the layer
    pub fn line_type_is_bylayer(&self) -> bool {
        self.line_type().eq_ignore_ascii_case(BYLAYER)
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_true_color(mut self, true_color: TrueColor) -> Self {
        self.true_color = Some(true_color);
        self
    }

    pub fn with_line_weight(mut self, line_weight: LineWeight) -> Self {
        self.line_weight = line_weight;
        self
    }

    pub fn with_line_type(mut self, name: impl Into<String>) -> Self {
        self.line_type_name = name.into();
        self
    }

    pub fn with_line_type_scale(mut self, scale: f64) -> Self {
        self.line_type_scale = scale;
        self
    }

    pub fn in_paper_space(mut self, paper_space: bool) -> Self {
        self.paper_space = paper_space;
        self
    }
}

impl Default for Attributes {
    fn default() -> Self {
        Attributes {
            layer: None,
            color: Color::ByLayer,
            true_color: None,
            line_weight: LineWeight::ByLayer,
            line_type_name: String::new(),
            line_type_scale: 1.0,
            handle: None,
            paper_space: false,
        }
    }
}

/// Extrusion direction (210/220/230) and elevation of the current entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extrusion {
    pub direction: Vector3,
    pub elevation: f64,
}

impl Default for Extrusion {
    fn default() -> Self {
        Extrusion {
            direction: Vector3::UNIT_Z,
            elevation: 0.0,
        }
    }
}
