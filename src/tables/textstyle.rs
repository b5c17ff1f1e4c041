//! Text style table entry

/// A text style table entry
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Style name
    pub name: String,
    /// Standard flags
    pub flags: i16,
    /// Fixed text height (0 = variable)
    pub fixed_height: f64,
    /// Width factor
    pub width_factor: f64,
    /// Oblique angle in degrees
    pub oblique_angle: f64,
    /// Text generation flags (2 = backward, 4 = upside down)
    pub generation_flags: i16,
    /// Last height used
    pub last_height: f64,
    /// Primary font file name
    pub font_file: String,
    /// Big font file name
    pub big_font_file: String,
    /// Bold, from the ACAD extended data
    pub bold: bool,
    /// Italic, from the ACAD extended data
    pub italic: bool,
}

impl TextStyle {
    /// Extended-data flag bit for bold fonts (ACAD, 1071)
    pub const BOLD_FLAG: i32 = 0x0200_0000;
    /// Extended-data flag bit for italic fonts (ACAD, 1071)
    pub const ITALIC_FLAG: i32 = 0x0100_0000;

    /// Create a style with default metrics
    pub fn new(name: impl Into<String>) -> Self {
        TextStyle {
            name: name.into(),
            flags: 0,
            fixed_height: 0.0,
            width_factor: 1.0,
            oblique_angle: 0.0,
            generation_flags: 0,
            last_height: 2.5,
            font_file: "txt".to_string(),
            big_font_file: String::new(),
            bold: false,
            italic: false,
        }
    }

    /// The 1071 flag word carrying bold and italic
    pub fn font_flags(&self) -> i32 {
        let mut flags = 0;
        if self.bold {
            flags |= Self::BOLD_FLAG;
        }
        if self.italic {
            flags |= Self::ITALIC_FLAG;
        }
        flags
    }
}
