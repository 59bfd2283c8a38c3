//! Entity color, carried through reprojection untouched

/// Color of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Inherit from the layer
    #[default]
    ByLayer,
    /// Inherit from the enclosing block
    ByBlock,
    /// AutoCAD Color Index (1-255)
    Index(u8),
    /// True color
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    pub const RED: Color = Color::Index(1);
    pub const YELLOW: Color = Color::Index(2);
    pub const GREEN: Color = Color::Index(3);
    pub const CYAN: Color = Color::Index(4);
    pub const BLUE: Color = Color::Index(5);

    /// Create a color from an AutoCAD Color Index value
    pub fn from_index(index: i16) -> Self {
        match index {
            0 => Color::ByBlock,
            1..=255 => Color::Index(index as u8),
            _ => Color::ByLayer,
        }
    }
}
