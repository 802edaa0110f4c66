use std::fmt;

/// RGB color representation.
///
/// Represents a color using red, green, and blue components, each in the range 0-255.
///
/// # Examples
///
/// ```rust
/// use longan::common::RGBColor;
///
/// // Create a red color
/// let red = RGBColor::new(255, 0, 0);
///
/// // Create from hex string
/// let blue = RGBColor::from_hex("0000FF").unwrap();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    /// Create a new RGB color.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use longan::common::RGBColor;
    ///
    /// let color = RGBColor::new(255, 128, 0); // Orange
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB color from a hex string.
    ///
    /// # Arguments
    ///
    /// * `hex` - Hex color string (e.g., "FF0000" or "#FF0000")
    ///
    /// # Examples
    ///
    /// ```rust
    /// use longan::common::RGBColor;
    ///
    /// let red = RGBColor::from_hex("FF0000").unwrap();
    /// let blue = RGBColor::from_hex("#0000FF").unwrap();
    /// ```
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }

        // Checked slicing: a six-byte string need not have char boundaries
        // at the hex digit positions
        let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
        let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
        let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Convert to hex string (without # prefix), as used by `a:srgbClr` values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use longan::common::RGBColor;
    ///
    /// let color = RGBColor::new(1, 212, 147);
    /// assert_eq!(color.to_hex(), "01D493");
    /// ```
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(RGBColor::from_hex("0A1F3B"), Some(RGBColor::new(10, 31, 59)));
        assert_eq!(RGBColor::from_hex("#2563EB"), Some(RGBColor::new(37, 99, 235)));
        assert_eq!(RGBColor::from_hex("XYZ"), None);
        assert_eq!(RGBColor::from_hex("12345"), None);
    }

    #[test]
    fn test_from_hex_non_ascii() {
        // Six bytes long, so the length check passes, but the two-byte
        // slices land inside multibyte characters
        assert_eq!(RGBColor::from_hex("€€"), None);
        assert_eq!(RGBColor::from_hex("ab€c"), None);
    }

    #[test]
    fn test_to_hex_round_trip() {
        let c = RGBColor::new(248, 250, 252);
        assert_eq!(c.to_hex(), "F8FAFC");
        assert_eq!(RGBColor::from_hex(&c.to_hex()), Some(c));
    }

    #[test]
    fn test_display() {
        assert_eq!(RGBColor::new(255, 255, 255).to_string(), "#FFFFFF");
    }
}
