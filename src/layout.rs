//! Page layout calculations

/// Simple length type in millimeters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length(pub f64);

impl Length {
    /// Create a length from millimeters
    pub fn from_mm(mm: f64) -> Self {
        Length(mm)
    }

    /// Create a length from points (1/72 inch)
    pub fn from_pt(pt: f64) -> Self {
        Length(pt * 25.4 / 72.0)
    }

    /// Get the value in millimeters
    pub fn mm(&self) -> f64 {
        self.0
    }

    /// Get the value in points (1/72 inch)
    pub fn pt(&self) -> f64 {
        self.0 * 72.0 / 25.4
    }
}

/// Page dimensions
#[derive(Debug, Clone, Copy)]
pub struct PageDimensions {
    pub width: Length,
    pub height: Length,
}

impl PageDimensions {
    /// A4 size (210mm × 297mm)
    pub fn a4() -> Self {
        Self {
            width: Length::from_mm(210.0),
            height: Length::from_mm(297.0),
        }
    }

    /// US Letter size (8.5" × 11")
    pub fn letter() -> Self {
        Self {
            width: Length::from_mm(215.9),
            height: Length::from_mm(279.4),
        }
    }
}

/// Margins for page content
#[derive(Debug, Clone, Copy)]
pub struct Margins {
    pub top: Length,
    pub bottom: Length,
    pub left: Length,
    pub right: Length,
}

impl Margins {
    /// Create margins with same value on all sides
    pub fn uniform(margin: Length) -> Self {
        Self {
            top: margin,
            bottom: margin,
            left: margin,
            right: margin,
        }
    }
}

impl Default for Margins {
    /// 10mm on every side
    fn default() -> Self {
        Self::uniform(Length::from_mm(10.0))
    }
}

/// Width available between the left and right margins
pub fn content_width(page: &PageDimensions, margins: &Margins) -> Length {
    Length::from_mm(page.width.mm() - margins.left.mm() - margins.right.mm())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_conversions() {
        let len = Length::from_mm(25.4);
        assert!((len.pt() - 72.0).abs() < 0.01);

        let back = Length::from_pt(72.0);
        assert!((back.mm() - 25.4).abs() < 0.01);
    }

    #[test]
    fn test_a4_size() {
        let a4 = PageDimensions::a4();
        // 210mm ≈ 595.28pt, 297mm ≈ 841.89pt
        assert!((a4.width.pt() - 595.28).abs() < 0.01);
        assert!((a4.height.pt() - 841.89).abs() < 0.01);
    }

    #[test]
    fn test_letter_size() {
        let letter = PageDimensions::letter();
        assert!((letter.width.pt() - 612.0).abs() < 0.1);
        assert!((letter.height.pt() - 792.0).abs() < 0.1);
    }

    #[test]
    fn test_content_width() {
        let width = content_width(&PageDimensions::a4(), &Margins::default());
        assert_eq!(width.mm(), 190.0);
    }
}
