#![forbid(unsafe_code)]

//! Paint settings shared by drawing calls.

use bitflags::bitflags;

use crate::color::Color;

bitflags! {
    /// Whether shapes are filled, outlined, or both.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PaintStyle: u8 {
        const FILL = 0b01;
        const STROKE = 0b10;
        const FILL_AND_STROKE = Self::FILL.bits() | Self::STROKE.bits();
    }
}

/// Line end decoration for strokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrokeCap {
    /// Flat end at the exact endpoint.
    #[default]
    Butt,
    /// Semicircular end.
    Round,
    /// Square end extending past the endpoint.
    Square,
}

/// Color, style and stroke settings for a drawing call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    /// Fill and stroke color.
    pub color: Color,
    /// Stroke width in surface units. Never negative.
    pub stroke_width: f32,
    /// Whether to fill, stroke, or both.
    pub style: PaintStyle,
    /// End shape of stroked open paths.
    pub cap: StrokeCap,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            color: Color::rgb(0, 0, 0),
            stroke_width: 0.0,
            style: PaintStyle::FILL,
            cap: StrokeCap::Butt,
        }
    }
}

impl Paint {
    /// Fill paint in `color`.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    /// Set the color.
    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the stroke width. Negative widths clamp to zero.
    #[must_use]
    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width.max(0.0);
        self
    }

    /// Set the fill/stroke style.
    #[must_use]
    pub fn style(mut self, style: PaintStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the stroke cap.
    #[must_use]
    pub fn cap(mut self, cap: StrokeCap) -> Self {
        self.cap = cap;
        self
    }

    /// Whether shapes drawn with this paint are filled.
    #[inline]
    pub fn fills(&self) -> bool {
        self.style.contains(PaintStyle::FILL)
    }

    /// Whether shapes drawn with this paint are outlined.
    #[inline]
    pub fn strokes(&self) -> bool {
        self.style.contains(PaintStyle::STROKE)
    }
}
