//! The channels a [`Color`](crate::Color) tracks, one per component of the
//! supported color spaces.

/// A single scalar component of a color space.
///
/// Hue is shared by [`Space::Hsl`](crate::Space::Hsl) and
/// [`Space::Hsv`](crate::Space::Hsv). Each notation has its own saturation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Channel {
    /// Red component of RGB.
    Red = 0,
    /// Green component of RGB.
    Green = 1,
    /// Blue component of RGB.
    Blue = 2,
    /// Hue, as a fraction of a full turn.
    Hue = 3,
    /// Saturation in the HSL notation.
    HslSaturation = 4,
    /// Saturation in the HSV notation.
    HsvSaturation = 5,
    /// Lightness in the HSL notation.
    Lightness = 6,
    /// Value in the HSV notation.
    Value = 7,
}

impl Channel {
    /// Number of channels.
    pub const COUNT: usize = 8;

    /// Every channel, in declaration order.
    pub const ALL: [Channel; Self::COUNT] = [
        Channel::Red,
        Channel::Green,
        Channel::Blue,
        Channel::Hue,
        Channel::HslSaturation,
        Channel::HsvSaturation,
        Channel::Lightness,
        Channel::Value,
    ];

    /// The name shown next to a slider for this channel.
    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
            Channel::Hue => "hue",
            Channel::HslSaturation | Channel::HsvSaturation => "saturation",
            Channel::Lightness => "lightness",
            Channel::Value => "value",
        }
    }

    /// How many gradient stops a slider for this channel needs.
    ///
    /// Hue runs through the whole rainbow and lightness goes from black to a
    /// full color to white, everything else is linear enough for two.
    pub fn stops(self) -> usize {
        match self {
            Channel::Hue => 7,
            Channel::Lightness => 3,
            _ => 2,
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}
