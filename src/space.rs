//! The color spaces a [`Color`](crate::Color) is kept in.

use crate::{
    color::{Components, Converted},
    Channel, Hsl, Hsv, Srgb,
};

/// Color spaces supported by the picker. Every one of them is a notation of
/// sRGB, so converting through RGB is lossless up to rounding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Space {
    /// Red, green and blue.
    Rgb = 0,
    /// Hue, saturation and lightness.
    Hsl = 1,
    /// Hue, saturation and value.
    Hsv = 2,
}

impl Space {
    /// Every space, in lookup order.
    pub const ALL: [Space; 3] = [Space::Rgb, Space::Hsl, Space::Hsv];

    /// Display name of the space.
    pub fn name(self) -> &'static str {
        match self {
            Space::Rgb => "RGB",
            Space::Hsl => "HSL",
            Space::Hsv => "HSV",
        }
    }

    /// The channels of this space, in component order.
    pub fn channels(self) -> [Channel; 3] {
        match self {
            Space::Rgb => [Channel::Red, Channel::Green, Channel::Blue],
            Space::Hsl => [Channel::Hue, Channel::HslSaturation, Channel::Lightness],
            Space::Hsv => [Channel::Hue, Channel::HsvSaturation, Channel::Value],
        }
    }

    /// Position of `channel` within this space's components.
    pub fn position(self, channel: Channel) -> Option<usize> {
        self.channels().iter().position(|&c| c == channel)
    }

    /// The first space in [`Space::ALL`] that contains `channel`.
    ///
    /// Hue lives in both HSL and HSV and resolves to HSL.
    pub fn containing(channel: Channel) -> Space {
        Self::ALL
            .into_iter()
            .find(|space| space.position(channel).is_some())
            // Every channel is listed by at least one space.
            .unwrap_or(Space::Rgb)
    }

    /// Convert components in this space to RGB.
    pub fn to_rgb(self, components: Components) -> Components {
        match self {
            Space::Rgb => components,
            Space::Hsl => Hsl::from(components).to_srgb().to_components(),
            Space::Hsv => Hsv::from(components).to_srgb().to_components(),
        }
    }

    /// Convert RGB components into this space. Positions that are undefined
    /// for the given color are flagged on the result.
    pub fn from_rgb(self, rgb: Components) -> Converted {
        match self {
            Space::Rgb => Converted::from(rgb),
            Space::Hsl => Srgb::from(rgb).to_hsl(),
            Space::Hsv => Srgb::from(rgb).to_hsv(),
        }
    }
}

impl std::fmt::Display for Space {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}
