//! A [`Color`] holds a single color in every supported color space at once
//! and keeps them consistent when any channel changes.

use bitflags::bitflags;
use rand::Rng;
use tracing::trace;

use crate::{Channel, Space};

/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }

    /// The components as an array, in order.
    pub fn to_array(self) -> [Component; 3] {
        [self.0, self.1, self.2]
    }
}

impl From<[Component; 3]> for Components {
    fn from([c0, c1, c2]: [Component; 3]) -> Self {
        Self(c0, c1, c2)
    }
}

bitflags! {
    /// Flags to mark components of a conversion result that are undefined.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct Flags : u8 {
        /// Set when the first component is undefined.
        const C0_IS_NONE = 1 << 0;
        /// Set when the second component is undefined.
        const C1_IS_NONE = 1 << 1;
        /// Set when the third component is undefined.
        const C2_IS_NONE = 1 << 2;
    }
}

impl Flags {
    /// The flag for the component at `index`.
    fn none_at(index: usize) -> Self {
        match index {
            0 => Flags::C0_IS_NONE,
            1 => Flags::C1_IS_NONE,
            2 => Flags::C2_IS_NONE,
            _ => Flags::empty(),
        }
    }
}

/// The result of converting RGB into another space.
///
/// Hue and saturation have no meaning for some colors (grays, black). Those
/// positions are flagged and a [`Color`] keeps whatever it had stored for
/// them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Converted {
    /// The converted components. Undefined positions hold 0.0.
    pub components: Components,
    /// Marks the undefined positions.
    pub flags: Flags,
}

impl Converted {
    /// Create a result from optional components.
    pub fn new(
        c0: Option<Component>,
        c1: Option<Component>,
        c2: Option<Component>,
    ) -> Self {
        let mut flags = Flags::empty();
        let mut value = |index: usize, c: Option<Component>| {
            c.unwrap_or_else(|| {
                flags |= Flags::none_at(index);
                0.0
            })
        };

        let components = Components(value(0, c0), value(1, c1), value(2, c2));

        Self { components, flags }
    }

    /// The component at `index`, or `None` if it is undefined.
    pub fn get(&self, index: usize) -> Option<Component> {
        if index > 2 || self.flags.contains(Flags::none_at(index)) {
            None
        } else {
            Some(self.components.to_array()[index])
        }
    }

    /// Returns true if every component is defined.
    pub fn is_complete(&self) -> bool {
        self.flags.is_empty()
    }
}

impl From<Components> for Converted {
    fn from(components: Components) -> Self {
        Self {
            components,
            flags: Flags::empty(),
        }
    }
}

/// A color tracked in RGB, HSL and HSV at the same time.
///
/// RGB is authoritative. The HSL and HSV channels are derived from it after
/// every change, except that hue and saturation keep their previous value
/// when the new color leaves them undefined. That way dragging a color to
/// gray and back does not lose its hue.
///
/// Values are normalized to `[0, 1]` but never clamped; out of range input
/// produces a well defined, if meaningless, color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    values: [Component; Channel::COUNT],
}

impl Default for Color {
    fn default() -> Self {
        Self::new()
    }
}

impl Color {
    /// Create a new black color.
    pub fn new() -> Self {
        let mut color = Self {
            values: [0.0; Channel::COUNT],
        };
        color.from_space(Space::Rgb, Components(0.0, 0.0, 0.0));
        color
    }

    /// Create a color from RGB components.
    pub fn from_rgb(red: Component, green: Component, blue: Component) -> Self {
        let mut color = Self::new();
        color.from_space(Space::Rgb, Components(red, green, blue));
        color
    }

    /// The current value of `channel`.
    pub fn get(&self, channel: Channel) -> Component {
        self.values[channel.index()]
    }

    /// The stored components of `space`.
    pub fn components(&self, space: Space) -> Components {
        let [c0, c1, c2] = space.channels();
        Components(self.get(c0), self.get(c1), self.get(c2))
    }

    /// The red, green and blue components.
    pub fn rgb(&self) -> Components {
        self.components(Space::Rgb)
    }

    /// Change a single channel.
    ///
    /// The other two channels of the space that owns `channel` keep their
    /// stored values, they are not derived from RGB again. Changing the
    /// lightness of a gray therefore keeps the hue it had before.
    pub fn set(&mut self, channel: Channel, value: Component) {
        debug_assert!(value.is_finite(), "channel values must be finite");

        let space = Space::containing(channel);
        let components = space
            .channels()
            .map(|c| if c == channel { value } else { self.get(c) });

        self.from_space(space, components.into());
    }

    /// Set every channel of `space` at once and recalculate the others.
    #[allow(clippy::wrong_self_convention)]
    pub fn from_space(&mut self, space: Space, components: Components) {
        self.store(space, components);

        let rgb = space.to_rgb(components);
        self.store(Space::Rgb, rgb);

        for other in Space::ALL {
            if other == Space::Rgb || other == space {
                continue;
            }

            let converted = other.from_rgb(rgb);
            for (index, channel) in other.channels().into_iter().enumerate() {
                if let Some(value) = converted.get(index) {
                    self.values[channel.index()] = value;
                }
            }
        }

        trace!(%space, ?components, ?rgb, "color changed");
    }

    fn store(&mut self, space: Space, components: Components) {
        for (channel, value) in space.channels().into_iter().zip(components.to_array()) {
            self.values[channel.index()] = value;
        }
    }

    /// Format the color as a lower case `#rrggbb` string.
    pub fn to_hex(&self) -> String {
        let Components(red, green, blue) = self.rgb();
        format!(
            "#{:02x}{:02x}{:02x}",
            to_byte(red),
            to_byte(green),
            to_byte(blue)
        )
    }

    /// Set the color to a random color.
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::thread_rng());
    }

    /// Set the color to a random color drawn from `rng`.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let rgb = Components(rng.gen(), rng.gen(), rng.gen());
        self.from_space(Space::Rgb, rgb);
    }

    /// Invert the color.
    pub fn invert(&mut self) {
        let rgb = self.rgb().map(|c| 1.0 - c);
        self.from_space(Space::Rgb, rgb);
    }

    /// Rotate every RGB component half way around, i.e. `(c + 0.5) mod 1`.
    pub fn complement(&mut self) {
        let rgb = self.rgb().map(|c| (c + 0.5).rem_euclid(1.0));
        self.from_space(Space::Rgb, rgb);
    }

    /// Return a copy of this color with the given channels changed.
    ///
    /// The overrides are applied with [`Color::set`] in iteration order. All
    /// of them must belong to the same space, mixing spaces has no defined
    /// result.
    pub fn assume(&self, overrides: impl IntoIterator<Item = (Channel, Component)>) -> Color {
        let mut other = *self;
        for (channel, value) in overrides {
            other.set(channel, value);
        }
        other
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.to_hex())
    }
}

fn to_byte(value: Component) -> u8 {
    if value.is_nan() {
        return 0;
    }
    (value * 255.0 + 0.5).floor().clamp(0.0, 255.0) as u8
}
