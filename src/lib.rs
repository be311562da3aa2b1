//! swatch models the color of a color picker: one color held in RGB, HSL and
//! HSV at the same time, kept consistent whichever channel is changed, plus
//! the gradients a picker paints behind its sliders.
//!
//! ```rust
//! use swatch::{Channel, Color};
//!
//! let mut color = Color::new();
//! color.set(Channel::Red, 1.0);
//! assert_eq!(color.to_hex(), "#ff0000");
//!
//! // What would the color look like at full lightness?
//! let white = color.assume([(Channel::Lightness, 1.0)]);
//! assert_eq!(white.to_hex(), "#ffffff");
//! assert_eq!(color.to_hex(), "#ff0000");
//! ```

#![deny(missing_docs)]

mod channel;
mod color;
mod convert;
mod gradient;
mod hsl;
mod hsv;
mod math;
mod parse;
mod picker;
mod rgb;
mod space;


pub use channel::Channel;
pub use color::{Color, Component, Components, Converted, Flags};
pub use gradient::{Gradient, Stop};
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use parse::{parse, ColorParseError};
pub use picker::{Action, Picker, Row};
pub use rgb::Srgb;
pub use space::Space;
