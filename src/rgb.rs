//! Model a color in the sRGB color space.

swatch_macros::gen_model! {
    /// A color specified with red, green and blue components.
    pub struct Srgb {
        /// The red component of the color.
        red: crate::color::Component,
        /// The green component of the color.
        green: crate::color::Component,
        /// The blue component of the color.
        blue: crate::color::Component,
    }
}
