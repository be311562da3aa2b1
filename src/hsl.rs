//! Model a color with the HSL notation in the sRGB color space.

swatch_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space.
    pub struct Hsl {
        /// The hue component of the color, as a fraction of a turn.
        hue: crate::color::Component,
        /// The saturation component of the color.
        saturation: crate::color::Component,
        /// The lightness component of the color.
        lightness: crate::color::Component,
    }
}
