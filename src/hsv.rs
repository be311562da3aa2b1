//! Model a color with the HSV notation in the sRGB color space.

swatch_macros::gen_model! {
    /// A color specified with the HSV notation in the sRGB color space.
    pub struct Hsv {
        /// The hue component of the color, as a fraction of a turn.
        hue: crate::color::Component,
        /// The saturation component of the color.
        saturation: crate::color::Component,
        /// The value component of the color.
        value: crate::color::Component,
    }
}
