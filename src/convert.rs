//! Conversions between the RGB, HSL and HSV models.
//!
//! Every conversion goes through RGB. Converting out of RGB yields a
//! [`Converted`] since hue and saturation are undefined for some colors.
//!
//! ```rust
//! use swatch::{Hsl, Srgb};
//! let converted = Srgb::new(1.0, 0.5, 0.0).to_hsl();
//! let hsl = Hsl::from(converted.components);
//! let back = hsl.to_srgb();
//! assert!((back.green - 0.5).abs() < 1e-9);
//! ```

use crate::{
    color::{Components, Converted},
    Hsl, Hsv, Srgb,
};

impl Srgb {
    /// Convert a color specified in the sRGB color space to the HSL notation.
    pub fn to_hsl(&self) -> Converted {
        util::rgb_to_hsl(&self.to_components())
    }

    /// Convert a color specified in the sRGB color space to the HSV notation.
    pub fn to_hsv(&self) -> Converted {
        util::rgb_to_hsv(&self.to_components())
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to the sRGB color space.
    pub fn to_srgb(&self) -> Srgb {
        util::hsl_to_rgb(&self.to_components()).into()
    }
}

impl Hsv {
    /// Convert this color from the HSV notation to the sRGB color space.
    pub fn to_srgb(&self) -> Srgb {
        util::hsv_to_rgb(&self.to_components()).into()
    }
}

mod util {
    use crate::{
        color::{Component, Components, Converted},
        math::{wrap_unit, ACHROMATIC_DELTA},
    };

    const ONE_SIXTH: Component = 1.0 / 6.0;
    const ONE_THIRD: Component = 1.0 / 3.0;
    const TWO_THIRDS: Component = 2.0 / 3.0;

    /// Calculate the hue from RGB components and return it along with the min
    /// and max RGB values. The hue is `None` for achromatic colors.
    ///
    /// When two components share the maximum, red wins over green and green
    /// wins over blue.
    fn rgb_to_hue_with_min_max(from: &Components) -> (Option<Component>, Component, Component) {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        let hue = if delta < ACHROMATIC_DELTA {
            None
        } else if max == red {
            Some((green - blue) / (6.0 * delta) + 1.0)
        } else if max == green {
            Some((blue - red) / (6.0 * delta) + ONE_THIRD)
        } else {
            Some((red - green) / (6.0 * delta) + TWO_THIRDS)
        };

        (hue.map(wrap_unit), min, max)
    }

    /// Convert from RGB notation to HSL notation.
    pub fn rgb_to_hsl(from: &Components) -> Converted {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let lightness = (min + max) / 2.0;
        let delta = max - min;

        let saturation = if delta < ACHROMATIC_DELTA {
            None
        } else if lightness <= 0.5 {
            Some(delta / (max + min))
        } else {
            Some(delta / (2.0 - (max + min)))
        };

        Converted::new(hue, saturation, Some(lightness))
    }

    /// Convert from HSL notation to RGB notation.
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, lightness) = *from;

        let q = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let p = 2.0 * lightness - q;

        let channel = |t: Component| {
            let t = wrap_unit(t);
            if t < ONE_SIXTH {
                p + (q - p) * 6.0 * t
            } else if t < 0.5 {
                q
            } else if t < TWO_THIRDS {
                p + (q - p) * 6.0 * (TWO_THIRDS - t)
            } else {
                p
            }
        };

        Components(
            channel(hue + ONE_THIRD),
            channel(hue),
            channel(hue + TWO_THIRDS),
        )
    }

    /// Convert from RGB notation to HSV notation.
    pub fn rgb_to_hsv(from: &Components) -> Converted {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let saturation = if max == 0.0 { None } else { Some(1.0 - min / max) };

        Converted::new(hue, saturation, Some(max))
    }

    /// Convert from HSV notation to RGB notation.
    pub fn hsv_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, value) = *from;

        let scaled = hue * 6.0;
        let sector = scaled.floor();
        let f = scaled - sector;

        let p = value * (1.0 - saturation);
        let q = value * (1.0 - f * saturation);
        let u = value * (1.0 - (1.0 - f) * saturation);

        match (sector as i64).rem_euclid(6) {
            0 => Components(value, u, p),
            1 => Components(q, value, p),
            2 => Components(p, value, u),
            3 => Components(p, q, value),
            4 => Components(u, p, value),
            _ => Components(value, p, q),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;
    use crate::assert_component_eq;
    use crate::color::Component;

    fn assert_components_near(actual: Components, expected: Components, epsilon: Component) {
        approx::assert_abs_diff_eq!(actual.0, expected.0, epsilon = epsilon);
        approx::assert_abs_diff_eq!(actual.1, expected.1, epsilon = epsilon);
        approx::assert_abs_diff_eq!(actual.2, expected.2, epsilon = epsilon);
    }

    /// Random RGB colors with no two components closer than 1e-3.
    fn chromatic_samples() -> Vec<Components> {
        let mut rng = StdRng::seed_from_u64(7);
        let mut samples = vec![];
        while samples.len() < 500 {
            let c = Components(rng.gen(), rng.gen(), rng.gen());
            if (c.0 - c.1).abs() > 1e-3 && (c.1 - c.2).abs() > 1e-3 && (c.0 - c.2).abs() > 1e-3 {
                samples.push(c);
            }
        }
        samples
    }

    #[test]
    fn hsl_round_trip() {
        for rgb in chromatic_samples() {
            let converted = Srgb::from(rgb).to_hsl();
            assert!(converted.is_complete());
            let back = Hsl::from(converted.components).to_srgb();
            assert_components_near(back.to_components(), rgb, 1e-4);
        }
    }

    #[test]
    fn hsv_round_trip() {
        for rgb in chromatic_samples() {
            let converted = Srgb::from(rgb).to_hsv();
            assert!(converted.is_complete());
            let back = Hsv::from(converted.components).to_srgb();
            assert_components_near(back.to_components(), rgb, 1e-4);
        }
    }

    #[test]
    fn hsv_sectors() {
        #[rustfmt::skip]
        const TESTS: &[(Component, Component, Component, Component)] = &[
            // hue,       red, green, blue
            (0.0,         1.0, 0.0,   0.0),
            (1.0 / 6.0,   1.0, 1.0,   0.0),
            (1.0 / 3.0,   0.0, 1.0,   0.0),
            (0.5,         0.0, 1.0,   1.0),
            (2.0 / 3.0,   0.0, 0.0,   1.0),
            (5.0 / 6.0,   1.0, 0.0,   1.0),
            (1.0,         1.0, 0.0,   0.0),
        ];

        for &(hue, red, green, blue) in TESTS {
            let rgb = Hsv::new(hue, 1.0, 1.0).to_srgb();
            assert_components_near(rgb.to_components(), Components(red, green, blue), 1e-9);
        }
    }

    #[test]
    fn hsv_sector_interiors() {
        // Half way through every sector, one component is at 0.5.
        #[rustfmt::skip]
        const TESTS: &[(Component, Component, Component, Component)] = &[
            (1.0 / 12.0,  1.0, 0.5, 0.0),
            (3.0 / 12.0,  0.5, 1.0, 0.0),
            (5.0 / 12.0,  0.0, 1.0, 0.5),
            (7.0 / 12.0,  0.0, 0.5, 1.0),
            (9.0 / 12.0,  0.5, 0.0, 1.0),
            (11.0 / 12.0, 1.0, 0.0, 0.5),
        ];

        for &(hue, red, green, blue) in TESTS {
            let rgb = Hsv::new(hue, 1.0, 1.0).to_srgb();
            assert_components_near(rgb.to_components(), Components(red, green, blue), 1e-9);
        }
    }

    #[test]
    fn hsl_primaries() {
        #[rustfmt::skip]
        const TESTS: &[(Component, Component, Component, Component)] = &[
            (0.0,         1.0, 0.0,   0.0),
            (1.0 / 6.0,   1.0, 1.0,   0.0),
            (1.0 / 3.0,   0.0, 1.0,   0.0),
            (0.5,         0.0, 1.0,   1.0),
            (2.0 / 3.0,   0.0, 0.0,   1.0),
            (5.0 / 6.0,   1.0, 0.0,   1.0),
        ];

        for &(hue, red, green, blue) in TESTS {
            let rgb = Hsl::new(hue, 1.0, 0.5).to_srgb();
            assert_components_near(rgb.to_components(), Components(red, green, blue), 1e-9);
        }
    }

    #[test]
    fn rgb_to_hsl() {
        // rgb(210, 105, 30)
        let hsl = Srgb::new(0.823529, 0.411765, 0.117647).to_hsl();
        assert_component_eq!(hsl.components.0, 25.0 / 360.0);
        assert_component_eq!(hsl.components.1, 0.75);
        assert_component_eq!(hsl.components.2, 0.470588);

        let hsl = Srgb::new(0.46, 0.52, 0.28).to_hsl();
        assert_component_eq!(hsl.components.0, 75.0 / 360.0);
        assert_component_eq!(hsl.components.1, 0.3);
        assert_component_eq!(hsl.components.2, 0.4);
    }

    #[test]
    fn hsl_saturation_above_half_lightness() {
        // rgb(1.0, 0.8, 0.6): l = 0.8, s = 0.4 / (2 - 1.6)
        let hsl = Srgb::new(1.0, 0.8, 0.6).to_hsl();
        assert_component_eq!(hsl.components.1, 1.0);
        assert_component_eq!(hsl.components.2, 0.8);
    }

    #[test]
    fn hue_is_undefined_if_there_is_no_chroma() {
        for gray in [0.0, 0.5, 1.0] {
            let hsl = Srgb::new(gray, gray, gray).to_hsl();
            assert_eq!(hsl.get(0), None);
            assert_eq!(hsl.get(1), None);
            assert_eq!(hsl.get(2), Some(gray));
        }

        let hsl = Srgb::new(0.5, 0.5, 0.5 + 1e-7).to_hsl();
        assert_eq!(hsl.get(0), None);
    }

    #[test]
    fn hsv_saturation_is_undefined_only_for_black() {
        let black = Srgb::new(0.0, 0.0, 0.0).to_hsv();
        assert_eq!(black.get(0), None);
        assert_eq!(black.get(1), None);
        assert_eq!(black.get(2), Some(0.0));

        let gray = Srgb::new(0.5, 0.5, 0.5).to_hsv();
        assert_eq!(gray.get(0), None);
        assert_eq!(gray.get(1), Some(0.0));
        assert_eq!(gray.get(2), Some(0.5));
    }

    #[test]
    fn ties_on_max_prefer_red_then_green() {
        // Yellow: red and green tie, red branch gives (1 - 0) / 6 + 1 = 7/6.
        let hsv = Srgb::new(1.0, 1.0, 0.0).to_hsv();
        assert_component_eq!(hsv.components.0, 1.0 / 6.0);

        // Cyan: green and blue tie, green branch gives (1 - 0) / 6 + 1/3.
        let hsv = Srgb::new(0.0, 1.0, 1.0).to_hsv();
        assert_component_eq!(hsv.components.0, 0.5);

        // Magenta: red and blue tie, red branch gives (0 - 1) / 6 + 1.
        let hsv = Srgb::new(1.0, 0.0, 1.0).to_hsv();
        assert_component_eq!(hsv.components.0, 5.0 / 6.0);
    }

    #[test]
    fn hue_is_always_below_one() {
        let hsl = Srgb::new(1.0, 0.0, 0.0).to_hsl();
        assert_eq!(hsl.get(0), Some(0.0));

        let hsl = Srgb::new(1.0, 0.0, 1e-3).to_hsl();
        let hue = hsl.get(0).unwrap_or(Component::NAN);
        assert!((0.0..1.0).contains(&hue), "{}", hue);
    }
}
