//! Gradients showing how a color changes along one channel.

use crate::{
    color::{Component, Components},
    math::lerp,
    Channel, Color,
};

/// A color at a position along a [`Gradient`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stop {
    /// Position of the stop in `[0, 1]`. This is also the channel value the
    /// color was computed with.
    pub offset: Component,
    /// The color at this stop.
    pub color: Color,
}

impl Stop {
    /// The color of the stop as `#rrggbb`.
    pub fn hex(&self) -> String {
        self.color.to_hex()
    }
}

/// Evenly spaced stops for one channel of a color.
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    channel: Channel,
    stops: Vec<Stop>,
}

impl Gradient {
    /// The channel this gradient runs along.
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// The stops, ordered by offset.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Sample the RGB color at `t`, interpolating linearly between the two
    /// neighbouring stops. `t` is clamped to `[0, 1]`.
    pub fn at(&self, t: Component) -> Components {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        let segments = self.stops.len() - 1;
        let scaled = t * segments as Component;
        let index = (scaled.floor() as usize).min(segments - 1);
        let local = scaled - index as Component;

        let left = self.stops[index].color.rgb();
        let right = self.stops[index + 1].color.rgb();

        Components(
            lerp(left.0, right.0, local),
            lerp(left.1, right.1, local),
            lerp(left.2, right.2, local),
        )
    }
}

impl Color {
    /// Build the gradient for `channel`, with every stop computed as this
    /// color would be if the channel were set to the stop's offset.
    pub fn gradient(&self, channel: Channel) -> Gradient {
        let count = channel.stops();
        let stops = (0..count)
            .map(|i| {
                let offset = i as Component / (count - 1) as Component;
                Stop {
                    offset,
                    color: self.assume([(channel, offset)]),
                }
            })
            .collect();

        Gradient { channel, stops }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn stop_counts_and_offsets() {
        let color = Color::from_rgb(0.2, 0.4, 0.6);
        for channel in Channel::ALL {
            let gradient = color.gradient(channel);
            assert_eq!(gradient.channel(), channel);
            assert_eq!(gradient.stops().len(), channel.stops());
            assert_eq!(gradient.stops().first().map(|s| s.offset), Some(0.0));
            assert_eq!(gradient.stops().last().map(|s| s.offset), Some(1.0));
        }
    }

    #[test]
    fn hue_runs_through_the_rainbow() {
        let red = Color::from_rgb(1.0, 0.0, 0.0);
        let hexes = red
            .gradient(Channel::Hue)
            .stops()
            .iter()
            .map(Stop::hex)
            .collect::<Vec<_>>();
        assert_eq!(
            hexes,
            ["#ff0000", "#ffff00", "#00ff00", "#00ffff", "#0000ff", "#ff00ff", "#ff0000"]
        );
    }

    #[test]
    fn lightness_goes_through_the_full_color() {
        let red = Color::from_rgb(1.0, 0.0, 0.0);
        let gradient = red.gradient(Channel::Lightness);
        let hexes = gradient.stops().iter().map(Stop::hex).collect::<Vec<_>>();
        assert_eq!(hexes, ["#000000", "#ff0000", "#ffffff"]);

        let quarter = gradient.at(0.25);
        assert_component_eq!(quarter.0, 0.5);
        assert_component_eq!(quarter.1, 0.0);
        assert_component_eq!(quarter.2, 0.0);
    }

    #[test]
    fn gradient_does_not_change_the_color() {
        let color = Color::from_rgb(0.3, 0.6, 0.9);
        let before = color;
        for channel in Channel::ALL {
            color.gradient(channel);
        }
        assert_eq!(color, before);
    }

    #[test]
    fn sampling_is_clamped() {
        let black = Color::new();
        let gradient = black.gradient(Channel::Red);
        assert_eq!(gradient.at(-1.0), Components(0.0, 0.0, 0.0));
        assert_eq!(gradient.at(2.0), Components(1.0, 0.0, 0.0));
        assert_eq!(gradient.at(Component::NAN), Components(0.0, 0.0, 0.0));
        assert_component_eq!(gradient.at(0.5).0, 0.5);
    }
}
