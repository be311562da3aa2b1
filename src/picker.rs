//! A picker session: the current color plus everything a front end needs to
//! draw its sliders.

use tracing::debug;

use crate::{
    color::Component,
    parse::{parse, ColorParseError},
    Channel, Color, Gradient, Space,
};

/// Whole-color operations offered next to the sliders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Replace the color with a random one.
    Randomize,
    /// Invert the color.
    Invert,
    /// Rotate every RGB component half way around.
    Complement,
}

/// Everything needed to draw one slider.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    /// The space the slider is grouped under.
    pub space: Space,
    /// The channel the slider controls.
    pub channel: Channel,
    /// The current value of the channel.
    pub value: Component,
    /// The value formatted as a percentage.
    pub readout: String,
    /// The gradient painted behind the slider.
    pub gradient: Gradient,
}

/// Owns the color being edited.
#[derive(Clone, Debug, Default)]
pub struct Picker {
    color: Color,
}

impl Picker {
    /// Start a session with a black color.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session with the given color.
    pub fn with_color(color: Color) -> Self {
        Self { color }
    }

    /// The current color.
    pub fn color(&self) -> &Color {
        &self.color
    }

    /// Move the slider for `channel` to `fraction` of its length. The
    /// fraction is clamped to `[0, 1]`.
    pub fn drag(&mut self, channel: Channel, fraction: Component) {
        let value = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };

        self.color.set(channel, value);
        debug!(?channel, value, color = %self.color, "dragged");
    }

    /// Run one of the whole-color operations.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Randomize => self.color.randomize(),
            Action::Invert => self.color.invert(),
            Action::Complement => self.color.complement(),
        }
        debug!(?action, color = %self.color, "applied");
    }

    /// Replace the color with one typed in by the user.
    pub fn enter(&mut self, text: &str) -> Result<(), ColorParseError> {
        match parse(text) {
            Ok(rgb) => {
                self.color.from_space(Space::Rgb, rgb);
                debug!(text, color = %self.color, "entered");
                Ok(())
            }
            Err(err) => {
                debug!(text, error = %err, "rejected");
                Err(err)
            }
        }
    }

    /// The label shown next to the slider for `channel`.
    pub fn readout(&self, channel: Channel) -> String {
        readout(self.color.get(channel))
    }

    /// One row per channel of every space, in registry order.
    pub fn rows(&self) -> Vec<Row> {
        Space::ALL
            .into_iter()
            .flat_map(|space| space.channels().map(|channel| (space, channel)))
            .map(|(space, channel)| Row {
                space,
                channel,
                value: self.color.get(channel),
                readout: self.readout(channel),
                gradient: self.color.gradient(channel),
            })
            .collect()
    }
}

/// Format a value as a percentage with at most two decimals. NaN reads as 0.
fn readout(value: Component) -> String {
    let value = if value.is_nan() { 0.0 } else { value };
    let percent = (value * 10000.0).round() / 100.0;
    let text = format!("{:.2}", percent);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{}%", if text == "-0" { "0" } else { text })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readouts() {
        assert_eq!(readout(0.0), "0%");
        assert_eq!(readout(0.5), "50%");
        assert_eq!(readout(1.0), "100%");
        assert_eq!(readout(0.123456), "12.35%");
        assert_eq!(readout(0.1), "10%");
        assert_eq!(readout(0.105), "10.5%");
        assert_eq!(readout(-0.00001), "0%");
        assert_eq!(readout(Component::NAN), "0%");
    }

    #[test]
    fn nan_channel_reads_as_zero() {
        let mut color = Color::new();
        color.from_space(Space::Rgb, crate::Components(Component::NAN, 0.0, 0.0));
        let picker = Picker::with_color(color);
        assert_eq!(picker.readout(Channel::Red), "0%");
    }

    #[test]
    fn drag_clamps() {
        let mut picker = Picker::new();
        picker.drag(Channel::Red, 1.7);
        assert_eq!(picker.color().get(Channel::Red), 1.0);
        picker.drag(Channel::Red, -0.3);
        assert_eq!(picker.color().get(Channel::Red), 0.0);
        picker.drag(Channel::Green, Component::NAN);
        assert_eq!(picker.color().get(Channel::Green), 0.0);
    }

    #[test]
    fn actions() {
        let mut picker = Picker::with_color(Color::from_rgb(0.2, 0.4, 0.6));
        picker.apply(Action::Invert);
        assert_eq!(picker.color().to_hex(), Color::from_rgb(0.8, 0.6, 0.4).to_hex());
        picker.apply(Action::Complement);
        assert_eq!(picker.color().to_hex(), Color::from_rgb(0.3, 0.1, 0.9).to_hex());
        picker.apply(Action::Randomize);
        assert!(picker.color().get(Channel::Red) < 1.0);
    }

    #[test]
    fn enter() {
        let mut picker = Picker::new();
        assert_eq!(picker.enter("#336699"), Ok(()));
        assert_eq!(picker.color().to_hex(), "#336699");

        assert!(picker.enter("rgb(1, 2)").is_err());
        assert_eq!(picker.color().to_hex(), "#336699");
    }

    #[test]
    fn rows_cover_every_space() {
        let picker = Picker::with_color(Color::from_rgb(1.0, 0.0, 0.0));
        let rows = picker.rows();
        assert_eq!(rows.len(), 9);

        let layout = rows
            .iter()
            .map(|row| (row.space, row.channel))
            .collect::<Vec<_>>();
        assert_eq!(
            layout,
            [
                (Space::Rgb, Channel::Red),
                (Space::Rgb, Channel::Green),
                (Space::Rgb, Channel::Blue),
                (Space::Hsl, Channel::Hue),
                (Space::Hsl, Channel::HslSaturation),
                (Space::Hsl, Channel::Lightness),
                (Space::Hsv, Channel::Hue),
                (Space::Hsv, Channel::HsvSaturation),
                (Space::Hsv, Channel::Value),
            ]
        );

        let lightness = &rows[5];
        assert_eq!(lightness.readout, "50%");
        assert_eq!(lightness.gradient.stops().len(), 3);
        assert_eq!(rows[0].readout, "100%");
    }
}
