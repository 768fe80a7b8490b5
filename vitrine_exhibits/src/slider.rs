// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider sample: a numeric value with a three-decimal readout.

use alloc::format;
use alloc::string::String;

use vitrine_element::Element;
use vitrine_native::SliderConfig;

fn readout(value: f64) -> String {
    format!("{value:.3}")
}

/// Displays the slider's current value with three decimals.
///
/// The readout updates synchronously on each value-changed event and
/// nothing else changes; there is no debouncing, validation, or
/// persistence.
#[derive(Debug)]
pub struct SliderSample {
    config: SliderConfig,
    value: f64,
}

impl SliderSample {
    /// Creates a sample; the displayed value starts at the configured
    /// initial value.
    #[must_use]
    pub fn new(config: SliderConfig) -> Self {
        let value = config.value;
        Self { config, value }
    }

    /// Creates the sample with default settings.
    #[must_use]
    pub fn default_settings() -> Self {
        Self::new(SliderConfig::new())
    }

    /// The native slider reported a new value.
    pub fn on_value_change(&mut self, value: f64) {
        self.value = value;
    }

    /// Returns the current value.
    #[must_use]
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the three-decimal readout, e.g. `"0.420"`.
    #[must_use]
    pub fn readout(&self) -> String {
        readout(self.value)
    }

    /// Returns the slider configuration.
    #[must_use]
    #[inline]
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Produces the sample's subtree descriptor.
    #[must_use]
    pub fn render(&self) -> Element {
        Element::column([
            Element::label(self.readout()),
            Element::Slider(self.config.clone()),
        ])
    }
}

/// A [`SliderSample`] that also counts sliding-complete events.
///
/// Each completion records the final value and bumps the count; value
/// changes flow through to the inner sample untouched.
#[derive(Debug)]
pub struct SlidingCompleteSample {
    inner: SliderSample,
    completion_value: f64,
    completion_count: u32,
}

impl SlidingCompleteSample {
    /// Creates the sample around the given configuration.
    #[must_use]
    pub fn new(config: SliderConfig) -> Self {
        Self {
            inner: SliderSample::new(config),
            completion_value: 0.0,
            completion_count: 0,
        }
    }

    /// The native slider reported a new value.
    pub fn on_value_change(&mut self, value: f64) {
        self.inner.on_value_change(value);
    }

    /// The user finished a sliding gesture at `value`.
    pub fn on_sliding_complete(&mut self, value: f64) {
        self.completion_value = value;
        self.completion_count += 1;
    }

    /// Returns the inner value sample.
    #[must_use]
    #[inline]
    pub fn inner(&self) -> &SliderSample {
        &self.inner
    }

    /// Returns the number of completed gestures.
    #[must_use]
    #[inline]
    pub fn completion_count(&self) -> u32 {
        self.completion_count
    }

    /// Returns the value of the last completed gesture.
    #[must_use]
    #[inline]
    pub fn completion_value(&self) -> f64 {
        self.completion_value
    }

    /// Produces the sample's subtree descriptor.
    #[must_use]
    pub fn render(&self) -> Element {
        Element::column([
            self.inner.render(),
            Element::label(format!(
                "Completions: {} Value: {}",
                self.completion_count, self.completion_value
            )),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readout_has_three_decimals() {
        let mut sample = SliderSample::default_settings();
        assert_eq!(sample.readout(), "0.000");

        sample.on_value_change(0.42);
        assert_eq!(sample.readout(), "0.420");
        assert_eq!(sample.value(), 0.42);
    }

    #[test]
    fn value_change_touches_nothing_else() {
        let config = SliderConfig::new().with_range(-1.0, 2.0).with_step(0.25);
        let mut sample = SliderSample::new(config.clone());
        sample.on_value_change(0.42);
        assert_eq!(sample.config(), &config);
    }

    #[test]
    fn initial_value_seeds_the_readout() {
        let sample = SliderSample::new(SliderConfig::new().with_value(0.5));
        assert_eq!(sample.readout(), "0.500");
    }

    #[test]
    fn completions_are_counted() {
        let mut sample = SlidingCompleteSample::new(SliderConfig::new());
        sample.on_value_change(0.3);
        assert_eq!(sample.completion_count(), 0);

        sample.on_sliding_complete(0.3);
        sample.on_value_change(0.7);
        sample.on_sliding_complete(0.7);

        assert_eq!(sample.completion_count(), 2);
        assert_eq!(sample.completion_value(), 0.7);
        assert_eq!(sample.inner().readout(), "0.700");
    }

    #[test]
    fn render_shows_readout_and_completions() {
        let mut sample = SlidingCompleteSample::new(SliderConfig::new());
        sample.on_value_change(0.42);
        sample.on_sliding_complete(0.42);

        let tree = sample.render();
        assert!(tree.contains_label("0.420"));
        assert!(tree.contains_label("Completions: 1 Value: 0.42"));
    }
}
