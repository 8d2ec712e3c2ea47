//! Demo controller
//!
//! `BounceDemo` is the one state object the page owns. Every UI event maps to a
//! method here; the methods return what the page has to reflect back into the
//! DOM (field values, alerts, enable/disable) without touching the DOM
//! themselves.

use glam::Vec2;

use crate::form::{self, Axis, FieldId, FormError, FormValues, PositionInput, PositionReset};
use crate::input::Nudge;
use crate::layout::{self, CanvasSize};
use crate::settings::Settings;
use crate::sim::{Bounds, FrameReport, SimState, tick};
use crate::format_number;

/// Result of an accepted submission
#[derive(Debug, Clone, PartialEq)]
pub struct Started {
    /// True if the loop went from idle to running
    pub started: bool,
    /// Position fields that were negative and fell back to the default
    pub resets: Vec<PositionReset>,
}

/// The demo: ball state, bounds and settings
#[derive(Debug, Clone)]
pub struct BounceDemo {
    state: SimState,
    canvas: CanvasSize,
    bounds: Bounds,
    settings: Settings,
}

impl Default for BounceDemo {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl BounceDemo {
    pub fn new(settings: Settings) -> Self {
        let canvas = CanvasSize::default();
        Self {
            state: SimState::new(settings.default_position),
            canvas,
            bounds: Bounds::for_canvas(canvas.width, canvas.height, settings.ball_radius),
            settings,
        }
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Inputs and the start button are usable only while idle
    pub fn controls_enabled(&self) -> bool {
        !self.state.running
    }

    /// Field values shown at page load: position filled in, velocity blank
    pub fn initial_fields(&self) -> FormValues {
        FormValues::new(
            format_number(self.state.pos.x),
            format_number(self.state.pos.y),
            "",
            "",
        )
    }

    /// Text for the vx/vy fields
    pub fn velocity_fields(&self) -> (String, String) {
        (
            format_number(self.state.vel.x),
            format_number(self.state.vel.y),
        )
    }

    /// Handle form submission
    ///
    /// Every field must be numeric or nothing changes. Negative positions fall
    /// back to the default and are reported; velocity may be any number. The
    /// loop starts if it was idle.
    pub fn submit(&mut self, values: &FormValues) -> Result<Started, FormError> {
        let parsed = form::validate_submission(values)?;

        let mut resets = Vec::new();
        for (axis, value) in [(Axis::X, parsed.pos.x), (Axis::Y, parsed.pos.y)] {
            let input = form::check_position(axis, value, self.settings.default_position);
            if let Some(reset) = self.apply_position(axis, input) {
                resets.push(reset);
            }
        }
        self.state.vel = parsed.vel;

        let started = self.state.start();
        log::debug!(
            "Submit accepted: pos=({}, {}) vel=({}, {}) started={}",
            self.state.pos.x,
            self.state.pos.y,
            self.state.vel.x,
            self.state.vel.y,
            started
        );
        if started {
            log::info!("Animation started");
        }

        Ok(Started { started, resets })
    }

    /// Handle the stop button. Returns false if nothing was running.
    pub fn stop(&mut self) -> bool {
        let stopped = self.state.stop();
        if stopped {
            log::info!(
                "Animation stopped at ({:.0}, {:.0})",
                self.state.pos.x,
                self.state.pos.y
            );
        }
        stopped
    }

    /// Run one animation frame; `None` when not running
    pub fn frame(&mut self) -> Option<FrameReport> {
        if !self.state.running {
            return None;
        }
        Some(tick(&mut self.state, &self.bounds))
    }

    /// Live typing in a position field (`input` event)
    ///
    /// Only while idle. Returns true if the ball moved and needs a redraw.
    /// Negative and non-numeric text is left for `commit_position`.
    pub fn preview_position(&mut self, axis: Axis, raw: &str) -> bool {
        if self.state.running {
            return false;
        }
        match form::read_position(axis, raw, self.settings.default_position) {
            PositionInput::Accepted(value) => {
                self.state.set_position_axis(axis, value);
                true
            }
            PositionInput::Reset(_) | PositionInput::Ignored => false,
        }
    }

    /// Committed position field (`change` event)
    ///
    /// Only while idle. A negative value resets the axis to the default and the
    /// returned notice must be shown to the user.
    pub fn commit_position(&mut self, axis: Axis, raw: &str) -> Option<PositionReset> {
        if self.state.running {
            return None;
        }
        let input = form::read_position(axis, raw, self.settings.default_position);
        self.apply_position(axis, input)
    }

    fn apply_position(&mut self, axis: Axis, input: PositionInput) -> Option<PositionReset> {
        match input {
            PositionInput::Accepted(value) => {
                self.state.set_position_axis(axis, value);
                None
            }
            PositionInput::Reset(reset) => {
                log::debug!("{}", reset);
                self.state.set_position_axis(axis, reset.default);
                Some(reset)
            }
            PositionInput::Ignored => None,
        }
    }

    /// Arrow-key press. Returns the new velocity if it changed.
    pub fn key(&mut self, key: &str) -> Option<Vec2> {
        if !self.state.running {
            return None;
        }
        let nudge = Nudge::from_key(key)?;
        self.state.vel = nudge.apply(self.state.vel, self.settings.velocity_step);
        log::debug!(
            "{:?}: vel=({}, {})",
            nudge,
            self.state.vel.x,
            self.state.vel.y
        );
        Some(self.state.vel)
    }

    /// Viewport resized. Returns the new canvas size if it changed.
    ///
    /// An unknown width keeps the full-size canvas.
    pub fn resize(&mut self, viewport_width: Option<f64>) -> Option<CanvasSize> {
        let canvas = match viewport_width {
            Some(width) => layout::canvas_size(width),
            None => {
                log::warn!("Viewport width unavailable, using full canvas");
                CanvasSize::default()
            }
        };
        if canvas == self.canvas {
            return None;
        }
        self.canvas = canvas;
        self.bounds = Bounds::for_canvas(canvas.width, canvas.height, self.settings.ball_radius);
        log::info!("Canvas resized to {}x{}", canvas.width, canvas.height);
        Some(canvas)
    }

    /// Field id and text to write after a position reset
    pub fn reset_field(reset: &PositionReset) -> (FieldId, String) {
        (reset.axis.position_field(), format_number(reset.default))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn values(px: &str, py: &str, vx: &str, vy: &str) -> FormValues {
        FormValues::new(px, py, vx, vy)
    }

    #[test]
    fn test_initial_fields() {
        let demo = BounceDemo::default();
        assert_eq!(demo.initial_fields(), values("100", "100", "", ""));
        assert!(!demo.is_running());
    }

    #[test]
    fn test_blank_velocity_does_not_start() {
        let mut demo = BounceDemo::default();
        let err = demo.submit(&demo.initial_fields()).unwrap_err();
        assert_eq!(err, FormError::Empty(FieldId::VelX));
        assert!(!demo.is_running());
        assert!(demo.frame().is_none());
    }

    #[test]
    fn test_right_edge_scenario() {
        let mut demo = BounceDemo::default();
        let started = demo.submit(&values("270", "100", "5", "0")).unwrap();
        assert!(started.started);
        assert!(started.resets.is_empty());

        let report = demo.frame().unwrap();
        assert_eq!(report.display_fields(), ("275".to_string(), "100".to_string()));
        assert_eq!(report.vel.x, -5.0);
        assert!(report.bounce.x);
    }

    #[test]
    fn test_negative_position_on_submit_resets_and_starts() {
        let mut demo = BounceDemo::default();
        let started = demo.submit(&values("-10", "50", "1", "1")).unwrap();
        assert!(started.started);
        assert_eq!(started.resets.len(), 1);
        let reset = started.resets[0];
        assert_eq!(reset.axis, Axis::X);
        assert_eq!(
            BounceDemo::reset_field(&reset),
            (FieldId::PosX, "100".to_string())
        );
        assert_eq!(demo.state().pos, Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_resubmit_while_running_updates_velocity() {
        let mut demo = BounceDemo::default();
        demo.submit(&values("100", "100", "1", "1")).unwrap();
        let again = demo.submit(&values("100", "100", "3", "-3")).unwrap();
        assert!(!again.started);
        assert_eq!(demo.state().vel, Vec2::new(3.0, -3.0));
    }

    #[test]
    fn test_stop_freezes_position() {
        let mut demo = BounceDemo::default();
        demo.submit(&values("100", "100", "2", "2")).unwrap();
        demo.frame();
        assert!(demo.stop());
        let pos = demo.state().pos;
        assert!(demo.frame().is_none());
        assert!(demo.frame().is_none());
        assert_eq!(demo.state().pos, pos);
        assert!(!demo.stop());
    }

    #[test]
    fn test_preview_and_commit_only_when_idle() {
        let mut demo = BounceDemo::default();
        assert!(demo.preview_position(Axis::X, "42"));
        assert_eq!(demo.state().pos.x, 42.0);
        assert!(!demo.preview_position(Axis::X, "-4"));
        assert!(!demo.preview_position(Axis::X, "abc"));
        assert_eq!(demo.state().pos.x, 42.0);

        let reset = demo.commit_position(Axis::Y, "-7").unwrap();
        assert_eq!(reset.rejected, -7.0);
        assert_eq!(demo.state().pos.y, 100.0);
        assert!(demo.commit_position(Axis::Y, "").is_none());

        demo.submit(&values("42", "100", "1", "0")).unwrap();
        assert!(!demo.preview_position(Axis::X, "10"));
        assert!(demo.commit_position(Axis::X, "-1").is_none());
        assert_eq!(demo.state().pos.x, 42.0);
    }

    #[test]
    fn test_keys_only_while_running() {
        let mut demo = BounceDemo::default();
        assert!(demo.key("ArrowUp").is_none());

        demo.submit(&values("100", "100", "5", "0")).unwrap();
        assert_eq!(demo.key("ArrowUp"), Some(Vec2::new(5.0, -1.0)));
        assert_eq!(demo.key("ArrowLeft"), Some(Vec2::new(4.0, -1.0)));
        assert!(demo.key("Enter").is_none());
        assert_eq!(demo.velocity_fields(), ("4".to_string(), "-1".to_string()));
    }

    #[test]
    fn test_velocity_step_from_settings() {
        let settings = Settings {
            velocity_step: 2.0,
            ..Settings::default()
        };
        let mut demo = BounceDemo::new(settings);
        demo.submit(&values("100", "100", "0", "0")).unwrap();
        assert_eq!(demo.key("ArrowDown"), Some(Vec2::new(0.0, 2.0)));
    }

    #[test]
    fn test_resize_updates_bounds() {
        let mut demo = BounceDemo::default();
        assert!(demo.resize(Some(1024.0)).is_none());
        let canvas = demo.resize(Some(400.0)).unwrap();
        assert_eq!(canvas, CanvasSize::COMPACT);
        assert_eq!(demo.bounds().max, Vec2::new(260.0, 178.0));
        assert!(demo.resize(Some(420.0)).is_none());
    }

    #[test]
    fn test_unknown_viewport_uses_full_canvas() {
        let mut demo = BounceDemo::default();
        assert!(demo.resize(None).is_none());
        demo.resize(Some(400.0)).unwrap();
        assert_eq!(demo.resize(None), Some(CanvasSize::FULL));
        assert_eq!(demo.bounds().max, Vec2::new(260.0, 260.0));
    }

    #[test]
    fn test_controls_follow_running_state() {
        let mut demo = BounceDemo::default();
        assert!(demo.controls_enabled());
        demo.submit(&values("100", "100", "1", "1")).unwrap();
        assert!(!demo.controls_enabled());
        demo.frame();
        assert!(demo.stop());
        assert!(demo.controls_enabled());
        assert!(demo.submit(&values("", "100", "1", "1")).is_err());
        assert!(demo.controls_enabled());
    }

    proptest! {
        #[test]
        fn negative_position_always_resets(
            x in -10_000.0f32..-0.001,
            axis_is_x in proptest::bool::ANY,
        ) {
            let mut demo = BounceDemo::default();
            let axis = if axis_is_x { Axis::X } else { Axis::Y };
            let reset = demo.commit_position(axis, &x.to_string());
            prop_assert!(reset.is_some());
            let reset = reset.unwrap();
            prop_assert_eq!(reset.default, 100.0);
            prop_assert!(!reset.alert_message().is_empty());
            prop_assert_eq!(demo.state().pos, Vec2::new(100.0, 100.0));
        }

        #[test]
        fn any_velocity_starts_with_valid_position(
            px in 0.0f32..280.0,
            py in 0.0f32..280.0,
            vx in -100.0f32..100.0,
            vy in -100.0f32..100.0,
        ) {
            let mut demo = BounceDemo::default();
            let form = FormValues::new(px.to_string(), py.to_string(), vx.to_string(), vy.to_string());
            let started = demo.submit(&form).unwrap();
            prop_assert!(started.started);
            prop_assert!(started.resets.is_empty());
            prop_assert!(demo.is_running());
            prop_assert_eq!(demo.state().vel, Vec2::new(vx, vy));
        }

        #[test]
        fn invalid_field_never_starts(
            field_index in 0usize..4,
            junk in "|[a-z]{1,6}|  ",
        ) {
            let mut demo = BounceDemo::default();
            let mut form = FormValues::new("100", "100", "1", "1");
            form.set(FieldId::ALL[field_index], junk);
            prop_assert!(demo.submit(&form).is_err());
            prop_assert!(!demo.is_running());
            prop_assert!(demo.frame().is_none());
        }
    }
}
