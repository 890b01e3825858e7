use std::fmt::Display;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use engine::SourceRect;
use serde::Deserialize;

type TuningResult<T> = Result<T, String>;

/// Physics and sprite-sheet layout constants. Every field may be overridden
/// from the tuning file; absent fields keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Tuning {
    pub(crate) jump_velocity: f64,
    pub(crate) gravity: f64,
    pub(crate) step_speed: f64,
    pub(crate) frame_hold_ticks: u32,
    pub(crate) frame_count: u32,
    pub(crate) frame_width: u32,
    pub(crate) frame_height: u32,
    pub(crate) frame_origin_x: u32,
    pub(crate) frame_origin_y: u32,
    pub(crate) zoom: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            jump_velocity: -10.0,
            gravity: 0.5,
            step_speed: 2.0,
            frame_hold_ticks: 5,
            frame_count: 8,
            frame_width: 32,
            frame_height: 32,
            frame_origin_x: 0,
            frame_origin_y: 32,
            zoom: 2.0,
        }
    }
}

impl Tuning {
    /// Reads overrides from `path`. `Ok(None)` when the file does not exist.
    pub(crate) fn load(path: &Path) -> TuningResult<Option<Self>> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(format!("read tuning '{}': {error}", path.display())),
        };
        let tuning = Self::parse_json(&raw)?;
        tuning.validate()?;
        Ok(Some(tuning))
    }

    fn parse_json(raw: &str) -> TuningResult<Self> {
        let mut deserializer = serde_json::Deserializer::from_str(raw);
        match serde_path_to_error::deserialize::<_, Tuning>(&mut deserializer) {
            Ok(tuning) => Ok(tuning),
            Err(error) => {
                let path = error.path().to_string();
                let source = error.into_inner();
                if path.is_empty() || path == "." {
                    Err(format!("parse tuning json: {source}"))
                } else {
                    Err(format!("parse tuning json at {path}: {source}"))
                }
            }
        }
    }

    pub(crate) fn validate(&self) -> TuningResult<()> {
        if !self.jump_velocity.is_finite() || self.jump_velocity >= 0.0 {
            return Err(expected_actual(
                "jump_velocity",
                "negative finite number",
                self.jump_velocity,
            ));
        }
        if !self.gravity.is_finite() || self.gravity <= 0.0 {
            return Err(expected_actual(
                "gravity",
                "positive finite number",
                self.gravity,
            ));
        }
        if !self.step_speed.is_finite() || self.step_speed < 0.0 {
            return Err(expected_actual(
                "step_speed",
                "non-negative finite number",
                self.step_speed,
            ));
        }
        if !self.zoom.is_finite() || self.zoom <= 0.0 {
            return Err(expected_actual("zoom", "positive finite number", self.zoom));
        }
        for (path, value) in [
            ("frame_hold_ticks", self.frame_hold_ticks),
            ("frame_count", self.frame_count),
            ("frame_width", self.frame_width),
            ("frame_height", self.frame_height),
        ] {
            if value == 0 {
                return Err(expected_actual(path, "value > 0", value));
            }
        }
        if !self.strip_fits_texel_space() {
            return Err(validation_err(
                "frame_count",
                "animation strip does not fit in u32 texel coordinates",
            ));
        }
        Ok(())
    }

    /// The whole animation row: every frame side by side. Saturates instead
    /// of wrapping, so an oversized layout never fits any sheet.
    pub(crate) fn strip_rect(&self) -> SourceRect {
        SourceRect::new(
            self.frame_origin_x,
            self.frame_origin_y,
            self.frame_count.saturating_mul(self.frame_width),
            self.frame_height,
        )
    }

    fn strip_fits_texel_space(&self) -> bool {
        self.frame_count
            .checked_mul(self.frame_width)
            .and_then(|width| self.frame_origin_x.checked_add(width))
            .and_then(|_| self.frame_origin_y.checked_add(self.frame_height))
            .is_some()
    }
}

fn validation_err(path: &str, message: impl Into<String>) -> String {
    format!("validation failed at {path}: {}", message.into())
}

fn expected_actual(path: &str, expected: impl Display, actual: impl Display) -> String {
    validation_err(path, format!("expected {expected}, got {actual}"))
}
