//! A mode that ignores all input.
//!
//! Hosts start in this mode so the map can be panned without drawing.

use geosketch_core::{KeyEvent, ModeError, PointerEvent};
use serde_json::{Map, Value};

use crate::lifecycle::{Lifecycle, ModeState};
use crate::mode::{DrawMode, ModeConfig};
use crate::styling::{value_kind, StyleError};

pub const STATIC_MODE: &str = "static";

#[derive(Debug, Default)]
pub struct StaticMode {
    lifecycle: Lifecycle,
}

impl StaticMode {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DrawMode for StaticMode {
    fn mode(&self) -> &'static str {
        STATIC_MODE
    }

    fn state(&self) -> ModeState {
        self.lifecycle.state()
    }

    fn register(&mut self, _config: ModeConfig) -> Result<(), ModeError> {
        self.lifecycle.register()
    }

    fn start(&mut self) -> Result<(), ModeError> {
        self.lifecycle.start()
    }

    fn stop(&mut self) -> Result<(), ModeError> {
        self.lifecycle.stop()
    }

    fn on_click(&mut self, _event: &PointerEvent) -> Result<(), ModeError> {
        Ok(())
    }

    fn on_mouse_move(&mut self, _event: &PointerEvent) -> Result<(), ModeError> {
        Ok(())
    }

    fn on_key_up(&mut self, _event: &KeyEvent) -> Result<(), ModeError> {
        Ok(())
    }

    fn clean_up(&mut self) {}

    fn styles(&self) -> Map<String, Value> {
        Map::new()
    }

    /// Only an empty mapping is accepted; the static mode draws nothing.
    fn set_styles(&mut self, styles: Value) -> Result<(), ModeError> {
        match styles {
            Value::Object(map) if map.is_empty() => Ok(()),
            Value::Object(map) => Err(StyleError::Malformed(format!(
                "static mode has no styles, got {} key(s)",
                map.len()
            ))
            .into()),
            other => Err(StyleError::NotAMapping(value_kind(&other)).into()),
        }
    }
}
