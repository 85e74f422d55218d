//! Per-style option state.
//!
//! [`OptionStore`] holds the current value of every declared option for the
//! styles that have been touched. State for a style is created lazily on
//! first access, seeded from the declared defaults, and never removed.
//!
//! Each style's state carries a revision number that increments on every
//! effective change, so callers caching converted output can tell when it is
//! stale.

use std::collections::BTreeMap;

use parking_lot::RwLock;
use tracing::debug;

use crate::error::{Error, Result};
use crate::style::{OptionValues, StyleDefinition};

#[derive(Debug, Clone)]
struct StyleOptions {
    values: OptionValues,
    revision: u64,
}

impl StyleOptions {
    fn seeded(style: &StyleDefinition) -> Self {
        debug!(style = style.id(), "initializing option state");
        Self {
            values: style.default_options(),
            revision: 0,
        }
    }
}

/// Thread-safe store of option values, keyed by style id.
///
/// Writes are serialized by an exclusive lock; options are independent, so
/// no multi-key transaction is offered.
#[derive(Debug, Default)]
pub struct OptionStore {
    states: RwLock<BTreeMap<String, StyleOptions>>,
}

impl OptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current options for `style`.
    ///
    /// Styles without declared options yield an empty map and create no
    /// state.
    pub fn get(&self, style: &StyleDefinition) -> OptionValues {
        if !style.has_options() {
            return OptionValues::new();
        }

        if let Some(state) = self.states.read().get(style.id()) {
            return state.values.clone();
        }

        self.states
            .write()
            .entry(style.id().to_string())
            .or_insert_with(|| StyleOptions::seeded(style))
            .values
            .clone()
    }

    /// Sets one option for `style`.
    ///
    /// Returns `true` if the stored value changed.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownOption`] if the style does not declare `key`.
    /// - [`Error::OutOfRange`] if `value` is outside the declared bounds.
    pub fn set(&self, style: &StyleDefinition, key: &str, value: i32) -> Result<bool> {
        self.validate(style, key, value)?;

        let mut states = self.states.write();
        let state = states
            .entry(style.id().to_string())
            .or_insert_with(|| StyleOptions::seeded(style));

        if state.values.get(key) == Some(&value) {
            return Ok(false);
        }

        state.values.insert(key.to_string(), value);
        state.revision = state.revision.wrapping_add(1);
        debug!(style = style.id(), key, value, "option updated");
        Ok(true)
    }

    /// Checks that `style` declares `key` and that `value` is within bounds,
    /// without storing anything.
    pub fn validate(&self, style: &StyleDefinition, key: &str, value: i32) -> Result<()> {
        let spec = style.option(key).ok_or_else(|| Error::UnknownOption {
            style: style.id().to_string(),
            key: key.to_string(),
        })?;

        if spec.contains(value) {
            Ok(())
        } else {
            Err(Error::out_of_range(style, spec, value))
        }
    }

    /// Returns the revision of a style's option state; 0 if untouched.
    pub fn revision(&self, style_id: &str) -> u64 {
        self.states
            .read()
            .get(style_id)
            .map_or(0, |state| state.revision)
    }

    /// Returns true if state exists for `style_id`.
    pub fn is_initialized(&self, style_id: &str) -> bool {
        self.states.read().contains_key(style_id)
    }

    /// Snapshot of every initialized style's values, ordered by style id.
    pub fn snapshot(&self) -> BTreeMap<String, OptionValues> {
        self.states
            .read()
            .iter()
            .map(|(id, state)| (id.clone(), state.values.clone()))
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
