use crate::units::error::UnitError;
use crate::units::types::{Decomposition, FormatOptions, Unit};
use log::debug;
use std::sync::Arc;

/// Formatter bound to one absolute, coarsest-first unit sequence
#[derive(Debug, Clone)]
pub struct UnitFormatter {
    units: Arc<[Unit]>,
}

/// Create a formatter for an absolute unit sequence (coarsest first).
///
/// Every base must be positive; an empty sequence is accepted and formats
/// every value to an empty list.
pub fn utx(units: Vec<Unit>) -> Result<UnitFormatter, UnitError> {
    UnitFormatter::new(units)
}

impl UnitFormatter {
    pub fn new(units: Vec<Unit>) -> Result<Self, UnitError> {
        if let Some(index) = units.iter().position(|u| u.base == 0) {
            return Err(UnitError::InvalidInput(format!(
                "unit {} ({:?}) has a base of 0",
                index, units[index].label
            )));
        }

        debug!("Created unit formatter with {} units", units.len());

        Ok(Self {
            units: units.into(),
        })
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Split `value` into one count per unit, largest unit first.
    /// Whatever is left below the finest unit ends up in `remainder`.
    pub fn decompose(&self, value: u64) -> Decomposition {
        let mut remainder = value;
        let counts = self
            .units
            .iter()
            .map(|unit| {
                let count = remainder / unit.base;
                remainder %= unit.base;
                count
            })
            .collect();

        Decomposition { counts, remainder }
    }

    /// Render `value` as labeled segments, coarsest first
    pub fn format(&self, value: u64, options: FormatOptions) -> Vec<String> {
        let decomposition = self.decompose(value);

        self.units
            .iter()
            .zip(decomposition.counts)
            .filter(|(_, count)| !(options.no_zero && *count == 0))
            .map(|(unit, count)| unit.label.render(count))
            .collect()
    }

    /// Consume the formatter into a plain closure
    pub fn into_fn(self) -> impl Fn(u64, FormatOptions) -> Vec<String> + Send + Sync {
        move |value, options| self.format(value, options)
    }
}
