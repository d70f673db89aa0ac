use crate::units::error::UnitError;
use crate::units::types::Unit;
use log::{debug, warn};

/// Turn a cascading (relative) unit list into absolute units.
///
/// `units` is finest-first and each base is the ratio to the previous unit,
/// except the first whose base is taken as-is. The result is coarsest-first
/// with every base expressed against the ground unit:
///
/// ```
/// use utx::{make_consecutive_units, make_unit};
///
/// let units = make_consecutive_units(&[
///     make_unit(1000, "sec"),
///     make_unit(60, "min"),
///     make_unit(60, "hours"),
/// ])
/// .unwrap();
///
/// let bases: Vec<u64> = units.iter().map(|u| u.base).collect();
/// assert_eq!(bases, vec![3_600_000, 60_000, 1000]);
/// ```
pub fn make_consecutive_units(units: &[Unit]) -> Result<Vec<Unit>, UnitError> {
    let (ground, rest) = units.split_first().ok_or_else(|| {
        UnitError::InvalidInput("cannot build consecutive units from an empty list".to_string())
    })?;

    let mut absolute = Vec::with_capacity(units.len());
    absolute.push(ground.clone());

    let mut previous = ground.base;
    for (offset, unit) in rest.iter().enumerate() {
        if unit.base == 1 {
            warn!(
                "Unit {} has a ratio of 1 to the unit below it; both will share a base",
                offset + 1
            );
        }

        let base = unit.base.checked_mul(previous).ok_or_else(|| {
            UnitError::Overflow(format!(
                "absolute base of unit {} ({} x {}) does not fit in u64",
                offset + 1,
                unit.base,
                previous
            ))
        })?;

        absolute.push(Unit {
            base,
            label: unit.label.clone(),
        });
        previous = base;
    }

    // Built finest-first; formatting wants the coarsest unit first
    absolute.reverse();

    debug!(
        "Built {} consecutive units, coarsest base {}",
        absolute.len(),
        previous
    );

    Ok(absolute)
}
