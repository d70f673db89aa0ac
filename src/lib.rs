pub mod config;
pub mod presets;
pub mod units;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use units::{
    make_consecutive_units, make_unit, utx, Decomposition, FormatOptions, Label, Unit, UnitError,
    UnitFormatter,
};
