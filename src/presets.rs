// Built-in unit systems, declared finest-first like a hand-written cascade

use crate::units::{make_consecutive_units, make_unit, Label, Unit, UnitError};

pub const PRESET_NAMES: [&str; 3] = ["clock", "duration", "bytes"];

fn zero_padded(suffix: &'static str) -> Label {
    Label::computed(move |count| format!("{:02}{}", count, suffix))
}

/// Hours, minutes and seconds over a millisecond value ("9h", "40m", "06s")
pub fn clock() -> Vec<Unit> {
    vec![
        make_unit(1000, zero_padded("s")),
        make_unit(60, zero_padded("m")),
        make_unit(60, "h"),
    ]
}

/// Days, hours, minutes and seconds over a second value
pub fn duration() -> Vec<Unit> {
    vec![
        make_unit(1, "s"),
        make_unit(60, "m"),
        make_unit(60, "h"),
        make_unit(24, "d"),
    ]
}

/// Binary size units over a byte count
pub fn bytes() -> Vec<Unit> {
    vec![
        make_unit(1, "B"),
        make_unit(1024, "KiB"),
        make_unit(1024, "MiB"),
        make_unit(1024, "GiB"),
        make_unit(1024, "TiB"),
    ]
}

/// Absolute (coarsest-first) units of a preset, if the name is known
pub fn by_name(name: &str) -> Option<Result<Vec<Unit>, UnitError>> {
    let relative = match name {
        "clock" => clock(),
        "duration" => duration(),
        "bytes" => bytes(),
        _ => return None,
    };
    Some(make_consecutive_units(&relative))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{utx, FormatOptions};

    fn format(name: &str, value: u64, options: FormatOptions) -> Vec<String> {
        let units = by_name(name).unwrap().unwrap();
        utx(units).unwrap().format(value, options)
    }

    #[test]
    fn test_every_preset_builds() {
        for name in PRESET_NAMES {
            assert!(by_name(name).is_some_and(|r| r.is_ok()), "{} failed", name);
        }
        assert!(by_name("fortnight").is_none());
    }

    #[test]
    fn test_clock_preset() {
        assert_eq!(
            format("clock", 34806519, FormatOptions::default()),
            vec!["9h", "40m", "06s"]
        );
    }

    #[test]
    fn test_duration_preset() {
        assert_eq!(
            format("duration", 90_061, FormatOptions::default()),
            vec!["1d", "1h", "1m", "1s"]
        );
        assert_eq!(format("duration", 86_400, FormatOptions::no_zero()), vec!["1d"]);
    }

    #[test]
    fn test_bytes_preset() {
        assert_eq!(
            format("bytes", 3 * 1024 * 1024 + 5, FormatOptions::no_zero()),
            vec!["3MiB", "5B"]
        );
    }
}
