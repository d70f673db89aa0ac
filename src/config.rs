use crate::presets;
use crate::units::{
    make_consecutive_units, make_unit, parse_label_template, utx, FormatOptions, Unit, UnitError,
    UnitFormatter,
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    // Named unit systems
    #[serde(default)]
    pub systems: HashMap<String, SystemConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SystemConfig {
    // When true, units are finest-first with bases relative to the previous unit
    #[serde(default = "default_consecutive")]
    pub consecutive: bool,

    pub units: Vec<UnitConfig>,

    // Default format options for this system
    #[serde(default)]
    pub no_zero: bool,

    // Join separator used when printing segments on one line
    #[serde(default = "default_separator")]
    pub separator: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UnitConfig {
    pub base: u64,
    // Plain suffix or a template such as "{:02}sec"
    pub label: String,
}

fn default_consecutive() -> bool {
    true
}

fn default_separator() -> String {
    " ".to_string()
}

impl Config {
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, UnitError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            UnitError::ConfigError(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, UnitError> {
        let config: Config =
            toml::from_str(content).map_err(|e| UnitError::ConfigError(e.to_string()))?;
        debug!("Loaded {} unit systems from config", config.systems.len());
        Ok(config)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn system_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.systems.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn system(&self, name: &str) -> Result<&SystemConfig, UnitError> {
        self.systems
            .get(name)
            .ok_or_else(|| UnitError::InvalidInput(format!("unknown unit system '{}'", name)))
    }

    /// Build the formatter of a configured system
    pub fn formatter(&self, name: &str) -> Result<UnitFormatter, UnitError> {
        let system = self.system(name)?;
        debug!(
            "Building unit system '{}' ({} units, consecutive: {})",
            name,
            system.units.len(),
            system.consecutive
        );
        utx(system.absolute_units()?)
    }

    /// Look up a system by name, configured systems first, then presets
    pub fn resolve(&self, name: &str) -> Result<ResolvedSystem, UnitError> {
        if let Some(system) = self.systems.get(name) {
            return Ok(ResolvedSystem {
                formatter: self.formatter(name)?,
                options: system.options(),
                separator: system.separator.clone(),
            });
        }

        match presets::by_name(name) {
            Some(units) => Ok(ResolvedSystem {
                formatter: utx(units?)?,
                options: FormatOptions::default(),
                separator: default_separator(),
            }),
            None => Err(UnitError::InvalidInput(format!(
                "unknown unit system '{}'",
                name
            ))),
        }
    }
}

/// A unit system ready to format, with its default options
#[derive(Debug, Clone)]
pub struct ResolvedSystem {
    pub formatter: UnitFormatter,
    pub options: FormatOptions,
    pub separator: String,
}

impl ResolvedSystem {
    /// Format `value` into one line, or a JSON array when `json` is set.
    /// `no_zero` can only switch omission on; `separator` overrides the system's.
    pub fn render(
        &self,
        value: u64,
        no_zero: bool,
        separator: Option<&str>,
        json: bool,
    ) -> Result<String, serde_json::Error> {
        let options = FormatOptions {
            no_zero: self.options.no_zero || no_zero,
        };
        let segments = self.formatter.format(value, options);

        if json {
            serde_json::to_string(&segments)
        } else {
            Ok(segments.join(separator.unwrap_or(&self.separator)))
        }
    }
}

impl SystemConfig {
    pub fn options(&self) -> FormatOptions {
        FormatOptions {
            no_zero: self.no_zero,
        }
    }

    /// Compile labels and return units in coarsest-first absolute form
    pub fn absolute_units(&self) -> Result<Vec<Unit>, UnitError> {
        let units = self
            .units
            .iter()
            .map(|u| Ok(make_unit(u.base, parse_label_template(&u.label)?)))
            .collect::<Result<Vec<_>, UnitError>>()?;

        if self.consecutive {
            make_consecutive_units(&units)
        } else {
            Ok(units)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[systems.clock]
units = [
  { base = 1000, label = "{:02}sec" },
  { base = 60, label = "min" },
  { base = 60, label = "hours" },
]

[systems.feet]
consecutive = false
no_zero = true
separator = ", "
units = [
  { base = 36, label = " yd" },
  { base = 12, label = " ft" },
  { base = 1, label = " in" },
]
"#;

    #[test]
    fn test_load_and_format_consecutive_system() {
        let config = Config::load_from_str(SAMPLE).unwrap();
        assert_eq!(config.system_names(), vec!["clock", "feet"]);

        let clock = config.system("clock").unwrap();
        assert!(clock.consecutive);
        assert_eq!(clock.separator, " ");
        assert_eq!(clock.options(), FormatOptions::default());

        let formatter = config.formatter("clock").unwrap();
        assert_eq!(
            formatter.format(34806519, clock.options()),
            vec!["9hours", "40min", "06sec"]
        );
    }

    #[test]
    fn test_absolute_system_is_used_verbatim() {
        let config = Config::load_from_str(SAMPLE).unwrap();
        let feet = config.system("feet").unwrap();
        assert_eq!(feet.separator, ", ");

        let formatter = config.formatter("feet").unwrap();
        let bases: Vec<u64> = formatter.units().iter().map(|u| u.base).collect();
        assert_eq!(bases, vec![36, 12, 1]);
        assert_eq!(formatter.format(40, feet.options()), vec!["1 yd", "4 in"]);
    }

    #[test]
    fn test_unknown_system() {
        let config = Config::empty();
        assert!(matches!(
            config.formatter("clock"),
            Err(UnitError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_invalid_configs() {
        assert!(matches!(
            Config::load_from_str("[systems.x]\nunits = 3"),
            Err(UnitError::ConfigError(_))
        ));

        let zero = Config::load_from_str(
            "[systems.x]\nconsecutive = false\nunits = [{ base = 0, label = \"s\" }]",
        )
        .unwrap();
        assert!(matches!(zero.formatter("x"), Err(UnitError::InvalidInput(_))));

        let empty = Config::load_from_str("[systems.x]\nunits = []").unwrap();
        assert!(matches!(empty.formatter("x"), Err(UnitError::InvalidInput(_))));

        let template =
            Config::load_from_str("[systems.x]\nunits = [{ base = 1, label = \"{}{}\" }]").unwrap();
        assert!(matches!(
            template.formatter("x"),
            Err(UnitError::TemplateError(_))
        ));
    }

    #[test]
    fn test_configured_system_shadows_preset() {
        let config = Config::load_from_str(
            "[systems.clock]\nconsecutive = false\nseparator = \":\"\nunits = [{ base = 60, label = \"m\" }, { base = 1, label = \"s\" }]",
        )
        .unwrap();

        let clock = config.resolve("clock").unwrap();
        assert_eq!(clock.render(125, false, None, false).unwrap(), "2m:5s");

        let preset = Config::empty().resolve("clock").unwrap();
        assert_eq!(preset.separator, " ");
        assert_eq!(preset.render(125_000, false, None, false).unwrap(), "0h 02m 05s");
    }

    #[test]
    fn test_no_zero_flag_is_combined_with_system_default() {
        let config = Config::load_from_str(SAMPLE).unwrap();

        // feet has no_zero = true; the flag cannot turn it off
        let feet = config.resolve("feet").unwrap();
        assert_eq!(feet.render(40, false, None, false).unwrap(), "1 yd, 4 in");

        let clock = config.resolve("clock").unwrap();
        assert_eq!(
            clock.render(3_600_000, false, None, false).unwrap(),
            "1hours 0min 00sec"
        );
        assert_eq!(clock.render(3_600_000, true, None, false).unwrap(), "1hours");
    }

    #[test]
    fn test_separator_override_and_json_output() {
        let resolved = Config::empty().resolve("duration").unwrap();
        assert_eq!(
            resolved.render(3661, true, Some("-"), false).unwrap(),
            "1h-1m-1s"
        );
        assert_eq!(
            resolved.render(3661, true, Some("-"), true).unwrap(),
            r#"["1h","1m","1s"]"#
        );
    }

    #[test]
    fn test_resolve_unknown_name() {
        let config = Config::load_from_str(SAMPLE).unwrap();
        match config.resolve("fortnight") {
            Err(UnitError::InvalidInput(msg)) => assert!(msg.contains("fortnight")),
            other => panic!("Expected InvalidInput, got {:?}", other.map(|r| r.separator)),
        }
    }

    #[test]
    fn test_empty_matches_default() {
        assert!(Config::empty().systems.is_empty());
        assert!(Config::default().system_names().is_empty());
    }

    #[test]
    fn test_missing_file() {
        let result = Config::load_from_file("/nonexistent/utx.toml");
        assert!(matches!(result, Err(UnitError::ConfigError(_))));
    }
}
