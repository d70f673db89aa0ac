use crate::units::error::UnitError;
use crate::units::types::Label;
use lazy_static::lazy_static;
use regex::Regex;

/// Widest padding a template may request
pub const MAX_TEMPLATE_WIDTH: usize = 64;

lazy_static! {
    /// A single count placeholder with optional text around it
    /// Matches: "{}sec", "{:02}sec", "T+{:3}", "{} items"
    static ref PLACEHOLDER: Regex = Regex::new(
        r"^(?P<prefix>[^{}]*)\{(?::(?P<zero>0)?(?P<width>[1-9][0-9]*))?\}(?P<suffix>[^{}]*)$"
    ).unwrap();
}

/// Compile a textual label into a `Label`.
///
/// Text without braces is a plain suffix. Text with one `{}` placeholder
/// becomes a computed label; `{:W}` right-aligns the count in `W` columns and
/// `{:0W}` zero-pads it.
pub fn parse_label_template(text: &str) -> Result<Label, UnitError> {
    if !text.contains(['{', '}']) {
        return Ok(Label::Fixed(text.to_string()));
    }

    let caps = PLACEHOLDER.captures(text).ok_or_else(|| {
        UnitError::TemplateError(format!(
            "'{}' must contain exactly one placeholder of the form {{}}, {{:W}} or {{:0W}}",
            text
        ))
    })?;

    let prefix = caps["prefix"].to_string();
    let suffix = caps["suffix"].to_string();
    let zero = caps.name("zero").is_some();
    let width = match caps.name("width") {
        Some(w) => w.as_str().parse::<usize>().map_err(|_| {
            UnitError::TemplateError(format!("width '{}' in '{}' is too large", w.as_str(), text))
        })?,
        None => 0,
    };
    if width > MAX_TEMPLATE_WIDTH {
        return Err(UnitError::TemplateError(format!(
            "width {} in '{}' exceeds the maximum of {}",
            width, text, MAX_TEMPLATE_WIDTH
        )));
    }

    Ok(Label::computed(move |count| {
        if zero {
            format!("{}{:0width$}{}", prefix, count, suffix, width = width)
        } else {
            format!("{}{:>width$}{}", prefix, count, suffix, width = width)
        }
    }))
}
