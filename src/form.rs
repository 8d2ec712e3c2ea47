//! Form field parsing and validation
//!
//! The page has four numeric inputs: position (px, py) and velocity (vx, vy).
//! Submitting requires every field to hold a number; position fields must also
//! be non-negative, and a negative one falls back to the default.

use std::fmt;

use glam::Vec2;

/// Position axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
        }
    }

    /// Form field holding this position axis
    pub fn position_field(&self) -> FieldId {
        match self {
            Axis::X => FieldId::PosX,
            Axis::Y => FieldId::PosY,
        }
    }
}

/// The four form inputs, in submit-check order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    PosX,
    PosY,
    VelX,
    VelY,
}

impl FieldId {
    pub const ALL: [FieldId; 4] = [FieldId::PosX, FieldId::PosY, FieldId::VelX, FieldId::VelY];

    /// Position in `ALL`
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// DOM element id
    pub fn element_id(&self) -> &'static str {
        match self {
            FieldId::PosX => "px",
            FieldId::PosY => "py",
            FieldId::VelX => "vx",
            FieldId::VelY => "vy",
        }
    }

    /// Human readable label used in alerts
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::PosX => "position X",
            FieldId::PosY => "position Y",
            FieldId::VelX => "velocity X",
            FieldId::VelY => "velocity Y",
        }
    }
}

/// Raw text of the four inputs, as read from the DOM
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub px: String,
    pub py: String,
    pub vx: String,
    pub vy: String,
}

impl FormValues {
    pub fn new(
        px: impl Into<String>,
        py: impl Into<String>,
        vx: impl Into<String>,
        vy: impl Into<String>,
    ) -> Self {
        Self {
            px: px.into(),
            py: py.into(),
            vx: vx.into(),
            vy: vy.into(),
        }
    }

    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::PosX => &self.px,
            FieldId::PosY => &self.py,
            FieldId::VelX => &self.vx,
            FieldId::VelY => &self.vy,
        }
    }

    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        let value = value.into();
        match field {
            FieldId::PosX => self.px = value,
            FieldId::PosY => self.py = value,
            FieldId::VelX => self.vx = value,
            FieldId::VelY => self.vy = value,
        }
    }
}

/// Numbers parsed out of a valid submission
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedForm {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// Why a submission was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Field left blank
    Empty(FieldId),
    /// Field holds something that is not a number
    NotNumeric { field: FieldId, value: String },
}

impl FormError {
    pub fn field(&self) -> FieldId {
        match self {
            FormError::Empty(field) => *field,
            FormError::NotNumeric { field, .. } => *field,
        }
    }

    /// Text for the blocking alert
    pub fn alert_message(&self) -> String {
        "Please fill in every field with a valid number.".to_string()
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::Empty(field) => write!(f, "{} is empty", field.label()),
            FormError::NotNumeric { field, value } => {
                write!(f, "{} is not a number: {:?}", field.label(), value)
            }
        }
    }
}

impl std::error::Error for FormError {}

/// A position field that was negative and fell back to the default
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionReset {
    pub axis: Axis,
    /// The rejected value
    pub rejected: f32,
    /// The value written back into the field
    pub default: f32,
}

impl PositionReset {
    /// Text for the blocking alert
    pub fn alert_message(&self) -> String {
        format!(
            "Negative numbers are not allowed for position {}",
            self.axis.as_str()
        )
    }
}

impl fmt::Display for PositionReset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "position {} reset from {} to {}",
            self.axis.as_str(),
            self.rejected,
            self.default
        )
    }
}

/// Outcome of reading one position field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PositionInput {
    /// Usable value
    Accepted(f32),
    /// Negative value replaced by the default
    Reset(PositionReset),
    /// Blank or not a number; state stays as it is
    Ignored,
}

/// Parse a field's text as a finite number
///
/// Surrounding whitespace is ignored. Blank, non-numeric, and non-finite text
/// (`NaN`, `inf`) yields `None`.
pub fn parse_number(raw: &str) -> Option<f32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f32>().ok().filter(|v| v.is_finite())
}

/// Read a position field, applying the non-negative rule
pub fn read_position(axis: Axis, raw: &str, default: f32) -> PositionInput {
    match parse_number(raw) {
        Some(value) => check_position(axis, value, default),
        None => PositionInput::Ignored,
    }
}

/// Apply the non-negative rule to an already parsed position
pub fn check_position(axis: Axis, value: f32, default: f32) -> PositionInput {
    if value >= 0.0 {
        PositionInput::Accepted(value)
    } else {
        PositionInput::Reset(PositionReset {
            axis,
            rejected: value,
            default,
        })
    }
}

/// Check that every field holds a number
///
/// Fields are checked in px, py, vx, vy order and the first failure is
/// reported. Sign rules are not applied here.
pub fn validate_submission(values: &FormValues) -> Result<ParsedForm, FormError> {
    let mut numbers = [0.0f32; 4];
    for (slot, field) in numbers.iter_mut().zip(FieldId::ALL) {
        let raw = values.get(field);
        if raw.trim().is_empty() {
            return Err(FormError::Empty(field));
        }
        *slot = parse_number(raw).ok_or_else(|| FormError::NotNumeric {
            field,
            value: raw.to_string(),
        })?;
    }

    Ok(ParsedForm {
        pos: Vec2::new(numbers[0], numbers[1]),
        vel: Vec2::new(numbers[2], numbers[3]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("12"), Some(12.0));
        assert_eq!(parse_number("  -3.5 "), Some(-3.5));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn test_validate_accepts_negative_velocity() {
        let values = FormValues::new("270", "100", "-5", "0");
        let parsed = validate_submission(&values).unwrap();
        assert_eq!(parsed.pos, Vec2::new(270.0, 100.0));
        assert_eq!(parsed.vel, Vec2::new(-5.0, 0.0));
    }

    #[test]
    fn test_validate_reports_first_failure() {
        let values = FormValues::new("100", "", "x", "");
        assert_eq!(
            validate_submission(&values),
            Err(FormError::Empty(FieldId::PosY))
        );

        let values = FormValues::new("100", "100", "fast", "1");
        let err = validate_submission(&values).unwrap_err();
        assert_eq!(err.field(), FieldId::VelX);
        assert_eq!(err.to_string(), "velocity X is not a number: \"fast\"");
    }

    #[test]
    fn test_read_position() {
        assert_eq!(read_position(Axis::X, "50", 100.0), PositionInput::Accepted(50.0));
        assert_eq!(read_position(Axis::X, "0", 100.0), PositionInput::Accepted(0.0));
        assert_eq!(read_position(Axis::Y, "", 100.0), PositionInput::Ignored);

        let PositionInput::Reset(reset) = read_position(Axis::Y, "-1", 100.0) else {
            panic!("negative position should reset");
        };
        assert_eq!(reset.axis, Axis::Y);
        assert_eq!(reset.default, 100.0);
        assert_eq!(
            reset.alert_message(),
            "Negative numbers are not allowed for position Y"
        );
    }

    #[test]
    fn test_field_element_ids() {
        let ids: Vec<_> = FieldId::ALL.iter().map(|f| f.element_id()).collect();
        assert_eq!(ids, ["px", "py", "vx", "vy"]);
        assert_eq!(Axis::X.position_field(), FieldId::PosX);
        for (i, field) in FieldId::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    proptest! {
        #[test]
        fn non_numeric_field_is_rejected(
            field_index in 0usize..4,
            junk in "[a-zA-Z_#]{1,8}",
        ) {
            let field = FieldId::ALL[field_index];
            let mut values = FormValues::new("100", "100", "1", "1");
            values.set(field, junk);
            let err = validate_submission(&values).unwrap_err();
            prop_assert_eq!(err.field(), field);
        }

        #[test]
        fn any_finite_numbers_validate(
            px in -1000.0f32..1000.0,
            py in -1000.0f32..1000.0,
            vx in -1000.0f32..1000.0,
            vy in -1000.0f32..1000.0,
        ) {
            let values = FormValues::new(px.to_string(), py.to_string(), vx.to_string(), vy.to_string());
            let parsed = validate_submission(&values).unwrap();
            prop_assert_eq!(parsed.pos, Vec2::new(px, py));
            prop_assert_eq!(parsed.vel, Vec2::new(vx, vy));
        }
    }
}
