use std::fmt::{Display, Formatter};

use serde_json::Value;

/// Cell-friendly rendering of a raw JSON value: strings without the quotes,
/// `null` blank, everything else in its JSON form.
pub struct FormattedValue<'a>(pub &'a Value);

impl Display for FormattedValue<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Value::String(string) => f.write_str(string),
            Value::Null => Ok(()),
            other => Display::fmt(other, f),
        }
    }
}
