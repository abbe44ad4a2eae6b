//! Human-readable rendering used when coercing into strings.

use super::{Reflect, Reflected};

/// Renders any reflected value as text.
///
/// Scalars use their canonical `Display` form and strings are copied
/// verbatim. Floats therefore never use exponent notation: `1e21` renders
/// as `1000000000000000000000`. Empty optionals render as the empty string, records as
/// `{v1 v2}` over their accessible fields, lists as `[a b]` and maps as
/// `map[k:v]` with entries ordered by their rendered key.
///
/// # Examples
///
/// ```rust
/// use object_mapper::render;
///
/// assert_eq!(render(&0.96_f64), "0.96");
/// assert_eq!(render(&vec![1, 2, 3]), "[1 2 3]");
/// assert_eq!(render(&None::<i32>), "");
/// ```
#[must_use]
pub fn render(value: &dyn Reflect) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

fn write_value(out: &mut String, value: &dyn Reflect) {
    match value.reflect() {
        Reflected::Scalar(scalar) => out.push_str(&scalar.to_string()),
        Reflected::Str(text) => out.push_str(text),
        Reflected::Optional(Some(inner)) => write_value(out, inner),
        Reflected::Optional(None) => {}
        Reflected::Record(record) => {
            out.push('{');
            let values = record
                .descriptor()
                .accessible_fields()
                .filter_map(|field| record.field(field.name));
            write_separated(out, values);
            out.push('}');
        }
        Reflected::List(items) => {
            out.push('[');
            write_separated(out, (0..items.len()).filter_map(|index| items.get(index)));
            out.push(']');
        }
        Reflected::Map(map) => {
            let mut entries: Vec<(String, String)> = map
                .entries()
                .into_iter()
                .map(|(key, value)| (render(key), render(value)))
                .collect();
            entries.sort();
            out.push_str("map[");
            for (position, (key, value)) in entries.iter().enumerate() {
                if position > 0 {
                    out.push(' ');
                }
                out.push_str(key);
                out.push(':');
                out.push_str(value);
            }
            out.push(']');
        }
        Reflected::Opaque(opaque) => out.push_str(&opaque.to_string()),
    }
}

fn write_separated<'a>(out: &mut String, values: impl Iterator<Item = &'a dyn Reflect>) {
    for (position, value) in values.enumerate() {
        if position > 0 {
            out.push(' ');
        }
        write_value(out, value);
    }
}
