//! Converters installed in the default table.

use super::Converters;

#[cfg(feature = "chrono")]
pub(super) fn table() -> Converters {
    timestamps::register(Converters::new())
}

#[cfg(not(feature = "chrono"))]
pub(super) fn table() -> Converters {
    Converters::new()
}

#[cfg(feature = "chrono")]
mod timestamps {
    //! Timestamps are canonicalised through RFC 3339 at second precision,
    //! so sub-second digits are dropped on the way.

    use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};

    use crate::error::ConvertError;
    use crate::reflect::{Reflect, Reflected};

    use super::Converters;

    pub(super) fn register(converters: Converters) -> Converters {
        converters
            .with::<DateTime<Utc>, _>(|source| {
                canonical(source).map(|stamp| stamp.with_timezone(&Utc))
            })
            .with::<DateTime<FixedOffset>, _>(canonical)
    }

    fn canonical(source: &dyn Reflect) -> Result<DateTime<FixedOffset>, ConvertError> {
        let text = rfc3339(source)?;
        DateTime::parse_from_rfc3339(&text)
            .map_err(|err| ConvertError::new(format!("invalid RFC 3339 timestamp {text:?}: {err}")))
    }

    fn rfc3339(source: &dyn Reflect) -> Result<String, ConvertError> {
        let any = source.as_any();
        if let Some(stamp) = any.downcast_ref::<DateTime<Utc>>() {
            return Ok(stamp.to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        if let Some(stamp) = any.downcast_ref::<DateTime<FixedOffset>>() {
            return Ok(stamp.to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        match source.reflect() {
            Reflected::Str(text) => Ok(text.to_owned()),
            _ => Err(ConvertError::unexpected_source(
                "a timestamp or RFC 3339 string",
                source.type_key(),
            )),
        }
    }
}
