//! Constructors and field-path helpers for `MapError`.

use super::MapError;

impl MapError {
    pub(crate) fn field(field: &'static str, source: Self) -> Self {
        Self::FieldProjection {
            field,
            source: Box::new(source),
        }
    }

    pub(crate) fn element(index: usize, source: Self) -> Self {
        Self::Element {
            index,
            source: Box::new(source),
        }
    }

    /// Returns the location of the failure inside the target.
    ///
    /// Field names are joined with `.` and list positions appear as `[i]`.
    /// Errors raised at the top level have an empty path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use object_mapper::{Mappable, MapError, map};
    ///
    /// #[derive(Mappable)]
    /// #[mapper(read_only)]
    /// struct Source {
    ///     pub items: Vec<Item>,
    /// }
    ///
    /// #[derive(Mappable)]
    /// #[mapper(read_only)]
    /// struct Item {
    ///     pub id: u32,
    /// }
    ///
    /// #[derive(Default, Mappable)]
    /// struct Target {
    ///     pub items: Vec<TargetItem>,
    /// }
    ///
    /// #[derive(Default, Mappable)]
    /// struct TargetItem {
    ///     pub id: bool,
    /// }
    ///
    /// let source = Source { items: vec![Item { id: 7 }] };
    /// let err = map(&source, &mut Target::default()).unwrap_err();
    /// assert_eq!(err.path(), "items[0].id");
    /// ```
    #[must_use]
    pub fn path(&self) -> String {
        let mut path = String::new();
        let mut current = self;
        loop {
            match current {
                Self::FieldProjection { field, source } => {
                    if !path.is_empty() {
                        path.push('.');
                    }
                    path.push_str(field);
                    current = source;
                }
                Self::Element { index, source } => {
                    path.push('[');
                    path.push_str(&index.to_string());
                    path.push(']');
                    current = source;
                }
                _ => return path,
            }
        }
    }

    /// Returns the innermost error, skipping field and element context.
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        let mut current = self;
        while let Self::FieldProjection { source, .. } | Self::Element { source, .. } = current {
            current = source;
        }
        current
    }
}
