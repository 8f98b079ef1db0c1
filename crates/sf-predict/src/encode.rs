//! Label encoding for categorical columns.

/// Maps each distinct value to its position in sorted order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    /// Fit on every value of a column.
    pub fn fit<'a>(values: impl IntoIterator<Item = &'a str>) -> Self {
        let mut classes: Vec<String> = values.into_iter().map(str::to_owned).collect();
        classes.sort_unstable();
        classes.dedup();
        Self { classes }
    }

    /// Code of `value`, or `None` if it was not seen during fitting.
    pub fn encode(&self, value: &str) -> Option<usize> {
        self.classes.binary_search_by(|c| c.as_str().cmp(value)).ok()
    }

    /// Code as a feature value; unseen values encode to `-1`.
    pub fn feature(&self, value: &str) -> f32 {
        self.encode(value).map_or(-1.0, |i| i as f32)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
