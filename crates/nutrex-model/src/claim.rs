//! Scientific claims and their supporting references

/// Marker for any multi-field structured expression extracted from text.
///
/// Never instantiated on its own; [`Triple`](crate::triple::Triple) and the
/// relationship variants are its concrete shapes.
pub trait CompoundExpression {}

/// A claim extracted from the input text, backed by numbered references.
///
/// The generator emits references as a delimited string in its completion;
/// the typed model stores them as an ordered list of bare reference numbers.
pub trait ScientificClaim: CompoundExpression {
    /// The supporting references, if any were extracted
    fn references(&self) -> Option<&[String]>;

    /// Whether the claim cites at least one reference
    fn is_referenced(&self) -> bool {
        self.references().map(|r| !r.is_empty()).unwrap_or(false)
    }
}

/// Split a generator-form reference string into the stored list form.
///
/// The prompt asks for semicolon-delimited reference numbers, but completions
/// also show comma-delimited groups like `"3, 4"`. Both delimiters are
/// accepted; empty segments are dropped.
pub fn parse_reference_list(raw: &str) -> Vec<String> {
    raw.split([';', ','])
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}
