//! Skeleton rendering with `{{slot}}` substitution.

/// A fixed text skeleton with named `{{slot}}` holes.
///
/// Rendering is a single left-to-right pass: substituted values are never
/// scanned again, so a value containing `{{...}}` is emitted verbatim. Holes
/// with no matching value are left in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template(&'static str);

impl Template {
    pub const fn new(skeleton: &'static str) -> Self {
        Self(skeleton)
    }

    pub fn render(&self, values: &[(&str, &str)]) -> String {
        let mut out = String::with_capacity(self.0.len());
        let mut rest = self.0;

        while let Some(mut start) = rest.find("{{") {
            // `{{{x}}` is a literal brace followed by a hole
            while rest[start + 2..].starts_with('{') {
                start += 1;
            }
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];

            let Some(end) = after.find("}}") else {
                out.push_str(&rest[start..]);
                return out;
            };

            let key = &after[..end];
            match values.iter().find(|(name, _)| *name == key) {
                Some((_, value)) => out.push_str(value),
                None => out.push_str(&rest[start..start + 2 + end + 2]),
            }
            rest = &after[end + 2..];
        }

        out.push_str(rest);
        out
    }
}
