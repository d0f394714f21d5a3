/// Utility helpers for CloudSound

/// Join a base class list with the conditional classes that are switched on.
/// Empty pieces are skipped so the result never carries stray spaces.
pub fn class_names<'a>(base: &str, conditional: impl IntoIterator<Item = (&'a str, bool)>) -> String {
    let mut out = String::from(base.trim());

    for (class, enabled) in conditional {
        let class = class.trim();
        if !enabled || class.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(class);
    }

    out
}
