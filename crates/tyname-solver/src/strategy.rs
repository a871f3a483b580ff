//! Generic notation used when rendering parameterized names.

use serde::{Deserialize, Serialize};

/// Punctuation bracketing and separating generic arguments.
///
/// ```
/// use tyname_solver::NamingStrategy;
///
/// let strategy = NamingStrategy::new("[", "]", "|");
/// assert_eq!(strategy.render("Pair", ["X", "Y"]), "Pair[X|Y]");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NamingStrategy {
    pub open_generic: String,
    pub close_generic: String,
    pub type_list_delimiter: String,
}

impl Default for NamingStrategy {
    fn default() -> Self {
        Self::new("<", ">", ", ")
    }
}

impl NamingStrategy {
    pub fn new(
        open_generic: impl Into<String>,
        close_generic: impl Into<String>,
        type_list_delimiter: impl Into<String>,
    ) -> Self {
        Self {
            open_generic: open_generic.into(),
            close_generic: close_generic.into(),
            type_list_delimiter: type_list_delimiter.into(),
        }
    }

    /// `Name«A,B»`, safe to use in URLs and model ids.
    pub fn guillemets() -> Self {
        Self::new("«", "»", ",")
    }

    /// Render `prefix` followed by the bracketed, delimited arguments.
    pub fn render<I, S>(&self, prefix: &str, args: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = String::with_capacity(prefix.len() + 16);
        out.push_str(prefix);
        out.push_str(&self.open_generic);
        for (i, arg) in args.into_iter().enumerate() {
            if i > 0 {
                out.push_str(&self.type_list_delimiter);
            }
            out.push_str(arg.as_ref());
        }
        out.push_str(&self.close_generic);
        out
    }
}
