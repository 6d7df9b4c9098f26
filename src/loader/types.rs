/// Options threaded into [`load_tlds`](super::load_tlds) and
/// [`load_domains`](super::load_domains).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Log the number of loaded entries.
    pub debug: bool,
    /// Keep blank TLD lines as the degenerate suffix `"."`.
    ///
    /// Off by default: `"."` is a suffix of every domain written with a
    /// trailing dot (`example.org.`), whatever its real TLD.
    pub keep_blank_tlds: bool,
}

impl LoadOptions {
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn keep_blank_tlds(mut self, keep: bool) -> Self {
        self.keep_blank_tlds = keep;
        self
    }
}

/// Ordered list of TLD suffixes (`.com`, `.net`, ...), in file order.
///
/// Built once by the loader and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TldSet {
    suffixes: Vec<String>,
}

impl TldSet {
    /// Build a set from raw TLD names (`"COM"`, `" org "`), normalizing each
    /// one the same way the loader does.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let suffixes = names
            .into_iter()
            .map(|name| tld_suffix(&normalize_line(name.as_ref())))
            .collect();
        Self { suffixes }
    }

    pub(crate) fn from_suffixes(suffixes: Vec<String>) -> Self {
        Self { suffixes }
    }

    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.suffixes.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.suffixes
    }
}

impl<'a> IntoIterator for &'a TldSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.suffixes.iter()
    }
}

/// trim + lowercase, appliqué à toutes les lignes lues.
///
/// Casse simple, caractère par caractère : `İ` donne `i` et non `i\u{307}`.
pub(crate) fn normalize_line(line: &str) -> String {
    line.trim()
        .chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

pub(crate) fn tld_suffix(normalized: &str) -> String {
    format!(".{normalized}")
}
