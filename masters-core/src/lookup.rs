use std::collections::HashMap;

/// A record that other records point at through a soft string key.
pub trait Keyed {
    fn key(&self) -> &str;
    fn label(&self) -> &str;
}

/// Id → record map built once per load, used to resolve soft foreign keys
/// (a customer's city id, a line's warehouse id) to display text.
#[derive(Debug, Clone)]
pub struct LookupIndex<T> {
    by_key: HashMap<String, T>,
}

impl<T> Default for LookupIndex<T> {
    fn default() -> Self {
        Self {
            by_key: HashMap::new(),
        }
    }
}

impl<T: Keyed + Clone> LookupIndex<T> {
    pub fn build(items: &[T]) -> Self {
        let by_key = items
            .iter()
            .map(|item| (item.key().to_string(), item.clone()))
            .collect();
        Self { by_key }
    }

    pub fn get(&self, key: Option<&str>) -> Option<&T> {
        key.filter(|k| !k.is_empty())
            .and_then(|k| self.by_key.get(k))
    }

    /// Display label for `key`; empty when the key is blank or unknown.
    pub fn describe(&self, key: Option<&str>) -> String {
        self.get(key)
            .map(|item| item.label().to_string())
            .unwrap_or_default()
    }

    /// Like [`describe`](Self::describe) but shows the raw key when it is
    /// not in the index.
    pub fn describe_or_key(&self, key: Option<&str>) -> String {
        match key.filter(|k| !k.is_empty()) {
            None => String::new(),
            Some(k) => self
                .by_key
                .get(k)
                .map(|item| item.label().to_string())
                .unwrap_or_else(|| k.to_string()),
        }
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Row(&'static str, &'static str);

    impl Keyed for Row {
        fn key(&self) -> &str {
            self.0
        }
        fn label(&self) -> &str {
            self.1
        }
    }

    #[test]
    fn resolves_known_keys() {
        let index = LookupIndex::build(&[Row("c1", "Jakarta"), Row("c2", "Bandung")]);

        assert_eq!(index.describe(Some("c2")), "Bandung");
        assert_eq!(index.describe(Some("zz")), "");
        assert_eq!(index.describe(None), "");
        assert_eq!(index.describe_or_key(Some("zz")), "zz");
        assert_eq!(index.describe_or_key(Some("")), "");
        assert_eq!(index.len(), 2);
    }
}
