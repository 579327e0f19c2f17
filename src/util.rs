//! Small helpers that come up around canonical maps.

/// Uppercases the first character of `s`.
///
/// Unicode aware: a first character whose uppercase form spans several
/// characters (such as `ß`) expands accordingly.
///
/// # Examples
///
/// ```rust
/// use serde_canonical::util::uc_first;
///
/// assert_eq!(uc_first("this is a test."), "This is a test.");
/// assert_eq!(uc_first("élan"), "Élan");
/// assert_eq!(uc_first(""), "");
/// ```
#[must_use]
pub fn uc_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Returns `true` if `needle` is an element of `haystack`.
#[inline]
#[must_use]
pub fn in_array<T: PartialEq>(needle: &T, haystack: &[T]) -> bool {
    haystack.contains(needle)
}

/// Collects the keys of any map-like iterable, in its iteration order.
///
/// # Examples
///
/// ```rust
/// use serde_canonical::util::map_keys;
/// use std::collections::BTreeMap;
///
/// let map = BTreeMap::from([("a", 1), ("b", 2)]);
/// assert_eq!(map_keys(&map), vec![&"a", &"b"]);
/// ```
pub fn map_keys<'a, K: 'a, V: 'a, M>(map: M) -> Vec<&'a K>
where
    M: IntoIterator<Item = (&'a K, &'a V)>,
{
    map.into_iter().map(|(key, _)| key).collect()
}

/// Collects the values of any map-like iterable, in its iteration order.
pub fn map_values<'a, K: 'a, V: 'a, M>(map: M) -> Vec<&'a V>
where
    M: IntoIterator<Item = (&'a K, &'a V)>,
{
    map.into_iter().map(|(_, value)| value).collect()
}

/// Returns the bare name of `T`: no module path, generic parameters or
/// leading references. Unnamed types (tuples, arrays, slices) yield `""`.
///
/// # Examples
///
/// ```rust
/// use serde_canonical::util::type_name_of;
///
/// assert_eq!(type_name_of::<std::collections::HashMap<String, u8>>(), "HashMap");
/// assert_eq!(type_name_of::<&String>(), "String");
/// assert_eq!(type_name_of::<(u8, String)>(), "");
/// ```
#[must_use]
pub fn type_name_of<T: ?Sized>() -> &'static str {
    short_type_name(std::any::type_name::<T>())
}

/// Like [`type_name_of`], for the type of a value.
#[must_use]
pub fn type_name_of_val<T: ?Sized>(_value: &T) -> &'static str {
    type_name_of::<T>()
}

fn short_type_name(full: &'static str) -> &'static str {
    let mut name = full.trim_start_matches('&');
    if let Some(rest) = name.strip_prefix("mut ") {
        name = rest;
    }
    if name.starts_with('(') || name.starts_with('[') {
        return "";
    }
    let name = name.split('<').next().unwrap_or(name);
    name.rsplit("::").next().unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_uc_first() {
        assert_eq!(uc_first("hello"), "Hello");
        assert_eq!(uc_first("Hello"), "Hello");
        assert_eq!(uc_first("ßtraße"), "SStraße");
        assert_eq!(uc_first("1abc"), "1abc");
    }

    #[test]
    fn test_in_array() {
        let colors = ["red", "green", "blue"];
        assert!(in_array(&"red", &colors));
        assert!(!in_array(&"yellow", &colors));

        let numbers = [3, -2];
        assert!(in_array(&-2, &numbers));
        assert!(!in_array(&0, &numbers));
    }

    #[test]
    fn test_map_keys_and_values() {
        let mut map = HashMap::new();
        map.insert("a", 1);
        map.insert("b", 2);

        let mut keys = map_keys(&map);
        keys.sort();
        assert_eq!(keys, vec![&"a", &"b"]);

        let mut values = map_values(&map);
        values.sort();
        assert_eq!(values, vec![&1, &2]);
    }

    #[test]
    fn test_type_names() {
        struct Logger;
        assert_eq!(type_name_of::<Logger>(), "Logger");
        assert_eq!(type_name_of_val(&&Logger), "Logger");
        assert_eq!(type_name_of::<&mut Vec<u8>>(), "Vec");
        assert_eq!(type_name_of::<u32>(), "u32");
        assert_eq!(type_name_of::<HashMap<Vec<u8>, (u8, u8)>>(), "HashMap");
    }

    #[test]
    fn test_unnamed_type_names_are_empty() {
        assert_eq!(type_name_of::<(i32, String)>(), "");
        assert_eq!(type_name_of::<[String; 2]>(), "");
        assert_eq!(type_name_of::<[String]>(), "");
        assert_eq!(type_name_of_val(&&[1u8, 2][..]), "");
        assert_eq!(type_name_of::<()>(), "");
    }
}
