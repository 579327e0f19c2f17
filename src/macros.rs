/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Arrays become index-keyed maps, exactly as conversion would produce them.
///
/// ```rust
/// use serde_canonical::{canonical, Value};
///
/// let tree = canonical!({
///     "name": "Alice",
///     "tags": ["go", "dev"]
/// });
///
/// let map = tree.as_map().unwrap();
/// assert_eq!(map.pointer(&["tags", "1"]), Some(&Value::from("dev")));
/// ```
#[macro_export]
macro_rules! canonical {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::Map($crate::CanonicalMap::new())
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {{
        let mut map = $crate::CanonicalMap::new();
        let mut index = 0usize;
        $(
            map.insert(index.to_string(), $crate::canonical!($elem));
            index += 1;
        )*
        let _ = index;
        $crate::Value::Map(map)
    }};

    // Handle empty object
    ({}) => {
        $crate::Value::Map($crate::CanonicalMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut map = $crate::CanonicalMap::new();
        $(
            map.insert($key.to_string(), $crate::canonical!($value));
        )*
        $crate::Value::Map(map)
    }};

    // Any other expression convertible into a leaf
    ($s:expr) => {
        $crate::Value::from($s)
    };
}

#[cfg(test)]
mod tests {
    use crate::{CanonicalMap, Number, Value};

    #[test]
    fn test_canonical_macro_primitives() {
        assert_eq!(canonical!(null), Value::Null);
        assert_eq!(canonical!(true), Value::Bool(true));
        assert_eq!(canonical!(42), Value::Number(Number::Integer(42)));
        assert_eq!(canonical!(3.5), Value::Number(Number::Float(3.5)));
        assert_eq!(canonical!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_canonical_macro_arrays_are_index_keyed() {
        assert_eq!(canonical!([]), Value::Map(CanonicalMap::new()));

        let arr = canonical!([10, 20, 30]);
        let map = arr.as_map().unwrap();
        assert_eq!(map.len(), 3);
        assert_eq!(map.get("0"), Some(&Value::from(10)));
        assert_eq!(map.get("2"), Some(&Value::from(30)));
    }
}
