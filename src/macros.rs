//! The [`yamlet!`] macro for building document values inline.

/// Builds a [`Value`](crate::Value) from JSON-like syntax, plus the
/// format's own spellings: `undefined`, `NaN`, and `Infinity`.
///
/// # Examples
///
/// ```rust
/// use yamlet::{yamlet, Value};
///
/// let doc = yamlet!({
///     "name": "Alice",
///     "retries": 3,
///     "timeout": Infinity,
///     "tags": ["admin", 42]
/// });
///
/// let map = doc.as_map().unwrap();
/// assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
/// assert_eq!(map.get("timeout"), Some(&Value::Infinity));
/// ```
#[macro_export]
macro_rules! yamlet {
    (null) => {
        $crate::Value::Null
    };

    (undefined) => {
        $crate::Value::Undefined
    };

    (NaN) => {
        $crate::Value::NaN
    };

    (Infinity) => {
        $crate::Value::Infinity
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::List(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::List(vec![$($crate::yamlet!($elem)),*])
    };

    ({}) => {
        $crate::Value::Map($crate::DocMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut map = $crate::DocMap::new();
        $(
            map.insert($key.to_string(), $crate::yamlet!($value));
        )*
        $crate::Value::Map(map)
    }};

    // Fallback for expressions: anything with a From<T> conversion
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{DocMap, Value};

    #[test]
    fn test_macro_primitives() {
        assert_eq!(yamlet!(null), Value::Null);
        assert_eq!(yamlet!(undefined), Value::Undefined);
        assert_eq!(yamlet!(NaN), Value::NaN);
        assert_eq!(yamlet!(Infinity), Value::Infinity);
        assert_eq!(yamlet!(true), Value::Bool(true));
        assert_eq!(yamlet!(false), Value::Bool(false));
        assert_eq!(yamlet!(42), Value::Number(42.0));
        assert_eq!(yamlet!(3.5), Value::Number(3.5));
        assert_eq!(yamlet!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_macro_lists() {
        assert_eq!(yamlet!([]), Value::List(vec![]));

        let list = yamlet!([1, 2, 3]);
        assert_eq!(
            list,
            Value::List(vec![
                Value::Number(1.0),
                Value::Number(2.0),
                Value::Number(3.0),
            ])
        );
    }

    #[test]
    fn test_macro_maps() {
        assert_eq!(yamlet!({}), Value::Map(DocMap::new()));

        let doc = yamlet!({
            "name": "Alice",
            "age": 30
        });

        match doc {
            Value::Map(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(map.get("name"), Some(&Value::String("Alice".to_string())));
                assert_eq!(map.get("age"), Some(&Value::Number(30.0)));
            }
            _ => panic!("Expected map"),
        }
    }

    #[test]
    fn test_macro_nesting() {
        let doc = yamlet!({
            "server": {
                "host": "localhost",
                "tags": ["primary", NaN]
            }
        });

        let server = doc.as_map().unwrap().get("server").unwrap();
        let tags = server.as_map().unwrap().get("tags").unwrap();
        assert_eq!(
            tags,
            &Value::List(vec![Value::String("primary".to_string()), Value::NaN])
        );
    }
}
