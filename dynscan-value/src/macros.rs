/// Builds a [`Value`](crate::Value) from JSON-like syntax.
///
/// Object keys must be string literals. Anything that is not `null`, an
/// array or an object is an expression converted with `Value::from`.
///
/// ```
/// use dynscan_value::{Value, value};
///
/// let limit = 10;
/// let v = value!({
///     "name": "dynscan",
///     "limits": [limit, -1, null],
///     "nested": { "enabled": true }
/// });
/// assert_eq!(v.get("limits").and_then(Value::as_array).map(<[_]>::len), Some(3));
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };
    ([]) => {
        $crate::Value::Array(::std::vec::Vec::new())
    };
    ([ $($tt:tt)+ ]) => {{
        let mut array = ::std::vec::Vec::new();
        $crate::__value_items!(@array array $($tt)+);
        $crate::Value::Array(array)
    }};
    ({}) => {
        $crate::Value::Object($crate::Object::new())
    };
    ({ $($tt:tt)+ }) => {{
        let mut object = $crate::Object::new();
        $crate::__value_items!(@object object $($tt)+);
        $crate::Value::Object(object)
    }};
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __value_items {
    (@array $array:ident) => {};
    (@array $array:ident null , $($rest:tt)*) => {
        $array.push($crate::Value::Null);
        $crate::__value_items!(@array $array $($rest)*);
    };
    (@array $array:ident null) => {
        $array.push($crate::Value::Null);
    };
    (@array $array:ident [ $($inner:tt)* ] , $($rest:tt)*) => {
        $array.push($crate::value!([ $($inner)* ]));
        $crate::__value_items!(@array $array $($rest)*);
    };
    (@array $array:ident [ $($inner:tt)* ]) => {
        $array.push($crate::value!([ $($inner)* ]));
    };
    (@array $array:ident { $($inner:tt)* } , $($rest:tt)*) => {
        $array.push($crate::value!({ $($inner)* }));
        $crate::__value_items!(@array $array $($rest)*);
    };
    (@array $array:ident { $($inner:tt)* }) => {
        $array.push($crate::value!({ $($inner)* }));
    };
    (@array $array:ident $item:expr , $($rest:tt)*) => {
        $array.push($crate::Value::from($item));
        $crate::__value_items!(@array $array $($rest)*);
    };
    (@array $array:ident $item:expr) => {
        $array.push($crate::Value::from($item));
    };

    (@object $object:ident) => {};
    (@object $object:ident $key:literal : null , $($rest:tt)*) => {
        $object.insert(::std::string::String::from($key), $crate::Value::Null);
        $crate::__value_items!(@object $object $($rest)*);
    };
    (@object $object:ident $key:literal : null) => {
        $object.insert(::std::string::String::from($key), $crate::Value::Null);
    };
    (@object $object:ident $key:literal : [ $($inner:tt)* ] , $($rest:tt)*) => {
        $object.insert(::std::string::String::from($key), $crate::value!([ $($inner)* ]));
        $crate::__value_items!(@object $object $($rest)*);
    };
    (@object $object:ident $key:literal : [ $($inner:tt)* ]) => {
        $object.insert(::std::string::String::from($key), $crate::value!([ $($inner)* ]));
    };
    (@object $object:ident $key:literal : { $($inner:tt)* } , $($rest:tt)*) => {
        $object.insert(::std::string::String::from($key), $crate::value!({ $($inner)* }));
        $crate::__value_items!(@object $object $($rest)*);
    };
    (@object $object:ident $key:literal : { $($inner:tt)* }) => {
        $object.insert(::std::string::String::from($key), $crate::value!({ $($inner)* }));
    };
    (@object $object:ident $key:literal : $item:expr , $($rest:tt)*) => {
        $object.insert(::std::string::String::from($key), $crate::Value::from($item));
        $crate::__value_items!(@object $object $($rest)*);
    };
    (@object $object:ident $key:literal : $item:expr) => {
        $object.insert(::std::string::String::from($key), $crate::Value::from($item));
    };
}
