#[macro_export]
macro_rules! element_kind_registry_entries {
    ($macro:ident $(, @args $($args:tt)+ )?) => {
        $macro! {
            $(
                @args $($args)+;
            )?
            @entries
            (
                Int64,
                Integral,
                label = "Int64",
                is_floating = false,
                supports_tolerance = false
            ),
            (
                Int32,
                Integral,
                label = "Int32",
                is_floating = false,
                supports_tolerance = false
            ),
            (
                Int16,
                Integral,
                label = "Int16",
                is_floating = false,
                supports_tolerance = false
            ),
            (
                Int8,
                Integral,
                label = "Int8",
                is_floating = false,
                supports_tolerance = false
            ),
            (
                Float64,
                Floating,
                label = "Float64",
                is_floating = true,
                supports_tolerance = true
            ),
            (
                Float32,
                Floating,
                label = "Float32",
                is_floating = true,
                supports_tolerance = true
            ),
            (
                Bool,
                Bool,
                label = "Bool",
                is_floating = false,
                supports_tolerance = false
            ),
            (
                Char,
                Char,
                label = "Char",
                is_floating = false,
                supports_tolerance = false
            ),
            (
                Reference,
                Reference,
                label = "Reference",
                is_floating = false,
                supports_tolerance = false
            ),
        }
    };
}

#[macro_export]
macro_rules! element_kind_registry {
    ($macro:ident) => {
        $crate::element_kind_registry_entries!($macro)
    };
    ($macro:ident, $($args:tt)+) => {
        $crate::element_kind_registry_entries!($macro, @args $($args)+)
    };
}

macro_rules! metadata_from_registry {
    ( @args $kind:expr; @entries $( ($variant:ident, $family:ident, label = $label:expr, is_floating = $is_floating:expr, supports_tolerance = $supports_tolerance:expr) ),* $(,)? ) => {
        match $kind {
            $(
                $crate::ElementKind::$variant => $crate::ElementMetadata {
                    family: $crate::ElementFamily::$family,
                    label: $label,
                    is_floating: $is_floating,
                    supports_tolerance: $supports_tolerance,
                },
            )*
        }
    };
}

macro_rules! all_kinds_from_registry {
    ( @entries $( ($variant:ident, $family:ident, label = $label:expr, is_floating = $is_floating:expr, supports_tolerance = $supports_tolerance:expr) ),* $(,)? ) => {
        [ $( $crate::ElementKind::$variant ),* ]
    };
}
