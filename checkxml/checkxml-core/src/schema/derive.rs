//! The [`XmlSchema`] capability trait and the `xml_record!` declarative derive.

use super::TypeDef;

/// Capability implemented by every type usable as a schema: produces the
/// [`TypeDef`] the reconciler walks.
///
/// Implemented here for scalars, `String`, `Vec<T>`, `Option<T>` and
/// `Box<T>`; record types get an implementation from [`xml_record!`].
/// Self-referential records are not supported: building their `TypeDef`
/// does not terminate.
///
/// [`xml_record!`]: crate::xml_record
pub trait XmlSchema {
    fn type_def() -> TypeDef;
}

/// Holder for the document root name. A record field of this type is never
/// matched against document content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlName(pub String);

impl XmlSchema for XmlName {
    fn type_def() -> TypeDef {
        TypeDef::XmlName
    }
}

macro_rules! impl_scalar_schema {
    ($variant:ident: $($ty:ty),+) => {
        $(
            impl XmlSchema for $ty {
                fn type_def() -> TypeDef {
                    TypeDef::$variant
                }
            }
        )+
    };
}

impl_scalar_schema!(Bool: bool);
impl_scalar_schema!(Int: i8, i16, i32, i64, isize);
impl_scalar_schema!(Uint: u8, u16, u32, u64, usize);
impl_scalar_schema!(Float: f32, f64);
impl_scalar_schema!(String: String, char);

impl<T: XmlSchema> XmlSchema for Vec<T> {
    fn type_def() -> TypeDef {
        TypeDef::List(Box::new(T::type_def()))
    }
}

impl<T: XmlSchema> XmlSchema for Option<T> {
    fn type_def() -> TypeDef {
        T::type_def()
    }
}

impl<T: XmlSchema> XmlSchema for Box<T> {
    fn type_def() -> TypeDef {
        T::type_def()
    }
}

/// Declare a struct and derive its [`XmlSchema`] implementation.
///
/// Each field may carry one `#[xml = "..."]` tag annotation. Fields without
/// a visibility modifier are unexported and skipped by the reconciler.
///
/// ```
/// use checkxml_core::{xml_record, XmlName, XmlSchema};
///
/// xml_record! {
///     #[derive(Debug, Default)]
///     pub struct Doc {
///         #[xml = "doc"]
///         pub name: XmlName,
///         #[xml = "e1"]
///         pub e1: String,
///         #[xml = "id,attr"]
///         pub id: Option<u32>,
///         cache: bool,
///     }
/// }
///
/// let ty = Doc::type_def();
/// assert_eq!(ty.type_name(), "Doc");
/// ```
#[macro_export]
macro_rules! xml_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[xml = $tag:literal])?
                $fvis:vis $field:ident : $fty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $( $fvis $field: $fty, )*
        }

        impl $crate::XmlSchema for $name {
            fn type_def() -> $crate::TypeDef {
                $crate::TypeDef::Record($crate::RecordDef::new(
                    stringify!($name),
                    vec![$(
                        $crate::FieldDef::new(
                            stringify!($field),
                            <$fty as $crate::XmlSchema>::type_def(),
                        )
                        $(.with_tag($tag))?
                        .with_exported(!stringify!($fvis).is_empty())
                    ),*],
                ))
            }
        }
    };
}
