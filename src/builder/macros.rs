//! Macros for label-only states.

/// Declare a fieldless enum that is its own identity.
///
/// Useful when the payload carries nothing beyond the state label.
///
/// # Example
///
/// ```
/// use automaton::core::Identify;
/// use automaton::identity_enum;
///
/// identity_enum! {
///     pub enum Door {
///         Open,
///         Shut,
///         Locked,
///     }
/// }
///
/// assert_eq!(Door::Shut.identify().unwrap(), Door::Shut);
/// assert_eq!(Door::Locked.label(), "Locked");
/// ```
#[macro_export]
macro_rules! identity_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Variant name, for display and logging.
            pub fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl $crate::core::Identify for $name {
            type Id = $name;

            fn identify(&self) -> ::std::result::Result<$name, $crate::core::IdentityError> {
                ::std::result::Result::Ok(*self)
            }
        }
    };
}
