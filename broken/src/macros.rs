/// Declares an error kind enumeration and its [`ErrorKind`] impl.
///
/// Each variant may name its parent with `: Parent`, and may be designated as
/// one of the two task wrapper kinds with `=> execution` or `=> completion`.
/// The enum derives `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq` and `Hash`.
///
/// # Example
/// ```rust,ignore
/// broken::error_kinds! {
///     /// Everything our service can fail with.
///     pub enum AppKind {
///         Exception,
///         Runtime: Exception,
///         IllegalArgument: Runtime,
///         Io: Exception,
///         Execution: Exception => execution,
///         Completion: Runtime => completion,
///     }
/// }
///
/// assert!(AppKind::IllegalArgument.is_a(AppKind::Exception));
/// ```
///
/// [`ErrorKind`]: crate::ErrorKind
#[macro_export]
macro_rules! error_kinds {
    (@parent $name:ident) => {
        ::core::option::Option::None
    };
    (@parent $name:ident $parent:ident) => {
        ::core::option::Option::Some($name::$parent)
    };
    (@wrapper) => {
        ::core::option::Option::None
    };
    (@wrapper execution) => {
        ::core::option::Option::Some($crate::TaskWrapper::Execution)
    };
    (@wrapper completion) => {
        ::core::option::Option::Some($crate::TaskWrapper::Completion)
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(: $parent:ident)? $(=> $wrapper:ident)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $crate::ErrorKind for $name {
            fn parent(self) -> ::core::option::Option<Self> {
                match self {
                    $( $name::$variant => $crate::error_kinds!(@parent $name $($parent)?), )*
                }
            }

            fn task_wrapper(self) -> ::core::option::Option<$crate::TaskWrapper> {
                match self {
                    $( $name::$variant => $crate::error_kinds!(@wrapper $($wrapper)?), )*
                }
            }
        }
    };
}
