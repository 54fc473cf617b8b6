//! Macro para declarar acciones con poco boilerplate.
//!
//! Exportada en la raíz del crate:
//!   use lightflow_core::action;
//!
//! Las declaraciones de cada tipo generado viven en un `static` perezoso: se
//! construyen una vez, la primera vez que se consultan, y se comparten entre
//! todas las ejecuciones del tipo.

/// Declara un struct que implementa `Action`.
///
/// Formas soportadas:
/// - unit (sin fields):
///   `action! { pub Name { expects: ["a"], promises: ["b"], executed(scope) { .. } } }`
/// - con fields (constructor `new` con los fields en orden):
///   `action! { pub Name { fields { x: T }, expects: [..], promises: [..], executed(me, scope) { .. } } }`
///
/// El cuerpo debe evaluar a `ActionResult`.
#[macro_export]
macro_rules! action {
    // ---------------- Con fields ----------------
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident {
            fields { $($fname:ident : $fty:ty),+ $(,)? },
            expects: [$($exp:expr),* $(,)?],
            promises: [$($prom:expr),* $(,)?],
            executed($self_ident:ident, $scope:ident) $body:block
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        $vis struct $name { $(pub $fname: $fty),+ }

        impl $name {
            pub fn new($($fname : $fty),+) -> Self { Self { $($fname),+ } }
        }

        impl $crate::action::Action for $name {
            fn name(&self) -> &str { stringify!($name) }

            fn declarations(&self) -> &$crate::action::Declarations {
                $crate::__declarations!([$($exp),*], [$($prom),*])
            }

            fn executed(&self, $scope: &mut $crate::action::ActionScope<'_>) -> $crate::action::ActionResult {
                let $self_ident = self;
                $body
            }
        }
    };

    // ---------------- Unit (sin fields) ----------------
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident {
            expects: [$($exp:expr),* $(,)?],
            promises: [$($prom:expr),* $(,)?],
            executed($scope:ident) $body:block
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default)]
        $vis struct $name;

        impl $name {
            pub fn new() -> Self { Self }
        }

        impl $crate::action::Action for $name {
            fn name(&self) -> &str { stringify!($name) }

            fn declarations(&self) -> &$crate::action::Declarations {
                $crate::__declarations!([$($exp),*], [$($prom),*])
            }

            fn executed(&self, $scope: &mut $crate::action::ActionScope<'_>) -> $crate::action::ActionResult {
                $body
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __declarations {
    ([$($exp:expr),*], [$($prom:expr),*]) => {{
        static DECLARATIONS: $crate::__private::Lazy<$crate::action::Declarations> =
            $crate::__private::Lazy::new(|| {
                let expected: ::std::vec::Vec<::std::string::String> =
                    ::std::vec![$(::std::string::String::from($exp)),*];
                let promised: ::std::vec::Vec<::std::string::String> =
                    ::std::vec![$(::std::string::String::from($prom)),*];
                $crate::action::Declarations::new().expects(expected).promises(promised)
            });
        &*DECLARATIONS
    }};
}
