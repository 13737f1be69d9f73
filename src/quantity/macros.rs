/// Defines an `f64` newtype for a metered quantity displayed with a unit suffix.
///
/// Equality and ordering go through [`ordered_float::OrderedFloat`],
/// so the quantities can live inside `Eq` structs and be compared in tables.
macro_rules! quantity {
    ($name:ident, $unit:literal) => {
        #[repr(transparent)]
        #[derive(
            Clone,
            Copy,
            ::derive_more::Add,
            ::derive_more::AddAssign,
            ::derive_more::Sum,
            ::serde::Deserialize,
            ::serde::Serialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub f64);

        impl $name {
            pub const UNIT: &'static str = $unit;

            #[must_use]
            pub const fn zero() -> Self {
                Self(0.0)
            }

            fn ordered(self) -> ::ordered_float::OrderedFloat<f64> {
                ::ordered_float::OrderedFloat(self.0)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                // Forward precision and width to the number only.
                ::std::fmt::Display::fmt(&self.0, f)?;
                write!(f, " {}", Self::UNIT)
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{:?}{}", self.0, Self::UNIT)
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.ordered() == other.ordered()
            }
        }

        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<::std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> ::std::cmp::Ordering {
                self.ordered().cmp(&other.ordered())
            }
        }
    };
}
