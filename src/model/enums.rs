//
//  perfrepo-client
//  model/enums.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Named Enumerations
//!
//! PerfRepo's JAXB layer writes enumerations by constant name (`LB`, `READ`,
//! `DATE_DESC`, ...) rather than by ordinal. Each enumeration here is a plain
//! discriminant backed by a fixed, ordered token table; the token at index `i`
//! is the wire form of the variant with discriminant `i`.
//!
//! Index 0 of every table is the reserved `Unknown` sentinel. The server never
//! sends it, it is the `Default`, and fields holding it are left out of
//! encoded documents.
//!
//! ## Example
//!
//! ```rust
//! use perfrepo_client::model::{Comparator, WireEnum};
//!
//! assert_eq!(Comparator::LowerBetter.token(), "LB");
//! assert_eq!("HB".parse::<Comparator>().unwrap(), Comparator::HigherBetter);
//! assert!("lb".parse::<Comparator>().is_err());
//! ```

use crate::xml::{Element, ParseError};

/// A closed set of values encoded as fixed uppercase tokens.
pub trait WireEnum: Copy + Sized + 'static {
    /// Enumeration name used in parse errors.
    const KIND: &'static str;

    /// Wire tokens, indexed by discriminant.
    const TOKENS: &'static [&'static str];

    /// Variants, indexed by discriminant.
    const VARIANTS: &'static [Self];

    /// Internal integer value of the variant.
    fn ordinal(self) -> usize;

    /// Wire token of the variant. Total over all variants.
    fn token(self) -> &'static str {
        Self::TOKENS[self.ordinal()]
    }

    /// Looks a variant up by its internal integer value.
    fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::VARIANTS.get(ordinal).copied()
    }

    /// Decodes a wire token.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Token`] naming the input when the token is not
    /// in the table. Matching is exact and case-sensitive.
    fn parse_token(input: &str) -> Result<Self, ParseError> {
        Self::TOKENS
            .iter()
            .position(|token| *token == input)
            .map(|ordinal| Self::VARIANTS[ordinal])
            .ok_or_else(|| ParseError::Token {
                kind: Self::KIND,
                input: input.to_string(),
            })
    }

    /// Whether this is the `Unknown` sentinel.
    fn is_unknown(self) -> bool {
        self.ordinal() == 0
    }
}

/// A `<name>TOKEN</name>` element, or `None` for the `Unknown` sentinel.
pub(crate) fn token_element<E: WireEnum>(name: &str, value: E) -> Option<Element> {
    (!value.is_unknown()).then(|| Element::new(name).with_text(value.token()))
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            /// Reserved zero value; never produced by the server.
            #[default]
            Unknown,
            $( $(#[$vmeta])* $variant, )+
        }

        impl WireEnum for $name {
            const KIND: &'static str = stringify!($name);
            const TOKENS: &'static [&'static str] = &["Unknown", $( $token ),+];
            const VARIANTS: &'static [Self] = &[Self::Unknown, $( Self::$variant ),+];

            fn ordinal(self) -> usize {
                self as usize
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.token())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse_token(s)
            }
        }
    };
}

wire_enum! {
    /// Whether lower or higher measured values are better for a metric.
    Comparator {
        /// Lower is better
        LowerBetter => "LB",
        /// Higher is better
        HigherBetter => "HB",
    }
}

wire_enum! {
    /// Search restriction on the groups whose tests are considered.
    GroupFilter {
        /// Only tests of the caller's groups
        MyGroups => "MY_GROUPS",
        /// Tests of every group
        AllGroups => "ALL_GROUPS",
    }
}

wire_enum! {
    /// Ordering of search results.
    OrderBy {
        DateAsc => "DATE_ASC",
        DateDesc => "DATE_DESC",
        ParameterAsc => "PARAMETER_ASC",
        ParameterDesc => "PARAMETER_DESC",
        VersionAsc => "VERSION_ASC",
        VersionDesc => "VERSION_DESC",
        NameAsc => "NAME_ASC",
        NameDesc => "NAME_DESC",
        UidAsc => "UID_ASC",
        UidDesc => "UID_DESC",
        GroupIdAsc => "GROUP_ID_ASC",
        GroupIdDesc => "GROUP_ID_DESC",
    }
}

wire_enum! {
    /// Kind of access a report permission grants.
    AccessType {
        Read => "READ",
        Write => "WRITE",
    }
}

wire_enum! {
    /// Audience a report permission applies to.
    AccessLevel {
        User => "USER",
        Group => "GROUP",
        Public => "PUBLIC",
    }
}
