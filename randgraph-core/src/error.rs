//! Error types for the randgraph core library.
//!
//! Defines the configuration and generation error enums exposed by the public
//! API, their stable machine-readable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Reasons a generator configuration is infeasible.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ConfigError {
    /// The node universe is too small to hold a single edge.
    #[error("at least {minimum} nodes are required (got {nodes})")]
    TooFewNodes {
        /// Number of nodes supplied by the caller.
        nodes: usize,
        /// Smallest node count that admits an edge.
        minimum: usize,
    },
    /// The configuration asked for zero edges.
    #[error("number of edges must be at least 1")]
    NoEdgesRequested,
    /// More edges were requested than a simple graph on the node set can hold.
    #[error("requested {requested} edges but a simple graph on these nodes holds at most {maximum}")]
    TooManyEdges {
        /// Edge count supplied by the caller.
        requested: u64,
        /// Maximum number of distinct undirected, loop-free edges.
        maximum: u128,
    },
    /// Pipeline batch size must be positive.
    #[error("batch size must be at least 1")]
    ZeroBatchSize,
}

define_error_codes! {
    /// Stable codes describing [`ConfigError`] variants.
    enum ConfigErrorCode for ConfigError {
        /// The node universe is too small to hold a single edge.
        TooFewNodes => TooFewNodes { .. } => "CONFIG_TOO_FEW_NODES",
        /// The configuration asked for zero edges.
        NoEdgesRequested => NoEdgesRequested => "CONFIG_NO_EDGES_REQUESTED",
        /// More edges were requested than the node set can hold.
        TooManyEdges => TooManyEdges { .. } => "CONFIG_TOO_MANY_EDGES",
        /// Pipeline batch size must be positive.
        ZeroBatchSize => ZeroBatchSize => "CONFIG_ZERO_BATCH_SIZE",
    }
}

/// Error type produced when running a [`crate::RelationshipGenerator`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GeneratorError {
    /// The generator refused to run on an infeasible configuration.
    #[error("invalid generator configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    /// The sampler exhausted its attempt budget before reaching the target.
    #[error(
        "generation did not converge: accepted {accepted} of {target} edges after {attempts} draws"
    )]
    NotConverged {
        /// Number of edges requested.
        target: u64,
        /// Number of distinct edges accepted before giving up.
        accepted: u64,
        /// Number of random draws performed.
        attempts: u64,
    },
    /// The requested edge count cannot be addressed on this platform.
    #[error("cannot hold {requested} edges in memory on this platform")]
    CapacityOverflow {
        /// Edge count that overflowed `usize`.
        requested: u64,
    },
}

define_error_codes! {
    /// Stable codes describing [`GeneratorError`] variants.
    enum GeneratorErrorCode for GeneratorError {
        /// The generator refused to run on an infeasible configuration.
        InvalidConfiguration => InvalidConfiguration(..) => "GENERATOR_INVALID_CONFIGURATION",
        /// The sampler exhausted its attempt budget before reaching the target.
        NotConverged => NotConverged { .. } => "GENERATOR_NOT_CONVERGED",
        /// The requested edge count cannot be addressed on this platform.
        CapacityOverflow => CapacityOverflow { .. } => "GENERATOR_CAPACITY_OVERFLOW",
    }
}

impl GeneratorError {
    /// Retrieve the inner [`ConfigErrorCode`] when the generator rejected its
    /// configuration.
    #[must_use]
    pub const fn config_code(&self) -> Option<ConfigErrorCode> {
        match self {
            Self::InvalidConfiguration(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GeneratorError>;
