//! The fixed set of methods exposed by the playground counter contract.
//!
//! The registry is intentionally closed: the playground targets one known
//! contract interface, so methods are a tagged-variant set resolved once at
//! lookup time instead of ad hoc string branching in the controller.

/// A supported contract method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    GetCount,
    Increment,
    Decrement,
    SetCount,
}

/// Whether calling a method alters on-chain state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutability {
    /// No state change, no signature needed.
    Read,
    /// Alters state, requires a signature and a confirmation.
    Write,
}

/// Primitive type of a method parameter or return value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    Uint256,
}

/// A named method parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    pub name: &'static str,
    pub kind: ParamType,
}

impl Method {
    pub const ALL: [Self; 4] = [
        Self::GetCount,
        Self::Increment,
        Self::Decrement,
        Self::SetCount,
    ];

    /// Resolves a user-supplied method name against the registry.
    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|method| method.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::GetCount => "get_count",
            Self::Increment => "increment",
            Self::Decrement => "decrement",
            Self::SetCount => "set_count",
        }
    }

    pub fn mutability(self) -> Mutability {
        match self {
            Self::GetCount => Mutability::Read,
            Self::Increment | Self::Decrement | Self::SetCount => Mutability::Write,
        }
    }

    pub fn params(self) -> &'static [Param] {
        match self {
            Self::SetCount => &[Param {
                name: "value",
                kind: ParamType::Uint256,
            }],
            _ => &[],
        }
    }

    pub fn returns(self) -> &'static [ParamType] {
        match self {
            Self::GetCount => &[ParamType::Uint256],
            _ => &[],
        }
    }

    /// The canonical signature the call selector is derived from.
    pub fn signature(self) -> &'static str {
        match self {
            Self::GetCount => "get_count()",
            Self::Increment => "increment()",
            Self::Decrement => "decrement()",
            Self::SetCount => "set_count(uint256)",
        }
    }
}
