// Standard library
use std::fmt;

/// Classification of one lookup against the expected address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    Matched,
    NoAddressesOrError,
    AddressMismatch,
}

impl CheckOutcome {
    pub fn is_matched(&self) -> bool {
        matches!(self, CheckOutcome::Matched)
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckOutcome::Matched => write!(f, "matched"),
            CheckOutcome::NoAddressesOrError => write!(f, "no addresses or error"),
            CheckOutcome::AddressMismatch => write!(f, "address mismatch"),
        }
    }
}
