//! Advisories collected during a run.
//!
//! Missing collections, modes or tokens never stop generation; each one
//! becomes a [`Warning`] next to whatever files could still be produced.

use std::fmt;

use figcss_tokens::SpaceSkip;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    MissingCollection {
        collection: String,
    },
    MissingDesktopMode {
        collection: String,
        mode: String,
    },
    MissingMobileMode {
        collection: String,
        mode: String,
    },
    NoSpaceVariables {
        prefix: String,
    },
    NoTextStyles {
        desktop: String,
        mobile: String,
    },
    NoDesktopTextStyles {
        desktop: String,
    },
    NoMobileTextStyles {
        mobile: String,
    },
    TextStyleCountMismatch {
        mobile: usize,
        desktop: usize,
    },
    DuplicateSpace {
        name: String,
        variable: String,
    },
    MissingSpaceValue {
        variable: String,
        mode: String,
    },
}

impl From<SpaceSkip> for Warning {
    fn from(skip: SpaceSkip) -> Self {
        match skip {
            SpaceSkip::Duplicate { name, variable } => Warning::DuplicateSpace { name, variable },
            SpaceSkip::MissingValue { variable, mode } => {
                Warning::MissingSpaceValue { variable, mode }
            }
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::MissingCollection { collection } => {
                write!(f, "No \"{collection}\" collection found")
            }
            Warning::MissingDesktopMode { collection, mode } => write!(
                f,
                "No \"{mode}\" (desktop) mode found in \"{collection}\" collection"
            ),
            Warning::MissingMobileMode { collection, mode } => write!(
                f,
                "No \"{mode}\" (mobile) mode found in \"{collection}\" collection"
            ),
            Warning::NoSpaceVariables { prefix } => {
                write!(f, "No \"{prefix}*\" variables found")
            }
            Warning::NoTextStyles { desktop, mobile } => {
                write!(f, "No \"{desktop}/*\", \"{mobile}/*\" text styles found")
            }
            Warning::NoDesktopTextStyles { desktop } => {
                write!(f, "No \"{desktop}/*\" (desktop) text styles found")
            }
            Warning::NoMobileTextStyles { mobile } => {
                write!(f, "No \"{mobile}/*\" (mobile) text styles found")
            }
            Warning::TextStyleCountMismatch { mobile, desktop } => write!(
                f,
                "There is a different number of text styles for mobile ({mobile}) and desktop ({desktop})"
            ),
            Warning::DuplicateSpace { name, variable } => write!(
                f,
                "Duplicate spacing token \"{name}\" from variable \"{variable}\" ignored"
            ),
            Warning::MissingSpaceValue { variable, mode } => write!(
                f,
                "Variable \"{variable}\" has no numeric value for the \"{mode}\" mode"
            ),
        }
    }
}
