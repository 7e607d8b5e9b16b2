use std::fmt;

use crate::codec::{IdentifierCodec, Tier, SIGIL};
use crate::SieveError;

/// A star that passed validation, in canonical `~name` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parent(String);

impl Parent {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name without the sigil, used for directory names.
    pub fn bare(&self) -> &str {
        self.0.strip_prefix(SIGIL).unwrap_or(&self.0)
    }
}

impl fmt::Display for Parent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Accept only well-formed star names.
pub fn validate_parent<C: IdentifierCodec>(codec: &C, input: &str) -> Result<Parent, SieveError> {
    let input = input.trim();
    if !codec.is_valid_identifier(input) {
        return Err(SieveError::Validation("Invalid patp".into()));
    }
    match codec.tier(input) {
        Ok(Tier::Star) => {}
        Ok(tier) => {
            return Err(SieveError::Validation(format!(
                "Must be a star, got a {tier}"
            )))
        }
        Err(_) => return Err(SieveError::Validation("Must be a star".into())),
    }
    let value = codec.to_numeric(input)?;
    Ok(Parent(codec.to_identifier(value)?))
}
