use grubmaster_shared::bail;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RosterPolicy {
    /// Use the roster as given, however long.
    #[default]
    Arbitrary,
    /// Pad with placeholders or truncate to exactly this many names.
    Fixed(usize),
}

impl RosterPolicy {
    pub fn fixed(size: usize) -> grubmaster_shared::Result<Self> {
        if size == 0 {
            bail!("fixed roster size must be at least 1");
        }

        Ok(Self::Fixed(size))
    }

    pub fn from_size(size: Option<usize>) -> grubmaster_shared::Result<Self> {
        match size {
            Some(size) => Self::fixed(size),
            None => Ok(Self::Arbitrary),
        }
    }
}

/// Cleans up roster entries: names are trimmed and blanks become `Scout N`,
/// numbered by position.
pub fn prepare_roster<S: AsRef<str>>(names: &[S], policy: RosterPolicy) -> Vec<String> {
    let len = match policy {
        RosterPolicy::Arbitrary => names.len(),
        RosterPolicy::Fixed(size) => size,
    };

    (0..len)
        .map(|pos| {
            let name = names.get(pos).map(|n| n.as_ref().trim()).unwrap_or_default();
            if name.is_empty() {
                placeholder(pos)
            } else {
                name.to_owned()
            }
        })
        .collect()
}

pub(crate) fn placeholder(pos: usize) -> String {
    format!("Scout {}", pos + 1)
}
