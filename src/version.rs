use crate::domain::ShortVersion;
use crate::error::{ReleaseDateError, Result};
use regex::Regex;

/// Default pattern stripped from the front of tag names before parsing
pub const DEFAULT_TAG_PREFIX: &str = "[vV]";

/// Classifies tag names as stable `major.minor` releases.
///
/// A name that does not parse is simply not a stable release tag; parsing
/// never fails with an error.
pub trait VersionTagParser {
    /// Parse `name` into its major/minor pair, if it names a stable release
    fn try_parse_major_minor(&self, name: &str) -> Option<ShortVersion>;

    fn is_stable(&self, name: &str) -> bool {
        self.try_parse_major_minor(name).is_some()
    }
}

/// Parser accepting `M.m` and `M.m.0`, optionally behind a tag prefix.
///
/// Three-part names go through [`semver::Version`], so anything carrying
/// pre-release or build metadata is rejected, as is any non-zero patch.
#[derive(Debug, Clone)]
pub struct ShortVersionParser {
    prefix: Option<Regex>,
}

impl ShortVersionParser {
    /// Parser that only accepts bare version numbers
    pub fn without_prefix() -> Self {
        ShortVersionParser { prefix: None }
    }

    /// Parser stripping a leading match of `pattern` (a regex) from tag names.
    /// An empty pattern disables prefix handling.
    pub fn with_prefix(pattern: &str) -> Result<Self> {
        if pattern.is_empty() {
            return Ok(Self::without_prefix());
        }

        let prefix = Regex::new(&format!("^(?:{})", pattern)).map_err(|e| {
            ReleaseDateError::config(format!("Invalid tag prefix '{}': {}", pattern, e))
        })?;

        Ok(ShortVersionParser {
            prefix: Some(prefix),
        })
    }

    fn strip_prefix<'a>(&self, name: &'a str) -> &'a str {
        match self.prefix.as_ref().and_then(|re| re.find(name)) {
            Some(m) => &name[m.end()..],
            None => name,
        }
    }
}

impl Default for ShortVersionParser {
    fn default() -> Self {
        ShortVersionParser {
            prefix: Regex::new(&format!("^(?:{})", DEFAULT_TAG_PREFIX)).ok(),
        }
    }
}

impl VersionTagParser for ShortVersionParser {
    fn try_parse_major_minor(&self, name: &str) -> Option<ShortVersion> {
        let version = self.strip_prefix(name);
        let parts: Vec<&str> = version.split('.').collect();

        match parts.as_slice() {
            [major, minor] => Some(ShortVersion::new(
                parse_component(major)?,
                parse_component(minor)?,
            )),
            [_, _, _] => {
                let parsed = semver::Version::parse(version).ok()?;
                if !parsed.pre.is_empty() || !parsed.build.is_empty() || parsed.patch != 0 {
                    return None;
                }
                Some(ShortVersion::new(
                    u32::try_from(parsed.major).ok()?,
                    u32::try_from(parsed.minor).ok()?,
                ))
            }
            _ => None,
        }
    }
}

/// Plain decimal component: digits only, no sign, no leading zeros
fn parse_component(part: &str) -> Option<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if part.len() > 1 && part.starts_with('0') {
        return None;
    }
    part.parse::<u32>().ok()
}
