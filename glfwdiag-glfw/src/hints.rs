//! Context creation hints for the test window.

use glfw::{ContextRobustnessHint, Glfw, OpenGlProfileHint, WindowHint};
use std::{error, fmt, str::FromStr};

/// Requested OpenGL profile.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Profile {
  /// Let the driver decide.
  Any,
  /// Core profile.
  Core,
  /// Compatibility profile.
  Compat,
}

/// Requested robustness strategy.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Robustness {
  /// No reset notification.
  None,
  /// Lose the context on reset.
  Lose,
}

/// Error returned when parsing a [`Profile`] or a [`Robustness`] from a string.
#[derive(Debug, Eq, PartialEq)]
pub struct HintParseError {
  kind: &'static str,
  input: String,
}

impl fmt::Display for HintParseError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "unknown {}: {}", self.kind, self.input)
  }
}

impl error::Error for HintParseError {}

impl FromStr for Profile {
  type Err = HintParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "any" => Ok(Profile::Any),
      "core" => Ok(Profile::Core),
      "compat" => Ok(Profile::Compat),
      _ => Err(HintParseError {
        kind: "profile",
        input: s.to_owned(),
      }),
    }
  }
}

impl FromStr for Robustness {
  type Err = HintParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "none" => Ok(Robustness::None),
      "lose" => Ok(Robustness::Lose),
      _ => Err(HintParseError {
        kind: "robustness strategy",
        input: s.to_owned(),
      }),
    }
  }
}

/// Hints used when creating the test window.
///
/// Feel free to look at the different methods available to tweak the hints. You may want to start
/// with `default()` though, which leaves every GLFW default untouched.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ContextHints {
  version: Option<(u32, u32)>,
  profile: Option<Profile>,
  forward_compat: bool,
  debug: bool,
  robustness: Option<Robustness>,
}

impl ContextHints {
  /// Request a given `major.minor` context version.
  #[inline]
  pub fn set_version<V>(self, version: V) -> Self
  where
    V: Into<Option<(u32, u32)>>,
  {
    ContextHints {
      version: version.into(),
      ..self
    }
  }

  /// Requested context version, if any.
  #[inline]
  pub fn version(&self) -> Option<(u32, u32)> {
    self.version
  }

  /// Request a given profile.
  #[inline]
  pub fn set_profile<P>(self, profile: P) -> Self
  where
    P: Into<Option<Profile>>,
  {
    ContextHints {
      profile: profile.into(),
      ..self
    }
  }

  /// Requested profile, if any.
  #[inline]
  pub fn profile(&self) -> Option<Profile> {
    self.profile
  }

  /// Request a forward-compatible context.
  #[inline]
  pub fn set_forward_compat(self, forward_compat: bool) -> Self {
    ContextHints {
      forward_compat,
      ..self
    }
  }

  /// Whether a forward-compatible context is requested.
  #[inline]
  pub fn forward_compat(&self) -> bool {
    self.forward_compat
  }

  /// Request a debug context.
  #[inline]
  pub fn set_debug(self, debug: bool) -> Self {
    ContextHints { debug, ..self }
  }

  /// Whether a debug context is requested.
  #[inline]
  pub fn debug(&self) -> bool {
    self.debug
  }

  /// Request a robustness strategy.
  #[inline]
  pub fn set_robustness<R>(self, robustness: R) -> Self
  where
    R: Into<Option<Robustness>>,
  {
    ContextHints {
      robustness: robustness.into(),
      ..self
    }
  }

  /// Requested robustness strategy, if any.
  #[inline]
  pub fn robustness(&self) -> Option<Robustness> {
    self.robustness
  }

  /// GLFW window hints matching these context hints.
  ///
  /// Only what was explicitly requested yields a hint.
  pub fn window_hints(&self) -> Vec<WindowHint> {
    let mut hints = Vec::new();

    if let Some((major, minor)) = self.version {
      hints.push(WindowHint::ContextVersion(major, minor));
    }

    if let Some(profile) = self.profile {
      let profile = match profile {
        Profile::Any => OpenGlProfileHint::Any,
        Profile::Core => OpenGlProfileHint::Core,
        Profile::Compat => OpenGlProfileHint::Compat,
      };
      hints.push(WindowHint::OpenGlProfile(profile));
    }

    if self.forward_compat {
      hints.push(WindowHint::OpenGlForwardCompat(true));
    }

    if self.debug {
      hints.push(WindowHint::OpenGlDebugContext(true));
    }

    if let Some(robustness) = self.robustness {
      let robustness = match robustness {
        Robustness::None => ContextRobustnessHint::NoResetNotification,
        Robustness::Lose => ContextRobustnessHint::LoseContextOnReset,
      };
      hints.push(WindowHint::ContextRobustness(robustness));
    }

    hints
  }

  /// Reset GLFW window hints to their defaults, then apply these hints.
  pub(crate) fn apply(&self, glfw: &mut Glfw) {
    glfw.default_window_hints();

    for hint in self.window_hints() {
      log::debug!("window hint: {:?}", hint);
      glfw.window_hint(hint);
    }
  }
}

/// Parse a `major.minor` context version, such as `3.3`.
pub fn parse_version(s: &str) -> Result<(u32, u32), HintParseError> {
  let err = || HintParseError {
    kind: "context version",
    input: s.to_owned(),
  };

  let (major, minor) = s.split_once('.').ok_or_else(err)?;
  let major = major.parse().map_err(|_| err())?;
  let minor = minor.parse().map_err(|_| err())?;

  Ok((major, minor))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_hints_are_empty() {
    assert!(ContextHints::default().window_hints().is_empty());
  }

  #[test]
  fn requested_hints() {
    let hints = ContextHints::default()
      .set_version((3, 3))
      .set_profile(Profile::Core)
      .set_forward_compat(true)
      .set_robustness(Robustness::Lose);

    assert_eq!(hints.version(), Some((3, 3)));
    assert_eq!(hints.profile(), Some(Profile::Core));
    assert!(hints.forward_compat());
    assert!(!hints.debug());
    assert_eq!(hints.window_hints().len(), 4);
  }

  #[test]
  fn parse_profiles_and_strategies() {
    assert_eq!("core".parse(), Ok(Profile::Core));
    assert_eq!("compat".parse(), Ok(Profile::Compat));
    assert_eq!("any".parse(), Ok(Profile::Any));
    assert!("es".parse::<Profile>().is_err());

    assert_eq!("none".parse(), Ok(Robustness::None));
    assert_eq!("lose".parse(), Ok(Robustness::Lose));
    assert_eq!(
      "reset".parse::<Robustness>().unwrap_err().to_string(),
      "unknown robustness strategy: reset"
    );
  }

  #[test]
  fn parse_versions() {
    assert_eq!(parse_version("3.3"), Ok((3, 3)));
    assert_eq!(parse_version("4.6"), Ok((4, 6)));
    assert!(parse_version("4").is_err());
    assert!(parse_version("4.x").is_err());
    assert!(parse_version("").is_err());
  }
}
