//! Display names for raw codes.
//!
//! Two vocabularies live here: the values as reported by the OpenGL driver (`gl_*`) and the
//! values as parsed and cached by GLFW (`glfw_*`). They are resolved independently on purpose, so
//! that a report can show both and a human reader can spot disagreements.
//!
//! Unrecognized codes always resolve to [`UNKNOWN`].

/// Fallback name for any code we don’t know about.
pub const UNKNOWN: &str = "unknown";

/// Name of the core profile.
pub const PROFILE_NAME_CORE: &str = "core";
/// Name of the compatibility profile.
pub const PROFILE_NAME_COMPAT: &str = "compat";

/// Name of the “no reset notification” robustness strategy.
pub const STRATEGY_NAME_NONE: &str = "none";
/// Name of the “lose context on reset” robustness strategy.
pub const STRATEGY_NAME_LOSE: &str = "lose";

/// GLFW codes, as returned by window attribute queries.
pub mod glfw {
  /// `GLFW_NO_API`.
  pub const NO_API: i32 = 0;
  /// `GLFW_OPENGL_API`.
  pub const OPENGL_API: i32 = 0x0003_0001;
  /// `GLFW_OPENGL_ES_API`.
  pub const OPENGL_ES_API: i32 = 0x0003_0002;

  /// `GLFW_NO_ROBUSTNESS`.
  pub const NO_ROBUSTNESS: i32 = 0;
  /// `GLFW_NO_RESET_NOTIFICATION`.
  pub const NO_RESET_NOTIFICATION: i32 = 0x0003_1001;
  /// `GLFW_LOSE_CONTEXT_ON_RESET`.
  pub const LOSE_CONTEXT_ON_RESET: i32 = 0x0003_1002;

  /// `GLFW_OPENGL_ANY_PROFILE`.
  pub const OPENGL_ANY_PROFILE: i32 = 0;
  /// `GLFW_OPENGL_CORE_PROFILE`.
  pub const OPENGL_CORE_PROFILE: i32 = 0x0003_2001;
  /// `GLFW_OPENGL_COMPAT_PROFILE`.
  pub const OPENGL_COMPAT_PROFILE: i32 = 0x0003_2002;
}

/// OpenGL codes, as returned by `glGetIntegerv`.
pub mod gl {
  /// `GL_CONTEXT_FLAG_FORWARD_COMPATIBLE_BIT`.
  pub const CONTEXT_FLAG_FORWARD_COMPATIBLE_BIT: i32 = 0x0000_0001;
  /// `GL_CONTEXT_FLAG_DEBUG_BIT`.
  pub const CONTEXT_FLAG_DEBUG_BIT: i32 = 0x0000_0002;
  /// `GL_CONTEXT_FLAG_ROBUST_ACCESS_BIT_ARB`.
  pub const CONTEXT_FLAG_ROBUST_ACCESS_BIT: i32 = 0x0000_0004;

  /// `GL_CONTEXT_CORE_PROFILE_BIT`.
  pub const CONTEXT_CORE_PROFILE_BIT: i32 = 0x0000_0001;
  /// `GL_CONTEXT_COMPATIBILITY_PROFILE_BIT`.
  pub const CONTEXT_COMPATIBILITY_PROFILE_BIT: i32 = 0x0000_0002;

  /// `GL_LOSE_CONTEXT_ON_RESET_ARB`.
  pub const LOSE_CONTEXT_ON_RESET: i32 = 0x8252;
  /// `GL_NO_RESET_NOTIFICATION_ARB`.
  pub const NO_RESET_NOTIFICATION: i32 = 0x8261;
}

/// Name of a client API, as reported by GLFW.
pub fn client_api_name(api: i32) -> &'static str {
  match api {
    glfw::OPENGL_API => "OpenGL",
    glfw::OPENGL_ES_API => "OpenGL ES",
    _ => UNKNOWN,
  }
}

/// Name of a profile mask, as reported by the driver (`GL_CONTEXT_PROFILE_MASK`).
///
/// The compatibility bit wins over the core bit if both are set.
pub fn gl_profile_name(mask: i32) -> &'static str {
  if mask & gl::CONTEXT_COMPATIBILITY_PROFILE_BIT != 0 {
    PROFILE_NAME_COMPAT
  } else if mask & gl::CONTEXT_CORE_PROFILE_BIT != 0 {
    PROFILE_NAME_CORE
  } else {
    UNKNOWN
  }
}

/// Name of a profile, as parsed by GLFW.
pub fn glfw_profile_name(profile: i32) -> &'static str {
  match profile {
    glfw::OPENGL_COMPAT_PROFILE => PROFILE_NAME_COMPAT,
    glfw::OPENGL_CORE_PROFILE => PROFILE_NAME_CORE,
    _ => UNKNOWN,
  }
}

/// Name of a reset notification strategy, as reported by the driver.
pub fn gl_strategy_name(strategy: i32) -> &'static str {
  match strategy {
    gl::LOSE_CONTEXT_ON_RESET => STRATEGY_NAME_LOSE,
    gl::NO_RESET_NOTIFICATION => STRATEGY_NAME_NONE,
    _ => UNKNOWN,
  }
}

/// Name of a reset notification strategy, as parsed by GLFW.
pub fn glfw_strategy_name(strategy: i32) -> &'static str {
  match strategy {
    glfw::LOSE_CONTEXT_ON_RESET => STRATEGY_NAME_LOSE,
    glfw::NO_RESET_NOTIFICATION => STRATEGY_NAME_NONE,
    _ => UNKNOWN,
  }
}

/// Names of the flags set in a `GL_CONTEXT_FLAGS` value, in a stable order.
///
/// Unknown bits are ignored.
pub fn gl_context_flag_names(flags: i32) -> Vec<&'static str> {
  let table = [
    (gl::CONTEXT_FLAG_FORWARD_COMPATIBLE_BIT, "forward-compatible"),
    (gl::CONTEXT_FLAG_DEBUG_BIT, "debug"),
    (gl::CONTEXT_FLAG_ROBUST_ACCESS_BIT, "robustness"),
  ];

  table
    .iter()
    .filter(|(bit, _)| flags & bit != 0)
    .map(|&(_, name)| name)
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn client_api() {
    assert_eq!(client_api_name(glfw::OPENGL_API), "OpenGL");
    assert_eq!(client_api_name(glfw::OPENGL_ES_API), "OpenGL ES");
    assert_eq!(client_api_name(glfw::NO_API), UNKNOWN);
    assert_eq!(client_api_name(-1), UNKNOWN);
  }

  #[test]
  fn profiles() {
    assert_eq!(gl_profile_name(gl::CONTEXT_CORE_PROFILE_BIT), "core");
    assert_eq!(
      gl_profile_name(gl::CONTEXT_COMPATIBILITY_PROFILE_BIT),
      "compat"
    );
    assert_eq!(gl_profile_name(0x3), "compat");
    assert_eq!(gl_profile_name(0), UNKNOWN);
    assert_eq!(gl_profile_name(0x10), UNKNOWN);

    assert_eq!(glfw_profile_name(glfw::OPENGL_CORE_PROFILE), "core");
    assert_eq!(glfw_profile_name(glfw::OPENGL_COMPAT_PROFILE), "compat");
    assert_eq!(glfw_profile_name(glfw::OPENGL_ANY_PROFILE), UNKNOWN);
  }

  #[test]
  fn strategies() {
    assert_eq!(gl_strategy_name(gl::LOSE_CONTEXT_ON_RESET), "lose");
    assert_eq!(gl_strategy_name(gl::NO_RESET_NOTIFICATION), "none");
    assert_eq!(glfw_strategy_name(glfw::LOSE_CONTEXT_ON_RESET), "lose");
    assert_eq!(glfw_strategy_name(glfw::NO_RESET_NOTIFICATION), "none");
    assert_eq!(glfw_strategy_name(glfw::NO_ROBUSTNESS), UNKNOWN);
  }

  #[test]
  fn vocabularies_are_independent() {
    // a GLFW code fed to the driver table (and vice versa) isn’t recognized
    assert_eq!(gl_strategy_name(glfw::LOSE_CONTEXT_ON_RESET), UNKNOWN);
    assert_eq!(glfw_strategy_name(gl::LOSE_CONTEXT_ON_RESET), UNKNOWN);
    assert_eq!(glfw_profile_name(gl::CONTEXT_CORE_PROFILE_BIT), UNKNOWN);
  }

  #[test]
  fn unknown_codes_never_render_empty() {
    for code in [i32::MIN, -1, 0, 7, 0x8000, i32::MAX] {
      for name in [
        client_api_name(code),
        glfw_profile_name(code),
        gl_strategy_name(code),
        glfw_strategy_name(code),
      ] {
        assert!(!name.is_empty());
      }
    }
  }

  #[test]
  fn context_flags() {
    assert!(gl_context_flag_names(0).is_empty());
    assert_eq!(
      gl_context_flag_names(0x7),
      vec!["forward-compatible", "debug", "robustness"]
    );
    assert_eq!(gl_context_flag_names(0x2 | 0x100), vec!["debug"]);
  }
}
