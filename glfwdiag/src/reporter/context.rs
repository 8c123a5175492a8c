use crate::backend::{ContextAttribs, ContextQuery, ContextString};
use crate::names::{self, glfw};
use crate::report::Report;

/// Extension gating the robustness strategy query.
const ROBUSTNESS_EXTENSION: &str = "GL_ARB_robustness";

/// Report the current context.
///
/// Values reported by the driver are always printed next to the ones parsed by the windowing
/// library. Flags, profile and robustness strategy are only queried when the context supports
/// them.
pub fn context<C>(report: &mut Report, ctx: &C)
where
  C: ?Sized + ContextQuery,
{
  let attribs = ctx.attribs();
  let api = names::client_api_name(attribs.client_api);

  report.append_separator();
  report.append_line(format!(
    "{} context version string: \"{}\"",
    api,
    string_or_empty(ctx, ContextString::Version)
  ));
  report.append_line(format!(
    "{} context version parsed by GLFW: {}.{}.{}",
    api, attribs.major, attribs.minor, attribs.revision
  ));

  if attribs.client_api == glfw::OPENGL_API {
    if attribs.major >= 3 {
      context_flags(report, ctx, api, &attribs);
    }

    if attribs.version_at_least(3, 2) {
      let mask = ctx.profile_mask();
      report.append_line(format!(
        "{} profile mask (0x{:08x}): {}",
        api,
        mask,
        names::gl_profile_name(mask)
      ));
      report.append_line(format!(
        "{} profile mask parsed by GLFW: {}",
        api,
        names::glfw_profile_name(attribs.profile)
      ));
    }

    if ctx.extension_supported(ROBUSTNESS_EXTENSION) {
      let strategy = ctx.reset_notification_strategy();
      report.append_line(format!(
        "{} robustness strategy (0x{:08x}): {}",
        api,
        strategy,
        names::gl_strategy_name(strategy)
      ));
      report.append_line(format!(
        "{} robustness strategy parsed by GLFW: {}",
        api,
        names::glfw_strategy_name(attribs.robustness)
      ));
    }
  }

  report.append_line(format!(
    "{} context renderer string: \"{}\"",
    api,
    string_or_empty(ctx, ContextString::Renderer)
  ));
  report.append_line(format!(
    "{} context vendor string: \"{}\"",
    api,
    string_or_empty(ctx, ContextString::Vendor)
  ));

  if attribs.major > 1 {
    report.append_line(format!(
      "{} context shading language version: \"{}\"",
      api,
      string_or_empty(ctx, ContextString::ShadingLanguageVersion)
    ));
  }
}

fn context_flags<C>(report: &mut Report, ctx: &C, api: &str, attribs: &ContextAttribs)
where
  C: ?Sized + ContextQuery,
{
  let flags = ctx.context_flags();
  let mut line = format!("{} context flags (0x{:08x}):", api, flags);
  for name in names::gl_context_flag_names(flags) {
    line.push(' ');
    line.push_str(name);
  }
  report.append_line(line);

  let mut line = format!("{} context flags parsed by GLFW:", api);
  if attribs.forward_compat {
    line.push_str(" forward-compatible");
  }
  if attribs.debug {
    line.push_str(" debug");
  }
  if attribs.robustness != glfw::NO_ROBUSTNESS {
    line.push_str(" robustness");
  }
  report.append_line(line);
}

fn string_or_empty<C>(ctx: &C, which: ContextString) -> String
where
  C: ?Sized + ContextQuery,
{
  ctx.string(which).unwrap_or_default()
}
