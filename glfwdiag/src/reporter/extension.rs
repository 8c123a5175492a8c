use crate::backend::{ContextQuery, Extensions, QueryError};
use crate::names;
use crate::report::Report;

/// Report the extensions supported by the current context, one per line.
///
/// Contexts newer than 2.x are queried extension by extension; older ones through the legacy
/// space-separated string. Fails if the indexed query isn’t available; nothing is appended past the
/// section title in that case.
pub fn extensions<C>(report: &mut Report, ctx: &C) -> Result<(), QueryError>
where
  C: ?Sized + ContextQuery,
{
  let attribs = ctx.attribs();
  let api = names::client_api_name(attribs.client_api);

  report.append_separator();
  report.append_line(format!("{} context supported extensions:", api));

  let extensions = if attribs.major > 2 {
    Extensions::Indexed(ctx.indexed_extensions()?)
  } else {
    Extensions::Legacy(ctx.legacy_extensions().unwrap_or_default())
  };

  for name in extensions.names() {
    report.append_line(name);
  }

  Ok(())
}
