use crate::report::{Report, Section};

use super::{View, ViewContext};

/// Static context entries (fact sheets, certification schemes, ...)
pub(super) fn render(ctx: &ViewContext<'_>, view: View) -> Report {
    let mut report = Report::new(view.name());
    let entries = view
        .context_topic()
        .map(|topic| ctx.api.context(topic))
        .unwrap_or_default();

    if entries.is_empty() {
        report.push(Section::notice("no context data loaded"));
    }
    for entry in entries {
        report.push(Section::text(entry.title.as_str(), entry.body.as_str()));
    }
    report
}
