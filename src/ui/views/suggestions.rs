use green_habits::Suggestion;

use crate::ui::primitives::icon::Icon;

pub fn render_suggestions(
    suggestions: &[Suggestion],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!(
        "{} Actionable suggestions to reduce carbon footprint:\n",
        Icon::Leaf.colored(supports_color, supports_unicode)
    );
    for suggestion in suggestions {
        out.push_str(&format!("- {}: {}\n", suggestion.activity, suggestion.benefit));
    }
    out
}
