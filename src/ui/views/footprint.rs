use crossterm::style::Stylize;

use green_habits::Footprint;

use crate::ui::primitives::icon::Icon;

pub fn render_footprint(
    footprint: &Footprint,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();

    if footprint.is_empty() {
        out.push_str(&format!(
            "{} No activities recorded yet.\n",
            Icon::Info.colored(supports_color, supports_unicode)
        ));
    }

    for line in &footprint.lines {
        out.push_str(&format!(
            "{} units of {} contribute to {:.2} kg CO2.\n",
            line.quantity, line.activity, line.emissions
        ));
    }

    let total = format!("{:.2}", footprint.total);
    let total = if supports_color {
        total.bold().to_string()
    } else {
        total
    };
    out.push_str(&format!("Total carbon emissions: {} kg CO2.\n", total));
    out
}
