use green_habits::EmissionFactors;

pub fn render_factors(factors: &EmissionFactors) -> String {
    let width = factors.iter().map(|(id, _)| id.len()).max().unwrap_or(0);

    let mut out = String::from("Emission factors (kg CO2 per unit):\n");
    for (activity, factor) in factors.iter() {
        out.push_str(&format!("  {:<width$}  {:.3}\n", activity, factor, width = width));
    }
    out
}
