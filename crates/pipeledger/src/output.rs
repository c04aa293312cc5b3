use std::io::Write;

/// Render the pipeline results in the fixed report format.
///
/// Sections whose result never arrived are omitted; the diagnostics for
/// the failure have already gone to stderr.
pub fn render<W: Write>(
    out: &mut W,
    expenses: &[i64],
    cumulative: Option<&[i64]>,
    average: Option<f64>,
) -> std::io::Result<()> {
    writeln!(out, "Vector original de gastos (n={}):", expenses.len())?;
    writeln!(out, "{}", format_vector(expenses))?;
    writeln!(out)?;

    if let Some(values) = cumulative {
        writeln!(out, "Suma acumulada (Hijo 1):")?;
        writeln!(out, "{}", format_vector(values))?;
        writeln!(out)?;
    }

    if let Some(value) = average {
        writeln!(out, "Promedio mensual (Hijo 2): {value:.2}")?;
    }

    Ok(())
}

fn format_vector(values: &[i64]) -> String {
    let mut text = String::with_capacity(2 + values.len() * 8);
    text.push('[');
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            text.push_str(", ");
        }
        text.push_str(&value.to_string());
    }
    text.push(']');
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(
        expenses: &[i64],
        cumulative: Option<&[i64]>,
        average: Option<f64>,
    ) -> String {
        let mut buf = Vec::new();
        render(&mut buf, expenses, cumulative, average).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn full_report_layout() {
        let text = render_to_string(
            &[10_000, 20_000, 30_000],
            Some(&[10_000, 30_000, 60_000]),
            Some(20_000.0),
        );

        assert_eq!(
            text,
            "Vector original de gastos (n=3):\n\
             [10000, 20000, 30000]\n\
             \n\
             Suma acumulada (Hijo 1):\n\
             [10000, 30000, 60000]\n\
             \n\
             Promedio mensual (Hijo 2): 20000.00\n"
        );
    }

    #[test]
    fn single_element_report() {
        let text = render_to_string(&[7000], Some(&[7000]), Some(7000.0));

        assert!(text.contains("Vector original de gastos (n=1):\n[7000]"));
        assert!(text.contains("Suma acumulada (Hijo 1):\n[7000]"));
        assert!(text.contains("Promedio mensual (Hijo 2): 7000.00"));
    }

    #[test]
    fn average_rounds_to_two_decimals() {
        let text = render_to_string(&[5000], Some(&[5000]), Some(16_666.666_666));
        assert!(text.ends_with("Promedio mensual (Hijo 2): 16666.67\n"));
    }

    #[test]
    fn missing_results_omit_their_sections() {
        let text = render_to_string(&[5000, 6000, 7000], None, None);

        assert!(text.contains("Vector original de gastos (n=3):"));
        assert!(!text.contains("Suma acumulada"));
        assert!(!text.contains("Promedio mensual"));
    }

    #[test]
    fn empty_vector_formatting() {
        assert_eq!(format_vector(&[]), "[]");
        assert_eq!(format_vector(&[1]), "[1]");
        assert_eq!(format_vector(&[1, 2]), "[1, 2]");
    }
}
