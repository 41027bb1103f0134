/// Sanitize OCR output before parsing.
/// Strips control characters and stray symbols, keeps everything a lab
/// report legitimately uses: units, brackets, range separators.
pub fn sanitize_report_text(raw: &str) -> String {
    raw.chars()
        .filter(|c| {
            c.is_alphanumeric()
                || c.is_whitespace()
                || matches!(
                    c,
                    '.' | ','
                        | ';'
                        | ':'
                        | '%'
                        | '/'
                        | '('
                        | ')'
                        | '['
                        | ']'
                        | '<'
                        | '>'
                        | '+'
                        | '*'
                        | '#'
                        | '\''
                        | '°'
                        | '²'
                        | '³'
                        | 'µ'
                        | '-'
                        | '~' // OCR often reads the range dash as a tilde
                        | '\u{2013}' // en dash –
                        | '\u{2014}' // em dash —
                        | '\u{2212}' // minus sign −
                )
        })
        .collect::<String>()
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_null_bytes() {
        let raw = "Hemoglobin\x0014.2 g/dL";
        let clean = sanitize_report_text(raw);
        assert!(!clean.contains('\x00'));
        assert!(clean.contains("14.2"));
    }

    #[test]
    fn strips_control_characters() {
        let raw = "Glucose 95 mg/dL\x01\x02\nSodium 140 mmol/L";
        let clean = sanitize_report_text(raw);
        assert!(!clean.contains('\x01'));
        assert_eq!(clean, "Glucose 95 mg/dL\nSodium 140 mmol/L");
    }

    #[test]
    fn preserves_units_and_ranges() {
        let raw = "Potassium 4.2 mmol/L (3.5-5.0)";
        assert_eq!(sanitize_report_text(raw), raw);
    }

    #[test]
    fn preserves_angle_bracket_ranges() {
        let raw = "Creatinine 1.1 mg/dL <0.7-1.3>";
        assert_eq!(sanitize_report_text(raw), raw);
    }

    #[test]
    fn preserves_dash_variants() {
        let raw = "TSH 2.1 mIU/L 0.4\u{2013}4.0\nFree T4 1.2 ng/dL 0.8\u{2014}1.8";
        let clean = sanitize_report_text(raw);
        assert!(clean.contains('\u{2013}'));
        assert!(clean.contains('\u{2014}'));
    }

    #[test]
    fn preserves_tilde_read_for_a_dash() {
        let raw = "Iron 85 ug/dL 60~170";
        assert_eq!(sanitize_report_text(raw), raw);
    }

    #[test]
    fn preserves_micro_and_degree_symbols() {
        let raw = "B12 550 µg/L at 37°C, CO² noted";
        let clean = sanitize_report_text(raw);
        assert!(clean.contains("µg/L"));
        assert!(clean.contains("37°C"));
    }

    #[test]
    fn drops_stray_ocr_symbols() {
        let raw = "Glucose| 95 mg/dL @ 70-100 $";
        let clean = sanitize_report_text(raw);
        assert!(!clean.contains('|'));
        assert!(!clean.contains('@'));
        assert!(!clean.contains('$'));
        assert!(clean.contains("Glucose 95 mg/dL"));
    }

    #[test]
    fn collapses_blank_lines() {
        let raw = "HEMATOLOGY\n\n\n\nHemoglobin 14.2 g/dL\n\n";
        assert_eq!(sanitize_report_text(raw), "HEMATOLOGY\nHemoglobin 14.2 g/dL");
    }

    #[test]
    fn trims_whitespace_per_line() {
        let raw = "  CHEMISTRY  \n  Glucose 95 mg/dL  ";
        assert_eq!(sanitize_report_text(raw), "CHEMISTRY\nGlucose 95 mg/dL");
    }

    #[test]
    fn empty_input_returns_empty() {
        assert_eq!(sanitize_report_text(""), "");
        assert_eq!(sanitize_report_text("\x00\x01\x02"), "");
    }
}
