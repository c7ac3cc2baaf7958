/// Normalize extracted page text before any extractor sees it.
/// Strips control characters, trims every line and drops blank lines, so a
/// run of line breaks always collapses to one.
///
/// Total and idempotent: `normalize_text(&normalize_text(t)) == normalize_text(t)`.
pub fn normalize_text(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_control() || matches!(c, '\n' | '\t'))
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
    fn strips_null_bytes_and_form_feeds() {
        let raw = "FOLIO 78\x00\nORDENES DE LABORATORIO\x0c\n1 HEMOGRAMA IV";
        let clean = normalize_text(raw);
        assert!(!clean.contains('\x00'));
        assert!(!clean.contains('\x0c'));
        assert_eq!(clean, "FOLIO 78\nORDENES DE LABORATORIO\n1 HEMOGRAMA IV");
    }

    #[test]
    fn collapses_blank_lines() {
        let raw = "Line one\n\n\n\nLine two\n \n\t\nLine three";
        assert_eq!(normalize_text(raw), "Line one\nLine two\nLine three");
    }

    #[test]
    fn trims_whitespace_per_line() {
        let raw = "   SEDE DE ATENCION 0304  \n\t  FOLIO 78   ";
        assert_eq!(normalize_text(raw), "SEDE DE ATENCION 0304\nFOLIO 78");
    }

    #[test]
    fn handles_crlf_line_endings() {
        let raw = "FORMULA MEDICA ESTANDAR\r\n1.00 OMEPRAZOL 20 MG\r\n";
        assert_eq!(normalize_text(raw), "FORMULA MEDICA ESTANDAR\n1.00 OMEPRAZOL 20 MG");
    }

    #[test]
    fn keeps_inner_tabs_and_spanish_text() {
        let raw = "Edad actual:45 AÑOS\tSexo: M\nDirección: Cra 5 # 10-20";
        assert_eq!(normalize_text(raw), raw);
    }

    #[test]
    fn empty_input_returns_empty() {
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_text("\n\n  \n"), "");
    }

    #[test]
    fn only_control_chars_returns_empty() {
        assert_eq!(normalize_text("\x00\x01\x02"), "");
    }

    #[test]
    fn normalizing_twice_changes_nothing() {
        let samples = [
            "",
            "\n",
            "  a  \n\n\n  b\r\n",
            "\x0cPAGE ONE\n\x0c\n  PAGE TWO \n\n",
            "HISTORIA CLINICA No. CC 123\n\n\t-- JUAN\n",
            "1.00 OMEPRAZOL\u{a0}\n\u{a0}\nDosis",
        ];
        for raw in samples {
            let once = normalize_text(raw);
            assert_eq!(normalize_text(&once), once, "not idempotent for {raw:?}");
        }
    }
}
