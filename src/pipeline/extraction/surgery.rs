//! Surgical description blocks.
//!
//! One [`Surgery`] per `DESCRIPCION QUIRURGICA` zone. Every field comes from
//! its own pattern over the zone text, so any subset may be missing.

use std::sync::LazyLock;

use regex::Regex;

use super::patterns::{capture, RE_DATE};
use super::segment::find_zones;
use super::types::Document;
use crate::models::{Participant, Surgery};

static RE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"DESCRIPCI[OÓ]N\s+QUIR[UÚ]RGICA").unwrap());

static RE_PREOP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)Diagn[oó]stico\s+pre-?\s*operatorio\s*:?[ \t]*(.+)$").unwrap()
});
static RE_POSTOP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)Diagn[oó]stico\s+post-?\s*operatorio\s*:?[ \t]*(.+)$").unwrap()
});
static RE_ANESTHESIA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)(?:Tipo\s+de\s+)?Anestesia\s*:[ \t]*(.+)$").unwrap()
});
static RE_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Hora\s+(?:de\s+)?Inicio\s*:?\s*(\d{1,2}:\d{2}(?::\d{2})?)").unwrap()
});
static RE_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)Hora\s+(?:de\s+)?(?:Fin(?:al|alizaci[oó]n)?|Terminaci[oó]n)\s*:?\s*(\d{1,2}:\d{2}(?::\d{2})?)",
    )
    .unwrap()
});
static RE_DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)Descripci[oó]n(?:\s+(?:del\s+)?Procedimiento)?\s*:\s*(.*?)(?:Complicaci[oó]n(?:es)?|\z)",
    )
    .unwrap()
});
static RE_TISSUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)Tejidos?\s+(?:enviados?\s+)?(?:a\s+)?Patolog[ií]a\s*:?[ \t]*(.+)$").unwrap()
});
static RE_PARTICIPANT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^(\d{2,})[ \t]+(.+?)[ \t]+(CIRUJANO(?:[ \t]+PRINCIPAL)?|AYUDANTE(?:[ \t]+QUIRURGICO)?|ANESTESI[OÓ]LOGO|INSTRUMENTADORA?(?:[ \t]+QUIRURGIC[OA])?|CIRCULANTE|PERFUSIONISTA)[ \t]+(SI|NO)[ \t]*$",
    )
    .unwrap()
});

pub fn extract_surgeries(doc: &Document) -> Vec<Surgery> {
    let lines = doc.lines();
    find_zones(&lines, &RE_MARKER)
        .into_iter()
        .map(|zone| parse_block(&zone.text()))
        .collect()
}

fn parse_block(block: &str) -> Surgery {
    Surgery {
        preop_diagnosis: capture(&RE_PREOP, block, 1),
        postop_diagnosis: capture(&RE_POSTOP, block, 1),
        anesthesia: capture(&RE_ANESTHESIA, block, 1),
        date: capture(&RE_DATE, block, 1),
        start_time: capture(&RE_START, block, 1),
        end_time: capture(&RE_END, block, 1),
        description: capture(&RE_DESCRIPTION, block, 1)
            .map(|d| d.split_whitespace().collect::<Vec<_>>().join(" ")),
        pathology_tissue: capture(&RE_TISSUE, block, 1),
        participants: RE_PARTICIPANT
            .captures_iter(block)
            .map(|caps| Participant {
                code: caps[1].to_string(),
                name: caps[2].trim().to_string(),
                role: caps[3].to_string(),
                participated: &caps[4] == "SI",
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK: &str = "DESCRIPCIÓN QUIRÚRGICA
Fecha: 30/10/2025 Hora Inicio: 07:10 Hora Fin: 08:45
Diagnóstico preoperatorio: APENDICITIS AGUDA
Diagnóstico postoperatorio: APENDICITIS PERFORADA
Tipo de Anestesia: GENERAL
Descripción: Se realiza incisión
en fosa iliaca derecha
Complicaciones: ninguna
Tejidos enviados a patología: APENDICE CECAL
1020 JUAN PEREZ CIRUJANO PRINCIPAL SI
2040 ANA RUIZ AYUDANTE QUIRURGICO NO
3050 LUIS GOMEZ ANESTESIOLOGO SI";

    #[test]
    fn full_block_is_parsed() {
        let surgeries = extract_surgeries(&Document::from_raw(BLOCK));
        assert_eq!(surgeries.len(), 1);
        let s = &surgeries[0];
        assert_eq!(s.date.as_deref(), Some("30/10/2025"));
        assert_eq!(s.start_time.as_deref(), Some("07:10"));
        assert_eq!(s.end_time.as_deref(), Some("08:45"));
        assert_eq!(s.preop_diagnosis.as_deref(), Some("APENDICITIS AGUDA"));
        assert_eq!(s.postop_diagnosis.as_deref(), Some("APENDICITIS PERFORADA"));
        assert_eq!(s.anesthesia.as_deref(), Some("GENERAL"));
        assert_eq!(
            s.description.as_deref(),
            Some("Se realiza incisión en fosa iliaca derecha")
        );
        assert_eq!(s.pathology_tissue.as_deref(), Some("APENDICE CECAL"));
    }

    #[test]
    fn participants_with_roles() {
        let s = &extract_surgeries(&Document::from_raw(BLOCK))[0];
        assert_eq!(s.participants.len(), 3);
        assert_eq!(
            s.participants[0],
            Participant {
                code: "1020".into(),
                name: "JUAN PEREZ".into(),
                role: "CIRUJANO PRINCIPAL".into(),
                participated: true,
            }
        );
        assert_eq!(s.participants[1].role, "AYUDANTE QUIRURGICO");
        assert!(!s.participants[1].participated);
        assert_eq!(s.participants[2].role, "ANESTESIOLOGO");
    }

    #[test]
    fn description_runs_to_end_without_complication_label() {
        let s = parse_block("Descripción del procedimiento: drenaje\nde absceso");
        assert_eq!(s.description.as_deref(), Some("drenaje de absceso"));
    }

    #[test]
    fn sparse_block_keeps_missing_fields_absent() {
        let surgeries =
            extract_surgeries(&Document::from_raw("DESCRIPCION QUIRURGICA\nTipo de Anestesia: RAQUIDEA"));
        assert_eq!(surgeries.len(), 1);
        let s = &surgeries[0];
        assert_eq!(s.anesthesia.as_deref(), Some("RAQUIDEA"));
        assert!(s.preop_diagnosis.is_none());
        assert!(s.date.is_none());
        assert!(s.description.is_none());
        assert!(s.participants.is_empty());
    }

    #[test]
    fn each_marker_is_a_separate_surgery() {
        let raw = "DESCRIPCION QUIRURGICA\nAnestesia: LOCAL\nDESCRIPCION QUIRURGICA\nAnestesia: GENERAL";
        let surgeries = extract_surgeries(&Document::from_raw(raw));
        let kinds: Vec<_> = surgeries.iter().map(|s| s.anesthesia.as_deref()).collect();
        assert_eq!(kinds, vec![Some("LOCAL"), Some("GENERAL")]);
    }
}
