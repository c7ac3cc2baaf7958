use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {field} value: {value:?}")]
pub struct InvalidEnum {
    pub field: String,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// The string form doubles as the serde name.
macro_rules! str_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = InvalidEnum;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(ProcedureKind {
    Surgical => "quirurgico",
    NonSurgical => "no_quirurgico",
});

str_enum!(
    /// Which medication zone family a record came from.
    MedicationSource {
        Standard => "estandar",
        Reconciliation => "conciliacion",
        Plan => "plan",
    }
);

str_enum!(
    /// Report categories, named by their JSON key.
    Category {
        Patient => "paciente",
        Visits => "servicios",
        Medications => "medicamentos",
        Procedures => "procedimientos",
        LabOrders => "laboratorios",
        ImagingOrders => "imagenes",
        Diagnoses => "diagnosticos",
        Surgeries => "cirugias",
        Interconsults => "interconsultas",
        Evolutions => "evoluciones",
        Discharges => "altas",
    }
);

str_enum!(
    /// Which extractors a run enables. `Billing` gives the six-key billing
    /// summary; `Full` adds the clinical-event categories.
    ExtractorSet {
        Billing => "billing",
        Full => "full",
    }
);

impl Category {
    /// Categories present in every report, in output order.
    pub const BILLING: [Category; 6] = [
        Category::Patient,
        Category::Visits,
        Category::Medications,
        Category::Procedures,
        Category::LabOrders,
        Category::ImagingOrders,
    ];

    /// Categories only present with [`ExtractorSet::Full`], in output order.
    pub const CLINICAL: [Category; 5] = [
        Category::Diagnoses,
        Category::Surgeries,
        Category::Interconsults,
        Category::Evolutions,
        Category::Discharges,
    ];
}

impl ExtractorSet {
    /// Enabled categories in fixed report order.
    pub fn categories(&self) -> Vec<Category> {
        match self {
            Self::Billing => Category::BILLING.to_vec(),
            Self::Full => Category::BILLING
                .iter()
                .chain(Category::CLINICAL.iter())
                .copied()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn procedure_kind_serializes_to_spanish_tag() {
        assert_eq!(
            serde_json::to_string(&ProcedureKind::Surgical).unwrap(),
            "\"quirurgico\""
        );
        assert_eq!(
            serde_json::to_string(&ProcedureKind::NonSurgical).unwrap(),
            "\"no_quirurgico\""
        );
    }

    #[test]
    fn extractor_set_from_str() {
        assert_eq!(ExtractorSet::from_str("billing").unwrap(), ExtractorSet::Billing);
        assert_eq!(ExtractorSet::from_str("full").unwrap(), ExtractorSet::Full);
        let err = ExtractorSet::from_str("everything").unwrap_err();
        assert_eq!(err.field, "ExtractorSet");
        assert_eq!(err.value, "everything");
    }

    #[test]
    fn billing_set_has_six_categories() {
        let cats = ExtractorSet::Billing.categories();
        assert_eq!(cats.len(), 6);
        assert_eq!(cats[0], Category::Patient);
        assert_eq!(cats[5], Category::ImagingOrders);
    }

    #[test]
    fn full_set_appends_clinical_categories_in_order() {
        let cats = ExtractorSet::Full.categories();
        assert_eq!(cats.len(), 11);
        assert_eq!(&cats[6..], &Category::CLINICAL);
    }

    #[test]
    fn category_names_match_report_keys() {
        assert_eq!(Category::Visits.as_str(), "servicios");
        assert_eq!(Category::Discharges.to_string(), "altas");
    }
}
