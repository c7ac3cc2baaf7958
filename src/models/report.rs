use serde::{Deserialize, Serialize};

use super::diagnosis::Diagnosis;
use super::enums::{Category, ExtractorSet};
use super::medication::Medication;
use super::note::{Discharge, EvolutionNote, Interconsult};
use super::order::{ImagingOrder, LabOrder};
use super::patient::Patient;
use super::procedure::Procedure;
use super::surgery::Surgery;
use super::visit::ServiceVisit;

/// The structured summary of one clinical record.
///
/// The six billing keys are always present. Clinical-event keys are `Some`
/// only when the run enabled [`ExtractorSet::Full`], so key presence depends
/// on configuration alone and never on what the text contained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionReport {
    #[serde(rename = "paciente")]
    pub patient: Patient,
    #[serde(rename = "servicios")]
    pub visits: Vec<ServiceVisit>,
    #[serde(rename = "medicamentos")]
    pub medications: Vec<Medication>,
    #[serde(rename = "procedimientos")]
    pub procedures: Vec<Procedure>,
    #[serde(rename = "laboratorios")]
    pub lab_orders: Vec<LabOrder>,
    #[serde(rename = "imagenes")]
    pub imaging_orders: Vec<ImagingOrder>,
    #[serde(rename = "diagnosticos", default, skip_serializing_if = "Option::is_none")]
    pub diagnoses: Option<Vec<Diagnosis>>,
    #[serde(rename = "cirugias", default, skip_serializing_if = "Option::is_none")]
    pub surgeries: Option<Vec<Surgery>>,
    #[serde(rename = "interconsultas", default, skip_serializing_if = "Option::is_none")]
    pub interconsults: Option<Vec<Interconsult>>,
    #[serde(rename = "evoluciones", default, skip_serializing_if = "Option::is_none")]
    pub evolutions: Option<Vec<EvolutionNote>>,
    #[serde(rename = "altas", default, skip_serializing_if = "Option::is_none")]
    pub discharges: Option<Vec<Discharge>>,
}

impl ExtractionReport {
    /// An all-empty report with the key set of `extractors`.
    pub fn empty(extractors: ExtractorSet) -> Self {
        match extractors {
            ExtractorSet::Billing => Self::default(),
            ExtractorSet::Full => Self {
                diagnoses: Some(vec![]),
                surgeries: Some(vec![]),
                interconsults: Some(vec![]),
                evolutions: Some(vec![]),
                discharges: Some(vec![]),
                ..Self::default()
            },
        }
    }

    /// Record count for a category. `None` when the category is not part of
    /// this report; the patient counts as one record when any field was found.
    pub fn count(&self, category: Category) -> Option<usize> {
        match category {
            Category::Patient => Some(usize::from(!self.patient.is_empty())),
            Category::Visits => Some(self.visits.len()),
            Category::Medications => Some(self.medications.len()),
            Category::Procedures => Some(self.procedures.len()),
            Category::LabOrders => Some(self.lab_orders.len()),
            Category::ImagingOrders => Some(self.imaging_orders.len()),
            Category::Diagnoses => self.diagnoses.as_ref().map(Vec::len),
            Category::Surgeries => self.surgeries.as_ref().map(Vec::len),
            Category::Interconsults => self.interconsults.as_ref().map(Vec::len),
            Category::Evolutions => self.evolutions.as_ref().map(Vec::len),
            Category::Discharges => self.discharges.as_ref().map(Vec::len),
        }
    }

    /// `(category, count)` for every category present, in report order.
    pub fn summary(&self) -> Vec<(Category, usize)> {
        Category::BILLING
            .iter()
            .chain(Category::CLINICAL.iter())
            .filter_map(|&c| self.count(c).map(|n| (c, n)))
            .collect()
    }
}
