use crate::models::*;

use super::error::CategoryFailure;

/// What one category extractor produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryOutput {
    Patient(Patient),
    Visits(Vec<ServiceVisit>),
    Medications(Vec<Medication>),
    Procedures(Vec<Procedure>),
    LabOrders(Vec<LabOrder>),
    ImagingOrders(Vec<ImagingOrder>),
    Diagnoses(Vec<Diagnosis>),
    Surgeries(Vec<Surgery>),
    Interconsults(Vec<Interconsult>),
    Evolutions(Vec<EvolutionNote>),
    Discharges(Vec<Discharge>),
}

impl CategoryOutput {
    pub fn category(&self) -> Category {
        match self {
            Self::Patient(_) => Category::Patient,
            Self::Visits(_) => Category::Visits,
            Self::Medications(_) => Category::Medications,
            Self::Procedures(_) => Category::Procedures,
            Self::LabOrders(_) => Category::LabOrders,
            Self::ImagingOrders(_) => Category::ImagingOrders,
            Self::Diagnoses(_) => Category::Diagnoses,
            Self::Surgeries(_) => Category::Surgeries,
            Self::Interconsults(_) => Category::Interconsults,
            Self::Evolutions(_) => Category::Evolutions,
            Self::Discharges(_) => Category::Discharges,
        }
    }

    /// Store into the matching report slot, replacing what was there.
    pub fn apply(self, report: &mut ExtractionReport) {
        match self {
            Self::Patient(p) => report.patient = p,
            Self::Visits(v) => report.visits = v,
            Self::Medications(v) => report.medications = v,
            Self::Procedures(v) => report.procedures = v,
            Self::LabOrders(v) => report.lab_orders = v,
            Self::ImagingOrders(v) => report.imaging_orders = v,
            Self::Diagnoses(v) => report.diagnoses = Some(v),
            Self::Surgeries(v) => report.surgeries = Some(v),
            Self::Interconsults(v) => report.interconsults = Some(v),
            Self::Evolutions(v) => report.evolutions = Some(v),
            Self::Discharges(v) => report.discharges = Some(v),
        }
    }
}

/// Result of one aggregation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionOutcome {
    pub report: ExtractionReport,
    pub failures: Vec<CategoryFailure>,
    pub duration_ms: u64,
}

impl ExtractionOutcome {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_fills_clinical_slot() {
        let mut report = ExtractionReport::default();
        CategoryOutput::Surgeries(vec![Surgery::default()]).apply(&mut report);
        assert_eq!(report.surgeries.as_ref().map(Vec::len), Some(1));
        assert_eq!(report.count(Category::Surgeries), Some(1));
    }

    #[test]
    fn output_reports_its_category() {
        let output = CategoryOutput::LabOrders(vec![]);
        assert_eq!(output.category(), Category::LabOrders);
    }
}
