use crate::record::DistributionRecord;
use crate::standardize::standardize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Default,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    /// The active set was replaced by this many standardized records.
    Replaced { records: usize },
    /// Standardization produced nothing; the active set is unchanged.
    Rejected,
}

// supplier, customer, license, category, model, lot, serial, udid, date
const DEFAULT_ROWS: &[[&str; 9]] = &[
    ["SUP-MEDI", "HOSP-TPE-01", "MOHW-MD-0012345", "Cardiology", "Cardio X1", "LOT-402", "SN-92938", "04712345678901", "2024-01-01"],
    ["SUP-MEDI", "HOSP-TPE-01", "MOHW-MD-0012345", "Cardiology", "Cardio X1", "LOT-402", "SN-92939", "04712345678901", "2024-01-01"],
    ["SUP-MEDI", "CLIN-KHH-07", "MOHW-MD-0012345", "Cardiology", "Cardio X1", "LOT-403", "SN-93010", "04712345678901", "2024-01-03"],
    ["SUP-NEUR", "HOSP-TXG-02", "MOHW-MD-0023456", "Neurology", "Neuro Y2", "LOT-511", "SN-10021", "04712345678918", "2024-01-04"],
    ["SUP-NEUR", "HOSP-TPE-01", "MOHW-MD-0023456", "Neurology", "Neuro Y2", "LOT-511", "SN-10022", "04712345678918", "2024-01-05"],
    ["SUP-ORTH", "HOSP-TXG-02", "MOHW-MD-0034567", "Orthopedics", "Ortho Z3", "LOT-620", "SN-20400", "04712345678925", "2024-01-08"],
    ["SUP-ORTH", "CLIN-TNN-03", "MOHW-MD-0034567", "Orthopedics", "Ortho Z3", "LOT-620", "SN-20401", "04712345678925", "2024-01-08"],
    ["SUP-DERM", "CLIN-KHH-07", "MOHW-MD-0045678", "Dermatology", "Derma A1", "LOT-733", "SN-30555", "04712345678932", "2024-01-10"],
    ["SUP-VISN", "CLIN-TNN-03", "MOHW-MD-0056789", "Radiology", "Vision B2", "LOT-840", "SN-40110", "04712345678949", "2024-01-12"],
    ["SUP-MEDI", "HOSP-TXG-02", "MOHW-MD-0012399", "Cardiology", "Cardio X2", "LOT-404", "SN-93100", "04712345678956", "2024-01-15"],
];

/// Built-in dataset used until custom input is loaded.
pub fn default_dataset() -> Vec<DistributionRecord> {
    DEFAULT_ROWS
        .iter()
        .map(|row| DistributionRecord {
            supplier_id: row[0].to_string(),
            customer_id: row[1].to_string(),
            license_no: row[2].to_string(),
            category: row[3].to_string(),
            model: row[4].to_string(),
            lot_no: row[5].to_string(),
            serial_no: row[6].to_string(),
            udid: row[7].to_string(),
            delivery_date: row[8].to_string(),
        })
        .collect()
}

/// The single record set a front end works against. Loading new input
/// replaces it wholesale; failed input leaves it alone.
#[derive(Debug, Clone)]
pub struct ActiveDataset {
    records: Vec<DistributionRecord>,
    source: DataSource,
}

impl Default for ActiveDataset {
    fn default() -> Self {
        Self { records: default_dataset(), source: DataSource::Default }
    }
}

impl ActiveDataset {
    pub fn new() -> Self { Self::default() }

    pub fn records(&self) -> &[DistributionRecord] { &self.records }

    pub fn source(&self) -> DataSource { self.source }

    pub fn len(&self) -> usize { self.records.len() }

    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn load_default(&mut self) {
        self.records = default_dataset();
        self.source = DataSource::Default;
    }

    pub fn replace_from_raw(&mut self, raw: &str) -> IngestOutcome {
        self.replace_with(standardize(raw))
    }

    /// Installs already-standardized records under the same rules as
    /// [`ActiveDataset::replace_from_raw`].
    pub fn replace_with(&mut self, records: Vec<DistributionRecord>) -> IngestOutcome {
        if records.is_empty() {
            tracing::warn!(active = self.records.len(), "input produced no records; keeping active dataset");
            return IngestOutcome::Rejected;
        }
        let n = records.len();
        self.records = records;
        self.source = DataSource::Custom;
        tracing::info!(records = n, "active dataset replaced");
        IngestOutcome::Replaced { records: n }
    }
}
