use serde::{Deserialize, Serialize};

pub const DEFAULT_PARTY: &str = "UNKNOWN";
pub const DEFAULT_LICENSE: &str = "PENDING";
pub const DEFAULT_CATEGORY: &str = "General";
pub const DEFAULT_MODEL: &str = "Standard";

/// One canonical distribution row. Every field is always populated after
/// standardization, so filters and views can slice and match unconditionally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionRecord {
    pub supplier_id: String,
    pub customer_id: String,
    pub license_no: String,
    pub category: String,
    pub model: String,
    pub lot_no: String,
    pub serial_no: String,
    pub udid: String,
    pub delivery_date: String,
}

/// The canonical string fields of a [`DistributionRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordField {
    SupplierId,
    CustomerId,
    LicenseNo,
    Category,
    Model,
    LotNo,
    SerialNo,
    Udid,
    DeliveryDate,
}

impl RecordField {
    pub const ALL: [RecordField; 9] = [
        RecordField::SupplierId,
        RecordField::CustomerId,
        RecordField::LicenseNo,
        RecordField::Category,
        RecordField::Model,
        RecordField::LotNo,
        RecordField::SerialNo,
        RecordField::Udid,
        RecordField::DeliveryDate,
    ];

    /// camelCase name as it appears in serialized records.
    pub fn name(self) -> &'static str {
        match self {
            RecordField::SupplierId => "supplierId",
            RecordField::CustomerId => "customerId",
            RecordField::LicenseNo => "licenseNo",
            RecordField::Category => "category",
            RecordField::Model => "model",
            RecordField::LotNo => "lotNo",
            RecordField::SerialNo => "serialNo",
            RecordField::Udid => "udid",
            RecordField::DeliveryDate => "deliveryDate",
        }
    }

    pub fn from_name(name: &str) -> Option<RecordField> {
        RecordField::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Fixed default for fields with a static sentinel. `DeliveryDate` depends
    /// on the clock and is filled in by the standardizer.
    pub fn static_default(self) -> &'static str {
        match self {
            RecordField::SupplierId | RecordField::CustomerId => DEFAULT_PARTY,
            RecordField::LicenseNo => DEFAULT_LICENSE,
            RecordField::Category => DEFAULT_CATEGORY,
            RecordField::Model => DEFAULT_MODEL,
            RecordField::LotNo
            | RecordField::SerialNo
            | RecordField::Udid
            | RecordField::DeliveryDate => "",
        }
    }
}

impl DistributionRecord {
    pub fn get(&self, field: RecordField) -> &str {
        match field {
            RecordField::SupplierId => &self.supplier_id,
            RecordField::CustomerId => &self.customer_id,
            RecordField::LicenseNo => &self.license_no,
            RecordField::Category => &self.category,
            RecordField::Model => &self.model,
            RecordField::LotNo => &self.lot_no,
            RecordField::SerialNo => &self.serial_no,
            RecordField::Udid => &self.udid,
            RecordField::DeliveryDate => &self.delivery_date,
        }
    }

    /// Builds a record from a per-field lookup, falling back to the field
    /// defaults when the lookup yields nothing or an empty string.
    pub fn from_lookup<F>(default_date: &str, mut lookup: F) -> Self
    where
        F: FnMut(RecordField) -> Option<String>,
    {
        let mut resolve = |field: RecordField| {
            match lookup(field) {
                Some(v) if !v.is_empty() => v,
                _ if field == RecordField::DeliveryDate => default_date.to_string(),
                _ => field.static_default().to_string(),
            }
        };
        DistributionRecord {
            supplier_id: resolve(RecordField::SupplierId),
            customer_id: resolve(RecordField::CustomerId),
            license_no: resolve(RecordField::LicenseNo),
            category: resolve(RecordField::Category),
            model: resolve(RecordField::Model),
            lot_no: resolve(RecordField::LotNo),
            serial_no: resolve(RecordField::SerialNo),
            udid: resolve(RecordField::Udid),
            delivery_date: resolve(RecordField::DeliveryDate),
        }
    }
}

/// First `n` characters of `s` (not bytes).
pub(crate) fn char_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
