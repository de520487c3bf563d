use serde::Serialize;

use crate::{
    areas::{AreaTable, SERVICE_TABLE},
    normalize::normalize,
};

/// Verdict returned for every address, however garbled.
///
/// `confidence` is a fixed tier per decision branch, not a probability.
/// The storefront gates checkout on `is_valid` and uses the tier to
/// decide how loudly to warn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: String,
    pub confidence: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

const MIN_ADDRESS_CHARS: usize = 10;

impl AreaTable {
    /// Classifies a free-form delivery address against this table.
    ///
    /// Rules run top to bottom, first match wins:
    /// 1. landmark, serviceable regardless of anything else (100)
    /// 2. service area and city qualifier (95)
    /// 3. service area alone (85, valid with a confirmation nudge)
    /// 4. city qualifier alone (90, rejected)
    /// 5. known out-of-service locality (95, rejected)
    /// 6. under 10 characters (50, rejected)
    /// 7. anything else (60, rejected)
    pub fn classify(&self, address: &str) -> ValidationResult {
        let normalized = normalize(address);

        if self.landmark.matches(&normalized) {
            return ValidationResult {
                is_valid: true,
                message: format!(
                    "✅ Alamat valid! Lokasi berada di sekitar {}.",
                    self.landmark.name
                ),
                confidence: 100,
                detected_area: Some(self.landmark.name.to_string()),
                suggestions: None,
            };
        }

        let service_area = self.find_service_area(&normalized);
        let in_city = self.city_matches(&normalized);

        match (service_area, in_city) {
            (Some(area), true) => ValidationResult {
                is_valid: true,
                message: format!(
                    "✅ Alamat valid! Lokasi berada di area {}, Depok.",
                    area.name
                ),
                confidence: 95,
                detected_area: Some(format!("{}, Depok", area.name)),
                suggestions: None,
            },
            (Some(area), false) => ValidationResult {
                is_valid: true,
                message: format!("✅ Alamat valid! Terdeteksi area {}.", area.name),
                confidence: 85,
                detected_area: Some(area.name.to_string()),
                suggestions: Some(vec![
                    "Pastikan alamat Anda berada di wilayah Kota Depok".to_string()
                ]),
            },
            (None, true) => ValidationResult {
                is_valid: false,
                message: format!(
                    "❌ Mohon maaf, untuk wilayah Depok kami hanya melayani area {} dan sekitar {}.",
                    self.service_area_names(),
                    self.landmark.name
                ),
                confidence: 90,
                detected_area: None,
                suggestions: Some(self.coverage_suggestions()),
            },
            (None, false) => self.classify_unserviced(&normalized),
        }
    }

    fn classify_unserviced(&self, normalized: &str) -> ValidationResult {
        if let Some(locality) = self.find_out_of_service(normalized) {
            return ValidationResult {
                is_valid: false,
                message: format!(
                    "❌ Mohon maaf, {} berada di luar jangkauan pengiriman kami.",
                    capitalize_first(locality)
                ),
                confidence: 95,
                detected_area: None,
                suggestions: Some(vec![
                    format!(
                        "Kami melayani area {} dan sekitar {} di Depok",
                        self.service_area_names(),
                        self.landmark.name
                    ),
                    "Hubungi admin melalui WhatsApp untuk pengiriman di luar area".to_string(),
                ]),
            };
        }

        if normalized.chars().count() < MIN_ADDRESS_CHARS {
            return ValidationResult {
                is_valid: false,
                message: "⚠️ Alamat terlalu pendek. Mohon tuliskan alamat lengkap Anda."
                    .to_string(),
                confidence: 50,
                detected_area: None,
                suggestions: Some(vec![
                    "Contoh: Jl. Raya Cimangis No. 12, Kota Depok".to_string()
                ]),
            };
        }

        ValidationResult {
            is_valid: false,
            message: "⚠️ Alamat belum jelas. Mohon sertakan nama area pada alamat Anda."
                .to_string(),
            confidence: 60,
            detected_area: None,
            suggestions: Some(vec![
                format!(
                    "Sertakan nama area: {}, atau {}",
                    self.service_area_names(),
                    self.landmark.name
                ),
                "Contoh: Jl. Pekapuran Raya No. 5, Cimangis, Kota Depok".to_string(),
            ]),
        }
    }

    fn coverage_suggestions(&self) -> Vec<String> {
        let mut suggestions: Vec<String> = self
            .service_areas
            .iter()
            .map(|area| format!("Area layanan: {}, Depok", area.name))
            .collect();
        suggestions.push(format!("Area layanan: sekitar {}", self.landmark.name));

        suggestions
    }
}

/// Classifies against the default coverage table.
pub fn classify(address: &str) -> ValidationResult {
    SERVICE_TABLE.classify(address)
}

// Only the leading character is uppercased, even for multi-word localities.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
