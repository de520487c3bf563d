//! # Area Tables
//!
//! The coverage knowledge base, kept as plain data so the coverage can
//! change without touching the decision logic.
//!
//! ## Schema
//! - One landmark that is always serviceable regardless of city naming
//! - Service areas in priority order, the first match names the verdict
//! - City-qualifier variants
//! - Out-of-service localities, used only for the rejection message
//!
//! Variants are lowercase spellings, abbreviations, and common typos.
//! Lists are de-duplicated; a repeated variant carries no extra weight.

/// A named area together with the spellings that resolve to it.
pub struct Area {
    pub name: &'static str,
    pub variants: &'static [&'static str],
}

impl Area {
    pub fn matches(&self, normalized: &str) -> bool {
        self.variants
            .iter()
            .any(|variant| normalized.contains(variant))
    }
}

/// Coverage table consumed by the classifier.
pub struct AreaTable {
    pub landmark: Area,
    pub service_areas: &'static [Area],
    pub city_variants: &'static [&'static str],
    pub out_of_service: &'static [&'static str],
}

impl AreaTable {
    pub fn find_service_area(&self, normalized: &str) -> Option<&Area> {
        self.service_areas
            .iter()
            .find(|area| area.matches(normalized))
    }

    pub fn city_matches(&self, normalized: &str) -> bool {
        self.city_variants
            .iter()
            .any(|variant| normalized.contains(variant))
    }

    pub fn find_out_of_service(&self, normalized: &str) -> Option<&'static str> {
        self.out_of_service
            .iter()
            .copied()
            .find(|locality| normalized.contains(locality))
    }

    /// Service area names joined for user-facing messages, in priority order.
    pub fn service_area_names(&self) -> String {
        self.service_areas
            .iter()
            .map(|area| area.name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Default coverage for the Depok storefront.
pub static SERVICE_TABLE: AreaTable = AreaTable {
    landmark: Area {
        name: "SMK Taruna Bhakti",
        variants: &["taruna bhakti", "taruna bakti", "tarunabhakti", "smk tb", "tb"],
    },
    service_areas: &[
        Area {
            name: "Cimangis",
            variants: &["cimangis", "cimanggis", "cimangiz", "cimanggiz", "ci manggis"],
        },
        Area {
            name: "Pekapuran",
            variants: &["pekapuran", "pakapuran", "pkapuran"],
        },
    ],
    city_variants: &["depok", "kota depok"],
    out_of_service: &[
        "jakarta",
        "bogor",
        "tangerang",
        "bekasi",
        "cikarang",
        "cibubur",
        "cileungsi",
        "citayam",
        "bojong gede",
        "sawangan",
        "cinere",
        "lenteng agung",
    ],
};
