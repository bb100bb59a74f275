use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CompanyProfile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub about: &'static str,
    pub years_in_business: u32,
    pub certifications: &'static [&'static str],
    pub locations: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct Product {
    pub name: &'static str,
    pub spec: &'static str,
    pub pack: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ProductCategory {
    pub key: &'static str,
    pub title: &'static str,
    pub items: &'static [Product],
}

#[derive(Debug, Serialize)]
pub struct ProductCatalog {
    pub categories: &'static [ProductCategory],
}

pub static COMPANY_PROFILE: CompanyProfile = CompanyProfile {
    name: "NOVA LUBRICANTS",
    tagline: "Premium Oils & Greases for Every Machine",
    about: "NOVA LUBRICANTS manufactures high\u{2011}performance engine oils, industrial lubricants \
            and specialty greases for cars, bikes, scooters, trucks, and heavy machinery like JCB.",
    years_in_business: 10,
    certifications: &["ISO 9001:2015", "OEM Grade Approvals"],
    locations: &["Manufacturing Unit", "PAN-India Dealer Network"],
};

pub static PRODUCT_CATALOG: ProductCatalog = ProductCatalog {
    categories: &[
        ProductCategory {
            key: "car",
            title: "Car Engine Oils",
            items: &[
                Product { name: "5W-30 Fully Synthetic", spec: "API SN/CF", pack: "1L | 3.5L | 5L" },
                Product { name: "10W-40 Semi Synthetic", spec: "API SN", pack: "1L | 3L | 4L" },
            ],
        },
        ProductCategory {
            key: "bike",
            title: "Bike & 2T Oils",
            items: &[
                Product { name: "10W-30 4T", spec: "JASO MA2", pack: "900ml | 1L" },
                Product { name: "20W-40 4T", spec: "JASO MA", pack: "900ml | 1L" },
            ],
        },
        ProductCategory {
            key: "activa",
            title: "Scooter Oils",
            items: &[
                Product { name: "10W-30 Scooter Oil", spec: "JASO MB", pack: "800ml | 1L" },
            ],
        },
        ProductCategory {
            key: "truck",
            title: "Truck & Diesel Oils",
            items: &[
                Product { name: "15W-40 Diesel Engine Oil", spec: "API CI-4+", pack: "5L | 7.5L | 15L" },
                Product { name: "20W-50 Diesel Oil", spec: "API CH-4", pack: "5L | 15L | 50L" },
            ],
        },
        ProductCategory {
            key: "jcb",
            title: "Heavy Equipment & Greases",
            items: &[
                Product { name: "Lithium EP-2 Grease", spec: "NLGI 2", pack: "500g | 1kg | 18kg" },
                Product { name: "Hydraulic Oil AW-68", spec: "Anti-wear", pack: "5L | 20L | 210L" },
            ],
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_keys_unique() {
        let mut keys: Vec<_> = PRODUCT_CATALOG.categories.iter().map(|c| c.key).collect();
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }

    #[test]
    fn test_profile_serializes_in_declared_order() {
        let body = serde_json::to_string(&COMPANY_PROFILE).unwrap();
        assert!(body.starts_with(r#"{"name":"NOVA LUBRICANTS","tagline":"#));
        assert!(body.contains(r#""years_in_business":10"#));
    }
}
