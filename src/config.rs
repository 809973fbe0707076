use serde::Deserialize;

/// Top-level crop catalog file.
///
/// ```toml
/// [[crop]]
/// name = "Wheat"
/// stages = [
///   { name = "Germination & Seedling", days = 15 },
///   { name = "Tillering Stage", days = 25 },
/// ]
/// ```
///
/// `[[crop]]` tables keep their file order, which becomes the menu order.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogToml {
    #[serde(default, rename = "crop")]
    pub crops: Vec<CropToml>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CropToml {
    pub name: String,
    #[serde(default)]
    pub stages: Vec<StageToml>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StageToml {
    pub name: String,
    pub days: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_crops_in_order() {
        let cfg: CatalogToml = toml::from_str(
            r#"
            [[crop]]
            name = "Okra"
            stages = [{ name = "Seedling", days = 12 }, { name = "Fruiting", days = 40 }]

            [[crop]]
            name = "Bean"
            stages = [{ name = "Growth", days = 60 }]
            "#,
        )
        .unwrap();
        assert_eq!(cfg.crops.len(), 2);
        assert_eq!(cfg.crops[0].name, "Okra");
        assert_eq!(cfg.crops[0].stages[1].days, 40);
        assert_eq!(cfg.crops[1].name, "Bean");
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = toml::from_str::<CatalogToml>(
            r#"
            [[crop]]
            name = "Okra"
            colour = "green"
            "#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn rejects_negative_days() {
        let err = toml::from_str::<CatalogToml>(
            r#"
            [[crop]]
            name = "Okra"
            stages = [{ name = "Seedling", days = -3 }]
            "#,
        );
        assert!(err.is_err());
    }
}
