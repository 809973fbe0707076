//! Ordered crop-name to growth-profile table.

use tracing::debug;

use crate::error::CatalogError;
use crate::profile::GrowthProfile;

/// Compiled-in crops as `(name, [(stage, days)])`.
///
/// Listed alphabetically; menu numbering follows this order.
const BUILTIN: &[(&str, &[(&str, u32)])] = &[
    (
        "Jute",
        &[
            ("Seedling Establishment", 20),
            ("Rapid Vegetative Growth", 60),
            ("Flowering & Pod Formation", 20),
            ("Maturity", 20),
        ],
    ),
    (
        "Mustard",
        &[
            ("Germination & Seedling", 15),
            ("Vegetative Growth (Rosette)", 30),
            ("Flowering Stage", 25),
            ("Pod Formation & Ripening", 25),
        ],
    ),
    (
        "Paddy (Boro)",
        &[
            ("Seedling Stage", 25),
            ("Tillering Stage", 30),
            ("Panicle Initiation", 30),
            ("Flowering Stage", 15),
            ("Maturity & Ripening", 30),
        ],
    ),
    (
        "Potato",
        &[
            ("Sprouting", 15),
            ("Vegetative Growth", 25),
            ("Tuber Initiation", 20),
            ("Tuber Bulking & Maturity", 30),
        ],
    ),
    (
        "Wheat",
        &[
            ("Germination & Seedling", 15),
            ("Tillering Stage", 25),
            ("Stem Extension (Jointing)", 25),
            ("Heading & Flowering", 20),
            ("Grain Filling & Maturity", 30),
        ],
    ),
];

/// A named crop and its growth profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crop {
    name: String,
    profile: GrowthProfile,
}

impl Crop {
    /// Returns the crop name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the crop's growth profile.
    pub fn profile(&self) -> &GrowthProfile {
        &self.profile
    }
}

/// Immutable-after-construction table of crops in a fixed, insertion-defined
/// order.
///
/// Menu choices are 1-based positions in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CropCatalog {
    crops: Vec<Crop>,
}

impl CropCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the compiled-in crop table.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for &(name, stages) in BUILTIN {
            let profile = GrowthProfile::from_pairs(stages.iter().copied())
                .expect("built-in crop stages are valid");
            catalog
                .insert(name, profile)
                .expect("built-in crop names are unique");
        }
        debug!(n_crops = catalog.len(), "loaded built-in crop catalog");
        catalog
    }

    /// Appends a crop at the end of the menu order.
    ///
    /// Surrounding whitespace is stripped from `name` before it is stored.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::BlankCropName`] if `name` is empty or only
    /// whitespace, and [`CatalogError::DuplicateCrop`] if a crop with the
    /// same name (compared case-insensitively) is already present.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        profile: GrowthProfile,
    ) -> Result<(), CatalogError> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::BlankCropName);
        }
        let name = name.to_string();
        if self.get(&name).is_some() {
            return Err(CatalogError::DuplicateCrop { name });
        }
        self.crops.push(Crop { name, profile });
        Ok(())
    }

    /// Looks up a crop by name, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<&Crop> {
        self.crops
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Looks up a crop by name.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownCrop`] if no crop matches.
    pub fn by_name(&self, name: &str) -> Result<&Crop, CatalogError> {
        self.get(name).ok_or_else(|| CatalogError::UnknownCrop {
            name: name.to_string(),
        })
    }

    /// Looks up a crop by its 1-based menu number.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidChoice`] if `choice` is 0 or larger
    /// than the number of crops.
    pub fn by_choice(&self, choice: usize) -> Result<&Crop, CatalogError> {
        choice
            .checked_sub(1)
            .and_then(|i| self.crops.get(i))
            .ok_or(CatalogError::InvalidChoice {
                choice,
                n_crops: self.crops.len(),
            })
    }

    /// Iterates over crops in menu order.
    pub fn iter(&self) -> std::slice::Iter<'_, Crop> {
        self.crops.iter()
    }

    /// Returns crop names in menu order.
    pub fn names(&self) -> Vec<&str> {
        self.crops.iter().map(|c| c.name.as_str()).collect()
    }

    /// Returns the number of crops.
    pub fn len(&self) -> usize {
        self.crops.len()
    }

    /// Returns `true` if the catalog has no crops.
    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }
}

impl<'a> IntoIterator for &'a CropCatalog {
    type Item = &'a Crop;
    type IntoIter = std::slice::Iter<'a, Crop>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
