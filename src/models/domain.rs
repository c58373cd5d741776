use serde::{Deserialize, Serialize};

/// Name reported for a model whose manufacturer id has no match
pub const UNKNOWN_MANUFACTURER: &str = "Unknown Manufacturer";

/// Name reported for a model whose category id has no match
pub const UNKNOWN_CATEGORY: &str = "Unknown Category";

/// Car manufacturer as served by the manufacturers source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manufacturer {
    pub id: i64,
    pub name: String,
    pub country: String,
    #[serde(rename = "foundingYear")]
    pub founding_year: i32,
}

/// Vehicle category (SUV, Sedan, ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Technical specifications embedded in every car model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Specifications {
    pub engine: String,
    pub horsepower: i32,
    pub transmission: String,
    pub drivetrain: String,
}

/// Car model with foreign keys into the manufacturer and category lists
///
/// The keys are plain ids. A key with no matching record is valid and
/// resolves to the unknown sentinels on [`Snapshot`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CarModel {
    pub id: i64,
    pub name: String,
    #[serde(rename = "manufacturerId")]
    pub manufacturer_id: i64,
    #[serde(rename = "categoryId")]
    pub category_id: i64,
    pub year: i32,
    pub specifications: Specifications,
    pub image: String,
}

impl CarModel {
    /// True for the zero-value record handed out for unmatched ids
    pub fn is_placeholder(&self) -> bool {
        *self == CarModel::default()
    }
}

/// Selects which manufacturer attribute [`Snapshot::manufacturer_detail`] renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManufacturerDetail {
    Name,
    Country,
    FoundingYear,
}

/// One complete fetch of all three catalog sources
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub manufacturers: Vec<Manufacturer>,
    pub categories: Vec<Category>,
    #[serde(rename = "carModels")]
    pub car_models: Vec<CarModel>,
}

impl Snapshot {
    pub fn manufacturer(&self, id: i64) -> Option<&Manufacturer> {
        self.manufacturers.iter().find(|m| m.id == id)
    }

    pub fn model(&self, id: i64) -> Option<&CarModel> {
        self.car_models.iter().find(|m| m.id == id)
    }

    /// Manufacturer name for a model, or [`UNKNOWN_MANUFACTURER`]
    pub fn manufacturer_name(&self, id: i64) -> &str {
        self.manufacturer(id)
            .map(|m| m.name.as_str())
            .unwrap_or(UNKNOWN_MANUFACTURER)
    }

    /// Render a single manufacturer attribute, empty when the id is dangling
    pub fn manufacturer_detail(&self, id: i64, detail: ManufacturerDetail) -> String {
        match self.manufacturer(id) {
            Some(m) => match detail {
                ManufacturerDetail::Name => m.name.clone(),
                ManufacturerDetail::Country => m.country.clone(),
                ManufacturerDetail::FoundingYear => m.founding_year.to_string(),
            },
            None => String::new(),
        }
    }

    /// Category name for a model, or [`UNKNOWN_CATEGORY`]
    pub fn category_name(&self, id: i64) -> &str {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
            .unwrap_or(UNKNOWN_CATEGORY)
    }
}

/// Pair of models resolved for a side-by-side comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub left: CarModel,
    pub right: CarModel,
}

impl Comparison {
    pub fn into_vec(self) -> Vec<CarModel> {
        vec![self.left, self.right]
    }
}

/// Interest weights applied to the preference table
#[derive(Debug, Clone, Copy)]
pub struct InterestWeights {
    /// Bump for every model surviving a filter query
    pub soft: f64,
    /// Bump for every model explicitly picked for comparison
    pub hard: f64,
}

impl Default for InterestWeights {
    fn default() -> Self {
        Self {
            soft: 0.5,
            hard: 1.0,
        }
    }
}

/// Strictly-greater horsepower check used to highlight the stronger model
#[inline]
pub fn compare_horsepower(a: i32, b: i32) -> bool {
    a > b
}
