use crate::models::{CarModel, FilterRequest, Snapshot};
use thiserror::Error;

/// Horsepower value that disables filtering altogether
pub const ALL_HORSEPOWER: &str = "All";

/// Errors raised while interpreting filter criteria
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("Invalid horsepower range format: {0:?}")]
    RangeFormat(String),
}

/// Inclusive horsepower bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HorsepowerRange {
    pub min: i32,
    pub max: i32,
}

impl HorsepowerRange {
    /// Parse a `"min-max"` string
    ///
    /// Exactly two integer tokens separated by `-` are accepted, so a
    /// negative bound is rejected as a format error. Whitespace around a
    /// bound is a format error too.
    pub fn parse(raw: &str) -> Result<Self, FilterError> {
        let parts: Vec<&str> = raw.split('-').collect();
        let [min, max] = parts.as_slice() else {
            return Err(FilterError::RangeFormat(raw.to_string()));
        };

        let bound = |token: &str| {
            token
                .parse::<i32>()
                .map_err(|_| FilterError::RangeFormat(raw.to_string()))
        };

        Ok(Self {
            min: bound(*min)?,
            max: bound(*max)?,
        })
    }

    #[inline]
    pub fn contains(&self, horsepower: i32) -> bool {
        self.min <= horsepower && horsepower <= self.max
    }
}

/// Horsepower part of the filter criteria
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorsepowerFilter {
    /// The `"All"` sentinel: no filtering and no interest recorded
    All,
    /// No horsepower constraint; other criteria still apply
    Any,
    Range(HorsepowerRange),
}

impl HorsepowerFilter {
    pub fn parse(raw: &str) -> Result<Self, FilterError> {
        match raw.trim() {
            ALL_HORSEPOWER => Ok(Self::All),
            "" => Ok(Self::Any),
            range => HorsepowerRange::parse(range).map(Self::Range),
        }
    }
}

/// Parsed filter criteria; `None` places no constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub manufacturer: Option<String>,
    pub category: Option<String>,
    pub drivetrain: Option<String>,
    pub transmission: Option<String>,
    pub horsepower: HorsepowerFilter,
}

impl FilterCriteria {
    /// Build criteria from the raw form values
    pub fn from_request(req: &FilterRequest) -> Result<Self, FilterError> {
        let non_empty = |value: &str| (!value.is_empty()).then(|| value.to_string());

        Ok(Self {
            manufacturer: non_empty(&req.manufacturer),
            category: non_empty(&req.category),
            drivetrain: non_empty(&req.drivetrain),
            transmission: non_empty(&req.transmission),
            horsepower: HorsepowerFilter::parse(&req.horsepower)?,
        })
    }

    /// True for the sentinel that turns the whole filter into a no-op
    pub fn is_passthrough(&self) -> bool {
        self.horsepower == HorsepowerFilter::All
    }
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            manufacturer: None,
            category: None,
            drivetrain: None,
            transmission: None,
            horsepower: HorsepowerFilter::Any,
        }
    }
}

/// Map a raw transmission description to its broad class
///
/// Checked case-insensitively in order: manual, automatic, cvt. Anything
/// else passes through unchanged.
pub fn categorize_transmission(raw: &str) -> &str {
    let lower = raw.to_lowercase();

    if lower.contains("manual") {
        "Manual"
    } else if lower.contains("automatic") {
        "Automatic"
    } else if lower.contains("cvt") {
        "CVT"
    } else {
        raw
    }
}

/// Check a single model against every supplied criterion
#[inline]
pub fn matches_criteria(model: &CarModel, snapshot: &Snapshot, criteria: &FilterCriteria) -> bool {
    if let Some(manufacturer) = &criteria.manufacturer {
        if snapshot.manufacturer_name(model.manufacturer_id) != manufacturer.as_str() {
            return false;
        }
    }

    if let Some(category) = &criteria.category {
        if snapshot.category_name(model.category_id) != category.as_str() {
            return false;
        }
    }

    let specs = &model.specifications;

    if let Some(drivetrain) = &criteria.drivetrain {
        if &specs.drivetrain != drivetrain {
            return false;
        }
    }

    if let Some(transmission) = &criteria.transmission {
        if categorize_transmission(&specs.transmission) != transmission.as_str() {
            return false;
        }
    }

    if let HorsepowerFilter::Range(range) = criteria.horsepower {
        if !range.contains(specs.horsepower) {
            return false;
        }
    }

    true
}
