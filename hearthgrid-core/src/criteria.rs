use crate::{CoreError, SetTable};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const PAGE_SIZE: usize = 20;

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    Name,
    Cost,
    Attack,
    Health,
}

impl FromStr for SortField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SortField::Name),
            "cost" | "mana" => Ok(SortField::Cost),
            "attack" => Ok(SortField::Attack),
            "health" => Ok(SortField::Health),
            other => Err(CoreError::Invalid(format!("unknown sort field `{other}`"))),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortField::Name => "name",
            SortField::Cost => "cost",
            SortField::Attack => "attack",
            SortField::Health => "health",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

impl FromStr for SortOrder {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(CoreError::Invalid(format!("unknown sort order `{other}`"))),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        })
    }
}

/// Mana-cost bucket. Wire form is `""`, a number, or `"7+"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ManaBucket {
    #[default]
    Any,
    Exactly(u32),
    SevenPlus,
}

impl ManaBucket {
    /// The buckets offered by the gallery, in display order.
    pub const CHOICES: [ManaBucket; 8] = [
        ManaBucket::Any,
        ManaBucket::Exactly(1),
        ManaBucket::Exactly(2),
        ManaBucket::Exactly(3),
        ManaBucket::Exactly(4),
        ManaBucket::Exactly(5),
        ManaBucket::Exactly(6),
        ManaBucket::SevenPlus,
    ];

    pub fn matches(&self, cost: Option<u32>) -> bool {
        let cost = cost.unwrap_or(0);
        match self {
            ManaBucket::Any => true,
            ManaBucket::Exactly(n) => cost == *n,
            ManaBucket::SevenPlus => cost >= 7,
        }
    }

    pub fn label(&self) -> String {
        match self {
            ManaBucket::Any => "All".to_string(),
            ManaBucket::Exactly(n) => n.to_string(),
            ManaBucket::SevenPlus => "7+".to_string(),
        }
    }
}

impl FromStr for ManaBucket {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "" => Ok(ManaBucket::Any),
            "7+" => Ok(ManaBucket::SevenPlus),
            n => n
                .parse::<u32>()
                .map(ManaBucket::Exactly)
                .map_err(|_| CoreError::Invalid(format!("unknown mana bucket `{n}`"))),
        }
    }
}

impl fmt::Display for ManaBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManaBucket::Any => Ok(()),
            ManaBucket::Exactly(n) => write!(f, "{n}"),
            ManaBucket::SevenPlus => f.write_str("7+"),
        }
    }
}

impl Serialize for ManaBucket {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ManaBucket {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Everything the user can pick in the gallery. Empty strings mean "no
/// selection" for the class and set filters.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search: String,
    pub class: String,
    pub set_key: String,
    pub mana: ManaBucket,
    pub rotation_only: bool,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
    pub page: usize,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            class: String::new(),
            set_key: String::new(),
            mana: ManaBucket::Any,
            rotation_only: false,
            sort_by: SortField::Name,
            sort_order: SortOrder::Asc,
            page: 1,
        }
    }
}

/// Raw, string-typed criteria as they arrive from a command line or a
/// query string. Missing values fall back to the defaults.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CriteriaInput {
    pub search: Option<String>,
    pub class: Option<String>,
    pub set: Option<String>,
    pub mana: Option<String>,
    pub rotation: Option<bool>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub page: Option<usize>,
}

impl CriteriaInput {
    /// Validates against `sets`: a set key must exist in the table.
    pub fn into_criteria(self, sets: &SetTable) -> Result<FilterCriteria, CoreError> {
        let set_key = self.set.map(|s| s.trim().to_uppercase()).unwrap_or_default();
        if !set_key.is_empty() && sets.get(&set_key).is_none() {
            return Err(CoreError::Invalid(format!("unknown set `{set_key}`")));
        }
        Ok(FilterCriteria {
            search: self.search.unwrap_or_default(),
            class: self.class.map(|c| c.trim().to_uppercase()).unwrap_or_default(),
            set_key,
            mana: self.mana.as_deref().unwrap_or("").parse::<ManaBucket>()?,
            rotation_only: self.rotation.unwrap_or(false),
            sort_by: self.sort.as_deref().map(str::parse::<SortField>).transpose()?.unwrap_or_default(),
            sort_order: self.order.as_deref().map(str::parse::<SortOrder>).transpose()?.unwrap_or_default(),
            page: self.page.unwrap_or(1).max(1),
        })
    }
}
