use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    Enabled,
    Disabled,
}

impl ProductStatus {
    /// Statuses a storefront customer is allowed to see.
    pub fn visible() -> Vec<ProductStatus> {
        vec![ProductStatus::Enabled]
    }
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductStatus::Enabled => write!(f, "enabled"),
            ProductStatus::Disabled => write!(f, "disabled"),
        }
    }
}

impl std::str::FromStr for ProductStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "enabled" => Ok(ProductStatus::Enabled),
            "disabled" => Ok(ProductStatus::Disabled),
            _ => Err(format!("Invalid product status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductVisibility {
    /// Only reachable through a parent product.
    NotVisibleIndividually,
    Catalog,
    Search,
    CatalogSearch,
}

impl ProductVisibility {
    /// Visibilities that make a product listable on the storefront.
    pub fn visible_in_site() -> Vec<ProductVisibility> {
        vec![
            ProductVisibility::Catalog,
            ProductVisibility::Search,
            ProductVisibility::CatalogSearch,
        ]
    }
}

impl std::fmt::Display for ProductVisibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductVisibility::NotVisibleIndividually => write!(f, "not_visible_individually"),
            ProductVisibility::Catalog => write!(f, "catalog"),
            ProductVisibility::Search => write!(f, "search"),
            ProductVisibility::CatalogSearch => write!(f, "catalog_search"),
        }
    }
}

impl std::str::FromStr for ProductVisibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_visible_individually" => Ok(ProductVisibility::NotVisibleIndividually),
            "catalog" => Ok(ProductVisibility::Catalog),
            "search" => Ok(ProductVisibility::Search),
            "catalog_search" => Ok(ProductVisibility::CatalogSearch),
            _ => Err(format!("Invalid product visibility: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageRole {
    Base,
    Small,
    Thumbnail,
}

impl std::fmt::Display for ImageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageRole::Base => write!(f, "base"),
            ImageRole::Small => write!(f, "small"),
            ImageRole::Thumbnail => write!(f, "thumbnail"),
        }
    }
}

impl std::str::FromStr for ImageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "base" => Ok(ImageRole::Base),
            "small" => Ok(ImageRole::Small),
            "thumbnail" => Ok(ImageRole::Thumbnail),
            _ => Err(format!("Invalid image role: {}", s)),
        }
    }
}

/// Kind of merchandising link configured between two products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkType {
    UpSell,
    Related,
    CrossSell,
}

impl std::fmt::Display for LinkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkType::UpSell => write!(f, "up_sell"),
            LinkType::Related => write!(f, "related"),
            LinkType::CrossSell => write!(f, "cross_sell"),
        }
    }
}
