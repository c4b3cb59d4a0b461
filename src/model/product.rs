use crate::model::Id;
use serde::{Deserialize, Serialize};

/// A product row as stored, before any join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: Id,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub retail_price: f64,
    pub department_id: Id,
    pub category: Option<String>,
}

impl ProductRecord {
    pub fn new(
        id: Id,
        name: impl Into<String>,
        brand: impl Into<String>,
        retail_price: f64,
        department_id: Id,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: Some(name.into()),
            brand: Some(brand.into()),
            retail_price,
            department_id,
            category: Some(category.into()),
        }
    }

    pub fn into_product(self, department: String) -> Product {
        Product {
            id: self.id,
            name: self.name,
            brand: self.brand,
            retail_price: self.retail_price,
            department_id: self.department_id,
            category: self.category,
            department,
        }
    }

    pub fn to_summary(&self, department: &str) -> ProductSummary {
        ProductSummary {
            id: self.id,
            name: self.name.clone(),
            brand: self.brand.clone(),
            retail_price: self.retail_price,
            department: department.to_string(),
        }
    }

    pub fn to_department_product(&self) -> DepartmentProduct {
        DepartmentProduct {
            id: self.id,
            name: self.name.clone(),
            brand: self.brand.clone(),
            retail_price: self.retail_price,
        }
    }
}

/// Full product detail, including the owning department's name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Id,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub retail_price: f64,
    pub department_id: Id,
    pub category: Option<String>,
    pub department: String,
}

/// Card data for the catalog-wide product list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: Id,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub retail_price: f64,
    pub department: String,
}

/// Card data inside a department page; the department is implied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentProduct {
    pub id: Id,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub retail_price: f64,
}
