use anyhow::{bail, Result};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::model::{
    Department, DepartmentProduct, DepartmentSummary, Id, Pagination, Product, ProductRecord,
    ProductSummary,
};
use crate::store::traits::{DepartmentStore, ProductStore};

#[derive(Debug, Default)]
struct Tables {
    departments: BTreeMap<Id, Department>,
    products: BTreeMap<Id, ProductRecord>,
}

/// In-process catalog keyed by id, so iteration order matches `ORDER BY id`.
///
/// Department names are sorted by byte order. PostgreSQL sorts `ORDER BY name`
/// with the database collation, so names that differ in case, accents or
/// punctuation can come back in a different order there (`"apparel"` sorts
/// after `"Zebra"` here but usually before it under `en_US.UTF-8`).
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    /// When set every read fails, standing in for an unreachable database
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_department(&self, department: Department) {
        self.tables
            .write()
            .departments
            .insert(department.id, department);
    }

    /// Insert a product; its department must already exist.
    pub fn insert_product(&self, product: ProductRecord) -> Result<()> {
        let mut tables = self.tables.write();
        if !tables.departments.contains_key(&product.department_id) {
            bail!(
                "product {} references unknown department {}",
                product.id,
                product.department_id
            );
        }
        tables.products.insert(product.id, product);
        Ok(())
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            bail!("memory store marked unavailable");
        }
        Ok(())
    }
}

fn department_name(tables: &Tables, id: Id) -> String {
    tables
        .departments
        .get(&id)
        .map(|d| d.name.clone())
        .unwrap_or_default()
}

#[async_trait::async_trait]
impl ProductStore for MemoryStore {
    async fn list_products(&self, page: Pagination) -> Result<Vec<ProductSummary>> {
        self.check_available()?;
        let tables = self.tables.read();
        let window = page.window(tables.products.len());

        Ok(tables
            .products
            .values()
            .skip(window.start)
            .take(window.len())
            .map(|p| p.to_summary(&department_name(&tables, p.department_id)))
            .collect())
    }

    async fn get_product(&self, id: Id) -> Result<Option<Product>> {
        self.check_available()?;
        let tables = self.tables.read();

        Ok(tables.products.get(&id).map(|p| {
            let department = department_name(&tables, p.department_id);
            p.clone().into_product(department)
        }))
    }
}

#[async_trait::async_trait]
impl DepartmentStore for MemoryStore {
    async fn list_departments(&self) -> Result<Vec<DepartmentSummary>> {
        self.check_available()?;
        let tables = self.tables.read();

        let mut departments: Vec<DepartmentSummary> = tables
            .departments
            .values()
            .map(|d| DepartmentSummary {
                id: d.id,
                name: d.name.clone(),
                product_count: tables
                    .products
                    .values()
                    .filter(|p| p.department_id == d.id)
                    .count() as i64,
            })
            .collect();
        departments.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(departments)
    }

    async fn get_department(&self, id: Id) -> Result<Option<Department>> {
        self.check_available()?;
        Ok(self.tables.read().departments.get(&id).cloned())
    }

    async fn list_department_products(
        &self,
        department_id: Id,
        page: Pagination,
    ) -> Result<Vec<DepartmentProduct>> {
        self.check_available()?;
        let tables = self.tables.read();

        let matching: Vec<&ProductRecord> = tables
            .products
            .values()
            .filter(|p| p.department_id == department_id)
            .collect();
        let window = page.window(matching.len());

        Ok(matching[window]
            .iter()
            .map(|p| p.to_department_product())
            .collect())
    }
}
