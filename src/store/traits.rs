use crate::model::{Department, DepartmentProduct, DepartmentSummary, Id, Pagination, Product, ProductSummary};
use anyhow::Result;

/// Read-only product queries.
#[async_trait::async_trait]
pub trait ProductStore: Send + Sync {
    /// One page of products ordered by id, each with its department name
    async fn list_products(&self, page: Pagination) -> Result<Vec<ProductSummary>>;
    /// Full product row with its department name
    async fn get_product(&self, id: Id) -> Result<Option<Product>>;
}

/// Read-only department queries.
#[async_trait::async_trait]
pub trait DepartmentStore: Send + Sync {
    /// All departments ordered by name, with product counts
    async fn list_departments(&self) -> Result<Vec<DepartmentSummary>>;
    async fn get_department(&self, id: Id) -> Result<Option<Department>>;
    /// One page of a department's products ordered by id. Callers check the
    /// department exists first; an unknown id yields an empty page.
    async fn list_department_products(
        &self,
        department_id: Id,
        page: Pagination,
    ) -> Result<Vec<DepartmentProduct>>;
}

pub trait Store: ProductStore + DepartmentStore + Send + Sync {}
impl<T: ProductStore + DepartmentStore + Send + Sync> Store for T {}
