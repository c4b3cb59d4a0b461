use anyhow::{Context, Result};
use sqlx::{postgres::PgPoolOptions, postgres::PgRow, PgPool, Row};

use crate::config::DatabaseConfig;
use crate::model::{
    Department, DepartmentProduct, DepartmentSummary, Id, Pagination, Product, ProductSummary,
};
use crate::store::traits::{DepartmentStore, ProductStore};

#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new PostgreSQL store from the database section of the config
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let options = config
            .connect_options()
            .context("Invalid database connection settings")?;
        let pool = PgPoolOptions::new()
            .max_connections(config.pool_size())
            .connect_with(options)
            .await
            .context("Failed to create PostgreSQL connection pool")?;

        Ok(Self { pool })
    }

    /// Wrap an already configured pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

// NUMERIC prices are read as float8 so they serialize as JSON numbers.
fn product_summary(row: PgRow) -> ProductSummary {
    ProductSummary {
        id: row.get("id"),
        name: row.get("name"),
        brand: row.get("brand"),
        retail_price: row.get("retail_price"),
        department: row.get("department"),
    }
}

fn department_product(row: PgRow) -> DepartmentProduct {
    DepartmentProduct {
        id: row.get("id"),
        name: row.get("name"),
        brand: row.get("brand"),
        retail_price: row.get("retail_price"),
    }
}

#[async_trait::async_trait]
impl ProductStore for PostgresStore {
    async fn list_products(&self, page: Pagination) -> Result<Vec<ProductSummary>> {
        let rows = sqlx::query(
            r#"
            SELECT p.id, p.name, p.brand, p.retail_price::float8 AS retail_price, d.name AS department
            FROM products p
            JOIN departments d ON d.id = p.department_id
            ORDER BY p.id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .context("Failed to list products")?;

        Ok(rows.into_iter().map(product_summary).collect())
    }

    async fn get_product(&self, id: Id) -> Result<Option<Product>> {
        let row = sqlx::query(
            r#"
            SELECT p.id, p.name, p.brand, p.retail_price::float8 AS retail_price,
                   p.department_id, p.category, d.name AS department
            FROM products p
            JOIN departments d ON d.id = p.department_id
            WHERE p.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch product")?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(Some(Product {
            id: row.get("id"),
            name: row.get("name"),
            brand: row.get("brand"),
            retail_price: row.get("retail_price"),
            department_id: row.get("department_id"),
            category: row.get("category"),
            department: row.get("department"),
        }))
    }
}

#[async_trait::async_trait]
impl DepartmentStore for PostgresStore {
    async fn list_departments(&self) -> Result<Vec<DepartmentSummary>> {
        let rows = sqlx::query(
            r#"
            SELECT d.id, d.name, COUNT(p.id) AS product_count
            FROM departments d
            LEFT JOIN products p ON p.department_id = d.id
            GROUP BY d.id, d.name
            ORDER BY d.name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list departments")?;

        let departments = rows
            .into_iter()
            .map(|row| DepartmentSummary {
                id: row.get("id"),
                name: row.get("name"),
                product_count: row.get("product_count"),
            })
            .collect();

        Ok(departments)
    }

    async fn get_department(&self, id: Id) -> Result<Option<Department>> {
        let row = sqlx::query("SELECT id, name FROM departments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch department")?;

        Ok(row.map(|row| Department {
            id: row.get("id"),
            name: row.get("name"),
        }))
    }

    async fn list_department_products(
        &self,
        department_id: Id,
        page: Pagination,
    ) -> Result<Vec<DepartmentProduct>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, brand, retail_price::float8 AS retail_price
            FROM products
            WHERE department_id = $1
            ORDER BY id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(department_id)
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .context("Failed to list department products")?;

        Ok(rows.into_iter().map(department_product).collect())
    }
}
