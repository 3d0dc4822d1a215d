use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use business::domain::catalog::model::{CatalogProduct, ProductImage};
use business::domain::catalog::query::{CatalogQuery, ProductOrder};
use business::domain::catalog::repository::CatalogRepository;
use business::domain::catalog::value_objects::LinkType;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::ProductId;

use super::entity::{CatalogProductEntity, ProductImageEntity};

const PRODUCT_COLUMNS: &str =
    "p.entity_id, p.sku, p.name, p.status, p.visibility, p.attributes, p.created_at";

pub struct CatalogRepositoryPostgres {
    pool: PgPool,
}

impl CatalogRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_images(
        &self,
        ids: &[i64],
    ) -> Result<HashMap<i64, Vec<ProductImage>>, RepositoryError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, ProductImageEntity>(
            "SELECT product_id, role, file FROM catalog_product_images WHERE product_id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        let mut images: HashMap<i64, Vec<ProductImage>> = HashMap::new();
        for row in rows {
            let product_id = row.product_id;
            if let Some(image) = row.into_domain() {
                images.entry(product_id).or_default().push(image);
            }
        }
        Ok(images)
    }

    async fn with_images(
        &self,
        entities: Vec<CatalogProductEntity>,
    ) -> Result<Vec<CatalogProduct>, RepositoryError> {
        let ids: Vec<i64> = entities.iter().map(|e| e.entity_id).collect();
        let mut images = self.load_images(&ids).await?;

        entities
            .into_iter()
            .map(|e| {
                let product_images = images.remove(&e.entity_id).unwrap_or_default();
                e.into_domain(product_images)
            })
            .collect()
    }
}

/// Translates a catalog query into SQL. Rows outside the store, hidden by
/// status or visibility, or outside the candidate ids never leave the database.
pub fn build_find_query(query: &CatalogQuery) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT ");
    builder.push(PRODUCT_COLUMNS);

    if query.with_url_rewrites() {
        builder.push(", r.request_path AS url_path");
    } else {
        builder.push(", NULL::text AS url_path");
    }
    if query.with_minimal_price() {
        builder.push(", w.min_price AS minimal_price");
    } else {
        builder.push(", NULL::numeric AS minimal_price");
    }

    builder.push(
        " FROM catalog_products p \
         JOIN catalog_product_websites w ON w.product_id = p.entity_id AND w.store_id = ",
    );
    builder.push_bind(query.store_id().value());
    if query.with_url_rewrites() {
        builder.push(
            " LEFT JOIN catalog_url_rewrites r \
             ON r.product_id = p.entity_id AND r.store_id = w.store_id",
        );
    }

    let statuses: Vec<String> = query.statuses().iter().map(|s| s.to_string()).collect();
    let visibilities: Vec<String> = query.visibilities().iter().map(|v| v.to_string()).collect();
    builder.push(" WHERE p.status = ANY(");
    builder.push_bind(statuses);
    builder.push(") AND p.visibility = ANY(");
    builder.push_bind(visibilities);
    builder.push(")");

    let candidate_ids: Option<Vec<i64>> = query
        .product_ids()
        .map(|ids| ids.iter().map(|id| id.value()).collect());
    if let Some(ids) = &candidate_ids {
        builder.push(" AND p.entity_id = ANY(");
        builder.push_bind(ids.clone());
        builder.push(")");
    }

    match (query.order(), candidate_ids) {
        (ProductOrder::CandidateOrder, Some(ids)) => {
            builder.push(" ORDER BY array_position(");
            builder.push_bind(ids);
            builder.push("::bigint[], p.entity_id)");
        }
        (ProductOrder::NewestFirst, _) => {
            builder.push(" ORDER BY p.entity_id DESC");
        }
        (ProductOrder::Random, _) => {
            builder.push(" ORDER BY random()");
        }
        (ProductOrder::Position, _) | (ProductOrder::CandidateOrder, None) => {
            builder.push(" ORDER BY p.entity_id ASC");
        }
    }

    if let Some(page_size) = query.page_size() {
        builder.push(" LIMIT ");
        builder.push_bind(i64::try_from(page_size).unwrap_or(i64::MAX));
    }

    builder
}

#[async_trait]
impl CatalogRepository for CatalogRepositoryPostgres {
    async fn find(&self, query: &CatalogQuery) -> Result<Vec<CatalogProduct>, RepositoryError> {
        let mut builder = build_find_query(query);
        let entities = builder
            .build_query_as::<CatalogProductEntity>()
            .fetch_all(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        self.with_images(entities).await
    }

    async fn get_by_id(&self, id: ProductId) -> Result<CatalogProduct, RepositoryError> {
        let entity = sqlx::query_as::<_, CatalogProductEntity>(&format!(
            "SELECT {}, NULL::text AS url_path, NULL::numeric AS minimal_price \
             FROM catalog_products p WHERE p.entity_id = $1",
            PRODUCT_COLUMNS
        ))
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        self.with_images(vec![entity])
            .await?
            .pop()
            .ok_or(RepositoryError::NotFound)
    }

    async fn linked_product_ids(
        &self,
        id: ProductId,
        link_type: LinkType,
    ) -> Result<Vec<ProductId>, RepositoryError> {
        let ids = sqlx::query_scalar::<_, i64>(
            "SELECT linked_product_id FROM catalog_product_links \
             WHERE product_id = $1 AND link_type = $2 \
             ORDER BY position ASC, linked_product_id ASC",
        )
        .bind(id.value())
        .bind(link_type.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(ids.into_iter().map(ProductId::new).collect())
    }
}
