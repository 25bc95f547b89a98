//! PostgreSQL implementation of the customer repository.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use super::CustomerRepository;
use crate::domain::{
    CreditFilter, Customer, CustomerFilter, CustomerId, CustomerOrder, CustomerUpdate,
};
use crate::error::GatewayError;

/// PostgreSQL-backed customer repository using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Creates a new repository with the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Row shape shared by every customer query.
type CustomerRow = (Uuid, String, i64);

fn row_to_customer((id, name, credit): CustomerRow) -> Customer {
    Customer {
        id: CustomerId::from_uuid(id),
        name,
        credit,
    }
}

/// Appends the `WHERE` clause described by `filter` to a query.
fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &CustomerFilter) {
    if let Some(name) = &filter.name {
        builder.push(" WHERE name LIKE ");
        builder.push_bind(name.like_pattern());
    }
    if let Some(credit) = &filter.credit {
        builder.push(if filter.name.is_some() {
            " AND "
        } else {
            " WHERE "
        });
        match *credit {
            CreditFilter::NotZero => {
                builder.push("credit <> 0");
            }
            CreditFilter::GreaterThan(bound) => {
                builder.push("credit > ");
                builder.push_bind(bound);
            }
            CreditFilter::Between { min, max } => {
                builder.push("credit >= ");
                builder.push_bind(min);
                builder.push(" AND credit < ");
                builder.push_bind(max);
            }
        }
    }
}

#[async_trait]
impl CustomerRepository for PostgresRepository {
    async fn check_connection(&self) -> Result<(), GatewayError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| GatewayError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    async fn insert(&self, customer: Customer) -> Result<Customer, GatewayError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            "INSERT INTO customers (id, name, credit) VALUES ($1, $2, $3) \
             RETURNING id, name, credit",
        )
        .bind(customer.id.as_uuid())
        .bind(&customer.name)
        .bind(customer.credit)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| GatewayError::DatabaseError(e.to_string()))?;

        Ok(row_to_customer(row))
    }

    async fn find_many(
        &self,
        filter: CustomerFilter,
        order: Option<CustomerOrder>,
    ) -> Result<Vec<Customer>, GatewayError> {
        let mut builder =
            QueryBuilder::<Postgres>::new("SELECT id, name, credit FROM customers");
        push_filter(&mut builder, &filter);
        if let Some(CustomerOrder::NameAsc) = order {
            builder.push(" ORDER BY name ASC");
        }

        let rows = builder
            .build_query_as::<CustomerRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| GatewayError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(row_to_customer).collect())
    }

    async fn update(
        &self,
        id: CustomerId,
        update: CustomerUpdate,
    ) -> Result<Customer, GatewayError> {
        // The service layer rejects empty updates before they reach here.
        let mut builder = QueryBuilder::<Postgres>::new("UPDATE customers SET ");
        let mut fields = builder.separated(", ");
        if let Some(name) = &update.name {
            fields.push("name = ");
            fields.push_bind_unseparated(name);
        }
        if let Some(credit) = update.credit {
            fields.push("credit = ");
            fields.push_bind_unseparated(credit);
        }
        builder.push(" WHERE id = ");
        builder.push_bind(id.as_uuid());
        builder.push(" RETURNING id, name, credit");

        let row = builder
            .build_query_as::<CustomerRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| GatewayError::DatabaseError(e.to_string()))?;

        row.map(row_to_customer)
            .ok_or(GatewayError::CustomerNotFound(id))
    }

    async fn delete(&self, id: CustomerId) -> Result<(), GatewayError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| GatewayError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(GatewayError::CustomerNotFound(id));
        }
        Ok(())
    }

    async fn sum_credit(&self) -> Result<i64, GatewayError> {
        // COALESCE pins the empty-table sum to 0.
        sqlx::query_scalar::<_, i64>("SELECT COALESCE(SUM(credit), 0)::BIGINT FROM customers")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| GatewayError::DatabaseError(e.to_string()))
    }

    async fn max_credit(&self) -> Result<Option<i64>, GatewayError> {
        sqlx::query_scalar::<_, Option<i64>>("SELECT MAX(credit) FROM customers")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| GatewayError::DatabaseError(e.to_string()))
    }

    async fn min_credit(&self) -> Result<Option<i64>, GatewayError> {
        sqlx::query_scalar::<_, Option<i64>>("SELECT MIN(credit) FROM customers")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| GatewayError::DatabaseError(e.to_string()))
    }

    async fn avg_credit(&self) -> Result<Option<f64>, GatewayError> {
        sqlx::query_scalar::<_, Option<f64>>(
            "SELECT AVG(credit::DOUBLE PRECISION) FROM customers",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| GatewayError::DatabaseError(e.to_string()))
    }
}
