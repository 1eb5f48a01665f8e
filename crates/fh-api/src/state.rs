use sqlx::PgPool;

use crate::config::{ApiConfig, Environment};

#[derive(Clone)]
pub struct ApiState {
    pub pool: PgPool,
    pub environment: Environment,
    pub bcrypt_cost: u32,
}

impl ApiState {
    pub fn new(config: &ApiConfig, pool: PgPool) -> Self {
        Self {
            pool,
            environment: config.environment.clone(),
            bcrypt_cost: config.bcrypt_cost,
        }
    }
}
