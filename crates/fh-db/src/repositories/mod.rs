// All repository functions are generic over `E: Executor<'e, Database = Postgres>`
// so they accept both a `&PgPool` (direct query) and a `&mut Transaction` (atomic operations).

pub mod course;
pub mod reply;
pub mod stats;
pub mod topic;
pub mod user;
