use sqlx::PgPool;

#[derive(Clone)]
pub struct SqlxAlumniRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxJobRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxEventRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxAdminRepo {
    pub pool: PgPool,
}

impl SqlxAlumniRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxAlumniRepo { pool }
    }
}

impl SqlxJobRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxJobRepo { pool }
    }
}

impl SqlxEventRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxEventRepo { pool }
    }
}

impl SqlxAdminRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxAdminRepo { pool }
    }
}
