use anyhow::{Context as _, bail};

/// Employees service configuration loaded from environment variables.
#[derive(Debug)]
pub struct EmployeesConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`, otherwise composed
    /// from `DB_HOST`, `DB_USER`, `DB_PASS` and `DB_NAME`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 5000). Env var: `PORT`.
    pub port: u16,
}

const DEFAULT_PORT: u16 = 5000;

impl EmployeesConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = match lookup("DATABASE_URL") {
            Some(url) => url,
            None => database_url_from_parts(&lookup)?,
        };
        let port = match lookup("PORT") {
            Some(v) => v.parse().with_context(|| format!("invalid PORT: {v}"))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { database_url, port })
    }
}

fn database_url_from_parts(lookup: &impl Fn(&str) -> Option<String>) -> anyhow::Result<String> {
    let (Some(host), Some(user), Some(name)) =
        (lookup("DB_HOST"), lookup("DB_USER"), lookup("DB_NAME"))
    else {
        bail!("DATABASE_URL or DB_HOST, DB_USER and DB_NAME must be set");
    };
    let credentials = match lookup("DB_PASS") {
        Some(pass) if !pass.is_empty() => format!("{user}:{pass}"),
        _ => user,
    };
    Ok(format!("postgres://{credentials}@{host}/{name}"))
}
