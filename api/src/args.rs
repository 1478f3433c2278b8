use clap::{Args as ClapArgs, Parser, ValueEnum};
use larder_core::domain::{
    common::{AuthConfig, DatabaseConfig, LLMConfig, LarderConfig},
    recipe::policies::GenerationAccess,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "larder-api", version, about = "Larder recipe API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`.
    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long, env = "SERVER_TLS_CERT")]
    pub tls_cert: Option<String>,

    #[arg(long, env = "SERVER_TLS_KEY")]
    pub tls_key: Option<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(long, env = "DATABASE_HOST", default_value = "localhost")]
    pub database_host: String,

    #[arg(long, env = "DATABASE_PORT", default_value_t = 5432)]
    pub database_port: u16,

    #[arg(long, env = "DATABASE_USER", default_value = "postgres")]
    pub database_user: String,

    #[arg(long, env = "DATABASE_PASSWORD", default_value = "postgres")]
    pub database_password: String,

    #[arg(long, env = "DATABASE_NAME", default_value = "larder")]
    pub database_name: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long, env = "LLM_API_KEY")]
    pub llm_api_key: String,

    #[arg(long, env = "LLM_BASE_URL", default_value = "https://api.openai.com/v1")]
    pub llm_base_url: String,

    #[arg(long, env = "LLM_MODEL", default_value = "gpt-4.1-nano")]
    pub llm_model: String,

    #[arg(long, env = "LLM_TIMEOUT_SECS", default_value_t = 30)]
    pub llm_timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GenerationAccessArg {
    Public,
    Authenticated,
}

impl From<GenerationAccessArg> for GenerationAccess {
    fn from(value: GenerationAccessArg) -> Self {
        match value {
            GenerationAccessArg::Public => GenerationAccess::Public,
            GenerationAccessArg::Authenticated => GenerationAccess::Authenticated,
        }
    }
}

#[derive(Debug, Clone, ClapArgs)]
pub struct AuthArgs {
    #[arg(long, env = "AUTH_JWT_SECRET")]
    pub auth_jwt_secret: String,

    #[arg(long, env = "AUTH_ISSUER")]
    pub auth_issuer: Option<String>,

    #[arg(long, env = "AUTH_AUDIENCE")]
    pub auth_audience: Option<String>,

    /// Whether anonymous callers may generate recipes.
    #[arg(long, env = "GENERATION_ACCESS", value_enum, default_value_t = GenerationAccessArg::Public)]
    pub generation_access: GenerationAccessArg,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,

    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

impl From<Args> for LarderConfig {
    fn from(args: Args) -> Self {
        LarderConfig {
            database: DatabaseConfig {
                host: args.db.database_host,
                port: args.db.database_port,
                username: args.db.database_user,
                password: args.db.database_password,
                name: args.db.database_name,
            },
            llm: LLMConfig {
                api_key: args.llm.llm_api_key,
                base_url: args.llm.llm_base_url,
                model: args.llm.llm_model,
                timeout_secs: args.llm.llm_timeout_secs,
            },
            auth: AuthConfig {
                jwt_secret: args.auth.auth_jwt_secret,
                issuer: args.auth.auth_issuer,
                audience: args.auth.auth_audience,
                generation_access: args.auth.generation_access.into(),
            },
        }
    }
}
