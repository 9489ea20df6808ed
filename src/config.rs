// src/config.rs

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::{
    db::{ClienteRepository, EnvioRepository, ModeloRepository},
    services::{ClienteService, EnvioService, ModeloService},
};

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub cliente_service: ClienteService,
    pub modelo_service: ModeloService,
    pub envio_service: EnvioService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        // As repositories recebem a pool explicitamente; nada de singleton
        // global, para manter os serviços testáveis em isolamento.
        let cliente_repo = ClienteRepository::new(db_pool.clone());
        let modelo_repo = ModeloRepository::new(db_pool.clone());
        let envio_repo = EnvioRepository::new(db_pool.clone());

        let cliente_service = ClienteService::new(cliente_repo.clone());
        let modelo_service = ModeloService::new(modelo_repo.clone());
        let envio_service = EnvioService::new(envio_repo, cliente_repo, modelo_repo);

        Ok(Self {
            db_pool,
            cliente_service,
            modelo_service,
            envio_service,
        })
    }
}
