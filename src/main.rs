// src/main.rs

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod models;
mod services;

use crate::config::AppState;

#[tokio::main]
async fn main() {
    // Inicializa o logger
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    let clientes_routes = Router::new()
        .route(
            "/",
            post(handlers::clientes::criar_cliente).get(handlers::clientes::listar_clientes),
        )
        .route(
            "/{id}",
            put(handlers::clientes::atualizar_cliente)
                .delete(handlers::clientes::excluir_cliente),
        );

    let modelos_routes = Router::new()
        .route(
            "/email",
            post(handlers::modelos::criar_modelo_email)
                .get(handlers::modelos::listar_modelos_email),
        )
        .route(
            "/email/{id}",
            put(handlers::modelos::atualizar_modelo_email)
                .delete(handlers::modelos::excluir_modelo_email),
        )
        .route(
            "/email/{id}/extrair-variaveis",
            post(handlers::modelos::reextrair_modelo_email),
        )
        .route(
            "/whatsapp",
            post(handlers::modelos::criar_modelo_whatsapp)
                .get(handlers::modelos::listar_modelos_whatsapp),
        )
        .route(
            "/whatsapp/{id}",
            put(handlers::modelos::atualizar_modelo_whatsapp)
                .delete(handlers::modelos::excluir_modelo_whatsapp),
        )
        .route(
            "/whatsapp/{id}/extrair-variaveis",
            post(handlers::modelos::reextrair_modelo_whatsapp),
        )
        .route(
            "/extrair-variaveis",
            post(handlers::modelos::extrair_variaveis),
        );

    let envios_routes = Router::new()
        .route("/", get(handlers::envios::listar_envios))
        .route("/email", post(handlers::envios::enviar_email))
        .route("/whatsapp", post(handlers::envios::enviar_whatsapp))
        .route("/preview", post(handlers::envios::preview))
        .route("/{id}", delete(handlers::envios::excluir_envio));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/clientes", clientes_routes)
        .nest("/api/modelos", modelos_routes)
        .nest("/api/envios", envios_routes)
        .with_state(app_state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()));

    // Inicia o servidor
    let addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
