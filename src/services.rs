pub mod cliente_service;
pub use cliente_service::ClienteService;
pub mod modelo_service;
pub use modelo_service::ModeloService;
pub mod envio_service;
pub use envio_service::EnvioService;
