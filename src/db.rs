pub mod cliente_repo;
pub use cliente_repo::ClienteRepository;
pub mod modelo_repo;
pub use modelo_repo::ModeloRepository;
pub mod envio_repo;
pub use envio_repo::EnvioRepository;
