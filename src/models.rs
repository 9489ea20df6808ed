pub mod cliente;
pub mod envio;
pub mod modelo;
