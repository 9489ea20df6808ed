pub mod clientes;
pub mod envios;
pub mod modelos;
