pub mod validate_ip;

pub use validate_ip::ValidateIpUseCase;
