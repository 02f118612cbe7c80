//! Tunnel Profile Infrastructure Layer
pub mod compiler;
pub mod engine;
pub mod tun;
