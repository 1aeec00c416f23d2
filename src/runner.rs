pub mod ds;
pub mod plugin;
pub mod scenario;
pub mod std_lib;
