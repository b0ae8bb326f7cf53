pub mod injected;
pub mod util;

pub use injected::InjectedProvider;
