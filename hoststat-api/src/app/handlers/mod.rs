mod fallback;
mod index;
mod stats;

pub use fallback::handler_404;
pub use index::index;
pub use stats::{get_cpu_info, get_ram_info, get_storage_info, get_system_info};
