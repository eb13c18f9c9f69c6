pub mod story;

use saga_kernel::ModuleRegistry;
use sqlx::PgPool;

/// Register all project-specific modules with the registry
pub fn register_all(registry: &mut ModuleRegistry, pool: &PgPool) {
    registry.register(story::create_module(pool.clone()));
}
