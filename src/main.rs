use anyhow::Context;
use saga_kernel::settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load SAGA settings")?;

    saga_app::run(settings).await
}
